//! Detection session management
//!
//! This module provides the `SessionController` that manages:
//! - Start/stop lifecycle and the dashboard controls
//! - Stats polling against the detection backend
//! - The elapsed-time display
//! - Saving a result record

mod config;
mod controller;
mod record;
mod state;

pub use config::SessionConfig;
pub use controller::SessionController;
pub use record::{format_hms, ResultRecord};
pub use state::SessionState;
