//! HTTP plumbing for the detection backend
//!
//! Client side:
//! - `fetch_json` / `post_json` - JSON helpers that turn every failure into `None`
//! - `ApiClient` - `DetectionApi` over HTTP
//!
//! Replay backend (for demos and tests), serving the same contract:
//! - GET /get_results - Next scripted detection snapshot
//! - POST /api/results - Accept a result record (kept in memory)
//! - GET /health - Health check

mod api;
mod client;
mod handlers;
mod routes;
mod state;

pub use api::DetectionApi;
pub use client::{fetch_json, post_json, ApiClient};
pub use routes::create_router;
pub use state::{AppState, SavedReport};
