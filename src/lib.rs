pub mod app;
pub mod config;
pub mod dashboard;
pub mod detection;
pub mod http;
pub mod notify;
pub mod session;

pub use app::{AppContext, Command};
pub use config::Config;
pub use dashboard::{render_alerts, AlertRow, AlertsView, Dashboard};
pub use detection::{DetectionSnapshot, WarningLevel};
pub use http::{create_router, ApiClient, AppState, DetectionApi};
pub use notify::{Notification, Notifier, Severity};
pub use session::{ResultRecord, SessionConfig, SessionController, SessionState};
