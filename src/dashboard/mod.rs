//! Dashboard view model
//!
//! Typed stand-ins for the page elements the session controller drives:
//! start/stop buttons, status indicator, timer, score, status value,
//! frame counter, alerts container and (camera page only) the video panel.

mod alerts;
mod render;
mod view;

pub use alerts::{render_alerts, AlertRow, AlertsView, ALERT_ICON, NO_ALERTS_TEXT};
pub use view::{
    Button, Dashboard, StatusIndicator, VideoOverlay, VideoPanel, RUNNING_BACKGROUND,
    STOPPED_BACKGROUND, VIDEO_ERROR_TEXT,
};
