use super::alerts::AlertsView;
use crate::detection::WarningLevel;

pub const RUNNING_BACKGROUND: &str = "#d4edda";
pub const STOPPED_BACKGROUND: &str = "#f8d7da";
pub const VIDEO_ERROR_TEXT: &str = "Error loading video stream";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusIndicator {
    pub background: &'static str,
    /// The nested `.status-text` element
    pub text: String,
}

/// Overlay drawn over the video stream until it loads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoOverlay {
    pub visible: bool,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoPanel {
    pub stream_url: String,
    pub overlay: VideoOverlay,
}

/// Every element the session controller reads or writes.
///
/// Stands in for the page markup, so every element always exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub start_button: Button,
    pub stop_button: Button,
    pub status_indicator: StatusIndicator,
    pub timer: String,
    pub cheating_score: String,
    pub status_value: String,
    pub frame_count: u64,
    pub alerts: AlertsView,
    /// Only present on the camera page
    pub video: Option<VideoPanel>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self {
            start_button: Button {
                label: "Start",
                disabled: false,
            },
            stop_button: Button {
                label: "Stop",
                disabled: true,
            },
            status_indicator: StatusIndicator {
                background: STOPPED_BACKGROUND,
                text: "Idle".to_string(),
            },
            timer: "00:00:00".to_string(),
            cheating_score: "0.00".to_string(),
            status_value: WarningLevel::Safe.label().to_string(),
            frame_count: 0,
            alerts: AlertsView::Placeholder,
            video: None,
        }
    }
}

impl Dashboard {
    /// The camera page: a video panel whose overlay shows until the stream loads
    pub fn with_video(stream_url: impl Into<String>) -> Self {
        Self {
            video: Some(VideoPanel {
                stream_url: stream_url.into(),
                overlay: VideoOverlay {
                    visible: true,
                    text: "Connecting to camera...".to_string(),
                },
            }),
            ..Self::default()
        }
    }

    /// Toggle buttons and status indicator for a running or stopped session
    pub fn set_running(&mut self, running: bool) {
        self.start_button.disabled = running;
        self.stop_button.disabled = !running;
        if running {
            self.status_indicator.background = RUNNING_BACKGROUND;
            self.status_indicator.text = "Recording".to_string();
        } else {
            self.status_indicator.background = STOPPED_BACKGROUND;
            self.status_indicator.text = "Stopped".to_string();
        }
    }

    pub fn video_loaded(&mut self) {
        if let Some(video) = self.video.as_mut() {
            video.overlay.visible = false;
        }
    }

    pub fn video_failed(&mut self) {
        if let Some(video) = self.video.as_mut() {
            video.overlay.visible = true;
            video.overlay.text = VIDEO_ERROR_TEXT.to_string();
        }
    }
}
