use super::state::SessionState;
use crate::detection::{format_score, WarningLevel};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/results`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// ISO-8601, UTC, millisecond precision
    pub timestamp: String,

    /// Elapsed session time as `HH:MM:SS`
    pub duration: String,

    /// Score as displayed, e.g. "3.50"
    pub final_score: String,

    /// Status as displayed, e.g. "🟢 SAFE"
    pub status: String,

    pub total_frames: u64,
}

impl ResultRecord {
    /// Snapshot of what the dashboard currently shows, formatted from the
    /// retained session values rather than read back from the display.
    pub fn from_state(state: &SessionState, now: DateTime<Utc>) -> Self {
        let (final_score, status) = match &state.last_snapshot {
            Some(snapshot) => (snapshot.score_text(), snapshot.warning_level.label()),
            None => (format_score(0.0), WarningLevel::Safe.label()),
        };

        Self {
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            duration: format_hms(state.elapsed_secs),
            final_score,
            status: status.to_string(),
            total_frames: state.frame_count,
        }
    }
}

/// Format whole seconds as zero-padded `HH:MM:SS`. Hours keep growing past 99.
pub fn format_hms(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
