use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal severity reported by the detection backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum WarningLevel {
    #[default]
    Safe,
    Warning,
    Critical,
}

impl WarningLevel {
    /// Text shown in the status display
    pub fn label(self) -> &'static str {
        match self {
            WarningLevel::Safe => "🟢 SAFE",
            WarningLevel::Warning => "🟠 WARNING",
            WarningLevel::Critical => "🔴 CRITICAL",
        }
    }

    /// Severity class attached to alert rows
    pub fn class(self) -> &'static str {
        match self {
            WarningLevel::Safe => "safe",
            WarningLevel::Warning => "warning",
            WarningLevel::Critical => "critical",
        }
    }
}

// Anything the backend sends besides "warning" or "critical", null
// included, displays as safe.
impl From<Option<String>> for WarningLevel {
    fn from(level: Option<String>) -> Self {
        match level.as_deref() {
            Some("critical") => WarningLevel::Critical,
            Some("warning") => WarningLevel::Warning,
            _ => WarningLevel::Safe,
        }
    }
}

impl fmt::Display for WarningLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class())
    }
}

/// One poll of `GET /get_results`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionSnapshot {
    pub cheating_score: f64,

    pub warning_level: WarningLevel,

    /// Indicator labels, most severe first
    pub indicators: Vec<String>,

    /// When the backend produced this result, if it says
    pub timestamp: Option<String>,
}

impl DetectionSnapshot {
    pub fn score_text(&self) -> String {
        format_score(self.cheating_score)
    }
}

/// Score as shown on the dashboard: two decimal places
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}
