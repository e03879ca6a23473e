use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
    Warning,
}

impl Severity {
    pub fn name(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }

    /// Style class, e.g. `notification-error`
    pub fn class(self) -> String {
        format!("notification-{}", self.name())
    }

    /// How long the notification stays up when no duration is given.
    /// Errors linger longer.
    pub fn default_duration(self) -> Duration {
        match self {
            Severity::Error => Duration::from_millis(5000),
            Severity::Info | Severity::Success | Severity::Warning => Duration::from_millis(3000),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
