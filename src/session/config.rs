use crate::config::Config;
use std::time::Duration;

/// Configuration for a session controller
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Period of the stats polling task
    /// Default: 500ms
    pub stats_interval: Duration,

    /// Period of the elapsed-time display task
    /// Default: 1 second
    pub timer_interval: Duration,

    /// Alert rows rendered per poll
    pub max_alert_rows: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            stats_interval: Duration::from_millis(500),
            timer_interval: Duration::from_secs(1),
            max_alert_rows: 5,
        }
    }
}

impl From<&Config> for SessionConfig {
    fn from(config: &Config) -> Self {
        Self {
            stats_interval: config.polling.stats_interval(),
            timer_interval: config.polling.timer_interval(),
            max_alert_rows: config.alerts.max_rows,
        }
    }
}
