use crate::detection::DetectionSnapshot;
use chrono::{DateTime, Utc};
use tokio::time::Instant;

/// Mutable state of the monitoring session.
///
/// Reset on every start, frozen (not cleared) on stop.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub running: bool,

    /// Wall-clock start, `None` until the first start
    pub started_at: Option<DateTime<Utc>>,

    /// Monotonic start used by the elapsed-time task
    pub started_instant: Option<Instant>,

    /// Log correlation id, minted per start
    pub session_id: Option<String>,

    /// Successful polls since start
    pub frame_count: u64,

    /// Baseline for the next alert render
    pub last_indicators: Vec<String>,

    /// Elapsed seconds as last written to the timer display
    pub elapsed_secs: u64,

    /// Most recent snapshot applied to the dashboard
    pub last_snapshot: Option<DetectionSnapshot>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn begin(&mut self, session_id: String) {
        self.running = true;
        self.started_at = Some(Utc::now());
        self.started_instant = Some(Instant::now());
        self.session_id = Some(session_id);
        self.frame_count = 0;
        self.last_indicators.clear();
    }
}
