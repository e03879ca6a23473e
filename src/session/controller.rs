use super::config::SessionConfig;
use super::record::{format_hms, ResultRecord};
use super::state::SessionState;
use crate::dashboard::{render_alerts, Dashboard};
use crate::detection::DetectionSnapshot;
use crate::http::DetectionApi;
use crate::notify::{Notifier, Severity};
use chrono::{Local, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tracing::{debug, info, warn};

/// Drives one dashboard: start/stop lifecycle, stats polling, elapsed-time
/// display and the save action.
///
/// Lock order is `lifecycle`, then `state`, then `dashboard`.
pub struct SessionController {
    config: SessionConfig,

    /// Held for a whole start, stop or shutdown so they never interleave
    lifecycle: Mutex<()>,

    /// Detection backend
    api: Arc<dyn DetectionApi>,

    /// Page elements this controller writes to
    dashboard: Arc<Mutex<Dashboard>>,

    notifier: Notifier,

    state: Arc<Mutex<SessionState>>,

    /// Recurring stats poll; aborted on stop
    poll_task: Mutex<Option<JoinHandle<()>>>,

    /// Elapsed-time loops, one per start. They outlive `stop` and only go
    /// away on `shutdown`.
    timer_tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl SessionController {
    pub fn new(
        config: SessionConfig,
        api: Arc<dyn DetectionApi>,
        dashboard: Arc<Mutex<Dashboard>>,
        notifier: Notifier,
    ) -> Self {
        Self {
            config,
            lifecycle: Mutex::new(()),
            api,
            dashboard,
            notifier,
            state: Arc::new(Mutex::new(SessionState::new())),
            poll_task: Mutex::new(None),
            timer_tasks: Mutex::new(Vec::new()),
        }
    }

    /// Start a session. Does nothing if one is already running.
    pub async fn start(&self) {
        let _lifecycle = self.lifecycle.lock().await;

        let session_id = {
            let mut state = self.state.lock().await;
            if state.running {
                warn!("Detection already running");
                return;
            }
            let session_id = format!("session-{}", uuid::Uuid::new_v4());
            state.begin(session_id.clone());
            session_id
        };

        info!("Starting detection session: {}", session_id);

        self.dashboard.lock().await.set_running(true);
        self.start_stats_update().await;
        self.start_timer().await;

        self.notifier.notify("Detection started", Severity::Success).await;
    }

    /// Stop the session. Safe to call at any time.
    ///
    /// Cancels the polling schedule; a request already in flight still
    /// lands. The elapsed-time task keeps running but stops updating.
    pub async fn stop(&self) {
        let _lifecycle = self.lifecycle.lock().await;

        let session_id = {
            let mut state = self.state.lock().await;
            state.running = false;
            state.session_id.clone()
        };

        if let Some(task) = self.poll_task.lock().await.take() {
            task.abort();
        }

        self.dashboard.lock().await.set_running(false);

        info!(
            "Detection stopped: {}",
            session_id.as_deref().unwrap_or("no session")
        );

        self.notifier.notify("Detection stopped", Severity::Warning).await;
    }

    /// Post the current results. Returns whether the backend accepted them.
    pub async fn save_results(&self) -> bool {
        let record = {
            let state = self.state.lock().await;
            ResultRecord::from_state(&state, Utc::now())
        };

        debug!("Saving results: {:?}", record);

        if self.api.save_results(&record).await.is_some() {
            self.notifier
                .notify("Report saved successfully!", Severity::Success)
                .await;
            true
        } else {
            self.notifier
                .notify("Failed to save report", Severity::Error)
                .await;
            false
        }
    }

    /// Abort every task this controller spawned
    pub async fn shutdown(&self) {
        let _lifecycle = self.lifecycle.lock().await;

        if let Some(task) = self.poll_task.lock().await.take() {
            task.abort();
        }

        let mut timers = self.timer_tasks.lock().await;
        for task in timers.drain(..) {
            task.abort();
        }

        debug!("Session controller shut down");
    }

    pub async fn is_running(&self) -> bool {
        self.state.lock().await.running
    }

    /// Copy of the current session state
    pub async fn state(&self) -> SessionState {
        self.state.lock().await.clone()
    }

    pub fn dashboard(&self) -> Arc<Mutex<Dashboard>> {
        Arc::clone(&self.dashboard)
    }

    fn live_view(&self) -> LiveView {
        LiveView {
            api: Arc::clone(&self.api),
            state: Arc::clone(&self.state),
            dashboard: Arc::clone(&self.dashboard),
            max_alert_rows: self.config.max_alert_rows,
        }
    }

    async fn start_stats_update(&self) {
        let view = self.live_view();
        let period = self.config.stats_interval;

        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                // Fixed-rate: a slow response never holds back the next tick
                let view = view.clone();
                tokio::spawn(async move { view.poll_once().await });
            }
        });

        *self.poll_task.lock().await = Some(task);
    }

    async fn start_timer(&self) {
        let view = self.live_view();
        let period = self.config.timer_interval;

        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                view.tick_timer().await;
            }
        });

        self.timer_tasks.lock().await.push(task);
    }
}

/// What the periodic tasks need from the controller
#[derive(Clone)]
struct LiveView {
    api: Arc<dyn DetectionApi>,
    state: Arc<Mutex<SessionState>>,
    dashboard: Arc<Mutex<Dashboard>>,
    max_alert_rows: usize,
}

impl LiveView {
    async fn poll_once(&self) {
        if !self.state.lock().await.running {
            return;
        }

        match self.api.fetch_results().await {
            Some(snapshot) => self.apply(snapshot).await,
            None => debug!("No detection results this tick"),
        }
    }

    async fn apply(&self, snapshot: DetectionSnapshot) {
        let rendered_at = Local::now().format("%H:%M:%S").to_string();

        let mut state = self.state.lock().await;
        let mut dashboard = self.dashboard.lock().await;

        dashboard.cheating_score = snapshot.score_text();
        dashboard.status_value = snapshot.warning_level.label().to_string();
        dashboard.alerts = render_alerts(
            &state.last_indicators,
            &snapshot.indicators,
            snapshot.warning_level,
            &rendered_at,
            self.max_alert_rows,
        );

        state.last_indicators = snapshot.indicators.clone();
        state.frame_count += 1;
        dashboard.frame_count = state.frame_count;

        debug!(
            "Frame {}: score={:.2} level={} indicators={}",
            state.frame_count,
            snapshot.cheating_score,
            snapshot.warning_level,
            snapshot.indicators.len()
        );

        state.last_snapshot = Some(snapshot);
    }

    async fn tick_timer(&self) {
        let mut state = self.state.lock().await;
        if !state.running {
            return;
        }
        let Some(started) = state.started_instant else {
            return;
        };

        let elapsed = started.elapsed().as_secs();
        state.elapsed_secs = elapsed;
        self.dashboard.lock().await.timer = format_hms(elapsed);
    }
}
