//! Page bootstrap and entry points
//!
//! `AppContext` is built once at startup and handed to whatever issues
//! commands (the stdin loop in the binary, tests).

use crate::config::Config;
use crate::dashboard::Dashboard;
use crate::http::DetectionApi;
use crate::notify::{Notifier, Severity};
use crate::session::{SessionConfig, SessionController};
use anyhow::{bail, Result};
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// User actions, one per dashboard control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    Save,
    /// Print the dashboard
    Status,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(Command::Start),
            "stop" => Ok(Command::Stop),
            "save" => Ok(Command::Save),
            "status" | "" => Ok(Command::Status),
            "quit" | "exit" => Ok(Command::Quit),
            other => bail!("Unknown command: {} (try start, stop, save, status, quit)", other),
        }
    }
}

pub struct AppContext {
    dashboard: Arc<Mutex<Dashboard>>,
    notifier: Notifier,
    /// Only the camera page has a detection session
    controller: Option<SessionController>,
}

impl AppContext {
    /// Build the page. On the camera page this creates the session
    /// controller and starts loading the video stream in the background.
    pub async fn bootstrap(config: &Config, api: Arc<dyn DetectionApi>) -> Self {
        let notifier = Notifier::new();

        if !config.page.camera {
            info!("No camera on this page, detection disabled");
            return Self {
                dashboard: Arc::new(Mutex::new(Dashboard::default())),
                notifier,
                controller: None,
            };
        }

        let dashboard = Arc::new(Mutex::new(Dashboard::with_video(api.video_stream_url())));
        let controller = SessionController::new(
            SessionConfig::from(config),
            Arc::clone(&api),
            Arc::clone(&dashboard),
            notifier.clone(),
        );

        Self::load_video_stream(api, Arc::clone(&dashboard), notifier.clone());

        Self {
            dashboard,
            notifier,
            controller: Some(controller),
        }
    }

    fn load_video_stream(api: Arc<dyn DetectionApi>, dashboard: Arc<Mutex<Dashboard>>, notifier: Notifier) {
        tokio::spawn(async move {
            if api.open_video_stream().await {
                info!("Video stream loaded");
                dashboard.lock().await.video_loaded();
            } else {
                dashboard.lock().await.video_failed();
                notifier
                    .notify("Failed to load video stream", Severity::Error)
                    .await;
            }
        });
    }

    pub async fn start_detection(&self) {
        match &self.controller {
            Some(controller) => controller.start().await,
            None => debug!("start ignored: no detection session on this page"),
        }
    }

    pub async fn stop_detection(&self) {
        match &self.controller {
            Some(controller) => controller.stop().await,
            None => debug!("stop ignored: no detection session on this page"),
        }
    }

    pub async fn save_results(&self) {
        match &self.controller {
            Some(controller) => {
                controller.save_results().await;
            }
            None => debug!("save ignored: no detection session on this page"),
        }
    }

    pub async fn notify(&self, message: impl Into<String>, severity: Severity) {
        self.notifier.notify(message, severity).await;
    }

    /// Run one command. Returns `false` once the user asked to quit.
    pub async fn dispatch(&self, command: Command) -> bool {
        match command {
            Command::Start => self.start_detection().await,
            Command::Stop => self.stop_detection().await,
            Command::Save => self.save_results().await,
            Command::Status => println!("{}", self.render().await),
            Command::Quit => return false,
        }
        true
    }

    /// Dashboard followed by any visible notifications
    pub async fn render(&self) -> String {
        let mut text = self.dashboard.lock().await.to_string();
        for notification in self.notifier.active().await {
            if notification.visible {
                text.push_str(&format!("<{}> {}\n", notification.severity, notification.message));
            }
        }
        text
    }

    pub fn dashboard(&self) -> Arc<Mutex<Dashboard>> {
        Arc::clone(&self.dashboard)
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn controller(&self) -> Option<&SessionController> {
        self.controller.as_ref()
    }

    /// Tear down background tasks, as on page unload
    pub async fn shutdown(&self) {
        if let Some(controller) = &self.controller {
            controller.shutdown().await;
        }
    }
}
