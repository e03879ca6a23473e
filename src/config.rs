use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

/// Environment variables with this prefix override file settings,
/// e.g. `PROCTOR__SERVICE__BASE_URL=http://10.0.0.5:5000`.
pub const ENV_PREFIX: &str = "PROCTOR";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub endpoints: EndpointsConfig,
    pub polling: PollingConfig,
    pub alerts: AlertsConfig,
    pub page: PageConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    /// Where the detection backend lives
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EndpointsConfig {
    pub results: String,
    pub save: String,
    pub video_feed: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollingConfig {
    pub stats_interval_ms: u64,
    pub timer_interval_ms: u64,
}

impl PollingConfig {
    pub fn stats_interval(&self) -> Duration {
        Duration::from_millis(self.stats_interval_ms)
    }

    pub fn timer_interval(&self) -> Duration {
        Duration::from_millis(self.timer_interval_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlertsConfig {
    pub max_rows: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    /// Whether the camera page (video element + overlay) is present
    pub camera: bool,
}

/// Bind address for the `serve` replay backend
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
}

impl Config {
    /// Load defaults, then an optional config file, then `PROCTOR__*` env vars.
    pub fn load(path: &str) -> Result<Self> {
        let settings = Self::builder()?
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to load config from {}", path))?;

        Ok(settings.try_deserialize()?)
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        Ok(config::Config::builder()
            .set_default("service.name", "proctor-dashboard")?
            .set_default("service.base_url", "http://127.0.0.1:5000")?
            .set_default("endpoints.results", "/get_results")?
            .set_default("endpoints.save", "/api/results")?
            .set_default("endpoints.video_feed", "/video_feed")?
            .set_default("polling.stats_interval_ms", 500_i64)?
            .set_default("polling.timer_interval_ms", 1000_i64)?
            .set_default("alerts.max_rows", 5_i64)?
            .set_default("page.camera", true)?
            .set_default("server.bind", "0.0.0.0")?
            .set_default("server.port", 5000_i64)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                name: "proctor-dashboard".to_string(),
                base_url: "http://127.0.0.1:5000".to_string(),
            },
            endpoints: EndpointsConfig {
                results: "/get_results".to_string(),
                save: "/api/results".to_string(),
                video_feed: "/video_feed".to_string(),
            },
            polling: PollingConfig {
                stats_interval_ms: 500,
                timer_interval_ms: 1000,
            },
            alerts: AlertsConfig { max_rows: 5 },
            page: PageConfig { camera: true },
            server: ServerConfig {
                bind: "0.0.0.0".to_string(),
                port: 5000,
            },
        }
    }
}
