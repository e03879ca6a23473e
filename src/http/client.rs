use super::api::DetectionApi;
use crate::config::{Config, EndpointsConfig};
use crate::detection::DetectionSnapshot;
use crate::session::ResultRecord;
use anyhow::{Context, Result};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info};

/// GET `url` and decode the JSON body.
///
/// Transport errors, non-2xx statuses and malformed bodies are logged and
/// come back as `None`. No retry, no timeout.
pub async fn fetch_json<T: DeserializeOwned>(client: &Client, url: &str) -> Option<T> {
    match try_fetch_json(client, url).await {
        Ok(value) => Some(value),
        Err(e) => {
            error!("Fetch error: {:#}", e);
            None
        }
    }
}

async fn try_fetch_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("GET {} failed", url))?
        .error_for_status()
        .context("HTTP error")?;

    response
        .json::<T>()
        .await
        .with_context(|| format!("Malformed JSON from {}", url))
}

/// POST `body` as JSON to `url`.
///
/// Any 2xx is success; a body that isn't JSON comes back as `Value::Null`.
pub async fn post_json<B: Serialize + ?Sized>(client: &Client, url: &str, body: &B) -> Option<Value> {
    match try_post_json(client, url, body).await {
        Ok(value) => Some(value),
        Err(e) => {
            error!("Fetch error: {:#}", e);
            None
        }
    }
}

async fn try_post_json<B: Serialize + ?Sized>(client: &Client, url: &str, body: &B) -> Result<Value> {
    // .json() sets Content-Type: application/json
    let response = client
        .post(url)
        .json(body)
        .send()
        .await
        .with_context(|| format!("POST {} failed", url))?
        .error_for_status()
        .context("HTTP error")?;

    let bytes = response.bytes().await.context("Failed to read response body")?;
    Ok(serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

/// HTTP client for the detection backend
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    results_url: String,
    save_url: String,
    video_url: String,
}

impl ApiClient {
    /// Resolve endpoint paths against `base_url`
    pub fn new(base_url: &str, endpoints: &EndpointsConfig) -> Result<Self> {
        let base = Url::parse(base_url).with_context(|| format!("Invalid base URL: {}", base_url))?;
        let resolve = |path: &str| -> Result<String> {
            Ok(base
                .join(path)
                .with_context(|| format!("Invalid endpoint path: {}", path))?
                .to_string())
        };

        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        let api = Self {
            client,
            results_url: resolve(&endpoints.results)?,
            save_url: resolve(&endpoints.save)?,
            video_url: resolve(&endpoints.video_feed)?,
        };

        info!("Detection backend: {}", base);

        Ok(api)
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.service.base_url, &config.endpoints)
    }

    pub fn results_url(&self) -> &str {
        &self.results_url
    }
}

#[async_trait::async_trait]
impl DetectionApi for ApiClient {
    async fn fetch_results(&self) -> Option<DetectionSnapshot> {
        fetch_json(&self.client, &self.results_url).await
    }

    async fn save_results(&self, record: &ResultRecord) -> Option<Value> {
        post_json(&self.client, &self.save_url, record).await
    }

    async fn open_video_stream(&self) -> bool {
        // Headers only: the body is an endless MJPEG stream
        match self.client.get(&self.video_url).send().await {
            Ok(response) if response.status().is_success() => {
                debug!("Video stream answered {}", response.status());
                true
            }
            Ok(response) => {
                error!("Video stream returned {}", response.status());
                false
            }
            Err(e) => {
                error!("Video stream unreachable: {}", e);
                false
            }
        }
    }

    fn video_stream_url(&self) -> String {
        self.video_url.clone()
    }
}
