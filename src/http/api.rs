use crate::detection::DetectionSnapshot;
use crate::session::ResultRecord;
use serde_json::Value;

/// Detection backend as seen by the session controller
///
/// Implementations:
/// - `ApiClient`: HTTP against a running backend
/// - test fakes: scripted snapshots, recorded saves
///
/// Every call reports failure as `None`; callers skip the update.
#[async_trait::async_trait]
pub trait DetectionApi: Send + Sync {
    /// Current detection results (`GET /get_results`)
    async fn fetch_results(&self) -> Option<DetectionSnapshot>;

    /// Submit a result record (`POST /api/results`)
    async fn save_results(&self, record: &ResultRecord) -> Option<Value>;

    /// Whether the video stream answers with a 2xx
    async fn open_video_stream(&self) -> bool;

    /// URL of the video stream, for display
    fn video_stream_url(&self) -> String;
}
