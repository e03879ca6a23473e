use crate::detection::DetectionSnapshot;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// A result record as received, wrapped with the receive time
#[derive(Debug, Clone, Serialize)]
pub struct SavedReport {
    pub timestamp: DateTime<Utc>,
    pub data: Value,
}

/// Shared state of the replay backend
#[derive(Clone)]
pub struct AppState {
    /// Snapshots served round-robin by `GET /get_results`
    pub snapshots: Arc<Vec<DetectionSnapshot>>,

    /// Index of the next snapshot to serve
    pub cursor: Arc<AtomicUsize>,

    /// Reports posted to `/api/results` (memory only)
    pub reports: Arc<RwLock<Vec<SavedReport>>>,
}

impl AppState {
    pub fn new(snapshots: Vec<DetectionSnapshot>) -> Self {
        let snapshots = if snapshots.is_empty() {
            vec![DetectionSnapshot::default()]
        } else {
            snapshots
        };

        Self {
            snapshots: Arc::new(snapshots),
            cursor: Arc::new(AtomicUsize::new(0)),
            reports: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Load a JSON array of snapshots
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshots from {}", path.display()))?;
        let snapshots: Vec<DetectionSnapshot> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse snapshots in {}", path.display()))?;

        Ok(Self::new(snapshots))
    }

    /// Next snapshot in the script, wrapping around
    pub fn next_snapshot(&self) -> DetectionSnapshot {
        let index = self.cursor.fetch_add(1, Ordering::SeqCst) % self.snapshots.len();
        self.snapshots[index].clone()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
