use super::state::{AppState, SavedReport};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub snapshots: usize,
    pub reports: usize,
    pub timestamp: String,
}

/// GET /get_results
/// Current detection results
pub async fn get_results(State(state): State<AppState>) -> impl IntoResponse {
    let mut snapshot = state.next_snapshot();
    if snapshot.timestamp.is_none() {
        snapshot.timestamp = Some(Utc::now().to_rfc3339());
    }

    (StatusCode::OK, Json(snapshot))
}

/// POST /api/results
/// Keep a result record in memory
pub async fn save_results(
    State(state): State<AppState>,
    Json(data): Json<Value>,
) -> impl IntoResponse {
    let report = SavedReport {
        timestamp: Utc::now(),
        data,
    };

    let count = {
        let mut reports = state.reports.write().await;
        reports.push(report);
        reports.len()
    };

    info!("Saved report #{}", count);

    (
        StatusCode::OK,
        Json(SaveResponse {
            status: "saved".to_string(),
        }),
    )
}

/// GET /health
/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let reports = state.reports.read().await.len();

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            snapshots: state.snapshots.len(),
            reports,
            timestamp: Utc::now().to_rfc3339(),
        }),
    )
}
