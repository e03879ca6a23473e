// Scripted detection backend shared by the integration tests

#![allow(dead_code)]

use proctor_dashboard::{DetectionApi, DetectionSnapshot, ResultRecord, WarningLevel};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// One scripted answer to `fetch_results`
pub struct Reply {
    pub delay: Duration,
    pub snapshot: Option<DetectionSnapshot>,
}

pub struct ScriptedApi {
    replies: Mutex<VecDeque<Reply>>,
    pub fetches: AtomicUsize,
    pub saved: Mutex<Vec<ResultRecord>>,
    pub save_ok: bool,
    pub video_ok: bool,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            fetches: AtomicUsize::new(0),
            saved: Mutex::new(Vec::new()),
            save_ok: true,
            video_ok: true,
        }
    }

    /// Answer the next fetch immediately
    pub fn reply(self, snapshot: Option<DetectionSnapshot>) -> Self {
        self.reply_after(Duration::ZERO, snapshot)
    }

    pub fn reply_after(self, delay: Duration, snapshot: Option<DetectionSnapshot>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Reply { delay, snapshot });
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn saved(&self) -> Vec<ResultRecord> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl DetectionApi for ScriptedApi {
    async fn fetch_results(&self) -> Option<DetectionSnapshot> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        // Once the script runs out every fetch fails
        let reply = self.replies.lock().unwrap().pop_front()?;
        if !reply.delay.is_zero() {
            tokio::time::sleep(reply.delay).await;
        }
        reply.snapshot
    }

    async fn save_results(&self, record: &ResultRecord) -> Option<Value> {
        if !self.save_ok {
            return None;
        }
        self.saved.lock().unwrap().push(record.clone());
        Some(json!({"status": "saved"}))
    }

    async fn open_video_stream(&self) -> bool {
        self.video_ok
    }

    fn video_stream_url(&self) -> String {
        "http://backend.test/video_feed".to_string()
    }
}

pub fn snapshot(score: f64, level: WarningLevel, indicators: &[&str]) -> DetectionSnapshot {
    DetectionSnapshot {
        cheating_score: score,
        warning_level: level,
        indicators: indicators.iter().map(|s| s.to_string()).collect(),
        timestamp: None,
    }
}
