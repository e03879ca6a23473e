// Config loading tests

use proctor_dashboard::{Config, SessionConfig};
use std::io::Write;
use std::time::Duration;
use tempfile::Builder;

#[test]
fn test_defaults_when_file_missing() {
    let cfg = Config::load("/nonexistent/proctor-dashboard").unwrap();

    assert_eq!(cfg.service.base_url, "http://127.0.0.1:5000");
    assert_eq!(cfg.endpoints.results, "/get_results");
    assert_eq!(cfg.endpoints.save, "/api/results");
    assert_eq!(cfg.polling.stats_interval(), Duration::from_millis(500));
    assert_eq!(cfg.polling.timer_interval(), Duration::from_secs(1));
    assert_eq!(cfg.alerts.max_rows, 5);
    assert!(cfg.page.camera);
    assert_eq!(cfg.server.port, 5000);
}

#[test]
fn test_file_overrides_defaults() {
    let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
[service]
base_url = "http://exam-room-3:8080"

[polling]
stats_interval_ms = 250

[alerts]
max_rows = 3

[page]
camera = false
"#
    )
    .unwrap();

    let cfg = Config::load(file.path().to_str().unwrap()).unwrap();

    assert_eq!(cfg.service.base_url, "http://exam-room-3:8080");
    assert_eq!(cfg.service.name, "proctor-dashboard");
    assert_eq!(cfg.polling.stats_interval_ms, 250);
    assert_eq!(cfg.polling.timer_interval_ms, 1000);
    assert!(!cfg.page.camera);

    let session = SessionConfig::from(&cfg);
    assert_eq!(session.stats_interval, Duration::from_millis(250));
    assert_eq!(session.max_alert_rows, 3);
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[polling]\nstats_interval_ms = \"often\"").unwrap();

    assert!(Config::load(file.path().to_str().unwrap()).is_err());
}

#[test]
fn test_default_matches_loaded_defaults() {
    let loaded = Config::load("/nonexistent/proctor-dashboard").unwrap();
    let built = Config::default();

    assert_eq!(loaded.service.base_url, built.service.base_url);
    assert_eq!(loaded.endpoints.video_feed, built.endpoints.video_feed);
    assert_eq!(loaded.polling.stats_interval_ms, built.polling.stats_interval_ms);
    assert_eq!(loaded.server.bind, built.server.bind);
}
