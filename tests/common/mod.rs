use std::sync::Arc;

use forge_site::api::router::create_router;
use forge_site::config::site::SiteConfig;
use forge_site::config::{AppConfig, LogFormat};
use forge_site::models::EventsPayload;
use forge_site::AppState;

/// Two cards, newest first: one upcoming with a priced bout, one finished.
pub const FIXTURE_JSON: &str = r#"{
  "events": [
    {
      "event_id": "e2",
      "slug": "card-2",
      "event_name": "Card 2",
      "event_date_utc": "2024-02-01T00:00:00Z",
      "location": "Austin, TX",
      "bouts": [
        {
          "bout_id": "e2-b1",
          "bout_order": 1,
          "weight_class_lbs": 135.0,
          "fighter_a": "Kai Roth",
          "fighter_b": "Omar Said",
          "prediction": {"p_a": 0.58, "p_b": 0.42, "confidence": "Medium", "edge_a": 0.03, "edge_b": null},
          "odds": {"book": "fanduel", "odds_a_american": -130, "odds_b_american": 110, "odds_timestamp_utc": "2024-01-31T12:00:00Z"},
          "outcome": null
        }
      ]
    },
    {
      "event_id": "e1",
      "slug": "card-1",
      "event_name": "Card 1",
      "event_date_utc": "2024-01-01T00:00:00Z",
      "location": null,
      "bouts": [
        {
          "bout_id": "e1-b1",
          "bout_order": 1,
          "weight_class_lbs": null,
          "fighter_a": "Lee Park",
          "fighter_b": "Sam Cole",
          "prediction": null,
          "odds": null,
          "outcome": {"winner": "B", "method": null, "recorded_timestamp_utc": null}
        }
      ]
    }
  ]
}"#;

#[allow(dead_code)]
pub fn fixture_payload() -> EventsPayload {
    EventsPayload::from_json_str(FIXTURE_JSON).expect("fixture must parse")
}

#[allow(dead_code)]
pub fn test_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".into(),
        port: 0,
        log_format: LogFormat::Pretty,
        events_json_path: None,
        site: SiteConfig::default(),
    }
}

/// Router over `payload`, with a metrics recorder that is not installed globally.
#[allow(dead_code)]
pub fn build_test_app(payload: EventsPayload) -> axum::Router {
    let state = AppState {
        events: Arc::new(payload),
        config: test_config(),
        metrics_handle: forge_site::metrics::detached_handle(),
    };
    create_router(state)
}
