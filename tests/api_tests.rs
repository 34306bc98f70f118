mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use forge_site::models::EventsPayload;

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_health_check() {
    let app = common::build_test_app(common::fixture_payload());
    let (status, json) = get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["events"], 2);
}

#[tokio::test]
async fn test_list_events_preserves_payload() {
    let app = common::build_test_app(common::fixture_payload());
    let (status, json) = get_json(app, "/api/events").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    let expected: serde_json::Value = serde_json::from_str(common::FIXTURE_JSON).unwrap();
    assert_eq!(json["data"], expected);
}

#[tokio::test]
async fn test_latest_event_is_first() {
    let app = common::build_test_app(common::fixture_payload());
    let (status, json) = get_json(app, "/api/events/latest").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["event_id"], "e2");
    assert_eq!(json["data"]["bouts"][0]["outcome"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_latest_event_empty_dataset() {
    let app = common::build_test_app(EventsPayload { events: vec![] });
    let (status, json) = get_json(app, "/api/events/latest").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_event_by_slug() {
    let app = common::build_test_app(common::fixture_payload());
    let (status, json) = get_json(app.clone(), "/api/events/card-1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["event_id"], "e1");
    assert!(json["data"]["location"].is_null());
    assert_eq!(json["data"]["bouts"][0]["outcome"]["winner"], "B");

    let (status, _) = get_json(app, "/api/events/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_confidence_diagnostics() {
    let app = common::build_test_app(common::fixture_payload());
    let (status, json) = get_json(app, "/api/diagnostics/confidence").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["overall"]["medium"], 1);
    assert_eq!(json["data"]["overall"]["none"], 1);
    assert_eq!(json["data"]["per_event"][0]["event_name"], "Card 2");
}

#[tokio::test]
async fn test_plans() {
    let app = common::build_test_app(common::fixture_payload());
    let (status, json) = get_json(app.clone(), "/api/plans").await;

    assert_eq!(status, StatusCode::OK);
    let plans = json["data"].as_array().unwrap();
    assert_eq!(plans.len(), 3);
    assert_eq!(plans[0]["tier"], "free");
    assert_eq!(plans[2]["name"], "Forge Pro");

    let (status, json) = get_json(app.clone(), "/api/plans/basic").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["name"], "Forge Basic");

    let (status, json) = get_json(app, "/api/plans/platinum").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_features_by_tier() {
    let app = common::build_test_app(common::fixture_payload());
    let (status, json) = get_json(app, "/api/features/pro").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["showEdgeSorting"], true);
    assert_eq!(json["data"]["showUpgradePrompt"], false);
}

#[tokio::test]
async fn test_affiliate_hidden_until_live() {
    let app = common::build_test_app(common::fixture_payload());
    let (status, json) = get_json(app.clone(), "/api/affiliate?tier=pro").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["config"]["enabled"], false);
    assert_eq!(json["data"]["config"]["sportsbook"], "fanduel");
    assert_eq!(json["data"]["cta_visible"], false);

    let (status, _) = get_json(app, "/api/affiliate?tier=vip").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_site_config() {
    let app = common::build_test_app(common::fixture_payload());
    let (status, json) = get_json(app, "/api/site").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["base"], "/raf-ai-v1/");
    assert_eq!(json["data"]["output"], "static");
}

#[tokio::test]
async fn test_cors_layer_applied() {
    let app = common::build_test_app(common::fixture_payload());
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/plans")
                .header("origin", "http://localhost:4321")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");
}
