//! Router tests. Drive the Axum router directly with `oneshot`, using a
//! stub model so no model server is needed.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use medassist_chat::StubModel;
use medassist_core::AppConfig;
use medassist_server::{build_router, AppState};
use tower::ServiceExt;

fn app_with(model: Arc<StubModel>, config: AppConfig) -> Router {
    build_router(Arc::new(AppState::new(config, model)))
}

fn app(reply: &str) -> (Router, Arc<StubModel>) {
    let model = Arc::new(StubModel::replying(reply));
    (app_with(model.clone(), AppConfig::default()), model)
}

fn analyze_request(body: &str, client_id: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/analyze")
        .header("content-type", "application/json");
    if let Some(id) = client_id {
        builder = builder.header("x-client-id", id);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_shape() {
    let (app, _) = app("unused");
    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "Medical AI Service");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_health_details_reports_components() {
    let (app, _) = app("ok");
    let response = app
        .oneshot(Request::get("/health/details").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = json_body(response).await;

    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
    assert_eq!(body["components"]["ai_model"]["name"], "stub");
    assert_eq!(body["components"]["ai_model"]["status"], "reachable");
    assert_eq!(body["components"]["doctor_service"]["status"], "available");
    assert_eq!(body["components"]["cache"]["capacity"], 100);
}

#[tokio::test]
async fn test_health_details_degraded_when_model_down() {
    let app = app_with(Arc::new(StubModel::failing()), AppConfig::default());
    let response = app
        .oneshot(Request::get("/health/details").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = json_body(response).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["components"]["ai_model"]["status"], "unreachable");
}

#[tokio::test]
async fn test_analyze_symptoms() {
    let (app, model) = app("Please see a neurologist.");
    let response = app
        .oneshot(analyze_request(r#"{"text": "severe headache and fever"}"#, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["response"], "Please see a neurologist.");
    assert_eq!(body["language"], "en");
    assert!(body["processing_time"].is_number());
    assert_eq!(body["severity"]["level"], "moderate");
    assert_eq!(body["severity"]["score"], 6);
    assert_eq!(model.calls(), 1);
}

#[tokio::test]
async fn test_analyze_short_input_is_localized() {
    let (app, model) = app("unused");
    let response = app
        .oneshot(analyze_request(r#"{"text": "ой"}"#, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["language"], "ru");
    assert!(body["response"].as_str().unwrap().contains("короткое"));
    assert!(body.get("severity").is_none());
    assert_eq!(model.calls(), 0);
}

#[tokio::test]
async fn test_analyze_missing_text_is_empty_input() {
    let (app, _) = app("unused");
    let response = app.oneshot(analyze_request("{}", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["response"], "Please describe your symptoms.");
}

#[tokio::test]
async fn test_analyze_malformed_body_does_not_leak_errors() {
    let (app, _) = app("unused");
    let response = app.oneshot(analyze_request("{not json", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["response"], "Something went wrong. Please try again.");
}

#[tokio::test]
async fn test_repeated_request_is_cached() {
    let (app, model) = app("See a dentist.");
    let first = json_body(
        app.clone()
            .oneshot(analyze_request(r#"{"text": "My tooth hurts"}"#, None))
            .await
            .unwrap(),
    )
    .await;
    let second = json_body(
        app.oneshot(analyze_request(r#"{"text": "My tooth hurts"}"#, None))
            .await
            .unwrap(),
    )
    .await;

    assert_eq!(first["response"], second["response"]);
    assert_eq!(first["severity"], second["severity"]);
    assert!(second["severity"].is_object());
    assert_eq!(model.calls(), 1);
}

#[tokio::test]
async fn test_rate_limit_is_per_client_id() {
    let model = Arc::new(StubModel::replying("hello!"));
    let config = AppConfig {
        rate_limit: 1,
        ..AppConfig::default()
    };
    let app = app_with(model.clone(), config);

    let ok = json_body(
        app.clone()
            .oneshot(analyze_request(r#"{"text": "hello there"}"#, Some("alice")))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(ok["response"], "hello!");

    let limited = json_body(
        app.clone()
            .oneshot(analyze_request(r#"{"text": "good morning"}"#, Some("alice")))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(
        limited["response"],
        "Too many requests. Please wait a minute and try again."
    );

    let other = json_body(
        app.oneshot(analyze_request(r#"{"text": "good morning"}"#, Some("bob")))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(other["response"], "hello!");
    assert_eq!(model.calls(), 2);
}
