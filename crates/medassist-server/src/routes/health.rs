//! Health routes.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::{AppState, SERVICE_NAME};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health))
        .route("/health/details", get(health_details))
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// GET /health: liveness.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        service: SERVICE_NAME.into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

/// GET /health/details: component status, including model availability.
async fn health_details(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let model = state.service.model();
    let reachable = model.is_available().await;
    let cache = state.service.cache();

    Json(serde_json::json!({
        "status": if reachable { "healthy" } else { "degraded" },
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "started_at": state.started_at.to_rfc3339(),
        "components": {
            "ai_model": {
                "name": model.name(),
                "provider": state.config.model.provider.to_string(),
                "status": if reachable { "reachable" } else { "unreachable" },
            },
            "model_connection": {
                "url": state.config.model.base_url,
            },
            "doctor_service": {
                "status": "available",
                "keywords": medassist_triage::specialty_map().len(),
            },
            "cache": {
                "size": cache.len(),
                "capacity": cache.capacity(),
            },
            "rate_limiter": {
                "limit": state.service.limiter().limit(),
                "window_secs": state.service.limiter().window().as_secs(),
                "identities": state.service.limiter().tracked_identities(),
            },
        },
        "environment": {
            "platform": std::env::consts::OS,
            "arch": std::env::consts::ARCH,
        },
    }))
}
