//! Symptom analysis endpoint.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use medassist_core::i18n;
use medassist_core::Language;
use medassist_triage::SeverityResult;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::state::AppState;

/// Header carrying the caller identity for rate limiting.
pub const CLIENT_ID_HEADER: &str = "x-client-id";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/analyze", post(analyze))
}

/// Incoming analysis request. A missing `text` is treated as empty input.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// Analysis response.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    pub response: String,
    pub language: Language,
    /// Seconds spent handling the request.
    pub processing_time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<SeverityResult>,
}

fn client_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(CLIENT_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// POST /analyze: run one message through the reply pipeline.
async fn analyze(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> impl IntoResponse {
    let start = Instant::now();

    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            debug!("Rejected request body: {}", rejection);
            let language = state.config.default_language;
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(AnalyzeResponse {
                    response: state.service.localizer().message(language, i18n::ERROR),
                    language,
                    processing_time: start.elapsed().as_secs_f64(),
                    severity: None,
                }),
            );
        }
    };

    let text = req.text.unwrap_or_default();
    let reply = state.service.respond(&text, client_id(&headers)).await;

    (
        StatusCode::OK,
        Json(AnalyzeResponse {
            response: reply.text,
            language: reply.language,
            processing_time: start.elapsed().as_secs_f64(),
            severity: reply.severity,
        }),
    )
}
