//! Shared application state.

use std::sync::Arc;

use medassist_chat::ChatModel;
use medassist_core::AppConfig;
use medassist_runtime::AiService;

/// Service name reported by the health endpoints.
pub const SERVICE_NAME: &str = "Medical AI Service";

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: AppConfig,
    pub service: AiService,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(config: AppConfig, model: Arc<dyn ChatModel>) -> Self {
        let service = AiService::new(model, &config);
        Self {
            config,
            service,
            started_at: chrono::Utc::now(),
        }
    }
}
