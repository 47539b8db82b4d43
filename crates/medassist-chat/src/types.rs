//! Chat types shared by the providers.

use async_trait::async_trait;
use serde::Serialize;

/// Chat message sent to the model.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}

/// A language model that turns a system prompt and one user message into
/// reply text.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, system: &str, message: &str) -> medassist_core::Result<String>;

    /// Whether the backend answers at all. Used by health reporting.
    async fn is_available(&self) -> bool {
        true
    }

    /// Model identifier for logs and health output.
    fn name(&self) -> &str;
}
