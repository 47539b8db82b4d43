//! Language model providers.
//!
//! Ollama uses its native `/api/chat` endpoint. Everything else that speaks
//! the OpenAI chat-completions format goes through `OpenAiCompatModel`.
//! Both make one non-streaming request per reply.

use std::sync::Arc;

use async_trait::async_trait;
use medassist_core::{Error, ModelConfig, ModelProvider, Result};
use reqwest::{Client, Url};
use serde_json::json;
use tracing::{debug, error, info};

use crate::types::{ChatMessage, ChatModel};

/// Build the configured provider.
///
/// Fails with a configuration error when the endpoint URL or the HTTP
/// client cannot be constructed.
pub fn create_model(config: &ModelConfig) -> Result<Arc<dyn ChatModel>> {
    let model: Arc<dyn ChatModel> = match config.provider {
        ModelProvider::Ollama => Arc::new(OllamaModel::new(config)?),
        ModelProvider::OpenAI => Arc::new(OpenAiCompatModel::new(config)?),
    };
    info!(
        "Language model: provider={}, model={}, url={}",
        config.provider, config.name, config.base_url
    );
    Ok(model)
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let mut normalized = raw.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    let url = Url::parse(&normalized)
        .map_err(|e| Error::Config(format!("Invalid model base URL '{}': {}", raw, e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::Config(format!(
            "Model base URL must be http or https: {}",
            raw
        )));
    }
    Ok(url)
}

fn endpoint(base: &Url, path: &str) -> Result<Url> {
    base.join(path)
        .map_err(|e| Error::Config(format!("Invalid model endpoint '{}': {}", path, e)))
}

fn build_client(config: &ModelConfig) -> Result<Client> {
    Client::builder()
        .timeout(config.timeout())
        .build()
        .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))
}

/// Send a JSON body and return the parsed JSON reply.
async fn post_json(
    client: &Client,
    url: &Url,
    api_key: Option<&str>,
    body: &serde_json::Value,
) -> Result<serde_json::Value> {
    let mut request = client
        .post(url.clone())
        .header("Content-Type", "application/json")
        .json(body);
    if let Some(key) = api_key {
        request = request.header("Authorization", format!("Bearer {}", key));
    }

    let response = request.send().await.map_err(|e| {
        error!("Model request to {} failed: {}", url, e);
        Error::Http(format!("Request failed: {}", e))
    })?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        error!("Model API error {}: {}", status, body);
        return Err(Error::Http(format!("API error {}: {}", status, body)));
    }

    response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| Error::Http(format!("Invalid response body: {}", e)))
}

/// Local Ollama server.
pub struct OllamaModel {
    client: Client,
    chat_url: Url,
    tags_url: Url,
    model: String,
    temperature: f64,
    num_ctx: u32,
    max_tokens: u32,
}

impl OllamaModel {
    pub fn new(config: &ModelConfig) -> Result<Self> {
        let base = parse_base_url(&config.base_url)?;
        Ok(Self {
            client: build_client(config)?,
            chat_url: endpoint(&base, "api/chat")?,
            tags_url: endpoint(&base, "api/tags")?,
            model: config.name.clone(),
            temperature: config.temperature,
            num_ctx: config.num_ctx,
            max_tokens: config.max_tokens,
        })
    }

    fn request_body(&self, system: &str, message: &str) -> serde_json::Value {
        let messages = [ChatMessage::system(system), ChatMessage::user(message)];
        json!({
            "model": self.model,
            "messages": messages,
            "stream": false,
            "options": {
                "temperature": self.temperature,
                "num_ctx": self.num_ctx,
                "num_predict": self.max_tokens,
            },
        })
    }
}

#[async_trait]
impl ChatModel for OllamaModel {
    async fn complete(&self, system: &str, message: &str) -> Result<String> {
        debug!("Requesting {} from {}", self.model, self.chat_url);
        let body = self.request_body(system, message);
        let parsed = post_json(&self.client, &self.chat_url, None, &body).await?;

        parsed["message"]["content"]
            .as_str()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::Model("Ollama reply has no message content".into()))
    }

    async fn is_available(&self) -> bool {
        match self.client.get(self.tags_url.clone()).send().await {
            Ok(r) => r.status().is_success(),
            Err(e) => {
                debug!("Ollama not reachable at {}: {}", self.tags_url, e);
                false
            }
        }
    }

    fn name(&self) -> &str {
        &self.model
    }
}

/// OpenAI-compatible chat-completions endpoint.
pub struct OpenAiCompatModel {
    client: Client,
    completions_url: Url,
    models_url: Url,
    model: String,
    api_key: Option<String>,
    temperature: f64,
    max_tokens: u32,
}

impl OpenAiCompatModel {
    pub fn new(config: &ModelConfig) -> Result<Self> {
        let base = parse_base_url(&config.base_url)?;
        Ok(Self {
            client: build_client(config)?,
            completions_url: endpoint(&base, "v1/chat/completions")?,
            models_url: endpoint(&base, "v1/models")?,
            model: config.name.clone(),
            api_key: config.api_key.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }
}

#[async_trait]
impl ChatModel for OpenAiCompatModel {
    async fn complete(&self, system: &str, message: &str) -> Result<String> {
        debug!("Requesting {} from {}", self.model, self.completions_url);
        let messages = [ChatMessage::system(system), ChatMessage::user(message)];
        let body = json!({
            "model": self.model,
            "messages": messages,
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        });
        let parsed = post_json(
            &self.client,
            &self.completions_url,
            self.api_key.as_deref(),
            &body,
        )
        .await?;

        parsed["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::Model("Completion has no message content".into()))
    }

    async fn is_available(&self) -> bool {
        let mut request = self.client.get(self.models_url.clone());
        if let Some(key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {}", key));
        }
        request
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    fn name(&self) -> &str {
        &self.model
    }
}
