//! Service configuration loaded from environment variables.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::language::Language;

pub const DEFAULT_MODEL_NAME: &str = "llama3.2:3b";
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_PORT: u16 = 8000;

/// Backend serving the language model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelProvider {
    /// Local Ollama server (`/api/chat`).
    Ollama,
    /// Any OpenAI-compatible `/v1/chat/completions` endpoint.
    OpenAI,
}

impl std::fmt::Display for ModelProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelProvider::Ollama => write!(f, "ollama"),
            ModelProvider::OpenAI => write!(f, "openai"),
        }
    }
}

impl FromStr for ModelProvider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "ollama" => Ok(Self::Ollama),
            "openai" => Ok(Self::OpenAI),
            other => Err(Error::Config(format!("Unknown model provider: {}", other))),
        }
    }
}

/// What the response cache does once it is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CachePolicy {
    /// Stop accepting entries; nothing is ever evicted.
    Freeze,
    /// Drop the oldest entry to make room.
    EvictOldest,
}

impl FromStr for CachePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "freeze" => Ok(Self::Freeze),
            "evict-oldest" | "evict_oldest" => Ok(Self::EvictOldest),
            other => Err(Error::Config(format!("Unknown cache policy: {}", other))),
        }
    }
}

/// Language model settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub name: String,
    pub provider: ModelProvider,
    pub temperature: f64,
    pub base_url: String,
    /// Context window size in tokens.
    pub num_ctx: u32,
    /// Maximum tokens generated per reply.
    pub max_tokens: u32,
    pub timeout_secs: u64,
    /// Bearer token for OpenAI-compatible endpoints.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

impl ModelConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_MODEL_NAME.into(),
            provider: ModelProvider::Ollama,
            temperature: 0.0,
            base_url: DEFAULT_OLLAMA_URL.into(),
            num_ctx: 2048,
            max_tokens: 512,
            timeout_secs: 60,
            api_key: None,
        }
    }
}

/// Top-level MedAssist configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub default_language: Language,
    pub cache_capacity: usize,
    pub cache_policy: CachePolicy,
    /// Requests allowed per identity inside one window.
    pub rate_limit: usize,
    pub rate_window_secs: u64,
    pub model: ModelConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: DEFAULT_PORT,
            default_language: Language::En,
            cache_capacity: 100,
            cache_policy: CachePolicy::Freeze,
            rate_limit: 10,
            rate_window_secs: 60,
            model: ModelConfig::default(),
        }
    }
}

impl AppConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let model_defaults = ModelConfig::default();

        let model = ModelConfig {
            name: lookup("MODEL_NAME").unwrap_or(model_defaults.name),
            provider: parse_or(&lookup, "MODEL_PROVIDER", model_defaults.provider)?,
            temperature: parse_or(&lookup, "MODEL_TEMPERATURE", model_defaults.temperature)?,
            base_url: lookup("OLLAMA_BASE_URL").unwrap_or(model_defaults.base_url),
            num_ctx: parse_or(&lookup, "MODEL_NUM_CTX", model_defaults.num_ctx)?,
            max_tokens: parse_or(&lookup, "MODEL_MAX_TOKENS", model_defaults.max_tokens)?,
            timeout_secs: parse_or(&lookup, "MODEL_TIMEOUT_SECS", model_defaults.timeout_secs)?,
            api_key: lookup("MODEL_API_KEY").filter(|k| !k.is_empty()),
        };

        let config = Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            default_language: parse_or(&lookup, "DEFAULT_LANGUAGE", defaults.default_language)?,
            cache_capacity: parse_or(&lookup, "CACHE_CAPACITY", defaults.cache_capacity)?,
            cache_policy: parse_or(&lookup, "CACHE_POLICY", defaults.cache_policy)?,
            rate_limit: parse_or(&lookup, "RATE_LIMIT", defaults.rate_limit)?,
            rate_window_secs: parse_or(&lookup, "RATE_WINDOW_SECS", defaults.rate_window_secs)?,
            model,
        };

        if !(0.0..=2.0).contains(&config.model.temperature) {
            return Err(Error::Config(format!(
                "MODEL_TEMPERATURE must be between 0 and 2, got {}",
                config.model.temperature
            )));
        }

        Ok(config)
    }

    pub fn rate_window(&self) -> Duration {
        Duration::from_secs(self.rate_window_secs)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid {}={}: {}", key, raw, e))),
        _ => Ok(default),
    }
}
