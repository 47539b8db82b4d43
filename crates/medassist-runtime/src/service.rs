//! Reply orchestration.
//!
//! Validate → cache lookup → rate limit → symptom or general branch →
//! cache store. Every failure resolves to a localized string; model errors
//! are logged and replaced by a fallback.

use std::sync::Arc;

use medassist_chat::{prompts, ChatModel};
use medassist_core::i18n::{self, Localizer};
use medassist_core::{AppConfig, Language, LanguageDetector};
use medassist_triage::{self as triage, SeverityResult};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::cache::ResponseCache;
use crate::rate_limit::RateLimiter;

/// Where a reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    /// Input was rejected by validation.
    Invalid,
    Cache,
    /// Rate limit hit; the model was skipped.
    RateLimited,
    Model,
    /// The model failed and a canned reply was used.
    Fallback,
}

/// Result of one request.
#[derive(Debug, Clone, Serialize)]
pub struct Reply {
    pub text: String,
    pub language: Language,
    pub source: ReplySource,
    /// Present for every accepted symptom description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<SeverityResult>,
}

/// Symptom-aware assistant. Owns its cache and rate limiter.
pub struct AiService {
    model: Arc<dyn ChatModel>,
    cache: ResponseCache,
    limiter: RateLimiter,
    detector: LanguageDetector,
    localizer: Localizer,
}

impl AiService {
    pub fn new(model: Arc<dyn ChatModel>, config: &AppConfig) -> Self {
        info!(
            "AI service initialized: model={}, cache={} ({:?}), rate_limit={}/{}s",
            model.name(),
            config.cache_capacity,
            config.cache_policy,
            config.rate_limit,
            config.rate_window_secs
        );
        Self {
            model,
            cache: ResponseCache::new(config.cache_capacity, config.cache_policy),
            limiter: RateLimiter::new(config.rate_limit, config.rate_window()),
            detector: LanguageDetector::new(config.default_language),
            localizer: Localizer::builtin(config.default_language),
        }
    }

    pub fn model(&self) -> &Arc<dyn ChatModel> {
        &self.model
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    pub fn localizer(&self) -> &Localizer {
        &self.localizer
    }

    pub fn detect_language(&self, text: &str) -> Language {
        self.detector.detect(text)
    }

    /// Reply text only, for the shared default identity.
    pub async fn analyze_and_respond(&self, text: &str) -> String {
        self.respond(text, None).await.text
    }

    /// Run the full pipeline for one request.
    pub async fn respond(&self, text: &str, identity: Option<&str>) -> Reply {
        let language = self.detector.detect(text);

        if let Err(e) = triage::validate(text) {
            debug!("Rejected input ({}): {}", language, e);
            return Reply {
                text: self.localizer.message(language, e.message_key()),
                language,
                source: ReplySource::Invalid,
                severity: None,
            };
        }

        let has_symptoms = triage::has_symptoms(text);
        let severity = has_symptoms.then(|| triage::assess_in(text, language));

        if let Some(cached) = self.cache.get(text) {
            debug!("Cache hit");
            return Reply {
                text: cached,
                language,
                source: ReplySource::Cache,
                severity,
            };
        }

        if !self.limiter.allow(identity) {
            warn!(
                "Rate limit exceeded for {}",
                identity.unwrap_or(crate::DEFAULT_IDENTITY)
            );
            let degraded = if has_symptoms {
                triage::recommend_in(text, language)
            } else {
                self.localizer.message(language, i18n::RATE_LIMIT)
            };
            return Reply {
                text: degraded,
                language,
                source: ReplySource::RateLimited,
                severity,
            };
        }

        let (reply_text, source) = if has_symptoms {
            debug!("Symptom branch ({})", language);
            self.handle_symptoms(text, language).await
        } else {
            debug!("General chat branch ({})", language);
            self.handle_general_chat(text, language).await
        };

        self.cache.put(text, reply_text.clone());

        Reply {
            text: reply_text,
            language,
            source,
            severity,
        }
    }

    async fn handle_symptoms(&self, text: &str, language: Language) -> (String, ReplySource) {
        let recommendation = triage::recommend_in(text, language);
        let urgency = triage::has_urgent_indicator(text).then(|| prompts::urgency_note(language));

        let context = prompts::symptom_context(language, text, &recommendation, urgency);
        match self
            .model
            .complete(prompts::symptom_system_prompt(language), &context)
            .await
        {
            Ok(reply) => (reply, ReplySource::Model),
            Err(e) => {
                warn!("Model call failed, returning direct recommendation: {}", e);
                let fallback = match urgency {
                    Some(note) => format!("{} {}", note, recommendation),
                    None => recommendation,
                };
                (fallback, ReplySource::Fallback)
            }
        }
    }

    async fn handle_general_chat(&self, text: &str, language: Language) -> (String, ReplySource) {
        match self
            .model
            .complete(prompts::general_system_prompt(language), text)
            .await
        {
            Ok(reply) => (reply, ReplySource::Model),
            Err(e) => {
                warn!("Model call failed in general chat: {}", e);
                (
                    self.localizer.message(language, i18n::NO_SYMPTOMS),
                    ReplySource::Fallback,
                )
            }
        }
    }
}
