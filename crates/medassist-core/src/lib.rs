//! MedAssist Core: configuration, error types, language detection, localization.

pub mod config;
pub mod error;
pub mod i18n;
pub mod language;

pub use config::{AppConfig, CachePolicy, ModelConfig, ModelProvider};
pub use error::{Error, Result};
pub use i18n::Localizer;
pub use language::{Language, LanguageDetector};
