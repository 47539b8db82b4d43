//! Lightweight language detection for incoming messages.
//!
//! Classifies text as Russian, Spanish or the configured default using
//! character-range heuristics. Mixed Cyrillic and Spanish text resolves to
//! Russian because the Cyrillic check runs first.

use serde::{Deserialize, Serialize};

/// Minimum share of Cyrillic characters for a message to count as Russian.
pub const CYRILLIC_THRESHOLD: f64 = 0.3;

/// Characters that only show up in Spanish among the supported languages.
const SPANISH_MARKERS: &[char] = &['ñ', 'á', 'é', 'í', 'ó', 'ú', 'ü', '¿', '¡'];

/// Supported reply languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ru,
    En,
    Es,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::En => "en",
            Self::Es => "es",
        }
    }

    pub fn all() -> &'static [Language] {
        &[Self::Ru, Self::En, Self::Es]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ru" => Ok(Self::Ru),
            "en" => Ok(Self::En),
            "es" => Ok(Self::Es),
            other => Err(crate::Error::Config(format!("Unsupported language: {}", other))),
        }
    }
}

/// Heuristic detector with a configured fallback language.
#[derive(Debug, Clone, Copy)]
pub struct LanguageDetector {
    default: Language,
}

impl LanguageDetector {
    pub fn new(default: Language) -> Self {
        Self { default }
    }

    pub fn default_language(&self) -> Language {
        self.default
    }

    /// Detect the language of `text`.
    pub fn detect(&self, text: &str) -> Language {
        if text.trim().is_empty() {
            return self.default;
        }

        let total = text.chars().count();
        let cyrillic = text.chars().filter(|c| is_cyrillic(*c)).count();
        if cyrillic as f64 / total as f64 > CYRILLIC_THRESHOLD {
            return Language::Ru;
        }

        if text
            .chars()
            .flat_map(char::to_lowercase)
            .any(|c| SPANISH_MARKERS.contains(&c))
        {
            return Language::Es;
        }

        self.default
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new(Language::En)
    }
}

fn is_cyrillic(c: char) -> bool {
    matches!(c, '\u{0400}'..='\u{04FF}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_russian() {
        let detector = LanguageDetector::default();
        assert_eq!(detector.detect("У меня болит голова"), Language::Ru);
    }

    #[test]
    fn detects_spanish_by_diacritics() {
        let detector = LanguageDetector::default();
        assert_eq!(detector.detect("Me duele el estómago"), Language::Es);
        assert_eq!(detector.detect("¿QUÉ HAGO?"), Language::Es);
        assert_eq!(detector.detect("MAÑANA"), Language::Es);
    }

    #[test]
    fn plain_latin_falls_back_to_default() {
        assert_eq!(LanguageDetector::default().detect("I have a headache"), Language::En);
        assert_eq!(
            LanguageDetector::new(Language::Ru).detect("I have a headache"),
            Language::Ru
        );
    }

    #[test]
    fn blank_input_returns_default() {
        let detector = LanguageDetector::new(Language::Es);
        assert_eq!(detector.detect(""), Language::Es);
        assert_eq!(detector.detect("   \n"), Language::Es);
    }

    #[test]
    fn cyrillic_wins_over_spanish_markers() {
        let detector = LanguageDetector::default();
        assert_eq!(detector.detect("голова ¿qué?"), Language::Ru);
    }

    #[test]
    fn low_cyrillic_ratio_is_not_russian() {
        // 2 Cyrillic characters out of 18
        let detector = LanguageDetector::default();
        assert_eq!(detector.detect("headache and ok да"), Language::En);
    }

    #[test]
    fn parses_language_codes() {
        assert_eq!("RU".parse::<Language>().unwrap(), Language::Ru);
        assert_eq!(" es ".parse::<Language>().unwrap(), Language::Es);
        assert!("de".parse::<Language>().is_err());
    }
}
