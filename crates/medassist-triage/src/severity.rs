//! Coarse severity scoring from urgency keywords.

use medassist_core::Language;
use serde::Serialize;

const URGENT_INDICATORS: &[&str] = &[
    "severe",
    "bleeding",
    "loss of consciousness",
    "unconscious",
    "fainted",
    "can't breathe",
    "difficulty breathing",
    "seizure",
    "сильн",
    "кровотечени",
    "потеря сознания",
    "потерял сознание",
    "без сознания",
    "не могу дышать",
    "судорог",
    "grave",
    "intenso",
    "sangrado",
    "hemorragia",
    "pérdida de conciencia",
    "desmayo",
    "no puedo respirar",
];

const MODERATE_INDICATORS: &[&str] = &[
    "pain", "headache", "aches", "fever", "cough", "nausea", "vomit", "боль", "болит",
    "температур", "кашель", "тошнот", "рвот", "dolor", "duele", "fiebre", "tengo tos", "toser",
    "náusea", "vómito",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Low,
    Moderate,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeverityResult {
    pub level: SeverityLevel,
    /// 0-10.
    pub score: u8,
    pub advice: &'static str,
}

/// Number of urgent indicators present in `text`.
fn urgent_count(lower: &str) -> usize {
    URGENT_INDICATORS
        .iter()
        .filter(|k| lower.contains(*k))
        .count()
}

/// Whether `text` mentions at least one urgent indicator.
pub fn has_urgent_indicator(text: &str) -> bool {
    urgent_count(&text.to_lowercase()) > 0
}

fn advice(level: SeverityLevel, lang: Language) -> &'static str {
    match (level, lang) {
        (SeverityLevel::Critical, Language::Ru) => "Немедленно обратитесь за медицинской помощью.",
        (SeverityLevel::Critical, Language::En) => "Seek medical care immediately.",
        (SeverityLevel::Critical, Language::Es) => "Busque atención médica de inmediato.",
        (SeverityLevel::Moderate, Language::Ru) => "Обратитесь к врачу в ближайшее время.",
        (SeverityLevel::Moderate, Language::En) => "Seek medical care soon.",
        (SeverityLevel::Moderate, Language::Es) => "Busque atención médica pronto.",
        (SeverityLevel::Low, Language::Ru) => "Обратитесь к врачу, когда будет удобно.",
        (SeverityLevel::Low, Language::En) => "Seek medical care when convenient.",
        (SeverityLevel::Low, Language::Es) => "Busque atención médica cuando le convenga.",
    }
}

/// Classify `text` into a severity level, advice in English.
pub fn assess(text: &str) -> SeverityResult {
    assess_in(text, Language::En)
}

/// Classify `text` into a severity level, advice in `lang`.
pub fn assess_in(text: &str, lang: Language) -> SeverityResult {
    let lower = text.to_lowercase();
    let urgent = urgent_count(&lower);
    let moderate = MODERATE_INDICATORS.iter().any(|k| lower.contains(k));

    let (level, score) = if urgent >= 2 {
        (SeverityLevel::Critical, 9)
    } else if urgent == 1 || moderate {
        (SeverityLevel::Moderate, 6)
    } else {
        (SeverityLevel::Low, 3)
    };

    SeverityResult {
        level,
        score,
        advice: advice(level, lang),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_urgent_indicators_are_critical() {
        let result = assess("Severe bleeding after a fall");
        assert_eq!(result.level, SeverityLevel::Critical);
        assert_eq!(result.score, 9);
    }

    #[test]
    fn one_urgent_indicator_is_moderate() {
        let result = assess("severe headache and fever");
        assert_eq!(result.level, SeverityLevel::Moderate);
        assert_eq!(result.score, 6);
    }

    #[test]
    fn moderate_indicator_alone_is_moderate() {
        assert_eq!(assess("I have a cough").level, SeverityLevel::Moderate);
        assert_eq!(assess("у меня болит живот").level, SeverityLevel::Moderate);
    }

    #[test]
    fn nothing_is_low() {
        let result = assess("thank you!");
        assert_eq!(result.level, SeverityLevel::Low);
        assert_eq!(result.score, 3);
        assert_eq!(assess("").level, SeverityLevel::Low);
    }

    #[test]
    fn urgent_detection_is_case_insensitive() {
        assert!(has_urgent_indicator("SEVERE"));
        assert!(has_urgent_indicator("Сильная боль"));
        assert!(!has_urgent_indicator("mild itch"));
    }

    #[test]
    fn assess_is_deterministic() {
        let text = "Сильное кровотечение";
        assert_eq!(assess(text), assess(text));
        assert_eq!(assess(text).level, SeverityLevel::Critical);
    }

    #[test]
    fn advice_follows_language() {
        let ru = assess_in("Сильное кровотечение", Language::Ru);
        assert_eq!(ru.level, SeverityLevel::Critical);
        assert_eq!(ru.advice, "Немедленно обратитесь за медицинской помощью.");

        let es = assess_in("me duele la cabeza", Language::Es);
        assert_eq!(es.level, SeverityLevel::Moderate);
        assert_eq!(es.advice, "Busque atención médica pronto.");

        assert_eq!(assess("thank you!").advice, "Seek medical care when convenient.");
    }
}
