//! Symptom detection used to pick the reply branch.
//!
//! This list is shorter than the specialty table: it only has to tell a
//! symptom description apart from small talk.

const SYMPTOM_KEYWORDS: &[&str] = &[
    // Russian
    "болит", "боль", "температура", "кашель", "симптом", "плохо", "живот", "голова", "глаз", "зуб",
    // English
    "pain", "hurt", "headache", "toothache", "aches", "fever", "cough", "symptom", "sick", "nausea",
    "dizzy", "rash",
    // Spanish
    "dolor", "duele", "fiebre", "tengo tos", "toser", "síntoma", "mareo",
];

/// Whether `text` looks like a symptom description.
pub fn has_symptoms(text: &str) -> bool {
    let lower = text.to_lowercase();
    SYMPTOM_KEYWORDS.iter().any(|k| lower.contains(k))
}
