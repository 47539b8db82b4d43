//! User input validation.

use std::collections::HashSet;

use medassist_core::i18n;
use thiserror::Error;

pub const MIN_LENGTH: usize = 3;
pub const MAX_LENGTH: usize = 1000;

/// Distinct-to-total character ratio below which input is treated as spam.
pub const MIN_DISTINCT_RATIO: f64 = 0.3;

/// The ratio is taken over at most this many characters, so long natural
/// text with a small alphabet is not mistaken for spam.
pub const SPAM_WINDOW: usize = 32;

/// Why input was rejected. Each variant maps to a localized message key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("input is empty")]
    Empty,
    #[error("input has no alphanumeric characters")]
    NoAlphanumeric,
    #[error("input is repetitive")]
    Repetitive,
    #[error("input is shorter than 3 characters")]
    TooShort,
    #[error("input is longer than 1000 characters")]
    TooLong,
}

impl ValidationError {
    /// Localization key for the user-facing message.
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::Empty | Self::NoAlphanumeric | Self::Repetitive => i18n::EMPTY_INPUT,
            Self::TooShort => i18n::SHORT_INPUT,
            Self::TooLong => i18n::LONG_INPUT,
        }
    }
}

/// Check `text` against the input rules, in order.
pub fn validate(text: &str) -> Result<(), ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    if !trimmed.chars().any(char::is_alphanumeric) {
        return Err(ValidationError::NoAlphanumeric);
    }

    let length = trimmed.chars().count();
    let distinct: HashSet<char> = trimmed.chars().flat_map(char::to_lowercase).collect();
    let ratio = distinct.len() as f64 / length.min(SPAM_WINDOW) as f64;
    if ratio < MIN_DISTINCT_RATIO {
        return Err(ValidationError::Repetitive);
    }

    if length < MIN_LENGTH {
        return Err(ValidationError::TooShort);
    }
    if length > MAX_LENGTH {
        return Err(ValidationError::TooLong);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of_len(len: usize) -> String {
        "The quick brown fox jumps over the lazy dog. "
            .chars()
            .cycle()
            .take(len)
            .collect()
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert_eq!(validate(""), Err(ValidationError::Empty));
        assert_eq!(validate("   \t\n"), Err(ValidationError::Empty));
    }

    #[test]
    fn rejects_punctuation_only() {
        assert_eq!(validate("?!?!..."), Err(ValidationError::NoAlphanumeric));
        assert_eq!(validate("!!!").unwrap_err().message_key(), i18n::EMPTY_INPUT);
    }

    #[test]
    fn rejects_repetitive_input() {
        assert_eq!(validate("aaaaaaaaaaaa"), Err(ValidationError::Repetitive));
        assert_eq!(validate("hahahahahahahahaha"), Err(ValidationError::Repetitive));
        assert_eq!(validate(&"ab".repeat(500)), Err(ValidationError::Repetitive));
        assert_eq!(
            validate("AaAaAaAaAaAa").unwrap_err().message_key(),
            i18n::EMPTY_INPUT
        );
    }

    #[test]
    fn length_bounds() {
        assert_eq!(validate("ab"), Err(ValidationError::TooShort));
        assert_eq!(validate("ab").unwrap_err().message_key(), i18n::SHORT_INPUT);
        assert_eq!(validate("abc"), Ok(()));
        assert_eq!(validate(&text_of_len(1000)), Ok(()));
        assert_eq!(validate(&text_of_len(1001)), Err(ValidationError::TooLong));
        assert_eq!(
            validate(&text_of_len(1001)).unwrap_err().message_key(),
            i18n::LONG_INPUT
        );
    }

    #[test]
    fn length_is_measured_after_trimming() {
        assert_eq!(validate("  ab  "), Err(ValidationError::TooShort));
        let padded = format!("   {}   ", text_of_len(1000));
        assert_eq!(validate(&padded), Ok(()));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert_eq!(validate("зуб"), Ok(()));
        let cyrillic: String = "У меня болит голова и температура. "
            .chars()
            .cycle()
            .take(1000)
            .collect();
        assert_eq!(validate(&cyrillic), Ok(()));
    }

    #[test]
    fn accepts_ordinary_messages() {
        assert_eq!(validate("У меня болит голова и температура"), Ok(()));
        assert_eq!(validate("thank you!"), Ok(()));
        assert_eq!(validate("severe headache and fever"), Ok(()));
    }
}
