//! Doctor recommendation by keyword membership.

use std::collections::BTreeSet;

use medassist_core::Language;

use crate::specialty::{specialty_map, Specialty};

/// Specialties whose keywords appear in `text`, deduplicated.
pub fn matched_specialties(text: &str) -> BTreeSet<Specialty> {
    let lower = text.to_lowercase();
    specialty_map()
        .iter()
        .filter(|(keyword, _)| lower.contains(*keyword))
        .flat_map(|(_, specialties)| specialties.iter().copied())
        .collect()
}

/// Recommendation sentence in English.
pub fn recommend(text: &str) -> String {
    recommend_in(text, Language::En)
}

/// Recommendation sentence rendered in `lang`.
///
/// Falls back to a general practitioner when nothing matches, including
/// for empty input.
pub fn recommend_in(text: &str, lang: Language) -> String {
    let matched = matched_specialties(text);
    if matched.is_empty() {
        return default_message(lang).to_string();
    }

    let names: Vec<&str> = matched.iter().map(|s| s.name(lang)).collect();
    let list = names.join(", ");
    match lang {
        Language::Ru => format!("Вам стоит обратиться к следующему специалисту: {}.", list),
        Language::En => format!("You should consult the following specialist: {}.", list),
        Language::Es => format!("Le recomiendo consultar al siguiente especialista: {}.", list),
    }
}

fn default_message(lang: Language) -> &'static str {
    match lang {
        Language::Ru => "Рекомендую для начала обратиться к терапевту.",
        Language::En => "I recommend starting with a general practitioner.",
        Language::Es => "Le recomiendo empezar por un médico general.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_keyword_yields_its_specialties() {
        for (keyword, specialties) in specialty_map() {
            for lang in Language::all() {
                let result = recommend_in(keyword, *lang).to_lowercase();
                for specialty in specialties.iter() {
                    let name = specialty.name(*lang).to_lowercase();
                    assert!(result.contains(&name), "{} -> {} missing {}", keyword, result, name);
                }
            }
        }
    }

    #[test]
    fn empty_and_unknown_input_get_default() {
        assert_eq!(recommend(""), "I recommend starting with a general practitioner.");
        assert_eq!(recommend("lorem ipsum"), recommend(""));
        assert!(recommend_in("что-то непонятное", Language::Ru).contains("терапевт"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let lower = recommend("severe headache");
        assert_eq!(recommend("SEVERE HEADACHE"), lower);
        assert_eq!(recommend("SeVeRe HeAdAcHe"), lower);
        assert_eq!(
            recommend_in("ГОЛОВНАЯ БОЛЬ", Language::Ru),
            recommend_in("головная боль", Language::Ru)
        );
    }

    #[test]
    fn specialties_are_deduplicated() {
        let result = recommend("headache, head pain and fever");
        assert_eq!(result.matches("general practitioner").count(), 1);
        assert!(result.contains("neurologist"));
    }

    #[test]
    fn russian_samples() {
        assert!(recommend_in("зубная боль", Language::Ru).contains("стоматолог"));
        assert!(recommend_in("кашель", Language::Ru).contains("пульмонолог"));
        assert!(recommend_in("боль в сердце и давление", Language::Ru).contains("кардиолог"));
        assert!(recommend_in("сыпь и зуд", Language::Ru).contains("дерматолог"));
        assert!(recommend_in("у меня болит голова очень сильно", Language::Ru).contains("невролог"));
    }

    #[test]
    fn spanish_sample() {
        let result = recommend_in("me duele la cabeza y tengo fiebre", Language::Es);
        assert!(result.contains("neurólogo"));
        assert!(result.contains("médico general"));
    }

    #[test]
    fn keywords_inside_unrelated_words_fall_back_to_default() {
        assert!(matched_specialties("necesito los datos del kitchen").is_empty());
        assert!(matched_specialties("tengo tos").contains(&Specialty::Pulmonologist));
    }
}
