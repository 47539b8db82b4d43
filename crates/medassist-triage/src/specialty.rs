//! Static symptom keyword → specialty table.

use std::collections::HashMap;

use medassist_core::Language;
use once_cell::sync::Lazy;
use serde::Serialize;

/// Medical practitioner category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Specialty {
    GeneralPractitioner,
    Neurologist,
    Dentist,
    Pulmonologist,
    Cardiologist,
    Dermatologist,
    Gastroenterologist,
    Ophthalmologist,
    Otolaryngologist,
    Orthopedist,
}

impl Specialty {
    /// Display name in `lang`.
    pub fn name(&self, lang: Language) -> &'static str {
        match lang {
            Language::Ru => match self {
                Self::GeneralPractitioner => "терапевт",
                Self::Neurologist => "невролог",
                Self::Dentist => "стоматолог",
                Self::Pulmonologist => "пульмонолог",
                Self::Cardiologist => "кардиолог",
                Self::Dermatologist => "дерматолог",
                Self::Gastroenterologist => "гастроэнтеролог",
                Self::Ophthalmologist => "офтальмолог",
                Self::Otolaryngologist => "лор",
                Self::Orthopedist => "ортопед",
            },
            Language::En => match self {
                Self::GeneralPractitioner => "general practitioner",
                Self::Neurologist => "neurologist",
                Self::Dentist => "dentist",
                Self::Pulmonologist => "pulmonologist",
                Self::Cardiologist => "cardiologist",
                Self::Dermatologist => "dermatologist",
                Self::Gastroenterologist => "gastroenterologist",
                Self::Ophthalmologist => "ophthalmologist",
                Self::Otolaryngologist => "ENT specialist",
                Self::Orthopedist => "orthopedist",
            },
            Language::Es => match self {
                Self::GeneralPractitioner => "médico general",
                Self::Neurologist => "neurólogo",
                Self::Dentist => "dentista",
                Self::Pulmonologist => "neumólogo",
                Self::Cardiologist => "cardiólogo",
                Self::Dermatologist => "dermatólogo",
                Self::Gastroenterologist => "gastroenterólogo",
                Self::Ophthalmologist => "oftalmólogo",
                Self::Otolaryngologist => "otorrinolaringólogo",
                Self::Orthopedist => "ortopedista",
            },
        }
    }
}

use Specialty::*;

/// Keywords are matched as lower-case substrings, so stems like "голов"
/// cover every inflection.
const ENTRIES: &[(&str, &[Specialty])] = &[
    // Russian
    ("голов", &[Neurologist, GeneralPractitioner]),
    ("зуб", &[Dentist]),
    ("температур", &[GeneralPractitioner]),
    ("кашель", &[Pulmonologist, GeneralPractitioner]),
    ("сердц", &[Cardiologist]),
    ("давлени", &[Cardiologist]),
    ("сыпь", &[Dermatologist]),
    ("зуд", &[Dermatologist]),
    ("живот", &[Gastroenterologist]),
    ("тошнот", &[Gastroenterologist]),
    ("глаз", &[Ophthalmologist]),
    ("горл", &[Otolaryngologist]),
    ("ухо", &[Otolaryngologist]),
    ("спин", &[Orthopedist, Neurologist]),
    ("сустав", &[Orthopedist]),
    // English
    ("head", &[Neurologist, GeneralPractitioner]),
    ("migraine", &[Neurologist]),
    ("tooth", &[Dentist]),
    ("teeth", &[Dentist]),
    ("fever", &[GeneralPractitioner]),
    ("cough", &[Pulmonologist, GeneralPractitioner]),
    ("chest", &[Cardiologist]),
    ("heart", &[Cardiologist]),
    ("blood pressure", &[Cardiologist]),
    ("rash", &[Dermatologist]),
    ("itchy", &[Dermatologist]),
    ("itching", &[Dermatologist]),
    ("stomach", &[Gastroenterologist]),
    ("nausea", &[Gastroenterologist]),
    ("eye", &[Ophthalmologist]),
    ("throat", &[Otolaryngologist]),
    ("earache", &[Otolaryngologist]),
    ("back pain", &[Orthopedist, Neurologist]),
    ("joint", &[Orthopedist]),
    // Spanish
    ("cabeza", &[Neurologist, GeneralPractitioner]),
    ("diente", &[Dentist]),
    ("muela", &[Dentist]),
    ("fiebre", &[GeneralPractitioner]),
    ("tengo tos", &[Pulmonologist, GeneralPractitioner]),
    ("toser", &[Pulmonologist, GeneralPractitioner]),
    ("pecho", &[Cardiologist]),
    ("corazón", &[Cardiologist]),
    ("erupción", &[Dermatologist]),
    ("picazón", &[Dermatologist]),
    ("estómago", &[Gastroenterologist]),
    ("ojo", &[Ophthalmologist]),
    ("garganta", &[Otolaryngologist]),
    ("oído", &[Otolaryngologist]),
    ("espalda", &[Orthopedist, Neurologist]),
];

static SPECIALTY_MAP: Lazy<HashMap<&'static str, &'static [Specialty]>> =
    Lazy::new(|| ENTRIES.iter().copied().collect());

/// The process-wide keyword → specialties table.
pub fn specialty_map() -> &'static HashMap<&'static str, &'static [Specialty]> {
    &SPECIALTY_MAP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_unique_and_lowercase() {
        assert_eq!(specialty_map().len(), ENTRIES.len());
        for keyword in specialty_map().keys() {
            assert_eq!(*keyword, keyword.to_lowercase());
        }
    }

    #[test]
    fn every_entry_has_a_specialty() {
        assert!(specialty_map().values().all(|s| !s.is_empty()));
    }

    #[test]
    fn names_exist_for_every_language() {
        for lang in Language::all() {
            assert!(!GeneralPractitioner.name(*lang).is_empty());
        }
        assert_eq!(Neurologist.name(Language::Ru), "невролог");
    }
}
