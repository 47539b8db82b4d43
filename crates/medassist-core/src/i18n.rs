//! Localized user-facing messages.
//!
//! Lookup falls back to the default language's table when a key is missing,
//! and to the raw key when no table has it.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::language::Language;

pub const EMPTY_INPUT: &str = "empty_input";
pub const SHORT_INPUT: &str = "short_input";
pub const LONG_INPUT: &str = "long_input";
pub const RATE_LIMIT: &str = "rate_limit";
pub const ERROR: &str = "error";
pub const PROCESSING: &str = "processing";
pub const NO_SYMPTOMS: &str = "no_symptoms";
pub const MODEL_ERROR: &str = "model_error";

type MessageTable = HashMap<&'static str, &'static str>;

const RU_MESSAGES: &[(&str, &str)] = &[
    (EMPTY_INPUT, "Пожалуйста, опишите ваши симптомы."),
    (SHORT_INPUT, "Сообщение слишком короткое. Опишите симптомы подробнее."),
    (LONG_INPUT, "Сообщение слишком длинное. Сократите его до 1000 символов."),
    (RATE_LIMIT, "Слишком много запросов. Пожалуйста, подождите минуту."),
    (ERROR, "Произошла ошибка. Попробуйте ещё раз."),
    (PROCESSING, "Анализирую ваши симптомы..."),
    (NO_SYMPTOMS, "Я не обнаружил симптомов. Опишите, что вас беспокоит."),
    (MODEL_ERROR, "Модель ИИ временно недоступна."),
];

const EN_MESSAGES: &[(&str, &str)] = &[
    (EMPTY_INPUT, "Please describe your symptoms."),
    (SHORT_INPUT, "Your message is too short. Please describe your symptoms in more detail."),
    (LONG_INPUT, "Your message is too long. Please keep it under 1000 characters."),
    (RATE_LIMIT, "Too many requests. Please wait a minute and try again."),
    (ERROR, "Something went wrong. Please try again."),
    (PROCESSING, "Analyzing your symptoms..."),
    (NO_SYMPTOMS, "I did not detect any symptoms. Please tell me what is bothering you."),
    (MODEL_ERROR, "The AI model is temporarily unavailable."),
];

const ES_MESSAGES: &[(&str, &str)] = &[
    (EMPTY_INPUT, "Por favor, describa sus síntomas."),
    (SHORT_INPUT, "El mensaje es demasiado corto. Describa sus síntomas con más detalle."),
    (LONG_INPUT, "El mensaje es demasiado largo. Redúzcalo a menos de 1000 caracteres."),
    (RATE_LIMIT, "Demasiadas solicitudes. Espere un minuto e inténtelo de nuevo."),
    (ERROR, "Ocurrió un error. Inténtelo de nuevo."),
    (PROCESSING, "Analizando sus síntomas..."),
    (NO_SYMPTOMS, "No detecté síntomas. Cuénteme qué le molesta."),
    (MODEL_ERROR, "El modelo de IA no está disponible temporalmente."),
];

static BUILTIN: Lazy<HashMap<Language, MessageTable>> = Lazy::new(|| {
    let mut tables: HashMap<Language, MessageTable> = HashMap::new();
    tables.insert(Language::Ru, RU_MESSAGES.iter().copied().collect());
    tables.insert(Language::En, EN_MESSAGES.iter().copied().collect());
    tables.insert(Language::Es, ES_MESSAGES.iter().copied().collect());
    tables
});

/// Message lookup over per-language tables.
#[derive(Debug, Clone)]
pub struct Localizer {
    tables: HashMap<Language, MessageTable>,
    default: Language,
}

impl Localizer {
    /// Built-in tables for every supported language.
    pub fn builtin(default: Language) -> Self {
        Self {
            tables: BUILTIN.clone(),
            default,
        }
    }

    /// Custom tables, mostly for tests and partial translations.
    pub fn with_tables(tables: HashMap<Language, MessageTable>, default: Language) -> Self {
        Self { tables, default }
    }

    pub fn default_language(&self) -> Language {
        self.default
    }

    /// Look up `key` for `lang`.
    pub fn message(&self, lang: Language, key: &str) -> String {
        self.lookup(lang, key)
            .or_else(|| self.lookup(self.default, key))
            .map(str::to_string)
            .unwrap_or_else(|| key.to_string())
    }

    fn lookup(&self, lang: Language, key: &str) -> Option<&'static str> {
        self.tables.get(&lang).and_then(|t| t.get(key)).copied()
    }
}
