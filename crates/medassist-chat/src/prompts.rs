//! Fixed prompts sent to the model.

use medassist_core::Language;

/// System prompt for symptom descriptions.
pub fn symptom_system_prompt(lang: Language) -> &'static str {
    match lang {
        Language::Ru => {
            "Ты — медицинский ассистент. Пациент описывает симптомы, а рекомендация врача \
             уже подготовлена. Сформулируй короткий дружелюбный ответ на русском языке, \
             сохранив рекомендацию. Не ставь диагноз."
        }
        Language::En => {
            "You are a medical assistant. The patient describes symptoms and a doctor \
             recommendation has already been prepared. Write a short, friendly reply in \
             English that keeps the recommendation. Do not diagnose."
        }
        Language::Es => {
            "Eres un asistente médico. El paciente describe síntomas y ya se preparó una \
             recomendación de médico. Escribe una respuesta breve y amable en español que \
             mantenga la recomendación. No hagas diagnósticos."
        }
    }
}

/// System prompt for everything that is not a symptom description.
pub fn general_system_prompt(lang: Language) -> &'static str {
    match lang {
        Language::Ru => "Ты дружелюбный медицинский ассистент. Отвечай кратко и вежливо.",
        Language::En => "You are a friendly medical assistant. Answer briefly and politely.",
        Language::Es => "Eres un asistente médico amable. Responde de forma breve y cortés.",
    }
}

/// Note prepended when urgency keywords are present.
pub fn urgency_note(lang: Language) -> &'static str {
    match lang {
        Language::Ru => "Внимание: ваши симптомы могут требовать срочной медицинской помощи.",
        Language::En => "Warning: your symptoms may need urgent medical attention.",
        Language::Es => "Atención: sus síntomas pueden requerir atención médica urgente.",
    }
}

/// User message combining the patient's words with the prepared context.
pub fn symptom_context(
    lang: Language,
    user_input: &str,
    recommendation: &str,
    urgency: Option<&str>,
) -> String {
    let (patient, doctor, ask) = match lang {
        Language::Ru => (
            "Пациент говорит",
            "Рекомендация врача",
            "Сформулируй дружелюбный ответ пациенту.",
        ),
        Language::En => (
            "Patient says",
            "Doctor recommendation",
            "Write a friendly reply to the patient.",
        ),
        Language::Es => (
            "El paciente dice",
            "Recomendación de médico",
            "Escribe una respuesta amable para el paciente.",
        ),
    };

    let mut context = format!("{}: {}\n{}: {}\n", patient, user_input, doctor, recommendation);
    if let Some(note) = urgency {
        context.push_str(note);
        context.push('\n');
    }
    context.push_str(ask);
    context
}
