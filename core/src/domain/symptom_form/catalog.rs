use serde::Serialize;
use utoipa::ToSchema;

pub const SYMPTOM_SUGGESTIONS: [&str; 20] = [
    "Headache",
    "Fever",
    "Cough",
    "Shortness of breath",
    "Fatigue",
    "Nausea",
    "Vomiting",
    "Diarrhea",
    "Chest pain",
    "Abdominal pain",
    "Joint pain",
    "Muscle pain",
    "Rash",
    "Sore throat",
    "Runny nose",
    "Dizziness",
    "Blurred vision",
    "Loss of appetite",
    "Weight loss",
    "Swelling",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

pub const DEFAULT_LANGUAGE: &str = "en";

pub const LANGUAGES: [Language; 12] = [
    Language { code: "en", name: "English" },
    Language { code: "es", name: "Spanish" },
    Language { code: "fr", name: "French" },
    Language { code: "de", name: "German" },
    Language { code: "it", name: "Italian" },
    Language { code: "pt", name: "Portuguese" },
    Language { code: "ru", name: "Russian" },
    Language { code: "zh", name: "Chinese" },
    Language { code: "ja", name: "Japanese" },
    Language { code: "ko", name: "Korean" },
    Language { code: "ar", name: "Arabic" },
    Language { code: "hi", name: "Hindi" },
];

pub fn find_language(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|language| language.code == code)
}

/// Case-insensitive substring match against the suggestion list.
/// Blank input matches nothing.
pub fn filter_suggestions(input: &str) -> Vec<&'static str> {
    if input.trim().is_empty() {
        return Vec::new();
    }

    let needle = input.to_lowercase();
    SYMPTOM_SUGGESTIONS
        .iter()
        .copied()
        .filter(|suggestion| suggestion.to_lowercase().contains(&needle))
        .collect()
}
