use crate::domain::diagnosis::entities::Symptom;

pub const SYMPTOM_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnoseInput {
    pub symptoms: Vec<String>,
    pub language: String,
}

impl DiagnoseInput {
    pub fn from_symptoms(symptoms: &[Symptom], language: &str) -> Self {
        Self {
            symptoms: symptoms.iter().map(|s| s.text.clone()).collect(),
            language: language.to_string(),
        }
    }

    pub fn joined_symptoms(&self) -> String {
        self.symptoms.join(SYMPTOM_SEPARATOR)
    }
}

/// A single prompt exchange sent to the model provider.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub response_schema: serde_json::Value,
}
