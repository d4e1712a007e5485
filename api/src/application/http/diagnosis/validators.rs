use curetrackr_core::domain::symptom_form::catalog::{DEFAULT_LANGUAGE, find_language};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateDiagnosisValidator {
    #[validate(
        length(min = 1, max = 50, message = "between 1 and 50 symptoms are required"),
        nested
    )]
    pub symptoms: Vec<SymptomPayload>,

    #[serde(default = "default_language")]
    #[validate(custom(function = "validate_language"))]
    pub language: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SymptomPayload {
    #[validate(
        length(min = 1, max = 200, message = "symptom text must be 1 to 200 characters"),
        custom(function = "validate_not_blank")
    )]
    pub text: String,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn validate_language(code: &str) -> Result<(), ValidationError> {
    match find_language(code) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("unknown_language")
            .with_message(format!("unsupported language '{}'", code).into())),
    }
}

fn validate_not_blank(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("symptom text is blank".into()));
    }
    Ok(())
}
