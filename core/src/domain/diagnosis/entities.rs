use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;

pub const DEFAULT_DISCLAIMER: &str = "This is not medical advice. Please consult a healthcare professional for proper diagnosis and treatment.";

pub const FALLBACK_DISEASE: &str = "Unable to process response";

const FALLBACK_DESCRIPTION: &str = "The system was unable to properly analyze your symptoms. Please try again with more specific information.";

const FALLBACK_PREVENTIVE_MEASURE: &str =
    "Please consult a healthcare professional for accurate medical advice.";

/// A user-asserted free-text health complaint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Symptom {
    pub id: Uuid,
    pub text: String,
}

impl Symptom {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: generate_uuid_v7(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TreatmentType {
    Traditional,
    Alternative,
}

impl TreatmentType {
    /// Labels starting with "alternative" in any case ("Alternative medicine")
    /// are alternative care; everything else is read as traditional.
    pub fn from_label(label: &str) -> Self {
        if label.trim().to_lowercase().starts_with("alternative") {
            TreatmentType::Alternative
        } else {
            TreatmentType::Traditional
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TreatmentType::Traditional => "traditional",
            TreatmentType::Alternative => "alternative",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Treatment {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub treatment_type: TreatmentType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    pub name: String,
    pub dosage: String,
    pub side_effects: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisItem {
    pub disease: String,
    /// Always within 0..=100.
    pub confidence: u8,
    pub description: String,
    pub treatments: Vec<Treatment>,
    pub medicines: Vec<Medicine>,
    pub preventive_measures: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DiagnosisResponse {
    pub diagnosis: Vec<DiagnosisItem>,
    pub disclaimer: String,
}

impl DiagnosisResponse {
    /// The fixed safe response used when upstream content cannot be interpreted.
    pub fn fallback() -> Self {
        Self {
            diagnosis: vec![DiagnosisItem {
                disease: FALLBACK_DISEASE.to_string(),
                confidence: 0,
                description: FALLBACK_DESCRIPTION.to_string(),
                treatments: Vec::new(),
                medicines: Vec::new(),
                preventive_measures: vec![FALLBACK_PREVENTIVE_MEASURE.to_string()],
            }],
            disclaimer: DEFAULT_DISCLAIMER.to_string(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        *self == Self::fallback()
    }
}
