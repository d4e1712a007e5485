//! Reconciles the shapes a model may answer with into [`DiagnosisResponse`].
//!
//! Normalization is total: every JSON value maps to a response that honours
//! the schema invariants. Shapes that cannot be read collapse into
//! [`DiagnosisResponse::fallback`].

use serde_json::{Map, Value};

use crate::domain::diagnosis::entities::{
    DEFAULT_DISCLAIMER, DiagnosisItem, DiagnosisResponse, Medicine, Treatment, TreatmentType,
};

const DIAGNOSIS_KEY: &str = "diagnosis";
const ALTERNATE_DISEASES_KEY: &str = "possibleDiseases";
const OTC_MEDICATIONS_LABEL: &str = "Over-the-counter medications";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// `{ "diagnosis": [...], "disclaimer": "..." }`
    Canonical,
    /// `{ "possibleDiseases": [...] }` with nested treatment plans
    Alternate,
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDiagnosis {
    pub response: DiagnosisResponse,
    pub shape: ResponseShape,
}

impl NormalizedDiagnosis {
    pub fn fallback() -> Self {
        Self {
            response: DiagnosisResponse::fallback(),
            shape: ResponseShape::Unrecognized,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.shape == ResponseShape::Unrecognized
    }
}

enum RecognizedShape<'a> {
    Canonical(Vec<&'a Value>),
    Alternate(&'a [Value]),
    Unrecognized,
}

fn classify(value: &Value) -> RecognizedShape<'_> {
    let Some(object) = value.as_object() else {
        return RecognizedShape::Unrecognized;
    };

    match object.get(DIAGNOSIS_KEY) {
        Some(Value::Array(items)) => return RecognizedShape::Canonical(items.iter().collect()),
        Some(single @ Value::Object(_)) => return RecognizedShape::Canonical(vec![single]),
        _ => {}
    }

    match object.get(ALTERNATE_DISEASES_KEY) {
        Some(Value::Array(entries)) => RecognizedShape::Alternate(entries),
        _ => RecognizedShape::Unrecognized,
    }
}

/// Maps any parsed model output onto the canonical schema.
pub fn normalize(value: &Value) -> NormalizedDiagnosis {
    let (diagnosis, shape) = match classify(value) {
        RecognizedShape::Canonical(items) => (
            items.into_iter().filter_map(read_canonical_item).collect(),
            ResponseShape::Canonical,
        ),
        RecognizedShape::Alternate(entries) => (
            entries.iter().filter_map(read_alternate_entry).collect(),
            ResponseShape::Alternate,
        ),
        RecognizedShape::Unrecognized => return NormalizedDiagnosis::fallback(),
    };

    NormalizedDiagnosis {
        response: DiagnosisResponse {
            diagnosis,
            disclaimer: read_disclaimer(value.get("disclaimer")),
        },
        shape,
    }
}

fn read_disclaimer(value: Option<&Value>) -> String {
    match value.and_then(Value::as_str) {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => DEFAULT_DISCLAIMER.to_string(),
    }
}

fn read_canonical_item(value: &Value) -> Option<DiagnosisItem> {
    let fields = value.as_object()?;

    Some(DiagnosisItem {
        disease: string_field(fields, "disease"),
        confidence: read_confidence(fields.get("confidence")),
        description: string_field(fields, "description"),
        treatments: array_items(fields.get("treatments"))
            .filter_map(read_canonical_treatment)
            .collect(),
        medicines: array_items(fields.get("medicines"))
            .filter_map(read_canonical_medicine)
            .collect(),
        preventive_measures: string_list(fields.get("preventiveMeasures")),
    })
}

fn read_canonical_treatment(value: &Value) -> Option<Treatment> {
    match value {
        Value::String(name) => Some(Treatment {
            name: name.clone(),
            description: String::new(),
            treatment_type: TreatmentType::Traditional,
        }),
        Value::Object(fields) => Some(Treatment {
            name: string_field(fields, "name"),
            description: string_field(fields, "description"),
            treatment_type: fields
                .get("type")
                .and_then(Value::as_str)
                .map(TreatmentType::from_label)
                .unwrap_or(TreatmentType::Traditional),
        }),
        _ => None,
    }
}

fn read_canonical_medicine(value: &Value) -> Option<Medicine> {
    match value {
        Value::String(name) => Some(Medicine {
            name: name.clone(),
            dosage: String::new(),
            side_effects: Vec::new(),
            alternatives: None,
        }),
        Value::Object(fields) => Some(Medicine {
            name: string_field(fields, "name"),
            dosage: string_field(fields, "dosage"),
            side_effects: string_list(fields.get("sideEffects")),
            alternatives: fields
                .get("alternatives")
                .filter(|v| !v.is_null())
                .map(|v| string_list(Some(v))),
        }),
        _ => None,
    }
}

fn read_alternate_entry(value: &Value) -> Option<DiagnosisItem> {
    let fields = value.as_object()?;

    let disease = fields
        .get("disease")
        .or_else(|| fields.get("name"))
        .map(scalar_to_string)
        .unwrap_or_default();
    let (treatments, medicines) = read_treatment_plan(fields.get("treatment"));

    Some(DiagnosisItem {
        disease,
        confidence: read_confidence(fields.get("confidence")),
        description: string_field(fields, "description"),
        treatments,
        medicines,
        preventive_measures: string_list(fields.get("prevention")),
    })
}

/// Reads `{ "traditional": [...], "alternative": [...] }`.
fn read_treatment_plan(plan: Option<&Value>) -> (Vec<Treatment>, Vec<Medicine>) {
    let mut treatments = Vec::new();
    let mut medicines = Vec::new();

    let Some(plan) = plan.and_then(Value::as_object) else {
        return (treatments, medicines);
    };

    for (key, treatment_type) in [
        ("traditional", TreatmentType::Traditional),
        ("alternative", TreatmentType::Alternative),
    ] {
        for entry in array_items(plan.get(key)) {
            match entry {
                Value::String(name) => treatments.push(Treatment {
                    name: name.clone(),
                    description: String::new(),
                    treatment_type,
                }),
                Value::Object(fields) => {
                    let name = string_field(fields, "type");
                    let details = fields.get("details");

                    if treatment_type == TreatmentType::Traditional
                        && name == OTC_MEDICATIONS_LABEL
                        && let Some(Value::Array(listed)) = details
                    {
                        medicines.extend(listed.iter().filter_map(read_listed_medicine));
                    }

                    treatments.push(Treatment {
                        name,
                        description: describe_details(details),
                        treatment_type,
                    });
                }
                _ => {}
            }
        }
    }

    (treatments, medicines)
}

fn read_listed_medicine(value: &Value) -> Option<Medicine> {
    let fields = value.as_object()?;
    let name = fields.get("medicine").map(scalar_to_string)?;

    Some(Medicine {
        name,
        dosage: string_field(fields, "dosage"),
        side_effects: string_list(
            fields
                .get("sideEffects")
                .or_else(|| fields.get("side_effects")),
        ),
        alternatives: None,
    })
}

fn describe_details(details: Option<&Value>) -> String {
    match details {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(|entry| match entry {
                Value::String(text) => Some(text.clone()),
                Value::Object(fields) => fields.get("medicine").map(scalar_to_string),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(", "),
        _ => String::new(),
    }
}

/// Numbers are rounded, numeric strings (optionally suffixed with `%`) are
/// parsed, and the result is clamped into 0..=100. Anything else reads as 0.
fn read_confidence(value: Option<&Value>) -> u8 {
    let raw = match value {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
        _ => None,
    };

    match raw {
        Some(score) if score.is_finite() => score.round().clamp(0.0, 100.0) as u8,
        _ => 0,
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => String::new(),
    }
}

fn string_field(fields: &Map<String, Value>, key: &str) -> String {
    fields.get(key).map(scalar_to_string).unwrap_or_default()
}

/// A sequence keeps its string elements; a bare string becomes one element.
fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        Some(Value::String(text)) => vec![text.clone()],
        _ => Vec::new(),
    }
}

fn array_items(value: Option<&Value>) -> impl Iterator<Item = &Value> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter())
        .into_iter()
        .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_response() -> DiagnosisResponse {
        DiagnosisResponse {
            diagnosis: vec![DiagnosisItem {
                disease: "Migraine".to_string(),
                confidence: 72,
                description: "Recurrent headaches".to_string(),
                treatments: vec![
                    Treatment {
                        name: "Rest in a dark room".to_string(),
                        description: "Reduce light and noise".to_string(),
                        treatment_type: TreatmentType::Traditional,
                    },
                    Treatment {
                        name: "Acupressure".to_string(),
                        description: String::new(),
                        treatment_type: TreatmentType::Alternative,
                    },
                ],
                medicines: vec![Medicine {
                    name: "Ibuprofen".to_string(),
                    dosage: "400mg every 6 hours".to_string(),
                    side_effects: vec!["Stomach upset".to_string()],
                    alternatives: Some(vec!["Paracetamol".to_string()]),
                }],
                preventive_measures: vec!["Sleep regularly".to_string()],
            }],
            disclaimer: "Consult a doctor.".to_string(),
        }
    }

    #[test]
    fn test_normalize_is_total_for_non_objects() {
        for value in [
            Value::Null,
            json!([]),
            json!([1, 2, 3]),
            json!("just text"),
            json!(42),
            json!(true),
            json!({}),
        ] {
            let normalized = normalize(&value);
            assert_eq!(normalized.shape, ResponseShape::Unrecognized);
            assert_eq!(normalized.response, DiagnosisResponse::fallback());
        }
    }

    #[test]
    fn test_canonical_response_is_unchanged() {
        let response = sample_response();
        let value = serde_json::to_value(&response).unwrap();

        let normalized = normalize(&value);

        assert_eq!(normalized.shape, ResponseShape::Canonical);
        assert_eq!(normalized.response, response);
    }

    #[test]
    fn test_canonical_empty_diagnosis_is_kept() {
        let normalized = normalize(&json!({ "diagnosis": [], "disclaimer": "x" }));
        assert_eq!(normalized.shape, ResponseShape::Canonical);
        assert!(normalized.response.diagnosis.is_empty());
        assert_eq!(normalized.response.disclaimer, "x");
    }

    #[test]
    fn test_canonical_single_object_is_wrapped() {
        let normalized = normalize(&json!({
            "diagnosis": { "disease": "Cold", "confidence": 55 }
        }));

        assert_eq!(normalized.response.diagnosis.len(), 1);
        let item = &normalized.response.diagnosis[0];
        assert_eq!(item.disease, "Cold");
        assert_eq!(item.confidence, 55);
        assert!(item.treatments.is_empty());
        assert!(item.medicines.is_empty());
        assert!(item.preventive_measures.is_empty());
        assert_eq!(normalized.response.disclaimer, DEFAULT_DISCLAIMER);
    }

    #[test]
    fn test_canonical_missing_fields_default() {
        let normalized = normalize(&json!({
            "diagnosis": [
                { "disease": "Flu", "treatments": null, "medicines": [{ "name": "Oseltamivir" }] },
                "not an item"
            ],
            "disclaimer": "   "
        }));

        let items = &normalized.response.diagnosis;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].confidence, 0);
        assert_eq!(items[0].description, "");
        assert!(items[0].treatments.is_empty());
        assert_eq!(items[0].medicines[0].dosage, "");
        assert!(items[0].medicines[0].side_effects.is_empty());
        assert_eq!(items[0].medicines[0].alternatives, None);
        assert_eq!(normalized.response.disclaimer, DEFAULT_DISCLAIMER);
    }

    #[test]
    fn test_confidence_is_coerced_and_clamped() {
        let normalized = normalize(&json!({
            "diagnosis": [
                { "disease": "a", "confidence": 150 },
                { "disease": "b", "confidence": -3 },
                { "disease": "c", "confidence": 66.6 },
                { "disease": "d", "confidence": "85%" },
                { "disease": "e", "confidence": "high" }
            ]
        }));

        let scores: Vec<u8> = normalized
            .response
            .diagnosis
            .iter()
            .map(|item| item.confidence)
            .collect();
        assert_eq!(scores, vec![100, 0, 67, 85, 0]);
    }

    #[test]
    fn test_alternate_shape_mapping() {
        let normalized = normalize(&json!({
            "possibleDiseases": [
                { "name": "Flu", "confidence": 80, "treatment": { "traditional": ["Rest"] } }
            ]
        }));

        assert_eq!(normalized.shape, ResponseShape::Alternate);
        let items = &normalized.response.diagnosis;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].disease, "Flu");
        assert_eq!(items[0].confidence, 80);
        assert_eq!(
            items[0].treatments,
            vec![Treatment {
                name: "Rest".to_string(),
                description: String::new(),
                treatment_type: TreatmentType::Traditional,
            }]
        );
        assert!(items[0].medicines.is_empty());
        assert!(items[0].preventive_measures.is_empty());
        assert_eq!(normalized.response.disclaimer, DEFAULT_DISCLAIMER);
    }

    #[test]
    fn test_alternate_shape_unpacks_otc_medications() {
        let normalized = normalize(&json!({
            "possibleDiseases": [{
                "disease": "Tension headache",
                "description": "Muscle tension",
                "prevention": "Stretch often",
                "treatment": {
                    "traditional": [
                        {
                            "type": "Over-the-counter medications",
                            "details": [
                                { "medicine": "Ibuprofen", "dosage": "200mg", "sideEffects": "Nausea" },
                                { "medicine": "Aspirin", "sideEffects": 12 },
                                { "dosage": "missing name" }
                            ]
                        }
                    ],
                    "alternative": [{ "type": "Massage", "details": "Neck and shoulders" }]
                }
            }],
            "disclaimer": "See a doctor"
        }));

        let item = &normalized.response.diagnosis[0];
        assert_eq!(item.preventive_measures, vec!["Stretch often".to_string()]);
        assert_eq!(item.medicines.len(), 2);
        assert_eq!(item.medicines[0].name, "Ibuprofen");
        assert_eq!(item.medicines[0].dosage, "200mg");
        assert_eq!(item.medicines[0].side_effects, vec!["Nausea".to_string()]);
        assert_eq!(item.medicines[1].dosage, "");
        assert!(item.medicines[1].side_effects.is_empty());

        assert_eq!(item.treatments.len(), 2);
        assert_eq!(item.treatments[0].name, OTC_MEDICATIONS_LABEL);
        assert_eq!(item.treatments[0].description, "Ibuprofen, Aspirin");
        assert_eq!(item.treatments[1].name, "Massage");
        assert_eq!(item.treatments[1].description, "Neck and shoulders");
        assert_eq!(item.treatments[1].treatment_type, TreatmentType::Alternative);
        assert_eq!(normalized.response.disclaimer, "See a doctor");
    }

    #[test]
    fn test_otc_label_in_alternative_category_is_not_unpacked() {
        let normalized = normalize(&json!({
            "possibleDiseases": [{
                "disease": "Cold",
                "treatment": {
                    "alternative": [{
                        "type": "Over-the-counter medications",
                        "details": [{ "medicine": "Zinc" }]
                    }]
                }
            }]
        }));

        let item = &normalized.response.diagnosis[0];
        assert!(item.medicines.is_empty());
        assert_eq!(item.treatments[0].description, "Zinc");
    }

    #[test]
    fn test_alternate_key_must_be_a_sequence() {
        let normalized = normalize(&json!({ "possibleDiseases": { "name": "Flu" } }));
        assert!(normalized.is_fallback());
    }
}
