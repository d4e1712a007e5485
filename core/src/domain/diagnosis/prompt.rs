use serde_json::json;

/// Returns the JSON schema for diagnosis LLM responses
pub fn get_diagnosis_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "diagnosis": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "disease": { "type": "string" },
                        "confidence": { "type": "integer" },
                        "description": { "type": "string" },
                        "treatments": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "name": { "type": "string" },
                                    "description": { "type": "string" },
                                    "type": {
                                        "type": "string",
                                        "enum": ["traditional", "alternative"]
                                    }
                                },
                                "required": ["name", "description", "type"]
                            }
                        },
                        "medicines": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "name": { "type": "string" },
                                    "dosage": { "type": "string" },
                                    "sideEffects": {
                                        "type": "array",
                                        "items": { "type": "string" }
                                    },
                                    "alternatives": {
                                        "type": "array",
                                        "items": { "type": "string" }
                                    }
                                },
                                "required": ["name", "dosage", "sideEffects"]
                            }
                        },
                        "preventiveMeasures": {
                            "type": "array",
                            "items": { "type": "string" }
                        }
                    },
                    "required": [
                        "disease", "confidence", "description",
                        "treatments", "medicines", "preventiveMeasures"
                    ]
                }
            },
            "disclaimer": { "type": "string" }
        },
        "required": ["diagnosis", "disclaimer"]
    })
}

pub fn build_system_prompt(language: &str) -> String {
    format!(
        r#"You are a medical diagnosis assistant. Provide structured medical information based on symptoms.
Always return a JSON object with this exact structure:
{{
  "diagnosis": [
    {{
      "disease": "Disease Name",
      "confidence": 85,
      "description": "Brief description of the disease",
      "treatments": [
        {{
          "name": "Treatment name",
          "description": "Treatment details",
          "type": "traditional"
        }}
      ],
      "medicines": [
        {{
          "name": "Medicine name",
          "dosage": "Dosage information",
          "sideEffects": ["Side effect 1", "Side effect 2"]
        }}
      ],
      "preventiveMeasures": ["Prevention tip 1", "Prevention tip 2"]
    }}
  ],
  "disclaimer": "This is not medical advice. Please consult a healthcare professional for proper diagnosis and treatment."
}}

Respond in {language} language."#
    )
}

pub fn build_user_prompt(symptoms: &str) -> String {
    format!(
        "Based on the following symptoms: {symptoms}, provide a medical diagnosis with:
1. Up to 5 possible diseases with confidence scores (0-100)
2. Brief descriptions of each disease
3. Treatment options (both traditional and alternative)
4. Specific medicines with dosage and side effects
5. Preventive measures

Return ONLY valid JSON without any markdown formatting or code blocks."
    )
}
