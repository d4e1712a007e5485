use tracing::{debug, info, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    diagnosis::{
        extraction::normalize_model_output,
        normalizer::{NormalizedDiagnosis, ResponseShape},
        ports::{DiagnosisService, LLMClient},
        prompt::{build_system_prompt, build_user_prompt, get_diagnosis_schema},
        value_objects::{CompletionRequest, DiagnoseInput},
    },
};

impl<LLM> DiagnosisService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn diagnose(&self, input: DiagnoseInput) -> Result<NormalizedDiagnosis, CoreError> {
        if input.symptoms.iter().all(|s| s.trim().is_empty()) {
            return Err(CoreError::InvalidInput(
                "at least one symptom is required".to_string(),
            ));
        }

        let request = CompletionRequest {
            system_prompt: build_system_prompt(&input.language),
            user_prompt: build_user_prompt(&input.joined_symptoms()),
            response_schema: get_diagnosis_schema(),
        };

        let raw_response = self.llm_client.generate(request).await?;
        debug!(
            provider = self.llm_client.provider_name(),
            "Model response: {}", raw_response
        );

        let normalized = normalize_model_output(&raw_response);
        match normalized.shape {
            ResponseShape::Canonical => {}
            ResponseShape::Alternate => {
                info!("Model answered with the alternate disease layout")
            }
            ResponseShape::Unrecognized => {
                warn!("Model response could not be interpreted, using fallback diagnosis")
            }
        }

        Ok(normalized)
    }
}
