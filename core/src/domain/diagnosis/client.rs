use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    diagnosis::{
        entities::{DiagnosisResponse, Symptom},
        ports::{DiagnosisClient, DiagnosisService, Notifier},
        value_objects::DiagnoseInput,
    },
};

pub const CONNECTION_ERROR_MESSAGE: &str =
    "Error connecting to diagnosis service. Please try again later.";

pub const PROCESSING_ERROR_MESSAGE: &str =
    "Error processing the diagnosis data. Please try again.";

/// Adapts a [`DiagnosisService`] to the caller-facing [`DiagnosisClient`]
/// contract, reporting every failure through a [`Notifier`].
pub struct ServiceDiagnosisClient<'a, S, N> {
    service: &'a S,
    notifier: &'a N,
}

impl<'a, S, N> ServiceDiagnosisClient<'a, S, N>
where
    S: DiagnosisService,
    N: Notifier,
{
    pub fn new(service: &'a S, notifier: &'a N) -> Self {
        Self { service, notifier }
    }
}

impl<S, N> DiagnosisClient for ServiceDiagnosisClient<'_, S, N>
where
    S: DiagnosisService,
    N: Notifier,
{
    async fn request_diagnosis(
        &self,
        symptoms: &[Symptom],
        language: &str,
    ) -> Option<DiagnosisResponse> {
        let input = DiagnoseInput::from_symptoms(symptoms, language);

        match self.service.diagnose(input).await {
            Ok(normalized) => {
                if normalized.is_fallback() {
                    error!("Error parsing diagnosis response, returning fallback");
                    self.notifier.notify_error(PROCESSING_ERROR_MESSAGE);
                }
                Some(normalized.response)
            }
            Err(e) => {
                error!("Diagnosis API error: {}", e);
                let message = match e {
                    CoreError::RateLimited | CoreError::PaymentRequired => e.to_string(),
                    _ => CONNECTION_ERROR_MESSAGE.to_string(),
                };
                self.notifier.notify_error(&message);
                None
            }
        }
    }
}
