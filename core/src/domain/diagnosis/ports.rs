use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    diagnosis::{
        entities::{DiagnosisResponse, Symptom},
        normalizer::NormalizedDiagnosis,
        value_objects::{CompletionRequest, DiagnoseInput},
    },
};

/// LLM Client trait for calling AI models
pub trait LLMClient: Send + Sync {
    fn provider_name(&self) -> &'static str;

    /// Sends one completion request and returns the model's raw text.
    fn generate(
        &self,
        request: CompletionRequest,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for diagnosis business logic
pub trait DiagnosisService: Send + Sync {
    fn diagnose(
        &self,
        input: DiagnoseInput,
    ) -> impl Future<Output = Result<NormalizedDiagnosis, CoreError>> + Send;
}

/// Transient user-facing messages (toasts).
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify_error(&self, message: &str);
}

/// Caller-facing diagnosis request.
///
/// `None` means the request itself failed; a response that could not be
/// interpreted still comes back as `Some` holding the fallback diagnosis.
pub trait DiagnosisClient: Send + Sync {
    fn request_diagnosis(
        &self,
        symptoms: &[Symptom],
        language: &str,
    ) -> impl Future<Output = Option<DiagnosisResponse>> + Send;
}
