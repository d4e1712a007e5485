use axum::extract::State;
use curetrackr_core::domain::diagnosis::{
    entities::DiagnosisResponse, ports::DiagnosisService, value_objects::DiagnoseInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    diagnosis::validators::CreateDiagnosisValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateDiagnosisResponse {
    pub data: DiagnosisResponse,
    /// Set when the model output could not be interpreted and `data` is the
    /// canned fallback diagnosis.
    pub fallback: bool,
}

#[utoipa::path(
    post,
    path = "",
    tag = "diagnosis",
    summary = "Diagnose symptoms",
    description = "Sends the symptom list to the configured model and returns the normalized diagnosis.",
    responses(
        (status = 200, body = CreateDiagnosisResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 402, body = ApiErrorResponse),
        (status = 429, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    ),
    request_body = CreateDiagnosisValidator
)]
pub async fn create_diagnosis(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateDiagnosisValidator>,
) -> Result<Response<CreateDiagnosisResponse>, ApiError> {
    let input = DiagnoseInput {
        symptoms: payload
            .symptoms
            .into_iter()
            .map(|symptom| symptom.text.trim().to_string())
            .collect(),
        language: payload.language,
    };

    let normalized = state
        .service
        .diagnose(input)
        .await
        .map_err(ApiError::from)?;

    let fallback = normalized.is_fallback();
    Ok(Response::OK(CreateDiagnosisResponse {
        data: normalized.response,
        fallback,
    }))
}
