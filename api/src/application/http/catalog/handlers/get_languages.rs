use curetrackr_core::domain::symptom_form::catalog::{LANGUAGES, Language};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct GetLanguagesResponse {
    pub data: Vec<Language>,
}

#[utoipa::path(
    get,
    path = "/languages",
    tag = "catalog",
    summary = "Supported languages",
    description = "Lists the languages a diagnosis can be requested in.",
    responses(
        (status = 200, body = GetLanguagesResponse)
    )
)]
pub async fn get_languages() -> Result<Response<GetLanguagesResponse>, ApiError> {
    Ok(Response::OK(GetLanguagesResponse {
        data: LANGUAGES.to_vec(),
    }))
}
