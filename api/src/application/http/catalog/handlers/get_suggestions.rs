use axum::extract::Query;
use curetrackr_core::domain::symptom_form::catalog::{SYMPTOM_SUGGESTIONS, filter_suggestions};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};

#[derive(Debug, Deserialize, IntoParams)]
pub struct SuggestionsQuery {
    /// Case-insensitive substring to match; omit for the full list.
    pub q: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSuggestionsResponse {
    pub data: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/symptoms/suggestions",
    tag = "catalog",
    summary = "Symptom suggestions",
    description = "Returns the built-in symptom suggestions matching the query.",
    params(SuggestionsQuery),
    responses(
        (status = 200, body = GetSuggestionsResponse)
    )
)]
pub async fn get_suggestions(
    Query(query): Query<SuggestionsQuery>,
) -> Result<Response<GetSuggestionsResponse>, ApiError> {
    let matches = match query.q.as_deref() {
        Some(q) => filter_suggestions(q),
        None => SYMPTOM_SUGGESTIONS.to_vec(),
    };

    Ok(Response::OK(GetSuggestionsResponse {
        data: matches.into_iter().map(str::to_string).collect(),
    }))
}
