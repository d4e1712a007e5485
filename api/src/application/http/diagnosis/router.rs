use super::handlers::create_diagnosis::{__path_create_diagnosis, create_diagnosis};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(create_diagnosis))]
pub struct DiagnosisApiDoc;

pub fn diagnosis_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/diagnosis", state.args.server.root_path),
        post(create_diagnosis),
    )
}
