use axum::{extract::State, response::Redirect};
use curetrackr_core::domain::{diagnosis::client::ServiceDiagnosisClient, page::controller::PageController};

use crate::application::http::{
    server::{api_entities::api_error::ApiError, app_state::AppState},
    web::{session::RedirectSessionGateway, toasts::ToastCollector},
};

pub async fn sign_out(State(state): State<AppState>) -> Result<Redirect, ApiError> {
    let toasts = ToastCollector::default();
    let mut page = PageController::new(ServiceDiagnosisClient::new(&state.service, &toasts));
    let session = RedirectSessionGateway::new(state.args.server.auth_redirect_url.clone());

    page.sign_out(&session).await.map_err(ApiError::from)?;

    Ok(Redirect::to(session.redirect_url()))
}
