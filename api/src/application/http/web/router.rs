use super::handlers::{show_form::show_form, sign_out::sign_out, submit_form::submit_form};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};

pub fn web_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;
    Router::new()
        .route(&format!("{}/", root_path), get(show_form).post(submit_form))
        .route(&format!("{}/sign-out", root_path), post(sign_out))
}
