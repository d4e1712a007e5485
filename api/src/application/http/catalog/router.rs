use super::handlers::get_languages::get_languages;
use super::handlers::get_suggestions::get_suggestions;
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};

pub fn catalog_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/symptoms/suggestions", state.args.server.root_path),
            get(get_suggestions),
        )
        .route(
            &format!("{}/languages", state.args.server.root_path),
            get(get_languages),
        )
}
