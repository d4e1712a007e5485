use axum::{extract::State, response::Html};
use curetrackr_core::domain::symptom_form::SymptomForm;

use crate::application::http::{server::app_state::AppState, web::views::render_form_page};

pub async fn show_form(State(state): State<AppState>) -> Html<String> {
    Html(render_form_page(
        &SymptomForm::new(),
        &[],
        &state.args.server.root_path,
    ))
}
