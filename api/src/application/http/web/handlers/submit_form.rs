use axum::{Form, extract::State, response::Html};
use curetrackr_core::domain::{
    diagnosis::{client::ServiceDiagnosisClient, entities::Symptom},
    page::controller::{PageController, PageState},
    symptom_form::{KeyPress, PointerTarget, SymptomForm},
};
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use crate::application::http::{
    server::app_state::AppState,
    web::{
        toasts::ToastCollector,
        views::{render_form_page, render_results_page},
    },
};

/// Fields posted by the symptom form. The symptom list round-trips as JSON in
/// a hidden field.
#[derive(Debug, Default, Deserialize)]
pub struct SymptomFormPayload {
    #[serde(default)]
    pub symptoms: String,
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    Add,
    Suggest,
    Choose(String),
    Remove(Uuid),
    Dismiss,
    Submit,
    Reset,
    /// Language changes and unknown buttons just re-render the form.
    Refresh,
}

impl FormAction {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "add" => FormAction::Add,
            "suggest" => FormAction::Suggest,
            "dismiss" => FormAction::Dismiss,
            "submit" => FormAction::Submit,
            "reset" => FormAction::Reset,
            _ => {
                if let Some(suggestion) = raw.strip_prefix("choose:") {
                    FormAction::Choose(suggestion.to_string())
                } else if let Some(id) = raw.strip_prefix("remove:")
                    && let Ok(id) = Uuid::parse_str(id)
                {
                    FormAction::Remove(id)
                } else {
                    FormAction::Refresh
                }
            }
        }
    }
}

pub async fn submit_form(
    State(state): State<AppState>,
    Form(payload): Form<SymptomFormPayload>,
) -> Html<String> {
    let symptoms: Vec<Symptom> = if payload.symptoms.trim().is_empty() {
        Vec::new()
    } else {
        serde_json::from_str(&payload.symptoms).unwrap_or_else(|e| {
            debug!("Discarding unreadable symptom state: {}", e);
            Vec::new()
        })
    };

    let toasts = ToastCollector::default();
    let client = ServiceDiagnosisClient::new(&state.service, &toasts);
    let form = SymptomForm::restore(symptoms, &payload.language, &payload.input);
    let mut page = PageController::with_form(client, form);

    let action = FormAction::parse(&payload.action);
    debug!(?action, "Symptom form action");

    match action {
        FormAction::Add => {
            page.form_mut().handle_key(KeyPress::Enter);
        }
        FormAction::Suggest => page.form_mut().set_input(&payload.input),
        FormAction::Choose(suggestion) => {
            page.form_mut().choose_suggestion(&suggestion);
        }
        FormAction::Remove(id) => {
            page.form_mut().remove(id);
        }
        FormAction::Dismiss => page.form_mut().pointer_down(PointerTarget::Outside),
        FormAction::Submit => {
            page.submit().await;
        }
        FormAction::Reset => page.form_mut().reset(),
        FormAction::Refresh => page.form_mut().focus_input(),
    }

    let root_path = &state.args.server.root_path;
    let html = match page.state() {
        PageState::Success(response) => render_results_page(response, &toasts.messages(), root_path),
        _ => render_form_page(page.form(), &toasts.messages(), root_path),
    };

    Html(html)
}
