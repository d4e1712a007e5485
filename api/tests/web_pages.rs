mod common;

use axum::http::StatusCode;
use common::TestApp;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn test_form_page_starts_empty(app: &mut TestApp) {
    let response = app.server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("What symptoms are you experiencing?"));
    assert!(html.contains("No symptoms added yet"));
    assert!(html.contains("value=\"submit\" disabled"));
    assert!(html.contains("value=\"add\">+</button>"));
    assert!(!html.contains("value=\"add\" disabled"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_adding_symptoms_round_trips_state(app: &mut TestApp) {
    let response = app
        .server
        .post("/")
        .form(&[
            ("symptoms", "[]"),
            ("input", "  Fever "),
            ("language", "es"),
            ("action", "add"),
        ])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<span class=\"tag\">Fever"));
    assert!(html.contains("<option value=\"es\" selected>Spanish</option>"));
    assert!(!html.contains("No symptoms added yet"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_suggest_opens_matching_panel(app: &mut TestApp) {
    let response = app
        .server
        .post("/")
        .form(&[("input", "head"), ("action", "suggest")])
        .await;

    let html = response.text();
    assert!(html.contains("value=\"choose:Headache\""));
    assert!(!html.contains("value=\"choose:Fever\""));
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_submit_renders_results(app: &mut TestApp) {
    let symptoms = r#"[{"id":"0190a1b2-c3d4-7e5f-8a9b-0c1d2e3f4a5b","text":"Headache"}]"#;
    let response = app
        .server
        .post("/")
        .form(&[
            ("symptoms", symptoms),
            ("language", "en"),
            ("action", "submit"),
        ])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Diagnosis Results"));
    assert!(html.contains("Migraine"));
    assert!(html.contains("82% match"));
    assert!(html.contains("diagnosis-tag-high"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_failed_submit_keeps_form_and_shows_toast(app: &mut TestApp) {
    let symptoms = r#"[{"id":"0190a1b2-c3d4-7e5f-8a9b-0c1d2e3f4a5b","text":"zz-ratelimit"}]"#;
    let response = app
        .server
        .post("/")
        .form(&[("symptoms", symptoms), ("action", "submit")])
        .await;

    let html = response.text();
    assert!(html.contains("Rate limit exceeded. Please try again later."));
    assert!(html.contains("zz-ratelimit"));
    assert!(!html.contains("Diagnosis Results"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_unreadable_model_output_shows_fallback_and_toast(app: &mut TestApp) {
    let symptoms = r#"[{"id":"0190a1b2-c3d4-7e5f-8a9b-0c1d2e3f4a5b","text":"zz-prose"}]"#;
    let response = app
        .server
        .post("/")
        .form(&[("symptoms", symptoms), ("action", "submit")])
        .await;

    let html = response.text();
    assert!(html.contains("Unable to process response"));
    assert!(html.contains("Error processing the diagnosis data. Please try again."));
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_sign_out_redirects(app: &mut TestApp) {
    let response = app.server.post("/sign-out").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/login");
}

const TWO_SYMPTOMS: &str = r#"[{"id":"0190a1b2-c3d4-7e5f-8a9b-0c1d2e3f4a5b","text":"Cough"},{"id":"0190a1b2-c3d4-7e5f-8a9b-0c1d2e3f4a5c","text":"Rash"}]"#;

#[test_context(TestApp)]
#[tokio::test]
async fn test_add_button_stays_usable_after_adding(app: &mut TestApp) {
    let response = app
        .server
        .post("/")
        .form(&[("symptoms", "[]"), ("input", "Cough"), ("action", "add")])
        .await;

    let html = response.text();
    assert!(html.contains("<span class=\"tag\">Cough"));
    assert!(html.contains("value=\"add\">+</button>"));
    assert!(!html.contains("value=\"add\" disabled"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_remove_drops_only_that_symptom(app: &mut TestApp) {
    let response = app
        .server
        .post("/")
        .form(&[
            ("symptoms", TWO_SYMPTOMS),
            ("action", "remove:0190a1b2-c3d4-7e5f-8a9b-0c1d2e3f4a5b"),
        ])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(!html.contains("<span class=\"tag\">Cough"));
    assert!(html.contains("<span class=\"tag\">Rash"));
    assert!(html.contains("remove:0190a1b2-c3d4-7e5f-8a9b-0c1d2e3f4a5c"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_choose_adds_suggestion(app: &mut TestApp) {
    let response = app
        .server
        .post("/")
        .form(&[
            ("symptoms", "[]"),
            ("input", "head"),
            ("action", "choose:Headache"),
        ])
        .await;

    let html = response.text();
    assert!(html.contains("<span class=\"tag\">Headache"));
    assert!(!html.contains("value=\"choose:Headache\""));
    assert!(!html.contains("value=\"submit\" disabled"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_dismiss_closes_suggestions_and_keeps_input(app: &mut TestApp) {
    let response = app
        .server
        .post("/")
        .form(&[("input", "head"), ("action", "suggest")])
        .await;
    assert!(response.text().contains("value=\"choose:Headache\""));

    let response = app
        .server
        .post("/")
        .form(&[("input", "head"), ("action", "dismiss")])
        .await;

    let html = response.text();
    assert!(!html.contains("value=\"choose:"));
    assert!(html.contains("value=\"head\""));
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_reset_clears_symptoms_and_language(app: &mut TestApp) {
    let response = app
        .server
        .post("/")
        .form(&[
            ("symptoms", TWO_SYMPTOMS),
            ("input", "Fev"),
            ("language", "fr"),
            ("action", "reset"),
        ])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("No symptoms added yet"));
    assert!(!html.contains("<span class=\"tag\">"));
    assert!(html.contains("<option value=\"en\" selected>English</option>"));
    assert!(html.contains("value=\"submit\" disabled"));
}
