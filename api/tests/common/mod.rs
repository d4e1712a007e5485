use std::sync::Arc;

use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::post};
use axum_test::TestServer;
use clap::Parser;
use curetrackr_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};
use test_context::AsyncTestContext;
use tokio::{net::TcpListener, task::JoinHandle};

const CANONICAL: &str = r#"{"diagnosis":[{"disease":"Migraine","confidence":82,"description":"Recurring headache","treatments":[{"name":"Rest","description":"Dark room","type":"traditional"}],"medicines":[{"name":"Ibuprofen","dosage":"400mg","sideEffects":["Nausea"]}],"preventiveMeasures":["Sleep"]}],"disclaimer":"Talk to a doctor."}"#;

const ALTERNATE: &str = r#"{"possibleDiseases":[{"name":"Flu","confidence":80,"treatment":{"traditional":["Rest"]}}]}"#;

fn completion(content: &str) -> axum::response::Response {
    Json(json!({
        "choices": [{"message": {"role": "assistant", "content": content}}]
    }))
    .into_response()
}

/// Stand-in for the chat-completions gateway. Markers in the symptom text pick
/// the reply.
async fn fake_completions(Json(body): Json<Value>) -> axum::response::Response {
    let prompt = body["messages"][1]["content"]
        .as_str()
        .unwrap_or_default()
        .to_string();

    if prompt.contains("zz-ratelimit") {
        (StatusCode::TOO_MANY_REQUESTS, "slow down").into_response()
    } else if prompt.contains("zz-payment") {
        (StatusCode::PAYMENT_REQUIRED, "no credits").into_response()
    } else if prompt.contains("zz-outage") {
        (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response()
    } else if prompt.contains("zz-prose") {
        completion("I am sorry, I cannot provide a diagnosis.")
    } else if prompt.contains("zz-fenced") {
        completion(&format!("```json\n{}\n```", CANONICAL))
    } else if prompt.contains("zz-alternate") {
        completion(ALTERNATE)
    } else {
        completion(CANONICAL)
    }
}

pub struct TestApp {
    pub server: TestServer,
    upstream: JoinHandle<()>,
}

impl AsyncTestContext for TestApp {
    async fn setup() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let upstream = tokio::spawn(async move {
            let app = Router::new().route("/v1/chat/completions", post(fake_completions));
            axum::serve(listener, app).await.unwrap();
        });

        let base_url = format!("http://{}/v1", addr);
        let args = Args::parse_from([
            "curetrackr",
            "--llm-provider",
            "gateway",
            "--gateway-api-key",
            "test-token",
            "--gateway-base-url",
            base_url.as_str(),
            "--metrics-enabled=false",
            "--auth-redirect-url",
            "/login",
        ]);

        let app_state = state(Arc::new(args)).unwrap();
        let server = TestServer::new(router(app_state).unwrap()).unwrap();

        Self { server, upstream }
    }

    async fn teardown(self) {
        self.upstream.abort();
    }
}
