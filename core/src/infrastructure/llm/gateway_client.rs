use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        diagnosis::{ports::LLMClient, value_objects::CompletionRequest},
    },
    infrastructure::llm::gemini_client::status_to_error,
};

pub const DEFAULT_GATEWAY_BASE_URL: &str = "https://ai.gateway.lovable.dev/v1";
pub const DEFAULT_GATEWAY_MODEL: &str = "google/gemini-2.5-flash";

/// Client for OpenAI-compatible `chat/completions` gateways.
#[derive(Debug, Clone)]
pub struct GatewayLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl GatewayLLMClient {
    pub fn new(api_key: String, model_name: String, base_url: String) -> Self {
        Self {
            api_key,
            model_name,
            base_url,
            client: Client::new(),
        }
    }

    fn endpoint(&self) -> Result<url::Url, CoreError> {
        let raw = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        url::Url::parse(&raw).map_err(|e| {
            tracing::error!("Invalid gateway endpoint {}: {}", raw, e);
            CoreError::ExternalServiceError(format!("Invalid LLM endpoint: {}", e))
        })
    }
}

impl LLMClient for GatewayLLMClient {
    fn provider_name(&self) -> &'static str {
        "gateway"
    }

    async fn generate(&self, request: CompletionRequest) -> Result<String, CoreError> {
        let body = ChatRequest {
            model: self.model_name.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: request.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: request.user_prompt,
                },
            ],
        };

        let response = self
            .client
            .post(self.endpoint()?)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("AI gateway request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("AI gateway error: {} - {}", status, error_text);
            return Err(status_to_error(status, error_text));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse AI gateway response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}
