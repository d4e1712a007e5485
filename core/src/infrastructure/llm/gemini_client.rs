use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    diagnosis::{ports::LLMClient, value_objects::CompletionRequest},
};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    #[serde(default)]
    text: String,
}

impl GeminiLLMClient {
    pub fn new(api_key: String, model_name: String, base_url: String) -> Self {
        Self {
            api_key,
            model_name,
            base_url,
            client: Client::new(),
        }
    }

    fn endpoint(&self) -> Result<url::Url, CoreError> {
        let raw = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model_name
        );
        let mut url = url::Url::parse(&raw).map_err(|e| {
            tracing::error!("Invalid Gemini endpoint {}: {}", raw, e);
            CoreError::ExternalServiceError(format!("Invalid LLM endpoint: {}", e))
        })?;
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let response = self
            .client
            .post(self.endpoint()?)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(status_to_error(status, error_text));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        gemini_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

/// Maps an upstream non-success status onto the core error taxonomy.
pub(crate) fn status_to_error(status: StatusCode, body: String) -> CoreError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => CoreError::RateLimited,
        StatusCode::PAYMENT_REQUIRED => CoreError::PaymentRequired,
        _ => CoreError::ExternalServiceError(format!("LLM API returned error: {} - {}", status, body)),
    }
}

impl LLMClient for GeminiLLMClient {
    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    async fn generate(&self, request: CompletionRequest) -> Result<String, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: request.user_prompt,
                }],
            }],
            system_instruction: Some(Content {
                parts: vec![Part {
                    text: request.system_prompt,
                }],
            }),
            generation_config: Some(GenerationConfig {
                temperature: 0.4,
                top_k: 32,
                top_p: 0.95,
                max_output_tokens: 4096,
                response_mime_type: "application/json".to_string(),
                response_schema: request.response_schema,
            }),
        };

        self.call_gemini_api(request).await
    }
}
