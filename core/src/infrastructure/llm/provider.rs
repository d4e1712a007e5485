use crate::{
    domain::{
        common::{LLMConfig, LLMProviderKind, entities::app_errors::CoreError},
        diagnosis::{ports::LLMClient, value_objects::CompletionRequest},
    },
    infrastructure::llm::{gateway_client::GatewayLLMClient, gemini_client::GeminiLLMClient},
};

/// The configured model backend.
#[derive(Debug, Clone)]
pub enum LLMProvider {
    Gemini(GeminiLLMClient),
    Gateway(GatewayLLMClient),
}

impl From<LLMConfig> for LLMProvider {
    fn from(config: LLMConfig) -> Self {
        match config.provider {
            LLMProviderKind::Gemini => LLMProvider::Gemini(GeminiLLMClient::new(
                config.gemini_api_key,
                config.gemini_model,
                config.gemini_base_url,
            )),
            LLMProviderKind::Gateway => LLMProvider::Gateway(GatewayLLMClient::new(
                config.gateway_api_key,
                config.gateway_model,
                config.gateway_base_url,
            )),
        }
    }
}

impl LLMClient for LLMProvider {
    fn provider_name(&self) -> &'static str {
        match self {
            LLMProvider::Gemini(client) => client.provider_name(),
            LLMProvider::Gateway(client) => client.provider_name(),
        }
    }

    async fn generate(&self, request: CompletionRequest) -> Result<String, CoreError> {
        match self {
            LLMProvider::Gemini(client) => client.generate(request).await,
            LLMProvider::Gateway(client) => client.generate(request).await,
        }
    }
}
