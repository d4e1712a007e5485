use tracing::info;

use crate::{
    domain::{
        common::{CureTrackrConfig, LLMProviderKind, services::Service},
        diagnosis::ports::LLMClient,
    },
    infrastructure::llm::LLMProvider,
};

pub type CureTrackrService = Service<LLMProvider>;

pub fn create_service(config: CureTrackrConfig) -> Result<CureTrackrService, anyhow::Error> {
    let api_key = match config.llm.provider {
        LLMProviderKind::Gemini => &config.llm.gemini_api_key,
        LLMProviderKind::Gateway => &config.llm.gateway_api_key,
    };
    if api_key.trim().is_empty() {
        anyhow::bail!(
            "no API key configured for the {:?} LLM provider",
            config.llm.provider
        );
    }

    let llm_client = LLMProvider::from(config.llm);
    info!(provider = llm_client.provider_name(), "LLM provider configured");

    Ok(Service::new(llm_client))
}
