use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct CureTrackrConfig {
    pub llm: LLMConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LLMProviderKind {
    Gemini,
    Gateway,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub provider: LLMProviderKind,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub gateway_api_key: String,
    pub gateway_model: String,
    pub gateway_base_url: String,
}

pub fn generate_timestamp() -> Timestamp {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    Timestamp::from_unix(NoContext, now, 0)
}

pub fn generate_uuid_v7() -> Uuid {
    Uuid::new_v7(generate_timestamp())
}
