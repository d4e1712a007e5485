pub mod gateway_client;
pub mod gemini_client;
pub mod provider;

pub use gateway_client::GatewayLLMClient;
pub use gemini_client::GeminiLLMClient;
pub use provider::LLMProvider;
