use clap::{Parser, ValueEnum};
use curetrackr_core::{
    domain::common::{CureTrackrConfig, LLMConfig, LLMProviderKind},
    infrastructure::llm::{
        gateway_client::{DEFAULT_GATEWAY_BASE_URL, DEFAULT_GATEWAY_MODEL},
        gemini_client::DEFAULT_GEMINI_BASE_URL,
    },
};

#[derive(Debug, Clone, Parser)]
#[command(name = "curetrackr", version, about = "Symptom intake and AI diagnosis server")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub llm: LlmArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(
        long = "metrics-enabled",
        env = "METRICS_ENABLED",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub metrics_enabled: bool,

    /// Where the browser is sent after signing out.
    #[arg(long = "auth-redirect-url", env = "AUTH_REDIRECT_URL", default_value = "/auth")]
    pub auth_redirect_url: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LlmProviderArg {
    Gemini,
    Gateway,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "llm-provider", env = "LLM_PROVIDER", value_enum, default_value = "gemini")]
    pub provider: LlmProviderArg,

    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", default_value = "")]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-1.5-flash")]
    pub gemini_model: String,

    #[arg(long = "gemini-base-url", env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,

    #[arg(long = "gateway-api-key", env = "LLM_GATEWAY_API_KEY", default_value = "")]
    pub gateway_api_key: String,

    #[arg(long = "gateway-model", env = "LLM_GATEWAY_MODEL", default_value = DEFAULT_GATEWAY_MODEL)]
    pub gateway_model: String,

    #[arg(long = "gateway-base-url", env = "LLM_GATEWAY_BASE_URL", default_value = DEFAULT_GATEWAY_BASE_URL)]
    pub gateway_base_url: String,
}

impl From<Args> for CureTrackrConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                provider: match args.llm.provider {
                    LlmProviderArg::Gemini => LLMProviderKind::Gemini,
                    LlmProviderArg::Gateway => LLMProviderKind::Gateway,
                },
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
                gateway_api_key: args.llm.gateway_api_key,
                gateway_model: args.llm.gateway_model,
                gateway_base_url: args.llm.gateway_base_url,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["curetrackr"]);
        assert_eq!(args.server.port, 3333);
        assert_eq!(args.server.root_path, "");
        assert!(args.server.metrics_enabled);
        assert_eq!(args.llm.provider, LlmProviderArg::Gemini);
    }

    #[test]
    fn test_gateway_config_conversion() {
        let args = Args::parse_from([
            "curetrackr",
            "--llm-provider",
            "gateway",
            "--gateway-api-key",
            "token",
            "--allowed-origins",
            "http://a.test,http://b.test",
            "--metrics-enabled=false",
        ]);
        assert_eq!(args.server.allowed_origins.len(), 2);
        assert!(!args.server.metrics_enabled);

        let config = CureTrackrConfig::from(args);
        assert_eq!(config.llm.provider, LLMProviderKind::Gateway);
        assert_eq!(config.llm.gateway_api_key, "token");
        assert_eq!(config.llm.gateway_model, DEFAULT_GATEWAY_MODEL);
    }
}
