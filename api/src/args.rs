use std::time::Duration;

use clap::Parser;
use hairsphere_core::domain::common::{
    DEFAULT_GEMINI_MODEL, DiagnosticConfig, HairsphereConfig, LLMConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "hairsphere-api", version, about = "HairSphere API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub diagnostic: DiagnosticArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long = "disable-metrics", env = "DISABLE_METRICS")]
    pub disable_metrics: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DiagnosticArgs {
    /// Idle sessions older than this are discarded
    #[arg(
        long = "session-idle-timeout-secs",
        env = "SESSION_IDLE_TIMEOUT_SECS",
        default_value_t = 3600
    )]
    pub session_idle_timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Used when `RUST_LOG` is not set
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<Args> for HairsphereConfig {
    fn from(args: Args) -> Self {
        HairsphereConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
            },
            diagnostic: DiagnosticConfig {
                session_idle_timeout: Duration::from_secs(
                    args.diagnostic.session_idle_timeout_secs,
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origins_are_comma_separated() {
        let args = Args::try_parse_from([
            "hairsphere-api",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ])
        .unwrap();
        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.test", "http://b.test"]
        );
    }

    #[test]
    fn test_config_carries_llm_settings() {
        let args = Args::try_parse_from([
            "hairsphere-api",
            "--gemini-api-key",
            "secret",
            "--gemini-model",
            "gemini-test",
        ])
        .unwrap();

        let config = HairsphereConfig::from(args);
        assert_eq!(config.llm.gemini_api_key.as_deref(), Some("secret"));
        assert_eq!(config.llm.gemini_model, "gemini-test");
        assert_eq!(
            config.diagnostic.session_idle_timeout,
            Duration::from_secs(3600)
        );
    }

    #[test]
    fn test_session_idle_timeout_is_configurable() {
        let args = Args::try_parse_from([
            "hairsphere-api",
            "--session-idle-timeout-secs",
            "90",
        ])
        .unwrap();

        let config = HairsphereConfig::from(args);
        assert_eq!(
            config.diagnostic.session_idle_timeout,
            Duration::from_secs(90)
        );
    }
}
