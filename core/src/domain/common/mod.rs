use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

pub mod entities;
pub mod services;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_SESSION_IDLE_TIMEOUT: Duration = Duration::from_secs(60 * 60);

#[derive(Clone, Debug)]
pub struct HairsphereConfig {
    pub llm: LLMConfig,
    pub diagnostic: DiagnosticConfig,
}

#[derive(Clone, Debug)]
pub struct DiagnosticConfig {
    /// Sessions untouched for longer than this are discarded.
    pub session_idle_timeout: Duration,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        Self {
            session_idle_timeout: DEFAULT_SESSION_IDLE_TIMEOUT,
        }
    }
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    /// `None` keeps the service running; LLM-backed features then degrade.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}
