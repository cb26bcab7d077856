//! Process configuration read once at start-up.
//!
//! Handlers never touch the environment: [`ServerConfig`] is built in `main`
//! and injected into [`crate::state::AppState`].
//!
//! Environment variables:
//! - `OPENAI_API_KEY`: completion API secret (no default; checked per request)
//! - `CONTENTGRADE_HOST`: bind address (default: "0.0.0.0")
//! - `CONTENTGRADE_PORT`: listen port (default: "3000")
//! - `CONTENTGRADE_API_BASE_URL`: OpenAI-compatible API base
//!   (default: "https://api.openai.com/v1")
//! - `CONTENTGRADE_MODEL`: model identifier (default: "gpt-4")

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Configuration errors detected at start-up.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid CONTENTGRADE_PORT '{0}': expected an integer in 0..=65535")]
    InvalidPort(String),
}

/// Settings for the completion provider.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmConfig {
    /// Bearer secret. `None` is allowed at start-up; grading requests then
    /// fail with the missing-key error.
    pub api_key: Option<String>,
    pub api_base_url: String,
    pub model: String,
    pub temperature: f64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        LlmConfig {
            api_key: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl LlmConfig {
    /// Full URL of the chat completions endpoint.
    pub fn completions_endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub llm: LlmConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            llm: LlmConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let defaults = ServerConfig::default();

        let port = match get("CONTENTGRADE_PORT") {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) => port,
                Err(_) => return Err(ConfigError::InvalidPort(raw)),
            },
            None => defaults.port,
        };

        Ok(ServerConfig {
            host: get("CONTENTGRADE_HOST").unwrap_or(defaults.host),
            port,
            llm: LlmConfig {
                api_key: get("OPENAI_API_KEY"),
                api_base_url: get("CONTENTGRADE_API_BASE_URL")
                    .unwrap_or(defaults.llm.api_base_url),
                model: get("CONTENTGRADE_MODEL").unwrap_or(defaults.llm.model),
                temperature: defaults.llm.temperature,
            },
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
