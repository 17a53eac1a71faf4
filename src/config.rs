//! Runtime configuration resolved from the environment.

use std::env;

use tracing::debug;

/// Environment variable holding the base URL of the Ollama service.
pub const OLLAMA_URL_ENV_VAR: &str = "AC_OLLAMA_URL";

/// Environment variable holding the model identifier.
pub const OLLAMA_MODEL_ENV_VAR: &str = "AC_OLLAMA_MODEL";

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_OLLAMA_MODEL: &str = "qwen2.5-coder:14b";

/// Model service settings shared by every exchange in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub ollama_url: String,
    pub model: String,
}

impl Config {
    /// Resolve configuration from `AC_OLLAMA_URL` and `AC_OLLAMA_MODEL`.
    ///
    /// Unset or empty variables fall back to the built-in defaults.
    pub fn from_env() -> Self {
        let config = Self {
            ollama_url: env_or_default(OLLAMA_URL_ENV_VAR, DEFAULT_OLLAMA_URL),
            model: env_or_default(OLLAMA_MODEL_ENV_VAR, DEFAULT_OLLAMA_MODEL),
        };
        debug!(url = %config.ollama_url, model = %config.model, "Resolved model service config");
        config
    }

    /// Full URL of the chat endpoint.
    pub fn chat_url(&self) -> String {
        format!("{}/api/chat", self.ollama_url.trim_end_matches('/'))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            model: DEFAULT_OLLAMA_MODEL.to_string(),
        }
    }
}

fn env_or_default(name: &str, default: &str) -> String {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => v,
        _ => default.to_string(),
    }
}
