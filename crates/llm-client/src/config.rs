//! LLM configuration: trait and env-based implementation.

use std::env;

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const OPENAI_MODEL_NAME: &str = "OPENAI_MODEL_NAME";
pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";

/// LLM configuration interface for OpenAI-compatible APIs.
pub trait LlmConfig: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    fn model(&self) -> &str;
}

/// LLM config loaded from environment variables.
///
/// Required keys are not defaulted: an unset key loads as an empty string and is reported by
/// [`EnvLlmConfig::missing_keys`]; the request using it fails later.
#[derive(Debug, Clone)]
pub struct EnvLlmConfig {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model_name: String,
}

impl LlmConfig for EnvLlmConfig {
    fn api_key(&self) -> &str {
        &self.openai_api_key
    }
    fn base_url(&self) -> &str {
        &self.openai_base_url
    }
    fn model(&self) -> &str {
        &self.openai_model_name
    }
}

impl EnvLlmConfig {
    /// Load from environment variables.
    pub fn from_env() -> Self {
        let openai_api_key = env::var(OPENAI_API_KEY).unwrap_or_default();
        let openai_model_name = env::var(OPENAI_MODEL_NAME).unwrap_or_default();
        let openai_base_url = env::var(OPENAI_BASE_URL)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| openai_client::DEFAULT_BASE_URL.to_string());
        Self {
            openai_api_key,
            openai_base_url,
            openai_model_name,
        }
    }

    /// Names of required keys that were unset or empty.
    pub fn missing_keys(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.openai_api_key.trim().is_empty() {
            missing.push(OPENAI_API_KEY);
        }
        if self.openai_model_name.trim().is_empty() {
            missing.push(OPENAI_MODEL_NAME);
        }
        missing
    }
}
