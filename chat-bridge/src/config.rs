//! Bridge configuration: LLM settings (from llm-client) + Google Chat settings + log path.
//! Loaded from the environment, optionally populated from a `.env` settings file first.

use std::env;
use std::path::Path;

use bridge_core::{BridgeError, Result};
use llm_client::{EnvLlmConfig, LlmConfig};
use tracing::{info, warn};

pub const GOOGLE_APPLICATION_CREDENTIALS: &str = "GOOGLE_APPLICATION_CREDENTIALS";
pub const GOOGLE_CHAT_SPACE_NAME: &str = "GOOGLE_CHAT_SPACE_NAME";
pub const GOOGLE_CHAT_API_URL: &str = "GOOGLE_CHAT_API_URL";
pub const LOG_FILE: &str = "LOG_FILE";

pub const DEFAULT_LOG_FILE: &str = "logs/chat-bridge.log";

/// Loads `path` into the process environment. Variables already set are kept.
///
/// A declared file that cannot be read is a fatal [`BridgeError::Config`].
pub fn load_settings_file(path: &Path) -> Result<()> {
    dotenvy::from_path(path).map_err(|e| {
        BridgeError::Config(format!(
            "failed to load settings file {}: {}",
            path.display(),
            e
        ))
    })
}

/// Google Chat connection settings.
#[derive(Clone)]
pub struct ChatConfig {
    /// Raw service-account key JSON (GOOGLE_APPLICATION_CREDENTIALS holds the JSON itself, not a path).
    pub credentials_json: String,
    /// GOOGLE_CHAT_SPACE_NAME, e.g. `spaces/AAAA1234`
    pub space_name: String,
    /// GOOGLE_CHAT_API_URL
    pub api_url: String,
}

impl std::fmt::Debug for ChatConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatConfig")
            .field("credentials_json", &format!("<{} bytes>", self.credentials_json.len()))
            .field("space_name", &self.space_name)
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl ChatConfig {
    pub fn from_env() -> Self {
        let credentials_json = env::var(GOOGLE_APPLICATION_CREDENTIALS).unwrap_or_default();
        let space_name = env::var(GOOGLE_CHAT_SPACE_NAME).unwrap_or_default();
        let api_url = env::var(GOOGLE_CHAT_API_URL)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| google_chat::DEFAULT_API_URL.to_string());
        Self {
            credentials_json,
            space_name,
            api_url,
        }
    }

    pub fn missing_keys(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.credentials_json.trim().is_empty() {
            missing.push(GOOGLE_APPLICATION_CREDENTIALS);
        }
        if self.space_name.trim().is_empty() {
            missing.push(GOOGLE_CHAT_SPACE_NAME);
        }
        missing
    }
}

/// Full bridge config.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    pub llm: EnvLlmConfig,
    pub chat: ChatConfig,
    /// LOG_FILE
    pub log_file: String,
}

impl BridgeConfig {
    /// Reads all keys from the environment. Never fails: unset required keys load as empty strings
    /// and are reported by [`BridgeConfig::missing_keys`]; they fail later at the point of use.
    pub fn from_env() -> Self {
        let log_file = env::var(LOG_FILE)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
        Self {
            llm: EnvLlmConfig::from_env(),
            chat: ChatConfig::from_env(),
            log_file,
        }
    }

    /// Required keys that are unset or empty, LLM keys first.
    pub fn missing_keys(&self) -> Vec<&'static str> {
        let mut missing = self.llm.missing_keys();
        missing.extend(self.chat.missing_keys());
        missing
    }

    /// Logs one warning per missing required key and a summary of the loaded values (secrets masked).
    pub fn log_summary(&self) {
        for key in self.missing_keys() {
            warn!(key = %key, "Required setting is not set; requests depending on it will fail");
        }
        info!(
            model = %self.llm.model(),
            openai_base_url = %self.llm.base_url(),
            api_key = %openai_client::mask_token(self.llm.api_key()),
            space = %self.chat.space_name,
            chat_api_url = %self.chat.api_url,
            log_file = %self.log_file,
            "Configuration loaded"
        );
    }

    /// Rejects settings that can never work: endpoint URLs that do not parse.
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(self.llm.base_url()).is_err() {
            return Err(BridgeError::Config(format!(
                "OPENAI_BASE_URL is not a valid URL: {}",
                self.llm.base_url()
            )));
        }
        if reqwest::Url::parse(&self.chat.api_url).is_err() {
            return Err(BridgeError::Config(format!(
                "{} is not a valid URL: {}",
                GOOGLE_CHAT_API_URL, self.chat.api_url
            )));
        }
        Ok(())
    }
}
