//! OpenAI implementation of [`LlmClient`]: wraps openai-client and sends the conversation as-is.

use async_trait::async_trait;
use bridge_core::CompletionError;
use prompt::Conversation;
use tracing::{info, instrument};

use super::{chat_message_to_openai, LlmClient, LlmConfig};

/// [`LlmClient`] backed by openai-client. The model is fixed at construction.
#[derive(Clone)]
pub struct OpenAILlmClient {
    client: openai_client::OpenAIClient,
    model: String,
}

impl OpenAILlmClient {
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        Self {
            client: openai_client::OpenAIClient::with_base_url(api_key, base_url),
            model,
        }
    }

    pub fn from_config(config: &dyn LlmConfig) -> Self {
        Self::with_base_url(
            config.api_key().to_string(),
            config.base_url().to_string(),
            config.model().to_string(),
        )
    }
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    #[instrument(skip(self, conversation), fields(model = %self.model))]
    async fn complete(&self, conversation: Conversation) -> Result<String, CompletionError> {
        let openai_messages = conversation
            .turns()
            .iter()
            .map(chat_message_to_openai)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(CompletionError::Request)?;

        let result = self
            .client
            .chat_completion(&self.model, openai_messages)
            .await
            .map_err(CompletionError::Request)?;

        info!(candidates = result.choices.len(), "Completion received");

        result.into_first().ok_or(CompletionError::NoCandidates)
    }
}
