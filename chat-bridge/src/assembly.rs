//! Assembly: builds the LLM client, processor, and dispatcher from config. Used by the [facade](crate::facade).

use std::sync::Arc;

use bridge_core::{NoopReplyDelivery, ReplyDelivery};
use llm_client::{LlmClient, OpenAILlmClient};

use crate::config::BridgeConfig;
use crate::handlers::{Dispatcher, QuestionProcessor};

/// Builds the question processor over the OpenAI client described by `config`.
pub(crate) fn build_processor(config: &BridgeConfig) -> QuestionProcessor {
    let llm_client: Arc<dyn LlmClient> = Arc::new(OpenAILlmClient::from_config(&config.llm));
    QuestionProcessor::new(llm_client)
}

/// Builds the dispatcher. Replies are not posted back to the space yet, so delivery is the no-op.
pub(crate) fn build_dispatcher(config: &BridgeConfig) -> Dispatcher {
    let delivery: Arc<dyn ReplyDelivery> = Arc::new(NoopReplyDelivery);
    Dispatcher::new(build_processor(config), delivery)
}
