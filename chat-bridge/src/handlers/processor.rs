//! Question processor: one question in, one generated answer out.

use std::sync::Arc;

use bridge_core::CompletionError;
use llm_client::LlmClient;
use prompt::Conversation;
use tracing::instrument;

/// Turns a question into an answer via the configured [`LlmClient`]. Stateless: every call builds
/// a fresh two-turn conversation.
#[derive(Clone)]
pub struct QuestionProcessor {
    llm_client: Arc<dyn LlmClient>,
}

impl QuestionProcessor {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self { llm_client }
    }

    /// Returns the first candidate's content for `question`, unmodified.
    ///
    /// `question` must be non-empty (marker already stripped); an empty one fails with
    /// [`CompletionError::EmptyQuestion`] without calling the provider.
    #[instrument(skip(self, question), fields(question_len = question.len()))]
    pub async fn process(&self, question: &str) -> Result<String, CompletionError> {
        if question.is_empty() {
            return Err(CompletionError::EmptyQuestion);
        }
        self.llm_client
            .complete(Conversation::for_question(question))
            .await
    }
}
