//! Dispatch loop: drains the event queue in arrival order, one event at a time.

use std::sync::Arc;

use bridge_core::{Event, ReplyDelivery};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, error, info, warn};

use super::processor::QuestionProcessor;
use super::question::question_from_event;

/// Separator logged after each answered question.
pub const SEPARATOR: &str = "-----";

/// What happened to one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No message, not a question, or nothing left after the marker. No side effects.
    Ignored,
    /// Answer generated and logged.
    Answered { question: String, response: String },
    /// Completion failed; logged, nothing else happened.
    Failed { question: String, error: String },
}

/// Counters for one [`Dispatcher::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    pub received: usize,
    pub answered: usize,
    pub failed: usize,
}

/// Consumer side of the event queue.
#[derive(Clone)]
pub struct Dispatcher {
    processor: QuestionProcessor,
    delivery: Arc<dyn ReplyDelivery>,
}

impl Dispatcher {
    pub fn new(processor: QuestionProcessor, delivery: Arc<dyn ReplyDelivery>) -> Self {
        Self {
            processor,
            delivery,
        }
    }

    /// Handles one event. Completion errors are logged and returned as [`DispatchOutcome::Failed`];
    /// they never abort the caller.
    pub async fn handle_event(&self, event: &Event) -> DispatchOutcome {
        let Some(question) = question_from_event(event) else {
            return DispatchOutcome::Ignored;
        };
        if question.is_empty() {
            debug!("Question marker without text, skipping");
            return DispatchOutcome::Ignored;
        }

        let space = event.space_name().unwrap_or_default();
        let response = match self.processor.process(question).await {
            Ok(r) => r,
            Err(e) => {
                error!(
                    space = %space,
                    question = %question,
                    error = %e,
                    "Error processing question"
                );
                return DispatchOutcome::Failed {
                    question: question.to_string(),
                    error: e.to_string(),
                };
            }
        };

        info!(space = %space, "Question: {}", question);
        info!(space = %space, "Response: {}", response);
        info!("{}", SEPARATOR);

        if let Err(e) = self.delivery.deliver_reply(space, &response).await {
            warn!(space = %space, error = %e, "Reply delivery failed");
        }

        DispatchOutcome::Answered {
            question: question.to_string(),
            response,
        }
    }

    /// Consumes `events` until every sender is gone. Each completion call is awaited before the
    /// next event is taken.
    pub async fn run(&self, mut events: UnboundedReceiver<Event>) -> DispatchStats {
        let mut stats = DispatchStats::default();
        while let Some(event) = events.recv().await {
            stats.received += 1;
            match self.handle_event(&event).await {
                DispatchOutcome::Answered { .. } => stats.answered += 1,
                DispatchOutcome::Failed { .. } => stats.failed += 1,
                DispatchOutcome::Ignored => {}
            }
        }
        info!(
            received = stats.received,
            answered = stats.answered,
            failed = stats.failed,
            "Event queue closed"
        );
        stats
    }
}
