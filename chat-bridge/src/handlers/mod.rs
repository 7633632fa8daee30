//! Event handling: question detection, question processing, and the dispatch loop.
//!
//! [`Dispatcher`] drains the event queue one event at a time. Events whose message matches the
//! question pattern ([`question`]) are answered through [`QuestionProcessor`]; everything else is
//! skipped without side effects.

mod dispatcher;
mod processor;
pub mod question;

pub use dispatcher::{DispatchOutcome, DispatchStats, Dispatcher};
pub use processor::QuestionProcessor;
