//! # chat_bridge
//!
//! Google Chat → LLM bridge. **Public API:** see [facade] — `run_bridge`, `ask`.
//!
//! Startup: settings file → [`BridgeConfig`] → Google Chat auth → watch subscription. The watch
//! producer feeds an unbounded queue that [`Dispatcher`] drains one event at a time.

mod assembly;
pub mod cli;
pub mod config;
mod facade;
pub mod handlers;

pub use cli::{Cli, Commands};
pub use config::{load_settings_file, BridgeConfig, ChatConfig};
pub use facade::*;
pub use handlers::{question, DispatchOutcome, DispatchStats, Dispatcher, QuestionProcessor};
