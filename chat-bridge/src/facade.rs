//! **Public API of this crate.** `run_bridge` and `ask` are the stable surface used by the binary.
//!
//! Handler types ([`Dispatcher`](crate::Dispatcher), [`QuestionProcessor`](crate::QuestionProcessor))
//! are re-exported from the crate root for custom wiring and tests.

use bridge_core::{init_tracing, BridgeError, Result};
use google_chat::{GoogleChatClient, CHAT_BOT_SCOPE, TEXT_FILTER};
use tracing::{info, instrument};

use crate::assembly;
use crate::config::BridgeConfig;

fn start_logging(config: &BridgeConfig) -> Result<()> {
    init_tracing(&config.log_file).map_err(|e| BridgeError::Config(e.to_string()))?;
    config.log_summary();
    config.validate()
}

/// Main entry: init logging, authenticate, open the watch subscription, then drain events until
/// the stream ends. Every error returned here is a startup failure.
#[instrument(skip(config))]
pub async fn run_bridge(config: BridgeConfig) -> Result<()> {
    start_logging(&config)?;

    let client = GoogleChatClient::connect(
        config.chat.credentials_json.as_bytes(),
        CHAT_BOT_SCOPE,
        &config.chat.api_url,
    )
    .await?;

    let events = client.watch(&config.chat.space_name, TEXT_FILTER).await?;
    let dispatcher = assembly::build_dispatcher(&config);

    info!(space = %config.chat.space_name, "Bridge started, waiting for questions");

    dispatcher.run(events).await;
    Ok(())
}

/// Sends one question through the processor and returns the answer. No chat connection is made.
pub async fn ask(config: BridgeConfig, question: &str) -> Result<String> {
    start_logging(&config)?;
    let processor = assembly::build_processor(&config);
    Ok(processor.process(question).await?)
}
