//! chat-bridge: entry point. Loads the settings file, then runs the bridge or a one-off question.

use anyhow::Result;
use chat_bridge::{ask, load_settings_file, run_bridge, BridgeConfig, Cli, Commands};
use clap::Parser;
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.settings_file() {
        load_settings_file(path)?;
    }
    let config = BridgeConfig::from_env();

    match cli.command {
        Commands::Run => {
            if let Err(e) = run_bridge(config).await {
                error!(error = %e, "Bridge stopped");
                return Err(e.into());
            }
            Ok(())
        }
        Commands::Ask { question } => {
            let answer = ask(config, &question).await?;
            println!("{}", answer);
            Ok(())
        }
    }
}
