//! CLI parser.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "chat-bridge")]
#[command(about = "Answers ?-prefixed Google Chat messages with an LLM", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file loaded into the environment before anything else.
    #[arg(long, global = true, default_value = ".env")]
    pub env_file: PathBuf,

    /// Do not load a settings file; use the process environment only.
    #[arg(long, global = true, conflicts_with = "env_file")]
    pub no_env_file: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Watch the configured space and answer questions until the stream ends.
    Run,
    /// Send one question to the LLM and print the answer.
    Ask {
        /// Question text (no leading `?` needed).
        question: String,
    },
}

impl Cli {
    /// Settings file to load, if any.
    pub fn settings_file(&self) -> Option<&Path> {
        if self.no_env_file {
            None
        } else {
            Some(self.env_file.as_path())
        }
    }
}
