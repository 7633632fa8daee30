//! Shared test helpers: a scripted [`LlmClient`] and a tracing capture buffer.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bridge_core::CompletionError;
use llm_client::LlmClient;
use prompt::Conversation;

/// Scripted reply for one call of [`MockLlmClient::complete`].
pub enum Scripted {
    Answer(&'static str),
    NoCandidates,
    Fail(&'static str),
}

/// Records every conversation and replies from a script, in order. Once the script is exhausted
/// every call answers "ok".
#[derive(Clone, Default)]
pub struct MockLlmClient {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    calls: Arc<Mutex<Vec<Conversation>>>,
}

impl MockLlmClient {
    pub fn new(script: Vec<Scripted>) -> Self {
        Self {
            script: Arc::new(Mutex::new(script.into())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<Conversation> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, conversation: Conversation) -> Result<String, CompletionError> {
        self.calls.lock().unwrap().push(conversation);
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Scripted::Answer(a)) => Ok(a.to_string()),
            Some(Scripted::NoCandidates) => Err(CompletionError::NoCandidates),
            Some(Scripted::Fail(msg)) => Err(CompletionError::Request(anyhow::anyhow!(msg))),
            None => Ok("ok".to_string()),
        }
    }
}

/// In-memory log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Captures every tracing record (all levels) on the current thread while the guard lives.
/// Use with the default current-thread `#[tokio::test]` runtime.
pub fn capture_logs() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buffer, guard)
}
