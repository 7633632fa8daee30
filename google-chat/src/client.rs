//! Google Chat API client: authenticated session and the space watch subscription.
//!
//! The watch call returns newline-delimited JSON [`WatchResponse`] batches. A producer task reads
//! them and pushes every event onto an unbounded channel, so delivery never waits on the consumer.

use std::fmt::Display;
use std::sync::Arc;

use bridge_core::{AuthError, BridgeError, Event, Result, ToCoreEvent};
use futures::{Stream, StreamExt};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info, instrument, warn};

use crate::adapters::ChatEventWrapper;
use crate::auth::{parse_service_account_key, ServiceAccountTokenSource};
use crate::wire::{WatchRequest, WatchResponse};

/// Default Chat API endpoint.
pub const DEFAULT_API_URL: &str = "https://chat.googleapis.com";

/// Watch filter: notify only on text-bearing message events.
pub const TEXT_FILTER: &str = "text";

/// Authenticated Google Chat session.
#[derive(Clone)]
pub struct GoogleChatClient {
    http: reqwest::Client,
    tokens: Arc<ServiceAccountTokenSource>,
    api_url: String,
}

impl GoogleChatClient {
    /// Parses the service-account JSON, obtains the first access token for `scope` through
    /// yup-oauth2, and builds the HTTP client used with that token source.
    ///
    /// Fails with [`AuthError`] on malformed credentials, bad key material, or an unreachable /
    /// rejecting token endpoint.
    #[instrument(skip(credentials_json))]
    pub async fn connect(
        credentials_json: &[u8],
        scope: &str,
        api_url: &str,
    ) -> std::result::Result<Self, AuthError> {
        let key = parse_service_account_key(credentials_json)?;
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AuthError::Client(e.to_string()))?;
        let tokens = ServiceAccountTokenSource::new(key, scope).await?;
        tokens.token().await?;

        info!(
            client_email = %tokens.client_email(),
            api_url = %api_url,
            "Google Chat client authenticated"
        );

        Ok(Self {
            http,
            tokens: Arc::new(tokens),
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    fn watch_url(&self, space: &str) -> String {
        format!("{}/v1/{}/messages:watch", self.api_url, space)
    }

    /// Opens the watch subscription on `space` with `filter` and returns the event queue.
    ///
    /// Fails with [`BridgeError::Subscription`] if the call cannot be established. After that the
    /// queue stays open until the stream ends or the receiver is dropped.
    #[instrument(skip(self))]
    pub async fn watch(&self, space: &str, filter: &str) -> Result<UnboundedReceiver<Event>> {
        let token = self
            .tokens
            .token()
            .await
            .map_err(|e| BridgeError::Subscription(e.to_string()))?;

        let response = self
            .http
            .post(self.watch_url(space))
            .bearer_auth(token)
            .json(&WatchRequest { filter })
            .send()
            .await
            .map_err(|e| BridgeError::Subscription(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BridgeError::Subscription(format!(
                "watch on {} returned {}: {}",
                space, status, body
            )));
        }

        info!(space = %space, "Connected to Google Chat: {}", space);

        let (tx, rx) = unbounded_channel();
        let space = space.to_string();
        tokio::spawn(async move {
            produce_events(response.bytes_stream(), tx).await;
            warn!(space = %space, "Google Chat watch stream closed");
        });
        Ok(rx)
    }
}

/// Splits a byte stream into newline-delimited JSON batches.
#[derive(Debug, Default)]
pub(crate) struct BatchDecoder {
    buf: Vec<u8>,
}

impl BatchDecoder {
    /// Appends `chunk` and returns every complete line decoded. Blank lines are skipped.
    pub(crate) fn push(&mut self, chunk: &[u8]) -> Vec<serde_json::Result<WatchResponse>> {
        self.buf.extend_from_slice(chunk);
        let mut batches = Vec::new();
        while let Some(pos) = self.buf.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buf.drain(..=pos).collect();
            if let Some(batch) = decode_line(&line) {
                batches.push(batch);
            }
        }
        batches
    }

    /// Decodes whatever is left once the stream has ended.
    pub(crate) fn finish(&mut self) -> Option<serde_json::Result<WatchResponse>> {
        let rest = std::mem::take(&mut self.buf);
        decode_line(&rest)
    }
}

fn decode_line(line: &[u8]) -> Option<serde_json::Result<WatchResponse>> {
    let trimmed = line.trim_ascii();
    if trimmed.is_empty() {
        return None;
    }
    Some(serde_json::from_slice(trimmed))
}

/// Sends every event of `batch` in order. Returns false once the receiver is gone.
fn enqueue_batch(batch: &WatchResponse, tx: &UnboundedSender<Event>) -> bool {
    debug!(events = batch.events.len(), "Watch batch received");
    for wire_event in &batch.events {
        let event = ChatEventWrapper {
            event: wire_event,
            batch_space: batch.space.as_ref(),
        }
        .to_core();
        if tx.send(event).is_err() {
            return false;
        }
    }
    true
}

/// Reads batches from `stream` and enqueues their events until the stream ends, fails, or the
/// receiver is dropped. Malformed batches are logged and skipped.
pub(crate) async fn produce_events<S, B, E>(stream: S, tx: UnboundedSender<Event>)
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    E: Display,
{
    futures::pin_mut!(stream);
    let mut decoder = BatchDecoder::default();

    while let Some(chunk) = stream.next().await {
        let chunk = match chunk {
            Ok(c) => c,
            Err(e) => {
                error!(error = %e, "Google Chat watch stream failed");
                return;
            }
        };
        for batch in decoder.push(chunk.as_ref()) {
            match batch {
                Ok(batch) => {
                    if !enqueue_batch(&batch, &tx) {
                        debug!("Event receiver dropped, stopping producer");
                        return;
                    }
                }
                Err(e) => warn!(error = %e, "Skipping malformed watch batch"),
            }
        }
    }

    match decoder.finish() {
        Some(Ok(batch)) => {
            enqueue_batch(&batch, &tx);
        }
        Some(Err(e)) => warn!(error = %e, "Skipping malformed watch batch"),
        None => {}
    }
}
