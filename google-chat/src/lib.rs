//! # google-chat
//!
//! Google Chat connectivity layer: service-account authentication, the space watch subscription
//! that feeds normalized [`bridge_core::Event`]s into an in-process queue, and wire-to-core adapters.
//! No question detection or LLM logic lives here.

mod adapters;
mod auth;
mod client;
mod wire;

pub use adapters::{ChatEventWrapper, ChatMessageWrapper};
pub use auth::{parse_service_account_key, ServiceAccountTokenSource, CHAT_BOT_SCOPE};
pub use client::{GoogleChatClient, DEFAULT_API_URL, TEXT_FILTER};
pub use wire::{ChatEvent, ChatMessage, ChatSpace, ChatUser, WatchRequest, WatchResponse};
