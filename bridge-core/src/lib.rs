//! # bridge-core
//!
//! Core types and traits for the chat bridge: normalized [`Event`] / [`Message`] values,
//! the error taxonomy ([`BridgeError`], [`AuthError`], [`CompletionError`]), the
//! [`ReplyDelivery`] capability and tracing initialization. Transport-agnostic; used by
//! google-chat and chat-bridge.

pub mod error;
pub mod logger;
pub mod reply;
pub mod types;

pub use error::{AuthError, BridgeError, CompletionError, Result};
pub use logger::init_tracing;
pub use reply::{NoopReplyDelivery, ReplyDelivery};
pub use types::{Event, Message, Space, ToCoreEvent, User};
