//! Core types: space, user, message and event, plus the [`ToCoreEvent`] conversion trait.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named chat room (e.g. `spaces/AAAAxyz`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    pub name: String,
    pub display_name: Option<String>,
}

/// Message sender identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub display_name: Option<String>,
}

/// A text-bearing chat message. Only `text` drives bridge behaviour; the rest is carried for logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub name: String,
    pub text: String,
    pub sender: Option<User>,
    pub space_name: String,
    pub create_time: Option<DateTime<Utc>>,
}

/// One notification delivered by the platform subscription. Non-message events carry no `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub event_type: String,
    pub space: Option<Space>,
    pub message: Option<Message>,
}

impl Event {
    /// Builds a `MESSAGE` event with the given text in `space_name`. Mostly for tests.
    pub fn text_message(space_name: &str, text: &str) -> Self {
        Self {
            event_type: "MESSAGE".to_string(),
            space: Some(Space {
                name: space_name.to_string(),
                display_name: None,
            }),
            message: Some(Message {
                name: String::new(),
                text: text.to_string(),
                sender: None,
                space_name: space_name.to_string(),
                create_time: None,
            }),
        }
    }

    /// Space name of the event: from the space if present, else from the message.
    pub fn space_name(&self) -> Option<&str> {
        self.space
            .as_ref()
            .map(|s| s.name.as_str())
            .or_else(|| self.message.as_ref().map(|m| m.space_name.as_str()))
            .filter(|s| !s.is_empty())
    }
}

/// Converts a transport-specific event type to core [`Event`].
pub trait ToCoreEvent: Send + Sync {
    fn to_core(&self) -> Event;
}
