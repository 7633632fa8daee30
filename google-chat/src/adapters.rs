//! Adapters from Google Chat wire types to bridge_core types.
//! Depends only on the wire definitions and bridge_core.

use bridge_core::{Event, Message, Space, ToCoreEvent, User};

use crate::wire::{ChatEvent, ChatMessage, ChatSpace, ChatUser};

fn space_to_core(space: &ChatSpace) -> Space {
    Space {
        name: space.name.clone(),
        display_name: space.display_name.clone(),
    }
}

fn user_to_core(user: &ChatUser) -> User {
    User {
        name: user.name.clone(),
        display_name: user.display_name.clone(),
    }
}

/// Wraps a wire message for conversion to core [`Message`]. `fallback_space` is used when the
/// message does not name its own space.
pub struct ChatMessageWrapper<'a> {
    pub message: &'a ChatMessage,
    pub fallback_space: Option<&'a str>,
}

impl<'a> ChatMessageWrapper<'a> {
    pub fn to_core(&self) -> Message {
        let space_name = self
            .message
            .space
            .as_ref()
            .map(|s| s.name.as_str())
            .filter(|s| !s.is_empty())
            .or(self.fallback_space)
            .unwrap_or_default()
            .to_string();
        Message {
            name: self.message.name.clone(),
            text: self.message.text.clone().unwrap_or_default(),
            sender: self.message.sender.as_ref().map(user_to_core),
            space_name,
            create_time: self.message.create_time,
        }
    }
}

/// Wraps a wire event for conversion to core [`Event`]. `batch_space` is the space named by the
/// enclosing watch batch, used when the event itself carries none.
pub struct ChatEventWrapper<'a> {
    pub event: &'a ChatEvent,
    pub batch_space: Option<&'a ChatSpace>,
}

impl<'a> ToCoreEvent for ChatEventWrapper<'a> {
    fn to_core(&self) -> Event {
        let space = self.event.space.as_ref().or(self.batch_space);
        let message = self.event.message.as_ref().map(|m| {
            ChatMessageWrapper {
                message: m,
                fallback_space: space.map(|s| s.name.as_str()),
            }
            .to_core()
        });
        Event {
            event_type: self.event.event_type.clone(),
            space: space.map(space_to_core),
            message,
        }
    }
}
