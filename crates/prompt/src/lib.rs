//! # Prompt
//!
//! Conversation model sent to chat-completion APIs.
//!
//! ## Format
//!
//! A [`Conversation`] is an ordered list of [`ChatMessage`] turns, each a `{role, content}` pair.
//! The bridge builds one fresh conversation per question with [`Conversation::for_question`]:
//!
//! - **System**: [`DEFAULT_SYSTEM_MESSAGE`]
//! - **User**: the question text, unmodified
//!
//! No turn is reused across requests; there is no history.
//!
//! ## External interactions
//!
//! - **AI models**: turns map one-to-one to OpenAI `messages` array elements (see llm-client).

use std::fmt;

/// Role of a message, one-to-one with OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
    /// Assistant message (API `role: "assistant"`).
    Assistant,
}

impl MessageRole {
    /// API string for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single chat message (turn), one-to-one with one element of OpenAI `messages` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Fixed system instruction for every question.
pub const DEFAULT_SYSTEM_MESSAGE: &str = "You are a helpful assistant.";

/// Ordered turns for one completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    turns: Vec<ChatMessage>,
}

impl Conversation {
    /// The two-turn conversation for one question: system instruction, then the question as the user turn.
    pub fn for_question(question: &str) -> Self {
        Self {
            turns: vec![
                ChatMessage::system(DEFAULT_SYSTEM_MESSAGE),
                ChatMessage::user(question),
            ],
        }
    }

    pub fn turns(&self) -> &[ChatMessage] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn into_turns(self) -> Vec<ChatMessage> {
        self.turns
    }
}
