//! Chat history domain types.
//!
//! A `ChatMessage` is one entry of the client-supplied conversation history.
//! Messages are immutable once received; their order in the supplied slice
//! defines chronological order.

use serde::{Deserialize, Serialize};

/// A single message in the chat history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who sent this message (e.g. "user", "bot").
    pub sender: String,

    /// The text content. May span multiple lines.
    pub text: String,
}

impl ChatMessage {
    pub fn new(sender: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            text: text.into(),
        }
    }
}
