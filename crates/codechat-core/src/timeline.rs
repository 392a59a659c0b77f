//! Append-only message timeline.
//!
//! Insertion order is conversation order. There is no update or delete;
//! corrections are new messages.

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::types::{Message, MessageId};

/// Ordered, append-only store of [`Message`]s.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    messages: Vec<Message>,
    ids: HashSet<MessageId>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `message` to the end of the timeline.
    ///
    /// Fails without touching the timeline if the id is already present.
    pub fn append(&mut self, message: Message) -> Result<&Message, ValidationError> {
        if self.ids.contains(&message.id) {
            return Err(ValidationError::DuplicateId(message.id));
        }
        self.ids.insert(message.id.clone());
        let index = self.messages.len();
        self.messages.push(message);
        Ok(&self.messages[index])
    }

    /// All messages in insertion order.
    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn get(&self, id: &MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| &m.id == id)
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn contains(&self, id: &MessageId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
