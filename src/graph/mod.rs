//! Read-only dialogue graph built from the parsed message sequence
//!
//! The graph is constructed once at load time and never mutated; playback
//! only reads from it. Messages keep their file order, with a uid index on
//! the side for lookups.

use crate::types::Message;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The parsed conversation, addressable by uid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DialogueGraph {
    messages: Vec<Message>,
    index: HashMap<String, usize>,
}

impl DialogueGraph {
    /// Build the graph and its uid index
    ///
    /// Uid uniqueness is an input invariant, not enforced here: a
    /// duplicate uid keeps its first position and later definitions are
    /// unreachable by lookup.
    pub fn new(messages: Vec<Message>) -> Self {
        let mut index = HashMap::with_capacity(messages.len());
        for (pos, message) in messages.iter().enumerate() {
            index.entry(message.uid.clone()).or_insert(pos);
        }
        Self { messages, index }
    }

    /// Find a message by uid
    ///
    /// Returns `None` for uids with no node, including the "-1" sentinel;
    /// callers treat that as "nothing to play", not an error.
    pub fn lookup(&self, uid: &str) -> Option<(usize, &Message)> {
        let pos = *self.index.get(uid)?;
        Some((pos, &self.messages[pos]))
    }

    pub fn get(&self, pos: usize) -> Option<&Message> {
        self.messages.get(pos)
    }

    /// The conversation's entry point, by convention the first row
    pub fn entry(&self) -> Option<&Message> {
        self.messages.first()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
