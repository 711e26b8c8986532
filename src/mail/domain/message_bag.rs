//! Field-keyed validation messages.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Validation messages grouped by settings field.
///
/// An empty bag means the validated settings are acceptable. Messages for a
/// field keep the order in which they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageBag {
    messages: BTreeMap<String, Vec<String>>,
}

impl MessageBag {
    /// Creates an empty bag.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: BTreeMap::new(),
        }
    }

    /// Adds a message for `field`.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.messages
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Moves every message from `other` into this bag.
    pub fn merge(&mut self, other: Self) {
        for (field, messages) in other.messages {
            self.messages.entry(field).or_default().extend(messages);
        }
    }

    /// Returns `true` when at least one message exists for `field`.
    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.messages.get(field).is_some_and(|list| !list.is_empty())
    }

    /// Returns the first message recorded for `field`.
    #[must_use]
    pub fn first(&self, field: &str) -> Option<&str> {
        self.messages
            .get(field)
            .and_then(|list| list.first())
            .map(String::as_str)
    }

    /// Returns every message recorded for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> &[String] {
        self.messages.get(field).map_or(&[], Vec::as_slice)
    }

    /// Iterates over fields and their messages, ordered by field name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.messages
            .iter()
            .map(|(field, list)| (field.as_str(), list.as_slice()))
    }

    /// Returns the total number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.values().map(Vec::len).sum()
    }

    /// Returns `true` when the bag holds no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
