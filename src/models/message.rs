use std::collections::VecDeque;

use super::stardate::Stardate;

/// A line of text in a quadrant's message log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub stardate: Stardate,
}

/// Chronological, time-windowed message log.
///
/// Messages are appended in stardate order, so expiry only ever drops from
/// the front.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    entries: VecDeque<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        MessageLog {
            entries: VecDeque::new(),
        }
    }

    pub fn push(&mut self, text: impl Into<String>, stardate: Stardate) {
        self.entries.push_back(Message {
            text: text.into(),
            stardate,
        });
    }

    /// Drop every message that has expired at `now`.
    pub fn expire(&mut self, now: Stardate) {
        while self
            .entries
            .front()
            .is_some_and(|m| m.stardate.has_expired(now))
        {
            self.entries.pop_front();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.entries.iter().any(|m| m.text == text)
    }
}
