//! Summary counters shown above the dashboard table.

use serde::Serialize;

use crate::message::Message;
use crate::types::MessageStatus;

/// Counts over the full, unfiltered collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MessageStats {
    pub total: usize,
    pub received: usize,
    pub analyzing: usize,
    pub responded: usize,
    pub archived: usize,
}

impl MessageStats {
    pub fn from_messages(messages: &[Message]) -> Self {
        messages
            .iter()
            .fold(Self::default(), |mut stats, message| {
                stats.total += 1;
                match message.status {
                    MessageStatus::Received => stats.received += 1,
                    MessageStatus::Analyzing => stats.analyzing += 1,
                    MessageStatus::Responded => stats.responded += 1,
                    MessageStatus::Archived => stats.archived += 1,
                }
                stats
            })
    }

    pub fn count(&self, status: MessageStatus) -> usize {
        match status {
            MessageStatus::Received => self.received,
            MessageStatus::Analyzing => self.analyzing,
            MessageStatus::Responded => self.responded,
            MessageStatus::Archived => self.archived,
        }
    }
}
