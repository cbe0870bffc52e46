//! Ordered, immutable collection of parsed messages.
//!
//! A [`ChatDataset`] is what one analysis session works on. Record order is
//! transcript order; nothing re-sorts or mutates the records after parsing.
//!
//! # Example
//!
//! ```rust
//! use chatlens::core::filter::SenderFilter;
//! use chatlens::parser::TranscriptParser;
//!
//! let dataset = TranscriptParser::new().parse_str(
//!     "01/02/2023, 9:15 am - Bob: hi\n01/02/2023, 9:16 am - Alice: hey\n01/02/2023, 9:17 am - Bob left",
//! )?;
//!
//! assert_eq!(dataset.senders(), vec!["Alice", "Bob"]);
//! assert_eq!(dataset.selection_options(), vec!["Overall", "Alice", "Bob"]);
//! assert_eq!(dataset.filtered(&SenderFilter::sender("Bob")).count(), 1);
//! assert!(dataset.ensure_sender(&SenderFilter::sender("Mallory")).is_err());
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::collections::BTreeSet;

use tracing::warn;

use crate::core::filter::{OVERALL, SenderFilter};
use crate::error::{ChatlensError, Result};
use crate::message::MessageRecord;

/// Messages of one transcript in transcript order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatDataset {
    records: Vec<MessageRecord>,
}

impl ChatDataset {
    /// Wraps records that are already in transcript order.
    pub fn new(records: Vec<MessageRecord>) -> Self {
        Self { records }
    }

    /// Number of messages, notifications included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in transcript order.
    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MessageRecord> {
        self.records.iter()
    }

    /// Records matching `filter`, in transcript order.
    pub fn filtered<'a>(
        &'a self,
        filter: &'a SenderFilter,
    ) -> impl Iterator<Item = &'a MessageRecord> + 'a {
        self.records.iter().filter(move |m| filter.matches(m))
    }

    /// Distinct authored senders, sorted; notifications excluded.
    pub fn senders(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter(|m| !m.is_notification())
            .map(MessageRecord::sender)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Choices for a user picker: `"Overall"` followed by [`senders`](Self::senders).
    pub fn selection_options(&self) -> Vec<String> {
        std::iter::once(OVERALL)
            .chain(self.senders())
            .map(str::to_string)
            .collect()
    }

    /// Returns `true` if `sender` authored at least one message.
    pub fn contains_sender(&self, sender: &str) -> bool {
        self.records
            .iter()
            .any(|m| !m.is_notification() && m.sender() == sender)
    }

    /// Checks that a filter names a sender present in this dataset.
    ///
    /// Aggregations never call this: an unknown sender simply produces
    /// empty results. Callers use it to warn the user.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::UnknownSelectedUser`] for an absent sender.
    pub fn ensure_sender(&self, filter: &SenderFilter) -> Result<()> {
        match filter.sender_name() {
            Some(name) if !self.contains_sender(name) => {
                warn!(sender = name, "selected sender has no messages");
                Err(ChatlensError::unknown_user(name))
            }
            _ => Ok(()),
        }
    }
}

impl<'a> IntoIterator for &'a ChatDataset {
    type Item = &'a MessageRecord;
    type IntoIter = std::slice::Iter<'a, MessageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl From<Vec<MessageRecord>> for ChatDataset {
    fn from(records: Vec<MessageRecord>) -> Self {
        Self::new(records)
    }
}
