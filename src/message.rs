//! Parsed chat message type.
//!
//! This module provides [`MessageRecord`], one line of a transcript after
//! parsing and temporal enrichment. Records are created once by the parser
//! and never modified afterwards, so all fields are read through accessors.
//!
//! # Examples
//!
//! ```
//! use chatlens::MessageRecord;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 2, 1)
//!     .unwrap()
//!     .and_hms_opt(9, 15, 0)
//!     .unwrap();
//! let msg = MessageRecord::new(ts, "Alice", "Hello there");
//!
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.body(), "Hello there");
//! assert_eq!(msg.hour(), 9);
//! assert_eq!(msg.day_name(), "Wednesday");
//! assert!(!msg.is_notification());
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::temporal::{self, Meridiem, TemporalFields};

/// Reserved sender of chat-system events (joins, leaves, subject changes).
pub const SYSTEM_NOTIFICATION: &str = "system-notification";

/// Body the export writes in place of an attachment.
pub const MEDIA_OMITTED: &str = "<Media omitted>";

/// Body the export writes in place of a deleted message.
pub const MESSAGE_DELETED: &str = "This message was deleted";

/// One parsed transcript message with its derived calendar fields.
///
/// # Serialization
///
/// The temporal fields are flattened next to `timestamp`, `sender` and
/// `body`, one flat object per message (used by the JSONL export).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    timestamp: NaiveDateTime,
    sender: String,
    body: String,
    #[serde(flatten)]
    time: TemporalFields,
}

impl MessageRecord {
    /// Creates a record and derives its calendar fields from `timestamp`.
    pub fn new(timestamp: NaiveDateTime, sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            body: body.into(),
            time: temporal::enrich(timestamp),
        }
    }

    /// Creates a system-notification record.
    pub fn notification(timestamp: NaiveDateTime, body: impl Into<String>) -> Self {
        Self::new(timestamp, SYSTEM_NOTIFICATION, body)
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the message timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the sender identifier.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message text, continuation lines joined with `\n`.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns all derived calendar fields.
    pub fn temporal(&self) -> &TemporalFields {
        &self.time
    }

    /// Calendar date without the time.
    pub fn date(&self) -> NaiveDate {
        self.time.date
    }

    pub fn year(&self) -> i32 {
        self.time.year
    }

    /// Full month name.
    pub fn month(&self) -> &str {
        &self.time.month
    }

    pub fn month_num(&self) -> u32 {
        self.time.month_num
    }

    /// Full weekday name.
    pub fn day_name(&self) -> &str {
        &self.time.day_name
    }

    /// Hour on the 12-hour clock, 1-12.
    pub fn hour(&self) -> u32 {
        self.time.hour
    }

    pub fn minute(&self) -> u32 {
        self.time.minute
    }

    pub fn meridiem(&self) -> Meridiem {
        self.time.meridiem
    }

    /// Heatmap period label, e.g. "3 pm - 4 pm".
    pub fn period(&self) -> &str {
        &self.time.period
    }

    /// Hour on the 24-hour clock, 0-23.
    pub fn hour_of_day(&self) -> u32 {
        self.time.hour_of_day
    }

    // =========================================================================
    // Utility methods
    // =========================================================================

    /// Returns `true` for chat-system events.
    pub fn is_notification(&self) -> bool {
        self.sender == SYSTEM_NOTIFICATION
    }

    /// Returns `true` if the body is exactly `placeholder`.
    pub fn is_placeholder(&self, placeholder: &str) -> bool {
        self.body == placeholder
    }

    /// Number of whitespace-delimited tokens in the body.
    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }

    pub(crate) fn append_line(&mut self, line: &str) {
        self.body.push('\n');
        self.body.push_str(line);
    }
}
