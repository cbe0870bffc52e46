//! Configuration types for parsing and analytics.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParserConfig`] - how transcript lines are recognized and folded
//! - [`AnalyticsConfig`] - placeholders, table sizes and sentiment thresholds
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{AnalyticsConfig, ParserConfig};
//! use chatlens::parser::TranscriptParser;
//!
//! let parser = TranscriptParser::with_config(
//!     ParserConfig::new().with_fold_continuation_lines(false),
//! );
//!
//! let analytics = AnalyticsConfig::new()
//!     .with_top_users(3)
//!     .with_top_words(10);
//! assert_eq!(analytics.top_words, 10);
//! ```

use serde::{Deserialize, Serialize};

use crate::message::{MEDIA_OMITTED, MESSAGE_DELETED};

/// Sender string the source export uses for system events.
pub const DEFAULT_NOTIFICATION_MARKER: &str = "group_notification";

/// Configuration for transcript parsing.
///
/// # Example
///
/// ```rust
/// use chatlens::config::ParserConfig;
///
/// let config = ParserConfig::new()
///     .with_notification_marker("system")
///     .with_fold_continuation_lines(true);
/// assert_eq!(config.notification_marker, "system");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Sender value normalized to the reserved `system-notification` sender
    /// (default: `group_notification`)
    pub notification_marker: String,

    /// Append lines without a timestamp prefix to the previous message
    /// (default: true). When false such lines are dropped.
    pub fold_continuation_lines: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            notification_marker: DEFAULT_NOTIFICATION_MARKER.to_string(),
            fold_continuation_lines: true,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sender value treated as a system notification.
    #[must_use]
    pub fn with_notification_marker(mut self, marker: impl Into<String>) -> Self {
        self.notification_marker = marker.into();
        self
    }

    /// Enables or disables folding of continuation lines.
    #[must_use]
    pub fn with_fold_continuation_lines(mut self, fold: bool) -> Self {
        self.fold_continuation_lines = fold;
        self
    }
}

/// Configuration for the aggregation and text analytics.
///
/// # Example
///
/// ```rust
/// use chatlens::config::AnalyticsConfig;
///
/// let config = AnalyticsConfig::new().with_sentiment_thresholds(0.2, -0.2);
/// assert_eq!(config.positive_threshold, 0.2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Body marking an omitted attachment (default: `<Media omitted>`)
    pub media_placeholder: String,

    /// Body marking a deleted message (default: `This message was deleted`)
    pub deleted_placeholder: String,

    /// Number of senders in the ranked user table (default: 5)
    pub top_users: usize,

    /// Number of entries in the common-words table (default: 20)
    pub top_words: usize,

    /// Polarity strictly above this is `Positive` (default: 0.1)
    pub positive_threshold: f64,

    /// Polarity strictly below this is `Negative` (default: -0.1)
    pub negative_threshold: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            media_placeholder: MEDIA_OMITTED.to_string(),
            deleted_placeholder: MESSAGE_DELETED.to_string(),
            top_users: 5,
            top_words: 20,
            positive_threshold: 0.1,
            negative_threshold: -0.1,
        }
    }
}

impl AnalyticsConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the media placeholder body.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    /// Sets the deleted-message placeholder body.
    #[must_use]
    pub fn with_deleted_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.deleted_placeholder = placeholder.into();
        self
    }

    /// Sets the size of the ranked user table.
    #[must_use]
    pub fn with_top_users(mut self, n: usize) -> Self {
        self.top_users = n;
        self
    }

    /// Sets the size of the common-words table.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the polarity thresholds for `Positive` and `Negative`.
    #[must_use]
    pub fn with_sentiment_thresholds(mut self, positive: f64, negative: f64) -> Self {
        self.positive_threshold = positive;
        self.negative_threshold = negative;
        self
    }

    /// Returns `true` if `body` is one of the configured placeholders.
    pub fn is_placeholder(&self, body: &str) -> bool {
        body == self.media_placeholder || body == self.deleted_placeholder
    }
}
