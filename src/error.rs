//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers all error
//! cases in the library, following the pattern used by crates like `reqwest`,
//! `serde_json`, and `csv`.
//!
//! # Propagation
//!
//! - **Line-level** failures ([`ChatlensError::MalformedDateInLine`]) are
//!   recovered inside the parser: the line is dropped and parsing continues.
//!   They are only visible through [`ParseOutcome`](crate::parser::ParseOutcome).
//! - **Session-level** failures ([`ChatlensError::NoMessagesParsed`],
//!   [`ChatlensError::MissingExternalResource`]) are returned to the caller,
//!   who decides what the user sees.
//! - [`ChatlensError::UnknownSelectedUser`] is only produced by the explicit
//!   [`ChatDataset::ensure_sender`](crate::dataset::ChatDataset::ensure_sender)
//!   check. Aggregations given an unknown sender return empty results.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::MessageRecord;
///
/// fn my_function() -> Result<Vec<MessageRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred while reading a transcript or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Not a single line of the transcript matched the message format.
    ///
    /// Fatal for the session: there is nothing to aggregate.
    #[error("No messages could be parsed from the transcript ({lines} lines scanned)")]
    NoMessagesParsed {
        /// Number of lines that were scanned
        lines: usize,
    },

    /// A line had the message shape but its date or time does not exist.
    ///
    /// The parser drops the line and keeps going.
    #[error("Malformed date on line {line}: {reason} ('{content}')")]
    MalformedDateInLine {
        /// 1-based line number in the transcript
        line: usize,
        /// The offending line
        content: String,
        /// What could not be resolved
        reason: String,
    },

    /// A sender filter names someone who never wrote in this chat.
    #[error("Unknown sender '{sender}': no messages from this user in the transcript")]
    UnknownSelectedUser {
        /// The sender that was requested
        sender: String,
    },

    /// A reference table (stop words, emoji table) could not be loaded.
    #[error("Failed to load {resource}: {reason}")]
    MissingExternalResource {
        /// Name or path of the resource
        resource: String,
        /// Why loading failed
        reason: String,
    },

    /// Unknown output format or table name.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The kind of value that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates a "no messages parsed" error.
    pub fn no_messages(lines: usize) -> Self {
        ChatlensError::NoMessagesParsed { lines }
    }

    /// Creates a malformed-date error for one transcript line.
    pub fn malformed_date(
        line: usize,
        content: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ChatlensError::MalformedDateInLine {
            line,
            content: content.into(),
            reason: reason.into(),
        }
    }

    /// Creates an unknown-sender error.
    pub fn unknown_user(sender: impl Into<String>) -> Self {
        ChatlensError::UnknownSelectedUser {
            sender: sender.into(),
        }
    }

    /// Creates a missing-resource error.
    pub fn missing_resource(resource: impl Into<String>, reason: impl Into<String>) -> Self {
        ChatlensError::MissingExternalResource {
            resource: resource.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if nothing in the transcript could be parsed.
    pub fn is_no_messages(&self) -> bool {
        matches!(self, ChatlensError::NoMessagesParsed { .. })
    }

    /// Returns `true` if this is a line-level date error.
    pub fn is_malformed_date(&self) -> bool {
        matches!(self, ChatlensError::MalformedDateInLine { .. })
    }

    /// Returns `true` if this is an unknown-sender error.
    pub fn is_unknown_user(&self) -> bool {
        matches!(self, ChatlensError::UnknownSelectedUser { .. })
    }

    /// Returns `true` if a reference table failed to load.
    pub fn is_missing_resource(&self) -> bool {
        matches!(self, ChatlensError::MissingExternalResource { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatlensError::InvalidFormat { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
