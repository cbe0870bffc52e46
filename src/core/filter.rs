//! Restrict analytics to one sender.
//!
//! This module provides [`SenderFilter`], the selection every aggregation
//! takes. It is an explicit optional sender: absent means no restriction.
//!
//! At the interface boundary the selection travels as a plain string, where
//! [`OVERALL`] (`"Overall"`) means "everyone". [`SenderFilter::from_selection`]
//! and [`Display`](std::fmt::Display) convert between the two.
//!
//! # Examples
//!
//! ```
//! use chatlens::core::filter::SenderFilter;
//!
//! let everyone = SenderFilter::from_selection("Overall");
//! assert!(everyone.is_overall());
//!
//! let alice: SenderFilter = "Alice".parse().unwrap();
//! assert_eq!(alice.sender_name(), Some("Alice"));
//! assert_eq!(alice.to_string(), "Alice");
//! ```
//!
//! # Behavior Notes
//!
//! - Sender matching is exact and case-sensitive
//! - A sender absent from the dataset matches nothing; results are empty

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::message::MessageRecord;

/// Selection string meaning "no sender restriction".
pub const OVERALL: &str = "Overall";

/// Optional sender restriction for aggregations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SenderFilter {
    sender: Option<String>,
}

impl SenderFilter {
    /// No restriction: every record matches.
    pub fn overall() -> Self {
        Self::default()
    }

    /// Only records written by `sender`.
    pub fn sender(sender: impl Into<String>) -> Self {
        Self {
            sender: Some(sender.into()),
        }
    }

    /// Builds a filter from a selection string (`"Overall"` or a sender).
    pub fn from_selection(selection: &str) -> Self {
        if selection == OVERALL {
            Self::overall()
        } else {
            Self::sender(selection)
        }
    }

    /// Returns the selected sender, or `None` for everyone.
    pub fn sender_name(&self) -> Option<&str> {
        self.sender.as_deref()
    }

    pub fn is_overall(&self) -> bool {
        self.sender.is_none()
    }

    /// Returns `true` if `record` passes this filter.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        self.sender
            .as_deref()
            .is_none_or(|sender| record.sender() == sender)
    }
}

impl std::fmt::Display for SenderFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.sender.as_deref().unwrap_or(OVERALL))
    }
}

impl FromStr for SenderFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_selection(s))
    }
}

impl From<Option<String>> for SenderFilter {
    fn from(sender: Option<String>) -> Self {
        Self { sender }
    }
}
