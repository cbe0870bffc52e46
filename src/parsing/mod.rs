//! Low-level transcript scanning utilities.
//!
//! This module contains the line-prefix scanner used by
//! [`TranscriptParser`](crate::parser::TranscriptParser). It is public so
//! that callers can check single lines without building a dataset.

pub mod whatsapp;

pub use whatsapp::{LinePrefix, clean_line, scan_prefix, split_sender};
