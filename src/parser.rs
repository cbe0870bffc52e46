//! Transcript parser.
//!
//! [`TranscriptParser`] turns an exported chat transcript into a
//! [`ChatDataset`]. Parsing is one pass over the lines, driven by a small
//! state machine:
//!
//! | State | Prefixed line | Line without prefix |
//! |-------|---------------|---------------------|
//! | `ExpectPrefix` | start record | drop (orphan) |
//! | `InBody` | start record | append to record (or drop, see config) |
//! | `SkippingBody` | start record | drop with the malformed line |
//!
//! Blank lines inside a folded body are kept; trailing ones are not.
//!
//! A prefixed line whose date or time does not exist moves the machine to
//! `SkippingBody`; it is reported as
//! [`MalformedDateInLine`](ChatlensError::MalformedDateInLine) in the
//! [`ParseOutcome`] and never aborts the parse.
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::TranscriptParser;
//!
//! let transcript = "\
//! 01/02/2023, 9:15 am - Alice: Hello there
//! 01/02/2023, 9:16 am - Bob: Hi Alice!
//! How are you?
//! 01/02/2023, 9:17 am - Alice joined using this group's invite link";
//!
//! let dataset = TranscriptParser::new().parse_str(transcript)?;
//! assert_eq!(dataset.len(), 3);
//! assert_eq!(dataset.records()[1].body(), "Hi Alice!\nHow are you?");
//! assert!(dataset.records()[2].is_notification());
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use tracing::{debug, info, trace, warn};

use crate::config::ParserConfig;
use crate::dataset::ChatDataset;
use crate::error::{ChatlensError, Result};
use crate::message::{MessageRecord, SYSTEM_NOTIFICATION};
use crate::parsing::{clean_line, scan_prefix, split_sender};

/// Parser for exported chat transcripts.
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParserConfig,
}

/// A prefixed line that was dropped.
#[derive(Debug)]
pub struct SkippedLine {
    /// 1-based line number
    pub line: usize,
    /// Why the line was dropped
    pub error: ChatlensError,
}

/// Result of a parse with diagnostics.
#[derive(Debug)]
pub struct ParseOutcome {
    /// The parsed messages in transcript order
    pub dataset: ChatDataset,
    /// Prefixed lines dropped because their date or time does not exist
    pub skipped: Vec<SkippedLine>,
    /// Lines without a prefix that were not attached to any message
    pub dropped_lines: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ExpectPrefix,
    InBody,
    SkippingBody,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads and parses a transcript file.
    pub fn parse(&self, path: &Path) -> Result<ChatDataset> {
        let content = fs::read_to_string(path)?;
        self.parse_str(&content)
    }

    /// Parses transcript text, discarding line diagnostics.
    pub fn parse_str(&self, content: &str) -> Result<ChatDataset> {
        self.parse_with_diagnostics(content).map(|outcome| outcome.dataset)
    }

    /// Parses transcript text and reports which lines were dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::NoMessagesParsed`] if no line matched.
    pub fn parse_with_diagnostics(&self, content: &str) -> Result<ParseOutcome> {
        let mut records: Vec<MessageRecord> = Vec::new();
        let mut skipped = Vec::new();
        let mut dropped_lines = 0;
        let mut scanned = 0;
        let mut blank_run = 0;
        let mut state = State::ExpectPrefix;

        for (idx, raw) in content.lines().enumerate() {
            let line_no = idx + 1;
            let line = clean_line(raw);
            if line.trim().is_empty() {
                // kept only when a folded line follows
                blank_run += 1;
                continue;
            }
            scanned += 1;
            let blanks = std::mem::take(&mut blank_run);

            if let Some(prefix) = scan_prefix(line) {
                match prefix.resolve() {
                    Ok(timestamp) => {
                        records.push(self.build_record(timestamp, prefix.rest));
                        state = State::InBody;
                    }
                    Err(reason) => {
                        debug!(line = line_no, %reason, "dropping line with malformed date");
                        skipped.push(SkippedLine {
                            line: line_no,
                            error: ChatlensError::malformed_date(line_no, line, reason),
                        });
                        state = State::SkippingBody;
                    }
                }
                continue;
            }

            match (state, records.last_mut()) {
                (State::InBody, Some(last)) if self.config.fold_continuation_lines => {
                    for _ in 0..blanks {
                        last.append_line("");
                    }
                    last.append_line(line);
                }
                _ => {
                    trace!(line = line_no, "dropping line without message prefix");
                    dropped_lines += 1;
                }
            }
        }

        if records.is_empty() {
            warn!(lines = scanned, "no transcript line matched the message format");
            return Err(ChatlensError::no_messages(scanned));
        }

        info!(
            messages = records.len(),
            skipped = skipped.len(),
            dropped = dropped_lines,
            "parsed transcript"
        );

        Ok(ParseOutcome {
            dataset: ChatDataset::new(records),
            skipped,
            dropped_lines,
        })
    }

    fn build_record(&self, timestamp: NaiveDateTime, rest: &str) -> MessageRecord {
        match split_sender(rest) {
            Some((sender, body))
                if sender != self.config.notification_marker && sender != SYSTEM_NOTIFICATION =>
            {
                MessageRecord::new(timestamp, sender, body)
            }
            Some((_, body)) => MessageRecord::notification(timestamp, body),
            None => MessageRecord::notification(timestamp, rest),
        }
    }
}
