//! # Chatlens
//!
//! A Rust library for parsing exported WhatsApp chat transcripts and
//! computing activity, vocabulary, emoji and sentiment analytics over them.
//!
//! ## Overview
//!
//! A transcript is a plain-text export where each message starts with a
//! timestamp prefix:
//!
//! ```text
//! 01/02/2023, 9:15 am - Alice: Hello there
//! 01/02/2023, 9:16 am - Bob: <Media omitted>
//! 01/02/2023, 9:17 am - Bob left
//! ```
//!
//! Chatlens turns it into an ordered [`ChatDataset`](dataset::ChatDataset)
//! of [`MessageRecord`]s, each carrying its derived calendar fields, and runs
//! aggregations over it for everyone or for a single sender.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let dataset = TranscriptParser::new().parse_str(
//!         "01/02/2023, 9:15 am - Alice: Hello there 👋\n\
//!          01/02/2023, 9:16 am - Bob: <Media omitted>\n\
//!          01/02/2023, 9:17 am - Bob: great, see https://example.com",
//!     )?;
//!
//!     let analyzer = Analyzer::new(dataset);
//!     let report = analyzer.report(&SenderFilter::overall());
//!
//!     assert_eq!(report.stats.messages, 3);
//!     assert_eq!(report.stats.media, 1);
//!     assert_eq!(report.emoji[0].emoji, "👋");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser), the line state machine
//! - [`parsing`] - Low-level prefix scanner shared by the parser
//! - [`message`] - [`MessageRecord`] and the reserved sender / placeholder constants
//! - [`temporal`] - Derived calendar fields and period labels
//! - [`dataset`] - [`ChatDataset`](dataset::ChatDataset), sender listing and validation
//! - [`core`] - Aggregations: stats, user ranking, timelines, histograms, heatmap
//! - [`text`] - Links, vocabulary, emoji and sentiment with pluggable collaborators
//! - [`analyzer`] - [`Analyzer`](analyzer::Analyzer) session tying it all together
//! - [`report`] - [`Report`](report::Report) and its flat tables
//! - [`config`] - [`ParserConfig`](config::ParserConfig), [`AnalyticsConfig`](config::AnalyticsConfig)
//! - [`format`] - Output formats and [`write_to_format`](format::write_to_format)
//! - [`error`] - [`ChatlensError`] and [`Result`]
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `csv-output` | CSV table writer |
//! | `json-output` | JSON report and JSONL record writers |
//! | `parallel` | Report reductions on the rayon pool |
//! | `cli` | The `chatlens` binary |
//! | `full` | All of the above (default) |

pub mod analyzer;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod dataset;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;
pub mod report;
pub mod temporal;
pub mod text;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use message::MessageRecord;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::MessageRecord;
    pub use crate::error::{ChatlensError, Result};

    // Parsing
    pub use crate::config::{AnalyticsConfig, ParserConfig};
    pub use crate::dataset::ChatDataset;
    pub use crate::parser::TranscriptParser;

    // Analytics
    pub use crate::analyzer::Analyzer;
    pub use crate::core::filter::{OVERALL, SenderFilter};
    pub use crate::report::{Report, ReportTable, TableData};

    // Collaborators
    pub use crate::text::{
        EmojiClassifier, LexiconScorer, PolarityScorer, RegexUrlExtractor, StopWords,
        UnicodeEmojiTable, UrlExtractor,
    };

    // Output
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
