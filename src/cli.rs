//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//!
//! [`Args::parser_config`] and [`Args::analytics_config`] map the flags onto
//! the library configuration types.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{AnalyticsConfig, DEFAULT_NOTIFICATION_MARKER, ParserConfig};
use crate::core::filter::{OVERALL, SenderFilter};
use crate::report::ReportTable;

/// Default output path; its extension follows `--format`.
pub const DEFAULT_OUTPUT: &str = "chat_report.json";

/// Analyze an exported WhatsApp chat: activity, vocabulary, emoji and
/// sentiment, overall or for a single participant.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --user Alice -o alice.json
    chatlens chat.txt --format csv --table heatmap
    chatlens chat.txt --format jsonl --user Bob
    chatlens chat.txt --list-users")]
pub struct Args {
    /// Path to the exported transcript (.txt)
    pub input: String,

    /// Participant to analyze ("Overall" for everyone)
    #[arg(short, long, value_name = "USER", default_value = OVERALL)]
    pub user: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Path to output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Report table written by the CSV format
    #[arg(long, value_name = "TABLE", default_value = "stats", value_parser = parse_table)]
    pub table: ReportTable,

    /// Stop words: "english", "none", or a word-list file
    #[arg(long, value_name = "LIST", default_value = "english")]
    pub stop_words: String,

    /// Number of users in the ranking
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub top_users: usize,

    /// Number of entries in the common-words table
    #[arg(long, value_name = "N", default_value_t = 20)]
    pub top_words: usize,

    /// Drop lines without a timestamp instead of appending them to the previous message
    #[arg(long)]
    pub no_fold: bool,

    /// Sender name the export uses for system events
    #[arg(long, value_name = "NAME", default_value = DEFAULT_NOTIFICATION_MARKER)]
    pub notification_marker: String,

    /// Print the selectable users and exit
    #[arg(long)]
    pub list_users: bool,

    /// Verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_table(s: &str) -> Result<ReportTable, String> {
    s.parse().map_err(|e: crate::ChatlensError| e.to_string())
}

impl Args {
    pub fn filter(&self) -> SenderFilter {
        SenderFilter::from_selection(&self.user)
    }

    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new()
            .with_notification_marker(self.notification_marker.clone())
            .with_fold_continuation_lines(!self.no_fold)
    }

    pub fn analytics_config(&self) -> AnalyticsConfig {
        AnalyticsConfig::new()
            .with_top_users(self.top_users)
            .with_top_words(self.top_words)
    }
}

/// Output format options.
///
/// - [`Csv`](OutputFormat::Csv) - one report table (see `--table`)
/// - [`Json`](OutputFormat::Json) - the full report
/// - [`Jsonl`](OutputFormat::Jsonl) - the selected messages, one per line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One report table, semicolon-delimited
    Csv,

    /// Full report as JSON (default)
    #[default]
    Json,

    /// Selected messages as JSON Lines
    #[value(alias = "ndjson")]
    Jsonl,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("chatlens").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["chat.txt"]);
        assert_eq!(args.input, "chat.txt");
        assert!(args.filter().is_overall());
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.output, DEFAULT_OUTPUT);
        assert_eq!(args.table, ReportTable::Stats);

        let parser = args.parser_config();
        assert!(parser.fold_continuation_lines);
        assert_eq!(parser.notification_marker, "group_notification");

        let analytics = args.analytics_config();
        assert_eq!(analytics.top_users, 5);
        assert_eq!(analytics.top_words, 20);
    }

    #[test]
    fn test_flags_map_to_config() {
        let args = parse(&[
            "chat.txt",
            "--user",
            "Alice",
            "--format",
            "csv",
            "--table",
            "heatmap",
            "--top-words",
            "10",
            "--no-fold",
        ]);
        assert_eq!(args.filter().sender_name(), Some("Alice"));
        assert_eq!(args.format, OutputFormat::Csv);
        assert_eq!(args.table, ReportTable::Heatmap);
        assert_eq!(args.analytics_config().top_words, 10);
        assert!(!args.parser_config().fold_continuation_lines);
    }

    #[test]
    fn test_invalid_table_rejected() {
        let result = Args::try_parse_from(["chatlens", "chat.txt", "--table", "pie"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_format_conversion() {
        let lib: crate::format::OutputFormat = OutputFormat::Jsonl.into();
        assert_eq!(lib.extension(), "jsonl");
        assert_eq!(OutputFormat::Csv.to_string(), "CSV");
    }
}
