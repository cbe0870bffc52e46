//! Output format types for the chatlens library.
//!
//! These types don't depend on CLI frameworks, so library users can pick a
//! format from a string or a file extension and write a session's results.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatlens::Result<()> {
//! use chatlens::analyzer::Analyzer;
//! use chatlens::core::filter::SenderFilter;
//! use chatlens::format::{OutputFormat, to_format_string};
//! use chatlens::parser::TranscriptParser;
//! use chatlens::report::ReportTable;
//!
//! let dataset = TranscriptParser::new().parse_str("05/06/2024, 7:45 pm - Alice: Hello!")?;
//! let analyzer = Analyzer::new(dataset);
//!
//! let format = OutputFormat::from_path("stats.csv")?;
//! let csv = to_format_string(&analyzer, &SenderFilter::overall(), ReportTable::Stats, format)?;
//! assert!(csv.starts_with("Metric;Value"));
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analyzer::Analyzer;
use crate::core::filter::SenderFilter;
use crate::error::ChatlensError;
use crate::report::ReportTable;

/// Output format for analytics results.
///
/// - [`Csv`](OutputFormat::Csv) - one report table, semicolon-delimited
/// - [`Json`](OutputFormat::Json) - the full report as one document
/// - [`Jsonl`](OutputFormat::Jsonl) - the selected messages, one JSON object per line
///
/// # Example
///
/// ```rust
/// use chatlens::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("jsonl").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// One table of the report, CSV with semicolon delimiter
    Csv,

    /// Full report as pretty-printed JSON (default)
    #[default]
    Json,

    /// JSON Lines - one enriched message record per line
    ///
    /// Also known as NDJSON.
    Jsonl,
}

impl OutputFormat {
    const NAMES: &'static str = "csv, json, jsonl";

    /// File extension written for this format, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Case-insensitive lookup by name or extension; `ndjson` is an alias of JSONL.
    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "csv" => Some(OutputFormat::Csv),
            "json" => Some(OutputFormat::Json),
            "jsonl" | "ndjson" => Some(OutputFormat::Jsonl),
            _ => None,
        }
    }

    /// Picks the format from an output path's extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatlens::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out/report.JSON").unwrap(), OutputFormat::Json);
    /// assert!(OutputFormat::from_path("report.txt").is_err());
    /// ```
    pub fn from_path(path: &str) -> Result<Self, ChatlensError> {
        let ext = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        Self::from_name(ext).ok_or_else(|| {
            ChatlensError::invalid_format(
                "output",
                format!("'{}' has no known extension (expected {})", path, Self::NAMES),
            )
        })
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.extension().to_ascii_uppercase())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .ok_or_else(|| format!("unknown format '{}' (expected {})", s, Self::NAMES))
    }
}

fn missing_feature(format: OutputFormat) -> ChatlensError {
    ChatlensError::invalid_format(
        "output",
        format!(
            "Output format {:?} requires the '{}' feature to be enabled",
            format,
            match format {
                OutputFormat::Csv => "csv-output",
                OutputFormat::Json | OutputFormat::Jsonl => "json-output",
            }
        ),
    )
}

/// Writes a session's results for `filter` to a file.
///
/// - CSV writes the single report table named by `table`
/// - JSON writes the whole report (`table` is ignored)
/// - JSONL writes the selected message records (`table` is ignored)
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    analyzer: &Analyzer,
    filter: &SenderFilter,
    table: ReportTable,
    path: &str,
    format: OutputFormat,
) -> Result<(), ChatlensError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => {
            crate::core::output::write_csv(&analyzer.report(filter).table(table), path)
        }
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(&analyzer.report(filter), path),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => {
            crate::core::output::write_jsonl(analyzer.dataset().filtered(filter), path)
        }
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Same as [`write_to_format`], but returns the output as a string.
#[allow(unused_variables)]
pub fn to_format_string(
    analyzer: &Analyzer,
    filter: &SenderFilter,
    table: ReportTable,
    format: OutputFormat,
) -> Result<String, ChatlensError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(&analyzer.report(filter).table(table)),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(&analyzer.report(filter)),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(analyzer.dataset().filtered(filter)),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}
