//! Output writers.
//!
//! - [`write_csv`] / [`to_csv`] - one report table, semicolon-delimited - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - the whole report as one document - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - enriched message records, one per line - requires `json-output` feature
//!
//! # Choosing a Format
//!
//! | Format | Content | Use Case |
//! |--------|---------|----------|
//! | CSV | One table (`--table`) | Spreadsheets, plotting |
//! | JSON | Full [`Report`](crate::report::Report) | Dashboards, APIs |
//! | JSONL | Selected messages with time fields | Further processing, notebooks |
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::analyzer::Analyzer;
//! use chatlens::core::filter::SenderFilter;
//! use chatlens::core::output::{to_csv, to_json, to_jsonl};
//! use chatlens::parser::TranscriptParser;
//! use chatlens::report::ReportTable;
//!
//! let dataset = TranscriptParser::new().parse_str("05/06/2024, 7:45 pm - Alice: Hello!")?;
//! let analyzer = Analyzer::new(dataset);
//! let report = analyzer.report(&SenderFilter::overall());
//!
//! let csv = to_csv(&report.table(ReportTable::Daily))?;
//! assert_eq!(csv, "Date;Messages\n2024-06-05;1\n");
//!
//! let json = to_json(&report)?;
//! assert!(json.contains(r#""selection": "Overall""#));
//! let jsonl = to_jsonl(analyzer.dataset().iter())?;
//! assert_eq!(jsonl.lines().count(), 1);
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
