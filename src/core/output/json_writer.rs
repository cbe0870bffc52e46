//! JSON output writer.

use std::fs::File;
use std::io::Write;

use crate::error::Result;
use crate::report::Report;

/// Writes a report to a pretty-printed JSON file.
///
/// # Format
/// ```json
/// {
///   "selection": "Overall",
///   "stats": {"messages": 120, "words": 845, "media": 4, "links": 2},
///   "top_users": {"top": [...], "shares": [...]},
///   "monthly_timeline": [{"period": "January-2023", "messages": 40}],
///   ...
/// }
/// ```
///
/// `top_users` is omitted for a single-sender report.
pub fn write_json(report: &Report, output_path: &str) -> Result<()> {
    let json = to_json(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts a report to a pretty-printed JSON string.
pub fn to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
