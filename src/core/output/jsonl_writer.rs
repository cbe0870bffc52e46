//! JSON Lines (JSONL) output writer.
//!
//! Each line is one [`MessageRecord`] with its derived time fields, which
//! makes the file easy to load into a dataframe or to `grep`.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::error::Result;
use crate::message::MessageRecord;

/// Writes records to JSONL (JSON Lines) format.
///
/// ```jsonl
/// {"timestamp":"2023-02-01T09:15:00","sender":"Alice","body":"Hello","date":"2023-02-01",...}
/// {"timestamp":"2023-02-01T09:16:00","sender":"Bob","body":"Hi","date":"2023-02-01",...}
/// ```
pub fn write_jsonl<'a>(
    records: impl IntoIterator<Item = &'a MessageRecord>,
    output_path: &str,
) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(records, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Converts records to a JSONL string.
pub fn to_jsonl<'a>(records: impl IntoIterator<Item = &'a MessageRecord>) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(records, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<'a>(
    records: impl IntoIterator<Item = &'a MessageRecord>,
    mut sink: impl Write,
) -> Result<()> {
    for msg in records {
        serde_json::to_writer(&mut sink, msg)?;
        sink.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::{BufRead, BufReader};
    use tempfile::NamedTempFile;

    fn records() -> Vec<MessageRecord> {
        let ts = NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        vec![
            MessageRecord::new(ts, "Alice", "Hello\nsecond line"),
            MessageRecord::notification(ts, "Bob left"),
        ]
    }

    #[test]
    fn test_write_jsonl_basic() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        write_jsonl(&records(), path).unwrap();

        let file = std::fs::File::open(path).unwrap();
        let lines: Vec<String> = BufReader::new(file).lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(first["sender"], "Alice");
        assert_eq!(first["body"], "Hello\nsecond line");
        assert_eq!(first["timestamp"], "2024-06-15T12:30:00");
        assert_eq!(first["day_name"], "Saturday");
        assert_eq!(first["period"], "12 pm - 1 pm");

        let second: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(second["sender"], "system-notification");
    }

    #[test]
    fn test_jsonl_round_trip() {
        let jsonl = to_jsonl(&records()).unwrap();
        let parsed: Vec<MessageRecord> = jsonl
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(parsed, records());
    }

    #[test]
    fn test_jsonl_empty() {
        let empty: Vec<MessageRecord> = Vec::new();
        assert_eq!(to_jsonl(&empty).unwrap(), "");
    }
}
