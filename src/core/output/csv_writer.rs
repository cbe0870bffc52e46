//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::error::Result;
use crate::report::TableData;

/// Writes one report table to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - First row: the table headers
/// - Encoding: UTF-8
pub fn write_csv(table: &TableData, output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    write_table(table, file)
}

/// Converts one report table to a CSV string.
///
/// Same format as `write_csv`, but returns a String instead of writing to file.
pub fn to_csv(table: &TableData) -> Result<String> {
    let mut buffer = Vec::new();
    write_table(table, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_table(table: &TableData, sink: impl Write) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .flexible(false)
        .from_writer(sink);

    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn table() -> TableData {
        TableData {
            headers: vec!["Word".to_string(), "Count".to_string()],
            rows: vec![
                vec!["pizza".to_string(), "4".to_string()],
                vec!["see; you".to_string(), "1".to_string()],
            ],
        }
    }

    #[test]
    fn test_to_csv_basic() {
        let csv = to_csv(&table()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Word;Count"));
        assert_eq!(lines.next(), Some("pizza;4"));
        // fields containing the delimiter are quoted
        assert_eq!(lines.next(), Some("\"see; you\";1"));
    }

    #[test]
    fn test_write_csv_file() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        write_csv(&table(), path).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.starts_with("Word;Count\n"));
        assert!(content.contains("pizza;4"));
    }

    #[test]
    fn test_empty_table_writes_header_only() {
        let table = TableData {
            headers: vec!["Sender".to_string()],
            rows: Vec::new(),
        };
        assert_eq!(to_csv(&table).unwrap(), "Sender\n");
    }

    #[test]
    fn test_multiline_field_is_quoted() {
        let table = TableData {
            headers: vec!["Message".to_string()],
            rows: vec![vec!["line one\nline two".to_string()]],
        };
        let csv = to_csv(&table).unwrap();
        assert_eq!(csv, "Message\n\"line one\nline two\"\n");

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_reader(csv.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[0], "line one\nline two");
    }
}
