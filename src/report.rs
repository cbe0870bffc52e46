//! Complete analytics result for one selection.
//!
//! A [`Report`] bundles every aggregation for a sender filter. It serializes
//! as a single JSON document, and any one of its tables can be flattened into
//! a [`TableData`] grid for CSV output.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::activity::{CategoryCount, Heatmap};
use crate::core::stats::{ActiveUsers, ChatStats};
use crate::core::timeline::TimelineEntry;
use crate::error::ChatlensError;
use crate::text::{EmojiCount, SentimentReport, WordCount};

/// Every aggregation for one selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// `"Overall"` or the selected sender
    pub selection: String,
    pub stats: ChatStats,
    /// Present only for the overall selection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_users: Option<ActiveUsers>,
    pub monthly_timeline: Vec<TimelineEntry>,
    pub daily_timeline: Vec<TimelineEntry>,
    pub week_activity: Vec<CategoryCount>,
    pub month_activity: Vec<CategoryCount>,
    pub heatmap: Heatmap,
    pub common_words: Vec<WordCount>,
    pub emoji: Vec<EmojiCount>,
    pub sentiment: SentimentReport,
}

/// Names one table of a [`Report`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportTable {
    Stats,
    Users,
    Monthly,
    Daily,
    Weekdays,
    Months,
    Heatmap,
    Words,
    Emoji,
    Sentiment,
}

impl ReportTable {
    pub const ALL: [ReportTable; 10] = [
        Self::Stats,
        Self::Users,
        Self::Monthly,
        Self::Daily,
        Self::Weekdays,
        Self::Months,
        Self::Heatmap,
        Self::Words,
        Self::Emoji,
        Self::Sentiment,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stats => "stats",
            Self::Users => "users",
            Self::Monthly => "monthly",
            Self::Daily => "daily",
            Self::Weekdays => "weekdays",
            Self::Months => "months",
            Self::Heatmap => "heatmap",
            Self::Words => "words",
            Self::Emoji => "emoji",
            Self::Sentiment => "sentiment",
        }
    }
}

impl fmt::Display for ReportTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportTable {
    type Err = ChatlensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|t| t.as_str()).collect();
                ChatlensError::invalid_format(
                    "table",
                    format!("unknown table '{}', expected one of: {}", s, names.join(", ")),
                )
            })
    }
}

/// A rectangular table of strings: one header row plus data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn counts<'a>(
    headers: [&str; 2],
    items: impl IntoIterator<Item = (&'a str, usize)>,
) -> TableData {
    let mut table = TableData::new(headers);
    for (label, n) in items {
        table.push(vec![label.to_string(), n.to_string()]);
    }
    table
}

impl Report {
    /// Returns `true` if the selection is `"Overall"`.
    pub fn is_overall(&self) -> bool {
        self.top_users.is_some()
    }

    /// Flattens one table of the report.
    ///
    /// The user table is empty for a single-sender report.
    pub fn table(&self, kind: ReportTable) -> TableData {
        match kind {
            ReportTable::Stats => counts(
                ["Metric", "Value"],
                [
                    ("messages", self.stats.messages),
                    ("words", self.stats.words),
                    ("media", self.stats.media),
                    ("links", self.stats.links),
                ],
            ),
            ReportTable::Users => {
                let mut table = TableData::new(["Sender", "Messages", "Percent"]);
                for share in self.top_users.iter().flat_map(|u| &u.shares) {
                    table.push(vec![
                        share.sender.clone(),
                        share.messages.to_string(),
                        format!("{:.2}", share.percent),
                    ]);
                }
                table
            }
            ReportTable::Monthly => counts(
                ["Period", "Messages"],
                self.monthly_timeline.iter().map(|e| (e.period.as_str(), e.messages)),
            ),
            ReportTable::Daily => counts(
                ["Date", "Messages"],
                self.daily_timeline.iter().map(|e| (e.period.as_str(), e.messages)),
            ),
            ReportTable::Weekdays => counts(
                ["Day", "Messages"],
                self.week_activity.iter().map(|c| (c.category.as_str(), c.messages)),
            ),
            ReportTable::Months => counts(
                ["Month", "Messages"],
                self.month_activity.iter().map(|c| (c.category.as_str(), c.messages)),
            ),
            ReportTable::Heatmap => {
                let headers = std::iter::once("Day").chain(self.heatmap.periods.iter().map(String::as_str));
                let mut table = TableData::new(headers);
                for (day, cells) in self.heatmap.days.iter().zip(&self.heatmap.cells) {
                    let mut row = vec![day.clone()];
                    row.extend(cells.iter().map(ToString::to_string));
                    table.push(row);
                }
                table
            }
            ReportTable::Words => counts(
                ["Word", "Count"],
                self.common_words.iter().map(|w| (w.word.as_str(), w.count)),
            ),
            ReportTable::Emoji => counts(
                ["Emoji", "Count"],
                self.emoji.iter().map(|e| (e.emoji.as_str(), e.count)),
            ),
            ReportTable::Sentiment => {
                let mut table =
                    TableData::new(["Timestamp", "Sender", "Polarity", "Label", "Message"]);
                for msg in &self.sentiment.messages {
                    table.push(vec![
                        msg.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
                        msg.sender.clone(),
                        format!("{:.3}", msg.polarity),
                        msg.label.to_string(),
                        msg.body.clone(),
                    ]);
                }
                table
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stats::UserShare;

    fn report() -> Report {
        Report {
            selection: "Overall".to_string(),
            stats: ChatStats {
                messages: 3,
                words: 10,
                media: 1,
                links: 0,
            },
            top_users: Some(ActiveUsers {
                top: Vec::new(),
                shares: vec![UserShare {
                    sender: "Alice".to_string(),
                    messages: 3,
                    percent: 100.0,
                }],
            }),
            monthly_timeline: vec![TimelineEntry {
                period: "May-2024".to_string(),
                messages: 3,
            }],
            daily_timeline: Vec::new(),
            week_activity: Vec::new(),
            month_activity: Vec::new(),
            heatmap: Heatmap {
                days: vec!["Monday".to_string()],
                periods: vec!["9 am - 10 am".to_string(), "5 pm - 6 pm".to_string()],
                cells: vec![vec![2, 1]],
            },
            common_words: Vec::new(),
            emoji: Vec::new(),
            sentiment: SentimentReport::default(),
        }
    }

    #[test]
    fn test_table_from_str() {
        assert_eq!("words".parse::<ReportTable>().unwrap(), ReportTable::Words);
        assert_eq!("HEATMAP".parse::<ReportTable>().unwrap(), ReportTable::Heatmap);

        let err = "pie".parse::<ReportTable>().unwrap_err();
        assert!(err.is_invalid_format());
        assert!(err.to_string().contains("sentiment"));
    }

    #[test]
    fn test_stats_table() {
        let table = report().table(ReportTable::Stats);
        assert_eq!(table.headers, vec!["Metric", "Value"]);
        assert_eq!(table.rows[1], vec!["words", "10"]);
    }

    #[test]
    fn test_users_table() {
        let mut report = report();
        let table = report.table(ReportTable::Users);
        assert_eq!(table.rows, vec![vec!["Alice", "3", "100.00"]]);

        report.top_users = None;
        assert!(report.table(ReportTable::Users).is_empty());
    }

    #[test]
    fn test_heatmap_table() {
        let table = report().table(ReportTable::Heatmap);
        assert_eq!(table.headers, vec!["Day", "9 am - 10 am", "5 pm - 6 pm"]);
        assert_eq!(table.rows, vec![vec!["Monday", "2", "1"]]);
    }

    #[test]
    fn test_json_skips_top_users_for_single_sender() {
        let mut report = report();
        report.selection = "Alice".to_string();
        report.top_users = None;
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("top_users"));
        assert!(json.contains("\"selection\":\"Alice\""));
    }
}
