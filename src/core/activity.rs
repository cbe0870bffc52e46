//! Weekday / month histograms and the weekday × hour heatmap.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::filter::SenderFilter;
use crate::dataset::ChatDataset;
use crate::temporal::{MONTHS, WEEKDAYS, month_index, weekday_index};

/// Message count of one category (weekday or month name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub messages: usize,
}

/// Messages per weekday, busiest first.
///
/// Only observed weekdays appear; equal counts keep calendar order.
pub fn week_activity_map(dataset: &ChatDataset, filter: &SenderFilter) -> Vec<CategoryCount> {
    let mut counts = [0usize; 7];
    for msg in dataset.filtered(filter) {
        if let Some(idx) = weekday_index(msg.day_name()) {
            counts[idx] += 1;
        }
    }
    ranked(&WEEKDAYS, &counts)
}

/// Messages per month name (all years together), busiest first.
///
/// Only observed months appear; equal counts keep calendar order.
pub fn month_activity_map(dataset: &ChatDataset, filter: &SenderFilter) -> Vec<CategoryCount> {
    let mut counts = [0usize; 12];
    for msg in dataset.filtered(filter) {
        if let Some(idx) = month_index(msg.month()) {
            counts[idx] += 1;
        }
    }
    ranked(&MONTHS, &counts)
}

fn ranked(names: &[&str], counts: &[usize]) -> Vec<CategoryCount> {
    let mut rows: Vec<CategoryCount> = names
        .iter()
        .zip(counts)
        .filter(|(_, n)| **n > 0)
        .map(|(name, n)| CategoryCount {
            category: (*name).to_string(),
            messages: *n,
        })
        .collect();
    rows.sort_by(|a, b| b.messages.cmp(&a.messages));
    rows
}

/// Weekday × hour pivot table.
///
/// Rows are the observed weekdays in calendar order, columns the observed
/// period labels ordered by time of day. Every cell is present; combinations
/// without messages hold 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heatmap {
    /// Row labels (weekday names)
    pub days: Vec<String>,
    /// Column labels (period labels such as "3 pm - 4 pm")
    pub periods: Vec<String>,
    /// `cells[row][column]`
    pub cells: Vec<Vec<usize>>,
}

impl Heatmap {
    /// Count for one weekday and period; 0 if either label is absent.
    pub fn get(&self, day: &str, period: &str) -> usize {
        let row = self.days.iter().position(|d| d == day);
        let col = self.periods.iter().position(|p| p == period);
        match (row, col) {
            (Some(r), Some(c)) => self.cells[r][c],
            _ => 0,
        }
    }

    /// Sum of all cells.
    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Builds the weekday × period pivot for `filter`.
pub fn activity_heatmap(dataset: &ChatDataset, filter: &SenderFilter) -> Heatmap {
    let mut counts: BTreeMap<(usize, u32), usize> = BTreeMap::new();
    let mut periods: BTreeMap<u32, String> = BTreeMap::new();

    for msg in dataset.filtered(filter) {
        let Some(day) = weekday_index(msg.day_name()) else {
            continue;
        };
        *counts.entry((day, msg.hour_of_day())).or_default() += 1;
        periods
            .entry(msg.hour_of_day())
            .or_insert_with(|| msg.period().to_string());
    }

    let mut day_rows: Vec<usize> = counts.keys().map(|(day, _)| *day).collect();
    day_rows.dedup();
    let hours: Vec<u32> = periods.keys().copied().collect();

    let cells = day_rows
        .iter()
        .map(|day| {
            hours
                .iter()
                .map(|hour| counts.get(&(*day, *hour)).copied().unwrap_or(0))
                .collect()
        })
        .collect();

    Heatmap {
        days: day_rows
            .iter()
            .map(|idx| WEEKDAYS[*idx].to_string())
            .collect(),
        periods: periods.into_values().collect(),
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageRecord;
    use chrono::NaiveDate;

    // 2024-01-01 is a Monday
    fn record(day: u32, hour: u32, sender: &str) -> MessageRecord {
        let ts = NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, 10, 0)
            .unwrap();
        MessageRecord::new(ts, sender, "hey")
    }

    fn sample() -> ChatDataset {
        ChatDataset::new(vec![
            record(3, 23, "Alice"), // Wednesday 11 pm
            record(1, 9, "Bob"),    // Monday 9 am
            record(3, 9, "Alice"),  // Wednesday 9 am
            record(3, 9, "Bob"),    // Wednesday 9 am
            record(7, 0, "Alice"),  // Sunday 12 am
        ])
    }

    #[test]
    fn test_week_activity_map() {
        let map = week_activity_map(&sample(), &SenderFilter::overall());
        let rows: Vec<(&str, usize)> = map
            .iter()
            .map(|c| (c.category.as_str(), c.messages))
            .collect();
        assert_eq!(rows, vec![("Wednesday", 3), ("Monday", 1), ("Sunday", 1)]);
    }

    #[test]
    fn test_month_activity_map() {
        let mut records = sample().records().to_vec();
        let march = NaiveDate::from_ymd_opt(2023, 3, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        records.push(MessageRecord::new(march, "Bob", "spring"));
        let dataset = ChatDataset::new(records);

        let map = month_activity_map(&dataset, &SenderFilter::sender("Bob"));
        let rows: Vec<(&str, usize)> = map
            .iter()
            .map(|c| (c.category.as_str(), c.messages))
            .collect();
        assert_eq!(rows, vec![("January", 2), ("March", 1)]);
    }

    #[test]
    fn test_heatmap_layout() {
        let heatmap = activity_heatmap(&sample(), &SenderFilter::overall());
        assert_eq!(heatmap.days, vec!["Monday", "Wednesday", "Sunday"]);
        assert_eq!(
            heatmap.periods,
            vec!["12 am - 1 am", "9 am - 10 am", "11 pm - 12 am"]
        );
        assert_eq!(heatmap.cells.len(), 3);
        assert!(heatmap.cells.iter().all(|row| row.len() == 3));

        assert_eq!(heatmap.get("Wednesday", "9 am - 10 am"), 2);
        assert_eq!(heatmap.get("Monday", "11 pm - 12 am"), 0);
        assert_eq!(heatmap.get("Friday", "9 am - 10 am"), 0);
    }

    #[test]
    fn test_heatmap_total_matches_selection() {
        let dataset = sample();
        for filter in [
            SenderFilter::overall(),
            SenderFilter::sender("Alice"),
            SenderFilter::sender("Bob"),
        ] {
            let heatmap = activity_heatmap(&dataset, &filter);
            assert_eq!(heatmap.total(), dataset.filtered(&filter).count());
        }
    }

    #[test]
    fn test_heatmap_empty_selection() {
        let heatmap = activity_heatmap(&sample(), &SenderFilter::sender("Nobody"));
        assert!(heatmap.is_empty());
        assert_eq!(heatmap.total(), 0);
        assert!(week_activity_map(&sample(), &SenderFilter::sender("Nobody")).is_empty());
    }
}
