//! Message counts over time.
//!
//! Both timelines list only periods that actually have messages, in
//! chronological order. Gaps are not zero-filled.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::filter::SenderFilter;
use crate::dataset::ChatDataset;
use crate::temporal::month_name;

/// One row of a timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// `"January-2023"` for months, `"2023-01-31"` for days
    pub period: String,
    pub messages: usize,
}

/// Message count per (year, month).
pub fn monthly_timeline(dataset: &ChatDataset, filter: &SenderFilter) -> Vec<TimelineEntry> {
    let mut months: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for msg in dataset.filtered(filter) {
        *months.entry((msg.year(), msg.month_num())).or_default() += 1;
    }

    months
        .into_iter()
        .map(|((year, month), messages)| TimelineEntry {
            period: format!("{}-{}", month_name(month), year),
            messages,
        })
        .collect()
}

/// Message count per calendar date.
pub fn daily_timeline(dataset: &ChatDataset, filter: &SenderFilter) -> Vec<TimelineEntry> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for msg in dataset.filtered(filter) {
        *days.entry(msg.date()).or_default() += 1;
    }

    days.into_iter()
        .map(|(date, messages)| TimelineEntry {
            period: date.format("%Y-%m-%d").to_string(),
            messages,
        })
        .collect()
}
