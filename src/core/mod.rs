//! Aggregations over a parsed chat.
//!
//! This module contains:
//! - [`filter`] - The sender selection every aggregation takes
//! - [`stats`] - Message / word / media / link counts and the user ranking
//! - [`timeline`] - Monthly and daily message counts
//! - [`activity`] - Weekday and month histograms, weekday × hour heatmap
//! - [`output`] - Format writers (CSV, JSON, JSONL)
//!
//! Every function here is a pure reduction over a [`ChatDataset`](crate::dataset::ChatDataset).
//! A filter naming an unknown sender yields empty results rather than an error.
//!
//! # Quick Start
//!
//! ```rust
//! use chatlens::core::{SenderFilter, activity_heatmap, fetch_stats, monthly_timeline};
//! use chatlens::config::AnalyticsConfig;
//! use chatlens::parser::TranscriptParser;
//! use chatlens::text::RegexUrlExtractor;
//!
//! let dataset = TranscriptParser::new().parse_str(
//!     "01/02/2023, 9:15 am - Alice: hi\n01/03/2023, 9:40 pm - Bob: www.example.com",
//! )?;
//! let everyone = SenderFilter::overall();
//!
//! let stats = fetch_stats(&dataset, &everyone, &RegexUrlExtractor::new(), &AnalyticsConfig::default());
//! assert_eq!(stats.links, 1);
//!
//! let months: Vec<_> = monthly_timeline(&dataset, &everyone).into_iter().map(|e| e.period).collect();
//! assert_eq!(months, ["February-2023", "March-2023"]);
//!
//! assert_eq!(activity_heatmap(&dataset, &everyone).total(), 2);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

pub mod activity;
pub mod filter;
pub mod output;
pub mod stats;
pub mod timeline;

pub use activity::{
    CategoryCount, Heatmap, activity_heatmap, month_activity_map, week_activity_map,
};
pub use filter::{OVERALL, SenderFilter};
pub use stats::{ActiveUsers, ChatStats, UserActivity, UserShare, fetch_stats, top_active_users};
pub use timeline::{TimelineEntry, daily_timeline, monthly_timeline};

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
