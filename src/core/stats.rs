//! Scalar chat statistics and the ranked user table.
//!
//! - [`fetch_stats`] counts messages, words, media and links for a selection
//! - [`top_active_users`] ranks authored senders over the whole dataset

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::AnalyticsConfig;
use crate::core::filter::SenderFilter;
use crate::dataset::ChatDataset;
use crate::text::UrlExtractor;

/// Headline numbers for one selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatStats {
    /// Records in the selection, notifications included
    pub messages: usize,
    /// Whitespace-delimited tokens; media placeholders contribute nothing
    pub words: usize,
    /// Records whose body is exactly the media placeholder
    pub media: usize,
    /// URLs found across all bodies
    pub links: usize,
}

/// Computes message, word, media and link counts for `filter`.
///
/// An empty selection (including an unknown sender) yields all zeros.
pub fn fetch_stats(
    dataset: &ChatDataset,
    filter: &SenderFilter,
    urls: &dyn UrlExtractor,
    config: &AnalyticsConfig,
) -> ChatStats {
    dataset
        .filtered(filter)
        .fold(ChatStats::default(), |mut stats, msg| {
            stats.messages += 1;
            if msg.is_placeholder(&config.media_placeholder) {
                stats.media += 1;
            } else {
                stats.words += msg.word_count();
            }
            stats.links += urls.count_urls(msg.body());
            stats
        })
}

/// Message count of one sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserActivity {
    pub sender: String,
    pub messages: usize,
}

/// Share of all authored messages written by one sender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserShare {
    pub sender: String,
    pub messages: usize,
    /// Percentage of authored messages, rounded to two decimals
    pub percent: f64,
}

/// Ranked user table plus the full percentage breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActiveUsers {
    /// The `top_n` most active senders
    pub top: Vec<UserActivity>,
    /// Every sender with its share, most active first
    pub shares: Vec<UserShare>,
}

/// Ranks authored senders by message count over the whole dataset.
///
/// Notifications are not a user and are left out, so the percentages are of
/// the authored messages and sum to 100 within rounding. Equal counts keep
/// the order in which the senders first appear in the transcript.
pub fn top_active_users(dataset: &ChatDataset, top_n: usize) -> ActiveUsers {
    let counts = count_by_first_appearance(dataset);
    let total: usize = counts.iter().map(|(_, n)| n).sum();

    let mut ranked = counts;
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let shares = ranked
        .iter()
        .map(|(sender, messages)| UserShare {
            sender: (*sender).to_string(),
            messages: *messages,
            percent: round2(*messages as f64 * 100.0 / total as f64),
        })
        .collect();

    let top = ranked
        .into_iter()
        .take(top_n)
        .map(|(sender, messages)| UserActivity {
            sender: sender.to_string(),
            messages,
        })
        .collect();

    ActiveUsers { top, shares }
}

fn count_by_first_appearance(dataset: &ChatDataset) -> Vec<(&str, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for msg in dataset.iter().filter(|m| !m.is_notification()) {
        let slot = *index.entry(msg.sender()).or_insert_with(|| {
            counts.push((msg.sender(), 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
    }

    counts
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{MEDIA_OMITTED, MessageRecord};
    use crate::text::RegexUrlExtractor;
    use chrono::NaiveDate;

    fn record(sender: &str, body: &str) -> MessageRecord {
        let ts = NaiveDate::from_ymd_opt(2024, 5, 4)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap();
        if sender.is_empty() {
            MessageRecord::notification(ts, body)
        } else {
            MessageRecord::new(ts, sender, body)
        }
    }

    fn sample() -> ChatDataset {
        ChatDataset::new(vec![
            record("Bob", "see https://example.com and www.rust-lang.org"),
            record("Alice", "hello there friend"),
            record("Alice", MEDIA_OMITTED),
            record("", "Carol joined using this group's invite link"),
            record("Bob", "ok"),
            record("Carol", "hi all"),
        ])
    }

    #[test]
    fn test_fetch_stats_overall() {
        let stats = fetch_stats(
            &sample(),
            &SenderFilter::overall(),
            &RegexUrlExtractor::new(),
            &AnalyticsConfig::default(),
        );
        assert_eq!(stats.messages, 6);
        // 4 + 3 + 0 (media) + 7 + 1 + 2
        assert_eq!(stats.words, 17);
        assert_eq!(stats.media, 1);
        assert_eq!(stats.links, 2);
    }

    #[test]
    fn test_fetch_stats_single_user() {
        let stats = fetch_stats(
            &sample(),
            &SenderFilter::sender("Alice"),
            &RegexUrlExtractor::new(),
            &AnalyticsConfig::default(),
        );
        assert_eq!(
            stats,
            ChatStats {
                messages: 2,
                words: 3,
                media: 1,
                links: 0
            }
        );
    }

    #[test]
    fn test_fetch_stats_unknown_user_is_zero() {
        let stats = fetch_stats(
            &sample(),
            &SenderFilter::sender("Mallory"),
            &RegexUrlExtractor::new(),
            &AnalyticsConfig::default(),
        );
        assert_eq!(stats, ChatStats::default());
    }

    #[test]
    fn test_top_active_users_ranking_and_ties() {
        let users = top_active_users(&sample(), 5);
        let top: Vec<(&str, usize)> = users
            .top
            .iter()
            .map(|u| (u.sender.as_str(), u.messages))
            .collect();
        // Bob and Alice tie at 2; Bob appeared first
        assert_eq!(top, vec![("Bob", 2), ("Alice", 2), ("Carol", 1)]);
    }

    #[test]
    fn test_top_active_users_percentages() {
        let users = top_active_users(&sample(), 1);
        assert_eq!(users.top.len(), 1);
        assert_eq!(users.shares.len(), 3);
        assert_eq!(users.shares[0].percent, 40.0);
        assert_eq!(users.shares[2].percent, 20.0);

        let sum: f64 = users.shares.iter().map(|s| s.percent).sum();
        assert!((sum - 100.0).abs() < 0.05);
    }

    #[test]
    fn test_top_active_users_rounding() {
        let dataset = ChatDataset::new(vec![
            record("A", "x"),
            record("B", "x"),
            record("C", "x"),
        ]);
        let users = top_active_users(&dataset, 5);
        assert!(users.shares.iter().all(|s| s.percent == 33.33));
    }

    #[test]
    fn test_top_active_users_empty() {
        let users = top_active_users(&ChatDataset::default(), 5);
        assert!(users.top.is_empty());
        assert!(users.shares.is_empty());
    }
}
