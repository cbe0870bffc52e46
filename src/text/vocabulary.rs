//! Word frequency tables.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::AnalyticsConfig;
use crate::core::filter::SenderFilter;
use crate::dataset::ChatDataset;
use crate::message::MessageRecord;

use super::StopWords;

/// Occurrences of one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Every non-stop word in the selection, most frequent first.
///
/// Notifications and placeholder bodies (media, deleted) are skipped. Bodies
/// are lower-cased and split on whitespace. Equal counts keep the order in
/// which the words first appear.
pub fn word_frequencies(
    dataset: &ChatDataset,
    filter: &SenderFilter,
    stop_words: &StopWords,
    config: &AnalyticsConfig,
) -> Vec<WordCount> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut table: Vec<WordCount> = Vec::new();

    for msg in dataset
        .filtered(filter)
        .filter(|m| is_vocabulary_source(m, config))
    {
        let body = msg.body().to_lowercase();
        for word in body.split_whitespace() {
            if stop_words.contains(word) {
                continue;
            }
            match index.get(word) {
                Some(&slot) => table[slot].count += 1,
                None => {
                    index.insert(word.to_string(), table.len());
                    table.push(WordCount {
                        word: word.to_string(),
                        count: 1,
                    });
                }
            }
        }
    }

    // stable: ties stay in first-occurrence order
    table.sort_by(|a, b| b.count.cmp(&a.count));
    table
}

/// The `config.top_words` head of [`word_frequencies`].
pub fn most_common_words(
    dataset: &ChatDataset,
    filter: &SenderFilter,
    stop_words: &StopWords,
    config: &AnalyticsConfig,
) -> Vec<WordCount> {
    let mut table = word_frequencies(dataset, filter, stop_words, config);
    table.truncate(config.top_words);
    table
}

fn is_vocabulary_source(msg: &MessageRecord, config: &AnalyticsConfig) -> bool {
    !msg.is_notification() && !config.is_placeholder(msg.body())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{MEDIA_OMITTED, MESSAGE_DELETED};
    use chrono::NaiveDate;

    fn record(sender: &str, body: &str) -> MessageRecord {
        let ts = NaiveDate::from_ymd_opt(2023, 6, 10)
            .unwrap()
            .and_hms_opt(20, 5, 0)
            .unwrap();
        if sender.is_empty() {
            MessageRecord::notification(ts, body)
        } else {
            MessageRecord::new(ts, sender, body)
        }
    }

    fn sample() -> ChatDataset {
        ChatDataset::new(vec![
            record("Alice", "The pizza was great"),
            record("Bob", "pizza again tomorrow?"),
            record("Alice", MEDIA_OMITTED),
            record("", "Alice changed the group description pizza"),
            record("Bob", MESSAGE_DELETED),
            record("Bob", "Pizza PIZZA great"),
        ])
    }

    #[test]
    fn test_word_frequencies_excludes_stop_words_and_noise() {
        let table = word_frequencies(
            &sample(),
            &SenderFilter::overall(),
            &StopWords::english(),
            &AnalyticsConfig::default(),
        );
        let rows: Vec<(&str, usize)> = table.iter().map(|w| (w.word.as_str(), w.count)).collect();
        // "again" is a stop word
        assert_eq!(rows, vec![("pizza", 4), ("great", 2), ("tomorrow?", 1)]);
        assert!(table.iter().all(|w| w.word != "media" && w.word != "deleted"));
    }

    #[test]
    fn test_most_common_words_truncates() {
        let config = AnalyticsConfig::default().with_top_words(1);
        let table = most_common_words(
            &sample(),
            &SenderFilter::sender("Bob"),
            &StopWords::english(),
            &config,
        );
        assert_eq!(
            table,
            vec![WordCount {
                word: "pizza".to_string(),
                count: 3
            }]
        );
    }

    #[test]
    fn test_most_common_words_default_limit() {
        let body: Vec<String> = (0..30).map(|i| format!("w{i}")).collect();
        let dataset = ChatDataset::new(vec![record("Alice", &body.join(" "))]);
        let table = most_common_words(
            &dataset,
            &SenderFilter::overall(),
            &StopWords::english(),
            &AnalyticsConfig::default(),
        );
        assert_eq!(table.len(), 20);
        // all tied: first occurrence order
        assert_eq!(table[0].word, "w0");
        assert_eq!(table[19].word, "w19");
    }

    #[test]
    fn test_empty_stop_words_keep_everything() {
        let table = word_frequencies(
            &sample(),
            &SenderFilter::sender("Alice"),
            &StopWords::empty(),
            &AnalyticsConfig::default(),
        );
        let words: Vec<&str> = table.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["the", "pizza", "was", "great"]);
    }
}
