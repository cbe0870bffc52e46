//! Per-message sentiment classification.
//!
//! A [`PolarityScorer`] maps each authored message to a polarity in
//! `[-1, 1]`, which is then bucketed with the thresholds from
//! [`AnalyticsConfig`]:
//!
//! - `polarity > positive_threshold` is [`SentimentLabel::Positive`]
//! - `polarity < negative_threshold` is [`SentimentLabel::Negative`]
//! - everything else is [`SentimentLabel::Neutral`]

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::config::AnalyticsConfig;
use crate::core::filter::SenderFilter;
use crate::dataset::ChatDataset;

use super::PolarityScorer;

/// Sentiment bucket of one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Buckets a polarity with the thresholds of `config`.
    pub fn classify(polarity: f64, config: &AnalyticsConfig) -> Self {
        if polarity > config.positive_threshold {
            Self::Positive
        } else if polarity < config.negative_threshold {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score and label of one message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageSentiment {
    pub timestamp: NaiveDateTime,
    pub sender: String,
    pub body: String,
    pub polarity: f64,
    pub label: SentimentLabel,
}

/// Number of messages per label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentSummary {
    fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Neutral => self.neutral += 1,
            SentimentLabel::Negative => self.negative += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

/// Per-message table plus the category counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    pub messages: Vec<MessageSentiment>,
    pub summary: SentimentSummary,
}

/// Scores every authored message in the selection.
///
/// Notifications and placeholder bodies carry no opinion and are skipped.
pub fn sentiment_classify(
    dataset: &ChatDataset,
    filter: &SenderFilter,
    scorer: &dyn PolarityScorer,
    config: &AnalyticsConfig,
) -> SentimentReport {
    let mut report = SentimentReport::default();

    for msg in dataset
        .filtered(filter)
        .filter(|m| !m.is_notification() && !config.is_placeholder(m.body()))
    {
        let polarity = scorer.polarity(msg.body()).clamp(-1.0, 1.0);
        let label = SentimentLabel::classify(polarity, config);
        report.summary.record(label);
        report.messages.push(MessageSentiment {
            timestamp: msg.timestamp(),
            sender: msg.sender().to_string(),
            body: msg.body().to_string(),
            polarity,
            label,
        });
    }

    report
}

// ============================================================================
// Lexicon scorer
// ============================================================================

const POSITIVE: &[(&str, f64)] = &[
    ("love", 0.8),
    ("loved", 0.8),
    ("lovely", 0.7),
    ("like", 0.3),
    ("liked", 0.4),
    ("good", 0.6),
    ("great", 0.7),
    ("awesome", 0.9),
    ("amazing", 0.9),
    ("excellent", 0.9),
    ("fantastic", 0.9),
    ("wonderful", 0.8),
    ("perfect", 0.9),
    ("best", 0.8),
    ("better", 0.4),
    ("nice", 0.6),
    ("cool", 0.5),
    ("happy", 0.8),
    ("glad", 0.6),
    ("fun", 0.6),
    ("funny", 0.5),
    ("beautiful", 0.8),
    ("congrats", 0.8),
    ("congratulations", 0.8),
    ("thanks", 0.5),
    ("thank", 0.5),
    ("welcome", 0.4),
    ("yay", 0.7),
    ("win", 0.6),
    ("won", 0.6),
    ("enjoy", 0.6),
    ("enjoyed", 0.6),
    ("excited", 0.7),
    ("sweet", 0.5),
    ("cute", 0.6),
    ("brilliant", 0.8),
    ("super", 0.6),
    ("haha", 0.4),
    ("lol", 0.3),
    (":)", 0.5),
    (":-)", 0.5),
    (":d", 0.7),
    ("<3", 0.8),
];

const NEGATIVE: &[(&str, f64)] = &[
    ("hate", -0.8),
    ("hated", -0.8),
    ("bad", -0.6),
    ("worse", -0.6),
    ("worst", -0.9),
    ("terrible", -0.9),
    ("horrible", -0.9),
    ("awful", -0.9),
    ("sad", -0.6),
    ("angry", -0.7),
    ("annoying", -0.6),
    ("annoyed", -0.6),
    ("boring", -0.5),
    ("tired", -0.3),
    ("sick", -0.5),
    ("sorry", -0.3),
    ("upset", -0.6),
    ("ugly", -0.7),
    ("stupid", -0.7),
    ("wrong", -0.5),
    ("fail", -0.6),
    ("failed", -0.6),
    ("problem", -0.4),
    ("lost", -0.4),
    ("miss", -0.2),
    ("disappointed", -0.7),
    ("sucks", -0.7),
    ("damn", -0.4),
    ("ugh", -0.5),
    ("late", -0.2),
    (":(", -0.5),
    (":-(", -0.5),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "nothing", "nobody", "none", "neither", "cannot", "cant", "can't",
    "dont", "don't", "doesnt", "doesn't", "didnt", "didn't", "isnt", "isn't", "wasnt", "wasn't",
    "arent", "aren't", "wont", "won't", "wouldnt", "wouldn't", "hardly", "barely",
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.5),
    ("really", 1.4),
    ("so", 1.3),
    ("too", 1.3),
    ("extremely", 2.0),
    ("totally", 1.5),
    ("absolutely", 1.8),
    ("quite", 1.2),
    ("slightly", 0.5),
    ("somewhat", 0.7),
    ("bit", 0.6),
];

/// Default [`PolarityScorer`]: a conversational English word lexicon.
///
/// Tokens are lower-cased and stripped of surrounding punctuation. A negation
/// flips the sign of the next scored word; an intensifier scales it. The
/// polarity is the mean of the scored words, clamped to `[-1, 1]`.
///
/// ```
/// use chatlens::text::{LexiconScorer, PolarityScorer};
///
/// let scorer = LexiconScorer::new();
/// assert!(scorer.polarity("this is great!") > 0.1);
/// assert!(scorer.polarity("not good at all") < -0.1);
/// assert_eq!(scorer.polarity("see you at 5"), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    words: HashMap<&'static str, f64>,
    intensifiers: HashMap<&'static str, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            words: POSITIVE.iter().chain(NEGATIVE).copied().collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }

    /// Lexicon score of a single lower-case token, if any.
    pub fn word_score(&self, token: &str) -> Option<f64> {
        self.words.get(token).copied()
    }

    fn lookup(&self, raw: &str) -> Token {
        // emoticons live in the lexicon with their punctuation
        if let Some(score) = self.words.get(raw) {
            return Token::Scored(*score);
        }

        let word = raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'');
        if NEGATIONS.contains(&word) {
            Token::Negation
        } else if let Some(score) = self.words.get(word) {
            Token::Scored(*score)
        } else if let Some(mult) = self.intensifiers.get(word) {
            Token::Intensifier(*mult)
        } else {
            Token::Other
        }
    }
}

enum Token {
    Scored(f64),
    Negation,
    Intensifier(f64),
    Other,
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase();
        let mut scores: Vec<f64> = Vec::new();
        let mut negate = false;
        let mut intensity = 1.0;

        for raw in lowered.split_whitespace() {
            match self.lookup(raw) {
                Token::Negation => negate = true,
                Token::Intensifier(mult) => intensity = mult,
                Token::Scored(score) => {
                    let signed = if negate { -score } else { score };
                    scores.push(signed * intensity);
                    negate = false;
                    intensity = 1.0;
                }
                Token::Other => {}
            }
        }

        if scores.is_empty() {
            return 0.0;
        }
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{MEDIA_OMITTED, MessageRecord};
    use chrono::NaiveDate;

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 4, 2)
            .unwrap()
            .and_hms_opt(11, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_classify_thresholds() {
        let config = AnalyticsConfig::default();
        assert_eq!(SentimentLabel::classify(0.5, &config), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::classify(0.1, &config), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::classify(0.0, &config), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::classify(-0.1, &config), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::classify(-0.5, &config), SentimentLabel::Negative);

        let strict = config.with_sentiment_thresholds(0.6, -0.6);
        assert_eq!(SentimentLabel::classify(0.5, &strict), SentimentLabel::Neutral);
    }

    #[test]
    fn test_lexicon_basic() {
        let scorer = LexiconScorer::new();
        assert!((scorer.polarity("I love it") - 0.8).abs() < 1e-9);
        assert!((scorer.polarity("this is bad.") + 0.6).abs() < 1e-9);
        assert_eq!(scorer.polarity("meeting at noon"), 0.0);
        assert_eq!(scorer.polarity(""), 0.0);
    }

    #[test]
    fn test_lexicon_negation_and_intensifiers() {
        let scorer = LexiconScorer::new();
        assert!((scorer.polarity("not good") + 0.6).abs() < 1e-9);
        assert!((scorer.polarity("very good") - 0.9).abs() < 1e-9);
        // 0.9 * 2.0 is clamped
        assert_eq!(scorer.polarity("EXTREMELY awesome!!"), 1.0);
        // negation is consumed by the first scored word
        assert!((scorer.polarity("not bad, great") - 0.65).abs() < 1e-9);
    }

    #[test]
    fn test_lexicon_emoticons() {
        let scorer = LexiconScorer::new();
        assert!(scorer.polarity("see you :)") > 0.1);
        assert!(scorer.polarity("missed the bus :(") < -0.1);
    }

    #[test]
    fn test_sentiment_classify_dataset() {
        let dataset = ChatDataset::new(vec![
            MessageRecord::new(ts(), "Alice", "what a great day"),
            MessageRecord::new(ts(), "Bob", "traffic was terrible"),
            MessageRecord::new(ts(), "Bob", "on my way"),
            MessageRecord::new(ts(), "Bob", MEDIA_OMITTED),
            MessageRecord::notification(ts(), "Bob left, sad"),
        ]);

        let report = sentiment_classify(
            &dataset,
            &SenderFilter::overall(),
            &LexiconScorer::new(),
            &AnalyticsConfig::default(),
        );
        assert_eq!(report.messages.len(), 3);
        assert_eq!(
            report.summary,
            SentimentSummary {
                positive: 1,
                neutral: 1,
                negative: 1
            }
        );
        assert_eq!(report.summary.total(), report.messages.len());
        assert_eq!(report.messages[1].label, SentimentLabel::Negative);
        assert!(report.messages.iter().all(|m| (-1.0..=1.0).contains(&m.polarity)));
    }

    #[test]
    fn test_sentiment_classify_filtered() {
        let dataset = ChatDataset::new(vec![
            MessageRecord::new(ts(), "Alice", "love it"),
            MessageRecord::new(ts(), "Bob", "hate it"),
        ]);
        let report = sentiment_classify(
            &dataset,
            &SenderFilter::sender("Bob"),
            &LexiconScorer::new(),
            &AnalyticsConfig::default(),
        );
        assert_eq!(report.messages.len(), 1);
        assert_eq!(report.summary.negative, 1);
    }

    #[test]
    fn test_label_serde() {
        let json = serde_json::to_string(&SentimentLabel::Positive).unwrap();
        assert_eq!(json, "\"positive\"");
        assert_eq!(SentimentLabel::Negative.to_string(), "negative");
    }
}
