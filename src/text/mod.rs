//! Text analytics: links, vocabulary, emoji and sentiment.
//!
//! The aggregations in this module lean on three pluggable collaborators.
//! Each is a `Send + Sync` trait with a default implementation shipped in
//! the crate:
//!
//! | Trait | Default |
//! |-------|---------|
//! | [`UrlExtractor`] | [`RegexUrlExtractor`] |
//! | [`EmojiClassifier`] | [`UnicodeEmojiTable`] |
//! | [`PolarityScorer`] | [`LexiconScorer`] |
//!
//! Stop words are plain data ([`StopWords`]) rather than a trait.

pub mod emoji;
pub mod sentiment;
pub mod stopwords;
pub mod urls;
pub mod vocabulary;

pub use emoji::{EmojiCount, UnicodeEmojiTable, emoji_frequency};
pub use sentiment::{
    LexiconScorer, MessageSentiment, SentimentLabel, SentimentReport, SentimentSummary,
    sentiment_classify,
};
pub use stopwords::StopWords;
pub use urls::RegexUrlExtractor;
pub use vocabulary::{WordCount, most_common_words, word_frequencies};

/// Finds URLs in free text.
pub trait UrlExtractor: Send + Sync {
    /// Every URL in `text`, in order of appearance.
    fn find_urls<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Number of URLs in `text`.
    fn count_urls(&self, text: &str) -> usize {
        self.find_urls(text).len()
    }
}

/// Decides whether a single grapheme cluster is an emoji.
pub trait EmojiClassifier: Send + Sync {
    fn is_emoji(&self, grapheme: &str) -> bool;
}

/// Scores the sentiment of a message body.
pub trait PolarityScorer: Send + Sync {
    /// Polarity in `[-1.0, 1.0]`; 0.0 when nothing opinionated was found.
    fn polarity(&self, text: &str) -> f64;
}
