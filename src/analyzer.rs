//! Analysis session over one parsed transcript.
//!
//! An [`Analyzer`] owns the dataset, the analytics configuration and the
//! text collaborators. They are loaded once and never change, so every
//! operation takes `&self` and the session can be shared across threads.
//!
//! # Example
//!
//! ```rust
//! use chatlens::analyzer::Analyzer;
//! use chatlens::core::filter::SenderFilter;
//! use chatlens::parser::TranscriptParser;
//!
//! let transcript = "\
//! 01/02/2023, 9:15 am - Alice: Hello there, great to see you
//! 01/02/2023, 9:16 am - Bob: <Media omitted>
//! 01/02/2023, 9:20 am - Bob: see https://example.com";
//!
//! let analyzer = Analyzer::new(TranscriptParser::new().parse_str(transcript)?);
//! let stats = analyzer.fetch_stats(&SenderFilter::overall());
//! assert_eq!(stats.messages, 3);
//! assert_eq!(stats.media, 1);
//! assert_eq!(stats.links, 1);
//!
//! let report = analyzer.report(&SenderFilter::sender("Bob"));
//! assert!(report.top_users.is_none());
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::fmt;
use std::path::Path;

use tracing::{debug, info};

use crate::config::{AnalyticsConfig, ParserConfig};
use crate::core::activity::{self, CategoryCount, Heatmap};
use crate::core::filter::SenderFilter;
use crate::core::stats::{self, ActiveUsers, ChatStats};
use crate::core::timeline::{self, TimelineEntry};
use crate::dataset::ChatDataset;
use crate::error::Result;
use crate::parser::TranscriptParser;
use crate::report::Report;
use crate::text::{
    self, EmojiClassifier, EmojiCount, LexiconScorer, PolarityScorer, RegexUrlExtractor,
    SentimentReport, StopWords, UnicodeEmojiTable, UrlExtractor, WordCount,
};

/// One analysis session.
pub struct Analyzer {
    dataset: ChatDataset,
    config: AnalyticsConfig,
    stop_words: StopWords,
    urls: Box<dyn UrlExtractor>,
    emoji: Box<dyn EmojiClassifier>,
    scorer: Box<dyn PolarityScorer>,
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyzer")
            .field("messages", &self.dataset.len())
            .field("config", &self.config)
            .field("stop_words", &self.stop_words.len())
            .finish_non_exhaustive()
    }
}

impl Analyzer {
    /// Session with the default configuration and collaborators.
    ///
    /// Uses the built-in English stop words, [`RegexUrlExtractor`],
    /// [`UnicodeEmojiTable`] and [`LexiconScorer`].
    pub fn new(dataset: ChatDataset) -> Self {
        Self {
            dataset,
            config: AnalyticsConfig::default(),
            stop_words: StopWords::english(),
            urls: Box::new(RegexUrlExtractor::new()),
            emoji: Box::new(UnicodeEmojiTable::new()),
            scorer: Box::new(LexiconScorer::new()),
        }
    }

    /// Parses a transcript file and opens a session on it.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or holds no parseable message.
    pub fn from_transcript(path: &Path, parser_config: ParserConfig) -> Result<Self> {
        let dataset = TranscriptParser::with_config(parser_config).parse(path)?;
        info!(path = %path.display(), messages = dataset.len(), "session opened");
        Ok(Self::new(dataset))
    }

    #[must_use]
    pub fn with_config(mut self, config: AnalyticsConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    #[must_use]
    pub fn with_url_extractor(mut self, urls: impl UrlExtractor + 'static) -> Self {
        self.urls = Box::new(urls);
        self
    }

    #[must_use]
    pub fn with_emoji_classifier(mut self, emoji: impl EmojiClassifier + 'static) -> Self {
        self.emoji = Box::new(emoji);
        self
    }

    #[must_use]
    pub fn with_polarity_scorer(mut self, scorer: impl PolarityScorer + 'static) -> Self {
        self.scorer = Box::new(scorer);
        self
    }

    pub fn dataset(&self) -> &ChatDataset {
        &self.dataset
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// `"Overall"` followed by the sorted senders.
    pub fn selection_options(&self) -> Vec<String> {
        self.dataset.selection_options()
    }

    // =========================================================================
    // Aggregations
    // =========================================================================

    pub fn fetch_stats(&self, filter: &SenderFilter) -> ChatStats {
        stats::fetch_stats(&self.dataset, filter, self.urls.as_ref(), &self.config)
    }

    /// Ranked users over the whole dataset; ignores any selection.
    pub fn top_active_users(&self) -> ActiveUsers {
        stats::top_active_users(&self.dataset, self.config.top_users)
    }

    pub fn monthly_timeline(&self, filter: &SenderFilter) -> Vec<TimelineEntry> {
        timeline::monthly_timeline(&self.dataset, filter)
    }

    pub fn daily_timeline(&self, filter: &SenderFilter) -> Vec<TimelineEntry> {
        timeline::daily_timeline(&self.dataset, filter)
    }

    pub fn week_activity_map(&self, filter: &SenderFilter) -> Vec<CategoryCount> {
        activity::week_activity_map(&self.dataset, filter)
    }

    pub fn month_activity_map(&self, filter: &SenderFilter) -> Vec<CategoryCount> {
        activity::month_activity_map(&self.dataset, filter)
    }

    pub fn activity_heatmap(&self, filter: &SenderFilter) -> Heatmap {
        activity::activity_heatmap(&self.dataset, filter)
    }

    /// Untruncated word table (word-cloud input).
    pub fn word_frequencies(&self, filter: &SenderFilter) -> Vec<WordCount> {
        text::word_frequencies(&self.dataset, filter, &self.stop_words, &self.config)
    }

    pub fn most_common_words(&self, filter: &SenderFilter) -> Vec<WordCount> {
        text::most_common_words(&self.dataset, filter, &self.stop_words, &self.config)
    }

    pub fn emoji_frequency(&self, filter: &SenderFilter) -> Vec<EmojiCount> {
        text::emoji_frequency(&self.dataset, filter, self.emoji.as_ref())
    }

    pub fn sentiment_classify(&self, filter: &SenderFilter) -> SentimentReport {
        text::sentiment_classify(&self.dataset, filter, self.scorer.as_ref(), &self.config)
    }

    /// Runs every aggregation for `filter`.
    ///
    /// The user ranking is only included for the overall selection. With the
    /// `parallel` feature the independent reductions run on the rayon pool.
    pub fn report(&self, filter: &SenderFilter) -> Report {
        debug!(selection = %filter, "building report");

        let ((stats, top_users), ((monthly, daily), (weekdays, months))) = join(
            || {
                join(
                    || self.fetch_stats(filter),
                    || filter.is_overall().then(|| self.top_active_users()),
                )
            },
            || {
                join(
                    || join(|| self.monthly_timeline(filter), || self.daily_timeline(filter)),
                    || join(|| self.week_activity_map(filter), || self.month_activity_map(filter)),
                )
            },
        );

        let ((heatmap, words), (emoji, sentiment)) = join(
            || join(|| self.activity_heatmap(filter), || self.most_common_words(filter)),
            || join(|| self.emoji_frequency(filter), || self.sentiment_classify(filter)),
        );

        Report {
            selection: filter.to_string(),
            stats,
            top_users,
            monthly_timeline: monthly,
            daily_timeline: daily,
            week_activity: weekdays,
            month_activity: months,
            heatmap,
            common_words: words,
            emoji,
            sentiment,
        }
    }
}

#[cfg(feature = "parallel")]
fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    rayon::join(a, b)
}

#[cfg(not(feature = "parallel"))]
fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA,
    B: FnOnce() -> RB,
{
    (a(), b())
}
