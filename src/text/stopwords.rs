//! Stop-word lists for vocabulary analysis.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ChatlensError, Result};

/// Built-in English list, whitespace-separated.
const ENGLISH: &str = "\
a about above after again against all am an and any are aren't as at
be because been before being below between both but by
can can't cannot could couldn't
did didn't do does doesn't doing don't down during
each few for from further
had hadn't has hasn't have haven't having he he'd he'll he's her here here's hers herself him himself his how how's
i i'd i'll i'm i've if in into is isn't it it's its itself
let's me more most mustn't my myself
no nor not of off on once only or other ought our ours ourselves out over own
same shan't she she'd she'll she's should shouldn't so some such
than that that's the their theirs them themselves then there there's these they they'd they'll they're they've this those through to too
under until up very
was wasn't we we'd we'll we're we've were weren't what what's when when's where where's which while who who's whom why why's with won't would wouldn't
you you'd you'll you're you've your yours yourself yourselves";

/// A set of lower-case words ignored by vocabulary analysis.
///
/// Lookups are exact on the lower-cased token; punctuation is not stripped.
///
/// # Example
///
/// ```rust
/// use chatlens::text::StopWords;
///
/// let stop = StopWords::from_resource("english")?;
/// assert!(stop.contains("the"));
/// assert!(stop.contains("The"));
/// assert!(!stop.contains("rust"));
///
/// assert!(StopWords::from_resource("none")?.is_empty());
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// An empty list: nothing is filtered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in English list.
    pub fn english() -> Self {
        Self::from_text(ENGLISH)
    }

    /// Parses a word list.
    ///
    /// Words are separated by whitespace; everything after `#` on a line is a
    /// comment.
    pub fn from_text(text: &str) -> Self {
        let words = text
            .lines()
            .map(|line| line.split('#').next().unwrap_or_default())
            .flat_map(str::split_whitespace)
            .map(str::to_lowercase)
            .collect();
        Self { words }
    }

    /// Loads a word list from a file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::MissingExternalResource`] if the file cannot
    /// be read.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| ChatlensError::missing_resource(path.display().to_string(), e.to_string()))?;
        let list = Self::from_text(&text);
        debug!(path = %path.display(), words = list.len(), "loaded stop words");
        Ok(list)
    }

    /// Resolves a resource name: `"english"`, `"none"`, or a file path.
    pub fn from_resource(name: &str) -> Result<Self> {
        match name {
            "english" => Ok(Self::english()),
            "none" => Ok(Self::empty()),
            path => Self::load(Path::new(path)),
        }
    }

    /// Returns `true` if `word` (compared lower-cased) is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
