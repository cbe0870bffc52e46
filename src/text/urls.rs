//! Regex-based URL detection.

use std::sync::LazyLock;

use regex::Regex;

use super::UrlExtractor;

// scheme://..., www...., or a bare domain ending in a well-known TLD
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        \b(?:
            [a-z][a-z0-9+.\-]*://[^\s<>]+
          | www\.[^\s<>]+
          | (?:[a-z0-9](?:[a-z0-9\-]*[a-z0-9])?\.)+
            (?:com|org|net|edu|gov|io|dev|app|co|in|uk|de|fr|ru|info|me|ly|gg|tv|ai)
            \b(?:/[^\s<>]*)?
        )",
    )
    .expect("valid URL pattern")
});

const TRAILING: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '}', '"', '\'', '>'];

/// Default [`UrlExtractor`].
///
/// Recognizes anything with a scheme (`https://`, `ftp://`), anything starting
/// with `www.`, and bare domains with a common top-level domain
/// (`example.com/path`). Trailing sentence punctuation is not part of the URL.
/// Email addresses are not links: a match touching an `@` on either side is
/// discarded.
///
/// ```
/// use chatlens::text::{RegexUrlExtractor, UrlExtractor};
///
/// let urls = RegexUrlExtractor::new();
/// assert_eq!(
///     urls.find_urls("docs at https://docs.rs/regex, or github.com."),
///     vec!["https://docs.rs/regex", "github.com"]
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexUrlExtractor;

impl RegexUrlExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl UrlExtractor for RegexUrlExtractor {
    fn find_urls<'a>(&self, text: &'a str) -> Vec<&'a str> {
        URL_RE
            .find_iter(text)
            .filter(|m| !touches_at_sign(text, m.start(), m.end()))
            .map(|m| m.as_str().trim_end_matches(TRAILING))
            .filter(|url| !url.is_empty())
            .collect()
    }
}

fn touches_at_sign(text: &str, start: usize, end: usize) -> bool {
    text[..start].ends_with('@') || text[end..].starts_with('@')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(text: &str) -> Vec<&str> {
        RegexUrlExtractor::new().find_urls(text)
    }

    #[test]
    fn test_scheme_urls() {
        assert_eq!(
            find("read https://example.com/a?b=1 and http://x.org"),
            vec!["https://example.com/a?b=1", "http://x.org"]
        );
    }

    #[test]
    fn test_www_and_bare_domains() {
        assert_eq!(
            find("www.rust-lang.org and crates.io/crates/regex"),
            vec!["www.rust-lang.org", "crates.io/crates/regex"]
        );
    }

    #[test]
    fn test_trailing_punctuation_trimmed() {
        assert_eq!(find("(see https://example.com)."), vec!["https://example.com"]);
    }

    #[test]
    fn test_plain_text_has_no_links() {
        assert!(find("hello there, see you at 5.30 ok?").is_empty());
        assert!(find("<Media omitted>").is_empty());
        assert_eq!(RegexUrlExtractor::new().count_urls("nothing here"), 0);
    }

    #[test]
    fn test_email_addresses_are_not_links() {
        assert!(find("alice@gmail.com").is_empty());
        assert!(find("mail me at alice@gmail.com or bob.smith@company.co").is_empty());
        assert!(find("ask alice.me@example.org").is_empty());
        assert_eq!(
            find("write to bob@example.org or visit example.org/help"),
            vec!["example.org/help"]
        );
    }

    #[test]
    fn test_count_urls() {
        let urls = RegexUrlExtractor::new();
        assert_eq!(
            urls.count_urls("see https://example.com and www.rust-lang.org"),
            2
        );
    }
}
