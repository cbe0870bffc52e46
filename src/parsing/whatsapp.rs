//! Scanner for the `DD/MM/YYYY, H:MM am - sender: body` line prefix.
//!
//! The scanner is a small hand-written tokenizer over one line. It only
//! checks the *shape* of the prefix; [`LinePrefix::resolve`] then turns the
//! captured numbers into a real timestamp, which is where impossible dates
//! like `31/02/2023` are caught.
//!
//! Accepted shape:
//!
//! ```text
//! DD/MM/YYYY, H:MM am - Alice: message body
//! DD/MM/YYYY, HH:MM\u{202f}pm - +91 98765 43210: message body
//! DD/MM/YYYY, HH:MM pm - Alice joined using this group's invite link
//! ```

use chrono::{NaiveDate, NaiveDateTime};

use crate::temporal::{Meridiem, to_twenty_four_hour};

/// Structurally valid line prefix, not yet checked against the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePrefix<'a> {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    /// Hour as written, expected on the 1-12 clock face
    pub hour: u32,
    pub minute: u32,
    pub meridiem: Meridiem,
    /// Everything after `" - "`: `sender: body`, or a system event text
    pub rest: &'a str,
}

impl LinePrefix<'_> {
    /// Resolves the captured fields into a calendar timestamp.
    ///
    /// Returns a human-readable reason if the date or time does not exist.
    pub fn resolve(&self) -> Result<NaiveDateTime, String> {
        let date = NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or_else(|| {
            format!(
                "no such calendar date {:02}/{:02}/{:04}",
                self.day, self.month, self.year
            )
        })?;

        let hour = to_twenty_four_hour(self.hour, self.meridiem)
            .ok_or_else(|| format!("hour {} is not on a 12-hour clock", self.hour))?;

        date.and_hms_opt(hour, self.minute, 0)
            .ok_or_else(|| format!("minute {} is out of range", self.minute))
    }
}

/// Spaces accepted between tokens: ordinary, non-breaking, narrow non-breaking.
fn is_separator_space(c: char) -> bool {
    matches!(c, ' ' | '\u{a0}' | '\u{202f}')
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// Reads between `min` and `max` ASCII digits.
    fn number(&mut self, min: usize, max: usize) -> Option<u32> {
        let start = self.pos;
        while self.pos - start < max && self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        let len = self.pos - start;
        if len < min {
            return None;
        }
        self.src[start..self.pos].parse().ok()
    }

    fn literal(&mut self, expected: char) -> Option<()> {
        (self.bump()? == expected).then_some(())
    }

    fn space(&mut self) -> Option<()> {
        is_separator_space(self.bump()?).then_some(())
    }

    fn optional_space(&mut self) {
        if self.peek().is_some_and(is_separator_space) {
            self.bump();
        }
    }

    fn meridiem(&mut self) -> Option<Meridiem> {
        let meridiem = match self.bump()?.to_ascii_lowercase() {
            'a' => Meridiem::Am,
            'p' => Meridiem::Pm,
            _ => return None,
        };
        (self.bump()?.to_ascii_lowercase() == 'm').then_some(meridiem)
    }
}

/// Scans the timestamp prefix of a transcript line.
///
/// Returns `None` if the line does not start with a message prefix; such
/// lines are continuation lines of a multi-line message.
pub fn scan_prefix(line: &str) -> Option<LinePrefix<'_>> {
    let mut cur = Cursor::new(line);

    let day = cur.number(2, 2)?;
    cur.literal('/')?;
    let month = cur.number(2, 2)?;
    cur.literal('/')?;
    let year = cur.number(4, 4)?;
    cur.literal(',')?;
    cur.space()?;

    let hour = cur.number(1, 2)?;
    cur.literal(':')?;
    let minute = cur.number(2, 2)?;
    cur.optional_space();
    let meridiem = cur.meridiem()?;

    cur.space()?;
    cur.literal('-')?;
    cur.space()?;

    Some(LinePrefix {
        day,
        month,
        year: year as i32,
        hour,
        minute,
        meridiem,
        rest: cur.rest(),
    })
}

/// Characters some exports wrap phone numbers and names in.
fn is_direction_mark(c: char) -> bool {
    matches!(c, '\u{200e}' | '\u{200f}' | '\u{202a}'..='\u{202e}' | '\u{2066}'..='\u{2069}')
}

/// Splits the part after the prefix into sender and body.
///
/// Returns `None` when there is no `sender: ` separator, which is how the
/// export writes system events.
pub fn split_sender(rest: &str) -> Option<(&str, &str)> {
    let (sender, body) = rest.split_once(": ")?;
    let sender = sender.trim_matches(|c: char| c.is_whitespace() || is_direction_mark(c));
    if sender.is_empty() {
        return None;
    }
    Some((sender, body))
}

/// Strips a byte-order mark and leading direction marks from a raw line.
pub fn clean_line(line: &str) -> &str {
    line.trim_start_matches(|c: char| c == '\u{feff}' || is_direction_mark(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_basic_line() {
        let prefix = scan_prefix("01/02/2023, 9:15 am - Alice: Hello there").unwrap();
        assert_eq!(prefix.day, 1);
        assert_eq!(prefix.month, 2);
        assert_eq!(prefix.year, 2023);
        assert_eq!(prefix.hour, 9);
        assert_eq!(prefix.minute, 15);
        assert_eq!(prefix.meridiem, Meridiem::Am);
        assert_eq!(prefix.rest, "Alice: Hello there");
    }

    #[test]
    fn test_scan_space_variants_before_marker() {
        for line in [
            "01/02/2023, 10:15 pm - Bob: hi",
            "01/02/2023, 10:15pm - Bob: hi",
            "01/02/2023, 10:15\u{a0}pm - Bob: hi",
            "01/02/2023, 10:15\u{202f}pm - Bob: hi",
            "01/02/2023, 10:15 PM - Bob: hi",
        ] {
            let prefix = scan_prefix(line).unwrap_or_else(|| panic!("should match: {line}"));
            assert_eq!(prefix.meridiem, Meridiem::Pm);
            assert_eq!(prefix.rest, "Bob: hi");
        }
    }

    #[test]
    fn test_scan_rejects_other_shapes() {
        assert!(scan_prefix("just a continuation line").is_none());
        assert!(scan_prefix("1/02/2023, 9:15 am - Alice: x").is_none());
        assert!(scan_prefix("01/02/23, 9:15 am - Alice: x").is_none());
        assert!(scan_prefix("01/02/2023, 9:15 - Alice: x").is_none());
        assert!(scan_prefix("01/02/2023, 9:15 am Alice: x").is_none());
        assert!(scan_prefix("[01/02/2023, 9:15 am] Alice: x").is_none());
        assert!(scan_prefix("01.02.2023, 9:15 am - Alice: x").is_none());
        assert!(scan_prefix("").is_none());
    }

    #[test]
    fn test_resolve_valid() {
        let ts = scan_prefix("29/02/2024, 12:30 am - A: x")
            .unwrap()
            .resolve()
            .unwrap();
        assert_eq!(ts.to_string(), "2024-02-29 00:30:00");
    }

    #[test]
    fn test_resolve_impossible_date() {
        let err = scan_prefix("31/02/2023, 9:15 am - A: x")
            .unwrap()
            .resolve()
            .unwrap_err();
        assert!(err.contains("31/02/2023"));

        assert!(scan_prefix("29/02/2023, 9:15 am - A: x").unwrap().resolve().is_err());
        assert!(scan_prefix("01/13/2023, 9:15 am - A: x").unwrap().resolve().is_err());
    }

    #[test]
    fn test_resolve_impossible_time() {
        assert!(scan_prefix("01/02/2023, 13:15 pm - A: x").unwrap().resolve().is_err());
        assert!(scan_prefix("01/02/2023, 0:15 am - A: x").unwrap().resolve().is_err());
        assert!(scan_prefix("01/02/2023, 9:75 am - A: x").unwrap().resolve().is_err());
    }

    #[test]
    fn test_split_sender() {
        assert_eq!(split_sender("Alice: Hello"), Some(("Alice", "Hello")));
        assert_eq!(
            split_sender("\u{202a}+91 98765 43210\u{202c}: hey"),
            Some(("+91 98765 43210", "hey"))
        );
        assert_eq!(split_sender("Bob: time is 10: 30"), Some(("Bob", "time is 10: 30")));
        assert_eq!(split_sender("Alice left"), None);
        assert_eq!(split_sender(" : empty sender"), None);
    }

    #[test]
    fn test_clean_line() {
        assert_eq!(clean_line("\u{feff}01/02/2023"), "01/02/2023");
        assert_eq!(clean_line("\u{200e}01/02/2023"), "01/02/2023");
        assert_eq!(clean_line("plain"), "plain");
    }
}
