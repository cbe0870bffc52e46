//! Calendar fields and period labels derived from a message timestamp.
//!
//! Every field here is a pure function of the timestamp. [`enrich`] computes
//! them all at once when a [`MessageRecord`](crate::MessageRecord) is built.
//!
//! ```
//! use chatlens::temporal::{Meridiem, enrich, period_label};
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 2, 1)
//!     .unwrap()
//!     .and_hms_opt(23, 40, 0)
//!     .unwrap();
//! let fields = enrich(ts);
//!
//! assert_eq!(fields.day_name, "Wednesday");
//! assert_eq!(fields.hour, 11);
//! assert_eq!(fields.meridiem, Meridiem::Pm);
//! assert_eq!(fields.period, "11 pm - 12 am");
//! assert_eq!(period_label(5, Meridiem::Pm), "5 pm - 6 pm");
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Ante/post meridiem flag of a 12-hour clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Meridiem {
    /// Midnight up to (not including) noon
    Am,
    /// Noon up to (not including) midnight
    Pm,
}

impl Meridiem {
    /// Lower-case marker as written in transcripts.
    pub fn as_str(self) -> &'static str {
        match self {
            Meridiem::Am => "am",
            Meridiem::Pm => "pm",
        }
    }

    /// The other half of the day.
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Meridiem::Am => Meridiem::Pm,
            Meridiem::Pm => Meridiem::Am,
        }
    }

    /// Meridiem of a 24-hour clock hour.
    pub fn of_hour(hour24: u32) -> Self {
        if hour24 < 12 { Meridiem::Am } else { Meridiem::Pm }
    }
}

impl std::fmt::Display for Meridiem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calendar and clock fields of one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalFields {
    /// Calendar date without time
    pub date: NaiveDate,
    /// Four-digit year
    pub year: i32,
    /// Full English month name ("January")
    pub month: String,
    /// Month number, 1-12
    pub month_num: u32,
    /// Full English weekday name ("Monday")
    pub day_name: String,
    /// Hour on the 12-hour clock face, 1-12
    pub hour: u32,
    /// Minute, 0-59
    pub minute: u32,
    /// am/pm flag
    pub meridiem: Meridiem,
    /// Period label used by the activity heatmap ("3 pm - 4 pm")
    pub period: String,
    /// Hour on the 24-hour clock, 0-23; orders the heatmap columns
    pub hour_of_day: u32,
}

/// Derives all calendar fields from a timestamp.
pub fn enrich(timestamp: NaiveDateTime) -> TemporalFields {
    let date = timestamp.date();
    let hour_of_day = timestamp.hour();
    let meridiem = Meridiem::of_hour(hour_of_day);
    let hour = to_twelve_hour(hour_of_day);

    TemporalFields {
        date,
        year: date.year(),
        month: month_name(date.month()).to_string(),
        month_num: date.month(),
        day_name: weekday_name(date.weekday()).to_string(),
        hour,
        minute: timestamp.minute(),
        meridiem,
        period: period_label(hour, meridiem),
        hour_of_day,
    }
}

/// Period label starting at `hour` (12-hour clock).
///
/// The label ends at `hour % 12 + 1`; the meridiem flips only when the
/// period starts at 11, so 11 am ends at 12 pm and 11 pm ends at 12 am.
pub fn period_label(hour: u32, meridiem: Meridiem) -> String {
    let next = hour % 12 + 1;
    let next_meridiem = if hour == 11 { meridiem.flip() } else { meridiem };
    format!("{hour} {meridiem} - {next} {next_meridiem}")
}

/// Converts a 24-hour clock hour into the 1-12 clock face.
pub fn to_twelve_hour(hour24: u32) -> u32 {
    match hour24 % 12 {
        0 => 12,
        h => h,
    }
}

/// Converts a 12-hour clock time into a 24-hour clock hour.
///
/// Returns `None` if `hour` is not on the 1-12 clock face.
pub fn to_twenty_four_hour(hour: u32, meridiem: Meridiem) -> Option<u32> {
    if !(1..=12).contains(&hour) {
        return None;
    }
    let base = hour % 12;
    Some(match meridiem {
        Meridiem::Am => base,
        Meridiem::Pm => base + 12,
    })
}

/// Weekday names in calendar order, Monday first.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Month names in calendar order.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English name of a weekday.
pub fn weekday_name(day: Weekday) -> &'static str {
    WEEKDAYS[day.num_days_from_monday() as usize]
}

/// Full English name of a month number (1-12).
///
/// Out-of-range numbers are clamped into the calendar.
pub fn month_name(month: u32) -> &'static str {
    MONTHS[(month.clamp(1, 12) - 1) as usize]
}

/// Calendar position of a weekday name, Monday = 0.
pub fn weekday_index(name: &str) -> Option<usize> {
    WEEKDAYS.iter().position(|d| *d == name)
}

/// Calendar position of a month name, January = 0.
pub fn month_index(name: &str) -> Option<usize> {
    MONTHS.iter().position(|m| *m == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_period_label_boundaries() {
        assert_eq!(period_label(11, Meridiem::Am), "11 am - 12 pm");
        assert_eq!(period_label(11, Meridiem::Pm), "11 pm - 12 am");
        assert_eq!(period_label(5, Meridiem::Pm), "5 pm - 6 pm");
        assert_eq!(period_label(12, Meridiem::Pm), "12 pm - 1 pm");
        assert_eq!(period_label(12, Meridiem::Am), "12 am - 1 am");
        assert_eq!(period_label(10, Meridiem::Am), "10 am - 11 am");
    }

    #[test]
    fn test_enrich_morning() {
        let fields = enrich(at(2023, 2, 1, 9, 15));
        assert_eq!(fields.date, NaiveDate::from_ymd_opt(2023, 2, 1).unwrap());
        assert_eq!(fields.year, 2023);
        assert_eq!(fields.month, "February");
        assert_eq!(fields.month_num, 2);
        assert_eq!(fields.day_name, "Wednesday");
        assert_eq!(fields.hour, 9);
        assert_eq!(fields.minute, 15);
        assert_eq!(fields.meridiem, Meridiem::Am);
        assert_eq!(fields.period, "9 am - 10 am");
        assert_eq!(fields.hour_of_day, 9);
    }

    #[test]
    fn test_enrich_midnight_and_noon() {
        let midnight = enrich(at(2024, 1, 1, 0, 5));
        assert_eq!(midnight.hour, 12);
        assert_eq!(midnight.meridiem, Meridiem::Am);
        assert_eq!(midnight.period, "12 am - 1 am");

        let noon = enrich(at(2024, 1, 1, 12, 5));
        assert_eq!(noon.hour, 12);
        assert_eq!(noon.meridiem, Meridiem::Pm);
        assert_eq!(noon.period, "12 pm - 1 pm");
    }

    #[test]
    fn test_enrich_late_evening() {
        let fields = enrich(at(2024, 12, 31, 23, 59));
        assert_eq!(fields.hour, 11);
        assert_eq!(fields.meridiem, Meridiem::Pm);
        assert_eq!(fields.period, "11 pm - 12 am");
        assert_eq!(fields.day_name, "Tuesday");
        assert_eq!(fields.month, "December");
    }

    #[test]
    fn test_enrich_period_is_period_label() {
        for h24 in 0..24 {
            let fields = enrich(at(2024, 3, 4, h24, 30));
            assert_eq!(fields.period, period_label(fields.hour, fields.meridiem));
        }
    }

    #[test]
    fn test_twelve_hour_round_trip() {
        for h24 in 0..24 {
            let m = Meridiem::of_hour(h24);
            assert_eq!(to_twenty_four_hour(to_twelve_hour(h24), m), Some(h24));
        }
        assert_eq!(to_twenty_four_hour(0, Meridiem::Am), None);
        assert_eq!(to_twenty_four_hour(13, Meridiem::Pm), None);
    }

    #[test]
    fn test_calendar_indexes() {
        assert_eq!(weekday_index("Monday"), Some(0));
        assert_eq!(weekday_index("Sunday"), Some(6));
        assert_eq!(weekday_index("Funday"), None);
        assert_eq!(month_index("March"), Some(2));
        assert_eq!(month_name(12), "December");
    }
}
