//! The lesson record value type.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::parser::parse_line;

/// Calendar format of the `date` field.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Clock format of the `time` field.
pub const TIME_FORMAT: &str = "%H:%M";

/// One scheduled lesson.
///
/// Fields hold the strings exactly as extracted from the source line (or as
/// typed by the user on append). A record is never modified once built;
/// schedules only reorder or filter records into new collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LessonRecord {
    date: String,
    time: String,
    teacher: String,
}

impl LessonRecord {
    #[must_use]
    pub fn new(date: impl Into<String>, time: impl Into<String>, teacher: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            teacher: teacher.into(),
        }
    }

    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    #[must_use]
    pub fn time(&self) -> &str {
        &self.time
    }

    #[must_use]
    pub fn teacher(&self) -> &str {
        &self.teacher
    }

    /// Parse the date string into a real calendar date.
    ///
    /// Returns `None` for undated records, including well-shaped but
    /// impossible dates such as `31.02.2099`.
    #[must_use]
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    /// Parse the time string into a clock time, `None` when untimed.
    #[must_use]
    pub fn clock_time(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(&self.time, TIME_FORMAT).ok()
    }

    #[must_use]
    pub fn is_dated(&self) -> bool {
        self.calendar_date().is_some()
    }

    /// First whitespace token of the teacher field, the comparable surname.
    #[must_use]
    pub fn surname_token(&self) -> Option<&str> {
        self.teacher.split_whitespace().next()
    }

    /// Render the line written back to the lesson file on append.
    ///
    /// Uses the same tab-separated shape as [`fmt::Display`]. When parsing
    /// that line would not give back this record, the teacher is quoted so
    /// the quoted-name rule restores it verbatim. A teacher containing `"`
    /// cannot be quoted; check [`LessonRecord::source_line_round_trips`]
    /// before persisting.
    #[must_use]
    pub fn to_source_line(&self) -> String {
        let plain = self.to_string();
        if self.teacher.is_empty() || self.teacher.contains('"') || parse_line(&plain) == *self {
            return plain;
        }
        format!("{}\t{}\t\"{}\"", self.date, self.time, self.teacher)
    }

    /// Whether [`LessonRecord::to_source_line`] parses back to this record.
    ///
    /// Fails when the teacher holds a date or time token the record itself
    /// lacks, when the teacher contains `"`, or when a date or time field is
    /// not shaped like a date or time token.
    #[must_use]
    pub fn source_line_round_trips(&self) -> bool {
        parse_line(&self.to_source_line()) == *self
    }
}

impl fmt::Display for LessonRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.date, self.time, self.teacher)
    }
}
