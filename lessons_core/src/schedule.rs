//! In-memory schedule: loading, chronological ordering, teacher filtering
//! and appending.

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::parser::LineParser;
use crate::record::LessonRecord;

/// Result of a teacher filter request.
///
/// Keeps "no filter requested" apart from "filter matched nothing".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeacherFilter {
    /// The query was empty or whitespace only.
    NotRequested,
    /// Lessons whose surname token matched the query.
    Applied(Vec<LessonRecord>),
}

impl TeacherFilter {
    #[must_use]
    pub const fn is_requested(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    #[must_use]
    pub fn lessons(&self) -> Option<&[LessonRecord]> {
        match self {
            Self::NotRequested => None,
            Self::Applied(lessons) => Some(lessons),
        }
    }
}

/// Stable sort by calendar date, undated lessons last.
///
/// Undated lessons (empty or unparseable date) keep their relative input
/// order, as do lessons sharing a date.
#[must_use]
pub fn sort_by_date(lessons: Vec<LessonRecord>) -> Vec<LessonRecord> {
    let mut keyed: Vec<_> = lessons
        .into_iter()
        .map(|lesson| {
            let date = lesson.calendar_date();
            ((date.is_none(), date), lesson)
        })
        .collect();
    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
    keyed.into_iter().map(|(_, lesson)| lesson).collect()
}

/// The list of lessons owned by one run of the program.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    lessons: Vec<LessonRecord>,
}

impl Schedule {
    #[must_use]
    pub const fn new(lessons: Vec<LessonRecord>) -> Self {
        Self { lessons }
    }

    /// Parse every non-blank line. Order follows the input, not the calendar.
    #[must_use]
    pub fn load<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parser = LineParser::new();
        let mut blank = 0_usize;
        let mut lessons = Vec::new();

        for line in lines {
            let line = line.as_ref();
            if line.trim().is_empty() {
                blank += 1;
                continue;
            }
            lessons.push(parser.parse(line));
        }

        let undated = lessons.iter().filter(|lesson| !lesson.is_dated()).count();
        info!(
            "Loaded {} lessons ({} blank lines skipped, {} undated)",
            lessons.len(),
            blank,
            undated
        );

        Self { lessons }
    }

    #[must_use]
    pub fn lessons(&self) -> &[LessonRecord] {
        &self.lessons
    }

    #[must_use]
    pub fn into_lessons(self) -> Vec<LessonRecord> {
        self.lessons
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// The same schedule in chronological order.
    #[must_use]
    pub fn sorted(self) -> Self {
        Self {
            lessons: sort_by_date(self.lessons),
        }
    }

    /// Lessons whose teacher's first token equals the query's first token,
    /// ignoring case. Substrings never match.
    #[must_use]
    pub fn filter_by_teacher_token(&self, query: &str) -> TeacherFilter {
        let Some(wanted) = query.split_whitespace().next().map(str::to_lowercase) else {
            debug!("Empty teacher query, filter not applied");
            return TeacherFilter::NotRequested;
        };

        let matched: Vec<LessonRecord> = self
            .lessons
            .iter()
            .filter(|lesson| {
                lesson
                    .surname_token()
                    .is_some_and(|token| token.to_lowercase() == wanted)
            })
            .cloned()
            .collect();

        debug!("Teacher filter {:?} matched {} lessons", wanted, matched.len());
        TeacherFilter::Applied(matched)
    }

    /// Append a lesson built from already-structured fields.
    ///
    /// The fields are trimmed but not re-parsed. The schedule is not
    /// re-sorted; call [`Schedule::sorted`] to restore chronological order.
    /// Lessons whose write-back line would parse into a different record
    /// are rejected.
    pub fn append(&mut self, date: &str, time: &str, teacher: &str) -> Result<&LessonRecord> {
        let teacher = teacher.trim();
        if teacher.is_empty() {
            return Err(Error::InvalidAppend("teacher must not be empty".to_string()));
        }

        let record = LessonRecord::new(date.trim(), time.trim(), teacher);
        if !record.source_line_round_trips() {
            return Err(Error::InvalidAppend(format!(
                "{record:?} cannot be written back unambiguously"
            )));
        }
        debug!("Appending lesson: {record}");
        self.lessons.push(record);

        Ok(&self.lessons[self.lessons.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dates(lessons: &[LessonRecord]) -> Vec<&str> {
        lessons.iter().map(LessonRecord::date).collect()
    }

    #[test]
    fn test_load_skips_blank_lines() {
        let schedule = Schedule::load(["15.03.2024 09:00 Смирнова А.Б.", "", "   \t", "Петров"]);
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule.lessons()[1].teacher(), "Петров");
    }

    #[test]
    fn test_sort_puts_undated_last_and_is_stable() {
        let lessons = vec![
            LessonRecord::new("", "", "Первый"),
            LessonRecord::new("01.01.2024", "", "Б"),
            LessonRecord::new("31.02.2099", "", "Второй"),
            LessonRecord::new("01.01.2023", "", "А"),
        ];
        let sorted = sort_by_date(lessons);
        assert_eq!(dates(&sorted), vec!["01.01.2023", "01.01.2024", "", "31.02.2099"]);
        assert_eq!(sorted[2].teacher(), "Первый");
        assert_eq!(sorted[3].teacher(), "Второй");
    }

    #[test]
    fn test_sort_compares_calendar_not_text() {
        let lessons = vec![
            LessonRecord::new("02.01.2024", "", "А"),
            LessonRecord::new("01.02.2023", "", "Б"),
        ];
        assert_eq!(dates(&sort_by_date(lessons)), vec!["01.02.2023", "02.01.2024"]);
    }

    #[test]
    fn test_same_date_keeps_input_order() {
        let lessons = vec![
            LessonRecord::new("01.01.2024", "18:00", "Поздний"),
            LessonRecord::new("01.01.2024", "08:00", "Ранний"),
        ];
        let sorted = sort_by_date(lessons);
        assert_eq!(sorted[0].teacher(), "Поздний");
    }

    #[test]
    fn test_filter_is_token_exact_and_case_insensitive() {
        let schedule = Schedule::new(vec![LessonRecord::new("01.01.2024", "10:00", "Иванов И.О.")]);

        let hit = schedule.filter_by_teacher_token("иванов");
        assert_eq!(hit.lessons().map(<[LessonRecord]>::len), Some(1));

        let miss = schedule.filter_by_teacher_token("ванов");
        assert_eq!(miss, TeacherFilter::Applied(Vec::new()));
    }

    #[test]
    fn test_filter_uses_first_query_token() {
        let schedule = Schedule::new(vec![LessonRecord::new("01.01.2024", "10:00", "Иванов И.О.")]);
        let result = schedule.filter_by_teacher_token("  ИВАНОВ Пётр ");
        assert_eq!(result.lessons().map(<[LessonRecord]>::len), Some(1));
    }

    #[test]
    fn test_empty_query_is_not_a_filter() {
        let schedule = Schedule::new(vec![LessonRecord::new("01.01.2024", "10:00", "Иванов")]);
        assert_eq!(schedule.filter_by_teacher_token(""), TeacherFilter::NotRequested);
        assert!(!schedule.filter_by_teacher_token(" \t ").is_requested());
    }

    #[test]
    fn test_filter_skips_empty_teacher() {
        let schedule = Schedule::new(vec![LessonRecord::new("01.01.2024", "10:00", "")]);
        assert_eq!(
            schedule.filter_by_teacher_token("x"),
            TeacherFilter::Applied(Vec::new())
        );
    }

    #[test]
    fn test_append_does_not_reparse_or_resort() {
        let mut schedule = Schedule::new(vec![LessonRecord::new("10.03.2024", "14:30", "Смирнов")]);
        let added = schedule
            .append(" 01.01.2024 ", "9:00", " доц. петров ")
            .cloned();
        assert_eq!(
            added.ok(),
            Some(LessonRecord::new("01.01.2024", "9:00", "доц. петров"))
        );
        assert_eq!(dates(schedule.lessons()), vec!["10.03.2024", "01.01.2024"]);
        assert_eq!(dates(schedule.sorted().lessons()), vec!["01.01.2024", "10.03.2024"]);
    }

    #[test]
    fn test_append_rejects_empty_teacher() {
        let mut schedule = Schedule::default();
        assert!(matches!(
            schedule.append("01.01.2024", "10:00", "  "),
            Err(Error::InvalidAppend(_))
        ));
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_append_rejects_time_hidden_in_teacher() {
        let mut schedule = Schedule::default();
        assert!(matches!(
            schedule.append("01.01.2024", "", "Петров 10:00"),
            Err(Error::InvalidAppend(_))
        ));
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_append_rejects_double_quote_in_teacher() {
        let mut schedule = Schedule::default();
        assert!(matches!(
            schedule.append("01.01.2024", "10:00", "доц. \"Петров\" каф."),
            Err(Error::InvalidAppend(_))
        ));
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_append_rejects_malformed_date() {
        let mut schedule = Schedule::default();
        assert!(schedule.append("1.1.2024", "10:00", "Петров").is_err());
        assert!(schedule.append("31.02.2099", "10:00", "Петров").is_ok());
        assert_eq!(schedule.len(), 1);
    }
}
