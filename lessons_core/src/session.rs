//! Interactive schedule session.
//!
//! Prints the sorted schedule, asks for a teacher surname to filter by and
//! offers to add a lesson. All I/O goes through the [`crate::ports`] traits.

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::output::{OutputFormat, print_lessons};
use crate::ports::{LessonSource, LineSink, QuerySource};
use crate::schedule::{Schedule, TeacherFilter, sort_by_date};

/// Answers that confirm the add-lesson question, compared case-insensitively.
pub const DEFAULT_AFFIRMATIVE_ANSWERS: [&str; 4] = ["да", "д", "y", "yes"];

pub const SURNAME_PROMPT: &str = "Teacher surname: ";
pub const ADD_PROMPT: &str = "Add a lesson? (yes/no): ";
pub const DATE_PROMPT: &str = "Date (DD.MM.YYYY): ";
pub const TIME_PROMPT: &str = "Time (HH:MM): ";
pub const TEACHER_PROMPT: &str = "Teacher surname: ";

pub const FILTERED_HEADER: &str = "Lessons of the selected teacher:";
pub const FILTER_SKIPPED_NOTICE: &str = "No surname entered. Filter skipped.";
pub const UPDATED_HEADER: &str = "Updated schedule:";

pub struct InteractiveSession<S, Q, W> {
    source: S,
    queries: Q,
    sink: W,
    affirmative_answers: Vec<String>,
    format: OutputFormat,
}

impl<S, Q, W> InteractiveSession<S, Q, W>
where
    S: LessonSource,
    Q: QuerySource,
    W: LineSink,
{
    #[must_use]
    pub fn new(source: S, queries: Q, sink: W) -> Self {
        Self {
            source,
            queries,
            sink,
            affirmative_answers: DEFAULT_AFFIRMATIVE_ANSWERS
                .iter()
                .map(ToString::to_string)
                .collect(),
            format: OutputFormat::Tsv,
        }
    }

    #[must_use]
    pub fn with_affirmative_answers(mut self, answers: Vec<String>) -> Self {
        self.affirmative_answers = answers;
        self
    }

    #[must_use]
    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Run the whole session and return the final, sorted schedule.
    pub fn run(&mut self) -> Result<Schedule> {
        let schedule = Schedule::load(self.source.read_lines()?).sorted();
        print_lessons(&mut self.sink, schedule.lessons(), self.format)?;

        let query = self.queries.read_query(SURNAME_PROMPT).unwrap_or_default();
        self.show_filtered(&schedule.filter_by_teacher_token(&query))?;

        self.offer_append(schedule)
    }

    #[must_use]
    pub fn into_parts(self) -> (S, Q, W) {
        (self.source, self.queries, self.sink)
    }

    fn show_filtered(&mut self, filter: &TeacherFilter) -> Result<()> {
        self.sink.write_line("")?;
        match filter {
            TeacherFilter::NotRequested => {
                self.sink.write_line(FILTER_SKIPPED_NOTICE)?;
            }
            TeacherFilter::Applied(lessons) => {
                self.sink.write_line(FILTERED_HEADER)?;
                let lessons = sort_by_date(lessons.clone());
                print_lessons(&mut self.sink, &lessons, self.format)?;
            }
        }
        Ok(())
    }

    fn offer_append(&mut self, mut schedule: Schedule) -> Result<Schedule> {
        let Some(answer) = self.queries.read_query(ADD_PROMPT) else {
            return Ok(schedule);
        };
        if !self.is_affirmative(&answer) {
            return Ok(schedule);
        }

        let Some(date) = self.queries.read_query(DATE_PROMPT) else {
            return Ok(schedule);
        };
        let Some(time) = self.queries.read_query(TIME_PROMPT) else {
            return Ok(schedule);
        };
        let Some(teacher) = self.queries.read_query(TEACHER_PROMPT) else {
            return Ok(schedule);
        };

        let appended = schedule.append(&date, &time, &teacher).cloned();
        let record = match appended {
            Ok(record) => record,
            Err(Error::InvalidAppend(reason)) => {
                warn!("Lesson not added: {reason}");
                self.sink.write_line(&format!("Lesson not added: {reason}"))?;
                return Ok(schedule);
            }
            Err(e) => return Err(e),
        };
        if !record.is_dated() {
            warn!("Added lesson has no valid date and will sort last: {record}");
        }

        self.source.append_line(&record.to_source_line())?;
        info!("Appended lesson to source: {record}");

        let schedule = schedule.sorted();
        self.sink.write_line("")?;
        self.sink.write_line(UPDATED_HEADER)?;
        print_lessons(&mut self.sink, schedule.lessons(), self.format)?;

        Ok(schedule)
    }

    fn is_affirmative(&self, answer: &str) -> bool {
        let answer = answer.trim().to_lowercase();
        self.affirmative_answers
            .iter()
            .any(|candidate| candidate.to_lowercase() == answer)
    }
}
