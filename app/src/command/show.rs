use std::path::PathBuf;

use lessons_core::{OutputFormat, Schedule, TeacherFilter, print_lessons, sort_by_date};
use lessons_store::LessonFile;

use crate::terminal::StdoutSink;

/// Input parameters for the Show command strategy.
#[derive(Debug, Clone)]
pub struct ShowInput {
    pub file: PathBuf,
    /// Optional surname filter; blank means no filter
    pub teacher: Option<String>,
    pub format: OutputFormat,
}

/// Prints the whole schedule, or one teacher's lessons, in date order.
#[derive(Debug, Clone, Copy)]
pub struct ShowStrategy;

impl super::CommandStrategy for ShowStrategy {
    type Input = ShowInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let lines = LessonFile::new(input.file).read()?;
        let schedule = Schedule::load(lines).sorted();
        let mut sink = StdoutSink;

        let Some(query) = input.teacher else {
            print_lessons(&mut sink, schedule.lessons(), input.format)?;
            return Ok(());
        };

        match schedule.filter_by_teacher_token(&query) {
            TeacherFilter::NotRequested => {
                eprintln!("No surname entered. Filter skipped.");
                print_lessons(&mut sink, schedule.lessons(), input.format)?;
            }
            TeacherFilter::Applied(lessons) => {
                print_lessons(&mut sink, &sort_by_date(lessons), input.format)?;
            }
        }
        Ok(())
    }
}
