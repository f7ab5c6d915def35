use std::path::PathBuf;

use lessons_core::{LessonSource, Schedule};
use lessons_store::LessonFile;
use tracing::warn;

/// Input parameters for the Add command strategy.
#[derive(Debug, Clone)]
pub struct AddInput {
    pub file: PathBuf,
    pub date: String,
    pub time: String,
    pub teacher: String,
}

/// Appends one lesson to the lesson file without prompting.
#[derive(Debug, Clone, Copy)]
pub struct AddStrategy;

impl super::CommandStrategy for AddStrategy {
    type Input = AddInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mut schedule = Schedule::default();
        let record = schedule
            .append(&input.date, &input.time, &input.teacher)?
            .clone();

        if !record.is_dated() {
            warn!("Date {:?} is not a valid DD.MM.YYYY date, lesson will sort last", record.date());
        }
        if record.clock_time().is_none() {
            warn!("Time {:?} is not a valid HH:MM time", record.time());
        }

        let mut file = LessonFile::new(input.file);
        file.append_line(&record.to_source_line())?;
        println!("{record}");
        Ok(())
    }
}
