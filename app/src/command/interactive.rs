use std::path::PathBuf;

use lessons_core::InteractiveSession;
use lessons_store::LessonFile;
use tracing::info;

use crate::terminal::{StdinQuery, StdoutSink};

/// Input parameters for the Interactive command strategy.
#[derive(Debug, Clone)]
pub struct InteractiveInput {
    pub file: PathBuf,
    pub affirmative_answers: Vec<String>,
}

/// Prints the schedule, asks for a teacher to filter by and offers to add
/// a lesson, which is written back to the lesson file.
#[derive(Debug, Clone, Copy)]
pub struct InteractiveStrategy;

impl super::CommandStrategy for InteractiveStrategy {
    type Input = InteractiveInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mut session =
            InteractiveSession::new(LessonFile::new(input.file), StdinQuery::stdin(), StdoutSink)
                .with_affirmative_answers(input.affirmative_answers);

        let schedule = session.run()?;
        info!("Session finished with {} lessons", schedule.len());
        Ok(())
    }
}
