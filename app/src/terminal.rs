//! Stdin/stdout adapters for the schedule ports.

use std::io::{self, BufRead, Write};

use lessons_core::{LineSink, QuerySource};
use tracing::warn;

/// Reads answers from stdin after printing the prompt to stdout.
pub struct StdinQuery<R> {
    reader: R,
}

impl StdinQuery<io::StdinLock<'static>> {
    #[must_use]
    pub fn stdin() -> Self {
        Self {
            reader: io::stdin().lock(),
        }
    }
}

impl<R: BufRead> QuerySource for StdinQuery<R> {
    fn read_query(&mut self, prompt: &str) -> Option<String> {
        print!("{prompt}");
        if let Err(e) = io::stdout().flush() {
            warn!("Failed to flush prompt: {e}");
        }

        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => None,
            Ok(_) => Some(input.trim().to_string()),
            Err(e) => {
                warn!("Query channel unavailable: {e}");
                None
            }
        }
    }
}

/// Writes each line to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()
    }
}
