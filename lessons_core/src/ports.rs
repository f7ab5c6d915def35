//! Collaborator interfaces around the schedule core.
//!
//! The binary wires these to stdin, stdout and the lesson file; tests use
//! the in-memory implementations below.

use std::collections::VecDeque;

use crate::Result;

/// Source of free-text answers (teacher queries, add-lesson prompts).
pub trait QuerySource {
    /// Show `prompt` and read one answer.
    ///
    /// `None` means the channel is closed or unavailable; callers treat it
    /// as "nothing entered", never as an error.
    fn read_query(&mut self, prompt: &str) -> Option<String>;
}

/// Destination for rendered output lines.
pub trait LineSink {
    fn write_line(&mut self, line: &str) -> std::io::Result<()>;
}

/// Persistent line-oriented lesson storage.
pub trait LessonSource {
    /// Read every raw line, blank ones included.
    fn read_lines(&self) -> Result<Vec<String>>;

    /// Append one lesson line, newline-terminated.
    fn append_line(&mut self, line: &str) -> Result<()>;
}

impl QuerySource for VecDeque<String> {
    fn read_query(&mut self, _prompt: &str) -> Option<String> {
        self.pop_front()
    }
}

impl LineSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

impl LessonSource for Vec<String> {
    fn read_lines(&self) -> Result<Vec<String>> {
        Ok(self.clone())
    }

    fn append_line(&mut self, line: &str) -> Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}
