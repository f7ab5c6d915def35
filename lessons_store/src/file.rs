use std::fs::{self, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use lessons_core::LessonSource;
use tracing::{debug, info};

use crate::error::{Result, StoreError};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Lesson file on disk.
///
/// Reading tolerates a leading UTF-8 byte-order mark and CRLF line endings.
/// Appending never rewrites existing content.
#[derive(Debug, Clone)]
pub struct LessonFile {
    path: PathBuf,
}

impl LessonFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all lines, blank ones included.
    pub fn read(&self) -> Result<Vec<String>> {
        let content = fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                StoreError::NotFound(self.path.clone())
            } else {
                self.io_error(source)
            }
        })?;

        let lines: Vec<String> = content
            .strip_prefix(BYTE_ORDER_MARK)
            .unwrap_or(&content)
            .lines()
            .map(ToString::to_string)
            .collect();

        info!("Read {} lines from {}", lines.len(), self.path.display());
        Ok(lines)
    }

    /// Append one newline-terminated line, creating the file if needed.
    ///
    /// A missing trailing newline on the last existing line is repaired first
    /// so the new lesson always starts on its own line.
    pub fn append(&self, line: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;

        let needs_newline = ends_without_newline(&mut file).map_err(|e| self.io_error(e))?;
        if needs_newline {
            debug!("Lesson file lacks a trailing newline, adding one");
            file.write_all(b"\n").map_err(|e| self.io_error(e))?;
        }

        writeln!(file, "{line}").map_err(|e| self.io_error(e))?;
        info!("Appended lesson line to {}", self.path.display());
        Ok(())
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

fn ends_without_newline(file: &mut fs::File) -> io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0_u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}

impl LessonSource for LessonFile {
    fn read_lines(&self) -> lessons_core::Result<Vec<String>> {
        Ok(self.read()?)
    }

    fn append_line(&mut self, line: &str) -> lessons_core::Result<()> {
        Ok(self.append(line)?)
    }
}
