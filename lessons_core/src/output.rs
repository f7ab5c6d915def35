//! Rendering lesson lists to a [`LineSink`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::Result;
use crate::ports::LineSink;
use crate::record::LessonRecord;

/// How each record is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `date<TAB>time<TAB>teacher`
    #[default]
    Tsv,
    /// One JSON object per line.
    Json,
}

impl OutputFormat {
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Tsv => "tsv",
            Self::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tsv" => Ok(Self::Tsv),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {other} (expected tsv or json)")),
        }
    }
}

/// Write one line per record, in the given order.
pub fn print_lessons<W: LineSink + ?Sized>(
    sink: &mut W,
    lessons: &[LessonRecord],
    format: OutputFormat,
) -> Result<()> {
    for lesson in lessons {
        match format {
            OutputFormat::Tsv => sink.write_line(&lesson.to_string())?,
            OutputFormat::Json => sink.write_line(&serde_json::to_string(lesson)?)?,
        }
    }
    Ok(())
}
