#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod output;
pub mod parser;
pub mod ports;
pub mod record;
pub mod schedule;
pub mod session;

pub use error::{Error, Result};
pub use output::{OutputFormat, print_lessons};
pub use parser::{LineParser, TeacherRule, parse_line};
pub use ports::{LessonSource, LineSink, QuerySource};
pub use record::LessonRecord;
pub use schedule::{Schedule, TeacherFilter, sort_by_date};
pub use session::{DEFAULT_AFFIRMATIVE_ANSWERS, InteractiveSession};
