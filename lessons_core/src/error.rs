use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Lesson source unavailable: {0}")]
    Source(String),

    #[error("Cannot append lesson: {0}")]
    InvalidAppend(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
