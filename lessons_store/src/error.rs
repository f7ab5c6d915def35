use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Lesson file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<StoreError> for lessons_core::Error {
    fn from(err: StoreError) -> Self {
        Self::Source(err.to_string())
    }
}
