#![forbid(unsafe_code)]

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TasktabError {
    #[error("No task with ID: {0}")]
    NoSuchTask(usize),

    #[error("Description must not be empty!")]
    EmptyDescription,

    #[error("Task table is full!")]
    TableFull,

    #[error("config error: {0}")]
    Config(String),

    #[error("task database at {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode task database: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("io error at {path}: {source}")]
    IoPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl TasktabError {
    /// A corrupt database cannot be recovered from within a session;
    /// everything else is reported and the loop continues.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Corrupt { .. })
    }
}
