//! Error kinds surfaced by the task store and the commands

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// What the store was doing when a storage failure happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageOp {
    CreateDir,
    CreateFile,
    Read,
    Parse,
    Serialize,
    Write,
}

impl fmt::Display for StorageOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateDir => write!(f, "create directory"),
            Self::CreateFile => write!(f, "create file"),
            Self::Read => write!(f, "read"),
            Self::Parse => write!(f, "parse"),
            Self::Serialize => write!(f, "serialize task list for"),
            Self::Write => write!(f, "write"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TaskError {
    /// Directory/file creation, read, parse, or write failure
    #[error("failed to {op} {}", .path.display())]
    Storage {
        op: StorageOp,
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An operation referenced an id absent from the list
    #[error("no task with ID {0}")]
    NotFound(u64),

    /// Unparsable id or unrecognized answer
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl TaskError {
    pub fn storage<E>(op: StorageOp, path: &Path, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Storage {
            op,
            path: path.to_path_buf(),
            source: Box::new(source),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Not-found and invalid-input abort the command without touching the store
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::InvalidInput(_))
    }
}
