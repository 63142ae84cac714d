//! Error kinds returned by this crate

use std::path::PathBuf;

/// Everything that can go wrong while editing or persisting a task list.
///
/// A malformed line in the save file is not an error: the line codec simply skips it.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// The user typed a date/time (or another field) that cannot be used to build a task.
    /// The message is meant to be shown verbatim.
    #[error("{0}")]
    Validation(String),

    /// A task was addressed by an index that does not exist
    #[error("Invalid task index: there is no task {} in a list of {len} tasks", task_number(.index))]
    IndexOutOfRange {
        index: usize,
        len: usize,
    },

    /// Reading or writing the backing file failed
    #[error("Unable to access file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The lossless JSON document could not be encoded or decoded
    #[error("Invalid JSON data: {0}")]
    Json(#[from] serde_json::Error),

    /// The command line typed by the user could not be understood
    #[error("{0}")]
    Command(String),
}

impl TaskError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

/// Tasks are numbered from 1 when shown to users
fn task_number(index: &usize) -> usize {
    index.saturating_add(1)
}

pub type Result<T> = std::result::Result<T, TaskError>;
