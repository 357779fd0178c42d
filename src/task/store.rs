#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};

use crate::error::TasktabError;
use crate::task::list::TaskList;

/// File-backed repository for the task table. The whole table is loaded at
/// the start of every command and rewritten in full on every mutation.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the backing file holding an empty table if it does not exist.
    pub fn ensure_initialized(&self) -> Result<(), TasktabError> {
        if self.path.exists() {
            return Ok(());
        }
        self.save(&TaskList::new())
    }

    pub fn load(&self) -> Result<TaskList, TasktabError> {
        let data = std::fs::read(&self.path).map_err(|source| TasktabError::IoPath {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_slice(&data).map_err(|source| TasktabError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Full-file replace through a temp file, so an interrupted write never
    /// leaves a truncated database behind.
    pub fn save(&self, tasks: &TaskList) -> Result<(), TasktabError> {
        let mut data = serde_json::to_vec_pretty(tasks).map_err(TasktabError::Encode)?;
        data.push(b'\n');
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, &data).map_err(|source| TasktabError::IoPath {
            path: tmp.clone(),
            source,
        })?;
        std::fs::rename(&tmp, &self.path).map_err(|source| TasktabError::IoPath {
            path: self.path.clone(),
            source,
        })
    }
}
