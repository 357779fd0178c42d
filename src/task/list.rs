#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::error::TasktabError;
use crate::task::model::{self, Status, Task};

/// Hard cap on the number of stored tasks.
pub const CAPACITY: usize = 10;

/// The full task table, ordered. List position doubles as task identity:
/// persisted ids mirror positions and are reindexed whenever they shift.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn add(&mut self, description: &str) -> Result<(), TasktabError> {
        if self.tasks.len() >= CAPACITY {
            return Err(TasktabError::TableFull);
        }
        let description = description.trim();
        if description.is_empty() {
            return Err(TasktabError::EmptyDescription);
        }
        self.tasks
            .push(Task::new(self.tasks.len(), description.to_owned()));
        Ok(())
    }

    pub fn update(&mut self, ordinal: usize, description: &str) -> Result<(), TasktabError> {
        let idx = self.index_of(ordinal)?;
        let description = description.trim();
        if description.is_empty() {
            return Err(TasktabError::EmptyDescription);
        }
        let task = &mut self.tasks[idx];
        task.description = description.to_owned();
        task.updated_at = Some(model::now());
        Ok(())
    }

    pub fn delete(&mut self, ordinal: usize) -> Result<(), TasktabError> {
        let idx = self.index_of(ordinal)?;
        self.tasks.remove(idx);
        self.reindex();
        Ok(())
    }

    /// Changes only the status; `updated_at` tracks description edits, not
    /// status transitions.
    pub fn mark(&mut self, ordinal: usize, status: Status) -> Result<(), TasktabError> {
        let idx = self.index_of(ordinal)?;
        self.tasks[idx].status = status;
        Ok(())
    }

    // Ordinals are 1-based; `ordinal == len` addresses the last task.
    fn index_of(&self, ordinal: usize) -> Result<usize, TasktabError> {
        if ordinal == 0 || ordinal > self.tasks.len() {
            return Err(TasktabError::NoSuchTask(ordinal));
        }
        Ok(ordinal - 1)
    }

    fn reindex(&mut self) {
        for (pos, task) in self.tasks.iter_mut().enumerate() {
            task.id = pos;
        }
    }
}
