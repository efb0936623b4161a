use serde::{Deserialize, Serialize};

use crate::model::task::Task;

/// Error type for store mutations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("The task is blank")]
    BlankTask,
    #[error("task index {index} out of range (store has {len} tasks)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Ordered task list. Indices are 0-based here; the session converts to
/// and from the 1-based numbers shown to the user.
///
/// Serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Append to the end. Blank tasks are refused.
    pub fn append(&mut self, task: Task) -> Result<(), StoreError> {
        if task.is_blank() {
            return Err(StoreError::BlankTask);
        }
        self.tasks.push(task);
        Ok(())
    }

    /// Swap in a replacement at `index`, returning the old task.
    ///
    /// Unlike `append`, a blank replacement is allowed: editing the body
    /// down to nothing is a legal edit.
    pub fn replace(&mut self, index: usize, task: Task) -> Result<Task, StoreError> {
        let len = self.tasks.len();
        let slot = self
            .tasks
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, task))
    }

    /// Remove the task at `index`; later tasks shift down by one.
    pub fn remove(&mut self, index: usize) -> Result<Task, StoreError> {
        if index >= self.tasks.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            });
        }
        Ok(self.tasks.remove(index))
    }
}

impl From<Vec<Task>> for TaskStore {
    fn from(tasks: Vec<Task>) -> Self {
        TaskStore { tasks }
    }
}
