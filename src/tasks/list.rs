//! In-memory task list and id allocation

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::Task;

/// Largest id or counter accepted from a stored file
///
/// Matches a signed 64-bit integer, so counting up from any accepted value
/// cannot overflow `u64`.
pub const MAX_ID: u64 = i64::MAX as u64;

/// Ordered collection of tasks plus the next id to hand out
///
/// Ids come from a counter that only ever grows, so an id is never reused,
/// even after its task is deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskList {
    #[serde(default)]
    pub(super) tasks: Vec<Task>,
    #[serde(default)]
    pub(super) next_task_id: u64,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new incomplete task and return it
    ///
    /// Loaded counters never exceed [`MAX_ID`], which leaves room for
    /// 2^63 further adds before `u64` overflows.
    pub fn add(&mut self, title: impl Into<String>, description: impl Into<String>) -> &Task {
        let task = Task::new(self.next_task_id, title.into(), description.into());
        self.next_task_id += 1;
        self.tasks.push(task);
        &self.tasks[self.tasks.len() - 1]
    }

    /// Remove the task with `id`. Returns false if there was none.
    pub fn delete(&mut self, id: u64) -> bool {
        match self.tasks.iter().rposition(|t| t.id() == id) {
            Some(index) => {
                self.tasks.remove(index);
                true
            }
            None => false,
        }
    }

    /// Set the completion flag of the task with `id`. Returns false if there was none.
    pub fn set_complete(&mut self, id: u64, value: bool) -> bool {
        match self.tasks.iter_mut().find(|t| t.id() == id) {
            Some(task) => {
                task.set_complete(value);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    /// All tasks in insertion order
    pub fn list_all(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks whose completion flag equals `complete`, in insertion order
    pub fn list_by_status(&self, complete: bool) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.is_complete() == complete)
            .collect()
    }

    pub fn next_id(&self) -> u64 {
        self.next_task_id
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Check stored ids and raise the counter above every one of them
    ///
    /// Returns whether the counter had to move. Fails on a duplicate id or
    /// on an id or counter beyond [`MAX_ID`].
    pub(super) fn check_ids(&mut self) -> Result<bool, String> {
        let mut seen = HashSet::with_capacity(self.tasks.len());
        let mut floor = 0u64;
        for task in &self.tasks {
            if !seen.insert(task.id()) {
                return Err(format!("duplicate task ID {}", task.id()));
            }
            let above = task
                .id()
                .checked_add(1)
                .filter(|n| *n <= MAX_ID)
                .ok_or_else(|| format!("task ID {} is out of range", task.id()))?;
            floor = floor.max(above);
        }

        if self.next_task_id > MAX_ID {
            return Err(format!("nextTaskId {} is out of range", self.next_task_id));
        }
        if self.next_task_id < floor {
            self.next_task_id = floor;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
