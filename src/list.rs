//! An ordered list of tasks

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TaskError};
use crate::task::{DeadlineTask, EventTask, PlainTask, Task};
use crate::utils::comparison::compare_tasks_chrono;


/// The tasks of a user, in insertion order.
///
/// Indices are 0-based. Converting from the 1-based numbers shown to users is up to the caller.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    items: Vec<Task>,
}

impl TaskList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize       { self.items.len() }
    pub fn is_empty(&self) -> bool   { self.items.is_empty() }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.items.iter()
    }

    /// Returns a copy of the tasks. Modifying it does not affect this list.
    pub fn tasks(&self) -> Vec<Task> {
        self.items.clone()
    }

    /// The one-line rendering of the task at `index`
    pub fn task_string(&self, index: usize) -> Option<String> {
        self.items.get(index).map(|t| t.to_string())
    }

    /// Append an already built task (e.g. when restoring a saved list)
    pub fn push(&mut self, task: Task) -> &Task {
        self.items.push(task);
        &self.items[self.items.len() - 1]
    }

    pub fn add_plain(&mut self, description: String) -> &Task {
        self.push(Task::from(PlainTask::new(description)))
    }

    /// Add a deadline from a `yyyy-MM-dd HH:mm` text. The list is left untouched in case the text is invalid.
    pub fn add_deadline(&mut self, description: String, due: &str) -> Result<&Task> {
        let task = DeadlineTask::new(description, due)?;
        Ok(self.push(Task::from(task)))
    }

    /// Add an event from two `yyyy-MM-dd HH:mm` texts. The list is left untouched in case a text is invalid.
    pub fn add_event(&mut self, description: String, from: &str, to: &str) -> Result<&Task> {
        let task = EventTask::new(description, from, to)?;
        Ok(self.push(Task::from(task)))
    }

    /// Mark a task as done. Returns `false` if there is no such task.
    pub fn mark(&mut self, index: usize) -> bool {
        match self.items.get_mut(index) {
            None => false,
            Some(task) => {
                task.mark_done();
                true
            }
        }
    }

    /// Mark a task as not done. Returns `false` if there is no such task.
    pub fn unmark(&mut self, index: usize) -> bool {
        match self.items.get_mut(index) {
            None => false,
            Some(task) => {
                task.mark_not_done();
                true
            }
        }
    }

    /// Remove a task. The following tasks are shifted by one.
    pub fn delete(&mut self, index: usize) -> Result<Task> {
        if index >= self.items.len() {
            return Err(TaskError::IndexOutOfRange { index, len: self.items.len() });
        }
        Ok(self.items.remove(index))
    }

    /// Tasks whose description contains `keyword` (case-sensitive), in list order
    pub fn find(&self, keyword: &str) -> Vec<&Task> {
        self.items.iter()
            .filter(|t| t.description().contains(keyword))
            .collect()
    }

    /// Dated tasks that are not done yet and that start (or are due) at or after `now`, soonest first
    pub fn upcoming(&self, now: NaiveDateTime) -> Vec<&Task> {
        let mut upcoming: Vec<&Task> = self.items.iter()
            .filter(|t| t.is_done() == false)
            .filter(|t| t.date_time().map(|dt| dt >= now).unwrap_or(false))
            .collect();
        upcoming.sort_by(|l, r| compare_tasks_chrono(l, r));
        upcoming
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(items: Vec<Task>) -> Self {
        Self { items }
    }
}
