//! Plain to-do tasks, without any date

use serde::{Deserialize, Serialize};

use super::clean_description;

/// A to-do task
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlainTask {
    /// The display name of the task. It may be empty.
    description: String,
    done: bool,
}

impl PlainTask {
    /// Create a brand new task, that is not done yet
    pub fn new(description: String) -> Self {
        Self { description: clean_description(description), done: false }
    }

    pub fn description(&self) -> &str { &self.description }
    pub fn is_done(&self) -> bool     { self.done }

    pub(crate) fn set_done(&mut self, done: bool) {
        self.done = done;
    }
}
