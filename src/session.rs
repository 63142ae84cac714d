//! Runs user commands against a task list, and keeps its backing file up to date

use std::convert::TryFrom;

use chrono::{Local, NaiveDateTime};

use crate::command::Command;
use crate::error::{Result, TaskError};
use crate::list::TaskList;
use crate::storage::Storage;
use crate::task::Task;
use crate::ui::GOODBYE_MESSAGE;

/// Indentation of the task shown after a change
const INDENTATION: &str = "  ";


/// What the user should be told after a command
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    pub text: String,
    /// Whether the user asked to leave
    pub exit: bool,
}

impl Response {
    fn message(text: String) -> Self {
        Self { text, exit: false }
    }
}


/// A task list and the file it is persisted to
pub struct Session {
    list: TaskList,
    storage: Storage,
}

impl Session {
    /// Start a session with the tasks saved in `storage`.
    /// An unreadable file starts an empty list, rather than preventing the session from starting.
    pub fn new(storage: Storage) -> Self {
        let list = storage.load_or_default();
        Self { list, storage }
    }

    pub fn list(&self) -> &TaskList {
        &self.list
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Run one command: parse it, apply it, save the list if it may have changed, and tell what happened
    pub fn respond(&mut self, input: &str) -> Response {
        self.respond_at(input, Local::now().naive_local())
    }

    /// Same as [`Session::respond`], with `now` being the reference time of reminders
    pub fn respond_at(&mut self, input: &str, now: NaiveDateTime) -> Response {
        let command = match Command::parse(input) {
            Ok(command) => command,
            Err(err) => return Response::message(err.to_string()),
        };
        log::debug!("Running {:?}", command);

        let exit = command == Command::Bye;
        let mutating = command.is_mutating();
        let mut text = match self.execute(command, now) {
            Ok(text) => text,
            // Nothing has been changed
            Err(err) => return Response::message(err.to_string()),
        };

        // A failed save does not revert the change in memory
        if mutating {
            if let Err(err) = self.storage.save(&self.list) {
                log::warn!("Unable to save tasks: {}", err);
                text.push_str(&format!("\nError saving tasks: {}", err));
            }
        }

        Response { text, exit }
    }

    fn execute(&mut self, command: Command, now: NaiveDateTime) -> Result<String> {
        match command {
            Command::Bye => Ok(GOODBYE_MESSAGE.to_string()),
            Command::List => {
                if self.list.is_empty() {
                    return Ok("No tasks in the list.".to_string());
                }
                Ok(format!("Here are the tasks in your list:\n{}", numbered(self.list.iter())))
            },
            Command::Mark(number) => {
                let index = self.resolve(number)?;
                self.list.mark(index);
                Ok(format!("Nice! I've marked this task as done:\n{}{}", INDENTATION, self.task_string(index)))
            },
            Command::Unmark(number) => {
                let index = self.resolve(number)?;
                self.list.unmark(index);
                Ok(format!("OK, I've marked this task as not done yet:\n{}{}", INDENTATION, self.task_string(index)))
            },
            Command::Delete(number) => {
                let index = self.resolve(number)?;
                let removed = self.list.delete(index)?;
                Ok(format!("Noted. I've removed this task:\n{}{}\n{}", INDENTATION, removed, self.count_message()))
            },
            Command::Todo(description) => {
                let added = self.list.add_plain(description).to_string();
                Ok(self.added_message(added))
            },
            Command::Deadline { description, by } => {
                let added = self.list.add_deadline(description, &by)?.to_string();
                Ok(self.added_message(added))
            },
            Command::Event { description, from, to } => {
                let added = self.list.add_event(description, &from, &to)?.to_string();
                Ok(self.added_message(added))
            },
            Command::Find(keyword) => {
                let found = self.list.find(&keyword);
                if found.is_empty() {
                    return Ok("No matching tasks found.".to_string());
                }
                Ok(format!("Here are the matching tasks in your list:\n{}", numbered(found.into_iter())))
            },
            Command::Remind => {
                let upcoming = self.list.upcoming(now);
                if upcoming.is_empty() {
                    return Ok("No upcoming tasks. Enjoy your free time!".to_string());
                }
                Ok(format!("Here are your upcoming tasks:\n{}", numbered(upcoming.into_iter())))
            },
        }
    }

    /// Convert a task number typed by the user into an index of the list
    fn resolve(&self, number: i64) -> Result<usize> {
        let index = match number.checked_sub(1).and_then(|i| usize::try_from(i).ok()) {
            Some(i) => i,
            None => return Err(TaskError::Command(format!("Invalid task number {}. Tasks are numbered from 1.", number))),
        };
        if index >= self.list.len() {
            return Err(TaskError::IndexOutOfRange { index, len: self.list.len() });
        }
        Ok(index)
    }

    fn task_string(&self, index: usize) -> String {
        self.list.task_string(index).unwrap_or_default()
    }

    fn count_message(&self) -> String {
        format!("Now you have {} tasks in the list.", self.list.len())
    }

    fn added_message(&self, added: String) -> String {
        format!("Got it. I've added this task:\n{}{}\n{}", INDENTATION, added, self.count_message())
    }
}

/// `1.[T][ ] read book`, one task per line
pub fn numbered<'a>(tasks: impl Iterator<Item = &'a Task>) -> String {
    tasks.enumerate()
        .map(|(i, task)| format!("{}.{}", i + 1, task))
        .collect::<Vec<_>>()
        .join("\n")
}
