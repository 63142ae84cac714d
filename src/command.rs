//! Commands typed by the user

use crate::error::{Result, TaskError};

const BY_FLAG: &str = " /by ";
const FROM_FLAG: &str = " /from ";
const TO_FLAG: &str = " /to ";

/// A command, split into its arguments.
///
/// Task numbers are kept as typed (1-based, possibly zero or negative): whether they exist depends on the list.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Bye,
    List,
    Mark(i64),
    Unmark(i64),
    Delete(i64),
    Todo(String),
    Deadline {
        description: String,
        by: String,
    },
    Event {
        description: String,
        from: String,
        to: String,
    },
    Find(String),
    Remind,
}

impl Command {
    /// Parse a line typed by the user. Keywords are case-insensitive.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        let (keyword, args) = match input.find(char::is_whitespace) {
            Some(i) => (&input[..i], input[i..].trim()),
            None => (input, ""),
        };

        match keyword.to_lowercase().as_str() {
            "bye" => Ok(Command::Bye),
            "list" => Ok(Command::List),
            "remind" => Ok(Command::Remind),
            "mark" => Ok(Command::Mark(parse_task_number(args, "mark")?)),
            "unmark" => Ok(Command::Unmark(parse_task_number(args, "unmark")?)),
            "delete" => Ok(Command::Delete(parse_task_number(args, "delete")?)),
            "todo" => {
                if args.is_empty() {
                    return Err(TaskError::Command("OOPS!!! The description of a todo cannot be empty.".to_string()));
                }
                Ok(Command::Todo(args.to_string()))
            },
            "deadline" => parse_deadline(args),
            "event" => parse_event(args),
            "find" => {
                if args.is_empty() {
                    return Err(TaskError::Command("Please provide a keyword for find.".to_string()));
                }
                Ok(Command::Find(args.to_string()))
            },
            _ => Err(TaskError::Command("OOPS!!! I'm sorry, but I don't know what that means :-(".to_string())),
        }
    }

    /// Whether running this command may modify the task list
    pub fn is_mutating(&self) -> bool {
        match self {
            Command::List | Command::Find(_) | Command::Remind => false,
            _ => true,
        }
    }
}

fn parse_task_number(args: &str, keyword: &str) -> Result<i64> {
    if args.is_empty() {
        return Err(TaskError::Command(format!("Please provide a task number for {}.", keyword)));
    }
    args.parse()
        .map_err(|_| TaskError::Command("Invalid task number format.".to_string()))
}

/// `submit report /by 2025-08-30 18:00`
fn parse_deadline(args: &str) -> Result<Command> {
    // The flag is searched with its leading space, so that an empty description is rejected too
    let padded = format!(" {}", args);
    let parts: Vec<&str> = padded.split(BY_FLAG).collect();
    if parts.len() != 2 || parts[0].trim().is_empty() {
        return Err(TaskError::Command(
            "OOPS!!! Invalid deadline format. Please use 'deadline <description> /by <yyyy-mm-dd hh:mm>'.".to_string()));
    }
    Ok(Command::Deadline {
        description: parts[0].trim().to_string(),
        by: parts[1].trim().to_string(),
    })
}

/// `meeting /from 2025-08-30 14:00 /to 2025-08-30 16:00`
fn parse_event(args: &str) -> Result<Command> {
    let invalid = || TaskError::Command(
        "OOPS!!! Invalid event format. Please use 'event <description> /from <yyyy-mm-dd hh:mm> /to <yyyy-mm-dd hh:mm>'.".to_string());

    let padded = format!(" {}", args);
    let (description, span) = padded.split_once(FROM_FLAG).ok_or_else(invalid)?;
    let (from, to) = span.split_once(TO_FLAG).ok_or_else(invalid)?;
    if description.trim().is_empty() || to.contains(FROM_FLAG) || to.contains(TO_FLAG) {
        return Err(invalid());
    }

    Ok(Command::Event {
        description: description.trim().to_string(),
        from: from.trim().to_string(),
        to: to.trim().to_string(),
    })
}
