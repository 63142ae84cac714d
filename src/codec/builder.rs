//! A module to build saved lines

use crate::datetime;
use crate::task::Task;
use super::{BY_DELIMITER, CLAUSE_END, DONE_MARKER, FROM_DELIMITER, NOT_DONE_MARKER, TO_DELIMITER};

/// Render a task into its one-line representation
pub fn build_from(task: &Task) -> String {
    let status = if task.is_done() { DONE_MARKER } else { NOT_DONE_MARKER };
    // A line break would split the task into several saved lines
    let description = task.description().replace(&['\n', '\r'][..], " ");
    let head = format!("[{}][{}] {}", task.kind().marker(), status, description);

    match task {
        Task::Plain(_) => head,
        Task::Deadline(d) => {
            format!("{}{}{}{}", head, BY_DELIMITER, datetime::render(&d.date(), &d.time()), CLAUSE_END)
        },
        Task::Event(e) => {
            format!("{}{}{}{}{}{}",
                head,
                FROM_DELIMITER, datetime::render(&e.from_date(), &e.from_time()),
                TO_DELIMITER, datetime::render(&e.to_date(), &e.to_time()),
                CLAUSE_END)
        },
    }
}
