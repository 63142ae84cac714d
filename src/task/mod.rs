//! Tasks: plain to-dos, deadlines and events

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use chrono::NaiveDateTime;

mod todo;
pub use todo::PlainTask;
mod deadline;
pub use deadline::DeadlineTask;
mod event;
pub use event::EventTask;


/// The kind of a task, as shown by the first marker of its rendered line (`[T]`, `[D]` or `[E]`)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskKind {
    Plain,
    Deadline,
    Event,
}

impl TaskKind {
    pub fn marker(&self) -> char {
        match self {
            TaskKind::Plain => 'T',
            TaskKind::Deadline => 'D',
            TaskKind::Event => 'E',
        }
    }

    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            'T' => Some(TaskKind::Plain),
            'D' => Some(TaskKind::Deadline),
            'E' => Some(TaskKind::Event),
            _ => None,
        }
    }
}


#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Task {
    Plain(PlainTask),
    Deadline(DeadlineTask),
    Event(EventTask),
}

/// Returns `plain.$property_name`, `deadline.$property_name` or `event.$property_name`, depending on the variant
macro_rules! synthetise_common_getter {
    ($property_name:ident, $return_type:ty) => {
        pub fn $property_name(&self) -> $return_type {
            match self {
                Task::Plain(t) => t.$property_name(),
                Task::Deadline(t) => t.$property_name(),
                Task::Event(t) => t.$property_name(),
            }
        }
    }
}

impl Task {
    synthetise_common_getter!(description, &str);
    synthetise_common_getter!(is_done, bool);

    pub fn kind(&self) -> TaskKind {
        match self {
            Task::Plain(_) => TaskKind::Plain,
            Task::Deadline(_) => TaskKind::Deadline,
            Task::Event(_) => TaskKind::Event,
        }
    }

    /// Whether this task carries a date (i.e. whether [`Task::date_time`] returns `Some`)
    pub fn has_date(&self) -> bool {
        self.date_time().is_some()
    }

    /// The instant this task is sorted by: the due instant of a deadline, or the start of an event.
    /// Plain tasks have no date.
    pub fn date_time(&self) -> Option<NaiveDateTime> {
        match self {
            Task::Plain(_) => None,
            Task::Deadline(d) => Some(d.due()),
            Task::Event(e) => Some(e.start()),
        }
    }

    pub fn mark_done(&mut self) {
        self.set_done(true);
    }

    pub fn mark_not_done(&mut self) {
        self.set_done(false);
    }

    fn set_done(&mut self, done: bool) {
        match self {
            Task::Plain(t) => t.set_done(done),
            Task::Deadline(t) => t.set_done(done),
            Task::Event(t) => t.set_done(done),
        }
    }
}

impl From<PlainTask> for Task {
    fn from(task: PlainTask) -> Self {
        Task::Plain(task)
    }
}
impl From<DeadlineTask> for Task {
    fn from(task: DeadlineTask) -> Self {
        Task::Deadline(task)
    }
}
impl From<EventTask> for Task {
    fn from(task: EventTask) -> Self {
        Task::Event(task)
    }
}

/// Tasks are displayed exactly the way they are saved
/// Surrounding whitespace is not kept: saved lines could not restore it
pub(crate) fn clean_description(description: String) -> String {
    let trimmed = description.trim();
    if trimmed.len() == description.len() {
        description
    } else {
        trimmed.to_string()
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", crate::codec::build_from(self))
    }
}
