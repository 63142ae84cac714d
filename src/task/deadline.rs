//! Tasks that must be done before a given instant

use serde::{Deserialize, Serialize};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::datetime;
use crate::error::Result;
use super::clean_description;

/// A task with a due date and time
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeadlineTask {
    description: String,
    done: bool,

    date: NaiveDate,
    time: NaiveTime,
}

impl DeadlineTask {
    /// Create a new task from a `yyyy-MM-dd HH:mm` due text.
    ///
    /// This fails with [`TaskError::Validation`](crate::TaskError::Validation) in case the text is not a valid date and time.
    pub fn new(description: String, due: &str) -> Result<Self> {
        let (date, time) = datetime::parse_date_time(due)?;
        Ok(Self::with_due(description, date, time))
    }

    /// Create a new task from an already validated due date and time
    pub fn with_due(description: String, date: NaiveDate, time: NaiveTime) -> Self {
        Self { description: clean_description(description), done: false, date, time }
    }

    pub fn description(&self) -> &str { &self.description }
    pub fn is_done(&self) -> bool     { self.done }
    pub fn date(&self) -> NaiveDate   { self.date }
    pub fn time(&self) -> NaiveTime   { self.time }

    /// The due instant
    pub fn due(&self) -> NaiveDateTime {
        datetime::combine(self.date, self.time)
    }

    pub(crate) fn set_done(&mut self, done: bool) {
        self.done = done;
    }
}
