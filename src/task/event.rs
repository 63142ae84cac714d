//! Calendar events, that span from an instant to another one

use serde::{Deserialize, Serialize};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::datetime;
use crate::error::Result;
use super::clean_description;

/// A task that spans over a period of time.
///
/// The start and the end may be on different days. The end is not required to come after the start.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventTask {
    description: String,
    done: bool,

    from_date: NaiveDate,
    from_time: NaiveTime,
    to_date: NaiveDate,
    to_time: NaiveTime,
}

impl EventTask {
    /// Create a new event from two `yyyy-MM-dd HH:mm` texts
    pub fn new(description: String, from: &str, to: &str) -> Result<Self> {
        let (from_date, from_time) = datetime::parse_date_time(from)?;
        let (to_date, to_time) = datetime::parse_date_time(to)?;
        Ok(Self::with_span(description, (from_date, from_time), (to_date, to_time)))
    }

    /// Create a new event from already validated dates and times
    pub fn with_span(description: String, from: (NaiveDate, NaiveTime), to: (NaiveDate, NaiveTime)) -> Self {
        Self {
            description: clean_description(description),
            done: false,
            from_date: from.0,
            from_time: from.1,
            to_date: to.0,
            to_time: to.1,
        }
    }

    pub fn description(&self) -> &str     { &self.description }
    pub fn is_done(&self) -> bool         { self.done }
    pub fn from_date(&self) -> NaiveDate  { self.from_date }
    pub fn from_time(&self) -> NaiveTime  { self.from_time }
    pub fn to_date(&self) -> NaiveDate    { self.to_date }
    pub fn to_time(&self) -> NaiveTime    { self.to_time }

    pub fn start(&self) -> NaiveDateTime {
        datetime::combine(self.from_date, self.from_time)
    }

    pub fn end(&self) -> NaiveDateTime {
        datetime::combine(self.to_date, self.to_time)
    }

    pub(crate) fn set_done(&mut self, done: bool) {
        self.done = done;
    }
}
