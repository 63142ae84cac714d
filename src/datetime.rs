//! Date and time handling: parsing what the user types, and rendering what is displayed (and saved)
//!
//! Users enter instants as `2025-08-30 18:00`. They are displayed as `Aug 30 2025 6pm`, which drops the minutes.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{Result, TaskError};

const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";
const INPUT_TIME_FORMAT: &str = "%H:%M";
const DISPLAY_DATE_FORMAT: &str = "%b %-d %Y";
const DISPLAY_TIME_FORMAT: &str = "%-I%P";

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse a `yyyy-MM-dd HH:mm` text, as typed by a user
pub fn parse_date_time(text: &str) -> Result<(NaiveDate, NaiveTime)> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(TaskError::Validation(format!(
            "Invalid date/time {:?}. Please use the 'yyyy-mm-dd hh:mm' format.", text
        )));
    }

    let date = NaiveDate::parse_from_str(parts[0], INPUT_DATE_FORMAT)
        .map_err(|err| TaskError::Validation(format!("Invalid date {:?}: {}", parts[0], err)))?;
    let time = NaiveTime::parse_from_str(parts[1], INPUT_TIME_FORMAT)
        .map_err(|err| TaskError::Validation(format!("Invalid time {:?}: {}", parts[1], err)))?;
    Ok((date, time))
}

/// Format a date as `Aug 30 2025`
pub fn render_date(date: &NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Format a time of day as `6pm`. Minutes are not displayed.
pub fn render_time(time: &NaiveTime) -> String {
    time.format(DISPLAY_TIME_FORMAT).to_string()
}

/// Format a date and a time as `Aug 30 2025 6pm`
pub fn render(date: &NaiveDate, time: &NaiveTime) -> String {
    format!("{} {}", render_date(date), render_time(time))
}

pub fn combine(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    date.and_time(time)
}

/// Returns the month number (1-based) of a three-letter month abbreviation.
///
/// Unknown names return `None`, they must not be mapped to any default month.
pub fn month_number(abbreviation: &str) -> Option<u32> {
    MONTHS.iter()
        .position(|m| *m == abbreviation)
        .map(|i| i as u32 + 1)
}

/// Reverse the 12-hour rendering of a time: `6pm` is 18, `12am` is 0, `12pm` is 12
pub fn hour_from_display(token: &str) -> Option<u32> {
    if token.len() < 3 || !token.is_char_boundary(token.len() - 2) {
        return None;
    }
    let (digits, suffix) = token.split_at(token.len() - 2);
    let hour: u32 = digits.parse().ok()?;
    if hour < 1 || hour > 12 {
        return None;
    }

    match suffix.to_ascii_lowercase().as_str() {
        "am" => Some(hour % 12),
        "pm" => Some(hour % 12 + 12),
        _ => None,
    }
}
