//! A module to parse saved lines back into tasks

use std::error::Error;

use crate::datetime;
use crate::task::{DeadlineTask, EventTask, PlainTask, Task, TaskKind};
use super::{BY_DELIMITER, CLAUSE_END, DONE_MARKER, FROM_DELIMITER, PREFIX_LEN, TO_DELIMITER};


/// Parse a saved line into the internal representation [`crate::Task`]
///
/// Malformed lines return `None`, so that the caller can skip them.
pub fn parse(line: &str) -> Option<Task> {
    match parse_line(line) {
        Ok(task) => Some(task),
        Err(err) => {
            log::debug!("Skipping line {:?}: {}", line, err);
            None
        }
    }
}

fn parse_line(line: &str) -> Result<Task, Box<dyn Error>> {
    let line = line.trim();
    let bytes = line.as_bytes();
    if bytes.len() < PREFIX_LEN {
        return Err("line is too short".into());
    }
    if bytes[0] != b'[' || bytes[2] != b']' || bytes[3] != b'[' || bytes[5] != b']' {
        return Err("line does not start with [kind][status] markers".into());
    }

    let kind = match TaskKind::from_marker(bytes[1] as char) {
        Some(kind) => kind,
        None => return Err(format!("unknown task kind {:?}", bytes[1] as char).into()),
    };
    let done = bytes[4] as char == DONE_MARKER;

    // Byte 5 is an ASCII ']', so this is a char boundary. The separator space is removed, but not the leading
    // spaces of the clause of a task with an empty description.
    let rest = &line[PREFIX_LEN..];
    let rest = rest.strip_prefix(' ').unwrap_or(rest);

    let mut task = match kind {
        TaskKind::Plain => Task::from(PlainTask::new(rest.trim().to_string())),
        TaskKind::Deadline => Task::from(parse_deadline(rest)?),
        TaskKind::Event => Task::from(parse_event(rest)?),
    };

    // Tasks are always constructed as not done
    if done {
        task.mark_done();
    }
    Ok(task)
}

/// Parse `submit report (by: Aug 30 2025 6pm)`
fn parse_deadline(content: &str) -> Result<DeadlineTask, Box<dyn Error>> {
    // The description may contain the delimiter as well, hence the search from the end
    let by_index = match content.rfind(BY_DELIMITER) {
        Some(i) => i,
        None => return Err("missing deadline clause".into()),
    };
    let description = content[..by_index].trim();
    let clause = strip_clause_end(&content[by_index + BY_DELIMITER.len()..])?;

    let due = clause_to_input(clause)?;
    Ok(DeadlineTask::new(description.to_string(), &due)?)
}

/// Parse `meeting (from: Aug 22 2025 2pm to: Aug 25 2025 11pm)`
fn parse_event(content: &str) -> Result<EventTask, Box<dyn Error>> {
    let (from_index, to_index) = match (content.rfind(FROM_DELIMITER), content.rfind(TO_DELIMITER)) {
        (Some(f), Some(t)) => (f, t),
        _ => return Err("missing event clause".into()),
    };
    let from_clause_start = from_index + FROM_DELIMITER.len();
    if to_index < from_clause_start {
        return Err("the end of the event comes before its start clause".into());
    }

    let description = content[..from_index].trim();
    let from_clause = &content[from_clause_start..to_index];
    let to_clause = strip_clause_end(&content[to_index + TO_DELIMITER.len()..])?;

    let from = clause_to_input(from_clause)?;
    let to = clause_to_input(to_clause)?;
    Ok(EventTask::new(description.to_string(), &from, &to)?)
}

fn strip_clause_end(clause: &str) -> Result<&str, Box<dyn Error>> {
    match clause.trim_end().strip_suffix(CLAUSE_END) {
        Some(c) => Ok(c),
        None => Err("unterminated clause".into()),
    }
}

/// Convert a displayed `Aug 30 2025 6pm` into the `2025-08-30 18:00` form users type
fn clause_to_input(clause: &str) -> Result<String, Box<dyn Error>> {
    let tokens: Vec<&str> = clause.split(' ').collect();
    if tokens.len() != 4 {
        return Err(format!("expected 'Mon D YYYY Ham' in clause {:?}", clause).into());
    }

    let month = match datetime::month_number(tokens[0]) {
        Some(m) => m,
        None => return Err(format!("unknown month {:?}", tokens[0]).into()),
    };
    let day: u32 = tokens[1].parse()?;
    let year: i32 = tokens[2].parse()?;
    let hour = match datetime::hour_from_display(tokens[3]) {
        Some(h) => h,
        None => return Err(format!("invalid hour {:?}", tokens[3]).into()),
    };

    Ok(format!("{:04}-{:02}-{:02} {:02}:00", year, month, day, hour))
}
