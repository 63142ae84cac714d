//! Utilities to compare tasks
//!
//! These can be used to sort results, e.g. with `sort_by`

use std::cmp::Ordering;

use crate::task::Task;

/// Compare tasks chronologically, by their due date (deadlines) or start date (events).
///
/// Tasks without a date come last. Ties are broken alphabetically.
pub fn compare_tasks_chrono(left: &Task, right: &Task) -> Ordering {
    let by_date = match (left.date_time(), right.date_time()) {
        (Some(l), Some(r)) => l.cmp(&r),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_date.then_with(|| compare_tasks_alpha(left, right))
}

/// Compare tasks alphabetically (case-insensitive)
pub fn compare_tasks_alpha(left: &Task, right: &Task) -> Ordering {
    Ord::cmp(&left.description().to_lowercase(), &right.description().to_lowercase())
}
