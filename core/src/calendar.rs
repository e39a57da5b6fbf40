//! Day-bucketing for the calendar views. The join key is the civil date of
//! `due_at`; time of day is ignored.

use chrono::{DateTime, NaiveDate, Utc};
use entity::{Task, TaskStatus};

/// Tasks due on the given date, in input order.
pub fn tasks_on<'a>(tasks: &'a [Task], date: NaiveDate) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| task.due_at.date_naive() == date)
        .collect()
}

/// Open tasks due strictly after `now`, soonest first.
pub fn upcoming_tasks<'a>(tasks: &'a [Task], now: DateTime<Utc>, limit: usize) -> Vec<&'a Task> {
    let mut upcoming: Vec<&Task> = tasks
        .iter()
        .filter(|task| task.status == TaskStatus::Open && task.due_at > now)
        .collect();
    upcoming.sort_by_key(|task| task.due_at);
    upcoming.truncate(limit);
    upcoming
}
