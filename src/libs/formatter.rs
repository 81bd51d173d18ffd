//! Date formatting and parsing for the command-line front end.
//!
//! Due dates are stored in UTC. They are shown and entered in the local time
//! zone using a short `YYYY-MM-DD HH:MM` form.
//!
//! ```rust
//! use projman::libs::formatter::parse_due_date;
//!
//! let date = parse_due_date("2025-03-01T12:30:00Z").unwrap();
//! assert_eq!(date.to_rfc3339(), "2025-03-01T12:30:00+00:00");
//! ```

use super::task::{due_date, Task, TaskStatus};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Display format of due dates.
pub const SHORT_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats a date as a short local date-time.
pub fn format_due_date(date: &DateTime<Utc>) -> String {
    date.with_timezone(&Local).format(SHORT_DATE_TIME_FORMAT).to_string()
}

/// Due date column text; empty unless the task is flagged and dated.
pub fn format_task_due(task: &Task) -> String {
    task.effective_due_date().map(|date| format_due_date(&date)).unwrap_or_default()
}

/// Parses user input into a UTC due date.
///
/// Accepts RFC 3339, a local `YYYY-MM-DD HH:MM`, or a local `YYYY-MM-DD`
/// (midnight). Returns `None` for anything else, including local times that
/// do not exist because of a DST transition.
pub fn parse_due_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(input) {
        return Some(date.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(input, SHORT_DATE_TIME_FORMAT)
        .ok()
        .or_else(|| NaiveDate::parse_from_str(input, DATE_FORMAT).ok().and_then(|d| d.and_hms_opt(0, 0, 0)))?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|date| date.with_timezone(&Utc))
        .filter(due_date::is_representable)
}

/// Parses the answer to a due date prompt that was pre-filled with `current`.
///
/// Input equal to the pre-filled text keeps `current` exactly, since the short
/// form drops seconds and cannot tell repeated DST hours apart.
pub fn parse_prompted_due_date(input: &str, current: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
    match current {
        Some(date) if input.trim() == format_due_date(&date) => Some(date),
        _ => parse_due_date(input),
    }
}

/// Checkbox-style marker for a task status.
pub fn status_mark(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Todo => "[ ]",
        TaskStatus::Done => "[x]",
    }
}
