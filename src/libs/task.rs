//! Task records stored in a project document.
//!
//! A task is addressed only by its position in `Project::tasks`; it carries no
//! identity of its own. Field names are part of the file format and are kept in
//! camelCase (`hasDueDate`, `dueDate`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Completion state of a task.
///
/// `Todo` is the initial state. Toggling flips between the two states in
/// either direction and neither is terminal.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Todo,
    Done,
}

impl TaskStatus {
    pub fn toggled(self) -> Self {
        match self {
            TaskStatus::Todo => TaskStatus::Done,
            TaskStatus::Done => TaskStatus::Todo,
        }
    }

    pub fn is_done(self) -> bool {
        self == TaskStatus::Done
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Todo => write!(f, "todo"),
            TaskStatus::Done => write!(f, "done"),
        }
    }
}

/// A to-do item.
///
/// `has_due_date` and `due_date` are stored independently. A task may carry
/// `has_due_date == true` with no date, or a date while the flag is off; both
/// are preserved as-is. Use [`Task::effective_due_date`] when displaying.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub name: String,
    pub notes: String,
    pub status: TaskStatus,
    pub has_due_date: bool,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "due_date")]
    pub due_date: Option<DateTime<Utc>>,
}

/// A single editable task field together with its new value.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskField {
    Name(String),
    Notes(String),
    HasDueDate(bool),
    DueDate(Option<DateTime<Utc>>),
}

impl Task {
    pub fn new(name: &str, notes: &str) -> Self {
        Task {
            name: name.to_string(),
            notes: notes.to_string(),
            ..Task::default()
        }
    }

    pub fn is_done(&self) -> bool {
        self.status.is_done()
    }

    /// Returns the due date only when the task is flagged as having one.
    pub fn effective_due_date(&self) -> Option<DateTime<Utc>> {
        if self.has_due_date {
            self.due_date
        } else {
            None
        }
    }

    /// Returns `true` when the flag and the stored date disagree.
    pub fn has_inconsistent_due_date(&self) -> bool {
        self.has_due_date != self.due_date.is_some()
    }

    pub fn toggle_status(&mut self) -> TaskStatus {
        self.status = self.status.toggled();
        self.status
    }

    pub fn apply(&mut self, field: TaskField) {
        match field {
            TaskField::Name(name) => self.name = name,
            TaskField::Notes(notes) => self.notes = notes,
            TaskField::HasDueDate(flag) => self.has_due_date = flag,
            TaskField::DueDate(date) => self.due_date = date,
        }
    }
}

/// Serde codec for `dueDate`.
///
/// Dates are written as RFC 3339 strings. Numbers are accepted on read as
/// seconds relative to 2001-01-01T00:00:00Z, which is how older documents
/// stored them. Only years 0 through 9999 fit a four-digit RFC 3339 year;
/// anything outside is rejected in both directions.
pub(crate) mod due_date {
    use chrono::{DateTime, Datelike, SecondsFormat, TimeZone, Utc};
    use serde::{de, ser, Deserialize, Deserializer, Serializer};

    /// 2001-01-01T00:00:00Z as a Unix timestamp.
    pub const REFERENCE_DATE_UNIX: i64 = 978_307_200;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawDate {
        Text(String),
        Seconds(f64),
    }

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) if !is_representable(date) => Err(ser::Error::custom(format!("dueDate {} is out of range", date))),
            Some(date) => serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<RawDate>::deserialize(deserializer)? {
            None => Ok(None),
            Some(RawDate::Text(text)) => DateTime::parse_from_rfc3339(&text)
                .map(|date| Some(date.with_timezone(&Utc)))
                .map_err(|e| de::Error::custom(format!("invalid dueDate '{}': {}", text, e))),
            Some(RawDate::Seconds(seconds)) => from_reference_seconds(seconds)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("dueDate {} is out of range", seconds))),
        }
    }

    pub fn from_reference_seconds(seconds: f64) -> Option<DateTime<Utc>> {
        if !seconds.is_finite() {
            return None;
        }
        let whole = seconds.floor();
        if whole.abs() > i64::MAX as f64 / 2.0 {
            return None;
        }
        let nanos = (((seconds - whole) * 1e9).round() as u32).min(999_999_999);
        let unix = REFERENCE_DATE_UNIX.checked_add(whole as i64)?;
        Utc.timestamp_opt(unix, nanos).single().filter(is_representable)
    }

    /// Whether `date` can be written as a four-digit RFC 3339 year.
    pub fn is_representable(date: &DateTime<Utc>) -> bool {
        (0..=9999).contains(&date.year())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn reference_zero_is_2001() {
            let date = from_reference_seconds(0.0).unwrap();
            assert_eq!(date.to_rfc3339(), "2001-01-01T00:00:00+00:00");
        }

        #[test]
        fn reference_seconds_keep_fraction() {
            let date = from_reference_seconds(86_400.5).unwrap();
            assert_eq!(date.timestamp(), REFERENCE_DATE_UNIX + 86_400);
            assert_eq!(date.timestamp_subsec_millis(), 500);
        }

        #[test]
        fn rejects_years_beyond_four_digits() {
            assert!(from_reference_seconds(3e11).is_none());
            assert!(from_reference_seconds(-7e10).is_none());
            let last = Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap();
            assert!(is_representable(&last));
        }

        #[test]
        fn rejects_non_finite() {
            assert!(from_reference_seconds(f64::NAN).is_none());
            assert!(from_reference_seconds(f64::INFINITY).is_none());
        }
    }
}
