#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use projman::libs::formatter::{format_due_date, format_task_due, parse_due_date, parse_prompted_due_date, status_mark};
    use projman::libs::project::Project;
    use projman::libs::task::{Task, TaskStatus};
    use projman::libs::view::View;

    #[test]
    fn test_parse_rfc3339() {
        let date = parse_due_date("2025-03-01T12:30:00+02:00").unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2025, 3, 1, 10, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_local_short_forms() {
        let date = parse_due_date("2025-03-01 14:30").unwrap();
        assert_eq!(format_due_date(&date), "2025-03-01 14:30");

        let date = parse_due_date(" 2025-03-01 ").unwrap();
        assert_eq!(format_due_date(&date), "2025-03-01 00:00");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_due_date("").is_none());
        assert!(parse_due_date("tomorrow").is_none());
        assert!(parse_due_date("2025-13-01").is_none());
    }

    #[test]
    fn test_prompted_due_date_keeps_unchanged_value() {
        let stored = Utc.with_ymd_and_hms(2025, 3, 1, 10, 30, 45).unwrap() + chrono::Duration::milliseconds(250);
        let shown = format_due_date(&stored);

        assert_eq!(parse_prompted_due_date(&shown, Some(stored)), Some(stored));
        assert_eq!(parse_prompted_due_date(&format!(" {} ", shown), Some(stored)), Some(stored));

        let edited = parse_prompted_due_date("2025-04-01 09:00", Some(stored)).unwrap();
        assert_eq!(format_due_date(&edited), "2025-04-01 09:00");

        assert_eq!(parse_prompted_due_date(&shown, None), parse_due_date(&shown));
        assert!(parse_prompted_due_date("soon", Some(stored)).is_none());
    }

    #[test]
    fn test_task_due_column() {
        let mut task = Task::new("Pay invoice", "");
        assert_eq!(format_task_due(&task), "");

        task.due_date = Some(Utc.with_ymd_and_hms(2025, 7, 4, 8, 0, 0).unwrap());
        assert_eq!(format_task_due(&task), "");

        task.has_due_date = true;
        assert_eq!(format_task_due(&task), format_due_date(&task.due_date.unwrap()));
    }

    #[test]
    fn test_status_mark() {
        assert_eq!(status_mark(TaskStatus::Todo), "[ ]");
        assert_eq!(status_mark(TaskStatus::Done), "[x]");
    }

    #[test]
    fn test_tasks_table_has_header_and_rows() {
        let project = Project::sample();
        let table = View::tasks_table(&project.visible_tasks());
        assert_eq!(table.len(), project.visible_tasks().len() + 1);
    }
}
