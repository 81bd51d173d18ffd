#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use projman::libs::document::ProjectDocument;
    use projman::libs::error::DocumentError;
    use projman::libs::project::Project;
    use projman::libs::task::{Task, TaskField, TaskStatus};
    use std::collections::BTreeSet;

    fn document_with(names: &[&str]) -> ProjectDocument {
        let mut project = Project::default();
        project.tasks = names.iter().map(|name| Task::new(name, "")).collect();
        ProjectDocument::with_project(project)
    }

    fn names(document: &ProjectDocument) -> Vec<String> {
        document.project().tasks.iter().map(|task| task.name.clone()).collect()
    }

    #[test]
    fn test_add_task_appends_default_task() {
        let mut document = document_with(&["A", "B"]);
        let index = document.add_task();

        assert_eq!(index, 2);
        assert_eq!(document.project().tasks.len(), 3);
        let task = &document.project().tasks[index];
        assert_eq!(task.name, "");
        assert_eq!(task.notes, "");
        assert_eq!(task.status, TaskStatus::Todo);
        assert!(!task.has_due_date);
        assert!(task.due_date.is_none());
        assert_eq!(names(&document)[..2], ["A".to_string(), "B".to_string()]);
        assert!(document.is_modified());
    }

    #[test]
    fn test_delete_first_and_last() {
        let mut document = document_with(&["A", "B", "C"]);
        let removed = document.delete_tasks(BTreeSet::from([0, 2])).unwrap();

        assert_eq!(names(&document), vec!["B"]);
        assert_eq!(removed.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(), vec!["A", "C"]);
    }

    #[test]
    fn test_delete_resolves_against_original_positions() {
        let mut document = document_with(&["A", "B", "C", "D", "E"]);
        document.delete_tasks(vec![1, 3, 4]).unwrap();
        assert_eq!(names(&document), vec!["A", "C"]);
    }

    #[test]
    fn test_delete_out_of_range_is_all_or_nothing() {
        let mut document = document_with(&["A", "B", "C"]);
        let err = document.delete_tasks([0, 3]).unwrap_err();

        assert!(err.is_index_out_of_range());
        assert!(matches!(err, DocumentError::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(names(&document), vec!["A", "B", "C"]);
        assert!(!document.is_modified());
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut document = document_with(&["A"]);

        assert_eq!(document.toggle_task_status(0).unwrap(), TaskStatus::Done);
        assert_eq!(document.toggle_task_status(0).unwrap(), TaskStatus::Todo);
        assert_eq!(document.project().tasks[0].status, TaskStatus::Todo);
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut document = document_with(&[]);
        assert!(matches!(document.toggle_task_status(0), Err(DocumentError::IndexOutOfRange { index: 0, len: 0 })));
    }

    #[test]
    fn test_set_fields() {
        let mut document = document_with(&["A"]);
        let due = Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap();

        document.set_task_field(0, TaskField::Name("Renamed".to_string())).unwrap();
        document.set_task_field(0, TaskField::Notes("Some notes".to_string())).unwrap();
        document.set_task_field(0, TaskField::HasDueDate(true)).unwrap();
        document.set_task_field(0, TaskField::DueDate(Some(due))).unwrap();

        let task = document.task(0).unwrap();
        assert_eq!(task.name, "Renamed");
        assert_eq!(task.notes, "Some notes");
        assert_eq!(task.effective_due_date(), Some(due));

        // Turning the flag off keeps the stored date.
        document.set_task_field(0, TaskField::HasDueDate(false)).unwrap();
        let task = document.task(0).unwrap();
        assert_eq!(task.due_date, Some(due));
        assert_eq!(task.effective_due_date(), None);
    }

    #[test]
    fn test_set_field_out_of_range() {
        let mut document = document_with(&["A"]);
        let err = document.set_task_field(1, TaskField::Name("x".to_string())).unwrap_err();
        assert!(err.is_index_out_of_range());
        assert_eq!(names(&document), vec!["A"]);
    }

    #[test]
    fn test_filtered_view_hides_done_tasks() {
        let mut document = document_with(&["open", "finished"]);
        document.toggle_task_status(1).unwrap();

        let visible = document.visible_tasks();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].0, 0);
        assert_eq!(visible[0].1.name, "open");

        assert!(document.toggle_show_done_tasks());
        let visible = document.visible_tasks();
        assert_eq!(visible.iter().map(|(index, _)| *index).collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_filtered_view_keeps_original_indices() {
        let mut document = document_with(&["a", "b", "c", "d"]);
        document.toggle_task_status(0).unwrap();
        document.toggle_task_status(2).unwrap();

        let indices: Vec<usize> = document.visible_tasks().iter().map(|(index, _)| *index).collect();
        assert_eq!(indices, vec![1, 3]);
        assert_eq!(document.project().done_count(), 2);
    }

    #[test]
    fn test_filtered_view_is_not_persisted() {
        let mut document = document_with(&["a", "b"]);
        document.toggle_task_status(0).unwrap();

        let reopened = ProjectDocument::open(Some(document.save().unwrap().as_slice())).unwrap();
        assert_eq!(reopened.project().tasks.len(), 2);
    }

    #[test]
    fn test_project_info_update() {
        let mut document = ProjectDocument::new();
        document.set_project_info(Some("Garden".to_string()), None);
        assert_eq!(document.project().project_info.name, "Garden");
        assert_eq!(document.project().project_info.description, "");

        document.set_project_info(None, Some("Spring planting".to_string()));
        assert_eq!(document.project().project_info.name, "Garden");
        assert_eq!(document.project().project_info.description, "Spring planting");
    }

    #[test]
    fn test_project_mut_marks_modified() {
        let mut document = ProjectDocument::new();
        document.project_mut().state.values.insert("selection".to_string(), serde_json::json!(2));
        assert!(document.is_modified());
        assert_eq!(document.into_project().state.values["selection"], 2);
    }
}
