use super::formatter::{format_task_due, status_mark};
use super::project::{Bookmark, QuickNote};
use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Builds the task table. Each entry carries the task's index in the
    /// project, which is what task commands take as argument.
    pub fn tasks_table(tasks: &[(usize, &Task)]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["#", "DONE", "NAME", "NOTES", "DUE"]);
        for (index, task) in tasks {
            table.add_row(row![index, status_mark(task.status), task.name, task.notes, format_task_due(task)]);
        }

        table
    }

    pub fn tasks(tasks: &[(usize, &Task)]) {
        Self::tasks_table(tasks).printstd();
    }

    pub fn bookmarks(bookmarks: &[Bookmark]) {
        let mut table = Table::new();

        table.add_row(row!["#", "TITLE", "URL"]);
        for (index, bookmark) in bookmarks.iter().enumerate() {
            table.add_row(row![index, bookmark.title, bookmark.url]);
        }
        table.printstd();
    }

    pub fn quick_notes(notes: &[QuickNote]) {
        let mut table = Table::new();

        table.add_row(row!["#", "TITLE", "TEXT"]);
        for (index, note) in notes.iter().enumerate() {
            table.add_row(row![index, note.title, note.text]);
        }
        table.printstd();
    }
}
