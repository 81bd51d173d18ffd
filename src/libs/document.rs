//! Document controller for project files.
//!
//! A [`ProjectDocument`] owns exactly one [`Project`] for the lifetime of an
//! open document. It turns bytes into a project on open, turns the project
//! back into bytes on save, and exposes every mutation the presentation layer
//! may request as an explicit command.
//!
//! ## Persistence contract
//!
//! - **Open** fails with [`DocumentError::CorruptDocument`] for absent, empty or
//!   malformed bytes. A corrupt file is never replaced by a blank project and
//!   no partially decoded project is ever returned.
//! - **Save** serializes a consistent snapshot (`&self`) and round-trips
//!   losslessly through open.
//! - Saving to a path writes a sibling temporary file first and renames it over
//!   the target, so the file on disk is either the old or the new document.
//!
//! ## Index-based commands
//!
//! Tasks, bookmarks and quick notes are addressed by position. Deleting
//! several positions resolves all of them against the sequence as it was
//! before the call and removes them highest-first. Any out-of-range index
//! rejects the whole call and leaves the sequence untouched.
//!
//! ```rust,no_run
//! use projman::libs::document::ProjectDocument;
//! use projman::libs::task::TaskField;
//!
//! let mut document = ProjectDocument::new();
//! let index = document.add_task();
//! document.set_task_field(index, TaskField::Name("Write docs".into()))?;
//! let bytes = document.save()?;
//! let reopened = ProjectDocument::open(Some(bytes.as_slice()))?;
//! assert_eq!(reopened.project(), document.project());
//! # Ok::<(), projman::libs::error::DocumentError>(())
//! ```

use super::error::{DocumentError, Result};
use super::project::{Bookmark, Project, QuickNote};
use super::task::{due_date, Task, TaskField, TaskStatus};
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDocument {
    project: Project,
    modified: bool,
}

impl Default for ProjectDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectDocument {
    /// Creates a document holding the default (empty) project.
    pub fn new() -> Self {
        Self::with_project(Project::default())
    }

    pub fn with_project(project: Project) -> Self {
        ProjectDocument { project, modified: false }
    }

    /// Decodes a project from the contents of a document file.
    ///
    /// `None` stands for a file without readable contents.
    pub fn open(bytes: Option<&[u8]>) -> Result<Self> {
        let bytes = bytes.ok_or_else(|| DocumentError::corrupt("document has no contents"))?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(DocumentError::corrupt("document is empty"));
        }

        let project: Project = serde_json::from_slice(bytes).map_err(|e| DocumentError::corrupt(e.to_string()))?;
        debug!(tasks = project.tasks.len(), bookmarks = project.bookmarks.len(), quick_notes = project.quick_notes.len(), "opened document");

        Ok(Self::with_project(project))
    }

    /// Encodes the project as compact JSON.
    pub fn save(&self) -> Result<Vec<u8>> {
        self.save_with(false)
    }

    pub fn save_with(&self, pretty: bool) -> Result<Vec<u8>> {
        let bytes = if pretty {
            serde_json::to_vec_pretty(&self.project)
        } else {
            serde_json::to_vec(&self.project)
        };
        bytes.map_err(DocumentError::Encode)
    }

    /// Reads and decodes a document file.
    pub fn open_path(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        debug!(path = %path.display(), size = bytes.len(), "read document file");
        Self::open(Some(bytes.as_slice()))
    }

    /// Writes the document to `path`, replacing any existing file atomically.
    pub fn save_path(&mut self, path: &Path, pretty: bool) -> Result<()> {
        let bytes = self.save_with(pretty)?;
        let temp_path = temp_path_for(path)?;

        if let Err(e) = write_synced(&temp_path, &bytes) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }
        if let Err(e) = fs::rename(&temp_path, path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        debug!(path = %path.display(), size = bytes.len(), "saved document file");
        self.modified = false;
        Ok(())
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Mutable access for edits not covered by a dedicated command.
    pub fn project_mut(&mut self) -> &mut Project {
        self.modified = true;
        &mut self.project
    }

    pub fn into_project(self) -> Project {
        self.project
    }

    /// Whether the project changed since it was opened or last saved to a path.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn task(&self, index: usize) -> Result<&Task> {
        let len = self.project.tasks.len();
        self.project.tasks.get(index).ok_or(DocumentError::IndexOutOfRange { index, len })
    }

    pub fn visible_tasks(&self) -> Vec<(usize, &Task)> {
        self.project.visible_tasks()
    }

    /// Appends a default task and returns its index.
    pub fn add_task(&mut self) -> usize {
        self.project.tasks.push(Task::default());
        self.modified = true;
        let index = self.project.tasks.len() - 1;
        debug!(index, "added task");
        index
    }

    /// Removes the tasks at `indices`, returning them in their original order.
    pub fn delete_tasks<I>(&mut self, indices: I) -> Result<Vec<Task>>
    where
        I: IntoIterator<Item = usize>,
    {
        let removed = remove_indices(&mut self.project.tasks, indices)?;
        self.modified = true;
        debug!(count = removed.len(), "deleted tasks");
        Ok(removed)
    }

    /// Flips a task between todo and done and returns the new status.
    pub fn toggle_task_status(&mut self, index: usize) -> Result<TaskStatus> {
        let status = self.task_mut(index)?.toggle_status();
        self.modified = true;
        debug!(index, %status, "toggled task status");
        Ok(status)
    }

    /// Updates one field of a task.
    ///
    /// Due dates outside years 0 through 9999 are refused with
    /// [`DocumentError::Validation`] since the file format cannot store them.
    pub fn set_task_field(&mut self, index: usize, field: TaskField) -> Result<()> {
        let task = self.task_mut(index)?;
        if let TaskField::DueDate(Some(date)) = &field {
            if !due_date::is_representable(date) {
                return Err(DocumentError::Validation(format!("due date {} is out of range", date)));
            }
        }
        task.apply(field);
        self.modified = true;
        debug!(index, "updated task field");
        Ok(())
    }

    /// Flips `showDoneTasks` and returns the new value.
    pub fn toggle_show_done_tasks(&mut self) -> bool {
        let settings = &mut self.project.settings;
        settings.show_done_tasks = !settings.show_done_tasks;
        self.modified = true;
        settings.show_done_tasks
    }

    pub fn set_project_info(&mut self, name: Option<String>, description: Option<String>) {
        let info = &mut self.project.project_info;
        if let Some(name) = name {
            info.name = name;
        }
        if let Some(description) = description {
            info.description = description;
        }
        self.modified = true;
    }

    pub fn add_bookmark(&mut self, bookmark: Bookmark) -> usize {
        self.project.bookmarks.push(bookmark);
        self.modified = true;
        self.project.bookmarks.len() - 1
    }

    pub fn delete_bookmarks<I>(&mut self, indices: I) -> Result<Vec<Bookmark>>
    where
        I: IntoIterator<Item = usize>,
    {
        let removed = remove_indices(&mut self.project.bookmarks, indices)?;
        self.modified = true;
        Ok(removed)
    }

    pub fn add_quick_note(&mut self, note: QuickNote) -> usize {
        self.project.quick_notes.push(note);
        self.modified = true;
        self.project.quick_notes.len() - 1
    }

    pub fn delete_quick_notes<I>(&mut self, indices: I) -> Result<Vec<QuickNote>>
    where
        I: IntoIterator<Item = usize>,
    {
        let removed = remove_indices(&mut self.project.quick_notes, indices)?;
        self.modified = true;
        Ok(removed)
    }

    fn task_mut(&mut self, index: usize) -> Result<&mut Task> {
        let len = self.project.tasks.len();
        self.project.tasks.get_mut(index).ok_or(DocumentError::IndexOutOfRange { index, len })
    }
}

/// Removes every position in `indices` or nothing at all.
fn remove_indices<T, I>(items: &mut Vec<T>, indices: I) -> Result<Vec<T>>
where
    I: IntoIterator<Item = usize>,
{
    let indices: BTreeSet<usize> = indices.into_iter().collect();
    let len = items.len();
    if let Some(&index) = indices.iter().find(|&&index| index >= len) {
        debug!(index, len, "rejected removal");
        return Err(DocumentError::IndexOutOfRange { index, len });
    }

    let mut removed: Vec<T> = indices.iter().rev().map(|&index| items.remove(index)).collect();
    removed.reverse();
    Ok(removed)
}

fn temp_path_for(path: &Path) -> std::io::Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("'{}' is not a file path", path.display()))
    })?;
    let mut temp_name = std::ffi::OsString::from(".");
    temp_name.push(file_name);
    temp_name.push(".tmp");
    Ok(path.with_file_name(temp_name))
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_indices_is_all_or_nothing() {
        let mut items = vec!['a', 'b', 'c'];
        let err = remove_indices(&mut items, [0, 5]).unwrap_err();
        assert!(matches!(err, DocumentError::IndexOutOfRange { index: 5, len: 3 }));
        assert_eq!(items, vec!['a', 'b', 'c']);
    }

    #[test]
    fn remove_indices_ignores_duplicates() {
        let mut items = vec![1, 2, 3, 4];
        let removed = remove_indices(&mut items, [3, 1, 3]).unwrap();
        assert_eq!(removed, vec![2, 4]);
        assert_eq!(items, vec![1, 3]);
    }

    #[test]
    fn temp_path_is_hidden_sibling() {
        let temp = temp_path_for(Path::new("/tmp/work/plan.projman")).unwrap();
        assert_eq!(temp, PathBuf::from("/tmp/work/.plan.projman.tmp"));
    }
}
