//! Project data model.
//!
//! A [`Project`] is the root aggregate persisted in a document file. The JSON
//! field names (`state`, `settings`, `projectInfo`, `tasks`, `bookmarks`,
//! `quickNotes`) are the file format and must not change.
//!
//! ## Required and optional fields
//!
//! `state`, `settings`, `projectInfo` and `tasks` must be present in every
//! document. `bookmarks` and `quickNotes` may be missing or `null`; both
//! decode to empty sequences so callers never deal with an absent collection.
//!
//! ## Ordering
//!
//! The order of `tasks` is the display order and the edit-index order.
//! Insertions append and removals keep the relative order of everything else.

use super::error::{DocumentError, Result};
use super::task::{Task, TaskStatus};
use chrono::{Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Name given to the project info of a freshly created document.
pub const DEFAULT_PROJECT_NAME: &str = "New Project";

/// UI/session state such as the last selection.
///
/// The content is owned by the presentation layer and stored verbatim. It must
/// be a JSON object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct StateModel {
    pub values: Map<String, Value>,
}

/// User preferences stored with the project.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SettingsModel {
    /// Whether completed tasks appear in task listings.
    #[serde(default)]
    pub show_done_tasks: bool,

    /// Keys written by other versions, kept so a save does not drop them.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Descriptive metadata of the project.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        ProjectInfo {
            name: DEFAULT_PROJECT_NAME.to_string(),
            description: String::new(),
            extra: Map::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Bookmark {
    pub title: String,
    pub url: String,
}

impl Bookmark {
    pub fn new(title: &str, url: &str) -> Self {
        Bookmark {
            title: title.to_string(),
            url: url.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct QuickNote {
    pub title: String,
    pub text: String,
}

impl QuickNote {
    pub fn new(title: &str, text: &str) -> Self {
        QuickNote {
            title: title.to_string(),
            text: text.to_string(),
        }
    }
}

/// Root aggregate of a project document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub state: StateModel,
    pub settings: SettingsModel,
    pub project_info: ProjectInfo,
    pub tasks: Vec<Task>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bookmarks: Vec<Bookmark>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub quick_notes: Vec<QuickNote>,
}

/// Treats an explicit `null` the same as a missing collection.
fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Default for Project {
    /// Creates the project used for a new document: no tasks, bookmarks or
    /// quick notes, done tasks hidden and a placeholder project name.
    fn default() -> Self {
        Project {
            state: StateModel::default(),
            settings: SettingsModel::default(),
            project_info: ProjectInfo::default(),
            tasks: Vec::new(),
            bookmarks: Vec::new(),
            quick_notes: Vec::new(),
        }
    }
}

impl Project {
    /// Returns `true` if the task belongs in the filtered view.
    ///
    /// Open tasks are always shown; done tasks only when `showDoneTasks` is on.
    pub fn is_task_visible(&self, task: &Task) -> bool {
        !task.is_done() || self.settings.show_done_tasks
    }

    /// Derived view of the tasks to display, paired with their index in
    /// `tasks`. Recomputed on every call.
    pub fn visible_tasks(&self) -> Vec<(usize, &Task)> {
        self.tasks.iter().enumerate().filter(|(_, task)| self.is_task_visible(task)).collect()
    }

    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_done()).count()
    }

    /// Reports tasks whose `hasDueDate` flag disagrees with the stored date.
    ///
    /// Documents with such tasks open and save normally; this check is only
    /// run on request.
    pub fn validate(&self) -> Result<()> {
        let inconsistent: Vec<String> = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.has_inconsistent_due_date())
            .map(|(index, _)| index.to_string())
            .collect();

        if inconsistent.is_empty() {
            Ok(())
        } else {
            Err(DocumentError::Validation(format!(
                "due date flag and value disagree for task(s) {}",
                inconsistent.join(", ")
            )))
        }
    }

    /// Builds a populated project for previews and demonstrations.
    pub fn sample() -> Self {
        let now = Utc::now();
        let mut done = Task::new("Set up repository", "Initial layout and CI");
        done.status = TaskStatus::Done;

        let mut due = Task::new("Write release notes", "");
        due.has_due_date = true;
        due.due_date = Some(now + Duration::days(7));

        Project {
            project_info: ProjectInfo {
                name: "Sample Project".to_string(),
                description: "A project with a few tasks, bookmarks and notes".to_string(),
                extra: Map::new(),
            },
            tasks: vec![done, due, Task::new("Review open issues", "Triage the backlog")],
            bookmarks: vec![Bookmark::new("Documentation", "https://docs.rs")],
            quick_notes: vec![QuickNote::new("Ideas", "Add keyboard shortcuts")],
            ..Project::default()
        }
    }
}
