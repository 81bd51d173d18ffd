//! Display implementation for projman messages.
//!
//! All user-facing text lives here, in one match over [`Message`]. Messages
//! with dynamic content take typed parameters, so a caller can never forget an
//! argument or pass one of the wrong kind.
//!
//! ```rust
//! use projman::libs::messages::Message;
//!
//! assert_eq!(Message::TaskCreated(2).to_string(), "Task #2 created");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(index) => format!("Task #{} created", index),
            Message::TaskUpdated(index) => format!("Task #{} updated", index),
            Message::TaskMarkedDone(index) => format!("Task #{} marked as done", index),
            Message::TaskMarkedTodo(index) => format!("Task #{} marked as todo", index),
            Message::TasksDeletedCount(count) => format!("Deleted {} task(s).", count),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::TasksHiddenDone(count) => format!("{} done task(s) hidden. Run `projman settings show-done` to show them.", count),
            Message::NoTasksToShow => "No tasks to show.".to_string(),
            Message::NoIndicesProvided => "No indices provided.".to_string(),
            Message::TasksToBeDeleted => "The following tasks will be deleted:".to_string(),
            Message::ConfirmDeleteItems(count, kind) => format!("Are you sure you want to delete {} {}(s)?", count, kind),
            Message::NoChangesDetected => "No changes detected.".to_string(),
            Message::EditingTask(name) => format!("Editing task: {}", name),
            Message::TaskEditPreview => "Task after changes:".to_string(),
            Message::ConfirmTaskUpdate => "Save changes?".to_string(),
            Message::InvalidDueDate(input) => format!("Invalid due date '{}'. Use RFC 3339, 'YYYY-MM-DD HH:MM' or 'YYYY-MM-DD'.", input),

            // === SETTINGS MESSAGES ===
            Message::DoneTasksShown => "Done tasks are now shown".to_string(),
            Message::DoneTasksHidden => "Done tasks are now hidden".to_string(),

            // === PROJECT / DOCUMENT MESSAGES ===
            Message::ProjectHeader(name) => format!("📁 {}", name),
            Message::ProjectSummary {
                total,
                done,
                bookmarks,
                quick_notes,
            } => format!(
                "{} task(s), {} done | {} bookmark(s) | {} quick note(s)",
                total, done, bookmarks, quick_notes
            ),
            Message::ProjectInfoUpdated => "Project info updated".to_string(),
            Message::DocumentCreated(path) => format!("Project document created at {}", path),
            Message::DocumentAlreadyExists(path) => format!("A document already exists at {}. Use --force to overwrite it.", path),
            Message::DocumentOpenFailed(path) => format!("Failed to open project document {}", path),
            Message::DocumentSaveFailed(path) => format!("Failed to save project document {}", path),
            Message::NoDocumentPath => "No project document given. Pass --file or set a default path with `projman init`.".to_string(),
            Message::DocumentConsistent => "Document is consistent".to_string(),
            Message::DocumentInconsistent(details) => format!("Document has inconsistencies: {}", details),

            // === INDEX MESSAGES ===
            Message::IndexOutOfRange { kind, index, len } => {
                format!("There is no {} #{} (the project has {} {}(s)). Nothing was changed.", kind, index, len, kind)
            }

            // === BOOKMARK MESSAGES ===
            Message::BookmarkAdded(index) => format!("Bookmark #{} added", index),
            Message::BookmarksDeletedCount(count) => format!("Deleted {} bookmark(s).", count),
            Message::BookmarksHeader => "Bookmarks:".to_string(),
            Message::NoBookmarks => "No bookmarks.".to_string(),

            // === QUICK NOTE MESSAGES ===
            Message::QuickNoteAdded(index) => format!("Quick note #{} added", index),
            Message::QuickNotesDeletedCount(count) => format!("Deleted {} quick note(s).", count),
            Message::QuickNotesHeader => "Quick notes:".to_string(),
            Message::NoQuickNotes => "No quick notes.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleDocument => "Document settings".to_string(),

            // === PROMPTS ===
            Message::PromptTaskName => "Task name".to_string(),
            Message::PromptTaskNotes => "Notes".to_string(),
            Message::PromptTaskHasDueDate => "Task is due on a day?".to_string(),
            Message::PromptTaskDueDate => "Due date (YYYY-MM-DD HH:MM)".to_string(),
            Message::PromptDefaultDocumentPath => "Default project document path (empty for none)".to_string(),
            Message::PromptPrettyPrint => "Pretty-print documents on save?".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", text)
    }
}
