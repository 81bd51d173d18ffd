use crate::{
    libs::{messages::Message, session::Session, view::View},
    msg_info, msg_print,
};
use anyhow::Result;

pub fn cmd(session: &Session) -> Result<()> {
    let project = session.document.project();
    let info = &project.project_info;

    msg_print!(Message::ProjectHeader(info.name.clone()), true);
    if !info.description.is_empty() {
        msg_print!(info.description);
    }
    msg_print!(Message::ProjectSummary {
        total: project.tasks.len(),
        done: project.done_count(),
        bookmarks: project.bookmarks.len(),
        quick_notes: project.quick_notes.len(),
    });

    let visible = project.visible_tasks();
    msg_print!(Message::TasksHeader, true);
    if visible.is_empty() {
        msg_info!(Message::NoTasksToShow);
    } else {
        View::tasks(&visible);
    }
    let hidden = project.tasks.len() - visible.len();
    if hidden > 0 {
        msg_info!(Message::TasksHiddenDone(hidden));
    }

    if !project.bookmarks.is_empty() {
        msg_print!(Message::BookmarksHeader, true);
        View::bookmarks(&project.bookmarks);
    }
    if !project.quick_notes.is_empty() {
        msg_print!(Message::QuickNotesHeader, true);
        View::quick_notes(&project.quick_notes);
    }

    Ok(())
}
