use crate::{
    libs::{messages::Message, project::Bookmark, session::Session, view::View},
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct BookmarkArgs {
    #[command(subcommand)]
    command: BookmarkCommand,
}

#[derive(Debug, Subcommand)]
enum BookmarkCommand {
    /// Append a bookmark
    Add { title: String, url: String },
    /// List bookmarks
    List,
    /// Delete bookmarks by index
    Delete {
        #[arg(num_args = 1..)]
        indices: Vec<usize>,
    },
}

pub fn cmd(session: &mut Session, args: BookmarkArgs) -> Result<()> {
    match args.command {
        BookmarkCommand::Add { title, url } => {
            let index = session.document.add_bookmark(Bookmark::new(&title, &url));
            session.commit()?;
            msg_success!(Message::BookmarkAdded(index));
        }
        BookmarkCommand::List => {
            let bookmarks = &session.document.project().bookmarks;
            if bookmarks.is_empty() {
                msg_info!(Message::NoBookmarks);
            } else {
                View::bookmarks(bookmarks);
            }
        }
        BookmarkCommand::Delete { indices } => {
            if indices.is_empty() {
                msg_error!(Message::NoIndicesProvided);
                return Ok(());
            }
            if let Some(removed) = Session::recover("bookmark", session.document.delete_bookmarks(indices))? {
                session.commit()?;
                msg_success!(Message::BookmarksDeletedCount(removed.len()));
            }
        }
    }
    Ok(())
}
