use crate::{
    libs::{messages::Message, project::QuickNote, session::Session, view::View},
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct NoteArgs {
    #[command(subcommand)]
    command: NoteCommand,
}

#[derive(Debug, Subcommand)]
enum NoteCommand {
    /// Append a quick note
    Add {
        title: String,
        #[arg(default_value = "")]
        text: String,
    },
    /// List quick notes
    List,
    /// Delete quick notes by index
    Delete {
        #[arg(num_args = 1..)]
        indices: Vec<usize>,
    },
}

pub fn cmd(session: &mut Session, args: NoteArgs) -> Result<()> {
    match args.command {
        NoteCommand::Add { title, text } => {
            let index = session.document.add_quick_note(QuickNote::new(&title, &text));
            session.commit()?;
            msg_success!(Message::QuickNoteAdded(index));
        }
        NoteCommand::List => {
            let notes = &session.document.project().quick_notes;
            if notes.is_empty() {
                msg_info!(Message::NoQuickNotes);
            } else {
                View::quick_notes(notes);
            }
        }
        NoteCommand::Delete { indices } => {
            if indices.is_empty() {
                msg_error!(Message::NoIndicesProvided);
                return Ok(());
            }
            if let Some(removed) = Session::recover("quick note", session.document.delete_quick_notes(indices))? {
                session.commit()?;
                msg_success!(Message::QuickNotesDeletedCount(removed.len()));
            }
        }
    }
    Ok(())
}
