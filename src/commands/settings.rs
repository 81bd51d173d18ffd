use crate::{
    libs::{messages::Message, session::Session},
    msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    command: SettingsCommand,
}

#[derive(Debug, Subcommand)]
enum SettingsCommand {
    /// Toggle whether done tasks are listed
    ShowDone,
}

pub fn cmd(session: &mut Session, args: SettingsArgs) -> Result<()> {
    match args.command {
        SettingsCommand::ShowDone => {
            if session.document.toggle_show_done_tasks() {
                msg_success!(Message::DoneTasksShown);
            } else {
                msg_success!(Message::DoneTasksHidden);
            }
        }
    }
    session.commit()
}
