use crate::{
    libs::{messages::Message, session::Session},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InfoArgs {
    /// New project name
    #[arg(short, long)]
    name: Option<String>,
    /// New project description
    #[arg(short, long)]
    description: Option<String>,
}

pub fn cmd(session: &mut Session, args: InfoArgs) -> Result<()> {
    if args.name.is_none() && args.description.is_none() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    session.document.set_project_info(args.name, args.description);
    session.commit()?;
    msg_success!(Message::ProjectInfoUpdated);
    Ok(())
}
