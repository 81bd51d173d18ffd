use crate::{
    libs::{
        config::DocumentConfig,
        document::ProjectDocument,
        messages::Message,
        project::Project,
        session::Session,
    },
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name
    #[arg(short, long)]
    name: Option<String>,
    /// Project description
    #[arg(short, long)]
    description: Option<String>,
    /// Fill the document with sample tasks, bookmarks and notes
    #[arg(long)]
    sample: bool,
    /// Overwrite an existing document
    #[arg(long)]
    force: bool,
}

pub fn cmd(path: PathBuf, config: &DocumentConfig, args: NewArgs) -> Result<()> {
    if path.exists() && !args.force {
        msg_error!(Message::DocumentAlreadyExists(path.display().to_string()));
        return Ok(());
    }

    let project = if args.sample { Project::sample() } else { Project::default() };
    let mut document = ProjectDocument::with_project(project);
    document.set_project_info(args.name, args.description);

    let mut session = Session::create(path, config, document);
    session.save()?;

    msg_success!(Message::DocumentCreated(session.path().display().to_string()));
    Ok(())
}
