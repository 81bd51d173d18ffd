pub mod bookmark;
pub mod check;
pub mod info;
pub mod init;
pub mod new;
pub mod note;
pub mod settings;
pub mod show;
pub mod task;

use crate::libs::config::Config;
use crate::libs::session::{resolve_path, Session};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Create a new project document")]
    New(new::NewArgs),
    #[command(about = "Show the project with its visible tasks")]
    Show,
    #[command(about = "Manage tasks", arg_required_else_help = true)]
    Task(task::TaskArgs),
    #[command(about = "Change project settings", arg_required_else_help = true)]
    Settings(settings::SettingsArgs),
    #[command(about = "Edit project name and description")]
    Info(info::InfoArgs),
    #[command(about = "Manage bookmarks", arg_required_else_help = true)]
    Bookmark(bookmark::BookmarkArgs),
    #[command(about = "Manage quick notes", arg_required_else_help = true)]
    Note(note::NoteArgs),
    #[command(about = "Check due date consistency of all tasks")]
    Check,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Project document to work on (defaults to the configured path)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        if let Commands::Init = cli.command {
            return init::cmd();
        }

        let config = Config::read()?.document_or_default();
        let path = resolve_path(cli.file, &config)?;

        if let Commands::New(args) = cli.command {
            return new::cmd(path, &config, args);
        }

        let mut session = Session::open(path, &config)?;
        match cli.command {
            Commands::Show => show::cmd(&session),
            Commands::Task(args) => task::cmd(&mut session, args),
            Commands::Settings(args) => settings::cmd(&mut session, args),
            Commands::Info(args) => info::cmd(&mut session, args),
            Commands::Bookmark(args) => bookmark::cmd(&mut session, args),
            Commands::Note(args) => note::cmd(&mut session, args),
            Commands::Check => check::cmd(&session),
            Commands::Init | Commands::New(_) => Ok(()),
        }
    }
}
