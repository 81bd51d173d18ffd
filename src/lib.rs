//! # Projman - document-based project manager
//!
//! Keeps the tasks, bookmarks, quick notes and settings of one project in a
//! single JSON document.
//!
//! ## Features
//!
//! - **Project Documents**: Open and save a project as one file, atomically
//! - **Task Management**: Add, edit, toggle and delete tasks by position
//! - **Filtered View**: Hide or show done tasks per project
//! - **Bookmarks and Quick Notes**: Keep links and short notes with the project
//!
//! ## Usage
//!
//! ```rust,no_run
//! use projman::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
