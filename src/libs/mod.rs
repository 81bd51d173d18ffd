//! Core library modules for the projman application.
//!
//! - **Document core**: `project` (data model), `task`, `document` (the
//!   controller that opens, saves and mutates a project), `error`
//! - **Front-end support**: `config`, `data_storage`, `session`, `messages`,
//!   `formatter`, `view`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use projman::libs::document::ProjectDocument;
//! use std::path::Path;
//!
//! let mut document = ProjectDocument::open_path(Path::new("plan.projman"))?;
//! let index = document.add_task();
//! document.toggle_task_status(index)?;
//! document.save_path(Path::new("plan.projman"), true)?;
//! # Ok::<(), projman::libs::error::DocumentError>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod document;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod project;
pub mod session;
pub mod task;
pub mod view;
