//! One CLI invocation working on one project document.
//!
//! A [`Session`] opens the document, lets a command mutate it and writes it
//! back only when something changed. Index errors raised by mutation commands
//! are turned into no-ops with a diagnostic by [`Session::recover`]; every
//! other document error propagates.

use super::config::DocumentConfig;
use super::document::ProjectDocument;
use super::error::DocumentError;
use super::messages::Message;
use crate::{msg_bail_anyhow, msg_error};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Picks the document path: the explicit argument wins over the configured default.
pub fn resolve_path(file: Option<PathBuf>, config: &DocumentConfig) -> Result<PathBuf> {
    match file.or_else(|| config.default_path.clone()) {
        Some(path) => Ok(path),
        None => msg_bail_anyhow!(Message::NoDocumentPath),
    }
}

pub struct Session {
    path: PathBuf,
    pretty: bool,
    pub document: ProjectDocument,
}

impl Session {
    pub fn open(path: PathBuf, config: &DocumentConfig) -> Result<Self> {
        let document = ProjectDocument::open_path(&path).with_context(|| Message::DocumentOpenFailed(path.display().to_string()))?;

        Ok(Session {
            path,
            pretty: config.pretty,
            document,
        })
    }

    /// Starts a session on a document that is not on disk yet.
    pub fn create(path: PathBuf, config: &DocumentConfig, document: ProjectDocument) -> Self {
        Session {
            path,
            pretty: config.pretty,
            document,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saves the document if it was modified.
    pub fn commit(&mut self) -> Result<()> {
        if !self.document.is_modified() {
            return Ok(());
        }
        self.save()
    }

    pub fn save(&mut self) -> Result<()> {
        let path = self.path.clone();
        self.document
            .save_path(&path, self.pretty)
            .with_context(|| Message::DocumentSaveFailed(path.display().to_string()))
    }

    /// Reports an out-of-range index as a no-op instead of failing the command.
    ///
    /// Returns `Ok(None)` in that case; the rejected command has not touched
    /// the document.
    pub fn recover<T>(kind: &str, result: Result<T, DocumentError>) -> Result<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(DocumentError::IndexOutOfRange { index, len }) => {
                warn!(kind, index, len, "ignored command with out-of-range index");
                msg_error!(Message::IndexOutOfRange {
                    kind: kind.to_string(),
                    index,
                    len,
                });
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
