//! Configuration management for the projman application.
//!
//! The configuration holds preferences of the command-line front end, not of
//! any single project (those live in the document's own `settings`). It is
//! stored as pretty-printed JSON in the platform data directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\projman\projman\config.json`
//! - **macOS**: `~/Library/Application Support/projman/projman/config.json`
//! - **Linux**: `~/.local/share/projman/projman/config.json`
//!
//! A missing file yields [`Config::default`]; a file that exists but cannot be
//! parsed is an error.
//!
//! ```rust,no_run
//! use projman::libs::config::Config;
//!
//! let config = Config::read()?;
//! let document = config.document_or_default();
//! println!("pretty: {}", document.pretty);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

fn default_pretty() -> bool {
    true
}

/// How the CLI locates and writes project documents.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DocumentConfig {
    /// Document used when `--file` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_path: Option<PathBuf>,

    /// Pretty-print JSON when saving documents.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        DocumentConfig {
            default_path: None,
            pretty: default_pretty(),
        }
    }
}

/// Root configuration. Unconfigured modules are omitted from the file.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<DocumentConfig>,
}

impl Config {
    /// Reads the configuration from the platform data directory.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration to the platform data directory.
    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn document_or_default(&self) -> DocumentConfig {
        self.document.clone().unwrap_or_default()
    }

    /// Runs the interactive setup, pre-filled with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.document_or_default();

        msg_print!(Message::ConfigModuleDocument);
        let default_path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDefaultDocumentPath.to_string())
            .default(default.default_path.map(|p| p.display().to_string()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        let pretty = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptPrettyPrint.to_string())
            .default(default.pretty)
            .interact()?;

        let default_path = default_path.trim();
        config.document = Some(DocumentConfig {
            default_path: (!default_path.is_empty()).then(|| PathBuf::from(default_path)),
            pretty,
        });

        Ok(config)
    }
}
