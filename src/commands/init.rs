//! Application configuration initialization command.
//!
//! Runs the interactive setup wizard and stores the result in the platform
//! data directory.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
