//! Convenient macros for application messaging and logging.
//!
//! The macros switch between two output modes:
//!
//! - **Debug mode** (`PROJMAN_DEBUG` or `RUST_LOG` set): messages go through
//!   `tracing` so they interleave with the structured log of the document core.
//! - **Normal mode**: messages are printed with `println!`/`eprintln!`.
//!
//! ```text
//! msg_info!(..) ──▶ is_debug_mode() ──▶ tracing::info!  (debug)
//!                                  └──▶ println!        (normal)
//! ```
//!
//! ## Macros
//!
//! - `msg_print!`, `msg_success!` (✅), `msg_info!` (ℹ️), `msg_warning!` (⚠️)
//! - `msg_error!` (❌, stderr in normal mode)
//! - `msg_bail_anyhow!` to return early with an `anyhow::Error`
//!
//! ```rust
//! use projman::{msg_info, msg_success};
//! use projman::libs::messages::Message;
//!
//! msg_success!(Message::TaskCreated(0));
//! msg_info!(Message::NoTasksToShow, true);
//! ```

use std::sync::OnceLock;

/// Environment variable that enables debug output.
pub const DEBUG_ENV_VAR: &str = "PROJMAN_DEBUG";

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Checks if debug mode is enabled. The environment is read once and cached.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var(DEBUG_ENV_VAR).is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a general message.
///
/// Passing `true` as the second argument surrounds the message with blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix.
///
/// In normal mode the message goes to stderr so scripts can separate it from
/// regular output.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

/// Prints a warning message with ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("\n⚠️ {}\n", $msg);
        } else {
            println!("\n⚠️ {}\n", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Returns early with an error created from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
