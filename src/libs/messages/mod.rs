//! User-facing messages.
//!
//! [`Message`] enumerates every text the CLI prints, `display` renders them and
//! `macros` routes them either to the console or to `tracing`.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
