//! Centralized user-facing text for worklog.
//!
//! Every string printed by the CLI is a [`Message`] variant rendered through
//! its [`std::fmt::Display`] impl in [`display`]. The [`macros`] module routes
//! those messages to stdout/stderr or to `tracing` depending on debug mode.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
