//! Convenient macros for application messaging and logging.
//!
//! The macros switch between two output modes:
//! - **Normal mode**: plain `println!`/`eprintln!` console output
//! - **Debug mode**: structured output through `tracing`
//!
//! ## Debug Mode Detection
//!
//! Debug mode is on when either environment variable is present:
//! - **`WORKLOG_DEBUG`**: application-specific flag
//! - **`RUST_LOG`**: standard Rust logging configuration
//!
//! The check runs once and is cached in a `OnceLock`.
//!
//! ## Macro Categories
//!
//! - **`msg_print!`**: plain message
//! - **`msg_success!`**: ✅ prefixed confirmation
//! - **`msg_info!`**: ℹ️ prefixed status line
//! - **`msg_error!`**: ❌ prefixed error, written to stderr
//! - **`msg_debug!`**: debug-only diagnostics, silent in normal mode
//! - **`msg_error_anyhow!`** / **`msg_bail_anyhow!`**: build or return an `anyhow::Error`
//!
//! Status messages go through these macros; command payloads such as CSV or
//! JSON are written directly to their writer so stdout stays machine-readable.
//!
//! ```rust
//! use worklog::{msg_debug, msg_success};
//! use worklog::libs::messages::Message;
//!
//! msg_success!(Message::ConfigSaved);
//! msg_debug!(format!("resolved database path: {}", "/tmp/worklog.db"));
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Returns `true` when `WORKLOG_DEBUG` or `RUST_LOG` is set.
///
/// The result is computed on first use and cached for the lifetime of the
/// process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("WORKLOG_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a general message with automatic debug mode routing.
///
/// ```rust
/// # use worklog::{msg_print, libs::messages::Message};
/// msg_print!(Message::ConfigHeader);
/// msg_print!(Message::ReportSummaryHeader, true);
/// ```
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
/// In normal mode the message goes to stderr so it never mixes with CSV or
/// JSON written to stdout.
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

/// Prints an informational message with ℹ️ prefix.
///
/// ```rust
/// # use worklog::{msg_info, libs::messages::Message};
/// msg_info!(Message::NoEntriesFound);
/// // Output: "ℹ️ No time entries found for the given filters"
/// ```
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

/// Debug-only message with 🔍 prefix. Produces no output in normal mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` from a message. The ❌ prefix is added where the error is finally printed.
///
/// ```rust
/// use anyhow::Result;
/// use worklog::{msg_error_anyhow, libs::messages::Message};
///
/// fn require_value(value: Option<&str>) -> Result<&str> {
///     value.ok_or_else(|| msg_error_anyhow!(Message::ConfigValueRequired))
/// }
/// assert!(require_value(None).is_err());
/// ```
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("{}", $msg)
    };
}

/// Early return with an `anyhow::Error` built from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("{}", $msg)
    };
}
