//! Macros for printing application messages.
//!
//! Every macro checks once whether debug mode is on and routes the message
//! accordingly:
//!
//! ```text
//! msg_info!(msg) ──▶ debug mode? ──yes──▶ tracing::info!("ℹ️ {msg}")
//!                                 └─no───▶ println!("ℹ️ {msg}")
//! ```
//!
//! Debug mode is enabled by setting `TALLYSHEET_DEBUG` or `RUST_LOG`; in that
//! case `main` installs a `tracing` subscriber and all output becomes
//! structured log lines.
//!
//! ## Macros
//!
//! - `msg_print!`: plain message
//! - `msg_success!`: ✅ prefix
//! - `msg_info!`: ℹ️ prefix
//! - `msg_warning!`: ⚠️ prefix
//! - `msg_debug!`: 🔍 prefix, suppressed in normal mode
//! - `msg_error_anyhow!` / `msg_bail_anyhow!`: build or return an `anyhow::Error`
//!
//! Each display macro accepts an optional `true` second argument that
//! surrounds the message with blank lines.
//!
//! ```rust
//! use tallysheet::{msg_error_anyhow, libs::messages::Message};
//!
//! let error = msg_error_anyhow!(Message::TogglNotConfigured);
//! assert!(error.to_string().starts_with("❌ Toggl is not configured"));
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Environment variable that switches the application into debug mode.
pub const DEBUG_ENV: &str = "TALLYSHEET_DEBUG";

/// Returns `true` when `TALLYSHEET_DEBUG` or `RUST_LOG` is set.
///
/// The environment is checked on the first call only.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var(DEBUG_ENV).is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a message without prefix.
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

/// Logs a debug message with 🔍 prefix. Prints nothing outside debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` from a message with ❌ prefix.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

/// Returns early with an `anyhow::Error` built from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
