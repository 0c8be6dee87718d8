//! Debug logging utilities
//!
//! Debug output is opt-in via the `--debug` flag or the `VSPKG_DEBUG`
//! environment variable. When debug mode is disabled, all debug logging
//! has zero cost.

use std::sync::OnceLock;

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// Initialize debug mode from the command-line flag.
/// The `VSPKG_DEBUG` environment variable also enables it.
pub fn init_debug(enabled: bool) {
    let from_env = std::env::var_os("VSPKG_DEBUG").is_some();
    let _ = DEBUG_ENABLED.set(enabled || from_env);
}

/// Check if debug mode is enabled
#[must_use]
pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED.get().copied().unwrap_or(false)
}

/// Macro for convenient debug logging
///
/// Usage: `debug!("message with {}", variable)`
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        if $crate::debug::is_debug_enabled() {
            eprintln!("[DEBUG] {}", format_args!($($arg)*));
        }
    };
}
