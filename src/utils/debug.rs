//! `--debug` diagnostics
//!
//! Diagnostic lines go to stderr with a `[debug]` prefix so stdout keeps
//! only the report path or JSON.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG: AtomicBool = AtomicBool::new(false);

pub(crate) fn set_debug(enabled: bool) {
    DEBUG.store(enabled, Ordering::Relaxed);
}

pub(crate) fn debug_enabled() -> bool {
    DEBUG.load(Ordering::Relaxed)
}

pub(crate) fn debug_line(args: fmt::Arguments<'_>) -> String {
    format!("[debug] {args}")
}

/// Write one diagnostic line to stderr when `--debug` is on.
/// Arguments are only formatted when enabled.
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::utils::debug_enabled() {
            eprintln!("{}", $crate::utils::debug::debug_line(format_args!($($arg)*)));
        }
    };
}

pub(crate) use debug_log;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_has_prefix() {
        let slug = "login-bug";
        assert_eq!(
            debug_line(format_args!("slug: {slug} ({})", "from topic")),
            "[debug] slug: login-bug (from topic)"
        );
    }

    #[test]
    fn toggle_round_trip() {
        set_debug(true);
        assert!(debug_enabled());
        set_debug(false);
        assert!(!debug_enabled());
    }
}
