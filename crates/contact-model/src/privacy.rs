//! Redaction of field values in log output.
//!
//! Contact details are personal data, so values only reach the logs when a
//! host explicitly opts in (`--log-data` on the CLI, `developer.log_values`
//! in GUI settings).

use std::sync::atomic::{AtomicBool, Ordering};

static LOG_VALUES_ENABLED: AtomicBool = AtomicBool::new(false);

/// Placeholder used when value logging is disabled.
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Enable or disable logging of raw field values.
pub fn set_log_values(enabled: bool) {
    LOG_VALUES_ENABLED.store(enabled, Ordering::Release);
}

/// Returns true if raw field values may be logged.
pub fn log_values_enabled() -> bool {
    LOG_VALUES_ENABLED.load(Ordering::Acquire)
}

/// Returns the input when value logging is enabled, otherwise a redacted token.
pub fn redact_value(value: &str) -> &str {
    if log_values_enabled() {
        value
    } else {
        REDACTED_VALUE
    }
}
