//! crates/lol/src/state.rs
//! Process-wide logging threshold.
//!
//! The threshold lives in a single [`AtomicU8`]. Every printer reads it live
//! on each call; nothing caches a copy, so a change made from any thread is
//! observed by the next gate check everywhere.

use std::sync::atomic::{AtomicU8, Ordering};

use crate::level::Severity;

static LEVEL: AtomicU8 = AtomicU8::new(Severity::Info as u8);

/// Returns the current threshold.
#[must_use]
pub fn get() -> Severity {
    // Only `set` writes to LEVEL and it stores valid discriminants.
    Severity::from_u8(LEVEL.load(Ordering::Relaxed)).unwrap_or(Severity::Trace)
}

/// Stores a new threshold.
pub fn set(severity: Severity) {
    LEVEL.store(severity as u8, Ordering::Relaxed);
}

/// Sets the threshold from a level name.
///
/// Unlike [`level_of`](crate::level_of), an unrecognised name selects
/// [`Severity::Trace`]: a malformed explicit request logs everything rather
/// than silently dropping lines.
///
/// ```
/// use lol::Severity;
///
/// let previous = lol::get();
/// lol::set_by_name("warn");
/// assert_eq!(lol::get(), Severity::Warn);
/// lol::set_by_name("verbose");
/// assert_eq!(lol::get(), Severity::Trace);
/// lol::set(previous);
/// ```
pub fn set_by_name(name: &str) {
    set(name.parse().unwrap_or(Severity::Trace));
}

/// Reports whether a printer bound to `severity` would emit right now.
#[must_use]
pub fn enabled(severity: Severity) -> bool {
    severity.permits(get())
}
