//! Helpers shared by the unit tests.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::level::Severity;
use crate::state;

static LEVEL_LOCK: Mutex<()> = Mutex::new(());

/// Serialises tests that touch the global threshold and restores the previous
/// value when dropped.
pub(crate) struct LevelGuard {
    previous: Severity,
    _lock: MutexGuard<'static, ()>,
}

impl LevelGuard {
    pub(crate) fn acquire() -> Self {
        let lock = LEVEL_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        Self {
            previous: state::get(),
            _lock: lock,
        }
    }

    pub(crate) fn at(severity: Severity) -> Self {
        let guard = Self::acquire();
        state::set(severity);
        guard
    }
}

impl Drop for LevelGuard {
    fn drop(&mut self) {
        state::set(self.previous);
    }
}
