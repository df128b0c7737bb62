//! Shared helpers for the integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use lol::{Printer, Severity, SharedBuffer};

static LEVEL_LOCK: Mutex<()> = Mutex::new(());

/// Holds the threshold for one test and restores the previous value on drop.
pub struct LevelGuard {
    previous: Severity,
    _lock: MutexGuard<'static, ()>,
}

impl LevelGuard {
    pub fn at(severity: Severity) -> Self {
        let lock = LEVEL_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let previous = lol::get();
        lol::set(severity);
        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for LevelGuard {
    fn drop(&mut self) {
        lol::set(self.previous);
    }
}

/// Bundle writing into a fresh in-memory buffer.
pub fn captured(depth: usize) -> (lol::Bundle<Printer<SharedBuffer>>, SharedBuffer) {
    let buffer = SharedBuffer::new();
    (lol::new(Arc::new(buffer.clone()), depth), buffer)
}
