use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::Sink;

/// Clonable in-memory sink.
///
/// Every clone appends to the same buffer, so one handle can be given to a
/// bundle while another inspects what was logged.
///
/// ```
/// use std::sync::Arc;
/// use lol::{Print, SharedBuffer};
///
/// let buffer = SharedBuffer::new();
/// let (log, _check, _errorf) = lol::new(Arc::new(buffer.clone()), 0);
/// log.error.ln(&[&"disk", &"full"]);
/// assert!(buffer.contents().contains("disk full"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.bytes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns everything written so far, lossily decoded as UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Returns the contents and empties the buffer.
    #[must_use]
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.lock());
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Discards the contents.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Reports whether nothing has been written since creation or the last clear.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Sink for SharedBuffer {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.lock().extend_from_slice(line.as_bytes());
        Ok(())
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
