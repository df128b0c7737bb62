//! crates/lol/src/sink/mod.rs
//! Destinations that composed log lines are written to.
//!
//! A [`Sink`] receives one fully composed line per call and is shared by
//! every printer of a bundle, so it is written through `&self`. The stock
//! implementations cover locked writers, the standard streams, files and an
//! in-memory [`SharedBuffer`].

use std::fs::File;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

mod shared_buffer;

pub use shared_buffer::SharedBuffer;

/// Writer capability consumed by [`Printer`](crate::Printer).
///
/// Implementations should write `line` in one piece so lines from
/// concurrent printers do not interleave. Errors are reported to the caller,
/// which drops them: logging never propagates sink failures.
pub trait Sink: Send + Sync {
    /// Writes one composed line, including its terminator if any.
    fn write_line(&self, line: &str) -> io::Result<()>;
}

impl<W> Sink for Mutex<W>
where
    W: Write + Send,
{
    fn write_line(&self, line: &str) -> io::Result<()> {
        // A panic while another printer held the lock leaves the writer usable.
        let mut writer = self.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(line.as_bytes())
    }
}

impl Sink for io::Stderr {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.lock().write_all(line.as_bytes())
    }
}

impl Sink for io::Stdout {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.lock().write_all(line.as_bytes())
    }
}

impl Sink for File {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut file = self;
        file.write_all(line.as_bytes())
    }
}

impl<S> Sink for &S
where
    S: Sink + ?Sized,
{
    fn write_line(&self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }
}
