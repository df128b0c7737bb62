//! crates/lol/src/printer.rs
//! Severity-bound printers and the operation set they share.
//!
//! # Gate check
//!
//! Every operation starts by comparing the printer's severity against the
//! live threshold (see [`get`](crate::get)). A printer emits exactly when
//! its severity is no more verbose than the threshold. When the gate is closed
//! nothing is formatted, no location is resolved and the closure handed to
//! [`Print::c`] is not invoked.
//!
//! # Line format
//!
//! ```text
//! [<yyyy/mm/dd hh:mm:ss.micros> ]<TAG> <file:line> <message>[\n]
//! ```
//!
//! The UTC timestamp is present only when enabled and the trailing newline
//! can be switched off per printer. Each line reaches the sink in one
//! [`Sink::write_line`] call; sink errors are dropped.

use std::error::Error as StdError;
use std::fmt::{self, Debug, Display, Write};
use std::panic::Location;
use std::sync::Arc;
use std::time::SystemTime;

use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::macros::format_description;

use crate::error::Error;
use crate::join::{write_joined, write_spewed};
use crate::level::Severity;
use crate::location;
use crate::sink::Sink;
use crate::state;

/// Timestamp layout used when a printer has timestamps enabled.
const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!(
    "[year]/[month padding:zero]/[day padding:zero] [hour padding:zero]:[minute padding:zero]:[second padding:zero].[subsecond digits:6]"
);

/// The six logging operations shared by [`Printer`] and
/// [`NullPrinter`](crate::NullPrinter).
///
/// The trait is object safe so live and silent printers can sit behind one
/// `Box<dyn Print + Send + Sync>`. The [`ln!`](crate::ln), [`logf!`](crate::logf),
/// [`spew!`](crate::spew) and [`errorf!`](crate::errorf) macros build the
/// argument forms these methods expect.
pub trait Print {
    /// Severity this printer is bound to.
    fn severity(&self) -> Severity;

    /// Reports whether a call made now would write anything.
    fn enabled(&self) -> bool {
        state::enabled(self.severity())
    }

    /// Writes the arguments joined by single spaces.
    #[track_caller]
    fn ln(&self, args: &[&dyn Display]);

    /// Writes a `format_args!` message.
    #[track_caller]
    fn f(&self, args: fmt::Arguments<'_>);

    /// Writes the pretty `Debug` form of each argument.
    #[track_caller]
    fn s(&self, args: &[&dyn Debug]);

    /// Writes the string returned by `closure`, invoking it only when the
    /// gate is open.
    #[track_caller]
    fn c(&self, closure: &dyn Fn() -> String);

    /// Logs `err` when present and reports whether it was.
    ///
    /// The return value ignores the gate: `Some(_)` always yields `true`
    /// even when the line itself is filtered out.
    #[track_caller]
    fn chk(&self, err: Option<&dyn StdError>) -> bool;

    /// Logs the message and returns it as an [`Error`], whether or not the
    /// gate was open.
    #[track_caller]
    fn err(&self, args: fmt::Arguments<'_>) -> Error;
}

/// Printer bound to one severity, a shared sink and a stack depth.
///
/// Printers are immutable after construction. They are cheap to clone (the
/// sink is reference counted) and can be shared between threads whenever the
/// sink can.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use lol::{Printer, SharedBuffer, Severity};
///
/// let buffer = SharedBuffer::new();
/// let warn = Printer::new(Severity::Warn, Arc::new(buffer.clone()), 0);
///
/// lol::logf!(warn, "retrying in {}s", 5);
/// let line = buffer.take();
/// assert!(line.starts_with("WRN "));
/// assert!(line.ends_with("retrying in 5s\n"));
/// ```
pub struct Printer<S: ?Sized> {
    severity: Severity,
    sink: Arc<S>,
    depth: usize,
    timestamps: bool,
    newline: bool,
}

impl<S: ?Sized> Printer<S> {
    /// Creates a printer for `severity` writing to `sink`.
    ///
    /// With `depth == 0` lines are attributed to the printer's call site.
    /// A larger depth attributes them to the frame that many levels further
    /// out, for printers wrapped by logging helpers.
    ///
    /// A non-zero depth captures and symbolises a backtrace for every line
    /// that passes the gate, which costs far more than the tracked call site
    /// used at depth 0. Filtered calls pay nothing either way.
    #[must_use]
    pub fn new(severity: Severity, sink: Arc<S>, depth: usize) -> Self {
        Self {
            severity,
            sink,
            depth,
            timestamps: false,
            newline: true,
        }
    }

    /// Prefixes lines with the wall-clock time when `enabled`.
    #[must_use]
    pub fn with_timestamps(mut self, enabled: bool) -> Self {
        self.timestamps = enabled;
        self
    }

    /// Selects whether lines are newline-terminated.
    ///
    /// Turn this off for sinks that frame records themselves.
    #[must_use]
    pub fn with_newline(mut self, enabled: bool) -> Self {
        self.newline = enabled;
        self
    }

    /// Stack depth used when resolving locations.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Whether lines carry a timestamp.
    #[must_use]
    pub const fn timestamps(&self) -> bool {
        self.timestamps
    }

    /// Whether lines end with a newline.
    #[must_use]
    pub const fn newline(&self) -> bool {
        self.newline
    }

    /// Borrows the shared sink.
    #[must_use]
    pub fn sink(&self) -> &Arc<S> {
        &self.sink
    }

    /// Returns a printer sharing this one's sink and options at another severity.
    #[must_use]
    pub fn at(&self, severity: Severity) -> Self {
        Self {
            severity,
            sink: Arc::clone(&self.sink),
            depth: self.depth,
            timestamps: self.timestamps,
            newline: self.newline,
        }
    }
}

impl<S> Printer<S>
where
    S: Sink + ?Sized,
{
    fn site(&self, caller: &Location<'_>) -> String {
        if self.depth == 0 {
            return location::tracked(caller);
        }
        location::resolve(self.depth).unwrap_or_else(|| location::tracked(caller))
    }

    fn compose<F>(&self, site: &str, body: F) -> Result<String, fmt::Error>
    where
        F: FnOnce(&mut String) -> fmt::Result,
    {
        let mut line = String::with_capacity(64);
        if self.timestamps {
            let now = OffsetDateTime::from(SystemTime::now());
            match now.format(TIMESTAMP_FORMAT) {
                Ok(stamp) => line.push_str(&stamp),
                Err(_) => line.push_str("1970/01/01 00:00:00.000000"),
            }
            line.push(' ');
        }
        line.push_str(self.severity.tag());
        line.push(' ');
        line.push_str(site);
        line.push(' ');
        body(&mut line)?;
        if self.newline {
            line.push('\n');
        }
        Ok(line)
    }

    /// Writes one composed line attributed to `site`, bypassing the gate.
    pub(crate) fn write_at<F>(&self, site: &str, body: F)
    where
        F: FnOnce(&mut String) -> fmt::Result,
    {
        // A Display impl that errors leaves nothing worth writing.
        if let Ok(line) = self.compose(site, body) {
            let _ = self.sink.write_line(&line);
        }
    }

    fn emit<F>(&self, caller: &Location<'_>, body: F)
    where
        F: FnOnce(&mut String) -> fmt::Result,
    {
        let site = self.site(caller);
        self.write_at(&site, body);
    }
}

impl<S> Print for Printer<S>
where
    S: Sink + ?Sized,
{
    fn severity(&self) -> Severity {
        self.severity
    }

    #[track_caller]
    fn ln(&self, args: &[&dyn Display]) {
        if self.enabled() {
            self.emit(Location::caller(), |out| write_joined(out, args));
        }
    }

    #[track_caller]
    fn f(&self, args: fmt::Arguments<'_>) {
        if self.enabled() {
            self.emit(Location::caller(), |out| out.write_fmt(args));
        }
    }

    #[track_caller]
    fn s(&self, args: &[&dyn Debug]) {
        if self.enabled() {
            self.emit(Location::caller(), |out| write_spewed(out, args));
        }
    }

    #[track_caller]
    fn c(&self, closure: &dyn Fn() -> String) {
        if self.enabled() {
            self.emit(Location::caller(), |out| {
                out.push_str(&closure());
                Ok(())
            });
        }
    }

    #[track_caller]
    fn chk(&self, err: Option<&dyn StdError>) -> bool {
        let Some(err) = err else {
            return false;
        };
        if self.enabled() {
            self.emit(Location::caller(), |out| write!(out, "{err}"));
        }
        true
    }

    #[track_caller]
    fn err(&self, args: fmt::Arguments<'_>) -> Error {
        let message = fmt::format(args);
        if self.enabled() {
            self.emit(Location::caller(), |out| {
                out.push_str(&message);
                Ok(())
            });
        }
        Error::new(message)
    }
}

impl<S: ?Sized> Clone for Printer<S> {
    fn clone(&self) -> Self {
        self.at(self.severity)
    }
}

impl<S: ?Sized> fmt::Debug for Printer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Printer")
            .field("severity", &self.severity)
            .field("depth", &self.depth)
            .field("timestamps", &self.timestamps)
            .field("newline", &self.newline)
            .finish_non_exhaustive()
    }
}

impl<P> Print for &P
where
    P: Print + ?Sized,
{
    fn severity(&self) -> Severity {
        (**self).severity()
    }

    fn enabled(&self) -> bool {
        (**self).enabled()
    }

    #[track_caller]
    fn ln(&self, args: &[&dyn Display]) {
        (**self).ln(args);
    }

    #[track_caller]
    fn f(&self, args: fmt::Arguments<'_>) {
        (**self).f(args);
    }

    #[track_caller]
    fn s(&self, args: &[&dyn Debug]) {
        (**self).s(args);
    }

    #[track_caller]
    fn c(&self, closure: &dyn Fn() -> String) {
        (**self).c(closure);
    }

    #[track_caller]
    fn chk(&self, err: Option<&dyn StdError>) -> bool {
        (**self).chk(err)
    }

    #[track_caller]
    fn err(&self, args: fmt::Arguments<'_>) -> Error {
        (**self).err(args)
    }
}

impl<P> Print for Box<P>
where
    P: Print + ?Sized,
{
    fn severity(&self) -> Severity {
        (**self).severity()
    }

    fn enabled(&self) -> bool {
        (**self).enabled()
    }

    #[track_caller]
    fn ln(&self, args: &[&dyn Display]) {
        (**self).ln(args);
    }

    #[track_caller]
    fn f(&self, args: fmt::Arguments<'_>) {
        (**self).f(args);
    }

    #[track_caller]
    fn s(&self, args: &[&dyn Debug]) {
        (**self).s(args);
    }

    #[track_caller]
    fn c(&self, closure: &dyn Fn() -> String) {
        (**self).c(closure);
    }

    #[track_caller]
    fn chk(&self, err: Option<&dyn StdError>) -> bool {
        (**self).chk(err)
    }

    #[track_caller]
    fn err(&self, args: fmt::Arguments<'_>) -> Error {
        (**self).err(args)
    }
}
