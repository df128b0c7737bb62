//! crates/lol/src/bundle.rs
//! Per-severity printer bundles and their constructors.
//!
//! [`new`] is the usual entry point: it returns a [`Log`] with one printer
//! per severity, all sharing one sink, together with a [`Check`] and an
//! [`Errorf`] bound to the error printer. [`null`] returns the same shape
//! built from [`NullPrinter`]s.

use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::sync::{Arc, OnceLock};

use crate::config::Config;
use crate::error::Error;
use crate::level::Severity;
use crate::null::NullPrinter;
use crate::printer::{Print, Printer};
use crate::sink::Sink;

/// One printer per severity.
///
/// There is no member for [`Severity::Off`]; [`Log::get`] returns `None` for it.
#[derive(Clone, Debug)]
pub struct Log<P> {
    /// Fatal printer.
    pub fatal: P,
    /// Error printer.
    pub error: P,
    /// Warn printer.
    pub warn: P,
    /// Info printer.
    pub info: P,
    /// Debug printer.
    pub debug: P,
    /// Trace printer.
    pub trace: P,
}

impl<P> Log<P> {
    /// Builds a bundle by calling `make` for each severity from fatal to trace.
    pub fn from_fn<F>(mut make: F) -> Self
    where
        F: FnMut(Severity) -> P,
    {
        Self {
            fatal: make(Severity::Fatal),
            error: make(Severity::Error),
            warn: make(Severity::Warn),
            info: make(Severity::Info),
            debug: make(Severity::Debug),
            trace: make(Severity::Trace),
        }
    }

    /// Returns the member for `severity`.
    #[must_use]
    pub const fn get(&self, severity: Severity) -> Option<&P> {
        match severity {
            Severity::Off => None,
            Severity::Fatal => Some(&self.fatal),
            Severity::Error => Some(&self.error),
            Severity::Warn => Some(&self.warn),
            Severity::Info => Some(&self.info),
            Severity::Debug => Some(&self.debug),
            Severity::Trace => Some(&self.trace),
        }
    }

    /// Applies `f` to every member.
    pub fn map<Q, F>(self, mut f: F) -> Log<Q>
    where
        F: FnMut(P) -> Q,
    {
        Log {
            fatal: f(self.fatal),
            error: f(self.error),
            warn: f(self.warn),
            info: f(self.info),
            debug: f(self.debug),
            trace: f(self.trace),
        }
    }
}

impl<P> Log<P>
where
    P: Print + Send + Sync + 'static,
{
    /// Erases the printer type so live and null bundles share one type.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use lol::{Log, Print, SharedBuffer};
    ///
    /// fn pick(quiet: bool) -> Log<Box<dyn Print + Send + Sync>> {
    ///     if quiet {
    ///         lol::null().0.boxed()
    ///     } else {
    ///         lol::new(Arc::new(SharedBuffer::new()), 0).0.boxed()
    ///     }
    /// }
    ///
    /// assert!(!pick(true).error.enabled());
    /// ```
    #[must_use]
    pub fn boxed(self) -> Log<Box<dyn Print + Send + Sync>> {
        self.map(|printer| Box::new(printer) as Box<dyn Print + Send + Sync>)
    }
}

impl<P: Clone> Log<P> {
    /// Returns a [`Check`] bound to the error printer.
    #[must_use]
    pub fn check(&self) -> Check<P> {
        Check(self.error.clone())
    }

    /// Returns an [`Errorf`] bound to the error printer.
    #[must_use]
    pub fn errorf(&self) -> Errorf<P> {
        Errorf(self.error.clone())
    }
}

/// Error-check entry point bound to one printer.
#[derive(Clone, Debug)]
pub struct Check<P>(P);

impl<P: Print> Check<P> {
    /// Wraps `printer`.
    pub const fn new(printer: P) -> Self {
        Self(printer)
    }

    /// Logs `err` when present and reports whether it was. See [`Print::chk`].
    #[track_caller]
    pub fn chk(&self, err: Option<&dyn StdError>) -> bool {
        self.0.chk(err)
    }

    /// Logs the error of a failed `result` and reports whether it failed.
    ///
    /// ```
    /// let (_log, check, _errorf) = lol::null();
    /// let parsed: Result<u8, _> = "300".parse::<u8>();
    /// assert!(check.result(&parsed));
    /// assert!(!check.result(&"30".parse::<u8>()));
    /// ```
    #[track_caller]
    pub fn result<T, E>(&self, result: &Result<T, E>) -> bool
    where
        E: StdError,
    {
        self.0.chk(result.as_ref().err().map(|err| err as &dyn StdError))
    }

    /// Borrows the bound printer.
    pub const fn printer(&self) -> &P {
        &self.0
    }
}

/// Error-construction entry point bound to one printer.
#[derive(Clone, Debug)]
pub struct Errorf<P>(P);

impl<P: Print> Errorf<P> {
    /// Wraps `printer`.
    pub const fn new(printer: P) -> Self {
        Self(printer)
    }

    /// Logs the message and returns it as an [`Error`]. See [`Print::err`].
    #[track_caller]
    pub fn err(&self, args: fmt::Arguments<'_>) -> Error {
        self.0.err(args)
    }

    /// Borrows the bound printer.
    pub const fn printer(&self) -> &P {
        &self.0
    }
}

/// A bundle with its bound check and error factory.
pub type Bundle<P> = (Log<P>, Check<P>, Errorf<P>);

fn assemble<P: Clone + Print>(log: Log<P>) -> Bundle<P> {
    let check = log.check();
    let errorf = log.errorf();
    (log, check, errorf)
}

/// Builds a bundle whose printers share `sink` and `depth`.
///
/// A non-zero `depth` resolves each emitted line's location from a captured
/// backtrace; see [`Printer::new`] for the cost.
///
/// ```
/// use std::sync::Arc;
/// use lol::SharedBuffer;
///
/// let buffer = SharedBuffer::new();
/// let (log, check, errorf) = lol::new(Arc::new(buffer.clone()), 0);
///
/// lol::ln!(log.warn, "cache", "cold");
/// let err = lol::errorf!(errorf, "missing {}", "key");
/// assert!(check.chk(Some(&err)));
/// assert_eq!(buffer.contents().lines().count(), 3);
/// ```
#[must_use]
pub fn new<S>(sink: Arc<S>, depth: usize) -> Bundle<Printer<S>>
where
    S: Sink + ?Sized,
{
    assemble(Log::from_fn(|severity| {
        Printer::new(severity, Arc::clone(&sink), depth)
    }))
}

/// Builds a bundle honouring the depth and render options of `config`.
///
/// The threshold is not touched; call [`Config::apply`] for that.
#[must_use]
pub fn with_config<S>(sink: Arc<S>, config: &Config) -> Bundle<Printer<S>>
where
    S: Sink + ?Sized,
{
    assemble(Log::from_fn(|severity| {
        config.printer(severity, Arc::clone(&sink))
    }))
}

/// Builds a bundle that writes nothing.
#[must_use]
pub fn null() -> Bundle<NullPrinter> {
    assemble(Log::from_fn(NullPrinter::new))
}

/// Process-wide bundle writing to standard error, built on first use.
pub fn stderr() -> &'static Log<Printer<io::Stderr>> {
    static STDERR: OnceLock<Log<Printer<io::Stderr>>> = OnceLock::new();
    STDERR.get_or_init(|| new(Arc::new(io::stderr()), 0).0)
}
