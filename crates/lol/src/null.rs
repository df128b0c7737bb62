//! crates/lol/src/null.rs
//! Printer that discards everything while keeping the return contracts.

use std::error::Error as StdError;
use std::fmt::{self, Debug, Display};

use crate::error::Error;
use crate::level::Severity;
use crate::printer::Print;

/// Silent stand-in for [`Printer`](crate::Printer).
///
/// Nothing is ever written and [`Print::c`] never calls its closure, but
/// [`Print::chk`] and [`Print::err`] still return what a live printer would.
/// Call sites therefore need no branching when logging is switched off.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NullPrinter {
    severity: Severity,
}

impl NullPrinter {
    /// Creates a null printer reporting `severity`.
    #[must_use]
    pub const fn new(severity: Severity) -> Self {
        Self { severity }
    }
}

impl Print for NullPrinter {
    fn severity(&self) -> Severity {
        self.severity
    }

    fn enabled(&self) -> bool {
        false
    }

    fn ln(&self, _args: &[&dyn Display]) {}

    fn f(&self, _args: fmt::Arguments<'_>) {}

    fn s(&self, _args: &[&dyn Debug]) {}

    fn c(&self, _closure: &dyn Fn() -> String) {}

    fn chk(&self, err: Option<&dyn StdError>) -> bool {
        err.is_some()
    }

    fn err(&self, args: fmt::Arguments<'_>) -> Error {
        Error::new(fmt::format(args))
    }
}
