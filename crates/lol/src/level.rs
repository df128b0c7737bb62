//! crates/lol/src/level.rs
//! Ordered severity model and the name table.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseSeverityError;

/// Canonical lowercase severity names indexed by discriminant.
pub const LEVEL_NAMES: [&str; 7] = ["off", "fatal", "error", "warn", "info", "debug", "trace"];

/// Severity of a log line, ordered by increasing verbosity.
///
/// `Off` is the least verbose threshold and suppresses every printer, while
/// `Trace` is the most verbose and lets every printer through. The derived
/// ordering follows the discriminants, so `Severity::Info < Severity::Debug`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Severity {
    /// Logging disabled.
    Off = 0,
    /// Unrecoverable failures.
    Fatal = 1,
    /// Errors the program can continue past.
    Error = 2,
    /// Potentially harmful situations.
    Warn = 3,
    /// Coarse progress information.
    #[default]
    Info = 4,
    /// Diagnostic detail.
    Debug = 5,
    /// Very fine-grained tracing.
    Trace = 6,
}

impl Severity {
    /// Every severity in ascending verbosity order.
    pub const ALL: [Self; 7] = [
        Self::Off,
        Self::Fatal,
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Debug,
        Self::Trace,
    ];

    /// Returns the canonical lowercase name.
    ///
    /// # Examples
    ///
    /// ```
    /// use lol::Severity;
    ///
    /// assert_eq!(Severity::Warn.name(), "warn");
    /// assert_eq!(Severity::Trace.name(), "trace");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        LEVEL_NAMES[self as usize]
    }

    /// Returns the three-letter tag written at the start of rendered lines.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Fatal => "FTL",
            Self::Error => "ERR",
            Self::Warn => "WRN",
            Self::Info => "INF",
            Self::Debug => "DBG",
            Self::Trace => "TRC",
        }
    }

    /// Converts a raw discriminant back into a severity.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Off),
            1 => Some(Self::Fatal),
            2 => Some(Self::Error),
            3 => Some(Self::Warn),
            4 => Some(Self::Info),
            5 => Some(Self::Debug),
            6 => Some(Self::Trace),
            _ => None,
        }
    }

    /// Reports whether a printer of this severity may emit under `threshold`.
    ///
    /// A printer emits exactly when it is no more verbose than the threshold.
    ///
    /// ```
    /// use lol::Severity;
    ///
    /// assert!(Severity::Warn.permits(Severity::Info));
    /// assert!(!Severity::Debug.permits(Severity::Info));
    /// ```
    #[must_use]
    pub const fn permits(self, threshold: Self) -> bool {
        self as u8 <= threshold as u8
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Strict, case-sensitive parse against [`LEVEL_NAMES`].
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        LEVEL_NAMES
            .iter()
            .position(|name| *name == input)
            .and_then(|index| Self::from_u8(index as u8))
            .ok_or_else(|| ParseSeverityError::new(input))
    }
}

/// Resolves a level name, falling back to [`Severity::Info`] for anything
/// outside the name table (including the empty string).
///
/// ```
/// use lol::{Severity, level_of};
///
/// assert_eq!(level_of("debug"), Severity::Debug);
/// assert_eq!(level_of("DEBUG"), Severity::Info);
/// assert_eq!(level_of(""), Severity::Info);
/// ```
#[must_use]
pub fn level_of(name: &str) -> Severity {
    name.parse().unwrap_or(Severity::Info)
}
