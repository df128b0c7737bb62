#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `lol` is a leveled logging facility. A single process-wide threshold
//! decides which severities are written; every call site holds a printer
//! bound to one severity and asks the threshold on each call whether to emit.
//!
//! # Design
//!
//! - [`Severity`] orders `off < fatal < error < warn < info < debug < trace`.
//! - The threshold is one atomic value read live by every printer. Change it
//!   with [`set`] or [`set_by_name`]; read it with [`get`].
//! - [`Printer`] implements the [`Print`] operations (`ln`, `f`, `s`, `c`,
//!   `chk`, `err`) against a shared [`Sink`]. [`NullPrinter`] implements the
//!   same operations and writes nothing.
//! - [`new`] returns a [`Log`] bundle with one printer per severity together
//!   with a [`Check`] and an [`Errorf`] bound to the error printer.
//!
//! # Invariants
//!
//! - A printer writes exactly when its severity is no more verbose than the
//!   threshold at the moment of the call.
//! - When the gate is closed no formatting happens and the closure given to
//!   [`Print::c`] is not called.
//! - [`Print::chk`] returns whether an error was supplied and [`Print::err`]
//!   always returns an [`Error`], whatever the threshold.
//! - Each emitted line reaches the sink in a single write.
//!
//! # Errors
//!
//! Logging never fails. Sink write errors are dropped, and unknown level
//! names fall back to a default (`info` for [`level_of`], `trace` for
//! [`set_by_name`]).
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use lol::{Print, Severity, SharedBuffer};
//!
//! let buffer = SharedBuffer::new();
//! let (log, check, errorf) = lol::new(Arc::new(buffer.clone()), 0);
//!
//! lol::set(Severity::Info);
//! lol::ln!(log.info, "starting", 3, "workers");
//! lol::logf!(log.debug, "hidden at info: {}", 42);
//! log.trace.c(&|| unreachable!("never built"));
//!
//! let err = lol::errorf!(errorf, "port {} in use", 8080);
//! assert!(check.chk(Some(&err)));
//!
//! let output = buffer.take();
//! let lines: Vec<&str> = output.lines().collect();
//! assert_eq!(lines.len(), 3);
//! assert!(lines[0].starts_with("INF ") && lines[0].ends_with(" starting 3 workers"));
//! assert!(lines[1].starts_with("ERR ") && lines[1].ends_with(" port 8080 in use"));
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Config`] and [`Severity`].
//! - `tracing`: a tracing-subscriber layer that routes `tracing` events
//!   through the same gate and line format.

mod bundle;
mod config;
mod error;
mod join;
mod level;
mod location;
mod macros;
mod null;
mod printer;
mod sink;
mod state;
#[cfg(feature = "tracing")]
mod tracing_bridge;

#[cfg(test)]
mod test_utils;

pub use bundle::{Bundle, Check, Errorf, Log, new, null, stderr, with_config};
pub use config::{Config, DEPTH_VAR, LEVEL_VAR, TIMESTAMPS_VAR};
pub use error::{Error, ParseSeverityError};
pub use join::join;
pub use level::{LEVEL_NAMES, Severity, level_of};
pub use location::{UNKNOWN_LOCATION, loc};
pub use null::NullPrinter;
pub use printer::{Print, Printer};
pub use sink::{SharedBuffer, Sink};
pub use state::{enabled, get, set, set_by_name};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LolLayer, init_tracing, init_tracing_with_filter};
