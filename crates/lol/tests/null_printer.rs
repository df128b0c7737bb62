//! Integration tests for the silent printer and runtime bundle selection.

mod common;

use std::sync::Arc;

use common::LevelGuard;
use lol::{Log, NullPrinter, Print, Severity, SharedBuffer};

// ============================================================================
// Null Printer
// ============================================================================

/// Verifies the emitting operations are no-ops even at trace.
#[test]
fn null_operations_do_nothing() {
    let _guard = LevelGuard::at(Severity::Trace);
    let printer = NullPrinter::default();

    printer.ln(&[&"test"]);
    printer.f(format_args!("test {}", "format"));
    printer.s(&[&"test"]);
    printer.c(&|| panic!("null printer ran a closure"));
    assert!(!printer.enabled());
}

/// Verifies chk and err keep their contracts.
#[test]
fn null_contracts() {
    let printer = NullPrinter::new(Severity::Error);
    let err = std::io::Error::other("test");

    assert!(printer.chk(Some(&err)));
    assert!(!printer.chk(None));

    let made = printer.err(format_args!("test {}", "error"));
    assert_eq!(made.to_string(), "test error");
}

/// Verifies macros work against null printers.
#[test]
fn null_macros() {
    let (log, check, errorf) = lol::null();
    lol::ln!(log.error, "a", 1);
    lol::logf!(log.warn, "{}", 2);
    lol::spew!(log.info, [1, 2, 3]);
    let err = lol::errorf!(errorf, "code {}", 7);
    assert_eq!(err.message(), "code 7");
    assert!(check.chk(Some(&err)));
}

// ============================================================================
// Runtime Selection
// ============================================================================

fn select(quiet: bool, buffer: &SharedBuffer) -> Log<Box<dyn Print + Send + Sync>> {
    if quiet {
        lol::null().0.boxed()
    } else {
        lol::new(Arc::new(buffer.clone()), 0).0.boxed()
    }
}

/// Verifies a boxed live bundle keeps per-severity gating.
#[test]
fn boxed_live_bundle_gates() {
    let _guard = LevelGuard::at(Severity::Warn);
    let buffer = SharedBuffer::new();
    let log = select(false, &buffer);

    log.error.ln(&[&"kept"]);
    log.info.ln(&[&"dropped"]);
    let output = buffer.take();
    assert!(output.contains("kept"));
    assert!(!output.contains("dropped"));
}

/// Verifies a boxed null bundle writes nothing.
#[test]
fn boxed_null_bundle_is_silent() {
    let _guard = LevelGuard::at(Severity::Trace);
    let buffer = SharedBuffer::new();
    let log = select(true, &buffer);

    for severity in Severity::ALL {
        if let Some(printer) = log.get(severity) {
            printer.ln(&[&"nothing"]);
            assert_eq!(printer.severity(), severity);
        }
    }
    assert!(buffer.is_empty());
}
