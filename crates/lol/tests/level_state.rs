//! Integration tests for the severity model and the process-wide threshold.

mod common;

use common::LevelGuard;
use lol::{LEVEL_NAMES, Severity};
use proptest::prelude::*;

// ============================================================================
// Ordering and Names
// ============================================================================

/// Verifies severities are strictly increasing in verbosity.
#[test]
fn severities_are_ordered() {
    assert!(Severity::Off < Severity::Fatal);
    assert!(Severity::Fatal < Severity::Error);
    assert!(Severity::Error < Severity::Warn);
    assert!(Severity::Warn < Severity::Info);
    assert!(Severity::Info < Severity::Debug);
    assert!(Severity::Debug < Severity::Trace);
}

/// Verifies the name table is indexed by discriminant with no gaps.
#[test]
fn level_names_match_discriminants() {
    let expected = ["off", "fatal", "error", "warn", "info", "debug", "trace"];
    assert_eq!(LEVEL_NAMES, expected);
    for severity in Severity::ALL {
        assert_eq!(LEVEL_NAMES[severity as usize], severity.name());
    }
}

// ============================================================================
// level_of
// ============================================================================

/// Verifies every canonical name maps to its severity.
#[test]
fn level_of_canonical_names() {
    let cases = [
        ("off", Severity::Off),
        ("fatal", Severity::Fatal),
        ("error", Severity::Error),
        ("warn", Severity::Warn),
        ("info", Severity::Info),
        ("debug", Severity::Debug),
        ("trace", Severity::Trace),
    ];
    for (name, expected) in cases {
        assert_eq!(lol::level_of(name), expected, "{name}");
    }
}

/// Verifies unknown, empty and wrongly cased names resolve to info.
#[test]
fn level_of_unknown_defaults_to_info() {
    for name in ["unknown", "", "INFO", "Trace", " warn"] {
        assert_eq!(lol::level_of(name), Severity::Info, "{name:?}");
    }
}

// ============================================================================
// set_by_name / set / get
// ============================================================================

/// Verifies set_by_name stores canonical levels and fails open to trace.
#[test]
fn set_by_name_table() {
    let _guard = LevelGuard::at(Severity::Info);
    let cases = [
        ("off", Severity::Off),
        ("fatal", Severity::Fatal),
        ("error", Severity::Error),
        ("warn", Severity::Warn),
        ("info", Severity::Info),
        ("debug", Severity::Debug),
        ("trace", Severity::Trace),
        ("unknown", Severity::Trace),
    ];
    for (name, expected) in cases {
        lol::set_by_name(name);
        assert_eq!(lol::get(), expected, "{name}");
    }
}

/// Verifies the query and set fallbacks stay asymmetric.
#[test]
fn fallbacks_are_asymmetric() {
    let _guard = LevelGuard::at(Severity::Error);
    assert_eq!(lol::level_of("bogus"), Severity::Info);
    lol::set_by_name("bogus");
    assert_eq!(lol::get(), Severity::Trace);
}

/// Verifies the last write wins and is seen by enabled().
#[test]
fn set_then_get_round_trips() {
    let _guard = LevelGuard::at(Severity::Info);
    for severity in Severity::ALL {
        lol::set(severity);
        assert_eq!(lol::get(), severity);
        assert!(lol::enabled(severity));
    }
}

/// Verifies concurrent writers and readers only observe valid severities.
#[test]
fn concurrent_set_and_get() {
    let _guard = LevelGuard::at(Severity::Info);
    std::thread::scope(|scope| {
        for severity in Severity::ALL {
            scope.spawn(move || {
                for _ in 0..500 {
                    lol::set(severity);
                    let _ = lol::get();
                }
            });
        }
        scope.spawn(|| {
            for _ in 0..2_000 {
                assert!(Severity::ALL.contains(&lol::get()));
            }
        });
    });
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Any string either is a canonical name or maps to info.
    #[test]
    fn level_of_is_total(name in ".*") {
        let severity = lol::level_of(&name);
        if LEVEL_NAMES.contains(&name.as_str()) {
            prop_assert_eq!(severity.name(), name.as_str());
        } else {
            prop_assert_eq!(severity, Severity::Info);
        }
    }

    /// The gate admits exactly the severities at or below the threshold.
    #[test]
    fn gate_matches_ordering(printer in 0u8..7, threshold in 0u8..7) {
        let printer = Severity::from_u8(printer).unwrap();
        let threshold = Severity::from_u8(threshold).unwrap();
        prop_assert_eq!(printer.permits(threshold), printer <= threshold);
    }
}
