//! crates/lol/src/macros.rs
//! Call-site macros that build the argument forms [`Print`](crate::Print) expects.

/// Logs the arguments joined by single spaces.
///
/// # Example
/// ```
/// let (log, _check, _errorf) = lol::null();
/// lol::ln!(log.info, "listening on", 8080);
/// ```
#[macro_export]
macro_rules! ln {
    ($printer:expr $(, $arg:expr)* $(,)?) => {
        $crate::Print::ln(&$printer, &[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

/// Logs a `format!`-style message.
///
/// # Example
/// ```
/// let (log, _check, _errorf) = lol::null();
/// lol::logf!(log.debug, "{} of {} done", 3, 10);
/// ```
#[macro_export]
macro_rules! logf {
    ($printer:expr, $($arg:tt)+) => {
        $crate::Print::f(&$printer, ::core::format_args!($($arg)+))
    };
}

/// Logs the pretty `Debug` form of each argument.
///
/// # Example
/// ```
/// let (log, _check, _errorf) = lol::null();
/// lol::spew!(log.trace, vec![1, 2], Some("x"));
/// ```
#[macro_export]
macro_rules! spew {
    ($printer:expr $(, $arg:expr)* $(,)?) => {
        $crate::Print::s(&$printer, &[$(&$arg as &dyn ::core::fmt::Debug),*])
    };
}

/// Logs a `format!`-style message and evaluates to the matching
/// [`Error`](crate::Error).
///
/// Accepts any printer as well as an [`Errorf`](crate::Errorf).
///
/// # Example
/// ```
/// let (_log, _check, errorf) = lol::null();
/// let err = lol::errorf!(errorf, "bad port {}", 70_000);
/// assert_eq!(err.to_string(), "bad port 70000");
/// ```
#[macro_export]
macro_rules! errorf {
    ($printer:expr, $($arg:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::Print as _;
        $printer.err(::core::format_args!($($arg)+))
    }};
}

/// Joins the `Display` form of each argument with single spaces.
///
/// # Example
/// ```
/// assert_eq!(lol::join!(1, "hello", 3.5), "1 hello 3.5");
/// assert_eq!(lol::join!(), "");
/// ```
#[macro_export]
macro_rules! join {
    ($($arg:expr),* $(,)?) => {
        $crate::join(&[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}
