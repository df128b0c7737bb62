//! crates/lol/src/join.rs
//! Space-separated rendering of heterogeneous arguments.

use std::fmt::{self, Display, Write};

/// Renders each argument with its `Display` form, separated by single spaces.
///
/// No quoting, brackets or type decoration is added. An empty slice yields an
/// empty string.
///
/// ```
/// use lol::join;
///
/// assert_eq!(join(&[]), "");
/// assert_eq!(join(&[&1, &"hello", &3.14]), "1 hello 3.14");
/// ```
#[must_use]
pub fn join(args: &[&dyn Display]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_joined(&mut out, args);
    out
}

pub(crate) fn write_joined<W: Write>(out: &mut W, args: &[&dyn Display]) -> fmt::Result {
    for (index, arg) in args.iter().enumerate() {
        if index > 0 {
            out.write_char(' ')?;
        }
        write!(out, "{arg}")?;
    }
    Ok(())
}

pub(crate) fn write_spewed<W: Write>(out: &mut W, args: &[&dyn fmt::Debug]) -> fmt::Result {
    for (index, arg) in args.iter().enumerate() {
        if index > 0 {
            out.write_char(' ')?;
        }
        write!(out, "{arg:#?}")?;
    }
    Ok(())
}
