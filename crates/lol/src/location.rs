//! crates/lol/src/location.rs
//! Source location of log call sites.
//!
//! Printers resolve their call site through `#[track_caller]`, which is exact
//! and costs nothing. When a printer is configured with a non-zero stack
//! depth, or when [`loc`] is called directly, the location is read from a
//! captured [`Backtrace`] instead: frames belonging to this crate's plumbing
//! are skipped, the first foreign frame is depth 0, and each additional level
//! walks one frame further out.
//!
//! Either way the file is shortened to its last [`PATH_COMPONENTS`] path
//! components, so `crates/app/src/main.rs`, `./src/main.rs` and an absolute
//! path to the same file all render as `src/main.rs`.

use std::backtrace::Backtrace;
use std::fmt;
use std::panic::Location;

/// Returned by [`loc`] when the requested frame cannot be resolved.
pub const UNKNOWN_LOCATION: &str = "unknown";

/// Number of trailing path components kept in a rendered location.
const PATH_COMPONENTS: usize = 2;

const INTERNAL_MODULES: [&str; 4] = [
    concat!(env!("CARGO_CRATE_NAME"), "::location::"),
    concat!(env!("CARGO_CRATE_NAME"), "::printer::"),
    concat!(env!("CARGO_CRATE_NAME"), "::null::"),
    concat!(env!("CARGO_CRATE_NAME"), "::bundle::"),
];

/// Returns `"file:line"` for the frame `skip` levels above the caller.
///
/// `loc(0)` names the line that called `loc`, `loc(1)` the line that called
/// that function, and so on. Frames that do not exist or carry no debug
/// information yield [`UNKNOWN_LOCATION`]. The file keeps its last two path
/// components, so `crates/app/src/main.rs` renders as `src/main.rs`.
#[must_use]
#[inline(never)]
pub fn loc(skip: usize) -> String {
    resolve(skip).unwrap_or_else(|| UNKNOWN_LOCATION.to_owned())
}

/// Renders a tracked call site the same way [`loc`] renders frames.
pub(crate) fn tracked(location: &Location<'_>) -> String {
    site(location.file(), location.line())
}

/// Renders `file:line` with the file shortened by [`short_path`].
pub(crate) fn site(file: &str, line: u32) -> String {
    SiteRef {
        file: short_path(file),
        line,
    }
    .to_string()
}

/// Keeps the last [`PATH_COMPONENTS`] components of `path`, accepting both
/// separators.
pub(crate) fn short_path(path: &str) -> &str {
    let mut cut = path.len();
    for _ in 0..PATH_COMPONENTS {
        match path[..cut].rfind(|c: char| c == '/' || c == '\\') {
            Some(at) => cut = at,
            None => return path,
        }
    }
    &path[cut + 1..]
}

#[inline(never)]
pub(crate) fn resolve(skip: usize) -> Option<String> {
    let trace = Backtrace::force_capture().to_string();
    let frames = parse_frames(&trace);

    let first_internal = frames.iter().position(|frame| is_internal(&frame.name))?;
    let frame = frames[first_internal..]
        .iter()
        .skip_while(|frame| is_internal(&frame.name))
        .nth(skip)?;

    let file = frame.file.as_deref()?;
    Some(site(file, frame.line?))
}

struct SiteRef<'a> {
    file: &'a str,
    line: u32,
}

impl fmt::Display for SiteRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

#[derive(Debug, Default)]
struct Frame {
    name: String,
    file: Option<String>,
    line: Option<u32>,
}

/// Splits the `Display` form of a backtrace into symbol entries.
///
/// Each entry is a `N: symbol` line optionally followed by an
/// `at path:line:column` line.
fn parse_frames(trace: &str) -> Vec<Frame> {
    let mut frames: Vec<Frame> = Vec::new();
    for raw in trace.lines() {
        let line = raw.trim_start();
        if let Some(rest) = line.strip_prefix("at ") {
            if let Some(frame) = frames.last_mut() {
                let (file, lineno) = split_path(rest);
                frame.file = Some(file.to_owned());
                frame.line = lineno;
            }
            continue;
        }
        if let Some((index, name)) = line.split_once(": ") {
            if !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()) {
                frames.push(Frame {
                    name: name.to_owned(),
                    ..Frame::default()
                });
            }
        }
    }
    frames
}

/// Splits `path:line:column` from the right so drive letters survive.
fn split_path(raw: &str) -> (&str, Option<u32>) {
    let mut parts = raw.rsplitn(3, ':');
    let column = parts.next();
    let line = parts.next();
    match (parts.next(), line, column) {
        (Some(path), Some(line), Some(_)) => (path, line.parse().ok()),
        _ => match raw.rsplit_once(':') {
            Some((path, line)) => (path, line.parse().ok()),
            None => (raw, None),
        },
    }
}

fn is_internal(symbol: &str) -> bool {
    !symbol.contains("::tests::") && INTERNAL_MODULES.iter().any(|module| mentions(symbol, module))
}

/// Matches `path` only where it starts a path segment, so `mylol::printer::`
/// does not count as `lol::printer::`.
fn mentions(symbol: &str, path: &str) -> bool {
    symbol.match_indices(path).any(|(at, _)| {
        symbol[..at]
            .chars()
            .next_back()
            .is_none_or(|c| !(c.is_alphanumeric() || c == '_'))
    })
}
