//! crates/lol/src/config.rs
//! Logging configuration loaded from the environment or a serde document.

use std::sync::Arc;

use crate::level::Severity;
use crate::printer::Printer;
use crate::state;

/// Environment variable holding the threshold name.
pub const LEVEL_VAR: &str = "LOL_LEVEL";
/// Environment variable holding the printer stack depth.
pub const DEPTH_VAR: &str = "LOL_DEPTH";
/// Environment variable enabling timestamps.
pub const TIMESTAMPS_VAR: &str = "LOL_TIMESTAMPS";

/// Threshold and render options for a bundle.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Threshold name applied by [`Config::apply`]; `None` leaves it alone.
    pub level: Option<String>,
    /// Stack depth given to every printer.
    pub depth: usize,
    /// Prefix lines with the wall-clock time.
    pub timestamps: bool,
    /// Terminate composed lines with a newline.
    pub newline: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: None,
            depth: 0,
            timestamps: false,
            newline: true,
        }
    }
}

impl Config {
    /// Reads [`LEVEL_VAR`], [`DEPTH_VAR`] and [`TIMESTAMPS_VAR`].
    ///
    /// Unset variables keep their defaults. A depth that is not an unsigned
    /// integer is ignored.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup<F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(level) = lookup(LEVEL_VAR) {
            config.level = Some(level.trim().to_owned());
        }
        if let Some(depth) = lookup(DEPTH_VAR).and_then(|raw| raw.trim().parse().ok()) {
            config.depth = depth;
        }
        if let Some(raw) = lookup(TIMESTAMPS_VAR) {
            config.timestamps = parse_switch(&raw);
        }
        config
    }

    /// Sets the process threshold when a level is configured.
    ///
    /// Names go through [`set_by_name`](crate::set_by_name), so an
    /// unrecognised name selects [`Severity::Trace`].
    pub fn apply(&self) {
        if let Some(level) = &self.level {
            state::set_by_name(level);
        }
    }

    /// Builds a printer for `severity` carrying these render options.
    #[must_use]
    pub fn printer<S: ?Sized>(&self, severity: Severity, sink: Arc<S>) -> Printer<S> {
        Printer::new(severity, sink, self.depth)
            .with_timestamps(self.timestamps)
            .with_newline(self.newline)
    }
}

fn parse_switch(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
