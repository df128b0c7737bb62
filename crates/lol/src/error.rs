//! crates/lol/src/error.rs
//! Error values produced by the crate.

/// Error returned by [`Print::err`](crate::Print::err) and the
/// [`errorf!`](crate::errorf) macro.
///
/// The error carries exactly the rendered message; its `Display` output is
/// that message with no prefix, severity or location.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    message: String,
}

impl Error {
    /// Creates an error carrying `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the carried message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the error and returns the message.
    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}

/// Error returned when a string is not one of the canonical level names.
///
/// Only the strict [`FromStr`](std::str::FromStr) parser reports it;
/// [`level_of`](crate::level_of) and [`set_by_name`](crate::set_by_name)
/// fall back to a default severity instead.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unrecognised log level {name:?}")]
pub struct ParseSeverityError {
    name: String,
}

impl ParseSeverityError {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }

    /// Returns the rejected input.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
