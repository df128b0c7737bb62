//! crates/lol/src/tracing_bridge.rs
//! Bridge between the tracing crate and the level gate.
//!
//! [`LolLayer`] is a tracing-subscriber layer that renders events with the
//! same printers a [`Log`](crate::Log) bundle uses, so `tracing::warn!` and
//! `log.warn.ln(..)` produce identical lines and obey the same threshold.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! lol::init_tracing(Arc::new(std::io::stderr()))?;
//! tracing::info!(port = 8080, "listening");
//! ```

use std::fmt::{self, Write};
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::bundle::{self, Log};
use crate::config::Config;
use crate::level::Severity;
use crate::location::{self, UNKNOWN_LOCATION};
use crate::printer::Printer;
use crate::sink::Sink;
use crate::state;

impl From<Level> for Severity {
    fn from(level: Level) -> Self {
        match level {
            Level::ERROR => Self::Error,
            Level::WARN => Self::Warn,
            Level::INFO => Self::Info,
            Level::DEBUG => Self::Debug,
            Level::TRACE => Self::Trace,
        }
    }
}

/// A tracing layer that writes events through per-severity printers.
///
/// Events are gated against the live threshold and attributed to the file
/// and line recorded in their metadata.
pub struct LolLayer<S: ?Sized> {
    log: Log<Printer<S>>,
}

impl<S> LolLayer<S>
where
    S: Sink + ?Sized,
{
    /// Creates a layer writing to `sink` with default render options.
    #[must_use]
    pub fn new(sink: Arc<S>) -> Self {
        Self {
            log: bundle::new(sink, 0).0,
        }
    }

    /// Creates a layer honouring the render options of `config`.
    #[must_use]
    pub fn with_config(sink: Arc<S>, config: &Config) -> Self {
        Self {
            log: bundle::with_config(sink, config).0,
        }
    }

    /// Creates a layer from an existing bundle.
    #[must_use]
    pub const fn from_log(log: Log<Printer<S>>) -> Self {
        Self { log }
    }
}

impl<S, Sub> Layer<Sub> for LolLayer<S>
where
    S: Sink + ?Sized + 'static,
    Sub: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, Sub>) {
        let metadata = event.metadata();
        let severity = Severity::from(*metadata.level());
        // Interest is never cached as `never`, so the live threshold decides here.
        if !state::enabled(severity) {
            return;
        }
        let Some(printer) = self.log.get(severity) else {
            return;
        };

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let site = match (metadata.file(), metadata.line()) {
            (Some(file), Some(line)) => location::site(file, line),
            _ => UNKNOWN_LOCATION.to_owned(),
        };
        printer.write_at(&site, |out| visitor.render(out));
    }
}

/// Collects the `message` field and any other fields of an event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
    fields: Vec<(&'static str, String)>,
}

impl MessageVisitor {
    fn render(&self, out: &mut String) -> fmt::Result {
        let mut first = true;
        if let Some(message) = &self.message {
            out.push_str(message);
            first = false;
        }
        for (name, value) in &self.fields {
            if !first {
                out.push(' ');
            }
            write!(out, "{name}={value}")?;
            first = false;
        }
        Ok(())
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        } else {
            self.fields.push((field.name(), format!("{value:?}")));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        } else {
            self.fields.push((field.name(), value.to_owned()));
        }
    }
}

/// Installs a registry with a [`LolLayer`] as the global default subscriber.
///
/// Fails if a global subscriber is already set.
pub fn init_tracing<S>(sink: Arc<S>) -> Result<(), TryInitError>
where
    S: Sink + ?Sized + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LolLayer::new(sink))
        .try_init()
}

/// Installs a registry with `filter` in front of a [`LolLayer`].
///
/// The filter can only narrow what the threshold already admits.
///
/// ```rust,ignore
/// use tracing_subscriber::EnvFilter;
///
/// lol::init_tracing_with_filter(Arc::new(std::io::stderr()), EnvFilter::from_default_env())?;
/// ```
pub fn init_tracing_with_filter<S, F>(sink: Arc<S>, filter: F) -> Result<(), TryInitError>
where
    S: Sink + ?Sized + 'static,
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(LolLayer::new(sink))
        .try_init()
}
