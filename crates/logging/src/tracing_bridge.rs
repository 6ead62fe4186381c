//! crates/logging/src/tracing_bridge.rs
//! Bridge from the tracing crate to tagged loggers.
//!
//! [`TaggedLayer`] is a `tracing-subscriber` layer that hands every event to
//! the logger tagged with the event's target. Events keep the standard
//! `tracing` macros usable while output follows the logger's threshold,
//! styling and console.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{LoggerFactory, init_tracing};
//!
//! let factory = LoggerFactory::from_env()?;
//! init_tracing(factory)?;
//!
//! tracing::info!(target: "db", "connected");
//! tracing::warn!(target: "db", retries = 3, "slow query");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, PoisonError};

use tracing::Subscriber;
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::factory::LoggerFactory;
use crate::levels::Level;
use crate::logger::Logger;

/// A tracing layer writing events through tagged loggers.
///
/// One logger is created per distinct event target and reused afterwards.
pub struct TaggedLayer {
    factory: LoggerFactory,
    loggers: Mutex<HashMap<String, Logger>>,
}

impl TaggedLayer {
    /// Creates a layer whose loggers come from `factory`.
    #[must_use]
    pub fn new(factory: LoggerFactory) -> Self {
        Self {
            factory,
            loggers: Mutex::new(HashMap::new()),
        }
    }

    /// Map a tracing level to a severity level.
    #[must_use]
    pub const fn level_for(level: &tracing::Level) -> Level {
        match *level {
            tracing::Level::TRACE => Level::Silly,
            tracing::Level::DEBUG => Level::Debug,
            tracing::Level::INFO => Level::Info,
            tracing::Level::WARN => Level::Warn,
            tracing::Level::ERROR => Level::Error,
        }
    }

    fn logger_for(&self, target: &str) -> Logger {
        let mut loggers = self.loggers.lock().unwrap_or_else(PoisonError::into_inner);
        loggers
            .entry(target.to_owned())
            .or_insert_with(|| self.factory.logger(target))
            .clone()
    }
}

impl fmt::Debug for TaggedLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedLayer")
            .field("factory", &self.factory)
            .finish_non_exhaustive()
    }
}

impl<S> Layer<S> for TaggedLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Self::level_for(metadata.level());

        // Threshold check before touching the logger cache.
        if !level.passes(self.factory.config().threshold()) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let message = visitor.finish();

        self.logger_for(metadata.target()).at(level).call(&[&message]);
    }
}

/// Visitor collecting the event message followed by `key=value` fields.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
    fields: String,
}

impl MessageVisitor {
    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        self.fields.push_str(&format!("{name}={value}"));
    }

    fn finish(self) -> String {
        match (self.message, self.fields.is_empty()) {
            (Some(message), true) => message,
            (Some(message), false) => format!("{message} {}", self.fields),
            (None, _) => self.fields,
        }
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        } else {
            self.push_field(field.name(), format_args!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        } else {
            self.push_field(field.name(), format_args!("{value:?}"));
        }
    }
}

/// Installs a global subscriber routing events through `factory`'s loggers.
///
/// # Errors
///
/// Fails when a global subscriber is already installed.
pub fn init_tracing(factory: LoggerFactory) -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(TaggedLayer::new(factory))
        .try_init()
}

/// Like [`init_tracing`], with an extra filter layer in front.
///
/// # Example
///
/// ```rust,ignore
/// use logging::{LoggerFactory, init_tracing_with_filter};
/// use tracing_subscriber::filter::Targets;
///
/// let factory = LoggerFactory::from_env()?;
/// let filter = Targets::new().with_target("db", tracing::Level::DEBUG);
/// init_tracing_with_filter(factory, filter)?;
/// ```
///
/// # Errors
///
/// Fails when a global subscriber is already installed.
pub fn init_tracing_with_filter<F>(factory: LoggerFactory, filter: F) -> Result<(), TryInitError>
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(TaggedLayer::new(factory))
        .try_init()
}
