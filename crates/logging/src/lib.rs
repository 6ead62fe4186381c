#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` hands out small tagged loggers with seven severity levels,
//! `silly` through `wtf`. Each logger writes a styled, fixed-width tag in
//! front of its arguments and suppresses calls below a threshold chosen once
//! at startup, usually from the `LOG_LEVEL` environment variable.
//!
//! # Design
//!
//! A [`LogConfig`] fixes the threshold, the rendering environment (terminal
//! or browser) and the color mode. A [`LoggerFactory`] turns that into a
//! tag styler and a console, then builds [`Logger`]s on demand. A logger is a
//! capability struct: one public [`LevelMethod`] field per level, each with
//! `call`, `thru` and `inspect`. The tag is rendered when the logger is
//! created, never per call.
//!
//! Output goes through the [`Console`](logging_sink::Console) trait so hosts
//! and tests can capture records, and values are rendered for `inspect` by
//! an injectable [`Inspect`] implementation.
//!
//! # Invariants
//!
//! - A call is emitted iff `call.rank() >= threshold.rank()`.
//! - `call` returns its last argument whether or not it was emitted; `thru`
//!   returns its value unchanged.
//! - No logger method panics or reports an error. Console write failures are
//!   dropped and uninspectable values degrade to a placeholder.
//! - `warn` writes to the warning stream; `error` and `wtf` to the error
//!   stream; everything else to the standard stream.
//!
//! # Errors
//!
//! Only configuration can fail: [`LogConfig::new`], [`LogConfig::from_env`]
//! and [`LoggerFactory::from_level_name`] return [`ConfigError`] for names
//! outside the known set.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use logging::{LogConfig, LoggerFactory, emit};
//! use logging_sink::{CaptureConsole, Stream};
//!
//! let console = Arc::new(CaptureConsole::new());
//! let factory = LoggerFactory::new(LogConfig::new("warn").expect("known level"))
//!     .with_console(console.clone());
//! let log = factory.logger("mod");
//!
//! log.info.call(&[&"skipped"]);
//! log.warn.call(&[&"written"]);
//! let port = log.error.thru(&[&"falling back to"], 8080);
//! emit!(log.wtf, "unreachable", port);
//!
//! assert_eq!(port, 8080);
//! assert_eq!(console.count(Stream::Warn), 1);
//! assert_eq!(console.count(Stream::Error), 2);
//! assert!(console.lines().iter().all(|line| line.contains("mod")));
//! ```
//!
//! # Features
//!
//! - `tracing`: [`TaggedLayer`] and `init_tracing*` route `tracing` events
//!   through loggers tagged with the event target.

mod config;
mod error;
mod factory;
mod inspect;
mod levels;
mod logger;

#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{ColorMode, LogConfig};
pub use error::{ConfigError, VALID_COLOR_MODES, VALID_LEVELS};
pub use factory::LoggerFactory;
pub use inspect::{DEFAULT_LINE_WIDTH, Inspect, Inspector, inspect_value};
pub use levels::{Level, rank_of, should_log};
pub use logger::{LevelMethod, Logger, SEVERE_MARKER};

#[cfg(feature = "tracing")]
pub use tracing_bridge::{TaggedLayer, init_tracing, init_tracing_with_filter};
