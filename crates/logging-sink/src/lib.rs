#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` owns the output side of the workspace: the
//! [`ConsoleRecord`] a logger produces for each gated call, the [`Stream`] it
//! is routed to, and the [`Console`] implementations that deliver it.
//!
//! # Design
//!
//! - [`MessageSink`] wraps any [`std::io::Write`] implementor and renders a
//!   record's text form, optionally followed by a newline ([`LineMode`]).
//! - [`StdConsole`] routes [`Stream::Log`] to stdout and the warning and
//!   error streams to stderr.
//! - [`CaptureConsole`] keeps records in memory.
//! - `WebConsole` (wasm32 only) forwards records to `console.log`,
//!   `console.warn` and `console.error`, passing CSS for `%c` tokens.
//!
//! # Invariants
//!
//! - One logger call produces at most one [`Console::emit`].
//! - Consoles never panic and never surface write errors.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{CaptureConsole, Console, ConsoleRecord, Stream};
//!
//! let console = CaptureConsole::new();
//! console.emit(&ConsoleRecord::new(Stream::Error, "[io]", vec!["disk full".into()]));
//! assert_eq!(console.lines(), vec!["[io] disk full"]);
//! ```

mod console;
mod line_mode;
mod record;
mod sink;
#[cfg(target_arch = "wasm32")]
mod web;

pub use console::{CaptureConsole, Console, StdConsole};
pub use line_mode::LineMode;
pub use record::{ConsoleRecord, Emphasis, Stream};
pub use sink::MessageSink;
#[cfg(target_arch = "wasm32")]
pub use web::WebConsole;
