//! Integration tests for edge cases of logger calls.
//!
//! Covers pass-through return values, empty argument lists, inspection of
//! missing values, and tags that are long or contain wide characters.

use std::sync::Arc;

use logging::{ColorMode, Level, LogConfig, Logger, LoggerFactory, emit};
use logging_sink::{CaptureConsole, Emphasis, Stream};
use serde::Serialize;
use serde_json::json;

fn capture(threshold: Level) -> (Arc<CaptureConsole>, Logger) {
    let console = Arc::new(CaptureConsole::new());
    let logger = LoggerFactory::new(LogConfig::from_level(threshold).with_color(ColorMode::Never))
        .with_console(console.clone())
        .logger("edge");
    (console, logger)
}

// ============================================================================
// Pass-through Tests
// ============================================================================

/// Verifies call returns the last argument when the call is emitted.
#[test]
fn call_returns_last_argument_when_emitted() {
    let (console, logger) = capture(Level::Info);
    let last = logger.info.call(&[&"a", &"b", &"c"]).map(ToString::to_string);
    assert_eq!(last.as_deref(), Some("c"));
    assert_eq!(console.len(), 1);
}

/// Verifies call returns the last argument when the call is suppressed.
#[test]
fn call_returns_last_argument_when_suppressed() {
    let (console, logger) = capture(Level::Wtf);
    let last = logger.info.call(&[&"a", &"b", &"c"]).map(ToString::to_string);
    assert_eq!(last.as_deref(), Some("c"));
    assert!(console.is_empty());
}

/// Verifies thru returns non-Display values untouched.
#[test]
fn thru_passes_any_value_through() {
    let (console, logger) = capture(Level::Info);
    let items = logger.info.thru(&[&"loaded", &3, &"items"], vec!["x", "y", "z"]);
    assert_eq!(items, vec!["x", "y", "z"]);
    assert!(console.lines()[0].ends_with("loaded 3 items"));
}

/// Verifies emit! returns None for an empty argument list.
#[test]
fn emit_without_arguments_returns_none() {
    let (console, logger) = capture(Level::Info);
    assert!(emit!(logger.info).is_none());
    assert_eq!(console.records()[0].args.len(), 0);
}

// ============================================================================
// Inspection Tests
// ============================================================================

/// Verifies an explicit null renders as null.
#[test]
fn inspect_null_returns_null() {
    let (_, logger) = capture(Level::Info);
    assert_eq!(logger.inspect(None, Some(&json!(null))), "null");
    assert_eq!(logger.inspect(None, Some(&Option::<u8>::None)), "null");
}

/// Verifies a missing value renders as undefined.
#[test]
fn inspect_missing_returns_undefined() {
    let (console, logger) = capture(Level::Info);
    assert_eq!(logger.inspect::<serde_json::Value>(Some("value"), None), "undefined");
    assert!(console.lines()[0].ends_with("value undefined"));
}

/// Verifies derived Serialize types render as objects.
#[test]
fn inspect_renders_serializable_structs() {
    #[derive(Serialize)]
    struct Job {
        id: u32,
        tags: Vec<&'static str>,
    }

    let (_, logger) = capture(Level::Info);
    let text = logger.info.inspect(None, Some(&Job { id: 7, tags: vec!["a"] }));
    assert_eq!(text, "{ id: 7, tags: [ 'a' ] }");
}

/// Verifies a failing Serialize impl degrades instead of panicking.
#[test]
fn inspect_degrades_on_serialization_failure() {
    struct Refuses;

    impl Serialize for Refuses {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("no"))
        }
    }

    let (console, logger) = capture(Level::Info);
    let text = logger.warn.inspect(None, Some(&Refuses));
    assert_eq!(text, "[uninspectable: no]");
    assert_eq!(console.count(Stream::Warn), 1);
}

// ============================================================================
// Tag Tests
// ============================================================================

/// Verifies a tag longer than the pad width is written unpadded.
#[test]
fn long_tags_are_not_truncated() {
    let console = Arc::new(CaptureConsole::new());
    let tag = "a-very-long-module-name-indeed";
    let logger = LoggerFactory::new(LogConfig::default().with_color(ColorMode::Never))
        .with_console(console.clone())
        .logger(tag);
    logger.info.call(&[&"x"]);
    assert_eq!(console.records()[0].format, format!("[{tag}]"));
}

/// Verifies wide characters count as two columns when padding.
#[test]
fn wide_tags_pad_by_display_width() {
    let console = Arc::new(CaptureConsole::new());
    let logger = LoggerFactory::new(LogConfig::default().with_color(ColorMode::Never))
        .with_console(console.clone())
        .with_pad_width(10)
        .logger("日本");
    logger.info.call(&[]);
    // "[日本]" is six columns wide.
    assert_eq!(console.records()[0].format, "[日本]    ");
}

/// Verifies wtf stays a single severe record on the error stream.
#[test]
fn wtf_is_one_severe_write() {
    let (console, logger) = capture(Level::Wtf);
    logger.wtf.call(&[&"how"]);
    let records = console.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].stream, Stream::Error);
    assert_eq!(records[0].emphasis, Emphasis::Severe);
    assert!(records[0].format.starts_with("!!! WTF !!! [edge]"));
}
