//! Integration tests for threshold gating.
//!
//! These tests verify that a logger's threshold decides which level
//! methods write to the console, and which stream each level lands on.

use std::sync::Arc;

use logging::{Level, LogConfig, Logger, LoggerFactory, rank_of, should_log};
use logging_sink::{CaptureConsole, Stream};

fn capture(threshold: Level) -> (Arc<CaptureConsole>, Logger) {
    let console = Arc::new(CaptureConsole::new());
    let logger = LoggerFactory::new(LogConfig::from_level(threshold))
        .with_console(console.clone())
        .logger("gate");
    (console, logger)
}

// ============================================================================
// Gate Function Tests
// ============================================================================

/// Verifies should_log agrees with rank comparison for every pair of levels.
#[test]
fn should_log_matches_rank_comparison_for_all_pairs() {
    let mut checked = 0;
    for call in Level::ALL {
        for threshold in Level::ALL {
            assert_eq!(
                should_log(call, threshold),
                call.rank() >= threshold.rank(),
                "call={call} threshold={threshold}"
            );
            checked += 1;
        }
    }
    assert_eq!(checked, 49);
}

/// Verifies rank_of follows the documented order.
#[test]
fn rank_of_returns_contiguous_ranks() {
    let names = ["silly", "verbose", "debug", "info", "warn", "error", "wtf"];
    for (index, name) in names.iter().enumerate() {
        assert_eq!(rank_of(name), Ok(u8::try_from(index + 1).expect("small")));
    }
}

/// Verifies rank_of names the valid set in its error.
#[test]
fn rank_of_rejects_unknown_names() {
    let error = rank_of("fatal").expect_err("not a level");
    assert!(error.to_string().contains("silly, verbose, debug, info, warn, error, wtf"));
}

// ============================================================================
// Logger Gating Tests
// ============================================================================

/// Verifies each logger writes exactly the levels at or above its threshold.
#[test]
fn logger_writes_levels_at_or_above_threshold() {
    for threshold in Level::ALL {
        let (console, logger) = capture(threshold);
        for level in Level::ALL {
            logger.at(level).call(&[&level]);
        }
        let expected = Level::ALL
            .iter()
            .filter(|level| level.rank() >= threshold.rank())
            .count();
        assert_eq!(console.len(), expected, "threshold={threshold}");
    }
}

/// Verifies enabled reflects the gate without writing anything.
#[test]
fn enabled_does_not_write() {
    let (console, logger) = capture(Level::Debug);
    assert!(!logger.enabled(Level::Verbose));
    assert!(logger.enabled(Level::Debug));
    assert!(logger.info.enabled());
    assert!(console.is_empty());
}

/// Verifies a silly threshold lets error through exactly once, to stderr.
#[test]
fn silly_threshold_writes_error_once_to_error_stream() {
    let (console, logger) = capture(Level::Silly);
    logger.error.call(&[&"msg"]);
    assert_eq!(console.len(), 1);
    assert_eq!(console.count(Stream::Error), 1);
}

/// Verifies a wtf threshold suppresses error entirely.
#[test]
fn wtf_threshold_suppresses_error() {
    let (console, logger) = capture(Level::Wtf);
    logger.error.call(&[&"msg"]);
    assert!(console.is_empty());
}

// ============================================================================
// Stream Routing Tests
// ============================================================================

/// Verifies the stream for each level.
#[test]
fn levels_route_to_their_streams() {
    let (console, logger) = capture(Level::Silly);
    for level in Level::ALL {
        logger.at(level).call(&[&"x"]);
    }
    assert_eq!(console.count(Stream::Log), 4);
    assert_eq!(console.count(Stream::Warn), 1);
    assert_eq!(console.count(Stream::Error), 2);
}
