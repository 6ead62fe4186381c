//! crates/style/src/tag.rs
//! Fixed-width, optionally colorized log prefixes.

use serde_json::Value;
use thiserror::Error;
use unicode_width::UnicodeWidthStr;

use crate::paint::Paint;
use crate::styler::ansi_wrap;

/// Visible width tags are padded to unless told otherwise.
pub const DEFAULT_PAD_WIDTH: usize = 20;

/// Second argument of [`build_tag`].
///
/// A number reinterprets the argument as the pad width and skips styling;
/// a paint wraps the label in escape sequences; `None` leaves it as is.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Colorizer {
    /// Label used unmodified.
    #[default]
    None,
    /// Label wrapped in the paint's escape sequences.
    Paint(Paint),
    /// Label unstyled, padded to this width.
    Width(usize),
}

impl From<Paint> for Colorizer {
    fn from(paint: Paint) -> Self {
        Self::Paint(paint)
    }
}

impl From<&Paint> for Colorizer {
    fn from(paint: &Paint) -> Self {
        Self::Paint(*paint)
    }
}

impl From<Option<Paint>> for Colorizer {
    fn from(paint: Option<Paint>) -> Self {
        paint.map_or(Self::None, Self::Paint)
    }
}

impl From<usize> for Colorizer {
    fn from(width: usize) -> Self {
        Self::Width(width)
    }
}

/// Error raised when a tag cannot be built from loosely-typed input.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TagError {
    /// The label was not a string.
    #[error("tag label must be a string, found {found}")]
    InvalidInput {
        /// JSON kind of the rejected label.
        found: &'static str,
    },
    /// The colorizer was neither a style composition nor a pad width.
    #[error("colorizer must be a style composition or a pad width: {reason}")]
    InvalidColorizer {
        /// What was wrong with it.
        reason: String,
    },
}

/// Builds a tag padded to [`DEFAULT_PAD_WIDTH`] visible columns.
///
/// ```
/// use style::{Colorizer, build_tag};
///
/// let tag = build_tag("test-name", Colorizer::None);
/// assert_eq!(tag, "test-name           ");
///
/// // A number in the colorizer position is the pad width.
/// assert_eq!(build_tag("test-name", 12_usize).len(), 12);
/// ```
#[must_use]
pub fn build_tag(label: &str, colorizer: impl Into<Colorizer>) -> String {
    build_tag_with_width(label, colorizer, DEFAULT_PAD_WIDTH)
}

/// Builds a tag padded to `pad_width` visible columns.
///
/// With a paint, the escape sequences do not count against the width: the
/// result is `pad_width` columns wide on screen and `pad_width` plus the
/// control bytes long. A [`Colorizer::Width`] overrides `pad_width`.
#[must_use]
pub fn build_tag_with_width(label: &str, colorizer: impl Into<Colorizer>, pad_width: usize) -> String {
    match colorizer.into() {
        Colorizer::None => pad_end(label, pad_width),
        Colorizer::Width(width) => pad_end(label, width),
        Colorizer::Paint(paint) => {
            let mut tag = ansi_wrap(&paint).apply(label);
            push_padding(&mut tag, label.width(), pad_width);
            tag
        }
    }
}

/// Builds a default-width tag from configuration data.
///
/// `label` must be a JSON string. `colorizer` may be absent or `null`, a
/// non-negative integer (the pad width), or a string in the style grammar
/// (see [`Paint`]); anything else is rejected.
///
/// ```
/// use serde_json::json;
/// use style::{TagError, build_tag_from_value};
///
/// assert!(build_tag_from_value(&json!("db"), Some(&json!("bold red"))).is_ok());
/// assert!(matches!(
///     build_tag_from_value(&json!(42), None),
///     Err(TagError::InvalidInput { .. })
/// ));
/// assert!(matches!(
///     build_tag_from_value(&json!("x"), Some(&json!("not-a-function"))),
///     Err(TagError::InvalidColorizer { .. })
/// ));
/// ```
pub fn build_tag_from_value(label: &Value, colorizer: Option<&Value>) -> Result<String, TagError> {
    let Value::String(label) = label else {
        return Err(TagError::InvalidInput {
            found: value_kind(label),
        });
    };

    let colorizer = match colorizer {
        None | Some(Value::Null) => Colorizer::None,
        Some(Value::Number(number)) => {
            let width = number
                .as_u64()
                .and_then(|width| usize::try_from(width).ok())
                .ok_or_else(|| TagError::InvalidColorizer {
                    reason: format!("pad width {number} is not a non-negative integer"),
                })?;
            Colorizer::Width(width)
        }
        Some(Value::String(spec)) => {
            let paint = spec
                .parse::<Paint>()
                .map_err(|error| TagError::InvalidColorizer {
                    reason: error.to_string(),
                })?;
            Colorizer::Paint(paint)
        }
        Some(other) => {
            return Err(TagError::InvalidColorizer {
                reason: format!("found {}", value_kind(other)),
            });
        }
    };

    Ok(build_tag(label, colorizer))
}

/// Appends spaces to `text` until its visible width reaches `width`. Text
/// already at or beyond the width is returned unchanged.
#[must_use]
pub fn pad_end(text: &str, width: usize) -> String {
    let mut padded = text.to_owned();
    push_padding(&mut padded, text.width(), width);
    padded
}

fn push_padding(text: &mut String, visible: usize, width: usize) {
    let missing = width.saturating_sub(visible);
    text.extend(std::iter::repeat_n(' ', missing));
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
