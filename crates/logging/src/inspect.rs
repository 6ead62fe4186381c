//! crates/logging/src/inspect.rs
//! Human-readable rendering of structured values with a nesting limit.

use serde::Serialize;
use serde_json::{Map, Value};

/// Line width past which a container is broken onto several lines.
pub const DEFAULT_LINE_WIDTH: usize = 72;

/// Depth ceiling applied when no limit is requested.
const UNLIMITED_DEPTH: usize = 64;

const INDENT: &str = "  ";

/// Renders a value for a log line.
///
/// `None` stands for a value that does not exist at all (as opposed to an
/// explicit `null`). `depth` limits how many levels of nested containers are
/// expanded below the top one; `None` means unlimited.
pub trait Inspect: Send + Sync {
    /// Renders `value` to text.
    fn render(&self, value: Option<&Value>, depth: Option<usize>) -> String;
}

/// Default [`Inspect`] implementation.
///
/// ```
/// use logging::{Inspect, Inspector};
/// use serde_json::json;
///
/// let inspector = Inspector::new();
/// let value = json!({"a": 1, "b": {"c": [1, 2]}});
/// assert_eq!(inspector.render(Some(&value), Some(1)), "{ a: 1, b: { c: [Array] } }");
/// assert_eq!(inspector.render(None, None), "undefined");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Inspector {
    line_width: usize,
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

impl Inspector {
    /// Inspector breaking lines at [`DEFAULT_LINE_WIDTH`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
        }
    }

    /// Inspector breaking lines at `line_width` columns.
    #[must_use]
    pub const fn with_line_width(line_width: usize) -> Self {
        Self { line_width }
    }

    /// Configured line width.
    #[must_use]
    pub const fn line_width(&self) -> usize {
        self.line_width
    }

    fn render_nested(&self, value: &Value, remaining: usize, indent: usize) -> String {
        match value {
            Value::String(text) => quote(text),
            Value::Array(items) => self.render_array(items, remaining, indent),
            Value::Object(entries) => self.render_object(entries, remaining, indent),
            scalar => scalar.to_string(),
        }
    }

    fn render_child(&self, value: &Value, remaining: usize, indent: usize) -> String {
        match value {
            Value::Array(items) if !items.is_empty() && remaining == 0 => "[Array]".to_owned(),
            Value::Object(entries) if !entries.is_empty() && remaining == 0 => {
                "[Object]".to_owned()
            }
            other => self.render_nested(other, remaining.saturating_sub(1), indent),
        }
    }

    fn render_array(&self, items: &[Value], remaining: usize, indent: usize) -> String {
        if items.is_empty() {
            return "[]".to_owned();
        }
        let parts: Vec<String> = items
            .iter()
            .map(|item| self.render_child(item, remaining, indent + 1))
            .collect();
        self.layout(&parts, ('[', ']'), indent)
    }

    fn render_object(&self, entries: &Map<String, Value>, remaining: usize, indent: usize) -> String {
        if entries.is_empty() {
            return "{}".to_owned();
        }
        let parts: Vec<String> = entries
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}: {}",
                    render_key(key),
                    self.render_child(value, remaining, indent + 1)
                )
            })
            .collect();
        self.layout(&parts, ('{', '}'), indent)
    }

    fn layout(&self, parts: &[String], (open, close): (char, char), indent: usize) -> String {
        let one_line = format!("{open} {} {close}", parts.join(", "));
        let fits = INDENT.len() * indent + one_line.chars().count() <= self.line_width;
        if fits && !one_line.contains('\n') {
            return one_line;
        }

        let inner = INDENT.repeat(indent + 1);
        let mut text = String::new();
        text.push(open);
        text.push('\n');
        for (index, part) in parts.iter().enumerate() {
            text.push_str(&inner);
            text.push_str(part);
            if index + 1 < parts.len() {
                text.push(',');
            }
            text.push('\n');
        }
        text.push_str(&INDENT.repeat(indent));
        text.push(close);
        text
    }
}

impl Inspect for Inspector {
    fn render(&self, value: Option<&Value>, depth: Option<usize>) -> String {
        let Some(value) = value else {
            return "undefined".to_owned();
        };
        let depth = depth.unwrap_or(UNLIMITED_DEPTH).min(UNLIMITED_DEPTH);
        match value {
            Value::String(text) => text.clone(),
            other => self.render_nested(other, depth, 0),
        }
    }
}

/// Serializes `value` and renders it with `inspector`.
///
/// Values that cannot be represented as data (a map with non-string keys,
/// a failing `Serialize` impl) render as `[uninspectable: <reason>]`.
///
/// ```
/// use logging::{Inspector, inspect_value};
///
/// let inspector = Inspector::new();
/// assert_eq!(inspect_value(&inspector, Some(&vec![1, 2]), None), "[ 1, 2 ]");
/// assert_eq!(inspect_value::<str>(&inspector, Some("plain"), None), "plain");
/// assert_eq!(inspect_value::<u8>(&inspector, None, None), "undefined");
/// ```
pub fn inspect_value<T>(inspector: &dyn Inspect, value: Option<&T>, depth: Option<usize>) -> String
where
    T: Serialize + ?Sized,
{
    match value.map(serde_json::to_value) {
        None => inspector.render(None, depth),
        Some(Ok(value)) => inspector.render(Some(&value), depth),
        Some(Err(error)) => format!("[uninspectable: {error}]"),
    }
}

fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('\'');
    for ch in text.chars() {
        match ch {
            '\'' => quoted.push_str("\\'"),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            ch if ch.is_control() => {
                quoted.push_str(&format!("\\u{{{:x}}}", u32::from(ch)));
            }
            ch => quoted.push(ch),
        }
    }
    quoted.push('\'');
    quoted
}

fn render_key(key: &str) -> String {
    if is_identifier(key) {
        key.to_owned()
    } else {
        quote(key)
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '$')
}
