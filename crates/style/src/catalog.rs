//! crates/style/src/catalog.rs
//! Tag descriptors and a handful of named presets.

use anstyle::AnsiColor;
use serde::{Deserialize, Serialize};

use crate::paint::Paint;

/// Prefix, suffix and style wrapped around a bare tag label.
///
/// ```
/// use style::{Paint, TagDescriptor};
///
/// let descriptor = TagDescriptor::new("[", "]", Some(Paint::new().bold()));
/// assert_eq!(descriptor.decorate("net"), "[net]");
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TagDescriptor {
    #[serde(default)]
    prefix: String,
    #[serde(default)]
    suffix: String,
    #[serde(default, rename = "style")]
    paint: Option<Paint>,
}

impl TagDescriptor {
    /// Creates a descriptor.
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>, paint: Option<Paint>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
            paint,
        }
    }

    /// Text placed before the label.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Text placed after the label.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Style applied to the decorated label.
    #[must_use]
    pub const fn paint(&self) -> Option<&Paint> {
        self.paint.as_ref()
    }

    /// Replaces the style.
    #[must_use]
    pub fn with_paint(mut self, paint: Paint) -> Self {
        self.paint = Some(paint);
        self
    }

    /// `prefix + label + suffix`, unstyled.
    #[must_use]
    pub fn decorate(&self, label: &str) -> String {
        let mut text = String::with_capacity(self.prefix.len() + label.len() + self.suffix.len());
        text.push_str(&self.prefix);
        text.push_str(label);
        text.push_str(&self.suffix);
        text
    }
}

/// Names accepted by [`by_name`], in catalog order.
pub const NAMES: [&str; 7] = [
    "plain", "brackets", "angle", "badge", "alert", "success", "muted",
];

/// Label shown as is.
#[must_use]
pub fn plain() -> TagDescriptor {
    TagDescriptor::default()
}

/// `[label]` in bold.
#[must_use]
pub fn brackets() -> TagDescriptor {
    TagDescriptor::new("[", "]", Some(Paint::new().bold()))
}

/// `<label>`, dimmed.
#[must_use]
pub fn angle() -> TagDescriptor {
    TagDescriptor::new("<", ">", Some(Paint::new().dim()))
}

/// ` label ` in bold white on blue.
#[must_use]
pub fn badge() -> TagDescriptor {
    TagDescriptor::new(
        " ",
        " ",
        Some(Paint::new().bold().on(AnsiColor::Blue).fg(AnsiColor::White)),
    )
}

/// `!label!` in bold red.
#[must_use]
pub fn alert() -> TagDescriptor {
    TagDescriptor::new("!", "!", Some(Paint::new().bold().fg(AnsiColor::Red)))
}

/// `✔ label` in green.
#[must_use]
pub fn success() -> TagDescriptor {
    TagDescriptor::new("✔ ", "", Some(Paint::new().fg(AnsiColor::Green)))
}

/// Label in dim gray.
#[must_use]
pub fn muted() -> TagDescriptor {
    TagDescriptor::new("", "", Some(Paint::new().dim().fg(AnsiColor::BrightBlack)))
}

/// Looks up a preset by name.
#[must_use]
pub fn by_name(name: &str) -> Option<TagDescriptor> {
    match name {
        "plain" => Some(plain()),
        "brackets" => Some(brackets()),
        "angle" => Some(angle()),
        "badge" => Some(badge()),
        "alert" => Some(alert()),
        "success" => Some(success()),
        "muted" => Some(muted()),
        _ => None,
    }
}
