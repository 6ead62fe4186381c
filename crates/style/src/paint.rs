//! crates/style/src/paint.rs
//! Style descriptors: a decoration set plus optional background and foreground colors.

use ::core::str::FromStr;
use std::fmt;

use anstyle::{AnsiColor, Effects};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Text decorations a [`Paint`] can carry, in rendering order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Decoration {
    /// Heavy weight.
    Bold,
    /// Reduced intensity.
    Dim,
    /// Slanted glyphs.
    Italic,
    /// Single underline.
    Underline,
    /// Swapped foreground and background.
    Inverse,
    /// Line through the text.
    Strikethrough,
}

impl Decoration {
    /// Every decoration in rendering order.
    pub const ALL: [Self; 6] = [
        Self::Bold,
        Self::Dim,
        Self::Italic,
        Self::Underline,
        Self::Inverse,
        Self::Strikethrough,
    ];

    /// Name accepted by the style grammar.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Dim => "dim",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Inverse => "inverse",
            Self::Strikethrough => "strikethrough",
        }
    }

    pub(crate) const fn effect(self) -> Effects {
        match self {
            Self::Bold => Effects::BOLD,
            Self::Dim => Effects::DIMMED,
            Self::Italic => Effects::ITALIC,
            Self::Underline => Effects::UNDERLINE,
            Self::Inverse => Effects::INVERT,
            Self::Strikethrough => Effects::STRIKETHROUGH,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|decoration| decoration.name() == name)
    }
}

const COLORS: [(AnsiColor, &str); 16] = [
    (AnsiColor::Black, "black"),
    (AnsiColor::Red, "red"),
    (AnsiColor::Green, "green"),
    (AnsiColor::Yellow, "yellow"),
    (AnsiColor::Blue, "blue"),
    (AnsiColor::Magenta, "magenta"),
    (AnsiColor::Cyan, "cyan"),
    (AnsiColor::White, "white"),
    (AnsiColor::BrightBlack, "bright_black"),
    (AnsiColor::BrightRed, "bright_red"),
    (AnsiColor::BrightGreen, "bright_green"),
    (AnsiColor::BrightYellow, "bright_yellow"),
    (AnsiColor::BrightBlue, "bright_blue"),
    (AnsiColor::BrightMagenta, "bright_magenta"),
    (AnsiColor::BrightCyan, "bright_cyan"),
    (AnsiColor::BrightWhite, "bright_white"),
];

/// Grammar name of an ANSI color.
#[must_use]
pub fn color_name(color: AnsiColor) -> &'static str {
    COLORS
        .iter()
        .find(|(candidate, _)| *candidate == color)
        .map_or("white", |(_, name)| name)
}

fn color_from_name(name: &str) -> Option<AnsiColor> {
    match name {
        "gray" | "grey" => Some(AnsiColor::BrightBlack),
        _ => COLORS
            .iter()
            .find(|(_, candidate)| *candidate == name)
            .map(|(color, _)| *color),
    }
}

/// Error returned when a style composition string cannot be parsed.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParsePaintError {
    /// The string held no tokens.
    #[error("style composition is empty")]
    Empty,
    /// A token was neither a decoration, a color, nor a background color.
    #[error("unknown style token `{0}`")]
    UnknownToken(String),
}

/// A composable style descriptor.
///
/// A paint is a set of [`Decoration`]s plus an optional background and an
/// optional foreground color. Composition is idempotent: adding a decoration
/// twice has no further effect and a later color replaces an earlier one.
///
/// Paints are written as whitespace- or `+`-separated tokens: decoration
/// names, color names for the foreground, and `on_<color>` or `bg_<color>`
/// for the background.
///
/// ```
/// use style::{AnsiColor, Paint};
///
/// let paint: Paint = "bold+white+on_blue".parse()?;
/// assert_eq!(paint, Paint::new().bold().fg(AnsiColor::White).on(AnsiColor::Blue));
/// assert_eq!(paint.to_string(), "bold on_blue white");
/// # Ok::<(), style::ParsePaintError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Paint {
    effects: Effects,
    background: Option<AnsiColor>,
    foreground: Option<AnsiColor>,
}

impl Paint {
    /// A paint with no decoration and no colors.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            effects: Effects::new(),
            background: None,
            foreground: None,
        }
    }

    /// Adds a decoration.
    #[must_use]
    pub fn decorate(mut self, decoration: Decoration) -> Self {
        self.effects = self.effects.insert(decoration.effect());
        self
    }

    /// Adds [`Decoration::Bold`].
    #[must_use]
    pub fn bold(self) -> Self {
        self.decorate(Decoration::Bold)
    }

    /// Adds [`Decoration::Dim`].
    #[must_use]
    pub fn dim(self) -> Self {
        self.decorate(Decoration::Dim)
    }

    /// Adds [`Decoration::Italic`].
    #[must_use]
    pub fn italic(self) -> Self {
        self.decorate(Decoration::Italic)
    }

    /// Adds [`Decoration::Underline`].
    #[must_use]
    pub fn underline(self) -> Self {
        self.decorate(Decoration::Underline)
    }

    /// Adds [`Decoration::Inverse`].
    #[must_use]
    pub fn inverse(self) -> Self {
        self.decorate(Decoration::Inverse)
    }

    /// Adds [`Decoration::Strikethrough`].
    #[must_use]
    pub fn strikethrough(self) -> Self {
        self.decorate(Decoration::Strikethrough)
    }

    /// Sets the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: AnsiColor) -> Self {
        self.foreground = Some(color);
        self
    }

    /// Sets the background color.
    #[must_use]
    pub const fn on(mut self, color: AnsiColor) -> Self {
        self.background = Some(color);
        self
    }

    /// Layers `other` over `self`: decorations are unioned, colors set in
    /// `other` win.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            effects: self.effects.insert(other.effects),
            background: other.background.or(self.background),
            foreground: other.foreground.or(self.foreground),
        }
    }

    /// Decorations carried by the paint, in rendering order.
    pub fn decorations(&self) -> impl Iterator<Item = Decoration> + '_ {
        Decoration::ALL
            .into_iter()
            .filter(|decoration| self.effects.contains(decoration.effect()))
    }

    /// Whether the paint carries `decoration`.
    #[must_use]
    pub fn has(&self, decoration: Decoration) -> bool {
        self.effects.contains(decoration.effect())
    }

    /// Background color, if any.
    #[must_use]
    pub const fn background(&self) -> Option<AnsiColor> {
        self.background
    }

    /// Foreground color, if any.
    #[must_use]
    pub const fn foreground(&self) -> Option<AnsiColor> {
        self.foreground
    }

    /// Whether the paint changes nothing.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.effects.is_plain() && self.background.is_none() && self.foreground.is_none()
    }

    pub(crate) const fn effects(&self) -> Effects {
        self.effects
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens: Vec<String> = self
            .decorations()
            .map(|decoration| decoration.name().to_owned())
            .collect();
        if let Some(background) = self.background {
            tokens.push(format!("on_{}", color_name(background)));
        }
        if let Some(foreground) = self.foreground {
            tokens.push(color_name(foreground).to_owned());
        }
        f.write_str(&tokens.join(" "))
    }
}

impl FromStr for Paint {
    type Err = ParsePaintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut paint = Self::new();
        let mut seen = false;

        for token in s
            .split(|c: char| c == '+' || c.is_whitespace())
            .filter(|token| !token.is_empty())
        {
            seen = true;
            let lowered = token.to_ascii_lowercase();
            let lowered = lowered.replace('-', "_");

            if let Some(decoration) = Decoration::from_name(&lowered) {
                paint = paint.decorate(decoration);
                continue;
            }

            let background = lowered
                .strip_prefix("on_")
                .or_else(|| lowered.strip_prefix("bg_"));
            if let Some(name) = background {
                let color = color_from_name(name)
                    .ok_or_else(|| ParsePaintError::UnknownToken(token.to_owned()))?;
                paint = paint.on(color);
                continue;
            }

            let name = lowered.strip_prefix("fg_").unwrap_or(&lowered);
            let color =
                color_from_name(name).ok_or_else(|| ParsePaintError::UnknownToken(token.to_owned()))?;
            paint = paint.fg(color);
        }

        if seen { Ok(paint) } else { Err(ParsePaintError::Empty) }
    }
}

impl TryFrom<String> for Paint {
    type Error = ParsePaintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Paint> for String {
    fn from(paint: Paint) -> Self {
        paint.to_string()
    }
}
