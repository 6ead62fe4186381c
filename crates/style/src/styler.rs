//! crates/style/src/styler.rs
//! Isomorphic style resolution: ANSI escape wrapping for terminals, `%c` plus
//! CSS for browser consoles.
//!
//! The target environment is resolved once into a [`Styler`] strategy; the
//! formatting path never branches on the environment again.

use ::core::str::FromStr;
use std::fmt;

use anstyle::{AnsiColor, Reset};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::TagDescriptor;
use crate::paint::{Decoration, Paint};
use crate::tag::{Colorizer, build_tag_with_width, pad_end};

/// Where rendered output ends up.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// A terminal that understands ANSI escape sequences.
    Terminal,
    /// A browser developer console that understands `%c` CSS directives.
    Browser,
}

impl Environment {
    /// The environment the current compilation target runs in: `Browser` on
    /// `wasm32`, `Terminal` everywhere else.
    #[must_use]
    pub const fn detect() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Browser
        } else {
            Self::Terminal
        }
    }

    /// Lowercase name of the environment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::Browser => "browser",
        }
    }

    /// Resolves the styling strategy for this environment.
    ///
    /// `colors` only affects terminals; browser consoles always receive CSS.
    #[must_use]
    pub fn styler(self, colors: bool) -> Box<dyn Styler> {
        match self {
            Self::Terminal => Box::new(TerminalStyler::new(colors)),
            Self::Browser => Box::new(BrowserStyler),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::detect()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an [`Environment`] fails.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown environment `{0}`; expected terminal or browser")]
pub struct ParseEnvironmentError(String);

impl FromStr for Environment {
    type Err = ParseEnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("terminal") {
            Ok(Self::Terminal)
        } else if trimmed.eq_ignore_ascii_case("browser") {
            Ok(Self::Browser)
        } else {
            Err(ParseEnvironmentError(trimmed.to_owned()))
        }
    }
}

/// A tag rendered for a specific environment.
///
/// In a terminal `format` holds the padded tag including escape sequences
/// and `css` is `None`. In a browser `format` starts with a single `%c`
/// token immediately followed by the padded tag, and `css` holds the
/// declarations for that token.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderedTag {
    /// Text handed to the console as the first argument.
    pub format: String,
    /// CSS declarations for the `%c` token.
    pub css: Option<String>,
}

/// Environment-specific tag rendering strategy.
pub trait Styler: fmt::Debug + Send + Sync {
    /// The environment this styler renders for.
    fn environment(&self) -> Environment;

    /// Renders `descriptor` around `label`, padded to a visible width of
    /// `width` columns.
    fn render_tag(&self, descriptor: &TagDescriptor, label: &str, width: usize) -> RenderedTag;
}

/// ANSI start and end sequences for a [`Paint`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AnsiWrap {
    start: String,
    end: String,
}

impl AnsiWrap {
    /// Sequence written before the text.
    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Sequence written after the text.
    #[must_use]
    pub fn end(&self) -> &str {
        &self.end
    }

    /// Bytes added around the text.
    #[must_use]
    pub fn control_width(&self) -> usize {
        self.start.len() + self.end.len()
    }

    /// Wraps `text`.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + self.control_width());
        out.push_str(&self.start);
        out.push_str(text);
        out.push_str(&self.end);
        out
    }
}

/// Terminal strategy: wraps tags in ANSI escape sequences.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TerminalStyler {
    colors: bool,
}

impl TerminalStyler {
    /// Creates a terminal styler; with `colors` off every wrap is empty.
    #[must_use]
    pub const fn new(colors: bool) -> Self {
        Self { colors }
    }

    /// Whether escape sequences are emitted.
    #[must_use]
    pub const fn colors(&self) -> bool {
        self.colors
    }

    /// Resolves `paint` into its escape sequences.
    #[must_use]
    pub fn wrap(&self, paint: &Paint) -> AnsiWrap {
        if self.colors {
            ansi_wrap(paint)
        } else {
            AnsiWrap::default()
        }
    }
}

impl Default for TerminalStyler {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Escape sequences for `paint`: decorations first (outermost), then the
/// background, then the foreground (innermost), closed by a single reset.
/// A plain paint yields an empty wrap.
#[must_use]
pub fn ansi_wrap(paint: &Paint) -> AnsiWrap {
    if paint.is_plain() {
        return AnsiWrap::default();
    }

    let mut start = String::new();
    start.push_str(&paint.effects().render().to_string());
    if let Some(background) = paint.background() {
        start.push_str(&background.render_bg().to_string());
    }
    if let Some(foreground) = paint.foreground() {
        start.push_str(&foreground.render_fg().to_string());
    }

    AnsiWrap {
        start,
        end: Reset.render().to_string(),
    }
}

impl Styler for TerminalStyler {
    fn environment(&self) -> Environment {
        Environment::Terminal
    }

    fn render_tag(&self, descriptor: &TagDescriptor, label: &str, width: usize) -> RenderedTag {
        let text = descriptor.decorate(label);
        let colorizer = match descriptor.paint() {
            Some(paint) if self.colors => Colorizer::Paint(*paint),
            _ => Colorizer::None,
        };
        RenderedTag {
            format: build_tag_with_width(&text, colorizer, width),
            css: None,
        }
    }
}

/// Browser strategy: emits a `%c` token plus CSS declarations.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BrowserStyler;

impl BrowserStyler {
    /// Resolves `paint` for `tag` into a `(format, css)` pair. The format
    /// contains exactly one `%c`, placed immediately before the tag text;
    /// any `%` in the tag is escaped so the console prints it literally.
    #[must_use]
    pub fn directive(&self, paint: &Paint, tag: &str) -> (String, String) {
        (format!("%c{}", escape_format(tag)), css_declarations(paint))
    }
}

/// Escapes `%` as `%%` so console format substitution leaves `text` alone.
///
/// ```
/// assert_eq!(style::escape_format("100%s"), "100%%s");
/// ```
#[must_use]
pub fn escape_format(text: &str) -> String {
    text.replace('%', "%%")
}

impl Styler for BrowserStyler {
    fn environment(&self) -> Environment {
        Environment::Browser
    }

    fn render_tag(&self, descriptor: &TagDescriptor, label: &str, width: usize) -> RenderedTag {
        let padded = pad_end(&descriptor.decorate(label), width);
        let paint = descriptor.paint().copied().unwrap_or_default();
        let (format, css) = self.directive(&paint, &padded);
        RenderedTag {
            format,
            css: Some(css),
        }
    }
}

/// CSS declarations for `paint`, in the same order as the terminal
/// sequences: decorations, background, foreground.
#[must_use]
pub fn css_declarations(paint: &Paint) -> String {
    let mut declarations: Vec<String> = Vec::new();
    let mut text_decorations: Vec<&str> = Vec::new();

    for decoration in paint.decorations() {
        match decoration {
            Decoration::Bold => declarations.push("font-weight: bold".to_owned()),
            Decoration::Dim => declarations.push("opacity: 0.7".to_owned()),
            Decoration::Italic => declarations.push("font-style: italic".to_owned()),
            Decoration::Inverse => declarations.push("filter: invert(100%)".to_owned()),
            Decoration::Underline => text_decorations.push("underline"),
            Decoration::Strikethrough => text_decorations.push("line-through"),
        }
    }
    if !text_decorations.is_empty() {
        declarations.push(format!("text-decoration: {}", text_decorations.join(" ")));
    }
    if let Some(background) = paint.background() {
        declarations.push(format!("background: {}", css_color(background)));
    }
    if let Some(foreground) = paint.foreground() {
        declarations.push(format!("color: {}", css_color(foreground)));
    }

    declarations.join("; ")
}

/// CSS color for an ANSI color, using the xterm default palette.
#[must_use]
pub const fn css_color(color: AnsiColor) -> &'static str {
    match color {
        AnsiColor::Black => "#000000",
        AnsiColor::Red => "#cd0000",
        AnsiColor::Green => "#00cd00",
        AnsiColor::Yellow => "#cdcd00",
        AnsiColor::Blue => "#0000ee",
        AnsiColor::Magenta => "#cd00cd",
        AnsiColor::Cyan => "#00cdcd",
        AnsiColor::White => "#e5e5e5",
        AnsiColor::BrightBlack => "#7f7f7f",
        AnsiColor::BrightRed => "#ff0000",
        AnsiColor::BrightGreen => "#00ff00",
        AnsiColor::BrightYellow => "#ffff00",
        AnsiColor::BrightBlue => "#5c5cff",
        AnsiColor::BrightMagenta => "#ff00ff",
        AnsiColor::BrightCyan => "#00ffff",
        AnsiColor::BrightWhite => "#ffffff",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ansi_wrap_orders_decoration_background_foreground() {
        let paint = Paint::new()
            .fg(AnsiColor::White)
            .on(AnsiColor::Blue)
            .bold();
        let wrap = ansi_wrap(&paint);
        assert_eq!(wrap.start(), "\x1b[1m\x1b[44m\x1b[37m");
        assert_eq!(wrap.end(), "\x1b[0m");
    }

    #[test]
    fn plain_paint_has_empty_wrap() {
        let wrap = ansi_wrap(&Paint::new());
        assert_eq!(wrap, AnsiWrap::default());
        assert_eq!(wrap.apply("x"), "x");
        assert_eq!(wrap.control_width(), 0);
    }

    #[test]
    fn repeated_composition_renders_identically() {
        let once = Paint::new().bold().fg(AnsiColor::Red);
        let again = once.bold().fg(AnsiColor::Red).merge(once);
        assert_eq!(ansi_wrap(&once), ansi_wrap(&again));
    }

    #[test]
    fn disabled_terminal_styler_emits_no_codes() {
        let styler = TerminalStyler::new(false);
        let wrap = styler.wrap(&Paint::new().bold());
        assert_eq!(wrap.apply("tag"), "tag");
        assert!(!styler.colors());
    }

    #[test]
    fn browser_directive_places_token_before_tag() {
        let (format, css) = BrowserStyler.directive(&Paint::new().bold().fg(AnsiColor::Red), "[x]");
        assert_eq!(format, "%c[x]");
        assert_eq!(css, "font-weight: bold; color: #cd0000");
    }

    #[test]
    fn browser_directive_escapes_percent_in_tag() {
        let (format, _) = BrowserStyler.directive(&Paint::new(), "[load%c]");
        assert_eq!(format, "%c[load%%c]");
        assert_eq!(escape_format("no percent"), "no percent");
    }

    #[test]
    fn css_groups_text_decorations() {
        let paint = Paint::new().underline().strikethrough().on(AnsiColor::Black);
        assert_eq!(
            css_declarations(&paint),
            "text-decoration: underline line-through; background: #000000"
        );
    }

    #[test]
    fn environment_parses_and_displays() {
        assert_eq!("Terminal".parse::<Environment>(), Ok(Environment::Terminal));
        assert_eq!(" browser ".parse::<Environment>(), Ok(Environment::Browser));
        assert!("tty".parse::<Environment>().is_err());
        assert_eq!(Environment::Browser.to_string(), "browser");
    }

    #[test]
    fn environment_resolves_matching_styler() {
        assert_eq!(
            Environment::Terminal.styler(true).environment(),
            Environment::Terminal
        );
        assert_eq!(
            Environment::Browser.styler(true).environment(),
            Environment::Browser
        );
    }

    #[test]
    fn detect_is_terminal_on_native_targets() {
        if !cfg!(target_arch = "wasm32") {
            assert_eq!(Environment::detect(), Environment::Terminal);
        }
    }
}
