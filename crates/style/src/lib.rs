#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/style/src/lib.rs
//!
//! # Overview
//!
//! `style` turns a bare label such as a module name into a fixed-width,
//! optionally colorized log prefix, for either a terminal or a browser
//! console.
//!
//! # Design
//!
//! - [`Paint`] describes a style: a set of [`Decoration`]s plus optional
//!   background and foreground colors. It parses from and prints to a small
//!   token grammar (`"bold white on_blue"`).
//! - [`build_tag`] pads a label to a visible width, wrapping it in escape
//!   sequences when given a paint. Control bytes never count against the
//!   width.
//! - [`Styler`] is the environment strategy, resolved once through
//!   [`Environment::styler`]: [`TerminalStyler`] emits ANSI sequences,
//!   [`BrowserStyler`] emits a `%c` token and CSS declarations.
//! - [`TagDescriptor`] bundles prefix, suffix and paint; [`catalog`] has a
//!   few presets.
//!
//! # Invariants
//!
//! - Identical inputs always render byte-identical output.
//! - Terminal sequences are ordered decoration, background, foreground and
//!   closed by a single reset.
//! - Browser formats contain exactly one `%c`, directly before the tag.
//!
//! # Examples
//!
//! ```
//! use style::{Environment, catalog};
//!
//! let styler = Environment::Browser.styler(true);
//! let tag = styler.render_tag(&catalog::brackets(), "db", 8);
//! assert_eq!(tag.format, "%c[db]    ");
//! assert_eq!(tag.css.as_deref(), Some("font-weight: bold"));
//! ```

pub mod catalog;
mod paint;
mod styler;
mod tag;

pub use anstyle::AnsiColor;
pub use catalog::TagDescriptor;
pub use paint::{Decoration, Paint, ParsePaintError, color_name};
pub use styler::{
    AnsiWrap, BrowserStyler, Environment, ParseEnvironmentError, RenderedTag, Styler,
    TerminalStyler, ansi_wrap, css_color, css_declarations, escape_format,
};
pub use tag::{
    Colorizer, DEFAULT_PAD_WIDTH, TagError, build_tag, build_tag_from_value, build_tag_with_width,
    pad_end,
};
