//! Property tests for tag padding and browser format escaping.
//!
//! Labels mix ASCII, double-width characters and `%` signs; paints are drawn
//! from every decoration and color combination.

use proptest::prelude::*;
use style::{
    AnsiColor, BrowserStyler, Colorizer, Decoration, Paint, Styler, TagDescriptor, TerminalStyler,
    ansi_wrap, build_tag_with_width, pad_end,
};
use unicode_width::UnicodeWidthStr;

const COLORS: [AnsiColor; 16] = [
    AnsiColor::Black,
    AnsiColor::Red,
    AnsiColor::Green,
    AnsiColor::Yellow,
    AnsiColor::Blue,
    AnsiColor::Magenta,
    AnsiColor::Cyan,
    AnsiColor::White,
    AnsiColor::BrightBlack,
    AnsiColor::BrightRed,
    AnsiColor::BrightGreen,
    AnsiColor::BrightYellow,
    AnsiColor::BrightBlue,
    AnsiColor::BrightMagenta,
    AnsiColor::BrightCyan,
    AnsiColor::BrightWhite,
];

fn labels() -> impl Strategy<Value = String> {
    "[a-z0-9%日本 -]{0,24}"
}

fn colors() -> impl Strategy<Value = Option<AnsiColor>> {
    proptest::option::of(proptest::sample::select(COLORS.to_vec()))
}

fn paints() -> impl Strategy<Value = Paint> {
    (
        proptest::sample::subsequence(Decoration::ALL.to_vec(), 0..=Decoration::ALL.len()),
        colors(),
        colors(),
    )
        .prop_map(|(decorations, background, foreground)| {
            let mut paint = decorations.into_iter().fold(Paint::new(), Paint::decorate);
            if let Some(background) = background {
                paint = paint.on(background);
            }
            if let Some(foreground) = foreground {
                paint = paint.fg(foreground);
            }
            paint
        })
}

fn descriptors() -> impl Strategy<Value = TagDescriptor> {
    ("[\\[<! %]{0,2}", "[\\]>! %]{0,2}", proptest::option::of(paints()))
        .prop_map(|(prefix, suffix, paint)| TagDescriptor::new(prefix, suffix, paint))
}

fn strip_ansi(text: &str) -> String {
    let mut out = String::new();
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn live_directives(format: &str) -> usize {
    let mut count = 0;
    let mut chars = format.chars();
    while let Some(c) = chars.next() {
        if c == '%' && chars.next() != Some('%') {
            count += 1;
        }
    }
    count
}

proptest! {
    #[test]
    fn colored_tag_is_padded_to_visible_width(label in labels(), paint in paints(), width in 0usize..64) {
        let tag = build_tag_with_width(&label, paint, width);
        let visible = strip_ansi(&tag);

        prop_assert_eq!(visible.width(), label.width().max(width));
        prop_assert!(visible.starts_with(label.as_str()));
        prop_assert!(visible[label.len()..].chars().all(|c| c == ' '));
    }

    #[test]
    fn colored_tag_length_is_label_padding_and_codes(label in labels(), paint in paints(), width in 0usize..64) {
        let tag = build_tag_with_width(&label, paint, width);
        let wrap = ansi_wrap(&paint);
        let padding = width.saturating_sub(label.width());

        prop_assert_eq!(tag.len(), label.len() + padding + wrap.control_width());
        let expected_prefix = format!("{}{label}", wrap.start());
        prop_assert!(tag.starts_with(&expected_prefix));
        if !paint.is_plain() {
            prop_assert_eq!(tag.matches(wrap.start()).count(), 1);
            prop_assert_eq!(tag.matches(wrap.end()).count(), 1);
        }
    }

    #[test]
    fn uncolored_and_width_colorizers_match_pad_end(label in labels(), width in 0usize..64) {
        let expected = pad_end(&label, width);
        prop_assert_eq!(&build_tag_with_width(&label, Colorizer::None, width), &expected);
        prop_assert_eq!(&build_tag_with_width(&label, width, 0), &expected);
    }

    #[test]
    fn browser_format_has_one_directive_and_the_padded_text(
        descriptor in descriptors(),
        label in labels(),
        width in 0usize..64,
    ) {
        let rendered = BrowserStyler.render_tag(&descriptor, &label, width);
        let shown = rendered
            .format
            .strip_prefix("%c")
            .map(|rest| rest.replace("%%", "%"));

        prop_assert_eq!(live_directives(&rendered.format), 1);
        prop_assert_eq!(shown, Some(pad_end(&descriptor.decorate(&label), width)));
        prop_assert!(rendered.css.is_some());
    }

    #[test]
    fn both_environments_show_the_same_text(
        descriptor in descriptors(),
        label in labels(),
        width in 0usize..64,
    ) {
        let terminal = TerminalStyler::new(true).render_tag(&descriptor, &label, width);
        let browser = BrowserStyler.render_tag(&descriptor, &label, width);
        let shown = browser.format.replacen("%c", "", 1).replace("%%", "%");

        prop_assert_eq!(strip_ansi(&terminal.format), shown);
    }
}
