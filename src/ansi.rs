//! Non-interactive output: styled ANSI text, plain text, or JSON.

use std::io::Write;

use crossterm::queue;
use crossterm::style::{Attribute, Color, ContentStyle, Print, PrintStyledContent, StyledContent};

use crate::markup::{SpanStyle, StyledDocument};
use crate::theme::{BackgroundMode, heading_color_index};
use crate::ui::text::{LayoutOptions, layout};

/// Output format for `starmark` when not running the pager.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// ANSI-styled text
    #[default]
    Styled,
    /// Text with markup removed and no escape codes
    Plain,
    /// The parsed document as JSON
    Json,
}

/// Terminal style for a span, following the pager theme.
pub fn content_style(style: SpanStyle, mode: BackgroundMode) -> ContentStyle {
    let mut content = ContentStyle::new();
    match style {
        SpanStyle::Heading => {
            content.foreground_color = Some(Color::AnsiValue(heading_color_index(mode)));
            content.attributes.set(Attribute::Bold);
            content.attributes.set(Attribute::Underlined);
        }
        SpanStyle::Bold => content.attributes.set(Attribute::Bold),
        SpanStyle::Italic => content.attributes.set(Attribute::Italic),
        SpanStyle::Plain => {}
    }
    content
}

/// Write a laid-out document as lines of text.
///
/// With `mode` set, each piece carries ANSI styling; without it the output
/// is plain text.
pub fn write_document<W: Write>(
    out: &mut W,
    doc: &StyledDocument,
    options: LayoutOptions,
    mode: Option<BackgroundMode>,
) -> std::io::Result<()> {
    for line in layout(doc, options) {
        for piece in line {
            match mode {
                Some(mode) => queue!(
                    out,
                    PrintStyledContent(StyledContent::new(
                        content_style(piece.style, mode),
                        piece.text
                    ))
                )?,
                None => queue!(out, Print(piece.text))?,
            }
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

/// Write the document as pretty-printed JSON.
pub fn write_json<W: Write>(out: &mut W, doc: &StyledDocument) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, doc)?;
    writeln!(out)?;
    out.flush()
}

/// Write `doc` in the requested format.
pub fn write_output<W: Write>(
    out: &mut W,
    doc: &StyledDocument,
    format: OutputFormat,
    options: LayoutOptions,
    mode: BackgroundMode,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Styled => write_document(out, doc, options, Some(mode)),
        OutputFormat::Plain => write_document(out, doc, options, None),
        OutputFormat::Json => write_json(out, doc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(source: &str, mode: Option<BackgroundMode>, strip: bool) -> String {
        let doc = StyledDocument::parse(source);
        let mut out = Vec::new();
        let options = LayoutOptions {
            width: None,
            strip_heading_breaks: strip,
        };
        write_document(&mut out, &doc, options, mode).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_output_strips_delimiters() {
        let out = render("Normal **bold** and *italic* text", None, false);
        assert_eq!(out, "Normal bold and italic text\n");
    }

    #[test]
    fn test_plain_output_keeps_heading_separator() {
        let out = render("***Title***\nbody", None, false);
        assert_eq!(out, "\nTitle\nbody\n");
    }

    #[test]
    fn test_plain_output_can_strip_heading_separator() {
        let out = render("***Title***\nbody", None, true);
        assert_eq!(out, "Title\nbody\n");
    }

    #[test]
    fn test_styled_output_contains_escape_codes() {
        let out = render("**bold**", Some(BackgroundMode::Dark), false);
        assert!(out.contains('\u{1b}'), "expected ANSI codes in {out:?}");
        assert!(out.contains("bold"));
    }

    #[test]
    fn test_plain_span_is_unstyled() {
        let style = content_style(SpanStyle::Plain, BackgroundMode::Dark);
        assert_eq!(style, ContentStyle::new());
    }

    #[test]
    fn test_heading_style_depends_on_background() {
        let dark = content_style(SpanStyle::Heading, BackgroundMode::Dark);
        let light = content_style(SpanStyle::Heading, BackgroundMode::Light);
        assert_eq!(dark.foreground_color, Some(Color::AnsiValue(6)));
        assert_eq!(light.foreground_color, Some(Color::AnsiValue(24)));
        assert!(dark.attributes.has(Attribute::Bold));
    }

    #[test]
    fn test_heading_color_matches_pager_theme() {
        use crate::ui::style::Theme;
        for mode in [BackgroundMode::Dark, BackgroundMode::Light] {
            let Some(Color::AnsiValue(ansi)) =
                content_style(SpanStyle::Heading, mode).foreground_color
            else {
                panic!("heading should use a palette colour");
            };
            let pager = Theme::for_background(mode).heading.fg;
            assert_eq!(pager, Some(ratatui::style::Color::Indexed(ansi)));
        }
    }

    #[test]
    fn test_json_output_lists_segments() {
        let doc = StyledDocument::parse("***T*** *i*");
        let mut out = Vec::new();
        write_json(&mut out, &doc).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let segments = value["segments"].as_array().unwrap();
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[0]["type"], "line_break");
        assert_eq!(segments[1]["style"], "heading");
        assert_eq!(segments[3]["text"], "i");
    }
}
