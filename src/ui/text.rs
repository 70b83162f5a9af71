//! Layout of parsed documents into display lines.
//!
//! A document is first split into logical lines (at `\n` inside span text
//! and at heading separators), then each logical line is word-wrapped to
//! the available width.

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::markup::{Segment, SpanStyle, StyledDocument};

use super::style::Theme;

/// A run of text on a single display line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePiece {
    pub text: String,
    pub style: SpanStyle,
}

impl LinePiece {
    pub fn new(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// How a document is laid out into lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutOptions {
    /// Wrap width in columns; `None` disables wrapping
    pub width: Option<usize>,
    /// Drop the separator the parser puts in front of each heading
    pub strip_heading_breaks: bool,
}

/// Split a document into logical lines.
pub fn logical_lines(doc: &StyledDocument, strip_heading_breaks: bool) -> Vec<Vec<LinePiece>> {
    if doc.is_empty() {
        return Vec::new();
    }
    let mut lines: Vec<Vec<LinePiece>> = vec![Vec::new()];

    for segment in doc.segments() {
        match segment {
            Segment::LineBreak => {
                if !strip_heading_breaks {
                    lines.push(Vec::new());
                }
            }
            Segment::Span(span) => {
                for (i, part) in span.text().split('\n').enumerate() {
                    if i > 0 {
                        lines.push(Vec::new());
                    }
                    if part.is_empty() {
                        continue;
                    }
                    if let Some(current) = lines.last_mut() {
                        current.push(LinePiece::new(part, span.style()));
                    }
                }
            }
        }
    }

    lines
}

/// Word-wrap a logical line to `width` display columns.
///
/// Leading whitespace on continuation lines is dropped. A single word wider
/// than `width` is left on its own line.
pub fn wrap_pieces(pieces: &[LinePiece], width: usize) -> Vec<Vec<LinePiece>> {
    let width = width.max(1);
    let tokens: Vec<LinePiece> = pieces.iter().flat_map(split_tokens).collect();

    let mut lines: Vec<Vec<LinePiece>> = Vec::new();
    let mut current: Vec<LinePiece> = Vec::new();
    let mut current_width = 0usize;
    let mut has_word = false;

    for token in tokens {
        let token_width = token.text.width();
        let token_is_ws = token.text.chars().all(char::is_whitespace);

        if current_width + token_width > width && has_word {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
            has_word = false;
        }

        if token_is_ws && !has_word && !lines.is_empty() {
            // Drop leading whitespace at wrapped line starts.
            continue;
        }

        current_width += token_width;
        has_word = has_word || !token_is_ws;
        push_merged(&mut current, token);
    }

    lines.push(current);
    lines
}

fn push_merged(line: &mut Vec<LinePiece>, piece: LinePiece) {
    if let Some(last) = line.last_mut()
        && last.style == piece.style
    {
        last.text.push_str(&piece.text);
        return;
    }
    line.push(piece);
}

fn split_tokens(piece: &LinePiece) -> Vec<LinePiece> {
    let mut out = Vec::new();
    let mut buf = String::new();
    let mut ws_state: Option<bool> = None;

    for ch in piece.text.chars() {
        let is_ws = ch.is_whitespace();
        match ws_state {
            Some(state) if state == is_ws => buf.push(ch),
            Some(_) => {
                out.push(LinePiece::new(std::mem::take(&mut buf), piece.style));
                buf.push(ch);
                ws_state = Some(is_ws);
            }
            None => {
                buf.push(ch);
                ws_state = Some(is_ws);
            }
        }
    }

    if !buf.is_empty() {
        out.push(LinePiece::new(buf, piece.style));
    }
    out
}

/// Lay out a document into display lines of pieces.
pub fn layout(doc: &StyledDocument, options: LayoutOptions) -> Vec<Vec<LinePiece>> {
    let lines = logical_lines(doc, options.strip_heading_breaks);
    match options.width {
        Some(width) => lines
            .iter()
            .flat_map(|line| wrap_pieces(line, width))
            .collect(),
        None => lines,
    }
}

/// Lay out a document into styled ratatui lines.
pub fn document_lines(
    doc: &StyledDocument,
    options: LayoutOptions,
    theme: &Theme,
) -> Vec<Line<'static>> {
    layout(doc, options)
        .into_iter()
        .map(|pieces| {
            Line::from(
                pieces
                    .into_iter()
                    .map(|piece| Span::styled(piece.text, theme.style_for(piece.style)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}
