//! Core document types.

use serde::Serialize;

/// Visual class of a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanStyle {
    /// `***text***`
    Heading,
    /// `**text**`
    Bold,
    /// `*text*`
    Italic,
    /// Anything outside a delimiter pair
    Plain,
}

/// A contiguous run of display text with a single style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledSpan {
    /// The text content, delimiters stripped
    text: String,
    /// How the text should be presented
    style: SpanStyle,
}

impl StyledSpan {
    /// Create a new styled span.
    pub fn new(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Shorthand for a plain span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanStyle::Plain)
    }

    /// Get the text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the style.
    pub const fn style(&self) -> SpanStyle {
        self.style
    }
}

/// One element of a parsed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment {
    /// Separator emitted in front of every heading
    LineBreak,
    /// A styled run of text
    Span(StyledSpan),
}

impl Segment {
    /// The span carried by this segment, if any.
    pub const fn as_span(&self) -> Option<&StyledSpan> {
        match self {
            Self::Span(span) => Some(span),
            Self::LineBreak => None,
        }
    }
}

/// The result of parsing markup: segments in source order.
///
/// A document is built once by the parser and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StyledDocument {
    segments: Vec<Segment>,
}

impl StyledDocument {
    /// Create an empty document.
    pub const fn empty() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    pub(crate) const fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// All segments, line breaks included.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterate over the styled spans, skipping line breaks.
    pub fn spans(&self) -> impl Iterator<Item = &StyledSpan> {
        self.segments.iter().filter_map(Segment::as_span)
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the document has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Concatenated span text without heading separators.
    pub fn text(&self) -> String {
        self.spans().map(StyledSpan::text).collect()
    }

    /// Concatenated text with each line break rendered as `\n`.
    pub fn display_text(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::LineBreak => "\n",
                Segment::Span(span) => span.text(),
            })
            .collect()
    }

    /// Count spans of the given style.
    pub fn count_style(&self, style: SpanStyle) -> usize {
        self.spans().filter(|span| span.style() == style).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StyledDocument {
        StyledDocument::from_segments(vec![
            Segment::Span(StyledSpan::plain("intro ")),
            Segment::LineBreak,
            Segment::Span(StyledSpan::new("Title", SpanStyle::Heading)),
            Segment::Span(StyledSpan::new("loud", SpanStyle::Bold)),
        ])
    }

    #[test]
    fn test_spans_skip_line_breaks() {
        let doc = sample();
        assert_eq!(doc.len(), 4);
        assert_eq!(doc.spans().count(), 3);
    }

    #[test]
    fn test_text_excludes_separator_but_display_text_keeps_it() {
        let doc = sample();
        assert_eq!(doc.text(), "intro Titleloud");
        assert_eq!(doc.display_text(), "intro \nTitleloud");
    }

    #[test]
    fn test_count_style() {
        let doc = sample();
        assert_eq!(doc.count_style(SpanStyle::Heading), 1);
        assert_eq!(doc.count_style(SpanStyle::Italic), 0);
    }

    #[test]
    fn test_empty_document() {
        let doc = StyledDocument::empty();
        assert!(doc.is_empty());
        assert_eq!(doc.text(), "");
    }

    #[test]
    fn test_serializes_tagged_segments() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains(r#"{"type":"line_break"}"#), "got {json}");
        assert!(
            json.contains(r#"{"type":"span","text":"Title","style":"heading"}"#),
            "got {json}"
        );
    }
}
