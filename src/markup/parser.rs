//! Asterisk markup tokenizing.
//!
//! The grammar is a single alternation tried at every scan position:
//!
//! 1. `***text***` becomes a line break followed by a heading
//! 2. `**text**` becomes bold
//! 3. `*text*` becomes italic
//! 4. a run of non-asterisk text becomes plain
//!
//! The enclosed text of a delimited run must be non-empty and free of `*`.
//! Asterisks that cannot open a complete pair are kept as plain text.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::types::{Segment, SpanStyle, StyledDocument, StyledSpan};

// Alternation order is the precedence order; the regex crate picks the
// first alternative that matches at the leftmost position.
static MARKUP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*\*([^*]+)\*\*\*|\*\*([^*]+)\*\*|\*([^*]+)\*|[^*]+")
        .expect("markup pattern is valid")
});

impl StyledDocument {
    /// Parse markup source into a document.
    ///
    /// # Example
    ///
    /// ```
    /// use starmark::markup::{SpanStyle, StyledDocument};
    ///
    /// let doc = StyledDocument::parse("Normal **bold** text");
    /// let styles: Vec<_> = doc.spans().map(|s| s.style()).collect();
    /// assert_eq!(styles, [SpanStyle::Plain, SpanStyle::Bold, SpanStyle::Plain]);
    /// ```
    pub fn parse(source: &str) -> Self {
        parse(source)
    }
}

/// Parse markup source into a document.
///
/// Never fails: malformed or unterminated delimiters degrade to plain text.
pub fn parse(source: &str) -> StyledDocument {
    let mut builder = DocumentBuilder::default();
    let mut cursor = 0;

    for caps in MARKUP_PATTERN.captures_iter(source) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        // Anything the pattern skipped is unpaired asterisks.
        if whole.start() > cursor {
            builder.push_plain(&source[cursor..whole.start()]);
        }
        match classify(&caps) {
            Some((style, text)) => builder.push_styled(style, text),
            None => builder.push_plain(whole.as_str()),
        }
        cursor = whole.end();
    }
    if cursor < source.len() {
        builder.push_plain(&source[cursor..]);
    }

    builder.finish()
}

fn classify<'h>(caps: &Captures<'h>) -> Option<(SpanStyle, &'h str)> {
    [SpanStyle::Heading, SpanStyle::Bold, SpanStyle::Italic]
        .into_iter()
        .zip(1..)
        .find_map(|(style, group)| caps.get(group).map(|m| (style, m.as_str())))
}

/// Accumulates segments, coalescing adjacent plain text.
#[derive(Debug, Default)]
struct DocumentBuilder {
    segments: Vec<Segment>,
    pending_plain: String,
}

impl DocumentBuilder {
    fn push_plain(&mut self, text: &str) {
        self.pending_plain.push_str(text);
    }

    fn push_styled(&mut self, style: SpanStyle, text: &str) {
        self.flush_plain();
        if style == SpanStyle::Heading {
            self.segments.push(Segment::LineBreak);
        }
        self.segments.push(Segment::Span(StyledSpan::new(text, style)));
    }

    fn flush_plain(&mut self) {
        if self.pending_plain.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.pending_plain);
        self.segments.push(Segment::Span(StyledSpan::plain(text)));
    }

    fn finish(mut self) -> StyledDocument {
        self.flush_plain();
        StyledDocument::from_segments(self.segments)
    }
}

/// Re-wrap every span in its delimiters, producing markup that parses back
/// to the same document.
pub fn to_markup(doc: &StyledDocument) -> String {
    let mut out = String::new();
    for span in doc.spans() {
        let fence = match span.style() {
            SpanStyle::Heading => "***",
            SpanStyle::Bold => "**",
            SpanStyle::Italic => "*",
            SpanStyle::Plain => "",
        };
        out.push_str(fence);
        out.push_str(span.text());
        out.push_str(fence);
    }
    out
}
