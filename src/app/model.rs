use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use ratatui::text::Line;

use crate::markup::StyledDocument;
use crate::ui::style::Theme;
use crate::ui::text::{LayoutOptions, document_lines};
use crate::ui::viewport::Viewport;

const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// The complete pager state.
///
/// All state lives here - no global or scattered state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Markup source the document was parsed from
    pub source: String,
    /// The parsed document
    pub document: StyledDocument,
    /// Display lines for the current width
    pub lines: Vec<Line<'static>>,
    /// Viewport managing scroll position
    pub viewport: Viewport,
    /// File backing the document; `None` for stdin or built-in content
    pub file_path: Option<PathBuf>,
    /// Name shown in the status bar
    pub title: String,
    /// Drop the separator in front of headings
    pub strip_heading_breaks: bool,
    pub theme: Theme,
    pub watch_enabled: bool,
    pub help_visible: bool,
    pub should_quit: bool,
    toast: Option<Toast>,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(None, "untitled", String::new(), (80, 24))
    }
}

impl Model {
    /// Create a model for `source`, laid out for a terminal of `size`.
    pub fn new(
        file_path: Option<PathBuf>,
        title: impl Into<String>,
        source: String,
        size: (u16, u16),
    ) -> Self {
        let (width, height) = size;
        let document = StyledDocument::parse(&source);
        let mut model = Self {
            source,
            document,
            lines: Vec::new(),
            viewport: Viewport::new(width, height.saturating_sub(1), 0),
            file_path,
            title: title.into(),
            strip_heading_breaks: false,
            theme: Theme::default(),
            watch_enabled: false,
            help_visible: false,
            should_quit: false,
            toast: None,
        };
        model.reflow_layout();
        model
    }

    #[must_use]
    pub fn with_strip_heading_breaks(mut self, strip: bool) -> Self {
        self.strip_heading_breaks = strip;
        self.reflow_layout();
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self.reflow_layout();
        self
    }

    /// Columns available for document text.
    pub fn content_width(&self) -> usize {
        crate::ui::document_content_width(self.viewport.width()) as usize
    }

    /// Recompute display lines after a width, option or document change.
    pub fn reflow_layout(&mut self) {
        let options = LayoutOptions {
            width: Some(self.content_width()),
            strip_heading_breaks: self.strip_heading_breaks,
        };
        self.lines = document_lines(&self.document, options, &self.theme);
        self.viewport.set_total_lines(self.lines.len());
    }

    /// Replace the source and re-parse.
    pub fn set_source(&mut self, source: String) {
        self.document = StyledDocument::parse(&source);
        self.source = source;
        self.reflow_layout();
        tracing::debug!(
            segments = self.document.len(),
            lines = self.lines.len(),
            "document reparsed"
        );
    }

    /// Re-read the backing file.
    pub(super) fn reload_from_disk(&mut self) -> Result<()> {
        let path = self
            .file_path
            .clone()
            .context("document has no backing file")?;
        let source = crate::source::read_source(&path)?;
        if source != self.source {
            self.set_source(source);
        }
        Ok(())
    }

    /// Show a message in the footer for a few seconds, replacing any current one.
    pub fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + TOAST_DURATION,
        });
    }

    /// Drop an expired toast. Returns true if one was removed.
    pub fn expire_toast(&mut self, now: Instant) -> bool {
        if self.toast.as_ref().is_some_and(|t| now >= t.expires_at) {
            self.toast = None;
            return true;
        }
        false
    }

    /// The toast to draw in place of the status bar, if any.
    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }

    /// Lines currently inside the viewport.
    pub fn visible_lines(&self) -> &[Line<'static>] {
        let range = self.viewport.visible_range();
        &self.lines[range]
    }
}
