//! Theming and color definitions.
//!
//! Maps markup span styles to terminal styles. Uses ANSI colors that adapt
//! to the terminal's color palette.

use ratatui::style::{Color, Modifier, Style};

use crate::markup::SpanStyle;
use crate::theme::{BackgroundMode, heading_color_index};

/// Theme configuration for the entire application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// `***heading***` style
    pub heading: Style,
    /// `**bold**` style
    pub bold: Style,
    /// `*italic*` style
    pub italic: Style,
    /// Plain text style
    pub plain: Style,
    /// Status bar background
    pub status_bg: Color,
    /// Status bar foreground
    pub status_fg: Color,
}

impl Theme {
    /// Theme tuned for the given background.
    pub fn for_background(mode: BackgroundMode) -> Self {
        Self {
            heading: Style::default()
                .fg(Color::Indexed(heading_color_index(mode)))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            bold: Style::default().add_modifier(Modifier::BOLD),
            italic: Style::default().add_modifier(Modifier::ITALIC),
            plain: Style::default(),
            status_bg: Color::DarkGray,
            status_fg: Color::White,
        }
    }

    /// Theme for the detected (or forced) terminal background.
    pub fn current() -> Self {
        Self::for_background(crate::theme::background_mode())
    }

    /// Get the style for a span style.
    pub const fn style_for(&self, style: SpanStyle) -> Style {
        match style {
            SpanStyle::Heading => self.heading,
            SpanStyle::Bold => self.bold,
            SpanStyle::Italic => self.italic,
            SpanStyle::Plain => self.plain,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_background(BackgroundMode::Dark)
    }
}
