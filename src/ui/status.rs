use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, ToastLevel};

pub fn status_text(model: &Model) -> String {
    let percent = model.viewport.scroll_percent();
    let total = model.viewport.total_lines();
    let current = if total == 0 {
        0
    } else {
        model.viewport.offset() + 1
    };
    let line_info = format!("Line {current}/{total}");
    let watch_indicator = if model.watch_enabled {
        " [watching]"
    } else {
        ""
    };
    let heading_indicator = if model.strip_heading_breaks {
        " [compact]"
    } else {
        ""
    };

    format!(
        " {}  [{}%]  {}{}{}  ?:help",
        model.title, percent, line_info, watch_indicator, heading_indicator
    )
}

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let status_bar = Paragraph::new(status_text(model))
        .style(Style::default().bg(model.theme.status_bg).fg(model.theme.status_fg));
    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        ToastLevel::Error => ("[error]", Style::default().bg(Color::Red).fg(Color::White)),
    };
    let toast = Paragraph::new(format!(" {prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
