use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

const HELP_KEYS: &[(&str, &str)] = &[
    ("j / k, arrows", "scroll one line"),
    ("space / b", "page down / up"),
    ("d / u", "half page down / up"),
    ("g / G", "top / bottom"),
    ("h", "toggle separators above headings"),
    ("w", "toggle file watching"),
    ("r", "reload file"),
    ("?", "toggle this help"),
    ("q / Esc", "quit"),
];

pub fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(12).max(48).min(area.width);
    #[allow(clippy::cast_possible_truncation)]
    let needed_rows = HELP_KEYS.len() as u16 + 4;
    let popup_height = needed_rows.min(area.height);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let lines: Vec<Line> = HELP_KEYS
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(
                    format!("{keys:<16}"),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(*action),
            ])
        })
        .collect();

    let block = Block::default()
        .title("Keys")
        .borders(Borders::ALL)
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
