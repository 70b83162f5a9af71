use ratatui::prelude::*;
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::app::Model;

use super::{DOCUMENT_LEFT_PADDING, overlays, status};

/// Columns available for document text in a terminal `total_width` wide.
pub const fn document_content_width(total_width: u16) -> u16 {
    let width = total_width.saturating_sub(DOCUMENT_LEFT_PADDING);
    if width == 0 { 1 } else { width }
}

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let doc_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    let footer_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: area.height.min(1),
        ..area
    };

    render_document(model, frame, doc_area);
    if model.active_toast().is_some() {
        status::render_toast_bar(model, frame, footer_area);
    } else {
        status::render_status_bar(model, frame, footer_area);
    }

    if model.help_visible {
        overlays::render_help_overlay(frame, area);
    }
}

fn render_document(model: &Model, frame: &mut Frame, area: Rect) {
    let block = Block::default().padding(Padding::left(DOCUMENT_LEFT_PADDING));
    let paragraph = Paragraph::new(model.visible_lines().to_vec()).block(block);
    frame.render_widget(paragraph, area);
}
