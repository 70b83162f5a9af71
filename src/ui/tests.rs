use super::*;
use crate::app::{Model, ToastLevel};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::style::Modifier;

fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(60, 12);
    Terminal::new(backend).unwrap()
}

fn create_test_model() -> Model {
    Model::new(
        None,
        "notes",
        "***Title***\nSome **bold** text".to_string(),
        (60, 12),
    )
}

fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol().to_string())
        .collect()
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let height = terminal.backend().buffer().area.height;
    (0..height)
        .map(|y| row_text(terminal, y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_render_places_heading_below_separator() {
    let model = create_test_model();
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(&model, frame)).unwrap();

    assert!(row_text(&terminal, 0).trim().is_empty(), "separator row");
    assert!(row_text(&terminal, 1).starts_with("  Title"));
    assert!(row_text(&terminal, 2).starts_with("  Some bold text"));
}

#[test]
fn test_render_applies_span_styles() {
    let model = create_test_model();
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(&model, frame)).unwrap();

    let buffer = terminal.backend().buffer();
    assert!(buffer[(2, 1)].modifier.contains(Modifier::BOLD), "heading");
    // "  Some bold": 'b' of bold sits at column 7.
    assert!(buffer[(7, 2)].modifier.contains(Modifier::BOLD), "bold span");
    assert!(!buffer[(2, 2)].modifier.contains(Modifier::BOLD), "plain span");
}

#[test]
fn test_render_shows_status_bar() {
    let model = create_test_model();
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(&model, frame)).unwrap();

    let status = row_text(&terminal, 11);
    assert!(status.contains("notes"), "status: {status}");
    assert!(status.contains("?:help"), "status: {status}");
}

#[test]
fn test_render_toast_replaces_status_bar() {
    let mut model = create_test_model();
    model.show_toast(ToastLevel::Warning, "Watch unavailable");
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(&model, frame)).unwrap();

    let footer = row_text(&terminal, 11);
    assert!(footer.contains("[warn] Watch unavailable"), "footer: {footer}");
    assert!(!footer.contains("?:help"));
}

#[test]
fn test_render_help_overlay() {
    let mut model = create_test_model();
    model.help_visible = true;
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(&model, frame)).unwrap();

    let screen = screen_text(&terminal);
    assert!(screen.contains("Keys"));
    assert!(screen.contains("toggle file watching"));
}

#[test]
fn test_status_text_reports_position_and_flags() {
    let mut model = create_test_model();
    model.watch_enabled = true;
    model.strip_heading_breaks = true;
    let text = status_text(&model);
    assert!(text.contains("Line 1/3"), "{text}");
    assert!(text.contains("[watching]"));
    assert!(text.contains("[compact]"));
}

#[test]
fn test_status_text_for_empty_document() {
    let model = Model::new(None, "empty", String::new(), (60, 12));
    assert!(status_text(&model).contains("Line 0/0"));
}

#[test]
fn test_document_content_width_never_zero() {
    assert_eq!(document_content_width(80), 78);
    assert_eq!(document_content_width(1), 1);
}
