use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Message, Model};

use super::event_loop::ResizeDebouncer;

impl App {
    pub(super) fn handle_event(
        event: &Event,
        model: &Model,
        now_ms: u64,
        resize_debouncer: &mut ResizeDebouncer,
    ) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(*key, model),
            Event::Resize(w, h) => {
                crate::perf::log_event("event.resize.queue", format!("width={w} height={h}"));
                resize_debouncer.queue(*w, *h, now_ms);
                None
            }
            _ => None,
        }
    }
}

/// Map a key press to a message.
pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Message::Quit);
    }

    // While help is shown, keys other than q just close it.
    if model.help_visible {
        return match key.code {
            KeyCode::Char('q') => Some(Message::Quit),
            _ => Some(Message::HideHelp),
        };
    }

    match key.code {
        // Navigation
        KeyCode::Char('j') | KeyCode::Down => Some(Message::ScrollDown(1)),
        KeyCode::Char('k') | KeyCode::Up => Some(Message::ScrollUp(1)),
        KeyCode::Char(' ') | KeyCode::PageDown => Some(Message::PageDown),
        KeyCode::Char('b') | KeyCode::PageUp => Some(Message::PageUp),
        KeyCode::Char('d') => Some(Message::HalfPageDown),
        KeyCode::Char('u') => Some(Message::HalfPageUp),
        KeyCode::Char('g') | KeyCode::Home => Some(Message::GoToTop),
        KeyCode::Char('G') | KeyCode::End => Some(Message::GoToBottom),

        // Display
        KeyCode::Char('h') => Some(Message::ToggleHeadingBreaks),
        KeyCode::Char('?') | KeyCode::F(1) => Some(Message::ToggleHelp),

        // File
        KeyCode::Char('w') => Some(Message::ToggleWatch),
        KeyCode::Char('r' | 'R') => Some(Message::ForceReload),

        // Quit
        KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),

        _ => None,
    }
}
