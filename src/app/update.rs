use crate::app::Model;

/// All possible events and actions in the pager.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Navigation
    /// Scroll up by n lines
    ScrollUp(usize),
    /// Scroll down by n lines
    ScrollDown(usize),
    /// Scroll up one page
    PageUp,
    /// Scroll down one page
    PageDown,
    /// Scroll up half page
    HalfPageUp,
    /// Scroll down half page
    HalfPageDown,
    /// Go to beginning of document
    GoToTop,
    /// Go to end of document
    GoToBottom,

    // Display
    /// Show or hide the separator in front of headings
    ToggleHeadingBreaks,
    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,

    // File watching
    /// Toggle file watching
    ToggleWatch,
    /// File changed externally, reload
    FileChanged,
    /// Force reload file
    ForceReload,

    // Window
    /// Terminal resized
    Resize(u16, u16),

    // Application
    /// Quit the pager
    Quit,
}

/// Apply a message to the model.
///
/// Pure state transition; I/O triggered by a message (reloading, starting
/// a watcher) happens in the event loop's side-effect handler.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        // Navigation
        Message::ScrollUp(n) => model.viewport.scroll_up(n),
        Message::ScrollDown(n) => model.viewport.scroll_down(n),
        Message::PageUp => model.viewport.page_up(),
        Message::PageDown => model.viewport.page_down(),
        Message::HalfPageUp => model.viewport.half_page_up(),
        Message::HalfPageDown => model.viewport.half_page_down(),
        Message::GoToTop => model.viewport.go_to_top(),
        Message::GoToBottom => model.viewport.go_to_bottom(),

        // Display
        Message::ToggleHeadingBreaks => {
            model.strip_heading_breaks = !model.strip_heading_breaks;
            model.reflow_layout();
        }
        Message::ToggleHelp => {
            model.help_visible = !model.help_visible;
        }
        Message::HideHelp => {
            model.help_visible = false;
        }

        // File watching
        Message::ToggleWatch => {
            model.watch_enabled = model.file_path.is_some() && !model.watch_enabled;
        }
        // FileChanged/ForceReload: handled in event loop (side effect)
        Message::FileChanged | Message::ForceReload => {}

        // Window
        Message::Resize(width, height) => {
            model.viewport.resize(width, height.saturating_sub(1));
            model.reflow_layout();
        }

        // Application
        Message::Quit => {
            model.should_quit = true;
        }
    }

    model
}
