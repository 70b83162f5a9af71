//! Interactive pager state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete pager state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Model, ToastLevel};
pub use update::{Message, update};

use std::path::PathBuf;

/// Owns the pager configuration and runs the event loop.
pub struct App {
    file_path: Option<PathBuf>,
    title: String,
    source: String,
    watch_enabled: bool,
    strip_heading_breaks: bool,
}

impl App {
    /// Create a pager for already-loaded markup `source`.
    ///
    /// `file_path` is used for reloads and watching; pass `None` for stdin
    /// or built-in content.
    pub fn new(file_path: Option<PathBuf>, title: impl Into<String>, source: String) -> Self {
        Self {
            file_path,
            title: title.into(),
            source,
            watch_enabled: false,
            strip_heading_breaks: false,
        }
    }

    /// Enable or disable file watching.
    #[must_use]
    pub const fn with_watch(mut self, enabled: bool) -> Self {
        self.watch_enabled = enabled;
        self
    }

    /// Drop the separator rendered in front of headings.
    #[must_use]
    pub const fn with_strip_heading_breaks(mut self, strip: bool) -> Self {
        self.strip_heading_breaks = strip;
        self
    }
}
