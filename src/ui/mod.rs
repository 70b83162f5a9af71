//! Terminal UI components.
//!
//! This module contains all rendering code:
//! - [`text`]: Layout of parsed documents into styled lines
//! - [`style`]: Theming and colors
//! - [`viewport`]: Scroll position and visible range management

pub mod style;
pub mod text;
pub mod viewport;

mod overlays;
mod render;
mod status;

pub use render::{document_content_width, render};
pub use status::status_text;

pub const DOCUMENT_LEFT_PADDING: u16 = 2;

#[cfg(test)]
mod tests;
