// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. markup::StyledDocument)
    clippy::module_name_repetitions
)]

//! # Starmark
//!
//! A viewer for asterisk-delimited text.
//!
//! Starmark understands three markers:
//! - `***text***` for headings, which start on a fresh line
//! - `**text**` for bold
//! - `*text*` for italic
//!
//! Everything else is plain text, including asterisks that do not form a
//! complete pair.
//!
//! ## Architecture
//!
//! The interactive pager uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`markup`]: Parsing source text into a [`markup::StyledDocument`]
//! - [`ansi`]: Styled, plain and JSON output for pipes and terminals
//! - [`app`]: The pager's state and event loop
//! - [`ui`]: Layout, wrapping and terminal rendering
//! - [`source`]: Reading files or stdin
//! - [`config`]: Saved default flags
//! - [`practices`]: Built-in sample content
//! - [`watcher`]: File watching

pub mod ansi;
pub mod app;
pub mod config;
pub mod markup;
pub mod perf;
pub mod practices;
pub mod source;
pub mod theme;
pub mod ui;
pub mod watcher;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::markup::{Segment, SpanStyle, StyledDocument, StyledSpan, parse};
    pub use crate::ui::viewport::Viewport;
}
