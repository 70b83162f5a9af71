//! Asterisk markup parsing.
//!
//! This module handles:
//! - Tokenizing `***heading***`, `**bold**`, `*italic*` and plain runs
//! - The [`StyledDocument`] output type consumed by the renderers

mod parser;
mod types;

pub use parser::{parse, to_markup};
pub use types::{Segment, SpanStyle, StyledDocument, StyledSpan};
