//! Structured documents and their HTML serialization.
//!
//! This module handles:
//! - The node tree handed over by the editing engine as a snapshot
//! - Recursive conversion of that tree to HTML, raw or rendered

mod serializer;
mod types;

pub use serializer::{HtmlMode, HtmlSerializer, VARIABLE_GLYPH, serialize};
pub use types::{Attrs, DocumentNode, Mark, NodeKind};
