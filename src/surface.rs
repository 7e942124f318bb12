//! The editing engine seam.
//!
//! The rich-text engine that owns the live document is external. This crate
//! only reads snapshots from it and issues single replace commands through
//! [`EditingSurface`].

use std::ops::Range;

use crate::document::DocumentNode;

/// A selection in document positions. `from == to` is a collapsed cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub from: usize,
    pub to: usize,
}

impl Selection {
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    pub const fn cursor(pos: usize) -> Self {
        Self { from: pos, to: pos }
    }

    pub const fn is_collapsed(&self) -> bool {
        self.from == self.to
    }
}

/// Viewport coordinates, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Coords {
    pub top: f64,
    pub left: f64,
}

impl Coords {
    pub const fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }
}

/// Operations the core needs from the editing engine.
pub trait EditingSurface {
    /// Point-in-time copy of the whole document.
    fn document_snapshot(&self) -> DocumentNode;

    /// Current selection.
    fn selection(&self) -> Selection;

    /// Up to `window` characters of text ending at `pos`.
    fn text_before(&self, pos: usize, window: usize) -> String;

    /// Atomically replace `range` with a single inline node.
    fn replace_range_with_node(&mut self, range: Range<usize>, node: DocumentNode);

    /// Screen position of a document position, for popover placement.
    fn coords_at_position(&self, pos: usize) -> Coords;
}
