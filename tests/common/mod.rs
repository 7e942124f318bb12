//! In-memory editing surface for integration tests.
//!
//! Models a single paragraph as a sequence of characters and inline nodes,
//! one document position per item.

use std::ops::Range;

use varedit::document::DocumentNode;
use varedit::surface::{Coords, EditingSurface, Selection};

#[derive(Debug, Clone)]
enum Inline {
    Char(char),
    Node(DocumentNode),
}

#[derive(Debug, Default)]
pub struct ParagraphSurface {
    items: Vec<Inline>,
    cursor: usize,
}

impl ParagraphSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `text` at the cursor and move past it.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.items.insert(self.cursor, Inline::Char(ch));
            self.cursor += 1;
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl EditingSurface for ParagraphSurface {
    fn document_snapshot(&self) -> DocumentNode {
        let mut content = Vec::new();
        let mut run = String::new();
        for item in &self.items {
            match item {
                Inline::Char(ch) => run.push(*ch),
                Inline::Node(node) => {
                    if !run.is_empty() {
                        content.push(DocumentNode::text(std::mem::take(&mut run)));
                    }
                    content.push(node.clone());
                }
            }
        }
        if !run.is_empty() {
            content.push(DocumentNode::text(run));
        }
        DocumentNode::doc(vec![DocumentNode::paragraph(content)])
    }

    fn selection(&self) -> Selection {
        Selection::cursor(self.cursor)
    }

    fn text_before(&self, pos: usize, window: usize) -> String {
        let end = pos.min(self.items.len());
        self.items[end.saturating_sub(window)..end]
            .iter()
            .filter_map(|item| match item {
                Inline::Char(ch) => Some(*ch),
                Inline::Node(_) => None,
            })
            .collect()
    }

    fn replace_range_with_node(&mut self, range: Range<usize>, node: DocumentNode) {
        let start = range.start.min(self.items.len());
        let end = range.end.clamp(start, self.items.len());
        self.items.splice(start..end, [Inline::Node(node)]);
        self.cursor = start + 1;
    }

    fn coords_at_position(&self, pos: usize) -> Coords {
        Coords::new(16.0, 8.0 * pos as f64)
    }
}
