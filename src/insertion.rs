//! Replacing a typed trigger query with a variable node.
//!
//! When a candidate is confirmed, the text from the trigger sequence up to
//! the cursor (`{{na` for example) is swapped for one `variable` node. The
//! trigger is located by scanning a fixed window of text before the cursor.
//! A trigger further back than [`LOOKBACK_WINDOW`] characters is not found
//! and the node is inserted at the cursor without deleting anything; this is
//! a known limitation, not an error.

use std::ops::Range;

use crate::document::DocumentNode;
use crate::surface::{EditingSurface, Selection};
use crate::variables::Variable;

/// Sequence that opens a variable query.
pub const TRIGGER: &str = "{{";

/// Characters before the cursor searched for [`TRIGGER`].
pub const LOOKBACK_WINDOW: usize = 20;

/// A planned document mutation: replace `range` with `node`.
#[derive(Debug, Clone, PartialEq)]
pub struct Insertion {
    pub range: Range<usize>,
    pub node: DocumentNode,
}

impl Insertion {
    /// Whether the plan found the trigger and deletes the typed query.
    pub const fn replaces_trigger(&self) -> bool {
        self.range.start != self.range.end
    }
}

/// Compute the replacement for `variable` given the selection and the text
/// immediately preceding `selection.from`.
///
/// Positions count characters, matching `text_before`.
pub fn plan_insertion(variable: &Variable, selection: Selection, preceding_text: &str) -> Insertion {
    let node = DocumentNode::variable(&variable.id, &variable.label);
    let Some(byte_idx) = preceding_text.rfind(TRIGGER) else {
        return Insertion {
            range: selection.from..selection.from,
            node,
        };
    };

    let offset = preceding_text[..byte_idx].chars().count();
    let len = preceding_text.chars().count();
    let start = selection.from.saturating_sub(len - offset);
    Insertion {
        range: start..selection.to.max(start),
        node,
    }
}

/// Replace the trigger query before the cursor with `variable`.
///
/// Returns the applied plan. The caller resets the suggestion session
/// afterwards.
pub fn insert<S: EditingSurface + ?Sized>(surface: &mut S, variable: &Variable) -> Insertion {
    let selection = surface.selection();
    let preceding = surface.text_before(selection.from, LOOKBACK_WINDOW);
    let plan = plan_insertion(variable, selection, &preceding);
    if plan.replaces_trigger() {
        tracing::debug!(
            id = %variable.id,
            from = plan.range.start,
            to = plan.range.end,
            "replacing trigger query with variable"
        );
    } else {
        tracing::debug!(
            id = %variable.id,
            pos = plan.range.start,
            "trigger not found in lookback window, inserting at cursor"
        );
    }
    surface.replace_range_with_node(plan.range.clone(), plan.node.clone());
    plan
}
