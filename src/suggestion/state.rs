use crate::variables::Variable;

/// Live autocomplete state.
///
/// `query == None` means no session is active. Whenever `candidates` is
/// non-empty, `selected_index` is a valid index into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionState {
    pub(super) query: Option<String>,
    pub(super) candidates: Vec<Variable>,
    pub(super) selected_index: usize,
}

impl SuggestionState {
    /// Inactive state.
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn is_active(&self) -> bool {
        self.query.is_some()
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn candidates(&self) -> &[Variable] {
        &self.candidates
    }

    pub const fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// The highlighted candidate, if any.
    pub fn selected(&self) -> Option<&Variable> {
        self.candidates.get(self.selected_index)
    }

    /// Placeholder text for an active session with nothing to offer.
    pub fn empty_message(&self) -> Option<&'static str> {
        (self.is_active() && self.candidates.is_empty()).then_some("No variables found")
    }

    /// Check the index invariant.
    pub(super) fn debug_check(&self) {
        debug_assert!(
            self.candidates.is_empty() || self.selected_index < self.candidates.len(),
            "selected_index {} out of range for {} candidates",
            self.selected_index,
            self.candidates.len()
        );
    }
}
