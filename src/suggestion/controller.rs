use crate::suggestion::key::Key;
use crate::suggestion::state::SuggestionState;
use crate::variables::{Variable, VariableRegistry};

/// Outcome of a key press during a suggestion session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyResponse {
    /// Not ours; the engine's default input handling proceeds.
    Ignored,
    /// Consumed by the popover.
    Handled,
    /// Consumed, and `Variable` was confirmed for insertion. The session has
    /// already been closed.
    Confirm(Variable),
}

impl KeyResponse {
    pub const fn handled(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Suggestion state machine.
///
/// Transitions mirror the engine's trigger hook: start, update, exit, and key
/// presses while a session is open. Pointer selection from the popover goes
/// through [`Self::select_candidate`] and [`Self::confirm_candidate`].
#[derive(Debug, Clone)]
pub struct SuggestionController {
    registry: VariableRegistry,
    state: SuggestionState,
}

impl SuggestionController {
    pub fn new(registry: VariableRegistry) -> Self {
        Self {
            registry,
            state: SuggestionState::new(),
        }
    }

    pub const fn registry(&self) -> &VariableRegistry {
        &self.registry
    }

    pub const fn state(&self) -> &SuggestionState {
        &self.state
    }

    /// Open a session for `query` with the first candidate highlighted.
    pub fn on_trigger_start(&mut self, query: &str) {
        tracing::trace!(query, "suggestion session started");
        self.state.query = Some(query.to_string());
        self.state.candidates = self.registry.filter(query);
        self.state.selected_index = 0;
        self.state.debug_check();
    }

    /// Refilter for an edited query.
    ///
    /// The highlight is kept where it was, pulled back to the last candidate
    /// when the list shrank past it.
    pub fn on_trigger_update(&mut self, query: &str) {
        tracing::trace!(query, "suggestion query updated");
        self.state.query = Some(query.to_string());
        self.state.candidates = self.registry.filter(query);
        if let Some(last) = self.state.candidates.len().checked_sub(1) {
            self.state.selected_index = self.state.selected_index.min(last);
        }
        self.state.debug_check();
    }

    /// Close the session. Idempotent.
    pub fn on_trigger_exit(&mut self) {
        if self.state.is_active() {
            tracing::trace!("suggestion session closed");
        }
        self.state = SuggestionState::new();
    }

    /// React to a key press.
    ///
    /// Keys outside an active session are always ignored.
    pub fn on_key(&mut self, key: &Key) -> KeyResponse {
        if !self.state.is_active() {
            return KeyResponse::Ignored;
        }
        let len = self.state.candidates.len();
        match key {
            Key::Escape => {
                self.on_trigger_exit();
                KeyResponse::Handled
            }
            Key::ArrowUp => {
                if len > 0 {
                    self.state.selected_index = match self.state.selected_index {
                        0 => len - 1,
                        idx => idx - 1,
                    };
                }
                KeyResponse::Handled
            }
            Key::ArrowDown => {
                if len > 0 {
                    self.state.selected_index = if self.state.selected_index >= len - 1 {
                        0
                    } else {
                        self.state.selected_index + 1
                    };
                }
                KeyResponse::Handled
            }
            Key::Enter => {
                let confirmed = self.state.selected().cloned();
                self.on_trigger_exit();
                confirmed.map_or(KeyResponse::Handled, KeyResponse::Confirm)
            }
            Key::Other(_) => KeyResponse::Ignored,
        }
    }

    /// Highlight candidate `index` (pointer hover). Out-of-range is ignored.
    pub fn select_candidate(&mut self, index: usize) -> bool {
        if index < self.state.candidates.len() {
            self.state.selected_index = index;
            true
        } else {
            false
        }
    }

    /// Confirm candidate `index` (pointer click) and close the session.
    pub fn confirm_candidate(&mut self, index: usize) -> Option<Variable> {
        let confirmed = self.state.candidates.get(index).cloned();
        if confirmed.is_some() {
            self.on_trigger_exit();
        }
        confirmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> SuggestionController {
        SuggestionController::new(
            VariableRegistry::new(vec![
                Variable::new("first_name", "First Name", "Ada"),
                Variable::new("last_name", "Last Name", "Lovelace"),
                Variable::new("company", "Company", "Analytical Engines"),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_start_filters_and_resets_selection() {
        let mut c = controller();
        c.on_trigger_start("name");
        assert_eq!(c.state().query(), Some("name"));
        assert_eq!(c.state().candidates().len(), 2);
        assert_eq!(c.state().selected_index(), 0);
    }

    #[test]
    fn test_update_keeps_selection() {
        let mut c = controller();
        c.on_trigger_start("");
        c.on_key(&Key::ArrowDown);
        c.on_trigger_update("a");
        assert_eq!(c.state().selected_index(), 1);
    }

    #[test]
    fn test_update_clamps_selection_when_list_shrinks() {
        let mut c = controller();
        c.on_trigger_start("");
        c.on_key(&Key::ArrowUp);
        assert_eq!(c.state().selected_index(), 2);
        c.on_trigger_update("name");
        assert_eq!(c.state().selected_index(), 1);
        assert_eq!(c.state().selected().unwrap().id, "last_name");
    }

    #[test]
    fn test_arrow_up_wraps_to_last() {
        let mut c = controller();
        c.on_trigger_start("");
        assert_eq!(c.on_key(&Key::ArrowUp), KeyResponse::Handled);
        assert_eq!(c.state().selected_index(), 2);
    }

    #[test]
    fn test_arrow_down_wraps_to_first() {
        let mut c = controller();
        c.on_trigger_start("");
        c.on_key(&Key::ArrowDown);
        c.on_key(&Key::ArrowDown);
        assert_eq!(c.state().selected_index(), 2);
        c.on_key(&Key::ArrowDown);
        assert_eq!(c.state().selected_index(), 0);
    }

    #[test]
    fn test_navigation_with_no_candidates_stays_at_zero() {
        let mut c = controller();
        c.on_trigger_start("zzz");
        assert!(c.on_key(&Key::ArrowUp).handled());
        assert_eq!(c.state().selected_index(), 0);
        assert!(c.on_key(&Key::ArrowDown).handled());
        assert_eq!(c.state().selected_index(), 0);
        assert_eq!(c.state().empty_message(), Some("No variables found"));
    }

    #[test]
    fn test_enter_confirms_selected_and_closes() {
        let mut c = controller();
        c.on_trigger_start("");
        c.on_key(&Key::ArrowDown);
        let response = c.on_key(&Key::Enter);
        assert_eq!(
            response,
            KeyResponse::Confirm(Variable::new("last_name", "Last Name", "Lovelace"))
        );
        assert!(!c.state().is_active());
        assert!(c.state().candidates().is_empty());
    }

    #[test]
    fn test_enter_without_candidate_still_closes() {
        let mut c = controller();
        c.on_trigger_start("zzz");
        assert_eq!(c.on_key(&Key::Enter), KeyResponse::Handled);
        assert_eq!(c.state().query(), None);
    }

    #[test]
    fn test_escape_closes_session() {
        let mut c = controller();
        c.on_trigger_start("first");
        assert_eq!(c.on_key(&Key::Escape), KeyResponse::Handled);
        assert!(!c.state().is_active());
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mut c = controller();
        c.on_trigger_start("");
        assert_eq!(c.on_key(&Key::Other("a".into())), KeyResponse::Ignored);
        assert!(c.state().is_active());
    }

    #[test]
    fn test_keys_ignored_without_session() {
        let mut c = controller();
        assert_eq!(c.on_key(&Key::Enter), KeyResponse::Ignored);
        assert_eq!(c.on_key(&Key::Escape), KeyResponse::Ignored);
    }

    #[test]
    fn test_exit_is_idempotent() {
        let mut c = controller();
        c.on_trigger_start("c");
        c.on_trigger_exit();
        let once = c.state().clone();
        c.on_trigger_exit();
        assert_eq!(c.state(), &once);
        assert_eq!(c.state().selected_index(), 0);
    }

    #[test]
    fn test_pointer_select_and_confirm() {
        let mut c = controller();
        c.on_trigger_start("");
        assert!(c.select_candidate(2));
        assert!(!c.select_candidate(3));
        assert_eq!(c.state().selected_index(), 2);
        let confirmed = c.confirm_candidate(0).unwrap();
        assert_eq!(confirmed.id, "first_name");
        assert!(!c.state().is_active());
        assert!(c.confirm_candidate(0).is_none());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_key() -> impl Strategy<Value = Key> {
            prop_oneof![
                Just(Key::ArrowUp),
                Just(Key::ArrowDown),
                Just(Key::Other("x".to_string())),
            ]
        }

        proptest! {
            #[test]
            fn selection_stays_in_range(
                query in "[a-z]{0,2}",
                updates in proptest::collection::vec("[a-z ]{0,3}", 0..5),
                keys in proptest::collection::vec(arb_key(), 0..20),
            ) {
                let mut c = controller();
                c.on_trigger_start(&query);
                for (i, key) in keys.iter().enumerate() {
                    if let Some(update) = updates.get(i) {
                        c.on_trigger_update(update);
                    }
                    c.on_key(key);
                    let state = c.state();
                    prop_assert!(
                        state.candidates().is_empty()
                            || state.selected_index() < state.candidates().len()
                    );
                }
            }

            #[test]
            fn enter_always_ends_session(query in "[a-z]{0,4}", downs in 0..5usize) {
                let mut c = controller();
                c.on_trigger_start(&query);
                for _ in 0..downs {
                    c.on_key(&Key::ArrowDown);
                }
                prop_assert!(c.on_key(&Key::Enter).handled());
                prop_assert_eq!(c.state().query(), None);
            }
        }
    }
}
