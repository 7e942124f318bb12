use crate::suggestion::{Key, KeyResponse, SuggestionController};
use crate::variables::Variable;

/// Events delivered to a session, in the order the host observed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Trigger hook
    /// Trigger sequence typed; carries the (possibly empty) query
    TriggerStart(String),
    /// Query text after the trigger changed
    TriggerUpdate(String),
    /// Trigger context lost (cursor moved away, trigger deleted)
    TriggerExit,

    // Keyboard
    /// Key pressed while the popover may be open
    Key(Key),

    // Pointer
    /// Candidate hovered in the popover
    SelectCandidate(usize),
    /// Candidate clicked in the popover
    ConfirmCandidate(usize),
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Replace the trigger query with this variable
    Insert(Variable),
}

/// Result of applying one message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Outcome {
    /// Whether the host should suppress its default handling
    pub handled: bool,
    pub effect: Option<Effect>,
}

impl Outcome {
    const fn ignored() -> Self {
        Self {
            handled: false,
            effect: None,
        }
    }

    const fn handled() -> Self {
        Self {
            handled: true,
            effect: None,
        }
    }

    const fn insert(variable: Variable) -> Self {
        Self {
            handled: true,
            effect: Some(Effect::Insert(variable)),
        }
    }
}

/// Apply `message` to the suggestion state.
///
/// Pure with respect to the document: anything touching the editing surface
/// is returned as an [`Effect`].
pub fn update(controller: &mut SuggestionController, message: Message) -> Outcome {
    match message {
        Message::TriggerStart(query) => {
            controller.on_trigger_start(&query);
            Outcome::handled()
        }
        Message::TriggerUpdate(query) => {
            controller.on_trigger_update(&query);
            Outcome::handled()
        }
        Message::TriggerExit => {
            controller.on_trigger_exit();
            Outcome::handled()
        }
        Message::Key(key) => match controller.on_key(&key) {
            KeyResponse::Ignored => Outcome::ignored(),
            KeyResponse::Handled => Outcome::handled(),
            KeyResponse::Confirm(variable) => Outcome::insert(variable),
        },
        Message::SelectCandidate(index) => {
            if controller.select_candidate(index) {
                Outcome::handled()
            } else {
                Outcome::ignored()
            }
        }
        Message::ConfirmCandidate(index) => controller
            .confirm_candidate(index)
            .map_or_else(Outcome::ignored, Outcome::insert),
    }
}
