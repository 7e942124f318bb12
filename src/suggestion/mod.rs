//! Variable autocomplete.
//!
//! A suggestion session starts when the trigger sequence is typed and ends on
//! confirmation, cancellation, or when the engine reports the trigger context
//! is gone. [`SuggestionController`] owns the one authoritative
//! [`SuggestionState`]; every event reads and writes that value in arrival
//! order, so a navigation key always sees the candidates produced by the
//! most recent query update.

mod controller;
mod key;
mod placement;
mod state;

pub use controller::{KeyResponse, SuggestionController};
pub use key::Key;
pub use placement::PopoverPosition;
pub use state::SuggestionState;
