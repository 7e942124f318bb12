//! Editing session: the suggestion state machine wired to an editing surface.
//!
//! This module follows The Elm Architecture (TEA):
//! - [`Message`]: Trigger, key, and pointer events from the host
//! - [`update`]: State transitions over the suggestion state
//! - [`Effect`]: Document mutations, applied by [`Session`] through the surface
//!
//! Messages are applied one at a time, in arrival order, against the single
//! suggestion state owned by the session.

mod effects;
mod update;

pub use update::{Effect, Message, Outcome, update};

use crate::document::HtmlMode;
use crate::export::{ExportedFile, export_document};
use crate::suggestion::{PopoverPosition, SuggestionController, SuggestionState};
use crate::surface::{Coords, EditingSurface};
use crate::variables::VariableRegistry;

/// An editor session over an optional editing surface.
///
/// Until a surface is attached the session is "not ready": suggestions still
/// track state, but insertion and export are no-ops.
#[derive(Debug)]
pub struct Session<S> {
    surface: Option<S>,
    controller: SuggestionController,
}

impl<S: EditingSurface> Session<S> {
    /// Create a session with no surface attached yet.
    pub fn new(registry: VariableRegistry) -> Self {
        Self {
            surface: None,
            controller: SuggestionController::new(registry),
        }
    }

    /// Attach the editing surface.
    #[must_use]
    pub fn with_surface(mut self, surface: S) -> Self {
        self.surface = Some(surface);
        self
    }

    pub fn attach_surface(&mut self, surface: S) {
        self.surface = Some(surface);
    }

    /// Detach and return the surface, closing any open suggestion session.
    pub fn detach_surface(&mut self) -> Option<S> {
        self.controller.on_trigger_exit();
        self.surface.take()
    }

    pub const fn is_ready(&self) -> bool {
        self.surface.is_some()
    }

    pub const fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub const fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub const fn registry(&self) -> &VariableRegistry {
        self.controller.registry()
    }

    /// Current suggestion state, for rendering the popover.
    pub const fn suggestions(&self) -> &SuggestionState {
        self.controller.state()
    }

    /// Apply one message. Returns whether the host's default handling
    /// should be suppressed.
    pub fn dispatch(&mut self, message: Message) -> bool {
        let outcome = update(&mut self.controller, message);
        if let Some(effect) = outcome.effect {
            self.handle_effect(effect);
        }
        outcome.handled
    }

    /// Popover placement for the current cursor, relative to `container`.
    ///
    /// `None` while no suggestion session is open or the surface is absent.
    pub fn popover_position(&self, container: Coords) -> Option<PopoverPosition> {
        if !self.controller.state().is_active() {
            return None;
        }
        let surface = self.surface.as_ref()?;
        let caret = surface.coords_at_position(surface.selection().from);
        Some(PopoverPosition::place(caret, container))
    }

    /// Export the current document. `None` while the surface is absent.
    pub fn export(&self, mode: HtmlMode) -> Option<ExportedFile> {
        let Some(surface) = self.surface.as_ref() else {
            tracing::debug!(mode = mode.as_str(), "editing surface not ready, skipping export");
            return None;
        };
        Some(export_document(
            &surface.document_snapshot(),
            self.controller.registry(),
            mode,
        ))
    }
}
