use crate::app::Session;
use crate::app::update::Effect;
use crate::insertion;
use crate::surface::EditingSurface;

impl<S: EditingSurface> Session<S> {
    pub(super) fn handle_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Insert(variable) => {
                let Some(surface) = self.surface.as_mut() else {
                    tracing::debug!(id = %variable.id, "editing surface not ready, skipping insertion");
                    return;
                };
                insertion::insert(surface, &variable);
                // Session is inactive after every insertion.
                self.controller.on_trigger_exit();
            }
        }
    }
}
