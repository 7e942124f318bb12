use crate::surface::Coords;

/// Vertical offset of the popover above the caret.
const OFFSET_TOP: f64 = 20.0;
/// Horizontal offset of the popover right of the caret.
const OFFSET_LEFT: f64 = 20.0;

/// Popover position relative to the editor container.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PopoverPosition {
    pub top: f64,
    pub left: f64,
}

impl PopoverPosition {
    /// Place the popover near `caret`, both in viewport coordinates, relative
    /// to the container's top-left corner.
    pub fn place(caret: Coords, container: Coords) -> Self {
        Self {
            top: caret.top - container.top - OFFSET_TOP,
            left: caret.left - container.left + OFFSET_LEFT,
        }
    }
}
