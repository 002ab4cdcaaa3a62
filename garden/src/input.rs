//! Input model: modifier keys, persistent UI state, and the gesture state
//! machine tracked between pointer-down and pointer-up.

use crate::coords::Point;
use crate::objects::PlacedObjectId;
use crate::tools::Tool;

/// Keyboard modifier keys held during a pointer event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Whether the delete modifier (any of them) is held.
    #[must_use]
    pub fn any(self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Currently active tool.
    pub tool: Tool,
    /// Viewer sessions may not mutate anything.
    pub read_only: bool,
    /// Last known pointer position, for the tool-cursor overlay.
    pub cursor: Option<Point>,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Copy, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A brush stroke is active; every pointer-move applies the tool.
    Stroking,
    /// An existing object is being dragged.
    DraggingObject {
        /// Id of the object being dragged.
        id: PlacedObjectId,
        /// Pointer-to-object-origin offset captured at pointer-down.
        grab_dx: f64,
        /// Pointer-to-object-origin offset captured at pointer-down.
        grab_dy: f64,
    },
}
