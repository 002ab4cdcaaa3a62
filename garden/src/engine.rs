//! Session state and the pointer-event entry points.
//!
//! `GardenEngine` replaces the scattered globals of a typical canvas page
//! with one explicit struct: the sand grid, the object layer, the active
//! tool, the gesture state, and the rake phase counter all live here. The
//! host feeds pointer events in and acts on the returned [`Action`]s
//! (redraw, persist, show a transient message).

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use rand::Rng;

use crate::consts::{BOOT_DENSITY, RANDOM_DENSITY};
use crate::coords::{Point, pointer_to_cell};
use crate::grid::Grid;
use crate::input::{InputState, Modifiers, UiState};
use crate::objects::{ObjectKind, ObjectLayer, PlacedObjectId};
use crate::snapshot;
use crate::store::SnapshotStore;
use crate::tools::{self, Tool};

/// Message shown when a mutating operation is attempted in viewer mode.
pub const READ_ONLY_MSG: &str = "This garden is read-only.";

/// Actions returned from event handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Nothing changed.
    None,
    /// State changed; redraw the full frame.
    RenderNeeded,
    /// A stroke, drag, placement, or deletion completed; persist a local
    /// snapshot (and redraw).
    SnapshotNeeded,
    /// A new object was appended to the layer.
    ObjectPlaced(PlacedObjectId),
    /// An object was removed from the layer.
    ObjectRemoved(PlacedObjectId),
    /// Show a transient user-facing message; nothing was mutated.
    Message(String),
}

/// The full garden session: grid, objects, UI, and gesture state.
pub struct GardenEngine {
    /// The sand grid.
    pub grid: Grid,
    /// Placed plant and rock sprites.
    pub objects: ObjectLayer,
    /// Tool selection, read-only flag, cursor position.
    pub ui: UiState,
    /// Active gesture, if any.
    pub input: InputState,
    /// Monotonic rake phase counter.
    pub rake_phase: u64,
}

impl GardenEngine {
    /// A fresh session: lightly randomized sand, no objects.
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut grid = Grid::new(rng);
        grid.randomize(rng, BOOT_DENSITY);
        Self {
            grid,
            objects: ObjectLayer::new(),
            ui: UiState::default(),
            input: InputState::Idle,
            rake_phase: 0,
        }
    }

    /// A session hydrated from decoded snapshot state.
    #[must_use]
    pub fn from_parts(grid: Grid, objects: ObjectLayer, read_only: bool) -> Self {
        Self {
            grid,
            objects,
            ui: UiState { read_only, ..UiState::default() },
            input: InputState::Idle,
            rake_phase: 0,
        }
    }

    /// Start a session with the standard fallback chain: a shared snapshot
    /// from the URL (read-only), then the local store, then a random seed.
    pub fn boot(
        shared: Option<&serde_json::Value>,
        store: &SnapshotStore,
        rng: &mut impl Rng,
    ) -> Self {
        if let Some(value) = shared {
            if let Ok(decoded) = snapshot::decode(value, rng) {
                return Self::from_parts(decoded.grid, decoded.objects, true);
            }
        }
        if let Some(value) = store.load() {
            if let Ok(decoded) = snapshot::decode(&value, rng) {
                return Self::from_parts(decoded.grid, decoded.objects, false);
            }
        }
        Self::new(rng)
    }

    /// Scatter random plants and rocks at free positions, accepting fewer
    /// than requested when space runs out.
    pub fn auto_decorate(&mut self, plants: usize, rocks: usize, rng: &mut impl Rng) -> Action {
        if self.ui.read_only {
            return Action::Message(READ_ONLY_MSG.to_owned());
        }
        self.objects.auto_fill(ObjectKind::Plant, plants, rng);
        self.objects.auto_fill(ObjectKind::Rock, rocks, rng);
        Action::SnapshotNeeded
    }

    /// Select the active tool.
    pub fn set_tool(&mut self, tool: Tool) {
        self.ui.tool = tool;
    }

    /// Whether this is a viewer (read-only) session.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.ui.read_only
    }

    /// Track the hover position for the cursor overlay.
    pub fn set_cursor(&mut self, pos: Point) -> Action {
        let moved_cell = match self.ui.cursor {
            Some(prev) => pointer_to_cell(prev) != pointer_to_cell(pos),
            None => true,
        };
        self.ui.cursor = Some(pos);
        if moved_cell && !self.ui.read_only { Action::RenderNeeded } else { Action::None }
    }

    /// Clear the hover position (pointer left the canvas).
    pub fn clear_cursor(&mut self) -> Action {
        if self.ui.cursor.take().is_some() { Action::RenderNeeded } else { Action::None }
    }

    /// Begin a gesture at `pos`.
    pub fn pointer_down(&mut self, pos: Point, modifiers: Modifiers, rng: &mut impl Rng) -> Action {
        if self.ui.read_only {
            return Action::Message(READ_ONLY_MSG.to_owned());
        }
        self.ui.cursor = Some(pos);

        if self.ui.tool.is_brush() {
            self.input = InputState::Stroking;
            return self.apply_brush(pos, rng);
        }
        let Some(kind) = self.ui.tool.object_kind() else {
            return Action::None;
        };

        // Existing object of the active kind: delete or start a drag.
        let hit = self
            .objects
            .hit_test(pos)
            .filter(|obj| obj.kind == kind)
            .map(|obj| (obj.id, pos.x - obj.x, pos.y - obj.y));
        if let Some((id, grab_dx, grab_dy)) = hit {
            if modifiers.any() {
                self.objects.remove(id);
                return Action::ObjectRemoved(id);
            }
            self.input = InputState::DraggingObject { id, grab_dx, grab_dy };
            return Action::RenderNeeded;
        }
        // Empty space: place a new object.
        match self.objects.place(kind, pos, rng) {
            Ok(id) => Action::ObjectPlaced(id),
            Err(err) => Action::Message(err.to_string()),
        }
    }

    /// Continue the active gesture at `pos`.
    pub fn pointer_move(&mut self, pos: Point, rng: &mut impl Rng) -> Action {
        if self.ui.read_only {
            return Action::None;
        }
        self.ui.cursor = Some(pos);

        match self.input {
            InputState::Idle => Action::None,
            InputState::Stroking => self.apply_brush(pos, rng),
            InputState::DraggingObject { id, grab_dx, grab_dy } => {
                // Failed moves leave the object at its last valid position.
                match self.objects.move_to(id, pos.x - grab_dx, pos.y - grab_dy) {
                    Ok(()) => Action::RenderNeeded,
                    Err(_) => Action::None,
                }
            }
        }
    }

    /// End the active gesture.
    pub fn pointer_up(&mut self) -> Action {
        if self.ui.read_only {
            return Action::None;
        }
        match std::mem::take(&mut self.input) {
            InputState::Idle => Action::None,
            InputState::Stroking | InputState::DraggingObject { .. } => Action::SnapshotNeeded,
        }
    }

    /// Reset the grid to untouched sand. Objects are kept.
    pub fn clear(&mut self, rng: &mut impl Rng) -> Action {
        if self.ui.read_only {
            return Action::Message(READ_ONLY_MSG.to_owned());
        }
        self.grid.clear(rng);
        Action::SnapshotNeeded
    }

    /// Replace the grid with a randomly scattered garden.
    pub fn randomize(&mut self, rng: &mut impl Rng) -> Action {
        if self.ui.read_only {
            return Action::Message(READ_ONLY_MSG.to_owned());
        }
        self.grid.randomize(rng, RANDOM_DENSITY);
        Action::SnapshotNeeded
    }

    fn apply_brush(&mut self, pos: Point, rng: &mut impl Rng) -> Action {
        let Some((row, col)) = pointer_to_cell(pos) else {
            return Action::None;
        };
        match self.ui.tool {
            Tool::Wand => tools::apply_wand(&mut self.grid, row, col, rng),
            Tool::Smoother => tools::apply_smoother(&mut self.grid, row, col, rng),
            Tool::Rake => tools::apply_rake(&mut self.grid, row, col, &mut self.rake_phase, rng),
            Tool::Plant | Tool::Rock => return Action::None,
        }
        Action::RenderNeeded
    }
}
