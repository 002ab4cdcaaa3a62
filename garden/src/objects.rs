//! Decoration layer: placed plant and rock sprites.
//!
//! Objects live in a flat list in insertion order, which doubles as the
//! stacking order. Placement and dragging are collision-checked against
//! every other object's axis-aligned bounding box; boxes may touch at the
//! edges but never strictly overlap.

#[cfg(test)]
#[path = "objects_test.rs"]
mod objects_test;

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{
    AUTO_FILL_ATTEMPTS, CANVAS_H, CANVAS_W, PLANT_H, PLANT_SPRITES, PLANT_W, ROCK_H, ROCK_SPRITES,
    ROCK_W,
};
use crate::coords::Point;

/// Unique identifier for a placed object.
pub type PlacedObjectId = Uuid;

/// The kind of a placed object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Plant,
    Rock,
}

impl ObjectKind {
    /// Number of distinct sprites available for this kind.
    #[must_use]
    pub fn sprite_count(self) -> usize {
        match self {
            Self::Plant => PLANT_SPRITES,
            Self::Rock => ROCK_SPRITES,
        }
    }

    /// Default bounding-box size in canvas pixels.
    #[must_use]
    pub fn default_size(self) -> (f64, f64) {
        match self {
            Self::Plant => (PLANT_W, PLANT_H),
            Self::Rock => (ROCK_W, ROCK_H),
        }
    }
}

/// A positioned sprite on the canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedObject {
    /// Unique identifier, re-minted when a snapshot is loaded.
    pub id: PlacedObjectId,
    /// Plant or rock.
    pub kind: ObjectKind,
    /// Left edge of the bounding box in canvas pixels.
    pub x: f64,
    /// Top edge of the bounding box in canvas pixels.
    pub y: f64,
    /// Bounding-box width in canvas pixels.
    pub width: f64,
    /// Bounding-box height in canvas pixels.
    pub height: f64,
    /// Which sprite of the kind's sheet to draw.
    pub sprite_index: usize,
}

impl PlacedObject {
    /// Whether `point` falls inside this object's bounding box.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    /// Whether this object's box strictly overlaps `other`'s.
    /// Edge-touching boxes do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &PlacedObject) -> bool {
        boxes_overlap(
            (self.x, self.y, self.width, self.height),
            (other.x, other.y, other.width, other.height),
        )
    }
}

fn boxes_overlap(a: (f64, f64, f64, f64), b: (f64, f64, f64, f64)) -> bool {
    a.0 < b.0 + b.2 && b.0 < a.0 + a.2 && a.1 < b.1 + b.3 && b.1 < a.1 + a.3
}

/// Clamp a box's top-left corner so the box stays on the canvas.
fn clamp_to_canvas(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    (x.clamp(0.0, CANVAS_W - width), y.clamp(0.0, CANVAS_H - height))
}

/// Why a placement or move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlaceError {
    /// The candidate box overlaps an existing object.
    #[error("that spot is already taken")]
    Overlap,
    /// No object with the given id exists.
    #[error("no such object")]
    NotFound,
}

/// The flat, ordered list of placed objects.
#[derive(Debug, Clone, Default)]
pub struct ObjectLayer {
    objects: Vec<PlacedObject>,
}

impl ObjectLayer {
    /// An empty layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all objects with a loaded snapshot, preserving order.
    pub fn load(&mut self, objects: Vec<PlacedObject>) {
        self.objects = objects;
    }

    /// Objects in insertion (stacking) order, bottom first.
    #[must_use]
    pub fn objects(&self) -> &[PlacedObject] {
        &self.objects
    }

    /// Number of placed objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the layer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Look up an object by id.
    #[must_use]
    pub fn get(&self, id: PlacedObjectId) -> Option<&PlacedObject> {
        self.objects.iter().find(|obj| obj.id == id)
    }

    /// Place a new object of `kind` centered on `pointer`.
    ///
    /// The candidate box is clamped to the canvas; placement fails with
    /// [`PlaceError::Overlap`] when it would intersect any existing object.
    /// On success the object gets a fresh id and a random sprite index.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::Overlap`] when the spot is taken.
    pub fn place(
        &mut self,
        kind: ObjectKind,
        pointer: Point,
        rng: &mut impl Rng,
    ) -> Result<PlacedObjectId, PlaceError> {
        let (width, height) = kind.default_size();
        let (x, y) = clamp_to_canvas(pointer.x - width / 2.0, pointer.y - height / 2.0, width, height);
        self.place_box(kind, x, y, width, height, rng)
    }

    fn place_box(
        &mut self,
        kind: ObjectKind,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rng: &mut impl Rng,
    ) -> Result<PlacedObjectId, PlaceError> {
        let candidate = PlacedObject {
            id: Uuid::new_v4(),
            kind,
            x,
            y,
            width,
            height,
            sprite_index: rng.random_range(0..kind.sprite_count()),
        };
        if self.objects.iter().any(|obj| obj.overlaps(&candidate)) {
            return Err(PlaceError::Overlap);
        }
        let id = candidate.id;
        self.objects.push(candidate);
        Ok(id)
    }

    /// Scatter up to `target` objects of `kind` at random free positions.
    ///
    /// Each requested object gets a bounded number of attempts; fewer than
    /// `target` may be placed when space runs out. Returns how many were
    /// actually placed.
    pub fn auto_fill(&mut self, kind: ObjectKind, target: usize, rng: &mut impl Rng) -> usize {
        let (width, height) = kind.default_size();
        let mut placed = 0;
        for _ in 0..target {
            for _ in 0..AUTO_FILL_ATTEMPTS {
                let x = rng.random_range(0.0..=(CANVAS_W - width));
                let y = rng.random_range(0.0..=(CANVAS_H - height));
                if self.place_box(kind, x, y, width, height, rng).is_ok() {
                    placed += 1;
                    break;
                }
            }
        }
        placed
    }

    /// Topmost object under `point`, if any. Later insertions win.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<&PlacedObject> {
        self.objects.iter().rev().find(|obj| obj.contains(point))
    }

    /// Move an object's top-left corner to `(x, y)`, clamped to the canvas.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::NotFound`] for an unknown id and
    /// [`PlaceError::Overlap`] when the new box would intersect another
    /// object; the object keeps its last valid position in both cases.
    pub fn move_to(&mut self, id: PlacedObjectId, x: f64, y: f64) -> Result<(), PlaceError> {
        let index = self
            .objects
            .iter()
            .position(|obj| obj.id == id)
            .ok_or(PlaceError::NotFound)?;
        let (width, height) = (self.objects[index].width, self.objects[index].height);
        let (x, y) = clamp_to_canvas(x, y, width, height);

        let candidate = (x, y, width, height);
        let blocked = self.objects.iter().enumerate().any(|(i, obj)| {
            i != index && boxes_overlap(candidate, (obj.x, obj.y, obj.width, obj.height))
        });
        if blocked {
            return Err(PlaceError::Overlap);
        }
        self.objects[index].x = x;
        self.objects[index].y = y;
        Ok(())
    }

    /// Remove an object by id, returning it if present.
    pub fn remove(&mut self, id: PlacedObjectId) -> Option<PlacedObject> {
        let index = self.objects.iter().position(|obj| obj.id == id)?;
        Some(self.objects.remove(index))
    }
}
