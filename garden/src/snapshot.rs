//! Versioned snapshot schema and the upgrade chain.
//!
//! Five wire formats exist, all JSON:
//!
//! | Version | Grid | Objects |
//! |---------|------|---------|
//! | v1 (legacy) | rows of `0/1` bits | none |
//! | v2 | rows of `{type, variation}` cells | none |
//! | v3 | rows of surface-type codes | none |
//! | v4 | v3 grid | `plants: [{x, y, sprite}]` |
//! | v5 (current) | v3 grid, or full cells in the local store | `objects: [{kind, x, y, ...}]` |
//!
//! [`decode`] accepts any of them and upgrades in memory: shade variation is
//! re-synthesized wherever the stored format dropped it, v4 plants become
//! unified objects, and object ids are always re-minted. A missing or
//! unrecognized version tag falls back to the legacy single-bit read where
//! any nonzero cell is a mark. Grids of the wrong size are clamped or
//! padded to the fixed 64x40.

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{GRID_COLS, GRID_ROWS, SNAPSHOT_VERSION};
use crate::engine::GardenEngine;
use crate::grid::{Grid, Surface, fresh_variation};
use crate::objects::{ObjectKind, ObjectLayer, PlacedObject};

/// A snapshot decode failure.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The payload has no `grid` array.
    #[error("snapshot has no grid")]
    MissingGrid,
    /// A grid row is not an array.
    #[error("malformed grid row {0}")]
    MalformedRow(usize),
}

/// One cell as stored by the full-fidelity local format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CellRepr {
    /// Surface-type wire code.
    #[serde(rename = "type")]
    pub code: u8,
    /// Stored shade multiplier.
    pub variation: f64,
}

/// One placed object as stored on the wire (ids dropped).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectRepr {
    pub kind: ObjectKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub sprite: usize,
}

impl ObjectRepr {
    fn from_placed(obj: &PlacedObject) -> Self {
        Self {
            kind: obj.kind,
            x: obj.x,
            y: obj.y,
            width: obj.width,
            height: obj.height,
            sprite: obj.sprite_index,
        }
    }

    fn into_placed(self) -> PlacedObject {
        PlacedObject {
            id: Uuid::new_v4(),
            kind: self.kind,
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            sprite_index: self.sprite % self.kind.sprite_count().max(1),
        }
    }
}

/// Full-fidelity snapshot written to the local store after every completed
/// stroke, placement, drag, or deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalSnapshot {
    pub grid: Vec<Vec<CellRepr>>,
    pub objects: Vec<ObjectRepr>,
    pub cols: usize,
    pub rows: usize,
    pub version: u32,
    pub ts: i64,
}

impl LocalSnapshot {
    /// Capture the engine's grid and objects, shading included.
    #[must_use]
    pub fn capture(engine: &GardenEngine) -> Self {
        let mut grid = vec![Vec::with_capacity(GRID_COLS); GRID_ROWS];
        for (row, _, cell) in engine.grid.iter() {
            grid[row].push(CellRepr { code: cell.surface.code(), variation: cell.variation });
        }
        Self {
            grid,
            objects: engine.objects.objects().iter().map(ObjectRepr::from_placed).collect(),
            cols: GRID_COLS,
            rows: GRID_ROWS,
            version: SNAPSHOT_VERSION,
            ts: now_ms(),
        }
    }
}

/// Simplified snapshot posted to the share endpoint: surface types only,
/// object ids dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteSnapshot {
    pub grid: Vec<Vec<u8>>,
    pub objects: Vec<ObjectRepr>,
    pub cols: usize,
    pub rows: usize,
    pub version: u32,
}

impl RemoteSnapshot {
    /// Capture the engine's grid and objects, dropping shading.
    #[must_use]
    pub fn capture(engine: &GardenEngine) -> Self {
        let mut grid = vec![Vec::with_capacity(GRID_COLS); GRID_ROWS];
        for (row, _, cell) in engine.grid.iter() {
            grid[row].push(cell.surface.code());
        }
        Self {
            grid,
            objects: engine.objects.objects().iter().map(ObjectRepr::from_placed).collect(),
            cols: GRID_COLS,
            rows: GRID_ROWS,
            version: SNAPSHOT_VERSION,
        }
    }
}

/// Grid and objects reconstructed from a snapshot of any version.
pub struct DecodedGarden {
    pub grid: Grid,
    pub objects: ObjectLayer,
}

/// Decode a snapshot payload of any format version.
///
/// # Errors
///
/// Returns [`SnapshotError`] when the payload has no grid or a row is not
/// an array. Anything else is tolerated: unknown cells read as sand,
/// untagged or unrecognized versions take the legacy path, malformed
/// objects are skipped.
pub fn decode(value: &serde_json::Value, rng: &mut impl Rng) -> Result<DecodedGarden, SnapshotError> {
    let rows = value
        .get("grid")
        .and_then(serde_json::Value::as_array)
        .ok_or(SnapshotError::MissingGrid)?;
    let version = value.get("version").and_then(serde_json::Value::as_u64);

    let mut grid = Grid::new(rng);
    for row_index in 0..GRID_ROWS {
        let Some(row_value) = rows.get(row_index) else {
            break; // short grid: remaining rows stay fresh sand
        };
        let row = row_value
            .as_array()
            .ok_or(SnapshotError::MalformedRow(row_index))?;
        for col_index in 0..GRID_COLS.min(row.len()) {
            let cell = &row[col_index];
            let decoded = match version {
                Some(2..=5) => decode_cell(cell),
                _ => decode_legacy_cell(cell),
            };
            if let Some((surface, variation)) = decoded {
                if let Some(target) = grid.get_mut(row_index, col_index) {
                    target.surface = surface;
                    target.variation = variation.unwrap_or_else(|| fresh_variation(rng));
                }
            }
        }
    }

    let mut objects = ObjectLayer::new();
    objects.load(decode_objects(value, version));

    Ok(DecodedGarden { grid, objects })
}

/// v2+ cell: either a bare surface code or a `{type, variation}` object.
/// Returns the surface and the stored variation, if any.
fn decode_cell(cell: &serde_json::Value) -> Option<(Surface, Option<f64>)> {
    if let Some(code) = cell.as_u64() {
        return Some((Surface::from_code(u8::try_from(code).unwrap_or(0)), None));
    }
    let map = cell.as_object()?;
    let code = map
        .get("type")
        .and_then(serde_json::Value::as_u64)
        .unwrap_or(0);
    let variation = map.get("variation").and_then(serde_json::Value::as_f64);
    Some((Surface::from_code(u8::try_from(code).unwrap_or(0)), variation))
}

/// Legacy (v1 / untagged) cell: any nonzero bit is a mark.
fn decode_legacy_cell(cell: &serde_json::Value) -> Option<(Surface, Option<f64>)> {
    let bit = match cell.as_u64() {
        Some(bit) => bit,
        None => cell
            .as_object()
            .and_then(|map| map.get("type"))
            .and_then(serde_json::Value::as_u64)
            .unwrap_or(0),
    };
    let surface = if bit == 0 { Surface::Sand } else { Surface::Mark };
    Some((surface, None))
}

/// Extract placed objects: v5 `objects`, v4 `plants`, nothing earlier.
fn decode_objects(value: &serde_json::Value, version: Option<u64>) -> Vec<PlacedObject> {
    match version {
        Some(5) => value
            .get("objects")
            .and_then(serde_json::Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| {
                        serde_json::from_value::<ObjectRepr>(entry.clone())
                            .ok()
                            .map(ObjectRepr::into_placed)
                    })
                    .collect()
            })
            .unwrap_or_default(),
        Some(4) => value
            .get("plants")
            .and_then(serde_json::Value::as_array)
            .map(|entries| entries.iter().filter_map(decode_plant).collect())
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// v4 plant entry `{x, y, sprite}` upgraded to a unified object.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn decode_plant(entry: &serde_json::Value) -> Option<PlacedObject> {
    let map = entry.as_object()?;
    let x = map.get("x").and_then(serde_json::Value::as_f64)?;
    let y = map.get("y").and_then(serde_json::Value::as_f64)?;
    let sprite = map
        .get("sprite")
        .and_then(serde_json::Value::as_u64)
        .unwrap_or(0) as usize;
    let (width, height) = ObjectKind::Plant.default_size();
    Some(PlacedObject {
        id: Uuid::new_v4(),
        kind: ObjectKind::Plant,
        x,
        y,
        width,
        height,
        sprite_index: sprite % ObjectKind::Plant.sprite_count(),
    })
}

#[allow(clippy::cast_possible_truncation)]
fn now_ms() -> i64 {
    let Ok(duration) = std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(duration.as_millis()).unwrap_or(0)
}
