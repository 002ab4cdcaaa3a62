//! Brush tools: the wand, smoother, and rake grid mutations.
//!
//! Each application takes a target cell and mutates the grid in place.
//! Randomness is sampled independently per affected cell per call, so
//! repeated strokes build up texture rather than converging. Out-of-bounds
//! targets and neighbors are skipped silently.

#[cfg(test)]
#[path = "tools_test.rs"]
mod tools_test;

use rand::Rng;

use crate::consts::{
    DARK_VARIATION_MAX, DARK_VARIATION_MIN, MARK_DARKEN, SMOOTHER_CONVERT_P, SMOOTHER_FALLOFF,
    SMOOTHER_SAND_P, TOOL_HALF_SPAN,
};
use crate::grid::{Grid, Surface, fresh_variation};
use crate::objects::ObjectKind;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Draw marks cell by cell (default).
    #[default]
    Wand,
    /// Flatten an area back toward smoothed sand.
    Smoother,
    /// Comb alternating light/dark stripes.
    Rake,
    /// Place and drag plant sprites.
    Plant,
    /// Place and drag rock sprites.
    Rock,
}

impl Tool {
    /// Whether this tool paints the sand grid.
    #[must_use]
    pub fn is_brush(self) -> bool {
        matches!(self, Self::Wand | Self::Smoother | Self::Rake)
    }

    /// The object kind this tool places, if it is an object tool.
    #[must_use]
    pub fn object_kind(self) -> Option<ObjectKind> {
        match self {
            Self::Plant => Some(ObjectKind::Plant),
            Self::Rock => Some(ObjectKind::Rock),
            _ => None,
        }
    }
}

/// Apply the wand at `(row, col)`.
///
/// Any non-mark surface becomes a mark with a fresh shade; an existing mark
/// is darkened with fresh jitter instead.
pub fn apply_wand(grid: &mut Grid, row: usize, col: usize, rng: &mut impl Rng) {
    let Some(cell) = grid.get_mut(row, col) else {
        return;
    };
    if cell.surface == Surface::Mark {
        cell.variation = fresh_variation(rng) * MARK_DARKEN;
    } else {
        cell.surface = Surface::Mark;
        cell.variation = fresh_variation(rng);
    }
}

/// Apply the smoother centered on `(row, col)`.
///
/// Affects a 3x5 neighborhood with inclusion probability decaying by
/// `max(0, 1 - (|dr| + 0.5 * |dc|) * 0.3)`. Included non-sand cells become
/// smoothed 80% of the time (else revert to sand); included sand cells
/// become smoothed 60% of the time (else only resample their shade).
#[allow(clippy::cast_precision_loss)]
pub fn apply_smoother(grid: &mut Grid, row: usize, col: usize, rng: &mut impl Rng) {
    for dr in -1..=1_isize {
        for dc in -TOOL_HALF_SPAN..=TOOL_HALF_SPAN {
            let Some(nr) = row.checked_add_signed(dr) else {
                continue;
            };
            let Some(nc) = col.checked_add_signed(dc) else {
                continue;
            };
            let Some(cell) = grid.get_mut(nr, nc) else {
                continue;
            };

            let distance = dr.abs() as f64 + dc.abs() as f64 * 0.5;
            let probability = (1.0 - distance * SMOOTHER_FALLOFF).max(0.0);
            if !rng.random_bool(probability) {
                continue;
            }

            if cell.surface == Surface::Sand {
                if rng.random_bool(SMOOTHER_SAND_P) {
                    cell.surface = Surface::Smoothed;
                }
                cell.variation = fresh_variation(rng);
            } else {
                cell.surface = if rng.random_bool(SMOOTHER_CONVERT_P) {
                    Surface::Smoothed
                } else {
                    Surface::Sand
                };
                cell.variation = fresh_variation(rng);
            }
        }
    }
}

/// Apply the rake at `(row, col)` with the running stroke `phase`.
///
/// Paints a 1x5 horizontal span; the cell at column `nc` becomes a light
/// stripe when `(nc + phase) % 2 == 0` and a dark stripe otherwise. Dark
/// cells sample their shade from a wider range. The phase counter advances
/// once per application so repeated strokes along a line alternate.
pub fn apply_rake(grid: &mut Grid, row: usize, col: usize, phase: &mut u64, rng: &mut impl Rng) {
    for dc in -TOOL_HALF_SPAN..=TOOL_HALF_SPAN {
        let Some(nc) = col.checked_add_signed(dc) else {
            continue;
        };
        let Some(cell) = grid.get_mut(row, nc) else {
            continue;
        };
        if (nc as u64 + *phase) % 2 == 0 {
            cell.surface = Surface::RakedLight;
            cell.variation = fresh_variation(rng);
        } else {
            cell.surface = Surface::RakedDark;
            cell.variation = rng.random_range(DARK_VARIATION_MIN..DARK_VARIATION_MAX);
        }
    }
    *phase += 1;
}
