//! Sand grid model: surface states, per-cell shade variation, and the
//! fixed-size cell matrix.
//!
//! Every cell carries a discrete [`Surface`] plus a continuous shade
//! multiplier sampled fresh on each assignment, so repeated strokes
//! accumulate visible texture rather than flat color. The grid is a fixed
//! 64x40 matrix; all mutation happens in place through `get_mut`.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use rand::Rng;

use crate::consts::{GRID_COLS, GRID_ROWS, VARIATION_MAX, VARIATION_MIN};

/// Discrete surface state of a single sand cell.
///
/// The numeric codes are the wire representation used by every snapshot
/// format version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Surface {
    /// Untouched sand.
    #[default]
    Sand,
    /// Wand mark.
    Mark,
    /// Smoothed sand.
    Smoothed,
    /// Light stripe of a rake pass.
    RakedLight,
    /// Dark stripe of a rake pass.
    RakedDark,
}

impl Surface {
    /// Wire code for this surface (0..=4).
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Sand => 0,
            Self::Mark => 1,
            Self::Smoothed => 2,
            Self::RakedLight => 3,
            Self::RakedDark => 4,
        }
    }

    /// Decode a wire code. Unknown codes fall back to sand.
    #[must_use]
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Self::Mark,
            2 => Self::Smoothed,
            3 => Self::RakedLight,
            4 => Self::RakedDark,
            _ => Self::Sand,
        }
    }
}

/// One cell of the sand grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Discrete surface state.
    pub surface: Surface,
    /// Shade multiplier applied to the surface base color.
    pub variation: f64,
}

impl Cell {
    /// A sand cell with a freshly sampled shade.
    pub fn sand(rng: &mut impl Rng) -> Self {
        Self { surface: Surface::Sand, variation: fresh_variation(rng) }
    }
}

/// Sample a shade multiplier from the standard bounded range.
pub fn fresh_variation(rng: &mut impl Rng) -> f64 {
    rng.random_range(VARIATION_MIN..VARIATION_MAX)
}

/// The fixed-size sand grid, row-major.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of untouched sand with independently sampled shades.
    pub fn new(rng: &mut impl Rng) -> Self {
        let cells = (0..GRID_ROWS * GRID_COLS).map(|_| Cell::sand(rng)).collect();
        Self { cells }
    }

    /// Grid width in cells.
    #[must_use]
    pub fn cols(&self) -> usize {
        GRID_COLS
    }

    /// Grid height in cells.
    #[must_use]
    pub fn rows(&self) -> usize {
        GRID_ROWS
    }

    /// Whether `(row, col)` lies inside the grid.
    #[must_use]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < GRID_ROWS && col < GRID_COLS
    }

    /// Cell at `(row, col)`, or `None` out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        if self.in_bounds(row, col) { self.cells.get(row * GRID_COLS + col) } else { None }
    }

    /// Mutable cell at `(row, col)`, or `None` out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        if self.in_bounds(row, col) { self.cells.get_mut(row * GRID_COLS + col) } else { None }
    }

    /// Reset every cell to untouched sand with fresh shades.
    pub fn clear(&mut self, rng: &mut impl Rng) {
        for cell in &mut self.cells {
            *cell = Cell::sand(rng);
        }
    }

    /// Scatter random features across the grid.
    ///
    /// With probability `density` a cell becomes a feature (70% mark, the
    /// rest raked light/dark at even odds); with a further `density * 0.5`
    /// a smoothed patch; otherwise sand. Every cell gets a fresh shade.
    pub fn randomize(&mut self, rng: &mut impl Rng, density: f64) {
        for cell in &mut self.cells {
            let roll: f64 = rng.random();
            let surface = if roll < density {
                if rng.random_bool(0.7) {
                    Surface::Mark
                } else if rng.random_bool(0.5) {
                    Surface::RakedLight
                } else {
                    Surface::RakedDark
                }
            } else if roll < density * 1.5 {
                Surface::Smoothed
            } else {
                Surface::Sand
            };
            *cell = Cell { surface, variation: fresh_variation(rng) };
        }
    }

    /// Iterate all cells with their `(row, col)` position.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        self.cells.iter().enumerate().map(|(i, cell)| (i / GRID_COLS, i % GRID_COLS, cell))
    }
}
