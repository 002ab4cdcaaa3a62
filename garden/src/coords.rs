#[cfg(test)]
#[path = "coords_test.rs"]
mod coords_test;

use crate::consts::{CANVAS_H, CANVAS_W, CELL_PX, GRID_COLS, GRID_ROWS};

/// A point in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Map a canvas-space pointer position to a grid cell, or `None` when the
/// pointer is outside the canvas.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn pointer_to_cell(pos: Point) -> Option<(usize, usize)> {
    if pos.x < 0.0 || pos.y < 0.0 || pos.x >= CANVAS_W || pos.y >= CANVAS_H {
        return None;
    }
    let col = (pos.x / CELL_PX).floor() as usize;
    let row = (pos.y / CELL_PX).floor() as usize;
    if row < GRID_ROWS && col < GRID_COLS { Some((row, col)) } else { None }
}

/// Canvas-space origin (top-left corner) of a grid cell.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn cell_origin(row: usize, col: usize) -> Point {
    Point::new(col as f64 * CELL_PX, row as f64 * CELL_PX)
}
