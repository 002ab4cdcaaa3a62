//! Color model and full-frame display list.
//!
//! Rendering is a full redraw on every mutation or cursor move: the grid
//! cells first, then the object sprites in stacking order, then the
//! tool-cursor overlay. The engine produces a display list of primitive
//! draw commands; the host rasterizes them however it likes.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::consts::{CELL_PX, SPECKLE_SHADE, SPECKLE_STRIDE};
use crate::coords::{Point, cell_origin, pointer_to_cell};
use crate::engine::GardenEngine;
use crate::grid::Surface;
use crate::objects::ObjectKind;
use crate::tools::Tool;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Base color for each surface, before shade variation.
#[must_use]
pub fn base_color(surface: Surface) -> Rgb {
    match surface {
        Surface::Sand => Rgb::new(243, 230, 203),
        Surface::Mark => Rgb::new(169, 143, 123),
        Surface::Smoothed => Rgb::new(238, 223, 179),
        Surface::RakedLight => Rgb::new(248, 238, 215),
        Surface::RakedDark => Rgb::new(180, 160, 130),
    }
}

/// Final cell color: each channel is `floor(base * variation)`, clamped.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn cell_color(surface: Surface, variation: f64) -> Rgb {
    let base = base_color(surface);
    let shade = |channel: u8| (f64::from(channel) * variation).floor().clamp(0.0, 255.0) as u8;
    Rgb::new(shade(base.r), shade(base.g), shade(base.b))
}

/// A primitive draw command in canvas pixel space.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Filled rectangle.
    FillRect { x: f64, y: f64, w: f64, h: f64, color: Rgb },
    /// Sprite image, identified by kind and sheet index.
    Sprite { kind: ObjectKind, sprite_index: usize, x: f64, y: f64, w: f64, h: f64 },
    /// Thin outline rectangle (cursor overlay).
    OutlineRect { x: f64, y: f64, w: f64, h: f64 },
}

/// Produce the full-frame display list: grid, objects, cursor overlay.
#[must_use]
pub fn render_frame(engine: &GardenEngine) -> Vec<DrawCmd> {
    let mut cmds = Vec::with_capacity(engine.grid.rows() * engine.grid.cols() + 16);

    for (row, col, cell) in engine.grid.iter() {
        let origin = cell_origin(row, col);
        cmds.push(DrawCmd::FillRect {
            x: origin.x,
            y: origin.y,
            w: CELL_PX,
            h: CELL_PX,
            color: cell_color(cell.surface, cell.variation),
        });
        // Sparse speckle gives untouched sand a little grain.
        if cell.surface == Surface::Sand && (row + col) % SPECKLE_STRIDE == 0 {
            let dot = (CELL_PX * 0.15).max(1.0);
            cmds.push(DrawCmd::FillRect {
                x: origin.x + CELL_PX * 0.25,
                y: origin.y + CELL_PX * 0.25,
                w: dot,
                h: dot,
                color: cell_color(cell.surface, cell.variation * SPECKLE_SHADE),
            });
        }
    }

    for obj in engine.objects.objects() {
        cmds.push(DrawCmd::Sprite {
            kind: obj.kind,
            sprite_index: obj.sprite_index,
            x: obj.x,
            y: obj.y,
            w: obj.width,
            h: obj.height,
        });
    }

    if !engine.is_read_only() {
        if let Some(pos) = engine.ui.cursor {
            cursor_overlay(engine.ui.tool, pos, &mut cmds);
        }
    }

    cmds
}

/// Tool-specific cursor outline at the hovered cell.
#[allow(clippy::cast_precision_loss)]
fn cursor_overlay(tool: Tool, pos: Point, cmds: &mut Vec<DrawCmd>) {
    let Some((row, col)) = pointer_to_cell(pos) else {
        return;
    };
    let origin = cell_origin(row, col);

    match tool {
        Tool::Wand => {
            cmds.push(DrawCmd::OutlineRect {
                x: origin.x + 1.0,
                y: origin.y + 1.0,
                w: CELL_PX - 2.0,
                h: CELL_PX - 2.0,
            });
        }
        Tool::Smoother => {
            cmds.push(DrawCmd::OutlineRect {
                x: origin.x - CELL_PX,
                y: origin.y + CELL_PX * 0.25,
                w: CELL_PX * 3.0,
                h: CELL_PX * 0.5,
            });
        }
        Tool::Rake => {
            for tooth in 0..4 {
                cmds.push(DrawCmd::OutlineRect {
                    x: origin.x - CELL_PX + tooth as f64 * CELL_PX,
                    y: origin.y + CELL_PX * 0.1,
                    w: CELL_PX * 0.8,
                    h: CELL_PX * 0.8,
                });
            }
        }
        Tool::Plant | Tool::Rock => {
            let kind = tool.object_kind().unwrap_or(ObjectKind::Plant);
            let (w, h) = kind.default_size();
            cmds.push(DrawCmd::OutlineRect { x: pos.x - w / 2.0, y: pos.y - h / 2.0, w, h });
        }
    }
}
