//! Shared numeric constants for the garden crate.

// ── Grid ────────────────────────────────────────────────────────

/// Grid width in cells.
pub const GRID_COLS: usize = 64;

/// Grid height in cells.
pub const GRID_ROWS: usize = 40;

/// Canvas pixels per cell edge.
pub const CELL_PX: f64 = 10.0;

/// Canvas width in pixels.
#[allow(clippy::cast_precision_loss)]
pub const CANVAS_W: f64 = GRID_COLS as f64 * CELL_PX;

/// Canvas height in pixels.
#[allow(clippy::cast_precision_loss)]
pub const CANVAS_H: f64 = GRID_ROWS as f64 * CELL_PX;

// ── Shade variation ─────────────────────────────────────────────

/// Lower bound of the per-cell shade multiplier.
pub const VARIATION_MIN: f64 = 0.98;

/// Upper bound of the per-cell shade multiplier.
pub const VARIATION_MAX: f64 = 1.02;

/// Wider shade range used for raked-dark cells.
pub const DARK_VARIATION_MIN: f64 = 0.95;

/// Wider shade range used for raked-dark cells.
pub const DARK_VARIATION_MAX: f64 = 1.05;

/// Darkening factor applied when the wand re-marks an existing mark.
pub const MARK_DARKEN: f64 = 0.7;

// ── Tools ───────────────────────────────────────────────────────

/// Smoother inclusion probability decay per unit of weighted distance.
pub const SMOOTHER_FALLOFF: f64 = 0.3;

/// Chance the smoother converts a non-sand cell to smoothed (else sand).
pub const SMOOTHER_CONVERT_P: f64 = 0.8;

/// Chance the smoother converts a sand cell to smoothed (else resample only).
pub const SMOOTHER_SAND_P: f64 = 0.6;

/// Horizontal half-width of the rake and smoother spans, in cells.
pub const TOOL_HALF_SPAN: isize = 2;

// ── Random garden generation ────────────────────────────────────

/// Feature density used when seeding a fresh session.
pub const BOOT_DENSITY: f64 = 0.03;

/// Feature density used by the explicit "random garden" operation.
pub const RANDOM_DENSITY: f64 = 0.08;

// ── Objects ─────────────────────────────────────────────────────

/// Number of distinct plant sprites.
pub const PLANT_SPRITES: usize = 4;

/// Number of distinct rock sprites.
pub const ROCK_SPRITES: usize = 3;

/// Plant sprite bounding box in canvas pixels.
pub const PLANT_W: f64 = 32.0;
pub const PLANT_H: f64 = 32.0;

/// Rock sprite bounding box in canvas pixels.
pub const ROCK_W: f64 = 28.0;
pub const ROCK_H: f64 = 20.0;

/// Random placement attempts per requested object during auto-fill.
pub const AUTO_FILL_ATTEMPTS: usize = 40;

// ── Rendering ───────────────────────────────────────────────────

/// Diagonal stride of the sparse sand speckle pattern.
pub const SPECKLE_STRIDE: usize = 7;

/// Shade multiplier applied to speckle dots relative to their cell.
pub const SPECKLE_SHADE: f64 = 0.95;

// ── Persistence ─────────────────────────────────────────────────

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 5;
