//! Painting and object-placement engine for the zen garden canvas.
//!
//! This crate owns everything that happens between a pointer event and a
//! redraw: the sand grid and its surface states, the tool engine that turns
//! pointer positions into grid mutations, the decoration layer of draggable
//! plant and rock sprites, the versioned snapshot schema used for local and
//! shared persistence, and the color model the host uses to rasterize a
//! frame. The host (server-rendered viewer or interactive page) is
//! responsible only for wiring pointer events to [`engine::GardenEngine`]
//! and acting on the returned [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Session state and the pointer-event entry points |
//! | [`grid`] | Fixed-size sand grid and per-cell surface/shade state |
//! | [`tools`] | Wand, smoother, and rake brush mutations |
//! | [`objects`] | Placed plant/rock sprites, collision and hit-testing |
//! | [`coords`] | Pointer-to-cell coordinate conversions |
//! | [`input`] | Tool selection, modifiers, and the gesture state machine |
//! | [`render`] | Cell color model and full-frame display list |
//! | [`snapshot`] | Versioned snapshot schema and the upgrade chain |
//! | [`store`] | File-backed local snapshot store |
//! | [`consts`] | Shared numeric constants (grid size, shade ranges, etc.) |

pub mod consts;
pub mod coords;
pub mod engine;
pub mod grid;
pub mod input;
pub mod objects;
pub mod render;
pub mod snapshot;
pub mod store;
pub mod tools;
