//! Tonal engine crate.
//!
//! Renderer-agnostic primitives shared by the UI layer and its hosts:
//! geometry, paint, the draw-command stream, and platform-agnostic input.

pub mod coords;
pub mod input;
pub mod logging;
pub mod paint;
pub mod scene;
