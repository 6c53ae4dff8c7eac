use crate::coords::{Rect, Vec2};

use super::Color;

/// Gradient spread behavior outside the [0, 1] range.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SpreadMode {
    /// Clamp to edge stops.
    Pad,
    /// Repeat the gradient pattern.
    Repeat,
    /// Mirror-repeat the gradient pattern.
    Reflect,
}

/// A single gradient stop at parameter `t`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient in logical pixel space.
///
/// `start` maps to `t = 0` and `end` to `t = 1`. Stops are expected in
/// ascending `t` order.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl LinearGradient {
    /// Two-stop gradient running from the top edge of `rect` to its bottom edge.
    pub fn vertical(rect: Rect, top: Color, bottom: Color) -> Self {
        Self {
            start: rect.origin,
            end: Vec2::new(rect.origin.x, rect.origin.y + rect.size.y),
            stops: vec![ColorStop::new(0.0, top), ColorStop::new(1.0, bottom)],
            spread: SpreadMode::Pad,
        }
    }
}
