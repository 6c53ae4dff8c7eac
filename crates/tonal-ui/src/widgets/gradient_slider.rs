use tonal_engine::coords::{Rect, Vec2};
use tonal_engine::input::ButtonMask;
use tonal_engine::paint::{Color, LinearGradient};

use crate::constraints::Constraints;
use crate::ctx::EventCtx;
use crate::error::SliderError;
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::Widget;

/// Fewest markers a slider can carry (shadows and highlights).
pub const MIN_MARKERS: usize = 2;
/// Most markers a slider can carry (shadows, midtones and highlights).
pub const MAX_MARKERS: usize = 3;

/// Visual configuration of a [`GradientSlider`].
///
/// The padding fractions size both the gradient bar (inset from the widget
/// rect) and the marker triangles (relative to the bar).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderStyle {
    /// Horizontal padding as a fraction of width, per side.
    pub xpad: f32,
    /// Vertical padding as a fraction of height, per side.
    pub ypad: f32,
    pub marker_color: Color,
    pub hover_color: Color,
    /// Size reported by `measure` before constraints apply.
    pub preferred_size: Vec2,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            xpad: 0.15,
            ypad: 0.03,
            marker_color: Color::from_straight(0.1, 0.1, 0.1, 1.0),
            hover_color: Color::from_straight(0.1, 0.1, 0.9, 1.0),
            preferred_size: Vec2::new(40.0, 256.0),
        }
    }
}

/// A vertical black-to-colour gradient bar with two or three draggable
/// tonal-stop markers.
///
/// Marker values live in `0..=255`; 255 sits at the top of the bar and 0 at
/// the bottom. Markers are kept in the order they were created and may be
/// dragged past one another.
///
/// Dragging is re-derived from the button mask carried by every
/// [`UiEvent::PointerMoved`]; the widget keeps no press / release state. The
/// only interaction state it remembers is the last hovered marker, which is
/// used to skip redundant redraws.
///
/// # Example
/// ```rust,ignore
/// let slider = GradientSlider::new(3)?
///     .with_max_color(Color::from_straight(1.0, 0.0, 0.0, 1.0))
///     .on_change(|index, value| log::info!("stop {index} = {value}"));
/// ```
pub struct GradientSlider {
    values: Vec<u8>,
    max_color: Color,
    style: SliderStyle,
    /// Marker the pointer resolved to on the last motion event.
    hovered: Option<usize>,
    on_change: Option<Box<dyn FnMut(usize, u8)>>,
}

impl GradientSlider {
    /// Creates a slider with `count` evenly spaced markers.
    ///
    /// # Errors
    /// Returns [`SliderError::CountOutOfRange`] unless `count` is 2 or 3.
    pub fn new(count: usize) -> Result<Self, SliderError> {
        let values = default_values(count)?;
        Ok(Self {
            values,
            max_color: Color::white(),
            style: SliderStyle::default(),
            hovered: None,
            on_change: None,
        })
    }

    pub fn with_max_color(mut self, color: Color) -> Self {
        self.max_color = color;
        self
    }

    pub fn with_style(mut self, style: SliderStyle) -> Self {
        self.style = style;
        self
    }

    /// Registers the listener called with `(index, new_value)` whenever a
    /// marker value changes. Replaces any previous listener.
    pub fn on_change(mut self, f: impl FnMut(usize, u8) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    // ── configuration ─────────────────────────────────────────────────────

    #[inline]
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// Replaces the markers with `count` evenly spaced defaults.
    ///
    /// The defaults follow `i * (256 / (count - 1)) - 1`, clamped to `0..=255`:
    /// `[0, 255]` for two markers and `[0, 127, 255]` for three.
    ///
    /// # Errors
    /// Returns [`SliderError::CountOutOfRange`] unless `count` is 2 or 3; the
    /// current markers are left untouched in that case.
    pub fn set_count(&mut self, count: usize) -> Result<(), SliderError> {
        self.values = default_values(count)?;
        self.hovered = None;
        log::debug!("gradient slider reset to {count} markers: {:?}", self.values);
        Ok(())
    }

    #[inline]
    pub fn max_color(&self) -> Color {
        self.max_color
    }

    #[inline]
    pub fn set_max_color(&mut self, color: Color) {
        self.max_color = color;
    }

    #[inline]
    pub fn style(&self) -> &SliderStyle {
        &self.style
    }

    // ── values ────────────────────────────────────────────────────────────

    /// Value of marker `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.count()`.
    #[inline]
    pub fn value(&self, index: usize) -> u8 {
        self.values[index]
    }

    #[inline]
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Sets marker `index` to `value` and notifies the listener.
    ///
    /// Does nothing when the value is unchanged, so repeated motion events at
    /// the same position do not flood the listener. Returns whether the value
    /// changed.
    ///
    /// # Panics
    /// Panics if `index >= self.count()`.
    pub fn set_value(&mut self, index: usize, value: u8) -> bool {
        if self.values[index] == value {
            return false;
        }
        self.values[index] = value;
        log::trace!("marker {index} -> {value}");
        if let Some(f) = self.on_change.as_mut() {
            f(index, value);
        }
        true
    }

    /// Marker the pointer resolved to on the last motion event.
    #[inline]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    // ── geometry ──────────────────────────────────────────────────────────

    /// The gradient bar inside the widget's allocated `rect`.
    #[inline]
    pub fn bar_rect(&self, rect: Rect) -> Rect {
        rect.inset_fraction(self.style.xpad, self.style.ypad)
    }

    /// Vertical pixel position of `value`: 255 maps to the bar top, 0 to its bottom.
    pub fn value_to_y(&self, value: u8, rect: Rect) -> f32 {
        let bar = self.bar_rect(rect);
        bar.origin.y + bar.size.y * (255.0 - f32::from(value)) / 255.0
    }

    /// Inverse of [`value_to_y`](Self::value_to_y), rounded to the nearest value.
    ///
    /// Positions outside the bar map outside `0..=255`.
    pub fn y_to_value(&self, y: f32, rect: Rect) -> i32 {
        let bar = self.bar_rect(rect);
        if bar.size.y <= 0.0 {
            return 0;
        }
        let dy = y - bar.origin.y;
        (255.0 * (bar.size.y - dy) / bar.size.y).round() as i32
    }

    /// Resolves a pointer `y` to the marker it grabs.
    ///
    /// Adjacent markers split the space between them at the midpoint. Past
    /// the first marker (further down the bar) resolves to the first one, and
    /// past the last marker (further up) to the last one. Returns `None` when
    /// no rule matches, e.g. for a non-finite `y`.
    pub fn find_marker_at_y(&self, y: f32, rect: Rect) -> Option<usize> {
        let ys: Vec<f32> = self.values.iter().map(|&v| self.value_to_y(v, rect)).collect();
        let pairs = ys.len().saturating_sub(1);

        for i in 0..pairs {
            let y1 = ys[i];
            let y2 = ys[i + 1];
            let h = (y1 - y2) / 2.0;

            // Larger y is lower on screen: below the first marker.
            if i == 0 && y1 < y {
                return Some(i);
            }
            // Above the last marker.
            if i == pairs - 1 && y2 > y {
                return Some(i + 1);
            }
            if !(y1 >= y && y >= y2) {
                continue;
            }
            if y1 - y <= h {
                return Some(i);
            }
            if y - y2 <= h {
                return Some(i + 1);
            }
        }
        None
    }

    // ── drawing ───────────────────────────────────────────────────────────

    fn paint_gradient(&self, painter: &mut Painter<'_>, bar: Rect) {
        painter.fill_rect(bar, LinearGradient::vertical(bar, self.max_color, Color::black()));
    }

    fn paint_markers(&self, painter: &mut Painter<'_>, rect: Rect, bar: Rect) {
        let hit = painter.pointer.and_then(|p| self.find_marker_at_y(p.y, rect));
        let inside = painter.is_hovered(rect);

        let tw = self.style.xpad * bar.size.x;
        let th = self.style.ypad * bar.size.y;
        let left = bar.origin.x;
        let right = bar.origin.x + bar.size.x;

        for (i, &value) in self.values.iter().enumerate() {
            let y = self.value_to_y(value, rect);
            let color = if inside && hit == Some(i) {
                self.style.hover_color
            } else {
                self.style.marker_color
            };

            painter.fill_polygon(
                [Vec2::new(left, y), Vec2::new(left - tw, y + th), Vec2::new(left - tw, y - th)],
                color,
            );
            painter.fill_polygon(
                [Vec2::new(right, y), Vec2::new(right + tw, y + th), Vec2::new(right + tw, y - th)],
                color,
            );
        }
    }
}

fn default_values(count: usize) -> Result<Vec<u8>, SliderError> {
    if !(MIN_MARKERS..=MAX_MARKERS).contains(&count) {
        return Err(SliderError::CountOutOfRange { count });
    }
    let step = 256 / (count - 1);
    Ok((0..count)
        .map(|i| (i * step).saturating_sub(1).min(255) as u8)
        .collect())
}

impl Widget for GradientSlider {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        constraints.constrain(self.style.preferred_size)
    }

    fn paint(&self, painter: &mut Painter<'_>, rect: Rect) {
        let bar = self.bar_rect(rect);
        self.paint_gradient(painter, bar);
        self.paint_markers(painter, rect, bar);
    }

    /// Motion re-runs the hit-test and drags the hit marker while the primary
    /// button is held over the bar's vertical extent. A redraw is requested
    /// when the hovered marker changes and also when a drag changed a value,
    /// so a dragged marker repaints while it stays hovered. Leaving always
    /// clears the hover and redraws.
    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &EventCtx<'_>) -> EventResult {
        match *event {
            UiEvent::PointerMoved { pos, buttons } => {
                let hit = self.find_marker_at_y(pos.y, rect);
                let mut changed = false;

                if buttons.contains(ButtonMask::PRIMARY) {
                    if let Some(i) = hit {
                        let bar = self.bar_rect(rect);
                        // Only the vertical extent of the bar gates a drag.
                        if bar.contains(Vec2::new(bar.origin.x, pos.y)) {
                            let value = self.y_to_value(pos.y, rect).clamp(0, 255) as u8;
                            changed = self.set_value(i, value);
                        }
                    }
                }

                if changed || hit != self.hovered {
                    ctx.request_redraw();
                }
                self.hovered = hit;

                if rect.contains(pos) { EventResult::Consumed } else { EventResult::Ignored }
            }
            UiEvent::PointerLeft => {
                self.hovered = None;
                ctx.request_redraw();
                EventResult::Ignored
            }
        }
    }
}
