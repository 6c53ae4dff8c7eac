use tonal_engine::coords::{Rect, Vec2};

use crate::constraints::Constraints;
use crate::ctx::EventCtx;
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;

/// The core trait every UI component implements.
///
/// A widget never owns its surface or its input source. The host hands it
/// the allocated `rect` on every call, routes events to [`on_event`], and
/// repaints through [`paint`] when a redraw was requested.
///
/// [`on_event`]: Widget::on_event
/// [`paint`]: Widget::paint
pub trait Widget: 'static {
    /// Compute the size this widget wants given the available space.
    ///
    /// Must be deterministic; the host may call it more than once.
    fn measure(&self, constraints: Constraints) -> Vec2;

    /// Draw this widget into `painter` within the bounds of `rect`.
    fn paint(&self, painter: &mut Painter<'_>, rect: Rect);

    /// Route an input event. Return [`EventResult::Consumed`] to stop propagation.
    ///
    /// The default implementation ignores everything, so passive widgets only
    /// implement `measure` and `paint`.
    fn on_event(&mut self, _event: &UiEvent, _rect: Rect, _ctx: &EventCtx<'_>) -> EventResult {
        EventResult::Ignored
    }
}
