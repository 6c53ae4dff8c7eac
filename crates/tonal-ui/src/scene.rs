use tonal_engine::coords::{Rect, Vec2};
use tonal_engine::input::InputState;
use tonal_engine::scene::DrawList;

use crate::ctx::{EventCtx, Invalidation};
use crate::event::UiEvent;
use crate::painter::Painter;
use crate::widget::Widget;

// ── UiInput ───────────────────────────────────────────────────────────────

/// Pointer snapshot used for one paint pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UiInput {
    /// Cursor position in logical pixels, `None` once it has left the surface.
    pub pointer: Option<Vec2>,
}

impl UiInput {
    pub fn from_state(state: &InputState) -> Self {
        Self {
            pointer: state.pointer_pos.map(|(x, y)| Vec2::new(x, y)),
        }
    }
}

// ── UiScene ───────────────────────────────────────────────────────────────

/// Host-side coordinator: routes events to a widget and repaints it on request.
///
/// Owns the `DrawList` reused across repaints and the [`Invalidation`] that
/// widgets write redraw requests into.
///
/// ```rust,ignore
/// if ui.dispatch(&mut slider, &event, rect) {
///     renderer.render(ui.paint(&slider, rect, &UiInput::from_state(&input)));
/// }
/// ```
#[derive(Debug, Default)]
pub struct UiScene {
    draw_list: DrawList,
    invalidation: Invalidation,
}

impl UiScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes one event to `widget` laid out at `rect`.
    ///
    /// Returns `true` if the widget asked for a redraw while handling it.
    pub fn dispatch<W: Widget + ?Sized>(&mut self, widget: &mut W, event: &UiEvent, rect: Rect) -> bool {
        let ctx = EventCtx::new(&self.invalidation);
        let result = widget.on_event(event, rect, &ctx);
        let redraw = self.invalidation.take();
        log::trace!("dispatch {event:?} -> {result:?}, redraw={redraw}");
        redraw
    }

    /// Clears the draw list and paints `widget` into it.
    pub fn paint<W: Widget + ?Sized>(&mut self, widget: &W, rect: Rect, input: &UiInput) -> &DrawList {
        self.draw_list.clear();
        {
            let mut painter = Painter::new(&mut self.draw_list, input.pointer);
            widget.paint(&mut painter, rect);
        }
        log::trace!("painted {} draw commands", self.draw_list.len());
        &self.draw_list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::Constraints;
    use crate::event::EventResult;
    use tonal_engine::input::ButtonMask;
    use tonal_engine::paint::{Color, Paint};
    use tonal_engine::scene::{DrawCmd, RectCmd};

    /// Repaints whenever the pointer enters or leaves.
    struct Probe {
        inside: bool,
    }

    impl Widget for Probe {
        fn measure(&self, constraints: Constraints) -> Vec2 {
            constraints.constrain(Vec2::new(10.0, 10.0))
        }

        fn paint(&self, painter: &mut Painter<'_>, rect: Rect) {
            let color = if painter.is_hovered(rect) { Color::white() } else { Color::black() };
            painter.fill_rect(rect, color);
        }

        fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &EventCtx<'_>) -> EventResult {
            let inside = match event {
                UiEvent::PointerMoved { pos, .. } => rect.contains(*pos),
                UiEvent::PointerLeft => false,
            };
            if inside != self.inside {
                self.inside = inside;
                ctx.request_redraw();
            }
            EventResult::Consumed
        }
    }

    #[test]
    fn dispatch_reports_redraw_once() {
        let mut ui = UiScene::new();
        let mut probe = Probe { inside: false };
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let moved = UiEvent::PointerMoved { pos: Vec2::new(5.0, 5.0), buttons: ButtonMask::empty() };

        assert!(ui.dispatch(&mut probe, &moved, rect));
        assert!(!ui.dispatch(&mut probe, &moved, rect));
        assert!(ui.dispatch(&mut probe, &UiEvent::PointerLeft, rect));
    }

    #[test]
    fn paint_replaces_previous_commands() {
        let mut ui = UiScene::new();
        let probe = Probe { inside: false };
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);

        ui.paint(&probe, rect, &UiInput::default());
        let list = ui.paint(&probe, rect, &UiInput { pointer: Some(Vec2::new(1.0, 1.0)) });
        assert_eq!(list.items(), &[DrawCmd::Rect(RectCmd { rect, paint: Paint::Solid(Color::white()) })]);
    }
}
