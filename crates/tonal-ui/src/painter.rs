use tonal_engine::coords::{Rect, Vec2};
use tonal_engine::paint::{Color, Paint};
use tonal_engine::scene::DrawList;

/// Drawing context passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Borrows the host's `DrawList` for a single paint pass and exposes the
/// pointer position sampled for that pass, so widgets can express hover
/// visuals directly while painting. The borrow ends when the painter is dropped.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    /// Pointer position in logical pixels, `None` when the pointer is outside the surface.
    pub pointer: Option<Vec2>,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, pointer: Option<Vec2>) -> Self {
        Self { draw_list, pointer }
    }

    /// Returns `true` if the pointer is inside `rect`.
    #[inline]
    pub fn is_hovered(&self, rect: Rect) -> bool {
        self.pointer.is_some_and(|p| rect.contains(p))
    }

    /// Axis-aligned rectangle filled with a solid colour or gradient.
    pub fn fill_rect(&mut self, rect: Rect, paint: impl Into<Paint>) {
        self.draw_list.push_rect(rect, paint.into());
    }

    /// Filled convex polygon, painted over everything drawn before it.
    pub fn fill_polygon(&mut self, points: impl Into<Vec<Vec2>>, color: Color) {
        self.draw_list.push_polygon(points.into(), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonal_engine::scene::DrawCmd;

    #[test]
    fn fills_are_recorded_in_call_order() {
        let mut list = DrawList::new();
        {
            let mut p = Painter::new(&mut list, None);
            p.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), Color::black());
            p.fill_polygon(
                [Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0), Vec2::new(0.0, 2.0)],
                Color::white(),
            );
        }
        let items = list.items();
        assert_eq!(items.len(), 2);
        assert!(matches!(items[0], DrawCmd::Rect(_)));
        assert!(matches!(items[1], DrawCmd::Polygon(_)));
    }

    #[test]
    fn hover_needs_pointer_inside() {
        let mut list = DrawList::new();
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);

        assert!(!Painter::new(&mut list, None).is_hovered(rect));
        assert!(!Painter::new(&mut list, Some(Vec2::new(15.0, 5.0))).is_hovered(rect));
        assert!(Painter::new(&mut list, Some(Vec2::new(5.0, 5.0))).is_hovered(rect));
    }
}
