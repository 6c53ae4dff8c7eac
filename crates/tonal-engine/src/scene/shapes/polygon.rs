use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Filled convex polygon, points in logical pixels in either winding order.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Vec<Vec2>,
    pub color: Color,
}

impl DrawList {
    /// Records a filled convex polygon.
    ///
    /// Fewer than three points describe no area and are dropped.
    pub fn push_polygon(&mut self, points: Vec<Vec2>, color: Color) {
        if points.len() < 3 {
            log::debug!("push_polygon: {} points describe no area; skipped", points.len());
            return;
        }
        self.push(DrawCmd::Polygon(PolygonCmd { points, color }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_is_recorded() {
        let mut list = DrawList::new();
        let points = vec![Vec2::new(10.0, 5.0), Vec2::new(0.0, 10.0), Vec2::new(0.0, 0.0)];
        list.push_polygon(points.clone(), Color::black());
        assert_eq!(list.items(), &[DrawCmd::Polygon(PolygonCmd { points, color: Color::black() })]);
    }

    #[test]
    fn degenerate_polygon_is_not_recorded() {
        let mut list = DrawList::new();
        list.push_polygon(vec![Vec2::zero(), Vec2::new(1.0, 1.0)], Color::black());
        assert!(list.is_empty());
    }
}
