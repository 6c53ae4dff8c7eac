use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Bottom-right corner.
    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.y >= self.origin.y && p.x < max.x && p.y < max.y
    }

    /// Shrinks the rectangle by a fraction of its own size on each side.
    ///
    /// `xpad` is removed from both the left and right edges and `ypad` from
    /// both the top and bottom, each as a fraction of width / height.
    #[inline]
    pub fn inset_fraction(self, xpad: f32, ypad: f32) -> Rect {
        Rect::new(
            self.origin.x + xpad * self.size.x,
            self.origin.y + ypad * self.size.y,
            (1.0 - 2.0 * xpad) * self.size.x,
            (1.0 - 2.0 * ypad) * self.size.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_min_edge_inclusive() {
        assert!(Rect::new(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn contains_max_edge_exclusive() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!r.contains(Vec2::new(10.0, 5.0)));
        assert!(!r.contains(Vec2::new(5.0, 10.0)));
    }

    #[test]
    fn contains_rejects_outside() {
        let r = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(!r.contains(Vec2::new(4.0, 6.0)));
        assert!(!r.contains(Vec2::new(6.0, 4.0)));
    }

    #[test]
    fn inset_fraction_matches_padding() {
        let r = Rect::new(10.0, 20.0, 100.0, 200.0);
        let inner = r.inset_fraction(0.25, 0.125);
        assert_eq!(inner.origin, Vec2::new(35.0, 45.0));
        assert_eq!(inner.size, Vec2::new(50.0, 150.0));
    }

    #[test]
    fn inset_fraction_zero_is_identity() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r.inset_fraction(0.0, 0.0), r);
    }
}
