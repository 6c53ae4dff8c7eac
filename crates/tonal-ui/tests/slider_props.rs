//! Property tests for the gradient slider's geometry.
//!
//! 1. Value → pixel → value round-trips for every value and any allocation.
//! 2. Pixel → value → pixel stays within one value step inside the bar.
//! 3. Hit-testing at a marker's own position returns that marker.
//! 4. A primary-button drag inside the bar moves the marker it resolves to.

use proptest::prelude::*;
use tonal_ui::prelude::*;

// ── Strategies ───────────────────────────────────────────────────────

fn arb_rect() -> impl Strategy<Value = Rect> {
    (0.0..200.0_f32, 0.0..200.0_f32, 20.0..400.0_f32, 60.0..900.0_f32)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn arb_sorted_three() -> impl Strategy<Value = [u8; 3]> {
    (0u8..=85, 1u8..=85, 1u8..=85).prop_map(|(a, d1, d2)| [a, a + d1, a + d1 + d2])
}

fn slider_with(values: &[u8]) -> GradientSlider {
    let mut s = GradientSlider::new(values.len()).unwrap();
    for (i, &v) in values.iter().enumerate() {
        s.set_value(i, v);
    }
    s
}

proptest! {
    #[test]
    fn value_round_trips_through_pixels(v in any::<u8>(), rect in arb_rect()) {
        let s = GradientSlider::new(2).unwrap();
        let back = s.y_to_value(s.value_to_y(v, rect), rect);
        prop_assert!((back - i32::from(v)).abs() <= 1, "{v} -> {back}");
    }

    #[test]
    fn pixel_round_trips_within_one_step(t in 0.0..1.0_f32, rect in arb_rect()) {
        let s = GradientSlider::new(2).unwrap();
        let bar = s.bar_rect(rect);
        let y = bar.origin.y + t * bar.size.y;
        let v = s.y_to_value(y, rect).clamp(0, 255) as u8;
        let step = bar.size.y / 255.0;
        prop_assert!((s.value_to_y(v, rect) - y).abs() <= step + 1e-3);
    }

    #[test]
    fn hit_at_marker_is_that_marker(values in arb_sorted_three(), rect in arb_rect()) {
        let s = slider_with(&values);
        for (i, &v) in values.iter().enumerate() {
            prop_assert_eq!(s.find_marker_at_y(s.value_to_y(v, rect), rect), Some(i));
        }
    }

    #[test]
    fn drag_inside_bar_moves_hit_marker(t in 0.0..0.999_f32, rect in arb_rect()) {
        let mut s = GradientSlider::new(3).unwrap();
        let bar = s.bar_rect(rect);
        let y = bar.origin.y + t * bar.size.y;
        let hit = s.find_marker_at_y(y, rect).unwrap();
        let expected = s.y_to_value(y, rect);

        let inv = Invalidation::new();
        let event = UiEvent::PointerMoved { pos: Vec2::new(bar.origin.x, y), buttons: ButtonMask::PRIMARY };
        s.on_event(&event, rect, &EventCtx::new(&inv));

        prop_assert_eq!(i32::from(s.value(hit)), expected);
    }
}
