use thiserror::Error;

/// Errors raised while configuring a [`GradientSlider`](crate::widgets::gradient_slider::GradientSlider).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SliderError {
    /// Marker count outside `2..=3`. Raised before any state is modified.
    #[error("marker count must be 2 or 3, got {count}")]
    CountOutOfRange { count: usize },
}
