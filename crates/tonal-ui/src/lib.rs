//! Tonal UI: retained widgets on top of `tonal-engine`.
//!
//! The crate's centrepiece is [`GradientSlider`](widgets::gradient_slider::GradientSlider),
//! a vertical black-to-colour gradient bar carrying two or three draggable
//! tonal-stop markers (shadows / midtones / highlights).
//!
//! # Quick start
//!
//! ```rust,ignore
//! use tonal_ui::prelude::*;
//!
//! let mut slider = GradientSlider::new(3)?
//!     .with_max_color(Color::white())
//!     .on_change(|index, value| println!("marker {index} -> {value}"));
//!
//! let mut ui = UiScene::new();
//! let rect = Rect::new(0.0, 0.0, 40.0, 256.0);
//!
//! // For every platform event:
//! input.apply_event(&ev);
//! if let Some(event) = UiEvent::from_input(&input, &ev) {
//!     if ui.dispatch(&mut slider, &event, rect) {
//!         let draw_list = ui.paint(&slider, rect, &UiInput::from_state(&input));
//!         // hand draw_list to a renderer
//!     }
//! }
//! ```

pub mod constraints;
pub mod ctx;
pub mod error;
pub mod event;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything needed to host and extend widgets.
pub mod prelude {
    pub use crate::constraints::Constraints;
    pub use crate::ctx::{EventCtx, Invalidation};
    pub use crate::error::SliderError;
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::painter::Painter;
    pub use crate::scene::{UiInput, UiScene};
    pub use crate::widget::Widget;
    pub use crate::widgets::gradient_slider::{GradientSlider, SliderStyle};

    pub use tonal_engine::coords::{Rect, Vec2};
    pub use tonal_engine::input::{ButtonMask, InputEvent, InputState};
    pub use tonal_engine::paint::{Color, ColorStop, LinearGradient, Paint, SpreadMode};
}
