use tonal_engine::coords::Vec2;
use tonal_engine::input::{ButtonMask, InputEvent, InputState};

/// Input events routed to widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Pointer is at `pos` with `buttons` held.
    ///
    /// The mask is sampled when the event is built, so widgets derive drag
    /// state from each event instead of tracking press / release themselves.
    PointerMoved { pos: Vec2, buttons: ButtonMask },
    /// Pointer left the widget's surface.
    PointerLeft,
}

impl UiEvent {
    /// Translates a platform event that has already been applied to `state`.
    ///
    /// Button presses and releases become `PointerMoved` at the event
    /// position so that a press without movement still updates drag state.
    pub fn from_input(state: &InputState, ev: &InputEvent) -> Option<UiEvent> {
        match *ev {
            InputEvent::PointerMoved(m) => Some(UiEvent::PointerMoved {
                pos: Vec2::new(m.x, m.y),
                buttons: state.button_mask(),
            }),
            InputEvent::PointerButton(b) => Some(UiEvent::PointerMoved {
                pos: Vec2::new(b.x, b.y),
                buttons: state.button_mask(),
            }),
            InputEvent::PointerLeft => Some(UiEvent::PointerLeft),
        }
    }
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled; stop routing.
    Consumed,
    /// Event was not handled; keep routing.
    Ignored,
}
