use std::collections::HashSet;

use super::types::{
    ButtonMask,
    InputEvent,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};

/// Current pointer state for a single surface.
#[derive(Debug, Default)]
pub struct InputState {
    /// Pointer position in logical pixels; `None` once the pointer has left.
    pub pointer_pos: Option<(f32, f32)>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a platform-agnostic input event to the current state.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match *ev {
            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((x, y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y }) => {
                self.pointer_pos = Some((x, y));
                match state {
                    MouseButtonState::Pressed => {
                        self.buttons_down.insert(button);
                    }
                    MouseButtonState::Released => {
                        self.buttons_down.remove(&button);
                    }
                }
            }
        }
    }

    /// Mask of the buttons held right now.
    pub fn button_mask(&self) -> ButtonMask {
        self.buttons_down
            .iter()
            .fold(ButtonMask::empty(), |mask, &b| mask | ButtonMask::from_button(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(button: MouseButton, state: MouseButtonState) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent { button, state, x: 4.0, y: 8.0 })
    }

    #[test]
    fn button_press_and_release_update_mask() {
        let mut s = InputState::new();
        s.apply_event(&press(MouseButton::Left, MouseButtonState::Pressed));
        s.apply_event(&press(MouseButton::Right, MouseButtonState::Pressed));
        assert_eq!(s.button_mask(), ButtonMask::PRIMARY | ButtonMask::SECONDARY);

        s.apply_event(&press(MouseButton::Left, MouseButtonState::Released));
        assert_eq!(s.button_mask(), ButtonMask::SECONDARY);
        assert!(!s.buttons_down.contains(&MouseButton::Left));
    }

    #[test]
    fn button_event_updates_pointer_position() {
        let mut s = InputState::new();
        s.apply_event(&press(MouseButton::Left, MouseButtonState::Pressed));
        assert_eq!(s.pointer_pos, Some((4.0, 8.0)));
    }

    #[test]
    fn pointer_left_clears_position_but_keeps_buttons() {
        let mut s = InputState::new();
        s.apply_event(&press(MouseButton::Left, MouseButtonState::Pressed));
        s.apply_event(&InputEvent::PointerLeft);
        assert_eq!(s.pointer_pos, None);
        assert!(s.button_mask().contains(ButtonMask::PRIMARY));
    }

    #[test]
    fn unmapped_button_adds_no_bits() {
        let mut s = InputState::new();
        s.apply_event(&press(MouseButton::Other(7), MouseButtonState::Pressed));
        assert!(s.button_mask().is_empty());
    }
}
