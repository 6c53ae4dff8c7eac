use bitflags::bitflags;

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

bitflags! {
    /// Set of pointer buttons held at the time of an event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ButtonMask: u8 {
        /// Primary (usually left) button.
        const PRIMARY = 1 << 0;
        /// Secondary (usually right) button.
        const SECONDARY = 1 << 1;
        const MIDDLE = 1 << 2;
    }
}

impl ButtonMask {
    /// Mask bit for `button`; buttons without a bit map to the empty mask.
    #[inline]
    pub fn from_button(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => ButtonMask::PRIMARY,
            MouseButton::Right => ButtonMask::SECONDARY,
            MouseButton::Middle => ButtonMask::MIDDLE,
            MouseButton::Other(_) => ButtonMask::empty(),
        }
    }
}

/// Pointer move event in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

/// Pointer button event.
///
/// Carries coordinates so processing does not depend on a separately tracked
/// pointer position.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
    pub x: f32,
    pub y: f32,
}

/// Platform-agnostic input events.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerMoved(PointerMoveEvent),
    PointerButton(PointerButtonEvent),
    /// Pointer left the surface.
    PointerLeft,
}
