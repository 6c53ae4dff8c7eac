//! Input subsystem.
//!
//! Public API is platform-agnostic. Hosts translate window-system events into
//! `InputEvent`s and feed them to an `InputState`.

mod state;
mod types;

pub use state::InputState;
pub use types::{
    ButtonMask,
    InputEvent,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};
