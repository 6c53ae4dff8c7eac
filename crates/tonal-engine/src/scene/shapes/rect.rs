use crate::coords::Rect;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList};

/// Filled axis-aligned rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub paint: Paint,
}

impl DrawList {
    /// Records `rect` filled with a solid colour or gradient.
    #[inline]
    pub fn push_rect(&mut self, rect: Rect, paint: Paint) {
        self.push(DrawCmd::Rect(RectCmd { rect, paint }));
    }
}
