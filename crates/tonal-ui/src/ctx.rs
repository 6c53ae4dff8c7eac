use std::cell::Cell;

/// Redraw bookkeeping shared between a host and the widgets it routes events to.
///
/// Widgets never touch the window system; they call
/// [`EventCtx::request_redraw`] and the host polls [`Invalidation::take`]
/// after dispatch to decide whether to repaint.
#[derive(Debug, Default)]
pub struct Invalidation {
    requests: Cell<u32>,
}

impl Invalidation {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn request(&self) {
        self.requests.set(self.requests.get().saturating_add(1));
    }

    /// Returns `true` if any redraw was requested, and resets the counter.
    #[inline]
    pub fn take(&self) -> bool {
        self.requests.replace(0) > 0
    }
}

/// Resources made available to [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy)]
pub struct EventCtx<'a> {
    invalidation: &'a Invalidation,
}

impl<'a> EventCtx<'a> {
    #[inline]
    pub fn new(invalidation: &'a Invalidation) -> Self {
        Self { invalidation }
    }

    /// Ask the host to repaint the widget before the next frame is shown.
    #[inline]
    pub fn request_redraw(&self) {
        self.invalidation.request();
    }
}
