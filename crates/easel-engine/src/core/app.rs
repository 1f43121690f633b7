use super::ctx::FrameCtx;

/// Control directive returned by frame callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Per-frame application callback driven by the runtime.
///
/// Pointer events for the frame have already been delivered when `frame`
/// runs, so implementations call `PointerInput::update` first and read after.
pub trait FrameLoop {
    fn frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;
}

impl<F> FrameLoop for F
where
    F: FnMut(&mut FrameCtx<'_>) -> AppControl,
{
    fn frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        self(ctx)
    }
}
