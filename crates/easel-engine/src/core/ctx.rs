use crate::surface::Surface;
use crate::time::FrameTime;
use crate::window::WindowSurface;

use super::app::AppControl;

/// Per-frame context passed to [`FrameLoop::frame`](super::FrameLoop::frame).
pub struct FrameCtx<'a, S: Surface = WindowSurface> {
    pub time: FrameTime,
    pub surface: &'a S,
    exit_requested: bool,
}

impl<'a, S: Surface> FrameCtx<'a, S> {
    pub fn new(time: FrameTime, surface: &'a S) -> Self {
        Self {
            time,
            surface,
            exit_requested: false,
        }
    }

    /// Seconds since the previous frame.
    #[inline]
    pub fn delta_seconds(&self) -> f32 {
        self.time.dt
    }

    /// Asks the runtime to stop after this frame, whatever `frame` returns.
    pub fn exit(&mut self) {
        self.exit_requested = true;
    }

    #[inline]
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Combines the callback's return value with any [`exit`](Self::exit) request.
    pub fn resolve(&self, returned: AppControl) -> AppControl {
        if self.exit_requested {
            AppControl::Exit
        } else {
            returned
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Canvas;
    use crate::time::FrameClock;
    use std::time::{Duration, Instant};

    fn frame_time() -> FrameTime {
        let t0 = Instant::now();
        let mut clock =
            FrameClock::starting_at(t0, FrameClock::DEFAULT_DT_MIN, FrameClock::DEFAULT_DT_MAX);
        clock.tick_at(t0 + Duration::from_millis(20))
    }

    #[test]
    fn continue_passes_through_without_exit_request() {
        let canvas = Canvas::new(100.0, 100.0);
        let ctx = FrameCtx::new(frame_time(), &canvas);
        assert!(!ctx.exit_requested());
        assert_eq!(ctx.resolve(AppControl::Continue), AppControl::Continue);
        assert_eq!(ctx.resolve(AppControl::Exit), AppControl::Exit);
    }

    #[test]
    fn exit_request_overrides_continue() {
        let canvas = Canvas::new(100.0, 100.0);
        let mut ctx = FrameCtx::new(frame_time(), &canvas);
        ctx.exit();
        assert!(ctx.exit_requested());
        assert_eq!(ctx.resolve(AppControl::Continue), AppControl::Exit);
    }

    #[test]
    fn delta_seconds_reports_frame_dt() {
        let canvas = Canvas::new(100.0, 100.0);
        let ctx = FrameCtx::new(frame_time(), &canvas);
        assert!((ctx.delta_seconds() - 0.02).abs() < 1e-6);
        assert_eq!(ctx.surface.bounding_size().width, 100.0);
    }
}
