use std::cell::RefCell;
use std::rc::Rc;

use winit::window::Window;

use crate::coords::{Affine2, SurfaceSize};
use crate::surface::{Context2d, Surface, SurfaceError, TransformStack};

/// [`Surface`] backed by a winit window.
///
/// Size is the window's logical inner size; the 2D context is a shared
/// [`TransformStack`] reset at the start of every frame.
#[derive(Debug, Clone)]
pub struct WindowSurface {
    window: Rc<Window>,
    context: Rc<RefCell<TransformStack>>,
}

impl WindowSurface {
    pub(crate) fn new(window: Window) -> Self {
        Self {
            window: Rc::new(window),
            context: Rc::new(RefCell::new(TransformStack::new())),
        }
    }

    #[inline]
    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn set_title(&self, title: &str) {
        self.window.set_title(title);
    }

    /// Transform currently applied by the context.
    pub fn transform(&self) -> Affine2 {
        self.context.borrow().current()
    }

    pub(crate) fn begin_frame(&self) {
        let mut ctx = self.context.borrow_mut();
        if ctx.depth() != 0 {
            log::warn!("{} unbalanced context save(s) left by the previous frame", ctx.depth());
        }
        ctx.reset();
    }
}

impl Surface for WindowSurface {
    fn bounding_size(&self) -> SurfaceSize {
        let phys = self.window.inner_size();
        let logi: winit::dpi::LogicalSize<f64> = phys.to_logical(self.window.scale_factor());
        SurfaceSize::new(logi.width as f32, logi.height as f32)
    }

    fn with_context<R>(&self, f: impl FnOnce(&mut dyn Context2d) -> R) -> Result<R, SurfaceError> {
        let mut ctx = self
            .context
            .try_borrow_mut()
            .map_err(|_| SurfaceError::ContextUnavailable)?;
        Ok(f(&mut *ctx))
    }
}
