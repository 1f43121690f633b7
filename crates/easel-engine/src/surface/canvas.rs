use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::coords::{Affine2, SurfaceSize};

use super::{Context2d, Surface, SurfaceError, TransformStack};

/// Headless, shareable drawing surface.
///
/// Clones share the same size and context, so a camera and the code that
/// resizes the surface can each hold a handle. Size and context live in
/// separate cells: the size stays readable while the context is lent out.
#[derive(Debug, Clone)]
pub struct Canvas {
    size: Rc<Cell<SurfaceSize>>,
    context: Option<Rc<RefCell<TransformStack>>>,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Rc::new(Cell::new(SurfaceSize::new(width, height))),
            context: Some(Rc::new(RefCell::new(TransformStack::new()))),
        }
    }

    /// A surface whose context can never be acquired.
    pub fn without_context(width: f32, height: f32) -> Self {
        Self {
            size: Rc::new(Cell::new(SurfaceSize::new(width, height))),
            context: None,
        }
    }

    /// Changes the bounding size, as a window resize would.
    pub fn resize(&self, width: f32, height: f32) {
        log::debug!("canvas resized to {width}x{height}");
        self.size.set(SurfaceSize::new(width, height));
    }

    /// Current context transform.
    ///
    /// `None` without a context, or while the context is lent to a closure.
    pub fn transform(&self) -> Option<Affine2> {
        let ctx = self.context.as_ref()?.try_borrow().ok()?;
        Some(ctx.current())
    }

    /// Outstanding `save` depth; `None` when [`transform`](Self::transform) is.
    pub fn save_depth(&self) -> Option<usize> {
        let ctx = self.context.as_ref()?.try_borrow().ok()?;
        Some(ctx.depth())
    }
}

impl Surface for Canvas {
    fn bounding_size(&self) -> SurfaceSize {
        self.size.get()
    }

    fn with_context<R>(&self, f: impl FnOnce(&mut dyn Context2d) -> R) -> Result<R, SurfaceError> {
        let mut ctx = self
            .context
            .as_ref()
            .ok_or(SurfaceError::ContextUnavailable)?
            .try_borrow_mut()
            .map_err(|_| SurfaceError::ContextUnavailable)?;
        Ok(f(&mut *ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn clones_share_size() {
        let canvas = Canvas::new(800.0, 600.0);
        let handle = canvas.clone();
        canvas.resize(1024.0, 768.0);
        assert_eq!(handle.bounding_size(), SurfaceSize::new(1024.0, 768.0));
    }

    #[test]
    fn missing_context_is_an_error() {
        let canvas = Canvas::without_context(800.0, 600.0);
        let res = canvas.with_context(|ctx| ctx.save());
        assert_eq!(res, Err(SurfaceError::ContextUnavailable));
        assert_eq!(canvas.transform(), None);
    }

    #[test]
    fn context_operations_are_visible_through_handles() {
        let canvas = Canvas::new(100.0, 100.0);
        canvas.with_context(|ctx| ctx.translate(3.0, 4.0)).unwrap();
        let expected = Affine2::from_translation(Vec2::new(3.0, 4.0));
        assert_eq!(canvas.clone().transform(), Some(expected));
    }

    #[test]
    fn size_is_readable_while_context_is_lent() {
        let canvas = Canvas::new(640.0, 480.0);
        let size = canvas.with_context(|_| canvas.bounding_size()).unwrap();
        assert_eq!(size, SurfaceSize::new(640.0, 480.0));
    }

    #[test]
    fn nested_context_acquisition_is_an_error() {
        let canvas = Canvas::new(640.0, 480.0);
        let inner = canvas
            .with_context(|_| {
                assert_eq!(canvas.transform(), None);
                canvas.with_context(|ctx| ctx.save())
            })
            .unwrap();
        assert_eq!(inner, Err(SurfaceError::ContextUnavailable));
        assert_eq!(canvas.save_depth(), Some(0));
    }
}
