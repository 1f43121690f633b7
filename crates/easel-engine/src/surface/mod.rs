//! Drawing surface boundary.
//!
//! The engine never rasterizes anything itself. Cameras consume a surface
//! through two capabilities only: its live bounding size and a 2D context
//! exposing a transform stack. Renderers read the resulting transform from
//! the context they own.

mod canvas;
mod context;
mod error;

pub use canvas::Canvas;
pub use context::{Context2d, TransformStack};
pub use error::SurfaceError;

use crate::coords::SurfaceSize;

/// A drawing surface that can report its size and lend out a 2D context.
pub trait Surface {
    /// Current bounding size in logical pixels.
    ///
    /// Re-read on every call; callers must not cache it across frames.
    fn bounding_size(&self) -> SurfaceSize;

    /// Runs `f` against the surface's 2D context.
    ///
    /// Fails with [`SurfaceError::ContextUnavailable`] when the surface cannot
    /// produce one.
    fn with_context<R>(&self, f: impl FnOnce(&mut dyn Context2d) -> R) -> Result<R, SurfaceError>;
}

impl<S: Surface + ?Sized> Surface for &S {
    fn bounding_size(&self) -> SurfaceSize {
        (**self).bounding_size()
    }

    fn with_context<R>(&self, f: impl FnOnce(&mut dyn Context2d) -> R) -> Result<R, SurfaceError> {
        (**self).with_context(f)
    }
}
