//! Camera subsystem.
//!
//! A camera owns position, logical size, anchor and rotation for one drawing
//! surface. Scale is never stored: it is derived from logical size against the
//! surface's live size, so surface resizes change the effective zoom while
//! logical size stays fixed.

mod camera;

pub use camera::Camera;
