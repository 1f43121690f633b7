//! Window + runtime loop.
//!
//! Owns the `winit` event loop and window, forwards pointer events into an
//! [`EventSource`](crate::input::EventSource) and drives the application's
//! [`FrameLoop`](crate::core::FrameLoop) once per redraw.

mod runtime;
mod surface;

pub use runtime::{Runtime, RuntimeConfig};
pub use surface::WindowSurface;
