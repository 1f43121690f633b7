//! Core engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and application
//! code: the per-frame callback and the context it receives.

mod app;
mod ctx;

pub use app::{AppControl, FrameLoop};
pub use ctx::FrameCtx;
