//! Time subsystem.
//!
//! Provides frame timing for the frame loop without coupling to the runtime.
//! Intended usage:
//! - one `FrameClock` per loop
//! - call `tick()` once per frame to obtain the elapsed time since the previous one

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
