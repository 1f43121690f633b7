//! Easel engine crate.
//!
//! Runtime substrate for interactive 2D canvases: a camera mapping surface
//! space to world space, an edge-detecting pointer tracker, and the frame loop
//! that drives both.

pub mod camera;
pub mod coords;
pub mod core;
pub mod input;
pub mod surface;
pub mod time;
pub mod window;

pub mod logging;
