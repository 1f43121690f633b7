//! Coordinate and geometry types shared by the camera, surfaces and input.
//!
//! Canonical surface space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left of the drawing surface
//! - +X right, +Y down
//!
//! World space is whatever the camera transform maps onto surface space.
//! Transforms are `glam::Affine2` in canvas order: `lhs * rhs` applies `rhs`
//! first, so appending `ctx.translate(..)` is `current * from_translation(..)`.

mod size;
mod vec2;

pub use glam::Affine2;
pub use size::SurfaceSize;
pub use vec2::Vec2;
