use glam::{Affine2, Vec2};

/// Transform-stack portion of a 2D drawing context.
///
/// Operations compose onto the current transform in call order, so the last
/// call is applied to drawn geometry first (canvas semantics).
pub trait Context2d {
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: f32, dy: f32);
    fn scale(&mut self, sx: f32, sy: f32);
    fn rotate(&mut self, radians: f32);
}

/// Software transform stack implementing [`Context2d`].
///
/// Backs both the headless [`Canvas`](super::Canvas) and window surfaces;
/// renderers read [`TransformStack::current`] when emitting geometry.
#[derive(Debug, Clone, Default)]
pub struct TransformStack {
    current: Affine2,
    saved: Vec<Affine2>,
}

impl TransformStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transform applied to anything drawn right now.
    #[inline]
    pub fn current(&self) -> Affine2 {
        self.current
    }

    /// Number of outstanding `save` calls.
    #[inline]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Drops all saved states and returns to identity.
    pub fn reset(&mut self) {
        self.current = Affine2::IDENTITY;
        self.saved.clear();
    }
}

impl Context2d for TransformStack {
    fn save(&mut self) {
        self.saved.push(self.current);
    }

    fn restore(&mut self) {
        // Unbalanced restore is a no-op, matching canvas behavior.
        if let Some(prev) = self.saved.pop() {
            self.current = prev;
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.current = self.current * Affine2::from_translation(Vec2::new(dx, dy));
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.current = self.current * Affine2::from_scale(Vec2::new(sx, sy));
    }

    fn rotate(&mut self, radians: f32) {
        self.current = self.current * Affine2::from_angle(radians);
    }
}
