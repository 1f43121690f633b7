use crate::coords::{Affine2, SurfaceSize, Vec2};
use crate::surface::{Context2d, Surface, SurfaceError};

/// 2D camera over a drawing surface.
///
/// `begin()` composes, in order:
/// 1. translate by `(-x, -y)`
/// 2. scale by `(scale_x, scale_y)`
/// 3. translate by `(-anchor_rel_x * width, -anchor_rel_y * height)`
/// 4. rotate by `angle_degrees`
///
/// Logical size must stay positive; a zero size yields a non-finite scale.
#[derive(Debug, Clone)]
pub struct Camera<S: Surface> {
    /// Camera position, applied as the first translation.
    pub x: f32,
    pub y: f32,

    /// Logical view size at scale 1.
    pub width: f32,
    pub height: f32,

    /// Rotation pivot as a fraction of the logical size.
    pub anchor_rel_x: f32,
    pub anchor_rel_y: f32,

    pub angle_degrees: f32,

    surface: S,
}

impl<S: Surface> Camera<S> {
    /// Creates a camera whose logical size equals the surface's current size (scale 1).
    pub fn new(surface: S) -> Self {
        let size = surface.bounding_size();
        Self::with_size(surface, size.width, size.height)
    }

    /// Creates a camera with an explicit logical size.
    pub fn with_size(surface: S, width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
            anchor_rel_x: 0.0,
            anchor_rel_y: 0.0,
            angle_degrees: 0.0,
            surface,
        }
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Live bounding size of the surface. Not cached.
    #[inline]
    pub fn canvas_size(&self) -> SurfaceSize {
        self.surface.bounding_size()
    }

    #[inline]
    pub fn scale_x(&self) -> f32 {
        self.canvas_size().width / self.width
    }

    #[inline]
    pub fn scale_y(&self) -> f32 {
        self.canvas_size().height / self.height
    }

    /// Re-derives the logical width from `scale` and the surface width at call time.
    pub fn set_scale_x(&mut self, scale: f32) {
        self.width = self.canvas_size().width / scale;
    }

    /// Re-derives the logical height from `scale` and the surface height at call time.
    pub fn set_scale_y(&mut self, scale: f32) {
        self.height = self.canvas_size().height / scale;
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.set_scale_x(scale);
        self.set_scale_y(scale);
    }

    #[inline]
    pub fn angle_radians(&self) -> f32 {
        self.angle_degrees.to_radians()
    }

    fn anchor_offset(&self) -> Vec2 {
        Vec2::new(-self.anchor_rel_x * self.width, -self.anchor_rel_y * self.height)
    }

    /// The world-to-surface transform `begin()` applies.
    pub fn transform(&self) -> Affine2 {
        Affine2::from_translation(glam::Vec2::new(-self.x, -self.y))
            * Affine2::from_scale(glam::Vec2::new(self.scale_x(), self.scale_y()))
            * Affine2::from_translation(self.anchor_offset().into())
            * Affine2::from_angle(self.angle_radians())
    }

    /// Maps a world point onto the surface, including anchor and rotation.
    pub fn world_to_surface(&self, world: Vec2) -> Vec2 {
        self.transform().transform_point2(world.into()).into()
    }

    /// Maps a surface point into world space, including anchor and rotation.
    ///
    /// Returns `None` when the transform is singular (zero or non-finite scale).
    pub fn surface_to_world(&self, surface: Vec2) -> Option<Vec2> {
        let transform = self.transform();
        if transform.matrix2.determinant() == 0.0 {
            return None;
        }

        let world: Vec2 = transform.inverse().transform_point2(surface.into()).into();
        world.is_finite().then_some(world)
    }

    /// Saves the context transform and applies the camera transform.
    ///
    /// Must be paired with exactly one [`Camera::end`]; nesting is not supported.
    pub fn begin(&self) -> Result<(), SurfaceError> {
        let size = self.canvas_size();
        if !size.is_valid() {
            log::warn!(
                "camera begin on invalid surface size {}x{}; scale is not finite or zero",
                size.width,
                size.height
            );
        }

        // Read everything derived from the surface before borrowing its context.
        let (sx, sy) = (self.scale_x(), self.scale_y());
        let anchor = self.anchor_offset();
        let radians = self.angle_radians();
        let (x, y) = (self.x, self.y);

        self.surface.with_context(|ctx| {
            ctx.save();
            ctx.translate(-x, -y);
            ctx.scale(sx, sy);
            ctx.translate(anchor.x, anchor.y);
            ctx.rotate(radians);
        })?;

        log::trace!(
            "camera begin: pos=({x}, {y}) scale=({sx}, {sy}) angle={}",
            self.angle_degrees
        );
        Ok(())
    }

    /// Restores the context transform saved by [`Camera::begin`].
    pub fn end(&self) -> Result<(), SurfaceError> {
        self.surface.with_context(|ctx| ctx.restore())?;
        log::trace!("camera end");
        Ok(())
    }

    /// Runs `draw` between `begin()` and `end()`.
    pub fn draw<R>(&self, draw: impl FnOnce(&mut dyn Context2d) -> R) -> Result<R, SurfaceError> {
        self.begin()?;
        let out = self.surface.with_context(draw);
        self.end()?;
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{EventSource, PointerEvent, PointerInput};
    use crate::surface::Canvas;

    const EPS: f32 = 1e-4;

    fn camera_800x600() -> (Canvas, Camera<Canvas>) {
        let canvas = Canvas::new(800.0, 600.0);
        let camera = Camera::new(canvas.clone());
        (canvas, camera)
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_uses_surface_size_as_logical_size() {
        let (_, camera) = camera_800x600();
        assert_eq!(camera.width, 800.0);
        assert_eq!(camera.height, 600.0);
        assert_eq!(camera.scale_x(), 1.0);
        assert_eq!(camera.scale_y(), 1.0);
    }

    #[test]
    fn with_size_derives_scale() {
        let camera = Camera::with_size(Canvas::new(800.0, 600.0), 400.0, 300.0);
        assert_eq!(camera.scale_x(), 2.0);
        assert_eq!(camera.scale_y(), 2.0);
    }

    // ── scale / logical size duality ──────────────────────────────────────

    #[test]
    fn setting_scale_rewrites_logical_size() {
        let (_, mut camera) = camera_800x600();
        camera.set_scale_x(2.0);
        assert_eq!(camera.width, 400.0);
        assert_eq!(camera.scale_x(), 2.0);
        // Height untouched.
        assert_eq!(camera.height, 600.0);
    }

    #[test]
    fn set_scale_applies_to_both_axes() {
        let (_, mut camera) = camera_800x600();
        camera.set_scale(4.0);
        assert_eq!(camera.width, 200.0);
        assert_eq!(camera.height, 150.0);
    }

    #[test]
    fn resize_changes_effective_scale_not_logical_size() {
        let (canvas, mut camera) = camera_800x600();
        camera.set_scale(2.0);
        canvas.resize(1600.0, 1200.0);

        assert_eq!(camera.width, 400.0);
        assert_eq!(camera.scale_x(), 4.0);
        assert_eq!(camera.canvas_size(), SurfaceSize::new(1600.0, 1200.0));
    }

    // ── begin / end ───────────────────────────────────────────────────────

    #[test]
    fn begin_applies_translate_then_scale() {
        let canvas = Canvas::new(800.0, 600.0);
        let mut camera = Camera::with_size(canvas.clone(), 400.0, 300.0);
        camera.x = 10.0;
        camera.y = 20.0;

        camera.begin().unwrap();
        let m = canvas.transform().unwrap();
        assert_eq!(m.transform_point2(glam::Vec2::ZERO), glam::Vec2::new(-10.0, -20.0));
        assert_eq!(
            m.transform_point2(glam::Vec2::new(50.0, 50.0)),
            glam::Vec2::new(90.0, 80.0)
        );
        camera.end().unwrap();
    }

    #[test]
    fn begin_matches_composed_transform_with_anchor_and_rotation() {
        let (canvas, mut camera) = camera_800x600();
        camera.x = -30.0;
        camera.y = 12.5;
        camera.set_scale(1.5);
        camera.anchor_rel_x = 0.5;
        camera.anchor_rel_y = 0.5;
        camera.angle_degrees = 30.0;

        camera.begin().unwrap();
        assert!(canvas.transform().unwrap().abs_diff_eq(camera.transform(), EPS));
        camera.end().unwrap();
    }

    #[test]
    fn end_restores_transform_from_before_begin() {
        let (canvas, mut camera) = camera_800x600();
        canvas.with_context(|ctx| ctx.translate(7.0, -3.0)).unwrap();
        let before = canvas.transform().unwrap();

        for angle in [0.0, 45.0, 90.0, 200.0] {
            camera.angle_degrees = angle;
            camera.x += 5.0;
            camera.begin().unwrap();
            camera.end().unwrap();
            assert_eq!(canvas.transform().unwrap(), before);
            assert_eq!(canvas.save_depth(), Some(0));
        }
    }

    #[test]
    fn draw_brackets_closure() {
        let (canvas, camera) = camera_800x600();
        let out = camera
            .draw(|ctx| {
                ctx.translate(1000.0, 0.0);
                42
            })
            .unwrap();
        assert_eq!(out, 42);
        assert_eq!(canvas.transform(), Some(Affine2::IDENTITY));
        assert_eq!(canvas.save_depth(), Some(0));
    }

    #[test]
    fn surface_reads_inside_draw_do_not_conflict() {
        let canvas = Canvas::new(800.0, 600.0);
        let mut camera = Camera::with_size(canvas.clone(), 400.0, 300.0);
        camera.x = 10.0;

        let source = EventSource::new();
        let input = PointerInput::new(&source);
        source.emit(&PointerEvent::Moved { x: 100.0, y: 100.0 });

        let (world_x, scale, size) = camera
            .draw(|_| (input.world_x(&camera), camera.scale_x(), camera.canvas_size()))
            .unwrap();
        assert_eq!(world_x, 60.0);
        assert_eq!(scale, 2.0);
        assert_eq!(size, SurfaceSize::new(800.0, 600.0));
        assert_eq!(canvas.save_depth(), Some(0));
    }

    #[test]
    fn nested_begin_inside_draw_reports_unavailable_context() {
        let (canvas, camera) = camera_800x600();
        let nested = camera.draw(|_| camera.begin()).unwrap();
        assert_eq!(nested, Err(SurfaceError::ContextUnavailable));
        assert_eq!(canvas.save_depth(), Some(0));
    }

    #[test]
    fn begin_on_zero_sized_surface_still_brackets() {
        let (canvas, camera) = camera_800x600();
        canvas.resize(0.0, 0.0);
        camera.begin().unwrap();
        camera.end().unwrap();
        assert_eq!(canvas.save_depth(), Some(0));
    }

    #[test]
    fn missing_context_fails_begin_and_end() {
        let camera = Camera::new(Canvas::without_context(800.0, 600.0));
        assert_eq!(camera.begin(), Err(SurfaceError::ContextUnavailable));
        assert_eq!(camera.end(), Err(SurfaceError::ContextUnavailable));
        assert!(camera.draw(|_| ()).is_err());
    }

    // ── full conversion ───────────────────────────────────────────────────

    #[test]
    fn surface_to_world_inverts_world_to_surface() {
        let (_, mut camera) = camera_800x600();
        camera.x = 40.0;
        camera.y = -15.0;
        camera.set_scale(2.0);
        camera.anchor_rel_x = 0.25;
        camera.anchor_rel_y = 0.75;
        camera.angle_degrees = -60.0;

        let world = Vec2::new(123.0, -45.0);
        let surface = camera.world_to_surface(world);
        let back = camera.surface_to_world(surface).unwrap();
        assert!(back.approx_eq(world, 1e-3));
    }

    #[test]
    fn zero_scale_has_no_world_mapping() {
        let (canvas, camera) = camera_800x600();
        canvas.resize(0.0, 600.0);
        assert!(camera.surface_to_world(Vec2::new(1.0, 1.0)).is_none());
    }
}
