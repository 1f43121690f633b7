use anyhow::Result;

use easel_engine::camera::Camera;
use easel_engine::core::{AppControl, FrameCtx, FrameLoop};
use easel_engine::coords::Vec2;
use easel_engine::input::{EventSource, MouseButton, PointerInput};
use easel_engine::logging::{init_logging, LoggingConfig};
use easel_engine::window::{Runtime, RuntimeConfig, WindowSurface};

/// Zoom change per logical pixel of vertical wheel motion.
const ZOOM_PER_PIXEL: f32 = 0.002;
const ROTATE_STEP_DEGREES: f32 = 15.0;

struct CanvasDemo {
    camera: Camera<WindowSurface>,
    pointer: PointerInput,
    zoom: f32,
    pan_anchor: Option<Vec2>,
    elapsed: f32,
}

impl CanvasDemo {
    fn new(surface: &WindowSurface, events: &EventSource) -> Self {
        Self {
            camera: Camera::new(surface.clone()),
            pointer: PointerInput::new(events),
            zoom: 1.0,
            pan_anchor: None,
            elapsed: 0.0,
        }
    }

    fn handle_pan(&mut self) {
        if self.pointer.is_pressed(MouseButton::Middle) {
            self.pan_anchor = Some(self.pointer.world_position(&self.camera));
        }

        if !self.pointer.is_down(MouseButton::Middle) {
            self.pan_anchor = None;
            return;
        }

        // Keep the grabbed world point under the cursor.
        if let Some(anchor) = self.pan_anchor {
            let under = self.pointer.world_position(&self.camera);
            self.camera.x += anchor.x - under.x;
            self.camera.y += anchor.y - under.y;
        }
    }

    fn handle_zoom(&mut self) {
        let wheel = self.pointer.wheel_delta_y();
        if wheel == 0.0 {
            return;
        }

        self.zoom = (self.zoom * (1.0 - wheel * ZOOM_PER_PIXEL)).clamp(0.1, 20.0);
        self.camera.set_scale(self.zoom);
        log::debug!("zoom {:.3}", self.zoom);
    }
}

impl FrameLoop for CanvasDemo {
    fn frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        self.pointer.update();
        self.elapsed += ctx.delta_seconds();

        self.handle_pan();
        self.handle_zoom();

        if self.pointer.is_pressed(MouseButton::Right) {
            self.camera.angle_degrees = (self.camera.angle_degrees + ROTATE_STEP_DEGREES) % 360.0;
            log::info!("camera angle {}°", self.camera.angle_degrees);
        }

        let world = self.pointer.world_position(&self.camera);
        if self.pointer.is_pressed(MouseButton::Left) {
            log::info!("click at world ({:.1}, {:.1})", world.x, world.y);
        }

        if let Err(e) = self.camera.begin().and_then(|_| self.camera.end()) {
            log::error!("camera transform failed: {e}");
            return AppControl::Exit;
        }

        ctx.surface.set_title(&format!(
            "easel  world ({:.1}, {:.1})  zoom {:.2}  angle {}°  t {:.1}s",
            world.x, world.y, self.zoom, self.camera.angle_degrees, self.elapsed
        ));

        AppControl::Continue
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "easel".to_string(),
        ..RuntimeConfig::default()
    };

    Runtime::run(config, CanvasDemo::new)
}
