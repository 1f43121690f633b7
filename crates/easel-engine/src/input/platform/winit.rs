use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitMouseButton, MouseScrollDelta, WindowEvent};

use crate::input::PointerEvent;

/// Logical pixels per wheel "line" when the platform reports line deltas.
pub const DEFAULT_LINE_HEIGHT: f32 = 16.0;

/// Translates a winit `WindowEvent` into a raw [`PointerEvent`].
///
/// `scale_factor` converts physical to logical pixels. Returns `None` for
/// events that are not pointer input.
pub fn translate_window_event(
    event: &WindowEvent,
    scale_factor: f64,
    line_height: f32,
) -> Option<PointerEvent> {
    match event {
        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = to_logical_f32(*position, scale_factor);
            Some(PointerEvent::Moved { x, y })
        }

        WindowEvent::MouseInput { state, button, .. } => {
            let button = button_index(*button);
            Some(match state {
                ElementState::Pressed => PointerEvent::ButtonDown { button },
                ElementState::Released => PointerEvent::ButtonUp { button },
            })
        }

        WindowEvent::MouseWheel { delta, .. } => {
            let (delta_x, delta_y) = wheel_delta(*delta, scale_factor, line_height);
            Some(PointerEvent::Wheel { delta_x, delta_y })
        }

        _ => None,
    }
}

/// Raw button index in browser order (0 left, 1 middle, 2 right, 3 back, 4 forward).
pub fn button_index(button: WinitMouseButton) -> u16 {
    match button {
        WinitMouseButton::Left => 0,
        WinitMouseButton::Middle => 1,
        WinitMouseButton::Right => 2,
        WinitMouseButton::Back => 3,
        WinitMouseButton::Forward => 4,
        WinitMouseButton::Other(v) => v,
    }
}

/// Wheel delta in logical pixels, positive Y scrolling down.
///
/// winit reports positive values for motion away from the user; the sign is
/// flipped to match the browser wheel convention.
pub fn wheel_delta(delta: MouseScrollDelta, scale_factor: f64, line_height: f32) -> (f32, f32) {
    match delta {
        MouseScrollDelta::LineDelta(x, y) => (-x * line_height, -y * line_height),
        MouseScrollDelta::PixelDelta(p) => {
            let (x, y) = to_logical_f32(p, scale_factor);
            (-x, -y)
        }
    }
}

fn to_logical_f32(pos: PhysicalPosition<f64>, scale_factor: f64) -> (f32, f32) {
    let logical = pos.to_logical::<f64>(scale_factor);
    (logical.x as f32, logical.y as f32)
}
