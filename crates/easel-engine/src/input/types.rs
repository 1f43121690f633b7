/// Tracked mouse button.
///
/// Raw platform indices follow the browser convention: 0 = left, 1 = middle,
/// 2 = right. Any other index is untracked.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

impl MouseButton {
    pub const ALL: [MouseButton; 3] = [MouseButton::Left, MouseButton::Middle, MouseButton::Right];

    /// Maps a raw button index; `None` for buttons outside the tracked set.
    #[inline]
    pub fn from_index(index: u16) -> Option<MouseButton> {
        match index {
            0 => Some(MouseButton::Left),
            1 => Some(MouseButton::Middle),
            2 => Some(MouseButton::Right),
            _ => None,
        }
    }

    #[inline]
    pub fn index(self) -> u16 {
        match self {
            MouseButton::Left => 0,
            MouseButton::Middle => 1,
            MouseButton::Right => 2,
        }
    }
}

/// Raw pointer event record, delivered in arrival order.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PointerEvent {
    /// Pointer moved; surface-local logical pixels, not clamped to the surface.
    Moved { x: f32, y: f32 },

    /// Button pressed, identified by raw index.
    ButtonDown { button: u16 },

    /// Button released, identified by raw index.
    ButtonUp { button: u16 },

    /// Wheel motion. Positive `delta_y` scrolls down.
    Wheel { delta_x: f32, delta_y: f32 },
}
