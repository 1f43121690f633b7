use std::cell::RefCell;
use std::rc::Rc;

use crate::camera::Camera;
use crate::coords::Vec2;
use crate::surface::Surface;

use super::source::{EventSource, Subscription};
use super::state::{ButtonStates, InputState, WheelAccumulator};
use super::types::{MouseButton, PointerEvent};

/// Live pointer state shared with the event subscription.
#[derive(Debug, Default)]
struct PointerState {
    position: Vec2,
    buttons: ButtonStates<InputState>,
    wheel: WheelAccumulator,
}

impl PointerState {
    fn apply(&mut self, event: &PointerEvent) {
        match *event {
            PointerEvent::Moved { x, y } => {
                self.position = Vec2::new(x, y);
            }

            PointerEvent::ButtonDown { button } => self.set_down(button, true),
            PointerEvent::ButtonUp { button } => self.set_down(button, false),

            PointerEvent::Wheel { delta_x, delta_y } => {
                self.wheel.add(delta_x, delta_y);
            }
        }
    }

    fn set_down(&mut self, index: u16, down: bool) {
        match MouseButton::from_index(index) {
            Some(button) => self.buttons.get_mut(button).is_down = down,
            None => log::trace!("ignoring untracked mouse button {index}"),
        }
    }

    fn update(&mut self) {
        for (_, state) in self.buttons.iter_mut() {
            latch_edges(state);
        }
        self.wheel.latch();
    }
}

/// Advances one button's edge observables.
///
/// Both edges read the previous cycle's `*_prev` values before they are
/// overwritten. The release observable is true on every up-cycle that does
/// not directly follow a true one, so it alternates while the button stays up.
fn latch_edges(state: &mut InputState) {
    state.is_pressed = !state.is_down_prev && state.is_down;
    state.is_released = !state.is_down && !state.is_released_prev;
    state.is_down_prev = state.is_down;
    state.is_released_prev = state.is_released;
}

/// Polling-friendly pointer tracker.
///
/// Ordering contract per frame: deliver all raw events, call [`update`](Self::update)
/// once, then read. `is_down` and the position reflect events immediately;
/// pressed, released and wheel deltas only change at `update`.
#[derive(Debug)]
pub struct PointerInput {
    state: Rc<RefCell<PointerState>>,
    subscription: Subscription,
}

impl PointerInput {
    /// Subscribes to `source` for the tracker's lifetime.
    pub fn new(source: &EventSource) -> Self {
        let state = Rc::new(RefCell::new(PointerState::default()));

        let live = Rc::clone(&state);
        let subscription = source.subscribe(move |event| live.borrow_mut().apply(event));

        Self { state, subscription }
    }

    /// Latches button edges and the wheel total for the frame.
    pub fn update(&mut self) {
        self.state.borrow_mut().update();
    }

    #[inline]
    pub fn is_down(&self, button: MouseButton) -> bool {
        self.button(button).is_down
    }

    #[inline]
    pub fn is_pressed(&self, button: MouseButton) -> bool {
        self.button(button).is_pressed
    }

    #[inline]
    pub fn is_released(&self, button: MouseButton) -> bool {
        self.button(button).is_released
    }

    /// Full state record of `button`, as of now.
    pub fn button(&self, button: MouseButton) -> InputState {
        *self.state.borrow().buttons.get(button)
    }

    /// Total horizontal wheel motion of the previous frame.
    pub fn wheel_delta_x(&self) -> f32 {
        self.state.borrow().wheel.last_x
    }

    /// Total vertical wheel motion of the previous frame.
    pub fn wheel_delta_y(&self) -> f32 {
        self.state.borrow().wheel.last_y
    }

    /// Pointer position in surface-local pixels.
    pub fn position(&self) -> Vec2 {
        self.state.borrow().position
    }

    pub fn x(&self) -> f32 {
        self.position().x
    }

    pub fn y(&self) -> f32 {
        self.position().y
    }

    /// World X under the pointer, inverting only the camera's translation and scale.
    ///
    /// Anchor and rotation are not accounted for; use
    /// [`Camera::surface_to_world`] for rotated or anchored cameras.
    pub fn world_x<S: Surface>(&self, camera: &Camera<S>) -> f32 {
        camera.x + self.x() / camera.scale_x()
    }

    /// World Y under the pointer; see [`world_x`](Self::world_x).
    pub fn world_y<S: Surface>(&self, camera: &Camera<S>) -> f32 {
        camera.y + self.y() / camera.scale_y()
    }

    pub fn world_position<S: Surface>(&self, camera: &Camera<S>) -> Vec2 {
        Vec2::new(self.world_x(camera), self.world_y(camera))
    }

    /// Detaches from the event source. Dropping the tracker has the same effect.
    pub fn dispose(self) {
        let Self { subscription, .. } = self;
        subscription.cancel();
    }
}
