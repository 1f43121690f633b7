use super::types::MouseButton;

/// Four-phase status of one button.
///
/// Raw event handlers only write `is_down`; every other field is recomputed
/// by `PointerInput::update`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct InputState {
    /// Button currently held.
    pub is_down: bool,

    /// `is_down` as of the previous update.
    pub is_down_prev: bool,

    /// Rising edge observed at the last update.
    pub is_pressed: bool,

    /// Release observable computed at the last update.
    pub is_released: bool,

    /// `is_released` as of the previous update.
    pub is_released_prev: bool,
}

/// Fixed mapping from each tracked [`MouseButton`] to a value.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ButtonStates<T> {
    pub left: T,
    pub middle: T,
    pub right: T,
}

impl<T> ButtonStates<T> {
    #[inline]
    pub fn get(&self, button: MouseButton) -> &T {
        match button {
            MouseButton::Left => &self.left,
            MouseButton::Middle => &self.middle,
            MouseButton::Right => &self.right,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, button: MouseButton) -> &mut T {
        match button {
            MouseButton::Left => &mut self.left,
            MouseButton::Middle => &mut self.middle,
            MouseButton::Right => &mut self.right,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (MouseButton, &T)> {
        [
            (MouseButton::Left, &self.left),
            (MouseButton::Middle, &self.middle),
            (MouseButton::Right, &self.right),
        ]
        .into_iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (MouseButton, &mut T)> {
        [
            (MouseButton::Left, &mut self.left),
            (MouseButton::Middle, &mut self.middle),
            (MouseButton::Right, &mut self.right),
        ]
        .into_iter()
    }
}

/// Wheel motion summed between updates.
///
/// Readers see `last_*`, the complete total of the previous frame; the
/// accumulator restarts from zero at every latch.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct WheelAccumulator {
    pub acc_x: f32,
    pub acc_y: f32,
    pub last_x: f32,
    pub last_y: f32,
}

impl WheelAccumulator {
    #[inline]
    pub fn add(&mut self, dx: f32, dy: f32) {
        self.acc_x += dx;
        self.acc_y += dy;
    }

    /// Publishes the accumulated totals and zeroes the accumulator.
    pub fn latch(&mut self) {
        self.last_x = self.acc_x;
        self.last_y = self.acc_y;
        self.acc_x = 0.0;
        self.acc_y = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_map_addresses_each_slot() {
        let mut map = ButtonStates::<u8>::default();
        *map.get_mut(MouseButton::Middle) = 7;
        assert_eq!(map.middle, 7);
        assert_eq!(*map.get(MouseButton::Left), 0);

        for (_, v) in map.iter_mut() {
            *v += 1;
        }
        let collected: Vec<_> = map.iter().map(|(b, v)| (b, *v)).collect();
        assert_eq!(
            collected,
            vec![(MouseButton::Left, 1), (MouseButton::Middle, 8), (MouseButton::Right, 1)]
        );
    }

    #[test]
    fn wheel_latch_publishes_and_resets() {
        let mut wheel = WheelAccumulator::default();
        wheel.add(1.0, -2.0);
        wheel.add(0.5, -2.0);
        assert_eq!(wheel.last_x, 0.0);

        wheel.latch();
        assert_eq!((wheel.last_x, wheel.last_y), (1.5, -4.0));
        assert_eq!((wheel.acc_x, wheel.acc_y), (0.0, 0.0));

        wheel.latch();
        assert_eq!((wheel.last_x, wheel.last_y), (0.0, 0.0));
    }
}
