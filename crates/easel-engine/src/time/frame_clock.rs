use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds elapsed since the previous tick, after clamping.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,
}

impl FrameTime {
    #[inline]
    pub fn delta_seconds(&self) -> f32 {
        self.dt
    }
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is measured from the previous tick, not from clock creation,
/// and is clamped so a stall (debugger, minimized window) does not hand the
/// frame loop a huge step.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub const DEFAULT_DT_MIN: Duration = Duration::from_micros(100);
    pub const DEFAULT_DT_MAX: Duration = Duration::from_millis(250);

    /// Creates a new clock with default clamps.
    pub fn new() -> Self {
        Self::with_clamps(Self::DEFAULT_DT_MIN, Self::DEFAULT_DT_MAX)
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        Self::starting_at(Instant::now(), dt_min, dt_max)
    }

    /// Creates a clock with an explicit baseline.
    pub fn starting_at(start: Instant, dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: start,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the clock baseline, e.g. when resuming from suspension.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock to the current instant.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(start: Instant) -> FrameClock {
        FrameClock::starting_at(start, FrameClock::DEFAULT_DT_MIN, FrameClock::DEFAULT_DT_MAX)
    }

    #[test]
    fn dt_is_measured_from_previous_tick() {
        let t0 = Instant::now();
        let mut c = clock(t0);

        let a = c.tick_at(t0 + Duration::from_millis(16));
        let b = c.tick_at(t0 + Duration::from_millis(33));

        assert!((a.dt - 0.016).abs() < 1e-6);
        assert!((b.dt - 0.017).abs() < 1e-6);
        assert_eq!(a.frame_index, 0);
        assert_eq!(b.frame_index, 1);
    }

    #[test]
    fn dt_is_clamped_both_ways() {
        let t0 = Instant::now();
        let mut c = clock(t0);

        let stalled = c.tick_at(t0 + Duration::from_secs(5));
        assert!((stalled.delta_seconds() - 0.25).abs() < 1e-6);

        let same = c.tick_at(t0 + Duration::from_secs(5));
        assert!((same.delta_seconds() - 0.0001).abs() < 1e-7);
    }

    #[test]
    fn time_going_backwards_is_clamped_to_minimum() {
        let t0 = Instant::now() + Duration::from_secs(1);
        let mut c = clock(t0);
        let ft = c.tick_at(t0 - Duration::from_millis(500));
        assert!((ft.dt - 0.0001).abs() < 1e-7);
    }
}
