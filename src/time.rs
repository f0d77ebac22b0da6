//! Fixed-timestep UI clock using an accumulator pattern.
//!
//! `draw_web()` fires at ~60fps with a variable delta. `FrameClock` converts
//! that into a fixed number of discrete ticks per second; mock data loads
//! and other timed behaviour count ticks, which keeps them deterministic
//! and fully testable off-browser.

pub struct FrameClock {
    /// Milliseconds per tick (e.g. 100ms = 10 ticks/sec)
    ms_per_tick: f64,
    /// Accumulated milliseconds not yet consumed as ticks
    accumulator: f64,
    /// Total elapsed ticks since creation
    pub total_ticks: u64,
    /// Timestamp of the last update (ms), None if first frame
    last_timestamp: Option<f64>,
}

impl FrameClock {
    /// `ticks_per_sec`: how many UI ticks per real-time second (e.g. 10).
    pub fn new(ticks_per_sec: u32) -> Self {
        Self {
            ms_per_tick: 1000.0 / f64::from(ticks_per_sec),
            accumulator: 0.0,
            total_ticks: 0,
            last_timestamp: None,
        }
    }

    /// Feed a wall-clock timestamp (from `performance.now()` or similar)
    /// once per frame. Returns the number of discrete ticks to process.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let delta = match self.last_timestamp {
            Some(prev) => {
                let d = now_ms - prev;
                // Clamp so a backgrounded tab doesn't replay minutes at once
                d.clamp(0.0, 500.0)
            }
            None => 0.0, // First frame: no delta
        };
        self.last_timestamp = Some(now_ms);

        self.accumulator += delta;
        let ticks = (self.accumulator / self.ms_per_tick) as u32;
        self.accumulator -= f64::from(ticks) * self.ms_per_tick;
        self.total_ticks += u64::from(ticks);
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_returns_zero_ticks() {
        let mut clock = FrameClock::new(10);
        assert_eq!(clock.advance(0.0), 0);
    }

    #[test]
    fn one_tick_at_100ms() {
        let mut clock = FrameClock::new(10); // 100ms per tick
        clock.advance(0.0);
        assert_eq!(clock.advance(100.0), 1);
        assert_eq!(clock.total_ticks, 1);
    }

    #[test]
    fn multiple_ticks_accumulated() {
        let mut clock = FrameClock::new(10);
        clock.advance(0.0);
        assert_eq!(clock.advance(350.0), 3); // 350ms = 3 ticks + 50ms remainder
        assert_eq!(clock.total_ticks, 3);
    }

    #[test]
    fn remainder_carried_over() {
        let mut clock = FrameClock::new(10);
        clock.advance(0.0);
        clock.advance(150.0); // 1 tick, 50ms remainder
        assert_eq!(clock.total_ticks, 1);
        assert_eq!(clock.advance(200.0), 1); // 50ms delta + 50ms carry = 1 tick
        assert_eq!(clock.total_ticks, 2);
    }

    #[test]
    fn clamp_large_delta() {
        let mut clock = FrameClock::new(10);
        clock.advance(0.0);
        // 10 second gap (tab backgrounded) → clamped to 500ms = 5 ticks
        assert_eq!(clock.advance(10000.0), 5);
    }

    #[test]
    fn sub_tick_frames_accumulate() {
        let mut clock = FrameClock::new(10); // 100ms/tick
        clock.advance(0.0);
        for i in 1..=6 {
            assert_eq!(clock.advance(f64::from(i) * 16.0), 0);
        }
        assert_eq!(clock.advance(112.0), 1);
        assert_eq!(clock.total_ticks, 1);
    }

    #[test]
    fn steady_60fps() {
        let mut clock = FrameClock::new(10);
        clock.advance(0.0);
        let mut total = 0u32;
        // 60 frames at ~16.67ms each = 1 second
        for i in 1..=60 {
            total += clock.advance(f64::from(i) * 16.667);
        }
        assert!((9..=11).contains(&total), "expected ~10 ticks, got {total}");
    }
}
