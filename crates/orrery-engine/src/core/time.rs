/// Largest frame delta (seconds) the simulation will integrate.
/// Longer gaps (suspended tab, first frame) are dropped, not split.
pub const MAX_FRAME_DT: f64 = 0.2;

/// Accept a frame delta only if it is finite, positive and within
/// `MAX_FRAME_DT`. Returns the delta to integrate.
pub fn accept_delta(dt: f64) -> Option<f64> {
    if dt.is_finite() && dt > 0.0 && dt < MAX_FRAME_DT {
        Some(dt)
    } else {
        None
    }
}

/// Turns platform frame timestamps (milliseconds) into deltas (seconds).
///
/// The first tick measures from zero, so its delta equals the page age and
/// is normally rejected by `accept_delta`.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: f64,
    frames: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a timestamp and return the delta since the previous one.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        let now = now_ms * 0.001;
        let dt = now - self.last;
        self.last = now;
        self.frames += 1;
        dt
    }

    /// Number of ticks seen so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_normal_frame() {
        assert_eq!(accept_delta(0.016), Some(0.016));
    }

    #[test]
    fn rejects_zero_and_negative() {
        assert_eq!(accept_delta(0.0), None);
        assert_eq!(accept_delta(-0.01), None);
    }

    #[test]
    fn rejects_long_gaps() {
        assert_eq!(accept_delta(0.3), None);
        assert_eq!(accept_delta(MAX_FRAME_DT), None);
    }

    #[test]
    fn rejects_non_finite() {
        assert_eq!(accept_delta(f64::NAN), None);
        assert_eq!(accept_delta(f64::INFINITY), None);
    }

    #[test]
    fn clock_converts_ms_to_seconds() {
        let mut clock = FrameClock::new();
        clock.tick(1000.0);
        let dt = clock.tick(1016.0);
        assert!((dt - 0.016).abs() < 1e-9);
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn first_tick_is_rejected_after_load() {
        let mut clock = FrameClock::new();
        let dt = clock.tick(2500.0);
        assert_eq!(accept_delta(dt), None);
    }
}
