//! Frame clock for delta-time driven updates.

use std::time::Instant;

/// Measures the time between successive [`Clock::tick`] calls.
#[derive(Debug, Clone)]
pub struct Clock {
    previous: Instant,
}

impl Clock {
    /// Start a clock at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            previous: Instant::now(),
        }
    }

    /// Returns the seconds elapsed since the previous tick, or since the
    /// clock was created for the first call.
    pub fn tick(&mut self) -> f64 {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> f64 {
        let delta = now.saturating_duration_since(self.previous).as_secs_f64();
        self.previous = now;
        delta
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_tick_reports_elapsed_seconds() {
        let mut clock = Clock::new();
        let start = clock.previous;
        let dt = clock.tick_at(start + Duration::from_millis(250));
        assert!((dt - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_tick_resets_reference_point() {
        let mut clock = Clock::new();
        let start = clock.previous;
        clock.tick_at(start + Duration::from_secs(1));
        let dt = clock.tick_at(start + Duration::from_millis(1500));
        assert!((dt - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_tick_is_non_negative() {
        let mut clock = Clock::new();
        assert!(clock.tick() >= 0.0);
        assert!(clock.tick() >= 0.0);
    }
}
