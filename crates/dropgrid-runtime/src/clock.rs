use std::time::Instant;

/// Millisecond timestamps relative to the clock's creation.
///
/// Backed by [`Instant`], so readings never decrease.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Milliseconds elapsed since the clock was created.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.millis_at(Instant::now())
    }

    /// Milliseconds between the clock's creation and `instant`.
    ///
    /// Instants earlier than the creation read as 0.
    #[must_use]
    pub fn millis_at(&self, instant: Instant) -> u64 {
        let elapsed = instant.saturating_duration_since(self.start);
        u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_millis_at() {
        let clock = MonotonicClock::new();
        assert_eq!(clock.millis_at(clock.start), 0);
        assert_eq!(clock.millis_at(clock.start + Duration::from_millis(1234)), 1234);
    }

    #[test]
    fn test_never_decreases() {
        let clock = MonotonicClock::new();
        let mut last = clock.now_ms();
        for _ in 0..100 {
            let now = clock.now_ms();
            assert!(now >= last);
            last = now;
        }
    }
}
