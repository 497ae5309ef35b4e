use std::time::{Duration, Instant};

/// Fixed-interval frame scheduling.
///
/// An adapter waits for input until [`FramePacer::timeout`] elapses, and
/// emits a frame whenever [`FramePacer::is_due`] holds, followed by
/// [`FramePacer::mark`]. The first frame is due immediately.
///
/// # Example
///
/// ```
/// use std::time::{Duration, Instant};
///
/// use dropgrid_runtime::FramePacer;
///
/// let mut pacer = FramePacer::new(Duration::from_millis(16));
/// let now = Instant::now();
/// assert!(pacer.is_due(now));
///
/// pacer.mark(now);
/// assert!(!pacer.is_due(now));
/// assert_eq!(pacer.timeout(now), Duration::from_millis(16));
/// assert!(pacer.is_due(now + Duration::from_millis(16)));
/// ```
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    last_frame: Option<Instant>,
}

impl FramePacer {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_frame: None,
        }
    }

    /// Returns how long to wait from `now` until the next frame is due.
    #[must_use]
    pub fn timeout(&self, now: Instant) -> Duration {
        self.next_frame_at()
            .map_or(Duration::ZERO, |at| at.saturating_duration_since(now))
    }

    /// Returns `true` if a frame should be emitted at `now`.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        self.next_frame_at().is_none_or(|at| now >= at)
    }

    /// Records that a frame was emitted at `now`.
    pub fn mark(&mut self, now: Instant) {
        self.last_frame = Some(now);
    }

    fn next_frame_at(&self) -> Option<Instant> {
        self.last_frame.map(|last| last + self.interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_due_immediately() {
        let pacer = FramePacer::new(Duration::from_millis(100));
        let now = Instant::now();
        assert!(pacer.is_due(now));
        assert_eq!(pacer.timeout(now), Duration::ZERO);
    }

    #[test]
    fn test_timeout_counts_down() {
        let mut pacer = FramePacer::new(Duration::from_millis(100));
        let start = Instant::now();
        pacer.mark(start);

        assert_eq!(pacer.timeout(start + Duration::from_millis(30)), Duration::from_millis(70));
        assert!(!pacer.is_due(start + Duration::from_millis(99)));
        assert!(pacer.is_due(start + Duration::from_millis(100)));
        assert_eq!(pacer.timeout(start + Duration::from_millis(250)), Duration::ZERO);
    }

    #[test]
    fn test_mark_restarts_interval() {
        let mut pacer = FramePacer::new(Duration::from_millis(10));
        let start = Instant::now();
        pacer.mark(start);
        let later = start + Duration::from_millis(25);
        assert!(pacer.is_due(later));
        pacer.mark(later);
        assert!(!pacer.is_due(later + Duration::from_millis(5)));
    }
}
