//! Single-shot reset timer driven by the event loop.

use std::time::{Duration, Instant};

/// A single deadline. Scheduling replaces any pending deadline, so at most
/// one reset is ever outstanding.
#[derive(Debug, Default)]
pub struct ResetTimer {
    deadline: Option<Instant>,
}

impl ResetTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Time left before the deadline, if one is pending.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// Consume the deadline if it has passed.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_secs(3);

    #[test]
    fn fires_once_after_deadline() {
        let start = Instant::now();
        let mut timer = ResetTimer::new();
        timer.schedule(start, DELAY);

        assert!(!timer.fire_if_due(start + Duration::from_millis(2999)));
        assert!(timer.fire_if_due(start + DELAY));
        assert_eq!(timer.remaining(start + DELAY), None);
        assert!(!timer.fire_if_due(start + DELAY * 2));
    }

    #[test]
    fn reschedule_replaces_pending_deadline() {
        let start = Instant::now();
        let mut timer = ResetTimer::new();
        timer.schedule(start, DELAY);
        timer.schedule(start + Duration::from_secs(2), DELAY);

        assert!(!timer.fire_if_due(start + DELAY));
        assert!(timer.fire_if_due(start + Duration::from_secs(5)));
    }

    #[test]
    fn unscheduled_timer_never_fires() {
        let start = Instant::now();
        let mut timer = ResetTimer::new();
        assert!(!timer.fire_if_due(start + DELAY));
        assert_eq!(timer.remaining(start), None);
    }

    #[test]
    fn remaining_saturates_at_zero() {
        let start = Instant::now();
        let mut timer = ResetTimer::new();
        timer.schedule(start, DELAY);
        assert_eq!(timer.remaining(start), Some(DELAY));
        assert_eq!(timer.remaining(start + DELAY * 2), Some(Duration::ZERO));
    }
}
