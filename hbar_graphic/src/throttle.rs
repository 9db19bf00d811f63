// Copyright 2025 the Hbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leading-edge throttle with a latest-wins trailing call.
//!
//! Time is always passed in (`*_at(now)`), so callers and tests own the clock.

use std::time::{Duration, Instant};

/// Limits how often a value is let through.
///
/// - The first call in a quiet period fires immediately.
/// - Calls inside the interval replace a single pending value; older ones are dropped.
/// - [`Throttle::poll_at`] releases the pending value once the interval has elapsed
///   since the last fire.
#[derive(Debug, Clone)]
pub struct Throttle<T> {
    interval: Duration,
    last_fire: Option<Instant>,
    pending: Option<T>,
}

impl<T> Throttle<T> {
    /// Creates a throttle that fires at most once per `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fire: None,
            pending: None,
        }
    }

    /// The minimum spacing between fires.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether a value is waiting for the interval to elapse.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Offers `value` at time `now`; returns it if it may fire right away.
    pub fn call_at(&mut self, value: T, now: Instant) -> Option<T> {
        if self.ready_at(now) {
            self.pending = None;
            self.last_fire = Some(now);
            Some(value)
        } else {
            self.pending = Some(value);
            None
        }
    }

    /// Releases the pending value if the interval has elapsed.
    pub fn poll_at(&mut self, now: Instant) -> Option<T> {
        if self.pending.is_some() && self.ready_at(now) {
            self.last_fire = Some(now);
            self.pending.take()
        } else {
            None
        }
    }

    /// When the pending value becomes releasable, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        if self.pending.is_none() {
            return None;
        }
        self.last_fire.map(|t| t + self.interval)
    }

    fn ready_at(&self, now: Instant) -> bool {
        self.last_fire
            .is_none_or(|last| now.saturating_duration_since(last) >= self.interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn first_call_fires_immediately() {
        let t0 = Instant::now();
        let mut throttle = Throttle::new(250 * MS);
        assert_eq!(throttle.call_at(800, t0), Some(800));
        assert!(!throttle.has_pending());
        assert_eq!(throttle.poll_at(t0 + 1000 * MS), None);
    }

    #[test]
    fn calls_inside_the_interval_coalesce_to_the_latest() {
        let t0 = Instant::now();
        let mut throttle = Throttle::new(250 * MS);
        assert_eq!(throttle.call_at(800, t0), Some(800));
        assert_eq!(throttle.call_at(700, t0 + 50 * MS), None);
        assert_eq!(throttle.call_at(600, t0 + 100 * MS), None);
        assert_eq!(throttle.deadline(), Some(t0 + 250 * MS));

        assert_eq!(throttle.poll_at(t0 + 200 * MS), None);
        assert_eq!(throttle.poll_at(t0 + 250 * MS), Some(600));
        assert_eq!(throttle.poll_at(t0 + 600 * MS), None);
    }

    #[test]
    fn interval_restarts_from_the_trailing_fire() {
        let t0 = Instant::now();
        let mut throttle = Throttle::new(250 * MS);
        throttle.call_at(1, t0);
        throttle.call_at(2, t0 + 10 * MS);
        assert_eq!(throttle.poll_at(t0 + 300 * MS), Some(2));
        assert_eq!(throttle.call_at(3, t0 + 400 * MS), None);
        assert_eq!(throttle.call_at(4, t0 + 550 * MS), Some(4));
        assert!(!throttle.has_pending());
    }

    proptest::proptest! {
        #[test]
        fn fires_are_spaced_by_the_interval(
            gaps in proptest::collection::vec(0_u32..400, 1..40),
        ) {
            let t0 = Instant::now();
            let mut throttle = Throttle::new(250 * MS);
            let mut fired = Vec::new();
            let mut now = t0;
            for (i, gap) in gaps.iter().enumerate() {
                now += MS * *gap;
                if throttle.poll_at(now).is_some() {
                    fired.push(now);
                }
                if throttle.call_at(i, now).is_some() {
                    fired.push(now);
                }
            }
            proptest::prop_assert!(!fired.is_empty());
            for pair in fired.windows(2) {
                proptest::prop_assert!(pair[1] - pair[0] >= 250 * MS);
            }
        }
    }

    #[test]
    fn zero_interval_never_holds_values() {
        let t0 = Instant::now();
        let mut throttle = Throttle::new(Duration::ZERO);
        assert_eq!(throttle.call_at('a', t0), Some('a'));
        assert_eq!(throttle.call_at('b', t0), Some('b'));
    }
}
