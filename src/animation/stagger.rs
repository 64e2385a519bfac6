//! Per-point staggered progress.

use std::time::Duration;

use crate::util::easing::EasingFunction;

/// Timing shared by every point of a transition.
///
/// # Timing
///
/// Each point starts its animation after a delay based on its id:
/// - Point 0: starts at t=0
/// - Point 1: starts at t=delay_per_index
/// - Point N: starts at t=N*delay_per_index
///
/// Each point's individual animation lasts `duration`. The transition is
/// over once `duration + delay_per_index * count` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaggerTiming {
    /// Duration of each point's animation, delays excluded.
    pub duration: Duration,
    /// Delay between consecutive point ids starting.
    pub delay_per_index: Duration,
    /// Easing applied to each point's local progress.
    pub easing: EasingFunction,
}

impl StaggerTiming {
    /// Timing with the given per-point duration, stagger, and easing.
    #[must_use]
    pub fn new(
        duration: Duration,
        delay_per_index: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            duration,
            delay_per_index,
            easing,
        }
    }

    /// Start delay for point `id`, in seconds.
    #[inline]
    #[must_use]
    pub fn delay_secs(&self, id: u32) -> f32 {
        self.delay_per_index.as_secs_f32() * id as f32
    }

    /// Eased progress of point `id` at `elapsed`, in [0, 1].
    ///
    /// A zero duration snaps every point to 1. Before its delay has passed a
    /// point stays at exactly 0.
    #[inline]
    #[must_use]
    pub fn point_t(&self, elapsed: Duration, id: u32) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = elapsed.as_secs_f32();
        let delay = self.delay_secs(id);
        if elapsed < delay {
            return 0.0;
        }
        self.easing
            .evaluate((elapsed - delay) / self.duration.as_secs_f32())
            .clamp(0.0, 1.0)
    }

    /// Time until the last of `count` points has finished.
    #[must_use]
    pub fn max_duration(&self, count: usize) -> Duration {
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        self.duration
            .saturating_add(self.delay_per_index.saturating_mul(count))
    }

    /// Whether a transition over `count` points is over at `elapsed`.
    #[must_use]
    pub fn is_complete(&self, elapsed: Duration, count: usize) -> bool {
        elapsed > self.max_duration(count)
    }
}

impl Default for StaggerTiming {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(2500),
            Duration::from_micros(50),
            EasingFunction::CubicInOut,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing(duration_ms: u64, delay_us: u64) -> StaggerTiming {
        StaggerTiming::new(
            Duration::from_millis(duration_ms),
            Duration::from_micros(delay_us),
            EasingFunction::CubicInOut,
        )
    }

    #[test]
    fn zero_duration_snaps_to_end() {
        let t = timing(0, 1000);
        for id in [0, 1, 500, 9999] {
            assert_eq!(t.point_t(Duration::ZERO, id), 1.0);
        }
    }

    #[test]
    fn before_delay_progress_is_zero() {
        let t = timing(100, 10_000); // 10ms per index
        assert_eq!(t.point_t(Duration::from_millis(29), 3), 0.0);
        assert!(t.point_t(Duration::from_millis(31), 3) > 0.0);
    }

    #[test]
    fn delay_grows_with_id() {
        let t = timing(100, 50);
        let mut prev = t.delay_secs(0);
        for id in 1..1000 {
            let d = t.delay_secs(id);
            assert!(d >= prev);
            prev = d;
        }
        assert!(t.delay_secs(10) > t.delay_secs(9));
    }

    #[test]
    fn first_point_is_half_done_at_half_duration() {
        let t = timing(1000, 100);
        let v = t.point_t(Duration::from_millis(500), 0);
        assert!((v - 0.5).abs() < 1e-5);
        assert_eq!(t.point_t(Duration::from_secs(5), 0), 1.0);
    }

    #[test]
    fn max_duration_includes_worst_case_stagger() {
        let t = timing(2500, 50);
        assert_eq!(t.max_duration(10_000), Duration::from_millis(3000));
        assert_eq!(t.max_duration(0), Duration::from_millis(2500));
    }

    #[test]
    fn completion_requires_strictly_exceeding_max() {
        let t = timing(100, 1000);
        let max = t.max_duration(10);
        assert!(!t.is_complete(max, 10));
        assert!(t.is_complete(max + Duration::from_millis(1), 10));
    }
}
