use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

/// Transition timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Timing", inline)]
#[serde(default)]
pub struct TimingOptions {
    /// Per-point animation time in milliseconds. Zero snaps points to their
    /// targets.
    #[schemars(title = "Duration (ms)", range(min = 0.0, max = 20_000.0), extend("step" = 50.0))]
    pub duration_ms: f32,
    /// Start delay of the last point relative to the first, in
    /// milliseconds. Spread evenly across point ids.
    #[schemars(title = "Stagger (ms)", range(min = 0.0, max = 10_000.0), extend("step" = 50.0))]
    pub stagger_ms: f32,
    /// Easing curve applied to each point's progress.
    #[schemars(title = "Easing")]
    pub easing: EasingFunction,
}

impl TimingOptions {
    /// Per-point animation time.
    #[must_use]
    pub fn duration(&self) -> Duration {
        millis(f64::from(self.duration_ms))
    }

    /// Delay between consecutive point ids for `count` points.
    #[must_use]
    pub fn delay_per_index(&self, count: usize) -> Duration {
        if count == 0 {
            return Duration::ZERO;
        }
        millis(f64::from(self.stagger_ms) / count as f64)
    }
}

impl Default for TimingOptions {
    fn default() -> Self {
        Self {
            duration_ms: 2500.0,
            stagger_ms: 500.0,
            easing: EasingFunction::CubicInOut,
        }
    }
}

/// Negative and NaN inputs map to zero; values past `Duration::MAX`
/// saturate.
fn millis(ms: f64) -> Duration {
    if ms.is_nan() || ms <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(ms / 1000.0).unwrap_or(Duration::MAX)
}
