//! Easing functions for transition progress.
//!
//! Every curve maps linear progress in [0, 1] to perceived motion progress
//! in [0, 1]. The default is the symmetric cubic ease used by the vertex
//! shader, so host-side interpolation and GPU interpolation agree.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Symmetric cubic: accelerate for the first half, decelerate for the
    /// second half.
    #[default]
    CubicInOut,
}

impl EasingFunction {
    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::QuadraticIn => t * t,
            Self::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Self::CubicInOut => ease_cubic_in_out(t),
        }
    }

    /// Index used by the vertex shader to select the same curve.
    #[must_use]
    pub fn shader_id(self) -> u32 {
        match self {
            Self::Linear => 0,
            Self::QuadraticIn => 1,
            Self::QuadraticOut => 2,
            Self::CubicInOut => 3,
        }
    }

    /// Name used in logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::QuadraticIn => "quadratic_in",
            Self::QuadraticOut => "quadratic_out",
            Self::CubicInOut => "cubic_in_out",
        }
    }
}

/// Symmetric cubic ease-in-out.
///
/// With `u = 2t`: `u³/2` for `u <= 1`, otherwise `((u-2)³ + 2)/2`. The result
/// is capped at 1.
#[inline]
#[must_use]
pub fn ease_cubic_in_out(t: f32) -> f32 {
    let u = t * 2.0;
    let eased = if u <= 1.0 {
        u * u * u / 2.0
    } else {
        let v = u - 2.0;
        (v * v * v + 2.0) / 2.0
    };
    eased.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cubic_in_out_anchor_points() {
        assert_eq!(ease_cubic_in_out(0.0), 0.0);
        assert!((ease_cubic_in_out(0.5) - 0.5).abs() < 1e-6);
        assert!((ease_cubic_in_out(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cubic_in_out_is_monotonic() {
        let mut prev = ease_cubic_in_out(0.0);
        for step in 1..=1000 {
            let t = step as f32 / 1000.0;
            let v = ease_cubic_in_out(t);
            assert!(v >= prev, "decreased at t={t}: {prev} -> {v}");
            prev = v;
        }
    }

    #[test]
    fn test_cubic_in_out_caps_at_one() {
        // Raw function is only clamped from above
        assert_eq!(ease_cubic_in_out(1.5), 1.0);
        assert_eq!(EasingFunction::CubicInOut.evaluate(3.0), 1.0);
    }

    #[test]
    fn test_cubic_in_out_symmetry() {
        for step in 0..=10 {
            let t = step as f32 / 10.0;
            let a = ease_cubic_in_out(t);
            let b = 1.0 - ease_cubic_in_out(1.0 - t);
            assert!((a - b).abs() < 1e-5);
        }
    }

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_input_clamping() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);
        assert_eq!(EasingFunction::CubicInOut.evaluate(-0.5), 0.0);
    }

    #[test]
    fn test_quadratic_curves() {
        assert_eq!(EasingFunction::QuadraticIn.evaluate(0.5), 0.25);
        assert_eq!(EasingFunction::QuadraticOut.evaluate(0.5), 0.75);
    }

    #[test]
    fn test_default_is_cubic_in_out() {
        assert_eq!(EasingFunction::default(), EasingFunction::CubicInOut);
        assert_eq!(EasingFunction::default().shader_id(), 3);
    }
}
