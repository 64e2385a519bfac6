//! Shared utilities: easing curves, linear scales, and frame timing.

pub mod easing;
pub mod frame_timing;
pub mod scale;
