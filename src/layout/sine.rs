//! Sine wave across the canvas.

use std::f32::consts::TAU;

use rand::{Rng, RngCore};

use super::traits::Layout;
use crate::{points::Point, util::scale::LinearScale};

/// Points march across the width while y follows a sine.
///
/// The amplitude is drawn once per call from
/// `(0.1 + U[0,1)) · height/2`; phase runs linearly from 0 at the first
/// point to `periods · 2π` at the last.
#[derive(Debug, Clone)]
pub struct SineLayout {
    /// Point size in pixels, margin included.
    pub point_width: f32,
    /// Canvas width in pixels.
    pub width: f32,
    /// Canvas height in pixels.
    pub height: f32,
    /// Full periods across the point range.
    pub periods: f32,
}

impl SineLayout {
    /// Three-period wave over a `width × height` canvas.
    #[must_use]
    pub fn new(point_width: f32, width: f32, height: f32) -> Self {
        Self {
            point_width,
            width,
            height,
            periods: 3.0,
        }
    }

    /// Lay out with a fixed amplitude.
    pub fn arrange_with_amplitude(&self, points: &mut [Point], amplitude: f32) {
        let n = points.len();
        let y_offset = self.height / 2.0;
        let phase = LinearScale::over_indices(n, (0.0, self.periods * TAU));
        let span = self.width - self.point_width;

        for (i, point) in points.iter_mut().enumerate() {
            let x = (i as f32 / n as f32) * span;
            let y = amplitude * phase.map(i as f32).sin() + y_offset;
            point.set_position(x, y);
        }
    }
}

impl Layout for SineLayout {
    fn arrange(&self, points: &mut [Point], rng: &mut dyn RngCore) {
        let amplitude = (0.1 + rng.random::<f32>()) * (self.height / 2.0);
        self.arrange_with_amplitude(points, amplitude);
    }

    fn name(&self) -> &'static str {
        "sine"
    }
}
