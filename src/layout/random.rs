//! Gaussian scatter around the canvas center.

use rand::{Rng, RngCore};

use super::traits::Layout;
use crate::points::Point;

/// Scatters points with independent normal offsets on each axis.
///
/// `x = n()·width + width/2`, `y = n()·height + height/2` with
/// `n ~ Normal(0, std_dev)`. A new arrangement on every call.
#[derive(Debug, Clone)]
pub struct RandomLayout {
    /// Canvas width in pixels.
    pub width: f32,
    /// Canvas height in pixels.
    pub height: f32,
    /// Standard deviation as a fraction of the canvas size.
    pub std_dev: f32,
}

impl RandomLayout {
    /// Scatter over a `width × height` canvas with the usual 0.15 spread.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            std_dev: 0.15,
        }
    }
}

impl Layout for RandomLayout {
    fn arrange(&self, points: &mut [Point], rng: &mut dyn RngCore) {
        for point in points.iter_mut() {
            let x = sample_normal(rng, self.std_dev) * self.width + self.width / 2.0;
            let y =
                sample_normal(rng, self.std_dev) * self.height + self.height / 2.0;
            point.set_position(x, y);
        }
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Zero-mean normal sample (Marsaglia polar method).
pub(crate) fn sample_normal(rng: &mut dyn RngCore, std_dev: f32) -> f32 {
    loop {
        let x = rng.random::<f32>() * 2.0 - 1.0;
        let y = rng.random::<f32>() * 2.0 - 1.0;
        let r = x * x + y * y;
        if r > 0.0 && r < 1.0 {
            return std_dev * y * (-2.0 * r.ln() / r).sqrt();
        }
    }
}
