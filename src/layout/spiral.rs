//! Archimedean spiral out from the canvas center.

use std::f32::consts::TAU;

use rand::RngCore;

use super::traits::Layout;
use crate::{points::Point, util::scale::LinearScale};

/// Radius and angle both grow linearly with the point index.
#[derive(Debug, Clone)]
pub struct SpiralLayout {
    /// Point size in pixels, margin included.
    pub point_width: f32,
    /// Canvas width in pixels.
    pub width: f32,
    /// Canvas height in pixels.
    pub height: f32,
    /// Full turns from the first point to the last.
    pub periods: f32,
}

impl SpiralLayout {
    /// Twenty-turn spiral over a `width × height` canvas.
    #[must_use]
    pub fn new(point_width: f32, width: f32, height: f32) -> Self {
        Self {
            point_width,
            width,
            height,
            periods: 20.0,
        }
    }
}

impl Layout for SpiralLayout {
    fn arrange(&self, points: &mut [Point], _rng: &mut dyn RngCore) {
        let n = points.len();
        let max_radius =
            (self.width / 2.0).min(self.height / 2.0) - self.point_width;
        let r_scale = LinearScale::over_indices(n, (0.0, max_radius));
        let theta_scale = LinearScale::over_indices(n, (0.0, self.periods * TAU));
        let (cx, cy) = (self.width / 2.0, self.height / 2.0);

        for (i, point) in points.iter_mut().enumerate() {
            let r = r_scale.map(i as f32);
            let theta = theta_scale.map(i as f32);
            point.set_position(r * theta.cos() + cx, r * theta.sin() + cy);
        }
    }

    fn name(&self) -> &'static str {
        "spiral"
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::layout::test_points;

    #[test]
    fn first_point_lands_on_center() {
        let layout = SpiralLayout::new(5.0, 800.0, 600.0);
        let mut points = test_points(1000);
        layout.arrange(&mut points, &mut StdRng::seed_from_u64(0));
        assert_eq!(points[0].position(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn last_point_reaches_max_radius() {
        let layout = SpiralLayout::new(5.0, 800.0, 600.0);
        let mut points = test_points(101);
        layout.arrange(&mut points, &mut StdRng::seed_from_u64(0));
        let r = (points[100].position() - Vec2::new(400.0, 300.0)).length();
        assert!((r - 295.0).abs() < 1e-2);
    }
}
