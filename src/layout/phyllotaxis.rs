//! Sunflower-seed packing.

use std::f32::consts::PI;

use glam::Vec2;
use rand::RngCore;

use super::traits::Layout;
use crate::points::Point;

/// Phyllotaxis spiral around a center point.
///
/// Point `i` takes logical index `j = (i + index_offset) mod N` and lands at
/// `r·√j·(cos jθ, sin jθ)` from the center, where θ is the golden angle and
/// `r` is half the point width. Both coordinates are then shifted by `-r`.
#[derive(Debug, Clone)]
pub struct PhyllotaxisLayout {
    /// Point size in pixels, margin included.
    pub point_width: f32,
    /// Center of the packing.
    pub center: Vec2,
    /// Rotates which point sits at the middle.
    pub index_offset: usize,
}

impl PhyllotaxisLayout {
    /// The golden angle, π(3 − √5).
    pub const THETA: f32 = PI * (3.0 - 2.236_068);

    /// Packing of `point_width` points centered on `center`.
    #[must_use]
    pub fn new(point_width: f32, center: Vec2) -> Self {
        Self {
            point_width,
            center,
            index_offset: 0,
        }
    }

    /// Set the logical index offset.
    #[must_use]
    pub fn with_index_offset(mut self, index_offset: usize) -> Self {
        self.index_offset = index_offset;
        self
    }
}

impl Layout for PhyllotaxisLayout {
    fn arrange(&self, points: &mut [Point], _rng: &mut dyn RngCore) {
        let n = points.len();
        let radius = self.point_width / 2.0;

        for (i, point) in points.iter_mut().enumerate() {
            let j = ((i + self.index_offset) % n) as f32;
            let r = radius * j.sqrt();
            let angle = j * Self::THETA;
            point.set_position(
                self.center.x + r * angle.cos() - radius,
                self.center.y + r * angle.sin() - radius,
            );
        }
    }

    fn name(&self) -> &'static str {
        "phyllotaxis"
    }
}
