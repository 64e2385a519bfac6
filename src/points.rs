//! The point store: N particles with start/end position and color.
//!
//! Outside a transition boundary, `previous`/`color_start` describe the
//! animation at t = 0 and `position`/`color_end` describe it at t = 1.
//! Only the transition coordinator writes to the store.

use std::time::Duration;

use glam::Vec2;

use crate::{
    animation::StaggerTiming,
    color::{ColorScale, Rgb},
    error::ConfigError,
};

/// Largest point count whose ids survive the trip through an `f32`
/// vertex attribute exactly.
pub const MAX_POINTS: usize = 1 << 24;

/// One particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    id: u32,
    position: Vec2,
    previous: Vec2,
    color_start: Rgb,
    color_end: Rgb,
}

impl Point {
    /// Stable identity, `0..N`.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Target position of the transition in progress.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Position frozen at the start of the transition in progress.
    #[must_use]
    pub fn previous(&self) -> Vec2 {
        self.previous
    }

    /// Color at t = 0.
    #[must_use]
    pub fn color_start(&self) -> Rgb {
        self.color_start
    }

    /// Color at t = 1.
    #[must_use]
    pub fn color_end(&self) -> Rgb {
        self.color_end
    }

    /// Overwrite the target position. Layouts write through this.
    #[inline]
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }
}

/// A point blended between its start and end state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolatedPoint {
    /// Point id.
    pub id: u32,
    /// Progress factor used for the blend.
    pub t: f32,
    /// Blended position.
    pub position: Vec2,
    /// Blended color.
    pub color: Rgb,
}

/// Owns every point. Count is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PointStore {
    points: Vec<Point>,
}

impl PointStore {
    /// Create `count` points with sequential ids, all centered on the canvas.
    ///
    /// Seed colors sample `seed` over the id range with a reversed domain
    /// (id 0 gets `seed(1)`); they are written as the end color so the first
    /// transition starts from them.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a non-positive point size or canvas, or
    /// more than [`MAX_POINTS`] points.
    pub fn initialize(
        count: usize,
        point_width: f32,
        width: f32,
        height: f32,
        seed: &dyn ColorScale,
    ) -> Result<Self, ConfigError> {
        if count > MAX_POINTS {
            return Err(ConfigError::TooManyPoints(count));
        }
        if !(point_width > 0.0 && point_width.is_finite()) {
            return Err(ConfigError::NonPositivePointWidth(point_width));
        }
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(ConfigError::NonPositiveCanvas { width, height });
        }

        let center = Vec2::new(width / 2.0, height / 2.0);
        let last = count.saturating_sub(1) as f32;
        let points = (0..count)
            .map(|i| {
                let t = if last > 0.0 { 1.0 - i as f32 / last } else { 1.0 };
                let color = seed.sample(t);
                Point {
                    id: i as u32,
                    position: center,
                    previous: center,
                    color_start: color,
                    color_end: color,
                }
            })
            .collect();

        Ok(Self { points })
    }

    /// All points in id order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the store holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Mutable access, reserved for the transition coordinator.
    pub(crate) fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }

    /// Freeze the current target as the start state and chain the end color
    /// into the start color.
    pub(crate) fn snapshot_start(&mut self) {
        for point in &mut self.points {
            point.previous = point.position;
            point.color_start = point.color_end;
        }
    }

    /// Write a new end color for every point.
    pub(crate) fn assign_end_colors(&mut self, scale: &dyn ColorScale) {
        let n = self.points.len() as f32;
        for point in &mut self.points {
            point.color_end = scale.sample(point.id as f32 / n);
        }
    }

    /// Host-side blend of every point at `elapsed` into the transition.
    ///
    /// Produces exactly what the vertex shader draws, for backends that do
    /// not interpolate on the GPU.
    #[must_use]
    pub fn interpolate(
        &self,
        timing: &StaggerTiming,
        elapsed: Duration,
    ) -> Vec<InterpolatedPoint> {
        self.points
            .iter()
            .map(|p| {
                let t = timing.point_t(elapsed, p.id);
                InterpolatedPoint {
                    id: p.id,
                    t,
                    position: p.previous.lerp(p.position, t),
                    color: lerp_rgb(p.color_start, p.color_end, t),
                }
            })
            .collect()
    }
}

#[inline]
fn lerp_rgb(a: Rgb, b: Rgb, t: f32) -> Rgb {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}
