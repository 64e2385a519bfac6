//! Layout algorithms map an ordered point set to 2D target positions.
//!
//! Layouts are decoupled from the playlist: the same layout can appear any
//! number of times, and custom layouts only need to implement [`Layout`].

mod grid;
mod phyllotaxis;
mod random;
mod sine;
mod spiral;
mod traits;

use glam::Vec2;
pub use grid::GridLayout;
pub use phyllotaxis::PhyllotaxisLayout;
pub use random::RandomLayout;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use sine::SineLayout;
pub use spiral::SpiralLayout;
pub use traits::{shared, Layout, SharedLayout};

use crate::error::ConfigError;

/// Layout selection as written in options files.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    /// Sunflower-seed packing around the canvas center.
    Phyllotaxis,
    /// Row-major grid from the top-left corner.
    Grid,
    /// Gaussian scatter around the canvas center.
    Random,
    /// Sine wave across the canvas.
    Sine,
    /// Spiral out from the canvas center.
    Spiral,
}

/// Canvas geometry and per-layout parameters fixed at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutGeometry {
    /// Canvas width in pixels.
    pub width: f32,
    /// Canvas height in pixels.
    pub height: f32,
    /// Rendered point size in pixels.
    pub point_width: f32,
    /// Spacing added around each point by the packed layouts.
    pub point_margin: f32,
    /// Width filled by the grid layout.
    pub grid_width: f32,
    /// Logical index offset for phyllotaxis.
    pub phyllotaxis_index_offset: usize,
    /// Sine wave periods.
    pub sine_periods: f32,
    /// Spiral turns.
    pub spiral_periods: f32,
    /// Random scatter standard deviation, as a fraction of the canvas.
    pub random_std_dev: f32,
}

impl LayoutGeometry {
    /// Point size plus margin, used by the packed layouts.
    #[must_use]
    pub fn spaced_width(&self) -> f32 {
        self.point_width + self.point_margin
    }

    /// Canvas center.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

impl LayoutKind {
    /// Build the layout this entry describes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the geometry is degenerate for this
    /// layout (e.g. a grid too narrow for a single column).
    pub fn build(
        self,
        geometry: &LayoutGeometry,
    ) -> Result<SharedLayout, ConfigError> {
        let size = geometry.spaced_width();
        let layout = match self {
            Self::Phyllotaxis => shared(
                PhyllotaxisLayout::new(size, geometry.center())
                    .with_index_offset(geometry.phyllotaxis_index_offset),
            ),
            Self::Grid => shared(GridLayout::new(size, geometry.grid_width)?),
            Self::Random => shared(RandomLayout {
                width: geometry.width,
                height: geometry.height,
                std_dev: geometry.random_std_dev,
            }),
            Self::Sine => shared(SineLayout {
                periods: geometry.sine_periods,
                ..SineLayout::new(size, geometry.width, geometry.height)
            }),
            Self::Spiral => shared(SpiralLayout {
                periods: geometry.spiral_periods,
                ..SpiralLayout::new(size, geometry.width, geometry.height)
            }),
        };
        Ok(layout)
    }
}

#[cfg(test)]
pub(crate) fn test_points(count: usize) -> Vec<crate::points::Point> {
    let ramp = crate::color::ColorRamp::new("gray", vec![[0.5; 3]]).unwrap();
    crate::points::PointStore::initialize(count, 1.0, 10.0, 10.0, &ramp)
        .unwrap()
        .points()
        .to_vec()
}
