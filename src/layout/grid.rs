//! Row-major grid.

use rand::RngCore;

use super::traits::Layout;
use crate::{error::ConfigError, points::Point};

/// Fills rows left to right, top to bottom.
///
/// A point count that is not a multiple of the column count simply leaves a
/// shorter final row.
#[derive(Debug, Clone)]
pub struct GridLayout {
    point_width: f32,
    columns: usize,
}

impl GridLayout {
    /// Grid of square `point_width` cells inside `grid_width` pixels.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroGridColumns`] when not even one cell fits,
    /// or [`ConfigError::NonPositivePointWidth`] for a degenerate cell.
    pub fn new(point_width: f32, grid_width: f32) -> Result<Self, ConfigError> {
        if !(point_width > 0.0 && point_width.is_finite()) {
            return Err(ConfigError::NonPositivePointWidth(point_width));
        }
        let columns = (grid_width / point_width).floor();
        if !(columns >= 1.0 && columns.is_finite()) {
            return Err(ConfigError::ZeroGridColumns {
                grid_width,
                point_width,
            });
        }
        Ok(Self {
            point_width,
            columns: columns as usize,
        })
    }

    /// Points per row.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }
}

impl Layout for GridLayout {
    fn arrange(&self, points: &mut [Point], _rng: &mut dyn RngCore) {
        let point_height = self.point_width;
        for (i, point) in points.iter_mut().enumerate() {
            let column = i % self.columns;
            let row = i / self.columns;
            point.set_position(
                self.point_width * column as f32,
                point_height * row as f32,
            );
        }
    }

    fn name(&self) -> &'static str {
        "grid"
    }
}
