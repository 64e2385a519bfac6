//! Startup options with TOML preset support.
//!
//! Everything tunable (canvas, points, timing, playlist, layout parameters)
//! lives here and is fixed once the animation starts. Options serialize
//! to/from TOML.

mod canvas;
mod layout;
mod playlist;
mod points;
mod timing;

use std::path::Path;

pub use canvas::CanvasOptions;
pub use layout::LayoutOptions;
pub use playlist::PlaylistOptions;
pub use points::PointOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use timing::TimingOptions;

use crate::{
    animation::{Stage, StaggerTiming},
    error::{ConfigError, PointmorphError},
    host::Background,
    layout::LayoutGeometry,
    points::MAX_POINTS,
};

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[timing]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Canvas size and clear color.
    pub canvas: CanvasOptions,
    /// Particle count and size.
    pub points: PointOptions,
    /// Transition timing.
    pub timing: TimingOptions,
    /// Layouts and palettes to cycle through.
    pub playlist: PlaylistOptions,
    /// Per-layout parameters.
    pub layout: LayoutOptions,
}

impl Options {
    /// Generate JSON Schema describing the tunable options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PointmorphError::Io`] if the file cannot be read, or
    /// [`PointmorphError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, PointmorphError> {
        let content =
            std::fs::read_to_string(path).map_err(PointmorphError::Io)?;
        toml::from_str(&content)
            .map_err(|e| PointmorphError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`PointmorphError::OptionsParse`] if serialization fails, or
    /// [`PointmorphError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), PointmorphError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PointmorphError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PointmorphError::Io)?;
        }
        std::fs::write(path, content).map_err(PointmorphError::Io)
    }

    /// Check that every configured layout and palette can be built.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found: degenerate canvas or point
    /// size, a NaN or infinite layout parameter, too many points, negative
    /// timing, an empty playlist list, a grid with no columns, or an empty
    /// custom ramp.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.canvas.width, self.canvas.height);
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite())
        {
            return Err(ConfigError::NonPositiveCanvas { width, height });
        }
        if !(self.points.width > 0.0 && self.points.width.is_finite()) {
            return Err(ConfigError::NonPositivePointWidth(self.points.width));
        }
        let layout_params = [
            ("margin", self.points.margin),
            ("sine_periods", self.layout.sine_periods),
            ("spiral_periods", self.layout.spiral_periods),
            ("random_std_dev", self.layout.random_std_dev),
        ];
        if let Some(&(name, value)) =
            layout_params.iter().find(|(_, v)| !v.is_finite())
        {
            return Err(ConfigError::NonFiniteLayoutParameter { name, value });
        }
        let geometry = self.layout_geometry();
        let spaced_width = geometry.spaced_width();
        if !(spaced_width > 0.0 && spaced_width.is_finite()) {
            return Err(ConfigError::NonPositivePointWidth(spaced_width));
        }
        if self.points.count > MAX_POINTS {
            return Err(ConfigError::TooManyPoints(self.points.count));
        }
        let timing = [self.timing.duration_ms, self.timing.stagger_ms];
        if timing.iter().any(|ms| !(*ms >= 0.0 && ms.is_finite())) {
            return Err(ConfigError::NegativeTiming);
        }
        if self.playlist.layouts.is_empty() {
            return Err(ConfigError::EmptyLayoutList);
        }
        if self.playlist.color_scales.is_empty() {
            return Err(ConfigError::EmptyColorScaleList);
        }
        for kind in &self.playlist.layouts {
            let _ = kind.build(&geometry)?;
        }
        for kind in &self.playlist.color_scales {
            let _ = kind.ramp()?;
        }
        let _ = self.playlist.seed_color_scale.ramp()?;
        Ok(())
    }

    /// Canvas geometry and layout parameters.
    #[must_use]
    pub fn layout_geometry(&self) -> LayoutGeometry {
        LayoutGeometry {
            width: self.canvas.width,
            height: self.canvas.height,
            point_width: self.points.width,
            point_margin: self.points.margin,
            grid_width: self.layout.grid_width.unwrap_or(self.canvas.width),
            phyllotaxis_index_offset: self.layout.phyllotaxis_index_offset,
            sine_periods: self.layout.sine_periods,
            spiral_periods: self.layout.spiral_periods,
            random_std_dev: self.layout.random_std_dev,
        }
    }

    /// Stagger timing for the configured point count.
    #[must_use]
    pub fn stagger_timing(&self) -> StaggerTiming {
        StaggerTiming::new(
            self.timing.duration(),
            self.timing.delay_per_index(self.points.count),
            self.timing.easing,
        )
    }

    /// Canvas the driver draws on.
    #[must_use]
    pub fn stage(&self) -> Stage {
        Stage {
            width: self.canvas.width,
            height: self.canvas.height,
            point_width: self.points.width,
            background: Background {
                color: self.canvas.background,
            },
        }
    }
}
