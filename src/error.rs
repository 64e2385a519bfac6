//! Crate-level error types.

use std::fmt;

use crate::gpu::render_context::RenderContextError;

/// Degenerate configuration detected before any layout runs.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The playlist has no layouts.
    EmptyLayoutList,
    /// The playlist has no color scales.
    EmptyColorScaleList,
    /// Canvas width or height is zero, negative, or not finite.
    NonPositiveCanvas {
        /// Configured canvas width.
        width: f32,
        /// Configured canvas height.
        height: f32,
    },
    /// Point width is zero, negative, or not finite.
    NonPositivePointWidth(f32),
    /// The grid is narrower than a single point.
    ZeroGridColumns {
        /// Width available to the grid.
        grid_width: f32,
        /// Width of one grid cell.
        point_width: f32,
    },
    /// More points than the vertex index attribute can address.
    TooManyPoints(usize),
    /// A color ramp was given no stops.
    EmptyColorRamp,
    /// Duration or stagger is negative or not finite.
    NegativeTiming,
    /// A layout parameter is NaN or infinite.
    NonFiniteLayoutParameter {
        /// Option name, as written in the TOML file.
        name: &'static str,
        /// Configured value.
        value: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLayoutList => write!(f, "playlist has no layouts"),
            Self::EmptyColorScaleList => {
                write!(f, "playlist has no color scales")
            }
            Self::NonPositiveCanvas { width, height } => {
                write!(f, "canvas must be positive, got {width}x{height}")
            }
            Self::NonPositivePointWidth(w) => {
                write!(f, "point width must be positive, got {w}")
            }
            Self::ZeroGridColumns {
                grid_width,
                point_width,
            } => write!(
                f,
                "grid width {grid_width} fits no columns of width {point_width}"
            ),
            Self::TooManyPoints(n) => write!(f, "too many points: {n}"),
            Self::EmptyColorRamp => write!(f, "color ramp has no stops"),
            Self::NegativeTiming => {
                write!(f, "duration and stagger must be finite and >= 0")
            }
            Self::NonFiniteLayoutParameter { name, value } => {
                write!(f, "{name} must be finite, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Failures reported by a render backend.
#[derive(Debug)]
pub enum RenderError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// Could not acquire or present the next surface texture.
    Surface(wgpu::SurfaceError),
    /// Failure from a non-wgpu backend.
    Backend(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Surface(e) => write!(f, "surface error: {e}"),
            Self::Backend(msg) => write!(f, "render backend error: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Surface(e) => Some(e),
            Self::Backend(_) => None,
        }
    }
}

impl From<RenderContextError> for RenderError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(e: wgpu::SurfaceError) -> Self {
        Self::Surface(e)
    }
}

/// The host refused a per-frame callback registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleError(pub String);

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame registration failed: {}", self.0)
    }
}

impl std::error::Error for ScheduleError {}

/// Errors produced by the pointmorph crate.
#[derive(Debug)]
pub enum PointmorphError {
    /// Invalid startup configuration.
    Config(ConfigError),
    /// Render backend failure.
    Render(RenderError),
    /// Frame scheduling failure.
    Schedule(ScheduleError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for PointmorphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "configuration error: {e}"),
            Self::Render(e) => write!(f, "{e}"),
            Self::Schedule(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for PointmorphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Render(e) => Some(e),
            Self::Schedule(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) | Self::Viewer(_) => None,
        }
    }
}

impl From<ConfigError> for PointmorphError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<RenderError> for PointmorphError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}

impl From<ScheduleError> for PointmorphError {
    fn from(e: ScheduleError) -> Self {
        Self::Schedule(e)
    }
}

impl From<std::io::Error> for PointmorphError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_messages_name_the_problem() {
        let e = ConfigError::ZeroGridColumns {
            grid_width: 3.0,
            point_width: 4.0,
        };
        assert!(e.to_string().contains("no columns"));
        let wrapped = PointmorphError::from(e);
        assert!(wrapped.to_string().starts_with("configuration error"));
    }

    #[test]
    fn source_chains_to_inner_error() {
        use std::error::Error;
        let e = PointmorphError::from(ScheduleError("closed".into()));
        assert!(e.source().is_some());
        assert!(PointmorphError::Viewer("x".into()).source().is_none());
    }
}
