use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Points", inline)]
#[serde(default)]
/// Particle count and size.
pub struct PointOptions {
    /// Number of points, fixed for the lifetime of the animation.
    #[schemars(title = "Count", range(min = 0, max = 1_000_000))]
    pub count: usize,
    /// Rendered point size in pixels.
    #[schemars(title = "Point Width", range(min = 0.5, max = 32.0), extend("step" = 0.5))]
    pub width: f32,
    /// Extra spacing the packed layouts leave around each point.
    #[schemars(title = "Margin", range(min = 0.0, max = 16.0), extend("step" = 0.5))]
    pub margin: f32,
}

impl Default for PointOptions {
    fn default() -> Self {
        Self {
            count: 10_000,
            width: 4.0,
            margin: 1.0,
        }
    }
}
