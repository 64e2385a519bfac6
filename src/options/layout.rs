use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
/// Per-layout parameters.
pub struct LayoutOptions {
    /// Logical index shift applied by the phyllotaxis layout.
    #[schemars(skip)]
    pub phyllotaxis_index_offset: usize,
    /// Width filled by the grid layout; the canvas width when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(title = "Grid Width")]
    pub grid_width: Option<f32>,
    /// Sine wave periods across the canvas.
    #[schemars(title = "Sine Periods", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub sine_periods: f32,
    /// Spiral turns from center to rim.
    #[schemars(title = "Spiral Periods", range(min = 1.0, max = 100.0), extend("step" = 1.0))]
    pub spiral_periods: f32,
    /// Random scatter standard deviation as a fraction of the canvas.
    #[schemars(title = "Scatter Spread", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub random_std_dev: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            phyllotaxis_index_offset: 0,
            grid_width: None,
            sine_periods: 3.0,
            spiral_periods: 20.0,
            random_std_dev: 0.15,
        }
    }
}
