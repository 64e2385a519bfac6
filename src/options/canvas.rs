use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas size and clear color.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Canvas", inline)]
#[serde(default)]
pub struct CanvasOptions {
    /// Canvas width in pixels.
    #[schemars(title = "Width", range(min = 1.0, max = 8192.0), extend("step" = 1.0))]
    pub width: f32,
    /// Canvas height in pixels.
    #[schemars(title = "Height", range(min = 1.0, max = 8192.0), extend("step" = 1.0))]
    pub height: f32,
    /// Clear color, RGBA in [0, 1].
    #[schemars(title = "Background")]
    pub background: [f32; 4],
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            background: [1.0, 1.0, 1.0, 1.0],
        }
    }
}
