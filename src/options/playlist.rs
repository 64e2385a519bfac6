use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{color::ColorScaleKind, layout::LayoutKind};

/// Layouts and palettes cycled through, plus the palette seeding the
/// initial colors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Playlist", inline)]
#[serde(default)]
pub struct PlaylistOptions {
    /// Layouts in playback order. Must not be empty.
    #[schemars(title = "Layouts")]
    pub layouts: Vec<LayoutKind>,
    /// Palettes in playback order. Must not be empty.
    #[schemars(title = "Color Scales")]
    pub color_scales: Vec<ColorScaleKind>,
    /// Palette for the colors points start with.
    #[schemars(title = "Seed Color Scale")]
    pub seed_color_scale: ColorScaleKind,
}

impl Default for PlaylistOptions {
    fn default() -> Self {
        Self {
            layouts: vec![
                LayoutKind::Phyllotaxis,
                LayoutKind::Spiral,
                LayoutKind::Random,
            ],
            color_scales: vec![
                ColorScaleKind::Viridis,
                ColorScaleKind::Inferno,
                ColorScaleKind::RdYlGn,
            ],
            seed_color_scale: ColorScaleKind::Viridis,
        }
    }
}
