//! Color functions: `t ∈ [0, 1] → RGB`.
//!
//! Named palettes are 11-stop samples of the usual sequential and
//! diverging scales, interpolated linearly between stops.

mod ramp;

use std::sync::Arc;

pub use ramp::{ColorRamp, ColorScale, Reversed, Rgb, SharedColorScale};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const VIRIDIS: [u32; 11] = [
    0x44_01_54, 0x48_24_75, 0x41_44_87, 0x35_5f_8d, 0x2a_78_8e, 0x21_91_8c,
    0x22_a8_84, 0x44_bf_70, 0x7a_d1_51, 0xbd_df_26, 0xfd_e7_25,
];

const INFERNO: [u32; 11] = [
    0x00_00_04, 0x16_0b_39, 0x42_0a_68, 0x6a_17_6e, 0x93_26_67, 0xbc_37_54,
    0xdd_51_3a, 0xf3_78_19, 0xfc_a5_0a, 0xf6_d7_46, 0xfc_ff_a4,
];

const RD_YL_GN: [u32; 11] = [
    0xa5_00_26, 0xd7_30_27, 0xf4_6d_43, 0xfd_ae_61, 0xfe_e0_8b, 0xff_ff_bf,
    0xd9_ef_8b, 0xa6_d9_6a, 0x66_bd_63, 0x1a_98_50, 0x00_68_37,
];

/// Palette selection as written in options files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ColorScaleKind {
    /// Perceptually uniform purple → green → yellow.
    Viridis,
    /// Perceptually uniform black → red → pale yellow.
    Inferno,
    /// Diverging red → yellow → green.
    RdYlGn,
    /// Explicit evenly-spaced RGB stops.
    Custom {
        /// Display name.
        name: String,
        /// RGB stops in [0, 1].
        stops: Vec<Rgb>,
    },
}

impl ColorScaleKind {
    /// Build the ramp this entry describes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyColorRamp`] for a custom ramp without
    /// stops.
    pub fn ramp(&self) -> Result<ColorRamp, ConfigError> {
        match self {
            Self::Viridis => Ok(ColorRamp::from_hex("viridis", &VIRIDIS)),
            Self::Inferno => Ok(ColorRamp::from_hex("inferno", &INFERNO)),
            Self::RdYlGn => Ok(ColorRamp::from_hex("rd_yl_gn", &RD_YL_GN)),
            Self::Custom { name, stops } => {
                ColorRamp::new(name.clone(), stops.clone())
            }
        }
    }

    /// Playlist form of the palette: sampled in reverse, so `t = 0` lands on
    /// the bright end.
    ///
    /// # Errors
    ///
    /// Same as [`ramp`](Self::ramp).
    pub fn playlist_scale(&self) -> Result<SharedColorScale, ConfigError> {
        Ok(Arc::new(Reversed(self.ramp()?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_palettes_hit_their_endpoints() {
        let viridis = ColorScaleKind::Viridis.ramp().unwrap();
        let start = viridis.sample(0.0);
        assert!((start[0] - f32::from(0x44_u8) / 255.0).abs() < 1e-6);
        let end = viridis.sample(1.0);
        assert!((end[2] - f32::from(0x25_u8) / 255.0).abs() < 1e-6);
    }

    #[test]
    fn playlist_scale_is_reversed() {
        let forward = ColorScaleKind::Inferno.ramp().unwrap();
        let playlist = ColorScaleKind::Inferno.playlist_scale().unwrap();
        assert_eq!(playlist.sample(0.0), forward.sample(1.0));
        assert_eq!(playlist.sample(0.25), forward.sample(0.75));
    }

    #[test]
    fn custom_without_stops_fails() {
        let kind = ColorScaleKind::Custom {
            name: "empty".into(),
            stops: Vec::new(),
        };
        assert!(kind.ramp().is_err());
    }

    #[test]
    fn all_samples_stay_in_unit_cube() {
        for kind in [
            ColorScaleKind::Viridis,
            ColorScaleKind::Inferno,
            ColorScaleKind::RdYlGn,
        ] {
            let ramp = kind.ramp().unwrap();
            for step in 0..=20 {
                let rgb = ramp.sample(step as f32 / 20.0);
                assert!(rgb.iter().all(|c| (0.0..=1.0).contains(c)));
            }
        }
    }
}
