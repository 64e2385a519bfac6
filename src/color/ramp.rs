//! Piecewise-linear color ramps.

use std::sync::Arc;

use crate::error::ConfigError;

/// Linear RGB triple with components in [0, 1].
pub type Rgb = [f32; 3];

/// Maps a scalar in [0, 1] to an RGB triple.
pub trait ColorScale: Send + Sync {
    /// Color at position `t`. Inputs outside [0, 1] are clamped.
    fn sample(&self, t: f32) -> Rgb;

    /// Optional name for logging.
    fn name(&self) -> &str {
        "unnamed"
    }
}

/// Shared color scale reference held by the playlist.
pub type SharedColorScale = Arc<dyn ColorScale>;

/// A color ramp defined by N evenly-spaced color stops.
/// `t = 0` maps to the first stop, `t = 1` maps to the last.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    name: String,
    stops: Vec<Rgb>,
}

impl ColorRamp {
    /// Ramp over the given stops.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyColorRamp`] when `stops` is empty.
    pub fn new(
        name: impl Into<String>,
        stops: Vec<Rgb>,
    ) -> Result<Self, ConfigError> {
        if stops.is_empty() {
            return Err(ConfigError::EmptyColorRamp);
        }
        Ok(Self {
            name: name.into(),
            stops,
        })
    }

    /// Ramp from packed `0xRRGGBB` stops. `stops` must be non-empty.
    pub(crate) fn from_hex(name: &str, stops: &[u32]) -> Self {
        Self {
            name: name.to_owned(),
            stops: stops.iter().map(|&hex| hex_to_rgb(hex)).collect(),
        }
    }

    /// The ramp's stops.
    #[must_use]
    pub fn stops(&self) -> &[Rgb] {
        &self.stops
    }
}

impl ColorScale for ColorRamp {
    fn sample(&self, t: f32) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let Some(n) = self.stops.len().checked_sub(1) else {
            return [0.0; 3];
        };
        if n == 0 {
            return self.stops[0];
        }
        let scaled = t * n as f32;
        let idx = (scaled as usize).min(n - 1);
        let frac = scaled - idx as f32;

        let a = &self.stops[idx];
        let b = &self.stops[idx + 1];
        [
            a[0] + (b[0] - a[0]) * frac,
            a[1] + (b[1] - a[1]) * frac,
            a[2] + (b[2] - a[2]) * frac,
        ]
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Samples the wrapped scale at `1 - t`.
pub struct Reversed<S>(pub S);

impl<S: ColorScale> ColorScale for Reversed<S> {
    fn sample(&self, t: f32) -> Rgb {
        self.0.sample(1.0 - t)
    }

    fn name(&self) -> &str {
        self.0.name()
    }
}

fn hex_to_rgb(hex: u32) -> Rgb {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_ramp() -> ColorRamp {
        ColorRamp::new("gray", vec![[0.0; 3], [1.0; 3]]).unwrap()
    }

    #[test]
    fn samples_endpoints_and_midpoint() {
        let ramp = gray_ramp();
        assert_eq!(ramp.sample(0.0), [0.0; 3]);
        assert_eq!(ramp.sample(1.0), [1.0; 3]);
        assert!((ramp.sample(0.5)[1] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn clamps_out_of_range_input() {
        let ramp = gray_ramp();
        assert_eq!(ramp.sample(-2.0), [0.0; 3]);
        assert_eq!(ramp.sample(7.0), [1.0; 3]);
        assert_eq!(ramp.sample(f32::NAN), [0.0; 3]);
    }

    #[test]
    fn single_stop_is_constant() {
        let ramp = ColorRamp::new("one", vec![[0.2, 0.4, 0.6]]).unwrap();
        assert_eq!(ramp.sample(0.0), [0.2, 0.4, 0.6]);
        assert_eq!(ramp.sample(0.9), [0.2, 0.4, 0.6]);
    }

    #[test]
    fn empty_ramp_is_rejected() {
        assert_eq!(
            ColorRamp::new("none", Vec::new()),
            Err(ConfigError::EmptyColorRamp)
        );
    }

    #[test]
    fn reversed_flips_direction() {
        let ramp = Reversed(gray_ramp());
        assert_eq!(ramp.sample(0.0), [1.0; 3]);
        assert_eq!(ramp.sample(1.0), [0.0; 3]);
        assert_eq!(ramp.name(), "gray");
    }

    #[test]
    fn hex_stops_decode_to_unit_range() {
        let ramp = ColorRamp::from_hex("rb", &[0xff0000, 0x0000ff]);
        assert_eq!(ramp.stops()[0], [1.0, 0.0, 0.0]);
        assert_eq!(ramp.stops()[1], [0.0, 0.0, 1.0]);
    }
}
