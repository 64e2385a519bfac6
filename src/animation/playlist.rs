//! Cyclic sequence of layouts and color scales.

use crate::{
    color::SharedColorScale, error::ConfigError, layout::SharedLayout,
    options::Options,
};

/// Ordered layouts and color scales with independent wrapping cursors.
///
/// The two lists may have different lengths; each cursor wraps on its own.
/// A single-entry list simply repeats.
#[derive(Clone)]
pub struct Playlist {
    layouts: Vec<SharedLayout>,
    color_scales: Vec<SharedColorScale>,
    layout_cursor: usize,
    color_cursor: usize,
}

impl Playlist {
    /// Playlist starting at the first layout and first color scale.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyLayoutList`] or
    /// [`ConfigError::EmptyColorScaleList`] for an empty list.
    pub fn new(
        layouts: Vec<SharedLayout>,
        color_scales: Vec<SharedColorScale>,
    ) -> Result<Self, ConfigError> {
        if layouts.is_empty() {
            return Err(ConfigError::EmptyLayoutList);
        }
        if color_scales.is_empty() {
            return Err(ConfigError::EmptyColorScaleList);
        }
        Ok(Self {
            layouts,
            color_scales,
            layout_cursor: 0,
            color_cursor: 0,
        })
    }

    /// Build every layout and color scale named in `options`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for empty lists, degenerate layout geometry,
    /// or an empty custom color ramp.
    pub fn from_options(options: &Options) -> Result<Self, ConfigError> {
        let geometry = options.layout_geometry();
        let layouts = options
            .playlist
            .layouts
            .iter()
            .map(|kind| kind.build(&geometry))
            .collect::<Result<Vec<_>, _>>()?;
        let color_scales = options
            .playlist
            .color_scales
            .iter()
            .map(|kind| kind.playlist_scale())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(layouts, color_scales)
    }

    /// The currently selected layout and color scale.
    #[must_use]
    pub fn current(&self) -> (&SharedLayout, &SharedColorScale) {
        (
            &self.layouts[self.layout_cursor],
            &self.color_scales[self.color_cursor],
        )
    }

    /// Step both cursors by one, each modulo its own list length.
    ///
    /// Returns `true` if either cursor wrapped back to 0.
    pub fn advance(&mut self) -> bool {
        self.layout_cursor = (self.layout_cursor + 1) % self.layouts.len();
        self.color_cursor = (self.color_cursor + 1) % self.color_scales.len();
        self.layout_cursor == 0 || self.color_cursor == 0
    }

    /// Index of the current layout.
    #[must_use]
    pub fn layout_cursor(&self) -> usize {
        self.layout_cursor
    }

    /// Index of the current color scale.
    #[must_use]
    pub fn color_cursor(&self) -> usize {
        self.color_cursor
    }

    /// Number of layouts.
    #[must_use]
    pub fn layout_count(&self) -> usize {
        self.layouts.len()
    }

    /// Number of color scales.
    #[must_use]
    pub fn color_scale_count(&self) -> usize {
        self.color_scales.len()
    }
}

impl std::fmt::Debug for Playlist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let layouts: Vec<&str> = self.layouts.iter().map(|l| l.name()).collect();
        let colors: Vec<&str> =
            self.color_scales.iter().map(|c| c.name()).collect();
        f.debug_struct("Playlist")
            .field("layouts", &layouts)
            .field("color_scales", &colors)
            .field("layout_cursor", &self.layout_cursor)
            .field("color_cursor", &self.color_cursor)
            .finish()
    }
}
