//! Linear domain → range mapping used by the parametric layouts.

/// Maps a continuous domain onto a continuous range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f32, f32),
    range: (f32, f32),
}

impl LinearScale {
    /// Scale mapping `domain.0 -> range.0` and `domain.1 -> range.1`.
    #[must_use]
    pub fn new(domain: (f32, f32), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    /// Scale over point indices `0..=count-1`.
    #[must_use]
    pub fn over_indices(count: usize, range: (f32, f32)) -> Self {
        let last = count.saturating_sub(1) as f32;
        Self::new((0.0, last), range)
    }

    /// Map a domain value into the range.
    ///
    /// A degenerate domain maps everything to the start of the range.
    #[inline]
    #[must_use]
    pub fn map(&self, value: f32) -> f32 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 {
            return self.range.0;
        }
        let t = (value - self.domain.0) / span;
        self.range.0 + t * (self.range.1 - self.range.0)
    }
}
