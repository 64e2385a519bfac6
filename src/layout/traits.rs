//! Core trait for layout algorithms.

use std::sync::Arc;

use rand::RngCore;

use crate::points::Point;

/// Computes a target position for every point.
///
/// Implementations only write positions (via [`Point::set_position`]), keep
/// the slice order, and must be total over any slice length including 0
/// and 1 without producing NaN or infinite coordinates. `rng` is the only
/// source of variation allowed; deterministic layouts ignore it.
pub trait Layout: Send + Sync {
    /// Overwrite the position of every point in `points`.
    fn arrange(&self, points: &mut [Point], rng: &mut dyn RngCore);

    /// Optional name for debugging/logging.
    fn name(&self) -> &'static str {
        "unnamed"
    }
}

/// Type alias for shared layout references.
pub type SharedLayout = Arc<dyn Layout>;

/// Create a shared layout from any Layout implementation.
pub fn shared<L: Layout + 'static>(layout: L) -> SharedLayout {
    Arc::new(layout)
}
