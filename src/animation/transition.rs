//! Transition coordinator: the only writer of the point store.

use rand::RngCore;

use crate::{color::ColorScale, layout::Layout, points::PointStore};

/// Summary of the transition that was just set up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionInfo {
    /// Zero-based count of transitions begun so far.
    pub sequence: u64,
    /// Layout producing the end positions.
    pub layout: String,
    /// Color scale producing the end colors.
    pub color_scale: String,
}

/// Begin a transition: freeze the current state as the start state, then
/// compute new end colors and end positions.
///
/// For every point, the current position becomes the previous position and
/// the current end color becomes the start color (so colors chain from one
/// transition into the next). The end color is `colors(id / N)` and the end
/// position comes from `layout`.
///
/// Holding `&mut PointStore` for the whole call means no frame can observe
/// a half-written store.
pub fn begin_transition(
    store: &mut PointStore,
    layout: &dyn Layout,
    colors: &dyn ColorScale,
    rng: &mut dyn RngCore,
) {
    store.snapshot_start();
    store.assign_end_colors(colors);
    layout.arrange(store.points_mut(), rng);
}
