//! Transition engine: stagger timing, the transition coordinator, the
//! playlist, and the driver that ties them to host frames.

mod context;
mod driver;
mod playlist;
mod stagger;
mod transition;

pub use context::{AnimationContext, AnimationPhase};
pub use driver::{AnimationDriver, FrameOutcome, Stage};
pub use playlist::Playlist;
pub use stagger::StaggerTiming;
pub use transition::{begin_transition, TransitionInfo};
