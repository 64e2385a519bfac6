//! Ports to the host environment: the frame clock and the render backend.
//!
//! The engine never assumes a threading model or an event loop. It only
//! needs frames to arrive in increasing time order for the registration it
//! currently holds, and a backend that can compile and run a point draw
//! call.

mod backend;
mod scheduler;

pub use backend::{
    Background, FrameUniforms, PointAttributes, PointVertex, RenderBackend,
};
pub use scheduler::{ExclusiveScheduler, Frame, FrameScheduler, RegistrationId};
