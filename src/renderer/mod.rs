//! wgpu rendering for the point cloud.
//!
//! [`PointRenderer`] owns the pipeline and per-frame uniforms;
//! [`WgpuBackend`] adapts it to the [`RenderBackend`](crate::host::RenderBackend)
//! port the animation driver draws through.

mod backend;
mod points;

pub use backend::WgpuBackend;
pub use points::{PointDrawCall, PointRenderer};
