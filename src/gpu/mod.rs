//! GPU resource management: wgpu device/surface initialization and shared
//! pipeline boilerplate.

/// Bind group layout entries and pipeline construction helpers.
pub mod pipeline_helpers;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
