//! Render backend port and the buffers handed across it.

use crate::{error::RenderError, points::PointStore};

/// Per-point vertex attributes (44 bytes), one instance per point.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointVertex {
    /// Position at t = 0 (pixels).
    pub position_start: [f32; 2],
    /// Position at t = 1 (pixels).
    pub position_end: [f32; 2],
    /// Color at t = 0.
    pub color_start: [f32; 3],
    /// Color at t = 1.
    pub color_end: [f32; 3],
    /// Point id, used for the stagger delay.
    pub index: f32,
}

/// Attribute buffers for one transition.
#[derive(Debug, Clone, PartialEq)]
pub struct PointAttributes {
    /// One vertex per point, in id order.
    pub vertices: Vec<PointVertex>,
}

impl PointAttributes {
    /// Snapshot the store's start and end state.
    #[must_use]
    pub fn from_store(store: &PointStore) -> Self {
        let vertices = store
            .points()
            .iter()
            .map(|p| PointVertex {
                position_start: p.previous().to_array(),
                position_end: p.position().to_array(),
                color_start: p.color_start(),
                color_end: p.color_end(),
                index: p.id() as f32,
            })
            .collect();
        Self { vertices }
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether there are no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Values shared by every point in a frame (32 bytes, uniform layout).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    /// Rendered point size in pixels.
    pub point_width: f32,
    /// Canvas width in pixels.
    pub stage_width: f32,
    /// Canvas height in pixels.
    pub stage_height: f32,
    /// Seconds since the transition's first frame.
    pub elapsed: f32,
    /// Per-point animation duration in seconds.
    pub duration: f32,
    /// Stagger added per point id, in seconds.
    pub delay_per_index: f32,
    /// Easing curve selector (see `EasingFunction::shader_id`).
    pub easing: u32,
    /// Padding to a 16-byte multiple.
    pub _pad: u32,
}

/// Clear color for the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Background {
    /// RGBA in [0, 1].
    pub color: [f32; 4],
}

impl Default for Background {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// Something that can draw colored points from attribute buffers.
pub trait RenderBackend {
    /// Compiled draw call bound to one set of attribute buffers.
    type DrawCall;

    /// Upload attribute buffers and return a draw call for them.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the backend cannot build the draw call.
    fn compile_draw_call(
        &mut self,
        attributes: &PointAttributes,
    ) -> Result<Self::DrawCall, RenderError>;

    /// Clear the canvas before drawing.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] on backend failure.
    fn clear(&mut self, background: Background) -> Result<(), RenderError>;

    /// Draw the points of `call` with this frame's uniforms.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] on backend failure.
    fn draw(
        &mut self,
        call: &Self::DrawCall,
        uniforms: &FrameUniforms,
    ) -> Result<(), RenderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_and_uniform_sizes_match_shader_layout() {
        assert_eq!(size_of::<PointVertex>(), 44);
        assert_eq!(size_of::<FrameUniforms>(), 32);
    }
}
