use super::points::{PointDrawCall, PointRenderer};
use crate::{
    error::RenderError,
    gpu::render_context::RenderContext,
    host::{Background, FrameUniforms, PointAttributes, RenderBackend},
};

/// Render backend that presents to a window surface through wgpu.
///
/// `clear` records the background; the next `draw` clears to it, draws,
/// and presents.
pub struct WgpuBackend {
    context: RenderContext,
    renderer: PointRenderer,
    clear_color: wgpu::Color,
}

impl WgpuBackend {
    /// Backend drawing into `context`'s surface.
    #[must_use]
    pub fn new(context: RenderContext) -> Self {
        let renderer = PointRenderer::new(&context);
        Self {
            context,
            renderer,
            clear_color: wgpu::Color::WHITE,
        }
    }

    /// The GPU context.
    #[must_use]
    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    /// Reconfigure the surface for a new window size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
    }
}

impl RenderBackend for WgpuBackend {
    type DrawCall = PointDrawCall;

    fn compile_draw_call(
        &mut self,
        attributes: &PointAttributes,
    ) -> Result<PointDrawCall, RenderError> {
        let call = self.renderer.upload(&self.context, attributes);
        log::debug!("uploaded {} point vertices", call.count());
        Ok(call)
    }

    fn clear(&mut self, background: Background) -> Result<(), RenderError> {
        let [r, g, b, a] = background.color.map(f64::from);
        self.clear_color = wgpu::Color { r, g, b, a };
        Ok(())
    }

    fn draw(
        &mut self,
        call: &PointDrawCall,
        uniforms: &FrameUniforms,
    ) -> Result<(), RenderError> {
        self.renderer.write_uniforms(&self.context.queue, uniforms);
        let renderer = &self.renderer;
        self.context
            .render_frame(self.clear_color, |pass| renderer.draw(pass, call))?;
        Ok(())
    }
}
