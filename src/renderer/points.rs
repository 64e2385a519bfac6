use wgpu::util::DeviceExt;

use crate::{
    gpu::{pipeline_helpers, render_context::RenderContext},
    host::{FrameUniforms, PointAttributes, PointVertex},
};

/// Corners of the screen-space quad drawn per point.
const QUAD_VERTICES: u32 = 6;

/// Per-point vertex layout, stepped once per instance.
const POINT_ATTRIBUTES: [wgpu::VertexAttribute; 5] = [
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x2,
        offset: 0,
        shader_location: 0, // position_start
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x2,
        offset: 8,
        shader_location: 1, // position_end
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x3,
        offset: 16,
        shader_location: 2, // color_start
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x3,
        offset: 28,
        shader_location: 3, // color_end
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32,
        offset: 40,
        shader_location: 4, // index
    },
];

/// Vertex buffer for one transition's points.
pub struct PointDrawCall {
    vertices: Option<wgpu::Buffer>,
    count: u32,
}

impl PointDrawCall {
    /// Number of points drawn.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }
}

/// Draws points as instanced quads, interpolating on the GPU.
pub struct PointRenderer {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl PointRenderer {
    /// Build the pipeline for the context's surface format.
    #[must_use]
    pub fn new(context: &RenderContext) -> Self {
        let device = &context.device;
        let shader = device.create_shader_module(wgpu::include_wgsl!(
            "../../assets/shaders/points.wgsl"
        ));

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Point Frame Uniforms"),
            size: size_of::<FrameUniforms>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Point Frame Layout"),
                entries: &[pipeline_helpers::vertex_uniform_buffer(0)],
            });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Point Frame Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: size_of::<PointVertex>()
                as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &POINT_ATTRIBUTES,
        };

        let pipeline = pipeline_helpers::create_instanced_pipeline(
            device,
            "Point",
            &shader,
            context.view_format(),
            &[vertex_layout],
            &[&bind_group_layout],
        );

        Self {
            pipeline,
            uniform_buffer,
            bind_group,
        }
    }

    /// Upload a transition's attributes into a fresh vertex buffer.
    #[must_use]
    pub fn upload(
        &self,
        context: &RenderContext,
        attributes: &PointAttributes,
    ) -> PointDrawCall {
        if attributes.is_empty() {
            return PointDrawCall {
                vertices: None,
                count: 0,
            };
        }
        let vertices = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Point Vertex Buffer"),
                contents: bytemuck::cast_slice(&attributes.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            },
        );
        PointDrawCall {
            vertices: Some(vertices),
            count: attributes.len() as u32,
        }
    }

    /// Write this frame's uniforms.
    pub fn write_uniforms(&self, queue: &wgpu::Queue, uniforms: &FrameUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Record the draw into an open render pass.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>, call: &PointDrawCall) {
        let Some(vertices) = &call.vertices else {
            return;
        };
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, vertices.slice(..));
        pass.draw(0..QUAD_VERTICES, 0..call.count);
    }
}
