//! Wide line-strip rendering.
//!
//! wgpu only rasterizes hairlines, so every segment of the strip is drawn as
//! its own instance: six vertices forming a screen-aligned quad between two
//! consecutive trajectory points. Colors are interpolated along the segment.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use wgpu::util::DeviceExt;

use super::DEPTH_FORMAT;
use crate::renderer::{clamp_count, LineVertex};

/// Per-frame uniforms for the strip.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub(crate) struct LineUniforms {
    view_proj: [[f32; 4]; 4],
    /// Surface size in physical pixels.
    viewport: [f32; 2],
    /// Line width in physical pixels.
    line_width: f32,
    _padding: f32,
}

impl LineUniforms {
    pub(crate) fn new(view_proj: Mat4, width: u32, height: u32, line_width: f32) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            viewport: [width.max(1) as f32, height.max(1) as f32],
            line_width,
            _padding: 0.0,
        }
    }
}

/// GPU state for the trajectory strip.
pub struct LineStripState {
    /// Every trajectory vertex, uploaded once. Only read through `bind_group`.
    _vertex_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    pipeline: wgpu::RenderPipeline,
    num_vertices: u32,
}

impl LineStripState {
    pub fn new(
        device: &wgpu::Device,
        vertices: &[LineVertex],
        surface_format: wgpu::TextureFormat,
    ) -> Self {
        // Storage buffers may not be empty
        let placeholder = [LineVertex::zeroed()];
        let contents = if vertices.is_empty() { &placeholder[..] } else { vertices };

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Line Strip Vertex Buffer"),
            contents: bytemuck::cast_slice(contents),
            usage: wgpu::BufferUsages::STORAGE,
        });

        let uniforms = LineUniforms::new(Mat4::IDENTITY, 1, 1, 1.0);
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Line Strip Uniform Buffer"),
            contents: bytemuck::bytes_of(&uniforms),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Line Strip Shader"),
            source: wgpu::ShaderSource::Wgsl(LINE_STRIP_SHADER.into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Line Strip Bind Group Layout"),
            entries: &[
                // Uniforms (view_proj, viewport, width)
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                // Trajectory vertices
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Storage { read_only: true },
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Line Strip Bind Group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: vertex_buffer.as_entire_binding(),
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Line Strip Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Line Strip Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::LessEqual,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            _vertex_buffer: vertex_buffer,
            uniform_buffer,
            bind_group,
            pipeline,
            num_vertices: clamp_count(vertices.len()),
        }
    }

    pub(crate) fn write_uniforms(&self, queue: &wgpu::Queue, uniforms: &LineUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Draw the strip through vertices `[0, vertex_count)`.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>, vertex_count: u32) {
        let segments = vertex_count.min(self.num_vertices).saturating_sub(1);
        if segments == 0 {
            return;
        }
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.draw(0..6, 0..segments);
    }
}

/// Vertex/fragment shader for the wide strip.
///
/// Instance `i` spans trajectory vertices `i` and `i + 1`. The quad is offset
/// in clip space perpendicular to the segment's screen direction, scaled by
/// `w` so the width stays constant in pixels.
pub(crate) const LINE_STRIP_SHADER: &str = r#"struct Uniforms {
    view_proj: mat4x4<f32>,
    viewport: vec2<f32>,
    line_width: f32,
    _padding: f32,
};

struct LineVertex {
    position: vec4<f32>,
    color: vec4<f32>,
};

@group(0) @binding(0) var<uniform> uniforms: Uniforms;
@group(0) @binding(1) var<storage, read> vertices: array<LineVertex>;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
};

@vertex
fn vs_main(
    @builtin(vertex_index) vertex_index: u32,
    @builtin(instance_index) instance_index: u32,
) -> VertexOutput {
    let a = vertices[instance_index];
    let b = vertices[instance_index + 1u];

    let clip_a = uniforms.view_proj * vec4<f32>(a.position.xyz, 1.0);
    let clip_b = uniforms.view_proj * vec4<f32>(b.position.xyz, 1.0);

    // Segment direction in pixels
    let screen_a = clip_a.xy / clip_a.w * uniforms.viewport * 0.5;
    let screen_b = clip_b.xy / clip_b.w * uniforms.viewport * 0.5;
    var dir = screen_b - screen_a;
    if length(dir) < 0.0001 {
        dir = vec2<f32>(1.0, 0.0);
    }
    dir = normalize(dir);

    // Half-width offset in NDC
    let normal = vec2<f32>(-dir.y, dir.x);
    let offset = normal * uniforms.line_width / uniforms.viewport;

    var clip: vec4<f32>;
    var color: vec4<f32>;
    var side: f32;
    switch vertex_index {
        case 0u: { clip = clip_a; color = a.color; side = -1.0; }
        case 1u: { clip = clip_a; color = a.color; side = 1.0; }
        case 2u: { clip = clip_b; color = b.color; side = -1.0; }
        case 3u: { clip = clip_a; color = a.color; side = 1.0; }
        case 4u: { clip = clip_b; color = b.color; side = -1.0; }
        default: { clip = clip_b; color = b.color; side = 1.0; }
    }

    var out: VertexOutput;
    out.clip_position = vec4<f32>(clip.xy + offset * side * clip.w, clip.z, clip.w);
    out.color = color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn validate_wgsl(code: &str) -> Result<(), String> {
        let module = naga::front::wgsl::parse_str(code)
            .map_err(|e| format!("WGSL parse error: {:?}", e))?;

        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        );
        validator
            .validate(&module)
            .map_err(|e| format!("WGSL validation error: {:?}", e))?;

        Ok(())
    }

    #[test]
    fn test_line_strip_shader_is_valid() {
        validate_wgsl(LINE_STRIP_SHADER).expect("line strip WGSL should be valid");
    }

    #[test]
    fn test_uniform_layout_matches_shader() {
        // mat4x4 (64) + vec2 (8) + f32 + f32
        assert_eq!(std::mem::size_of::<LineUniforms>(), 80);
    }

    #[test]
    fn test_uniforms_guard_zero_viewport() {
        let uniforms = LineUniforms::new(Mat4::IDENTITY, 0, 0, 2.0);
        assert_eq!(uniforms.viewport, [1.0, 1.0]);
        assert_eq!(uniforms.line_width, 2.0);
    }
}
