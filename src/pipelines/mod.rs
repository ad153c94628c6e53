//! Render pipelines of the wgpu backend.
//!
//! All pipelines share one vertex layout ([`ColoredVertex`]) and one uniform
//! block, [`SceneUniform`]. They differ in blending and depth handling:
//! - `world`: lit, depth-tested and depth-writing, no blending
//! - `overlay_alpha`: unlit, ignores depth, source-alpha blending
//! - `overlay_opaque`: unlit, ignores depth, blending disabled

use crate::data_structures::vertex::ColoredVertex;

pub mod basic;
pub mod overlay;

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniform {
    pub view_proj: [[f32; 4]; 4],
    /// Rotates normals into view space, where the light is defined.
    pub view: [[f32; 4]; 4],
    pub light_dir: [f32; 4],
    /// ambient, diffuse, specular, lit flag (0 or 1)
    pub light: [f32; 4],
}

pub fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    use std::mem;
    wgpu::VertexBufferLayout {
        array_stride: mem::size_of::<ColoredVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute {
                offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute {
                offset: mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
                shader_location: 2,
                format: wgpu::VertexFormat::Float32x4,
            },
        ],
    }
}

pub fn mk_scene_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
        label: Some("scene_bind_group_layout"),
    })
}

pub(crate) fn scene_shader() -> wgpu::ShaderModuleDescriptor<'static> {
    wgpu::ShaderModuleDescriptor {
        label: Some("Scene Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("scene.wgsl").into()),
    }
}

#[derive(Debug)]
pub struct Pipelines {
    pub world: wgpu::RenderPipeline,
    pub overlay_alpha: wgpu::RenderPipeline,
    pub overlay_opaque: wgpu::RenderPipeline,
}

impl Pipelines {
    pub fn new(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
        scene_bind_group_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        Self {
            world: basic::mk_world_pipeline(device, config, scene_bind_group_layout),
            overlay_alpha: overlay::mk_overlay_pipeline(
                device,
                config,
                scene_bind_group_layout,
                Some(wgpu::BlendState::ALPHA_BLENDING),
            ),
            overlay_opaque: overlay::mk_overlay_pipeline(
                device,
                config,
                scene_bind_group_layout,
                Some(wgpu::BlendState::REPLACE),
            ),
        }
    }
}
