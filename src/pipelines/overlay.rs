use crate::{
    data_structures::texture::DepthTexture,
    pipelines::{basic::mk_render_pipeline, scene_shader, vertex_layout},
};

/**
 * Screen-space quads drawn after the world: the transition fade.
 *
 * They share the world's render pass and therefore its depth attachment, but
 * never test against or write to it, so they always end up on top.
 */
pub fn mk_overlay_pipeline(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    scene_bind_group_layout: &wgpu::BindGroupLayout,
    blend: Option<wgpu::BlendState>,
) -> wgpu::RenderPipeline {
    let render_pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Overlay Pipeline Layout"),
        bind_group_layouts: &[scene_bind_group_layout],
        push_constant_ranges: &[],
    });
    mk_render_pipeline(
        device,
        &render_pipeline_layout,
        config.format,
        blend,
        Some(wgpu::DepthStencilState {
            format: DepthTexture::DEPTH_FORMAT,
            depth_write_enabled: false,
            depth_compare: wgpu::CompareFunction::Always,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        &[vertex_layout()],
        scene_shader(),
    )
}
