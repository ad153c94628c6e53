//! The wgpu renderer backend.

use std::{iter, sync::Arc};

use anyhow::Context as _;
use cgmath::{InnerSpace, Matrix, Matrix4, SquareMatrix, Vector3, Vector4};
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::{
    backend::{BackendError, RenderBackend},
    data_structures::{texture::DepthTexture, vertex::ColoredVertex},
    pipelines::{Pipelines, SceneUniform, mk_scene_bind_group_layout},
    render::{Blend, DrawBatch, Frame},
};

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

#[derive(Debug)]
struct UniformResources {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl UniformResources {
    fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, label: &str) -> Self {
        let uniform = SceneUniform {
            view_proj: Matrix4::identity().into(),
            view: Matrix4::identity().into(),
            light_dir: [0.0, 0.0, 1.0, 0.0],
            light: [1.0, 0.0, 0.0, 0.0],
        };
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&[uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: Some(label),
        });
        Self { buffer, bind_group }
    }
}

#[derive(Debug)]
pub struct Context {
    pub(crate) window: Arc<Window>,
    depth_texture: DepthTexture,
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pipelines: Pipelines,
    world_uniform: UniformResources,
    overlay_uniform: UniformResources,
    is_surface_configured: bool,
    torn_down: bool,
}

impl Context {
    pub async fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        let size = window.inner_size();

        // The instance is a handle to our GPU
        // BackendBit::PRIMARY => Vulkan + Metal + DX12 + Browser WebGPU
        log::info!("WGPU setup");
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("Cannot create a render surface for the window")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("No graphics adapter can present to the window")?;
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: None,
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                ..Default::default()
            })
            .await
            .context("Cannot open the graphics device")?;

        let surface_caps = surface.get_capabilities(&adapter);
        // The colour tables are display referred, like a fixed-function
        // framebuffer, so prefer a surface that does no sRGB encoding.
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .context("The surface reports no texture formats")?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: surface_caps.present_modes[0],
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        let is_surface_configured = size.width > 0 && size.height > 0;
        if is_surface_configured {
            surface.configure(&device, &config);
        }

        let scene_layout = mk_scene_bind_group_layout(&device);
        let pipelines = Pipelines::new(&device, &config, &scene_layout);
        let world_uniform = UniformResources::new(&device, &scene_layout, "world_uniform");
        let overlay_uniform = UniformResources::new(&device, &scene_layout, "overlay_uniform");
        let depth_texture =
            DepthTexture::new(&device, [config.width, config.height], "depth_texture");

        log::info!(
            "Surface {:?} {}x{} ready",
            config.format,
            config.width,
            config.height
        );
        Ok(Self {
            window,
            depth_texture,
            surface,
            device,
            queue,
            config,
            pipelines,
            world_uniform,
            overlay_uniform,
            is_surface_configured,
            torn_down: false,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.config.width = width;
            self.config.height = height;
            self.is_surface_configured = true;
            self.surface.configure(&self.device, &self.config);
            self.depth_texture =
                DepthTexture::new(&self.device, [width, height], "depth_texture");
        }
    }

    fn write_uniforms(&self, frame: &Frame) {
        let projection = OPENGL_TO_WGPU_MATRIX * frame.projection.matrix();
        let light = &frame.light;
        let direction = light.direction.normalize();
        let world = SceneUniform {
            view_proj: (projection * frame.view).into(),
            view: frame.view.into(),
            light_dir: [direction.x, direction.y, direction.z, 0.0],
            light: [light.ambient, light.diffuse, light.specular, 1.0],
        };
        let overlay = SceneUniform {
            view_proj: projection.into(),
            view: Matrix4::identity().into(),
            light_dir: world.light_dir,
            light: [1.0, 0.0, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.world_uniform.buffer, 0, bytemuck::cast_slice(&[world]));
        self.queue.write_buffer(
            &self.overlay_uniform.buffer,
            0,
            bytemuck::cast_slice(&[overlay]),
        );
    }

    fn vertex_buffer(&self, label: &str, vertices: &[ColoredVertex]) -> Option<wgpu::Buffer> {
        if vertices.is_empty() {
            return None;
        }
        Some(
            self.device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(label),
                    contents: bytemuck::cast_slice(vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                }),
        )
    }
}

/// Place a mesh by `transform`, rotating its normals along.
fn transform_mesh(mesh: &[ColoredVertex], transform: &Matrix4<f32>, out: &mut Vec<ColoredVertex>) {
    let normal_matrix = transform
        .invert()
        .map(|m| m.transpose())
        .unwrap_or(*transform);
    out.extend(mesh.iter().map(|v| {
        let p = transform * Vector4::new(v.position[0], v.position[1], v.position[2], 1.0);
        let n = normal_matrix * Vector3::from(v.normal).extend(0.0);
        let n = n.truncate();
        let normal = if n.magnitude2() > f32::EPSILON {
            n.normalize().into()
        } else {
            v.normal
        };
        ColoredVertex::new([p.x, p.y, p.z], normal, v.colour)
    }));
}

impl RenderBackend for Context {
    fn draw(&mut self, frame: &Frame) -> Result<(), BackendError> {
        if self.torn_down {
            return Err(BackendError::DeviceLost);
        }
        // Rendering requires the surface to be configured
        if !self.is_surface_configured {
            return Ok(());
        }

        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            // Reconfigure the surface if it's lost or outdated
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = self.window.inner_size();
                self.resize(size.width, size.height);
                return Err(BackendError::SurfaceLost);
            }
            Err(wgpu::SurfaceError::Timeout) => return Err(BackendError::SurfaceLost),
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(BackendError::DeviceLost),
            Err(e) => return Err(anyhow::Error::new(e).into()),
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.write_uniforms(frame);

        let mut world = Vec::new();
        let mut fades: Vec<(Blend, &[ColoredVertex])> = Vec::new();
        for batch in &frame.batches {
            match batch {
                DrawBatch::World(vertices) => world.extend_from_slice(vertices),
                DrawBatch::Model { mesh, transform } => transform_mesh(mesh, transform, &mut world),
                DrawBatch::Fade {
                    blend, vertices, ..
                } => fades.push((*blend, vertices.as_slice())),
                // glyph rasterization is left to the host's font renderer
                DrawBatch::Text(text) => log::trace!("text {:?} at {:?}", text.text, text.position),
            }
        }
        let world_buffer = self.vertex_buffer("World Vertex Buffer", &world);
        let fade_buffers: Vec<(Blend, wgpu::Buffer, u32)> = fades
            .into_iter()
            .filter_map(|(blend, vertices)| {
                self.vertex_buffer("Fade Vertex Buffer", vertices)
                    .map(|buffer| (blend, buffer, vertices.len() as u32))
            })
            .collect();

        let [r, g, b, a] = frame.clear_colour;
        let mut encoder: wgpu::CommandEncoder =
            self.device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Render Encoder"),
                });
        {
            let mut render_pass: wgpu::RenderPass<'_> =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Render Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(wgpu::Color {
                                r: r as f64,
                                g: g as f64,
                                b: b as f64,
                                a: a as f64,
                            }),
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                        view: &self.depth_texture.view,
                        depth_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(1.0),
                            store: wgpu::StoreOp::Store,
                        }),
                        stencil_ops: None,
                    }),
                    occlusion_query_set: None,
                    timestamp_writes: None,
                });

            if let Some(buffer) = &world_buffer {
                render_pass.set_pipeline(&self.pipelines.world);
                render_pass.set_bind_group(0, &self.world_uniform.bind_group, &[]);
                render_pass.set_vertex_buffer(0, buffer.slice(..));
                render_pass.draw(0..world.len() as u32, 0..1);
            }

            for (blend, buffer, count) in &fade_buffers {
                let pipeline = match blend {
                    Blend::Opaque => &self.pipelines.overlay_opaque,
                    Blend::Alpha => &self.pipelines.overlay_alpha,
                };
                render_pass.set_pipeline(pipeline);
                render_pass.set_bind_group(0, &self.overlay_uniform.bind_group, &[]);
                render_pass.set_vertex_buffer(0, buffer.slice(..));
                render_pass.draw(0..*count, 0..1);
            }
        }

        self.queue.submit(iter::once(encoder.finish()));
        output.present();
        Ok(())
    }

    fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.device.destroy();
        log::info!("wgpu device released");
    }
}
