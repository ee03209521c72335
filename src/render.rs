use crate::core::{FieldUniforms, PostUniforms, RenderConfig, POST_WGSL, TRAIL_SIZE};
use web_sys as web;

mod field;
mod helpers;
mod post;
mod targets;

use field::{create_field_resources, FieldResources};
use targets::RenderTargets;

/// Which post passes run after the field pass. Fixed for the lifetime of a
/// session; changing it requires a rebuild.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostChain {
    Direct,
    Fluid,
    Grain,
    FluidThenGrain,
}

impl PostChain {
    pub fn from_config(cfg: &RenderConfig) -> Self {
        match (cfg.liquid, cfg.noise_amount > 0.0) {
            (false, false) => PostChain::Direct,
            (true, false) => PostChain::Fluid,
            (false, true) => PostChain::Grain,
            (true, true) => PostChain::FluidThenGrain,
        }
    }
}

pub struct GpuSession<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    field: FieldResources,
    post: post::PostResources,
    chain: PostChain,
    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,

    trail_tex: wgpu::Texture,
    bg_scene: wgpu::BindGroup,
    bg_aux: wgpu::BindGroup,
    bg_trail: wgpu::BindGroup,

    width: u32,
    height: u32,
    sample_count: u32,
}

impl<'a> GpuSession<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        render_cfg: &RenderConfig,
    ) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
        let alpha_mode = if render_cfg.transparent {
            caps.alpha_modes
                .iter()
                .copied()
                .find(|m| {
                    matches!(
                        m,
                        wgpu::CompositeAlphaMode::PreMultiplied
                            | wgpu::CompositeAlphaMode::PostMultiplied
                    )
                })
                .unwrap_or(caps.alpha_modes[0])
        } else {
            caps.alpha_modes[0]
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let sample_count = if render_cfg.antialias { 4 } else { 1 };
        let chain = PostChain::from_config(render_cfg);

        let field = create_field_resources(&device, format, sample_count);
        let targets = RenderTargets::new(&device, width, height, format, sample_count);

        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(POST_WGSL.into()),
        });
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let post = post::create_post_resources(&device, &post_shader, format);

        let (trail_tex, trail_view) = helpers::create_color_texture(
            &device,
            "trail_tex",
            TRAIL_SIZE as u32,
            TRAIL_SIZE as u32,
            wgpu::TextureFormat::Rgba8Unorm,
            wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            1,
        );
        let bg_trail = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg_trail"),
            layout: &post.bgl1,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&trail_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&linear_sampler),
                },
            ],
        });
        let (bg_scene, bg_aux) =
            make_source_bind_groups(&device, &post, &linear_sampler, &targets);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            field,
            post,
            chain,
            targets,
            linear_sampler,
            trail_tex,
            bg_scene,
            bg_aux,
            bg_trail,
            width,
            height,
            sample_count,
        })
    }

    /// Upload a freshly rastered pointer-trail image.
    pub fn upload_trail(&self, pixels: &[u8]) {
        self.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.trail_tex,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(TRAIL_SIZE as u32 * 4),
                rows_per_image: Some(TRAIL_SIZE as u32),
            },
            wgpu::Extent3d {
                width: TRAIL_SIZE as u32,
                height: TRAIL_SIZE as u32,
                depth_or_array_layers: 1,
            },
        );
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);

            self.targets.recreate(&self.device, width, height);
            let (bg_scene, bg_aux) = make_source_bind_groups(
                &self.device,
                &self.post,
                &self.linear_sampler,
                &self.targets,
            );
            self.bg_scene = bg_scene;
            self.bg_aux = bg_aux;
        }
    }

    pub fn render(
        &mut self,
        field_u: &FieldUniforms,
        post_u: &PostUniforms,
        clear: [f64; 4],
    ) -> Result<(), wgpu::SurfaceError> {
        let clear = wgpu::Color {
            r: clear[0],
            g: clear[1],
            b: clear[2],
            a: clear[3],
        };
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        self.queue
            .write_buffer(&self.field.uniform_buffer, 0, bytemuck::bytes_of(field_u));
        self.queue
            .write_buffer(&self.post.uniform_buffer, 0, bytemuck::bytes_of(post_u));

        let field_dest = match self.chain {
            PostChain::Direct => &view,
            _ => &self.targets.scene_view,
        };
        let (attachment, resolve) = match &self.targets.msaa {
            Some((_, msaa_view)) if self.sample_count > 1 => (msaa_view, Some(field_dest)),
            _ => (field_dest, None),
        };
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("field_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: attachment,
                    resolve_target: resolve,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.field.pipeline);
            rpass.set_bind_group(0, &self.field.bind_group, &[]);
            rpass.draw(0..3, 0..1);
        }

        match self.chain {
            PostChain::Direct => {}
            PostChain::Fluid => {
                post::blit(
                    &mut encoder,
                    "distort_pass",
                    &view,
                    clear,
                    &self.post.distort_pipeline,
                    &self.bg_scene,
                    Some(&self.bg_trail),
                );
            }
            PostChain::Grain => {
                post::blit(
                    &mut encoder,
                    "grain_pass",
                    &view,
                    clear,
                    &self.post.grain_pipeline,
                    &self.bg_scene,
                    None,
                );
            }
            PostChain::FluidThenGrain => {
                post::blit(
                    &mut encoder,
                    "distort_pass",
                    &self.targets.aux_view,
                    clear,
                    &self.post.distort_pipeline,
                    &self.bg_scene,
                    Some(&self.bg_trail),
                );
                post::blit(
                    &mut encoder,
                    "grain_pass",
                    &view,
                    clear,
                    &self.post.grain_pipeline,
                    &self.bg_aux,
                    None,
                );
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn make_source_bind_groups(
    device: &wgpu::Device,
    post: &post::PostResources,
    sampler: &wgpu::Sampler,
    targets: &RenderTargets,
) -> (wgpu::BindGroup, wgpu::BindGroup) {
    let make = |label: &str, view: &wgpu::TextureView| {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &post.bgl0,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: post.uniform_buffer.as_entire_binding(),
                },
            ],
        })
    };
    (
        make("bg_scene", &targets.scene_view),
        make("bg_aux", &targets.aux_view),
    )
}
