use super::helpers;
use wgpu;

/// Offscreen color targets for the render pipeline.
///
/// `scene_*` receives the field pass when any post pass runs afterwards;
/// `aux_*` is the intermediate target when both post passes are active. When
/// multisampling is on, `msaa_*` is the 4x attachment the field pass resolves
/// out of. All targets share the surface format.
pub(crate) struct RenderTargets {
    pub(crate) scene_tex: wgpu::Texture,
    pub(crate) scene_view: wgpu::TextureView,
    pub(crate) aux_tex: wgpu::Texture,
    pub(crate) aux_view: wgpu::TextureView,
    pub(crate) msaa: Option<(wgpu::Texture, wgpu::TextureView)>,
    format: wgpu::TextureFormat,
    sample_count: u32,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        let (scene_tex, scene_view) = helpers::create_color_texture(
            device,
            "scene_tex",
            width,
            height,
            format,
            wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            1,
        );
        let (aux_tex, aux_view) = helpers::create_color_texture(
            device,
            "aux_tex",
            width,
            height,
            format,
            wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            1,
        );
        let msaa = (sample_count > 1).then(|| {
            helpers::create_color_texture(
                device,
                "msaa_tex",
                width,
                height,
                format,
                wgpu::TextureUsages::RENDER_ATTACHMENT,
                sample_count,
            )
        });
        Self {
            scene_tex,
            scene_view,
            aux_tex,
            aux_view,
            msaa,
            format,
            sample_count,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, width, height, self.format, self.sample_count);
    }
}
