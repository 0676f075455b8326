use super::helpers;
use super::scene::DEPTH_FORMAT;

pub(crate) const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

/// Offscreen targets for the render pipeline.
///
/// - `hdr_*` hold the scene color in Rgba16Float for post-processing.
/// - `depth_*` is the scene pass depth buffer, same size as `hdr`.
/// - `bloom_*` are half-res ping-pong buffers for bright-pass and blur.
///
/// The textures are kept alive alongside their views.
pub(crate) struct RenderTargets {
    _hdr_tex: wgpu::Texture,
    pub(crate) hdr_view: wgpu::TextureView,
    _depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
    _bloom_a: wgpu::Texture,
    pub(crate) bloom_a_view: wgpu::TextureView,
    _bloom_b: wgpu::Texture,
    pub(crate) bloom_b_view: wgpu::TextureView,
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let sampled = wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING;
        let (_hdr_tex, hdr_view) =
            helpers::create_target_texture(device, "hdr_tex", width, height, HDR_FORMAT, sampled);
        let (_depth_tex, depth_view) = helpers::create_target_texture(
            device,
            "depth_tex",
            width,
            height,
            DEPTH_FORMAT,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        let (bw, bh) = Self::bloom_size(width, height);
        let (_bloom_a, bloom_a_view) =
            helpers::create_target_texture(device, "bloom_a", bw, bh, HDR_FORMAT, sampled);
        let (_bloom_b, bloom_b_view) =
            helpers::create_target_texture(device, "bloom_b", bw, bh, HDR_FORMAT, sampled);
        Self {
            _hdr_tex,
            hdr_view,
            _depth_tex,
            depth_view,
            _bloom_a,
            bloom_a_view,
            _bloom_b,
            bloom_b_view,
        }
    }

    pub(crate) fn bloom_size(width: u32, height: u32) -> (u32, u32) {
        ((width.max(1) / 2).max(1), (height.max(1) / 2).max(1))
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, width, height);
    }
}
