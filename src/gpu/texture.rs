//! Texture helpers: offscreen render targets and procedurally generated
//! sampled textures.

/// A render-target texture and its default view.
///
/// Used for the offscreen scene capture (color) and the depth buffer.
/// Created with `RENDER_ATTACHMENT | TEXTURE_BINDING` usage so the color
/// target can be sampled by the post-process pass.
pub struct RenderTarget {
    /// The underlying GPU texture.
    pub texture: wgpu::Texture,
    /// A default full-texture view.
    pub view: wgpu::TextureView,
}

impl RenderTarget {
    /// Create a render-target texture with the given dimensions and
    /// format. Zero dimensions are clamped to 1.
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        label: &str,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
    ) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT
                | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }
}

/// A sampled 2D texture with data uploaded at creation.
pub struct Texture2d {
    /// The underlying GPU texture.
    pub texture: wgpu::Texture,
    /// A default full-texture view.
    pub view: wgpu::TextureView,
}

impl Texture2d {
    /// Upload tightly packed RGBA8 pixels as a sampled sRGB texture.
    ///
    /// `pixels` must hold exactly `width * height * 4` bytes.
    #[must_use]
    pub fn from_rgba8(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: &str,
        width: u32,
        height: u32,
        pixels: &[u8],
    ) -> Self {
        debug_assert_eq!(pixels.len(), (width * height * 4) as usize);

        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(width * 4),
                rows_per_image: Some(height),
            },
            size,
        );
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }

    /// A 1x1 white texture, bound by flat-color materials so every draw
    /// goes through the same textured pipeline.
    #[must_use]
    pub fn white(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        Self::from_rgba8(device, queue, "White Texture", 1, 1, &[255; 4])
    }

    /// A procedural two-tone checkerboard.
    #[must_use]
    pub fn checkerboard(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: &str,
        size: u32,
        cells: u32,
        light: [f32; 3],
        dark: [f32; 3],
    ) -> Self {
        let pixels = checker_pixels(size, cells, light, dark);
        Self::from_rgba8(device, queue, label, size, size, &pixels)
    }
}

/// Generate checkerboard RGBA8 pixels: `size x size` texels split into
/// `cells x cells` alternating squares.
#[must_use]
pub fn checker_pixels(size: u32, cells: u32, light: [f32; 3], dark: [f32; 3]) -> Vec<u8> {
    let cell = (size / cells.max(1)).max(1);
    let to_bytes = |rgb: [f32; 3]| {
        [
            (rgb[0].clamp(0.0, 1.0) * 255.0) as u8,
            (rgb[1].clamp(0.0, 1.0) * 255.0) as u8,
            (rgb[2].clamp(0.0, 1.0) * 255.0) as u8,
            255,
        ]
    };
    let light = to_bytes(light);
    let dark = to_bytes(dark);

    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let parity = (x / cell + y / cell) % 2;
            let texel = if parity == 0 { light } else { dark };
            pixels.extend_from_slice(&texel);
        }
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checker_pixel_count_and_alpha() {
        let pixels = checker_pixels(8, 2, [1.0, 1.0, 1.0], [0.0, 0.0, 0.0]);
        assert_eq!(pixels.len(), 8 * 8 * 4);
        assert!(pixels.chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn checker_alternates_between_cells() {
        let pixels = checker_pixels(4, 2, [1.0, 1.0, 1.0], [0.0, 0.0, 0.0]);
        let red_at = |x: usize, y: usize| pixels[(y * 4 + x) * 4];
        assert_eq!(red_at(0, 0), 255);
        assert_eq!(red_at(2, 0), 0);
        assert_eq!(red_at(2, 2), 255);
        assert_eq!(red_at(0, 2), 0);
    }
}
