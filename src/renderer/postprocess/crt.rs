//! CRT pass - samples the offscreen scene capture through the CRT shader.
//!
//! The scene pass renders into this pass's color target; a fullscreen
//! triangle then rewrites the image onto the swapchain with barrel
//! distortion, chromatic aberration, scanlines, and the rest of the CRT
//! knob set applied. The pass is an optional attachment: when disabled at
//! engine construction it simply never exists.

use wgpu::util::DeviceExt;

use crate::error::VitrineError;
use crate::gpu::pipeline_helpers::{
    create_screen_space_pipeline, filtering_sampler, linear_sampler, texture_2d,
    uniform_buffer,
};
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::ShaderComposer;
use crate::gpu::texture::RenderTarget;
use crate::options::PostProcessOptions;

/// Format of the offscreen scene capture (RGBA8 color).
pub const CAPTURE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

/// CRT shader parameters, uploaded every frame.
///
/// Field order matches the WGSL `CrtParams` struct.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CrtParams {
    /// Seconds since engine start.
    pub time: f32,
    /// Barrel distortion amount.
    pub barrel: f32,
    /// Additional curvature term.
    pub curvature: f32,
    /// RGB channel separation distance.
    pub aberration: f32,
    /// Static noise intensity.
    pub noise: f32,
    /// Horizontal tearing displacement.
    pub tearing: f32,
    /// Phosphor glow spread.
    pub glow: f32,
    /// Vertical jitter amplitude.
    pub jitter: f32,
    /// Scanline darkening intensity.
    pub scanline_intensity: f32,
    /// Brightness multiplier.
    pub brightness: f32,
    /// Contrast multiplier.
    pub contrast: f32,
    /// Desaturation toward luma.
    pub desaturation: f32,
    /// Whole-frame flicker amount.
    pub flicker: f32,
    /// Signal-loss band strength.
    pub signal_loss: f32,
    /// Retrace band toggle (0 or 1).
    pub retrace: u32,
    /// Dot-mask toggle (0 or 1).
    pub dot_mask: u32,
}

impl CrtParams {
    /// Build the uniform contents from options and the current time.
    #[must_use]
    pub fn from_options(options: &PostProcessOptions, time: f32) -> Self {
        Self {
            time,
            barrel: options.barrel_distortion,
            curvature: options.curvature,
            aberration: options.chromatic_aberration,
            noise: options.static_noise,
            tearing: options.horizontal_tearing,
            glow: options.glow,
            jitter: options.vertical_jitter,
            scanline_intensity: options.scanline_intensity,
            brightness: options.brightness,
            contrast: options.contrast,
            desaturation: options.desaturation,
            flicker: options.flicker,
            signal_loss: options.signal_loss,
            retrace: u32::from(options.retrace_lines),
            dot_mask: u32::from(options.dot_mask),
        }
    }
}

/// The CRT screen pass and its offscreen capture target.
pub struct CrtPass {
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
    sampler: wgpu::Sampler,
    params_buffer: wgpu::Buffer,

    /// Offscreen color target the scene pass renders into.
    pub capture: RenderTarget,
}

impl CrtPass {
    /// Create the pass, its capture target, and the screen pipeline.
    ///
    /// # Errors
    ///
    /// Returns an error if the CRT shader fails to compose.
    pub fn new(
        context: &RenderContext,
        shader_composer: &mut ShaderComposer,
    ) -> Result<Self, VitrineError> {
        let device = &context.device;

        let capture = RenderTarget::new(
            device,
            "Scene Capture",
            context.config.width,
            context.config.height,
            CAPTURE_FORMAT,
        );
        let sampler = linear_sampler(device, "CRT Sampler");

        let params = CrtParams::from_options(&PostProcessOptions::default(), 0.0);
        let params_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("CRT Params Buffer"),
            contents: bytemuck::cast_slice(&[params]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("CRT Bind Group Layout"),
                entries: &[texture_2d(0), filtering_sampler(1), uniform_buffer(2)],
            });
        let bind_group = Self::create_bind_group(
            device,
            &bind_group_layout,
            &capture.view,
            &sampler,
            &params_buffer,
        );

        let shader = shader_composer.compose(device, "CRT Shader", "screen/crt.wgsl")?;
        let pipeline = create_screen_space_pipeline(
            device,
            "CRT",
            &shader,
            context.format(),
            &[&bind_group_layout],
        );

        Ok(Self {
            pipeline,
            bind_group_layout,
            bind_group,
            sampler,
            params_buffer,
            capture,
        })
    }

    fn create_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        capture_view: &wgpu::TextureView,
        sampler: &wgpu::Sampler,
        params_buffer: &wgpu::Buffer,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("CRT Bind Group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(capture_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: params_buffer.as_entire_binding(),
                },
            ],
        })
    }

    /// The color view the scene pass should render into.
    #[must_use]
    pub fn capture_view(&self) -> &wgpu::TextureView {
        &self.capture.view
    }

    /// Push the current knob values and time to the GPU.
    pub fn update_params(
        &self,
        queue: &wgpu::Queue,
        options: &PostProcessOptions,
        time: f32,
    ) {
        let params = CrtParams::from_options(options, time);
        queue.write_buffer(&self.params_buffer, 0, bytemuck::cast_slice(&[params]));
    }

    /// Draw the fullscreen CRT triangle into `output` (the swapchain).
    pub fn render(&self, encoder: &mut wgpu::CommandEncoder, output: &wgpu::TextureView) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("CRT Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: output,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            ..Default::default()
        });

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.draw(0..3, 0..1);
    }

    /// Recreate the capture target (and its bind group) for a new
    /// viewport size.
    pub fn resize(&mut self, context: &RenderContext) {
        self.capture = RenderTarget::new(
            &context.device,
            "Scene Capture",
            context.config.width,
            context.config.height,
            CAPTURE_FORMAT,
        );
        self.bind_group = Self::create_bind_group(
            &context.device,
            &self.bind_group_layout,
            &self.capture.view,
            &self.sampler,
            &self.params_buffer,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_layout_is_16_byte_aligned() {
        // uniform buffer structs must be sized in 16-byte multiples
        assert_eq!(size_of::<CrtParams>() % 16, 0);
    }

    #[test]
    fn params_mirror_options() {
        let options = PostProcessOptions {
            retrace_lines: false,
            dot_mask: true,
            scanline_intensity: 0.25,
            ..Default::default()
        };

        let params = CrtParams::from_options(&options, 2.5);
        assert_eq!(params.time, 2.5);
        assert_eq!(params.retrace, 0);
        assert_eq!(params.dot_mask, 1);
        assert_eq!(params.scanline_intensity, 0.25);
        assert_eq!(params.barrel, options.barrel_distortion);
    }
}
