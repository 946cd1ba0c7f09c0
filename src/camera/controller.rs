//! Camera controller: owns the GPU uniform resources and applies
//! discrete inspect-mode rotation input.

use glam::{Vec2, Vec3};
use wgpu::util::DeviceExt;

use crate::camera::core::{Camera, CameraMode, CameraUniform};
use crate::gpu::render_context::RenderContext;
use crate::input::OrbitKey;
use crate::options::CameraOptions;

/// Owns the [`Camera`], its uniform buffer, and the bind group shared by
/// every scene draw.
pub struct CameraController {
    /// The camera state.
    pub camera: Camera,
    /// CPU copy of the uniform contents.
    pub uniform: CameraUniform,
    /// GPU uniform buffer.
    pub buffer: wgpu::Buffer,
    /// Bind group layout (group 0 of the scene pipeline).
    pub layout: wgpu::BindGroupLayout,
    /// Bind group referencing [`Self::buffer`].
    pub bind_group: wgpu::BindGroup,

    /// Degrees applied per frame per held orbit key.
    inspect_step: f32,
}

impl CameraController {
    /// Create the controller and its GPU resources from camera options.
    #[must_use]
    pub fn new(context: &RenderContext, options: &CameraOptions) -> Self {
        let camera = Camera {
            mode: CameraMode::Orbit,
            tilt: options.tilt,
            offset: Vec3::from_array(options.orbit_offset),
            inspect_rotation: Vec2::ZERO,
            inspect_distance: options.inspect_distance,
            aspect: context.config.width as f32 / context.config.height as f32,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };

        let uniform = CameraUniform::default();

        let buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );

        let bind_group =
            context.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Camera Bind Group"),
                layout: &layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
            });

        Self {
            camera,
            uniform,
            buffer,
            layout,
            bind_group,
            inspect_step: options.inspect_step,
        }
    }

    /// Whether inspect mode is active.
    #[must_use]
    pub fn is_inspecting(&self) -> bool {
        self.camera.mode == CameraMode::Inspect
    }

    /// Switch to inspect mode, orbiting around the selected item.
    pub fn enter_inspect(&mut self) {
        self.camera.mode = CameraMode::Inspect;
    }

    /// Return to orbit mode. The accumulated inspect rotation resets so
    /// the next inspect session starts head-on.
    pub fn exit_inspect(&mut self) {
        self.camera.mode = CameraMode::Orbit;
        self.camera.inspect_rotation = Vec2::ZERO;
    }

    /// Apply one discrete rotation step for a held orbit key. Only
    /// meaningful in inspect mode; no smoothing or inertia.
    pub fn orbit_adjust(&mut self, key: OrbitKey) {
        let (axis, sign) = key.axis_sign();
        self.orbit_adjust_by(axis, sign);
    }

    /// Apply one rotation step along `axis` (0 = x/tilt, 1 = y/spin) in
    /// the given direction.
    pub fn orbit_adjust_by(&mut self, axis: usize, sign: f32) {
        if axis == 0 {
            self.camera.inspect_rotation.x += sign * self.inspect_step;
        } else {
            self.camera.inspect_rotation.y += sign * self.inspect_step;
        }
    }

    /// Change the per-frame inspect rotation step (degrees).
    pub fn set_inspect_step(&mut self, step: f32) {
        self.inspect_step = step;
    }

    /// Recompute the uniform from the current state and upload it.
    pub fn update_gpu(&mut self, queue: &wgpu::Queue, ring_angle: f32, focus: Vec3) {
        self.uniform.update(&self.camera, ring_angle, focus);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }

    /// Track the viewport aspect ratio after a resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.camera.aspect = width as f32 / height as f32;
        }
    }
}
