//! Geometry pass: backdrop quad plus the carousel items.
//!
//! Two pipelines share the scene shader: the backdrop draws first with
//! identity matrices and depth testing disabled, then the items draw
//! depth-tested with per-item model matrices supplied through a
//! dynamic-offset uniform buffer, one slot per item, rewritten each
//! frame.

use wgpu::util::DeviceExt;

use crate::camera::core::CameraUniform;
use crate::carousel::item::Item;
use crate::error::VitrineError;
use crate::gpu::pipeline_helpers::{filtering_sampler, linear_sampler, texture_2d, uniform_buffer};
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::ShaderComposer;
use crate::gpu::texture::RenderTarget;
use crate::renderer::mesh::{GpuMesh, Vertex};

/// Depth buffer format shared by both scene pipelines.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Dynamic-offset stride for one model-matrix slot (min uniform buffer
/// offset alignment).
const MODEL_SLOT: wgpu::BufferAddress = 256;

/// A texture + tint pairing bound for one draw.
pub struct Material {
    /// Bind group referencing the texture, shared sampler, and tint.
    pub bind_group: wgpu::BindGroup,
    // Kept alive for the bind group's sake.
    _tint_buffer: wgpu::Buffer,
}

/// Everything the scene pass needs to draw one frame.
pub struct SceneFrame<'a> {
    /// Camera bind group for the item draw.
    pub camera: &'a wgpu::BindGroup,
    /// Mesh set indexed by `Item::mesh`.
    pub meshes: &'a [GpuMesh],
    /// Per-item materials, parallel to `items`.
    pub materials: &'a [Material],
    /// The item ring.
    pub items: &'a [Item],
    /// When set, draw only this item (inspect mode).
    pub only_item: Option<usize>,
    /// Backdrop quad mesh.
    pub backdrop: &'a GpuMesh,
    /// Backdrop material.
    pub backdrop_material: &'a Material,
}

/// Owns the scene pipelines, model-matrix buffer, and depth target.
pub struct ScenePass {
    item_pipeline: wgpu::RenderPipeline,
    backdrop_pipeline: wgpu::RenderPipeline,
    material_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,

    model_buffer: wgpu::Buffer,
    model_bind_group: wgpu::BindGroup,
    model_capacity: usize,

    identity_camera_bind_group: wgpu::BindGroup,
    // Kept alive for the bind group's sake.
    _identity_camera_buffer: wgpu::Buffer,

    /// Depth target, recreated on resize.
    pub depth: RenderTarget,
}

impl ScenePass {
    /// Build both pipelines and the per-item model buffer.
    ///
    /// `output_format` is the color target the scene renders into: the
    /// offscreen capture when post-processing is enabled, the surface
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the scene shader fails to compose.
    pub fn new(
        context: &RenderContext,
        shader_composer: &mut ShaderComposer,
        camera_layout: &wgpu::BindGroupLayout,
        output_format: wgpu::TextureFormat,
        item_capacity: usize,
    ) -> Result<Self, VitrineError> {
        let device = &context.device;

        // slot 0 is the backdrop identity; items start at slot 1
        let model_capacity = item_capacity + 1;
        let model_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Model Matrix Buffer"),
            size: MODEL_SLOT * model_capacity as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let identity = glam::Mat4::IDENTITY.to_cols_array_2d();
        context
            .queue
            .write_buffer(&model_buffer, 0, bytemuck::cast_slice(&[identity]));

        let model_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Model Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: true,
                        min_binding_size: wgpu::BufferSize::new(64),
                    },
                    count: None,
                }],
            });
        let model_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Model Bind Group"),
            layout: &model_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &model_buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(64),
                }),
            }],
        });

        let material_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Material Bind Group Layout"),
                entries: &[texture_2d(0), filtering_sampler(1), uniform_buffer(2)],
            });
        let sampler = linear_sampler(device, "Material Sampler");

        // identity camera for the screen-space backdrop
        let identity_camera_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Identity Camera Buffer"),
                contents: bytemuck::cast_slice(&[CameraUniform::IDENTITY]),
                usage: wgpu::BufferUsages::UNIFORM,
            });
        let identity_camera_bind_group =
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Identity Camera Bind Group"),
                layout: camera_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: identity_camera_buffer.as_entire_binding(),
                }],
            });

        let shader = shader_composer.compose(device, "Scene Shader", "scene.wgsl")?;
        let pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Scene Pipeline Layout"),
                bind_group_layouts: &[camera_layout, &model_layout, &material_layout],
                push_constant_ranges: &[],
            });

        let item_pipeline = Self::create_pipeline(
            device,
            "Item",
            &pipeline_layout,
            &shader,
            output_format,
            true,
        );
        let backdrop_pipeline = Self::create_pipeline(
            device,
            "Backdrop",
            &pipeline_layout,
            &shader,
            output_format,
            false,
        );

        let depth = Self::create_depth(context);

        Ok(Self {
            item_pipeline,
            backdrop_pipeline,
            material_layout,
            sampler,
            model_buffer,
            model_bind_group,
            model_capacity,
            identity_camera_bind_group,
            _identity_camera_buffer: identity_camera_buffer,
            depth,
        })
    }

    fn create_pipeline(
        device: &wgpu::Device,
        label: &str,
        layout: &wgpu::PipelineLayout,
        shader: &wgpu::ShaderModule,
        format: wgpu::TextureFormat,
        depth_tested: bool,
    ) -> wgpu::RenderPipeline {
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(&format!("{label} Pipeline")),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                cull_mode: depth_tested.then_some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: depth_tested,
                depth_compare: if depth_tested {
                    wgpu::CompareFunction::Less
                } else {
                    wgpu::CompareFunction::Always
                },
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
    }

    fn create_depth(context: &RenderContext) -> RenderTarget {
        RenderTarget::new(
            &context.device,
            "Depth Texture",
            context.config.width,
            context.config.height,
            DEPTH_FORMAT,
        )
    }

    /// Create a material binding the given texture view with a tint color.
    #[must_use]
    pub fn create_material(
        &self,
        context: &RenderContext,
        label: &str,
        texture_view: &wgpu::TextureView,
        tint: [f32; 4],
    ) -> Material {
        let tint_buffer =
            context
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(&format!("{label} Tint")),
                    contents: bytemuck::cast_slice(&tint),
                    usage: wgpu::BufferUsages::UNIFORM,
                });
        let bind_group = context.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{label} Material")),
            layout: &self.material_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(texture_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: tint_buffer.as_entire_binding(),
                },
            ],
        });
        Material {
            bind_group,
            _tint_buffer: tint_buffer,
        }
    }

    /// Upload every item's model matrix into its slot.
    pub fn write_models(&self, queue: &wgpu::Queue, items: &[Item]) {
        for (index, item) in items.iter().enumerate() {
            if index + 1 >= self.model_capacity {
                break;
            }
            let matrix = item.model_matrix().to_cols_array_2d();
            queue.write_buffer(
                &self.model_buffer,
                MODEL_SLOT * (index as wgpu::BufferAddress + 1),
                bytemuck::cast_slice(&[matrix]),
            );
        }
    }

    /// Record the backdrop and item draws into an open render pass.
    pub fn draw(&self, rp: &mut wgpu::RenderPass<'_>, frame: &SceneFrame<'_>) {
        // backdrop: identity matrices, depth test off
        rp.set_pipeline(&self.backdrop_pipeline);
        rp.set_bind_group(0, &self.identity_camera_bind_group, &[]);
        rp.set_bind_group(1, &self.model_bind_group, &[0]);
        rp.set_bind_group(2, &frame.backdrop_material.bind_group, &[]);
        rp.set_vertex_buffer(0, frame.backdrop.vertex_buffer.slice(..));
        rp.set_index_buffer(
            frame.backdrop.index_buffer.slice(..),
            wgpu::IndexFormat::Uint16,
        );
        rp.draw_indexed(0..frame.backdrop.index_count, 0, 0..1);

        // items: depth tested, camera view
        rp.set_pipeline(&self.item_pipeline);
        rp.set_bind_group(0, frame.camera, &[]);
        for (index, item) in frame.items.iter().enumerate() {
            if frame.only_item.is_some_and(|only| only != index) {
                continue;
            }
            let Some(mesh) = frame.meshes.get(item.mesh) else {
                continue;
            };
            let Some(material) = frame.materials.get(index) else {
                continue;
            };
            let offset = (MODEL_SLOT * (index as wgpu::BufferAddress + 1)) as u32;
            rp.set_bind_group(1, &self.model_bind_group, &[offset]);
            rp.set_bind_group(2, &material.bind_group, &[]);
            rp.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            rp.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            rp.draw_indexed(0..mesh.index_count, 0, 0..1);
        }
    }

    /// Recreate the depth target for a new viewport size.
    pub fn resize(&mut self, context: &RenderContext) {
        self.depth = Self::create_depth(context);
    }
}
