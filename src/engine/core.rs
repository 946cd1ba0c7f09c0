//! The carousel engine: owns every subsystem and runs the per-frame
//! protocol of state update, uniform upload, scene pass, and the optional
//! CRT pass.

use web_time::Instant;

use crate::camera::controller::CameraController;
use crate::carousel::item::{Appearance, Item};
use crate::carousel::state::Carousel;
use crate::engine::command::CarouselCommand;
use crate::error::VitrineError;
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::ShaderComposer;
use crate::gpu::texture::Texture2d;
use crate::input::keyboard::KeySet;
use crate::options::Options;
use crate::renderer::mesh::{GpuMesh, MeshData};
use crate::renderer::postprocess::crt::{CrtPass, CAPTURE_FORMAT};
use crate::renderer::scene_pass::{Material, SceneFrame, ScenePass};
use crate::util::color::hsl_to_rgb;
use crate::util::frame_timing::FrameTiming;

/// Frame-rate cap for the render loop.
const TARGET_FPS: u32 = 240;

/// Distinct item mesh shapes, cycled across the ring.
fn item_meshes() -> Vec<MeshData> {
    vec![
        MeshData::cuboid(1.6, 1.0, 0.5),
        MeshData::pyramid(1.4, 1.4),
        MeshData::torus(0.7, 0.28, 24, 12),
    ]
}

/// The main engine. Construct with [`CarouselEngine::new`], then drive
/// with [`update`](Self::update) + [`render`](Self::render) once per
/// display refresh, feeding key events through
/// [`handle_key`](Self::handle_key).
pub struct CarouselEngine {
    /// GPU device/queue/surface owner.
    pub context: RenderContext,
    /// Camera state and GPU uniform owner.
    pub camera_controller: CameraController,
    carousel: Carousel,
    scene_pass: ScenePass,
    crt_pass: Option<CrtPass>,
    key_set: KeySet,
    options: Options,
    frame_timing: FrameTiming,

    meshes: Vec<GpuMesh>,
    materials: Vec<Material>,
    backdrop: GpuMesh,
    backdrop_material: Material,
    // Textures stay alive as long as the materials referencing them.
    _textures: Vec<Texture2d>,

    start_time: Instant,
}

impl CarouselEngine {
    /// Create the engine for a window surface.
    ///
    /// When `options.post_process.enabled` is false no offscreen capture
    /// is created and the scene renders straight to the surface; that
    /// decision is fixed for the engine's lifetime.
    ///
    /// # Errors
    ///
    /// Fails fatally on GPU context or shader composition errors; no
    /// partial rendering is attempted.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: Options,
    ) -> Result<Self, VitrineError> {
        let context = RenderContext::new(window, size).await?;
        let mut shader_composer = ShaderComposer::new()?;

        let camera_controller = CameraController::new(&context, &options.camera);

        let post_enabled = options.post_process.enabled;
        let scene_format = if post_enabled {
            CAPTURE_FORMAT
        } else {
            context.format()
        };
        let scene_pass = ScenePass::new(
            &context,
            &mut shader_composer,
            &camera_controller.layout,
            scene_format,
            options.carousel.item_count,
        )?;
        let crt_pass = if post_enabled {
            Some(CrtPass::new(&context, &mut shader_composer)?)
        } else {
            None
        };

        let mesh_data = item_meshes();
        let meshes: Vec<GpuMesh> = mesh_data
            .iter()
            .enumerate()
            .map(|(i, data)| GpuMesh::upload(&context.device, &format!("Item Mesh {i}"), data))
            .collect();

        let (items, materials, textures) =
            Self::build_items(&context, &scene_pass, &options, mesh_data.len());

        let backdrop =
            GpuMesh::upload(&context.device, "Backdrop", &MeshData::quad());
        let backdrop_texture = Texture2d::checkerboard(
            &context.device,
            &context.queue,
            "Backdrop Texture",
            256,
            8,
            hsl_to_rgb(355.0, 0.45, 0.22),
            hsl_to_rgb(355.0, 0.55, 0.12),
        );
        let backdrop_material = scene_pass.create_material(
            &context,
            "Backdrop",
            &backdrop_texture.view,
            [1.0, 1.0, 1.0, 1.0],
        );

        let mut all_textures = textures;
        all_textures.push(backdrop_texture);

        let carousel = Carousel::new(items, &options.carousel);

        log::info!(
            "engine ready: {} items, post-processing {}",
            options.carousel.item_count,
            if post_enabled { "on" } else { "off" },
        );

        Ok(Self {
            context,
            camera_controller,
            carousel,
            scene_pass,
            crt_pass,
            key_set: KeySet::new(),
            options,
            frame_timing: FrameTiming::new(TARGET_FPS),
            meshes,
            materials,
            backdrop,
            backdrop_material,
            _textures: all_textures,
            start_time: Instant::now(),
        })
    }

    /// Place the ring items and build their GPU materials.
    ///
    /// Shapes cycle across the ring; appearance alternates between
    /// checkerboard textures and flat tints from an HSL palette, so both
    /// material variants stay exercised.
    fn build_items(
        context: &RenderContext,
        scene_pass: &ScenePass,
        options: &Options,
        mesh_count: usize,
    ) -> (Vec<Item>, Vec<Material>, Vec<Texture2d>) {
        let count = options.carousel.item_count;
        let white = Texture2d::white(&context.device, &context.queue);

        let mut textures = Vec::new();
        for (i, hue) in [30.0_f32, 160.0, 265.0].iter().enumerate() {
            textures.push(Texture2d::checkerboard(
                &context.device,
                &context.queue,
                &format!("Item Texture {i}"),
                64,
                8,
                hsl_to_rgb(*hue, 0.55, 0.62),
                hsl_to_rgb(*hue, 0.6, 0.35),
            ));
        }

        let mut items = Vec::with_capacity(count);
        let mut materials = Vec::with_capacity(count);
        for i in 0..count {
            let appearance = if i % 2 == 0 {
                Appearance::Textured((i / 2) % textures.len())
            } else {
                let hue = i as f32 / count as f32 * 360.0;
                Appearance::FlatColor(hsl_to_rgb(hue, 0.6, 0.55))
            };
            items.push(Item::on_ring(
                i,
                count,
                options.carousel.radius,
                i % mesh_count,
                appearance,
            ));

            let material = match appearance {
                Appearance::Textured(index) => scene_pass.create_material(
                    context,
                    &format!("Item {i}"),
                    &textures[index].view,
                    [1.0, 1.0, 1.0, 1.0],
                ),
                Appearance::FlatColor([r, g, b]) => scene_pass.create_material(
                    context,
                    &format!("Item {i}"),
                    &white.view,
                    [r, g, b, 1.0],
                ),
            };
            materials.push(material);
        }

        textures.push(white);
        (items, materials, textures)
    }

    /// Execute a gated command. Returns whether it was accepted; rejected
    /// commands leave all state untouched.
    pub fn execute(&mut self, command: CarouselCommand) -> bool {
        match command {
            CarouselCommand::Select { direction } => {
                if self.camera_controller.is_inspecting() {
                    return false;
                }
                self.carousel.select_next(direction)
            }
            CarouselCommand::EnterInspect => {
                if self.camera_controller.is_inspecting() || !self.carousel.is_settled() {
                    return false;
                }
                self.camera_controller.enter_inspect();
                true
            }
            CarouselCommand::ExitInspect => {
                if !self.camera_controller.is_inspecting() || !self.carousel.is_settled() {
                    return false;
                }
                self.camera_controller.exit_inspect();
                true
            }
            CarouselCommand::ToggleInspect => {
                if self.camera_controller.is_inspecting() {
                    self.execute(CarouselCommand::ExitInspect)
                } else {
                    self.execute(CarouselCommand::EnterInspect)
                }
            }
            CarouselCommand::OrbitAdjust { axis, sign } => {
                if !self.camera_controller.is_inspecting() {
                    return false;
                }
                self.camera_controller.orbit_adjust_by(axis, sign);
                true
            }
        }
    }

    /// Feed a raw key event (winit `KeyCode` debug string).
    ///
    /// Held orbit keys mutate the key set immediately; discrete actions
    /// fire on press and go through [`execute`](Self::execute)'s gating.
    pub fn handle_key(&mut self, code: &str, pressed: bool) {
        if let Some(orbit) = self.options.keybindings.orbit_key(code) {
            if pressed {
                self.key_set.press(orbit);
            } else {
                self.key_set.release(orbit);
            }
        }
        if pressed {
            if let Some(action) = self.options.keybindings.action(code) {
                let _ = self.execute(action.into());
            }
        }
    }

    /// Drop all held keys (call on window focus loss).
    pub fn clear_keys(&mut self) {
        self.key_set.clear();
    }

    /// Advance one frame of simulation and upload GPU state.
    ///
    /// The held-key set is sampled exactly once here, so key events
    /// arriving mid-frame only take effect on the next frame. While
    /// inspecting, carousel transitions and item visuals are frozen and
    /// only the inspect orbit moves.
    pub fn update(&mut self) {
        if self.camera_controller.is_inspecting() {
            for key in self.key_set.held() {
                self.camera_controller.orbit_adjust(key);
            }
        } else {
            self.carousel.advance();
            self.carousel.update_item_visuals();
        }

        let focus = self.carousel.selected_item().position;
        self.camera_controller
            .update_gpu(&self.context.queue, self.carousel.current_angle(), focus);
        self.scene_pass
            .write_models(&self.context.queue, self.carousel.items());

        if let Some(crt) = &self.crt_pass {
            crt.update_params(
                &self.context.queue,
                &self.options.post_process,
                self.start_time.elapsed().as_secs_f32(),
            );
        }
    }

    /// Render one frame: scene pass into the capture target (or straight
    /// to the surface), then the CRT pass when enabled.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] when the swapchain needs to be
    /// reconfigured (lost/outdated surface).
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        if !self.frame_timing.should_render() {
            return Ok(());
        }

        let frame = self.context.get_next_frame()?;
        let surface_view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.context.create_encoder();

        {
            let color_view = self
                .crt_pass
                .as_ref()
                .map_or(&surface_view, CrtPass::capture_view);

            let mut rp = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: color_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(
                    wgpu::RenderPassDepthStencilAttachment {
                        view: &self.scene_pass.depth.view,
                        depth_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(1.0),
                            store: wgpu::StoreOp::Store,
                        }),
                        stencil_ops: None,
                    },
                ),
                ..Default::default()
            });

            let inspecting = self.camera_controller.is_inspecting();
            let scene_frame = SceneFrame {
                camera: &self.camera_controller.bind_group,
                meshes: &self.meshes,
                materials: &self.materials,
                items: self.carousel.items(),
                only_item: inspecting.then(|| self.carousel.selected_index()),
                backdrop: &self.backdrop,
                backdrop_material: &self.backdrop_material,
            };
            self.scene_pass.draw(&mut rp, &scene_frame);
        }

        // Optional second pass; skipped without error when the capture
        // target was never created.
        if let Some(crt) = &self.crt_pass {
            crt.render(&mut encoder, &surface_view);
        }

        self.context.submit(encoder);
        frame.present();
        self.frame_timing.end_frame();

        Ok(())
    }

    /// Reconfigure the surface, depth target, capture target, and
    /// projection aspect for a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.context.resize(width, height);
        self.camera_controller.resize(width, height);
        self.scene_pass.resize(&self.context);
        if let Some(crt) = &mut self.crt_pass {
            crt.resize(&self.context);
        }
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace options and re-apply the camera parameters. CRT knobs are
    /// re-read every frame; `post_process.enabled` stays fixed at its
    /// construction-time value.
    pub fn set_options(&mut self, mut new: Options) {
        new.keybindings.rebuild_reverse_maps();
        self.options = new;

        let co = &self.options.camera;
        let camera = &mut self.camera_controller.camera;
        camera.fovy = co.fovy;
        camera.znear = co.znear;
        camera.zfar = co.zfar;
        camera.tilt = co.tilt;
        camera.offset = glam::Vec3::from_array(co.orbit_offset);
        camera.inspect_distance = co.inspect_distance;
        self.camera_controller.set_inspect_step(co.inspect_step);
    }

    /// The carousel state machine (read-only).
    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Whether inspect mode is active.
    #[must_use]
    pub fn is_inspecting(&self) -> bool {
        self.camera_controller.is_inspecting()
    }

    /// Smoothed frames-per-second estimate.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.frame_timing.fps()
    }
}
