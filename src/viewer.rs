//! Standalone carousel window backed by winit.
//!
//! ```no_run
//! # use vitrine::Viewer;
//! Viewer::builder()
//!     .with_title("Vitrine")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::{sync::Arc, time::Instant};

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{engine::CarouselEngine, error::VitrineError, options::Options};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            options: None,
            title: "Vitrine".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options,
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that displays the item carousel.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Option<Options>,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window
    /// is closed.
    ///
    /// # Errors
    ///
    /// Returns `VitrineError::Viewer` if the event loop cannot be
    /// created or fails while running.
    pub fn run(self) -> Result<(), VitrineError> {
        let event_loop =
            EventLoop::new().map_err(|e| VitrineError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            options: self.options,
            title: self.title,
            last_fps_log: Instant::now(),
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| VitrineError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<CarouselEngine>,
    options: Option<Options>,
    title: String,
    last_fps_log: Instant,
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 800));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        let options = self.options.take().unwrap_or_default();
        let engine_result = pollster::block_on(CarouselEngine::new(
            window.clone(),
            (inner.width.max(1), inner.height.max(1)),
            options,
        ));

        let engine = match engine_result {
            Ok(e) => e,
            Err(e) => {
                log::error!("Failed to initialize engine: {e}");
                event_loop.exit();
                return;
            }
        };

        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        // Guard: both window and engine must be initialised.
        if self.window.is_none() || self.engine.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                if let Some(engine) = &mut self.engine {
                    engine.resize(size.width, size.height);
                }
            }

            WindowEvent::Focused(false) => {
                // Key releases are lost while unfocused; drop held keys.
                if let Some(engine) = &mut self.engine {
                    engine.clear_keys();
                }
            }

            WindowEvent::RedrawRequested => {
                if let Some(engine) = &mut self.engine {
                    engine.update();
                    match engine.render() {
                        Ok(()) => {}
                        Err(
                            wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost,
                        ) => {
                            if let Some(w) = &self.window {
                                let inner = w.inner_size();
                                engine.resize(inner.width, inner.height);
                            }
                        }
                        Err(e) => {
                            log::error!("render error: {e:?}");
                        }
                    }

                    let now = Instant::now();
                    if now.duration_since(self.last_fps_log).as_secs() >= 5 {
                        log::debug!("fps: {:.1}", engine.fps());
                        self.last_fps_log = now;
                    }
                }
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }
                use winit::keyboard::PhysicalKey;
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };

                let pressed = event.state == ElementState::Pressed;
                let key_str = format!("{code:?}");
                if let Some(engine) = &mut self.engine {
                    engine.handle_key(&key_str, pressed);
                }
            }

            _ => (),
        }
    }
}
