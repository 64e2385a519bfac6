//! Standalone window that plays the transition loop.
//!
//! ```no_run
//! # use pointmorph::Viewer;
//! Viewer::builder()
//!     .with_title("pointmorph")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use web_time::Instant;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    animation::{AnimationDriver, FrameOutcome},
    error::{PointmorphError, RenderError},
    gpu::render_context::RenderContext,
    host::ExclusiveScheduler,
    options::Options,
    renderer::WgpuBackend,
    util::frame_timing::FrameTiming,
};

type WindowDriver = AnimationDriver<WgpuBackend, ExclusiveScheduler>;

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
            title: "pointmorph".into(),
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
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window sized to the canvas that loops through the playlist.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`PointmorphError::Config`] for invalid options before any
    /// window opens, [`PointmorphError::Viewer`] if the event loop fails,
    /// or the first render/scheduling error raised while animating.
    pub fn run(self) -> Result<(), PointmorphError> {
        self.options.validate()?;

        let event_loop = EventLoop::new()
            .map_err(|e| PointmorphError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            driver: None,
            options: self.options,
            title: self.title,
            clock: Instant::now(),
            frame_timing: FrameTiming::new(),
            error: None,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| PointmorphError::Viewer(e.to_string()))?;
        app.error.map_or(Ok(()), Err)
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

struct ViewerApp {
    window: Option<Arc<Window>>,
    driver: Option<WindowDriver>,
    options: Options,
    title: String,
    /// Origin of the frame clock handed to the driver.
    clock: Instant,
    frame_timing: FrameTiming,
    error: Option<PointmorphError>,
}

impl ViewerApp {
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: PointmorphError) {
        log::error!("{error}");
        self.error = Some(error);
        event_loop.exit();
    }

    fn create_driver(
        &self,
        window: &Arc<Window>,
    ) -> Result<WindowDriver, PointmorphError> {
        let inner = window.inner_size();
        let context = pollster::block_on(RenderContext::new(
            Arc::clone(window),
            (inner.width, inner.height),
        ))
        .map_err(RenderError::from)?;
        AnimationDriver::new(
            &self.options,
            WgpuBackend::new(context),
            ExclusiveScheduler::new(),
        )
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(driver) = &mut self.driver else {
            return;
        };
        let Some(frame) = driver.scheduler().frame_at(self.clock.elapsed())
        else {
            return;
        };

        match driver.on_frame(frame) {
            Ok(FrameOutcome::Cycled { elapsed }) => {
                log::debug!(
                    "transition done after {elapsed:?} ({:.1} fps)",
                    self.frame_timing.fps()
                );
            }
            Ok(FrameOutcome::Drawn { .. } | FrameOutcome::Ignored) => {}
            Err(e) => {
                self.fail(event_loop, e);
                return;
            }
        }
        self.frame_timing.end_frame();

        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(LogicalSize::new(
                f64::from(self.options.canvas.width),
                f64::from(self.options.canvas.height),
            ));
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.fail(event_loop, PointmorphError::Viewer(e.to_string()));
                return;
            }
        };

        match self.create_driver(&window) {
            Ok(driver) => self.driver = Some(driver),
            Err(e) => {
                self.fail(event_loop, e);
                return;
            }
        }

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                if let Some(driver) = &mut self.driver {
                    driver.stop();
                }
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(driver) = &mut self.driver {
                    driver.backend_mut().resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => (),
        }
    }
}
