//! Native window host.
//!
//! Owns the winit event loop and one [`RoadFlow`] drawing through the wgpu
//! [`Context`]. Keys: `Esc`/`Q` quit, `T` toggles the frame-rate readout,
//! `F` cycles the target framerate.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

use crate::{
    clock::MonotonicClock, context::Context, data_structures::catalog::Catalog, flow::RoadFlow,
    render::Viewport, settings::Settings,
};

pub struct App {
    async_runtime: tokio::runtime::Runtime,
    catalog: Arc<Catalog>,
    settings: Settings,
    flow: Option<RoadFlow<MonotonicClock, Context>>,
    error: Option<anyhow::Error>,
}

impl App {
    fn new(catalog: Arc<Catalog>, settings: Settings) -> anyhow::Result<Self> {
        let async_runtime = tokio::runtime::Builder::new_current_thread().build()?;
        Ok(Self {
            async_runtime,
            catalog,
            settings,
            flow: None,
            error: None,
        })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{:#}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    fn create_flow(
        &self,
        event_loop: &ActiveEventLoop,
    ) -> anyhow::Result<RoadFlow<MonotonicClock, Context>> {
        let viewport = self.settings.viewport;
        let window_attributes = Window::default_attributes()
            .with_title("isoroad")
            .with_inner_size(PhysicalSize::new(viewport.width, viewport.height));
        let window = Arc::new(event_loop.create_window(window_attributes)?);
        let ctx = self.async_runtime.block_on(Context::new(window.clone()))?;

        let mut settings = self.settings.clone();
        let size = window.inner_size();
        if size.width > 0 && size.height > 0 {
            settings.viewport = Viewport::new(size.width, size.height);
        }
        window.request_redraw();
        Ok(RoadFlow::new(
            self.catalog.clone(),
            settings,
            MonotonicClock::new(),
            ctx,
        ))
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.flow.is_some() {
            return;
        }
        match self.create_flow(event_loop) {
            Ok(flow) => self.flow = Some(flow),
            Err(e) => self.fail(event_loop, e.context("App initialization failed")),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(flow) = self.flow.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                flow.backend_mut().resize(size.width, size.height);
                flow.resize(size.width, size.height);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => match logical_key.as_ref() {
                Key::Named(NamedKey::Escape) | Key::Character("q" | "Q") => event_loop.exit(),
                Key::Character("t" | "T") => {
                    let shown = flow.toggle_fps_display();
                    log::info!("frame-rate readout {}", if shown { "on" } else { "off" });
                }
                Key::Character("f" | "F") => {
                    flow.cycle_target_framerate();
                }
                _ => (),
            },
            WindowEvent::RedrawRequested => {
                // invoke main render loop
                flow.backend().window().request_redraw();
                if let Err(e) = flow.tick() {
                    let e = anyhow::Error::new(e).context("Rendering failed");
                    self.fail(event_loop, e);
                }
            }
            _ => (),
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(flow) = self.flow.as_mut() {
            flow.teardown();
        }
    }
}

/// Open a window and run the demo until it is closed.
///
/// The caller sets up logging.
pub fn run(catalog: Arc<Catalog>, settings: Settings) -> anyhow::Result<()> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new(catalog, settings)?;
    event_loop.run_app(&mut app)?;

    // make sure the device is gone before we report back
    if let Some(mut flow) = app.flow.take() {
        flow.teardown();
    }
    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
