use std::time::Duration;

use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{AppControl, FrameCtx, FrameLoop};
use crate::input::platform::winit::{translate_window_event, DEFAULT_LINE_HEIGHT};
use crate::input::EventSource;
use crate::time::{FrameClock, FrameTime};

use super::WindowSurface;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Logical pixels per wheel line for line-based wheel deltas.
    pub wheel_line_height: f32,
    pub dt_min: Duration,
    pub dt_max: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "easel".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            wheel_line_height: DEFAULT_LINE_HEIGHT,
            dt_min: FrameClock::DEFAULT_DT_MIN,
            dt_max: FrameClock::DEFAULT_DT_MAX,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens a window and drives `FrameLoop::frame` once per redraw until exit.
    ///
    /// `build` runs once the window exists and receives the window surface and
    /// the pointer event source so the application can create its cameras and
    /// trackers.
    pub fn run<A, F>(config: RuntimeConfig, build: F) -> Result<()>
    where
        A: FrameLoop + 'static,
        F: FnOnce(&WindowSurface, &EventSource) -> A,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = RunState::new(config, build);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

struct Running<A> {
    app: A,
    surface: WindowSurface,
    events: EventSource,
    clock: FrameClock,
}

struct RunState<A, F> {
    config: RuntimeConfig,
    build: Option<F>,
    running: Option<Running<A>>,
    error: Option<anyhow::Error>,
}

impl<A, F> RunState<A, F>
where
    A: FrameLoop + 'static,
    F: FnOnce(&WindowSurface, &EventSource) -> A,
{
    fn new(config: RuntimeConfig, build: F) -> Self {
        Self {
            config,
            build: Some(build),
            running: None,
            error: None,
        }
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let build = self.build.take().context("application already built")?;

        let surface = WindowSurface::new(window);
        let events = EventSource::new();
        let app = build(&surface, &events);

        log::info!("runtime started: \"{}\"", self.config.title);

        self.running = Some(Running {
            app,
            surface,
            events,
            clock: FrameClock::with_clamps(self.config.dt_min, self.config.dt_max),
        });
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, e: anyhow::Error) {
        log::error!("{e:#}");
        self.error = Some(e);
        event_loop.exit();
    }
}

impl<A, F> ApplicationHandler for RunState<A, F>
where
    A: FrameLoop + 'static,
    F: FnOnce(&WindowSurface, &EventSource) -> A,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(running) = &mut self.running {
            running.clock.reset();
            running.surface.window().request_redraw();
            return;
        }

        if let Err(e) = self.start(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw: the frame loop runs at the display's cadence.
        if let Some(running) = &self.running {
            running.surface.window().request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(running) = &mut self.running else {
            return;
        };

        let scale_factor = running.surface.window().scale_factor();
        let line_height = self.config.wheel_line_height;
        if let Some(ev) = translate_window_event(&event, scale_factor, line_height) {
            running.events.emit(&ev);
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("window close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                running.surface.window().request_redraw();
            }

            WindowEvent::RedrawRequested => {
                let time: FrameTime = running.clock.tick();
                running.surface.begin_frame();

                let mut ctx = FrameCtx::new(time, &running.surface);
                let control = running.app.frame(&mut ctx);

                if ctx.resolve(control) == AppControl::Exit {
                    log::info!("frame loop requested exit");
                    event_loop.exit();
                }
            }

            _ => {}
        }
    }
}
