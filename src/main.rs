use std::sync::Arc;

use anyhow::anyhow;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use fly_camera::cli::Cli;
use fly_camera::core::{Clock, FixedStep, WinitController};
use fly_camera::FlyCamera;

const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;
const MAX_STEPS_PER_FRAME: u32 = 8;

struct App {
    window: Option<Arc<Window>>,
    camera: FlyCamera,
    controller: WinitController,
    clock: Clock,
    steps: FixedStep,
}

impl App {
    fn new(cli: &Cli) -> anyhow::Result<Self> {
        let settings = cli.resolve_settings()?;
        let hz = cli.step_rate()?;
        log::info!(
            "Camera settings: speed {} u/s, sensitivity {} rad/pt, pitch limit {:.1}°",
            settings.eye_speed,
            settings.radians_per_cursor_point,
            settings.maximum_pitch_radians.to_degrees()
        );

        Ok(Self {
            window: None,
            camera: FlyCamera::with_settings(settings),
            controller: WinitController::with_invert_y(!cli.no_invert_y),
            clock: Clock::new(),
            steps: FixedStep::new(hz, MAX_STEPS_PER_FRAME),
        })
    }

    /// Run every fixed step that is due, then publish the new view
    fn advance(&mut self) {
        let delta = self.clock.tick();
        let due = self.steps.tick(delta);
        if due == 0 {
            return;
        }

        let timestep = self.steps.timestep();
        for step in 0..due {
            self.camera.apply(&self.controller.snapshot(timestep));
            // Pointer motion belongs to the first step only
            if step == 0 {
                self.controller.reset_deltas();
            }
        }

        log::trace!(
            "View matrix after {} steps (alpha {:.2}): {:?}",
            due,
            self.steps.alpha(),
            self.camera.view_matrix()
        );

        if let Some(window) = &self.window {
            let eye = self.camera.eye();
            let look = self.camera.look();
            window.set_title(&format!(
                "Fly Camera - eye ({:.2}, {:.2}, {:.2}) look ({:.2}, {:.2}, {:.2})",
                eye.x, eye.y, eye.z, look.x, look.y, look.z
            ));
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Fly Camera")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(window);
            self.clock = Clock::new();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::KeyR),
                        ..
                    },
                ..
            } => {
                log::info!("Camera reset");
                self.camera.reset();
            }
            WindowEvent::RedrawRequested => self.advance(),
            other => self.controller.process_event(&other),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut app = App::new(&cli)?;
    let event_loop =
        EventLoop::new().map_err(|e| anyhow!("Failed to create event loop: {}", e))?;
    event_loop
        .run_app(&mut app)
        .map_err(|e| anyhow!("Event loop terminated with an error: {}", e))?;

    Ok(())
}
