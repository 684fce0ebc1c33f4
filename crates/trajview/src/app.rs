//! Application window and event loop management.

use std::sync::Arc;

use pollster::FutureExt;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use trajview_core::{Result, Trajectory, TrajviewError, ViewerOptions};
use trajview_render::{build_trajectory_lines, Camera, LineSetRenderData, RenderEngine};

/// The viewer application state.
pub struct App {
    options: ViewerOptions,
    trajectory: Trajectory,
    window: Option<Arc<Window>>,
    engine: Option<RenderEngine>,
    camera: Option<Camera>,
    lines: Option<LineSetRenderData>,
    close_requested: bool,
    // Mouse state for camera control; tracks the physical button state,
    // updated on every press/release.
    mouse_pos: (f64, f64),
    left_mouse_down: bool,
    right_mouse_down: bool,
    shift_down: bool,
}

impl App {
    /// Creates a new application for the given trajectory.
    #[must_use]
    pub fn new(trajectory: Trajectory, options: ViewerOptions) -> Self {
        Self {
            options,
            trajectory,
            window: None,
            engine: None,
            camera: None,
            lines: None,
            close_requested: false,
            mouse_pos: (0.0, 0.0),
            left_mouse_down: false,
            right_mouse_down: false,
            shift_down: false,
        }
    }

    fn render(&mut self) {
        let (Some(engine), Some(camera), Some(lines)) =
            (&mut self.engine, &self.camera, &self.lines)
        else {
            return;
        };
        engine.update_camera_uniforms(camera);
        if let Err(e) = engine.render_frame(lines) {
            log::error!("render failed: {e}");
            self.close_requested = true;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title(self.options.title.clone())
            .with_inner_size(LogicalSize::new(self.options.width, self.options.height));

        let window = Arc::new(
            event_loop
                .create_window(window_attributes)
                .expect("failed to create window"),
        );

        let engine = RenderEngine::new_windowed(window.clone(), &self.options)
            .block_on()
            .expect("failed to create render engine");

        let mut camera = Camera::from_options(&self.options);
        let size = window.inner_size();
        camera.set_viewport(size.width, size.height);

        let vertices = build_trajectory_lines(&self.trajectory, self.options.axis_scale);
        let lines = LineSetRenderData::new(
            &engine.device,
            engine.bind_group_layout(),
            engine.camera_buffer(),
            &vertices,
        );
        log::debug!(
            "uploaded {} line vertices for {} poses",
            vertices.len(),
            self.trajectory.len()
        );

        window.request_redraw();

        self.window = Some(window);
        self.engine = Some(engine);
        self.camera = Some(camera);
        self.lines = Some(lines);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.close_requested = true;
            }
            WindowEvent::Resized(size) => {
                if let Some(engine) = &mut self.engine {
                    engine.resize(size.width, size.height);
                }
                if let Some(camera) = &mut self.camera {
                    camera.set_viewport(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                self.render();
                // Fixed sleep caps the frame rate.
                std::thread::sleep(self.options.frame_interval);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            WindowEvent::MouseInput { state, button, .. } => match (button, state) {
                (MouseButton::Left, ElementState::Pressed) => self.left_mouse_down = true,
                (MouseButton::Left, ElementState::Released) => self.left_mouse_down = false,
                (MouseButton::Right, ElementState::Pressed) => self.right_mouse_down = true,
                (MouseButton::Right, ElementState::Released) => self.right_mouse_down = false,
                _ => {}
            },
            WindowEvent::ModifiersChanged(modifiers) => {
                self.shift_down = modifiers.state().shift_key();
            }
            WindowEvent::CursorMoved { position, .. } => {
                let delta_x = (position.x - self.mouse_pos.0) as f32;
                let delta_y = (position.y - self.mouse_pos.1) as f32;
                self.mouse_pos = (position.x, position.y);

                // Left drag orbits; left drag with Shift or right drag pans.
                if let Some(camera) = &mut self.camera {
                    let is_rotate = self.left_mouse_down && !self.shift_down;
                    let is_pan =
                        (self.left_mouse_down && self.shift_down) || self.right_mouse_down;

                    if is_rotate {
                        camera.orbit(delta_x * 0.01, delta_y * 0.01);
                    } else if is_pan {
                        let scale = camera.position.distance(camera.target) * 0.002;
                        camera.pan(-delta_x * scale, delta_y * scale);
                    }
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                if let Some(camera) = &mut self.camera {
                    let scroll = match delta {
                        MouseScrollDelta::LineDelta(_, y) => y,
                        MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.1,
                    };
                    let scale = camera.position.distance(camera.target) * 0.1;
                    camera.zoom(scroll * scale);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(KeyCode::Escape) = event.physical_key {
                    if event.state == ElementState::Pressed {
                        self.close_requested = true;
                    }
                }
            }
            _ => {}
        }

        if self.close_requested {
            event_loop.exit();
        }
    }
}

/// Opens a window and runs the viewer until it is closed.
///
/// Blocks the calling thread for the lifetime of the window.
pub fn show(trajectory: Trajectory, options: ViewerOptions) -> Result<()> {
    let event_loop = EventLoop::new()
        .map_err(|e| TrajviewError::Render(format!("failed to create event loop: {e}")))?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(trajectory, options);
    event_loop
        .run_app(&mut app)
        .map_err(|e| TrajviewError::Render(format!("event loop error: {e}")))
}
