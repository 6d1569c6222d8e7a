use std::sync::Arc;
use std::time::Instant;

use nalgebra_glm as glm;
use winit::event::WindowEvent;
use winit::window::Window;

use crate::camera::Camera;
use crate::input::{InputCommand, InputState};
use crate::settings::Settings;

const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 100000.0;

/// Application context: the window, the camera and the input state that the
/// event callbacks share. Replaces the usual pile of module-level globals.
pub struct App {
    pub window: Arc<Window>,
    camera: Camera,
    input: InputState,
    settings: Settings,
    last_frame: Instant,
    aspect: f32,
}

pub struct EventResponse {
    pub repaint: bool,
    pub exit: bool,
}

impl App {
    pub fn new(window: Arc<Window>, settings: Settings) -> Self {
        let [x, y, z] = settings.camera.start_position;
        let camera = Camera::with_tuning(
            glm::vec3(x, y, z),
            glm::vec3(0.0, 1.0, 0.0),
            settings.camera.start_yaw,
            settings.camera.start_pitch,
            settings.camera.movement_speed,
            settings.camera.mouse_sensitivity,
        );

        let size = window.inner_size();
        let aspect = size.width.max(1) as f32 / size.height.max(1) as f32;

        Self {
            window,
            camera,
            input: InputState::new(),
            settings,
            last_frame: Instant::now(),
            aspect,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn handle_event(&mut self, event: &WindowEvent) -> EventResponse {
        match event {
            WindowEvent::CloseRequested => {
                return EventResponse {
                    repaint: false,
                    exit: true,
                };
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let command = self
                    .input
                    .process_key(event.physical_key, event.state, event.repeat);
                match command {
                    Some(InputCommand::ToggleLock) => {
                        let locked = self.input.is_locked();
                        log::debug!("camera {}", if locked { "locked" } else { "unlocked" });
                        self.window.set_cursor_visible(locked);
                    }
                    Some(InputCommand::Cycle(direction)) => {
                        self.camera.cycle_camera(direction);
                        self.window.set_cursor_visible(true);
                        log::debug!(
                            "cycled {:?} to position {:?}",
                            direction,
                            self.camera.position()
                        );
                    }
                    Some(InputCommand::Exit) => {
                        return EventResponse {
                            repaint: false,
                            exit: true,
                        };
                    }
                    None => {}
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let Some((x_offset, y_offset)) = self.input.cursor_moved(position.x, position.y)
                {
                    self.camera.process_mouse_movement(x_offset, y_offset, true);
                    return EventResponse {
                        repaint: true,
                        exit: false,
                    };
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.camera.process_mouse_scroll(InputState::scroll_amount(delta));
                return EventResponse {
                    repaint: true,
                    exit: false,
                };
            }
            WindowEvent::Resized(size) => {
                self.aspect = size.width.max(1) as f32 / size.height.max(1) as f32;
            }
            _ => {}
        }

        EventResponse {
            repaint: false,
            exit: false,
        }
    }

    /// Advance one frame: apply held movement keys scaled by elapsed time.
    /// A renderer would call `view_matrix`/`projection_matrix` after this.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let delta_seconds = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        for direction in self.input.held_directions() {
            self.camera.process_keyboard(direction, delta_seconds);
        }

        log::trace!(
            "pose position={:?} yaw={:.1} pitch={:.1} zoom={:.1}",
            self.camera.position(),
            self.camera.yaw(),
            self.camera.pitch(),
            self.camera.zoom(),
        );
    }

    pub fn view_matrix(&self) -> glm::Mat4 {
        self.camera.view_matrix()
    }

    pub fn projection_matrix(&self) -> glm::Mat4 {
        glm::perspective(
            self.aspect,
            self.camera.zoom().to_radians(),
            NEAR_PLANE,
            FAR_PLANE,
        )
    }
}
