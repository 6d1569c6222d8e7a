use nalgebra_glm as glm;

use super::{CycleDirection, Viewpoint};

pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_SPEED: f32 = 10.0;
pub const DEFAULT_SENSITIVITY: f32 = 0.25;
pub const DEFAULT_ZOOM: f32 = 45.0;

const PITCH_LIMIT: f32 = 89.0;
const ZOOM_MIN: f32 = 1.0;
const ZOOM_MAX: f32 = 45.0;

/// Movement direction for held-key motion, relative to the current basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

/// Free-fly camera with yaw/pitch orientation and three fixed cycle viewpoints.
///
/// `front`, `right` and `up` are derived from the angles and stay unit length
/// and mutually orthogonal; callers never set them directly. The pitch clamp
/// keeps `front` off the world-up axis so the cross products never degenerate.
#[derive(Debug, Clone)]
pub struct Camera {
    position: glm::Vec3,
    front: glm::Vec3,
    up: glm::Vec3,
    right: glm::Vec3,
    world_up: glm::Vec3,
    yaw: f32,
    pitch: f32,
    movement_speed: f32,
    mouse_sensitivity: f32,
    zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(
            glm::vec3(0.0, 0.0, 0.0),
            glm::vec3(0.0, 1.0, 0.0),
            DEFAULT_YAW,
            DEFAULT_PITCH,
        )
    }
}

impl Camera {
    pub fn new(position: glm::Vec3, world_up: glm::Vec3, yaw: f32, pitch: f32) -> Self {
        Self::with_tuning(
            position,
            world_up,
            yaw,
            pitch,
            DEFAULT_SPEED,
            DEFAULT_SENSITIVITY,
        )
    }

    /// Scalar-argument convenience constructor, same semantics as `new`.
    pub fn from_scalars(
        pos_x: f32,
        pos_y: f32,
        pos_z: f32,
        up_x: f32,
        up_y: f32,
        up_z: f32,
        yaw: f32,
        pitch: f32,
    ) -> Self {
        Self::new(
            glm::vec3(pos_x, pos_y, pos_z),
            glm::vec3(up_x, up_y, up_z),
            yaw,
            pitch,
        )
    }

    /// Constructor taking movement/look tuning, for settings-driven startup.
    /// Tuning is fixed for the lifetime of the camera.
    pub fn with_tuning(
        position: glm::Vec3,
        world_up: glm::Vec3,
        yaw: f32,
        pitch: f32,
        movement_speed: f32,
        mouse_sensitivity: f32,
    ) -> Self {
        let mut camera = Self {
            position,
            front: glm::vec3(0.0, 0.0, -1.0),
            up: glm::vec3(0.0, 1.0, 0.0),
            right: glm::vec3(1.0, 0.0, 0.0),
            world_up,
            yaw,
            pitch,
            movement_speed,
            mouse_sensitivity,
            zoom: DEFAULT_ZOOM,
        };
        camera.update_camera_vectors();
        camera
    }

    /// Look-at transform from the current pose. Pure read.
    pub fn view_matrix(&self) -> glm::Mat4 {
        glm::look_at(&self.position, &(self.position + self.front), &self.up)
    }

    /// Field of view in degrees, for the caller's projection matrix.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn position(&self) -> glm::Vec3 {
        self.position
    }

    pub fn front(&self) -> glm::Vec3 {
        self.front
    }

    pub fn right(&self) -> glm::Vec3 {
        self.right
    }

    pub fn up(&self) -> glm::Vec3 {
        self.up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Move along the basis for one held key. Call once per held direction per
    /// frame; simultaneous directions sum unnormalized, so diagonals run
    /// faster than a single axis.
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_seconds: f32) {
        let velocity = self.movement_speed * delta_seconds;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
    }

    /// Apply a raw cursor delta to the look angles.
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        // Keep pitch short of ±90 so the screen never flips over the pole.
        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_camera_vectors();
    }

    /// Apply a scroll delta to the field of view. The subtraction only runs
    /// from an in-range zoom, and the clamps always run after it, so a single
    /// step cannot overshoot the bounds undetected.
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        if self.zoom >= ZOOM_MIN && self.zoom <= ZOOM_MAX {
            self.zoom -= y_offset;
        }
        if self.zoom < ZOOM_MIN {
            self.zoom = ZOOM_MIN;
        }
        if self.zoom > ZOOM_MAX {
            self.zoom = ZOOM_MAX;
        }
    }

    /// Snap to the next fixed viewpoint in the given direction.
    ///
    /// Detection is by exact position equality, so this only advances the
    /// ring when the camera is at rest on a preset; any free-look drift makes
    /// the next cycle fall back to the overhead view (see `Viewpoint`).
    pub fn cycle_camera(&mut self, direction: CycleDirection) {
        self.world_up = glm::vec3(0.0, 1.0, 0.0);

        let next = Viewpoint::cycle_from(&self.position, direction);
        self.position = next.position;
        self.yaw = next.yaw;
        self.pitch = next.pitch;

        self.update_camera_vectors();
    }

    /// Re-derive the basis from yaw/pitch: spherical-to-Cartesian front, then
    /// two cross products to re-orthogonalize right and up against world up.
    fn update_camera_vectors(&mut self) {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();

        let front = glm::vec3(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );
        self.front = glm::normalize(&front);
        self.right = glm::normalize(&glm::cross(&self.front, &self.world_up));
        self.up = glm::normalize(&glm::cross(&self.right, &self.front));
    }
}
