mod camera;
mod viewpoint;

pub use camera::{
    Camera, CameraMovement, DEFAULT_PITCH, DEFAULT_SENSITIVITY, DEFAULT_SPEED, DEFAULT_YAW,
};
pub use viewpoint::{CycleDirection, Viewpoint};
