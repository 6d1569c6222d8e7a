use crate::CONFY_APP_NAME;
use crate::camera::{DEFAULT_PITCH, DEFAULT_SENSITIVITY, DEFAULT_SPEED, DEFAULT_YAW};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraSettings {
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    pub start_position: [f32; 3],
    pub start_yaw: f32,
    pub start_pitch: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            start_position: [0.0, 2.0, 12.0],
            start_yaw: DEFAULT_YAW,
            start_pitch: DEFAULT_PITCH,
        }
    }
}

impl CameraSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "camera").unwrap_or_default()
    }

    pub fn save(&self) {
        let _ = confy::store(CONFY_APP_NAME, "camera", self);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowSettings {
    pub width: f64,
    pub height: f64,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
        }
    }
}

impl WindowSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "window").unwrap_or_default()
    }

    pub fn save(&self) {
        let _ = confy::store(CONFY_APP_NAME, "window", self);
    }
}

// Aggregate struct for convenience
pub struct Settings {
    pub camera: CameraSettings,
    pub window: WindowSettings,
}

impl Settings {
    pub fn load() -> Self {
        Self {
            camera: CameraSettings::load(),
            window: WindowSettings::load(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_defaults_match_the_tuning_constants() {
        let settings = CameraSettings::default();
        assert_eq!(settings.movement_speed, 10.0);
        assert_eq!(settings.mouse_sensitivity, 0.25);
        assert_eq!(settings.start_position, [0.0, 2.0, 12.0]);
        assert_eq!(settings.start_yaw, -90.0);
        assert_eq!(settings.start_pitch, 0.0);
    }

    #[test]
    fn window_defaults() {
        let settings = WindowSettings::default();
        assert_eq!(settings.width, 1200.0);
        assert_eq!(settings.height, 800.0);
    }
}
