use winit::event::{ElementState, MouseScrollDelta};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::camera::{CameraMovement, CycleDirection};

/// Discrete command produced by a key press, handled by the app context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    ToggleLock,
    Cycle(CycleDirection),
    Exit,
}

/// Tracks held movement keys, the camera lock, and cursor position between
/// events. The app samples the held keys once per frame and forwards the
/// returned deltas/commands to the camera.
#[derive(Debug)]
pub struct InputState {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    locked: bool,
    last_cursor: Option<(f64, f64)>,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    /// Free-look starts locked; Tab or a cycle key changes it.
    pub fn new() -> Self {
        Self {
            forward: false,
            backward: false,
            left: false,
            right: false,
            locked: true,
            last_cursor: None,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Update held-key state and surface any discrete command. Discrete
    /// commands fire on the initial press only, never on OS auto-repeat.
    pub fn process_key(
        &mut self,
        key: PhysicalKey,
        state: ElementState,
        repeat: bool,
    ) -> Option<InputCommand> {
        let pressed = state == ElementState::Pressed;

        match key {
            PhysicalKey::Code(KeyCode::KeyW) => self.forward = pressed,
            PhysicalKey::Code(KeyCode::KeyS) => self.backward = pressed,
            PhysicalKey::Code(KeyCode::KeyA) => self.left = pressed,
            PhysicalKey::Code(KeyCode::KeyD) => self.right = pressed,
            PhysicalKey::Code(KeyCode::Tab) if pressed && !repeat => {
                self.toggle_lock();
                return Some(InputCommand::ToggleLock);
            }
            PhysicalKey::Code(KeyCode::ArrowLeft) if pressed && !repeat => {
                self.lock();
                return Some(InputCommand::Cycle(CycleDirection::Left));
            }
            PhysicalKey::Code(KeyCode::ArrowRight) if pressed && !repeat => {
                self.lock();
                return Some(InputCommand::Cycle(CycleDirection::Right));
            }
            PhysicalKey::Code(KeyCode::Escape) if pressed => {
                return Some(InputCommand::Exit);
            }
            _ => {}
        }

        None
    }

    /// Directions held right now, one entry per held key.
    pub fn held_directions(&self) -> impl Iterator<Item = CameraMovement> {
        [
            (self.forward, CameraMovement::Forward),
            (self.backward, CameraMovement::Backward),
            (self.left, CameraMovement::Left),
            (self.right, CameraMovement::Right),
        ]
        .into_iter()
        .filter_map(|(held, dir)| held.then_some(dir))
    }

    /// Turn a cursor position into a look offset, or `None` while locked or
    /// on the seeding move. The y offset is reversed so that moving the mouse
    /// up pitches the camera up.
    pub fn cursor_moved(&mut self, x: f64, y: f64) -> Option<(f32, f32)> {
        if self.locked {
            return None;
        }

        let offset = self
            .last_cursor
            .map(|(last_x, last_y)| ((x - last_x) as f32, (last_y - y) as f32));
        self.last_cursor = Some((x, y));
        offset
    }

    /// Map a winit scroll delta to the camera's scroll units.
    pub fn scroll_amount(delta: &MouseScrollDelta) -> f32 {
        match delta {
            MouseScrollDelta::LineDelta(_, y) => *y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.1,
        }
    }

    fn lock(&mut self) {
        self.locked = true;
        self.last_cursor = None;
    }

    fn toggle_lock(&mut self) {
        if self.locked {
            // Drop the stale cursor seed so the first move after unlocking
            // cannot produce a jump.
            self.locked = false;
            self.last_cursor = None;
        } else {
            self.lock();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(input: &mut InputState, code: KeyCode) -> Option<InputCommand> {
        input.process_key(PhysicalKey::Code(code), ElementState::Pressed, false)
    }

    fn release(input: &mut InputState, code: KeyCode) -> Option<InputCommand> {
        input.process_key(PhysicalKey::Code(code), ElementState::Released, false)
    }

    #[test]
    fn movement_keys_track_held_state() {
        let mut input = InputState::new();
        assert!(press(&mut input, KeyCode::KeyW).is_none());
        assert!(press(&mut input, KeyCode::KeyD).is_none());

        let held: Vec<_> = input.held_directions().collect();
        assert_eq!(held, vec![CameraMovement::Forward, CameraMovement::Right]);

        release(&mut input, KeyCode::KeyW);
        let held: Vec<_> = input.held_directions().collect();
        assert_eq!(held, vec![CameraMovement::Right]);
    }

    #[test]
    fn tab_toggles_the_lock_once_per_press() {
        let mut input = InputState::new();
        assert!(input.is_locked());

        assert_eq!(press(&mut input, KeyCode::Tab), Some(InputCommand::ToggleLock));
        assert!(!input.is_locked());

        // Auto-repeat must not toggle again.
        let repeated =
            input.process_key(PhysicalKey::Code(KeyCode::Tab), ElementState::Pressed, true);
        assert!(repeated.is_none());
        assert!(!input.is_locked());

        assert_eq!(press(&mut input, KeyCode::Tab), Some(InputCommand::ToggleLock));
        assert!(input.is_locked());
    }

    #[test]
    fn arrow_keys_cycle_and_relock() {
        let mut input = InputState::new();
        press(&mut input, KeyCode::Tab);
        assert!(!input.is_locked());

        assert_eq!(
            press(&mut input, KeyCode::ArrowLeft),
            Some(InputCommand::Cycle(CycleDirection::Left))
        );
        assert!(input.is_locked());

        assert_eq!(
            press(&mut input, KeyCode::ArrowRight),
            Some(InputCommand::Cycle(CycleDirection::Right))
        );
    }

    #[test]
    fn cursor_deltas_need_an_unlocked_camera_and_a_seed() {
        let mut input = InputState::new();
        assert_eq!(input.cursor_moved(100.0, 100.0), None);

        press(&mut input, KeyCode::Tab);
        // First move after unlocking only seeds the position.
        assert_eq!(input.cursor_moved(100.0, 100.0), None);
        // Second move yields the delta, y reversed.
        assert_eq!(input.cursor_moved(104.0, 97.0), Some((4.0, 3.0)));
    }

    #[test]
    fn relocking_clears_the_cursor_seed() {
        let mut input = InputState::new();
        press(&mut input, KeyCode::Tab);
        input.cursor_moved(10.0, 10.0);

        press(&mut input, KeyCode::Tab);
        press(&mut input, KeyCode::Tab);
        assert_eq!(input.cursor_moved(50.0, 50.0), None);
        assert_eq!(input.cursor_moved(51.0, 50.0), Some((1.0, 0.0)));
    }

    #[test]
    fn escape_requests_exit() {
        let mut input = InputState::new();
        assert_eq!(press(&mut input, KeyCode::Escape), Some(InputCommand::Exit));
    }
}
