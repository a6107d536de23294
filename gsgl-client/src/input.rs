use std::collections::HashSet;

use glam::Vec2;
use gsgl_core::{Camera, Movement};
use sdl2::{
    event::{Event, WindowEvent},
    keyboard::Keycode,
};

use crate::settings::Settings;

/// Keys that move the camera.
pub const MOVEMENT_BINDINGS: [(Keycode, Movement); 6] = [
    (Keycode::W, Movement::Forward),
    (Keycode::S, Movement::Backward),
    (Keycode::A, Movement::Left),
    (Keycode::D, Movement::Right),
    (Keycode::Space, Movement::Up),
    (Keycode::LShift, Movement::Down),
];

/// The current state of the keyboard.
#[derive(Default)]
pub struct KeyboardState {
    /// Keys currently held.
    pub down: HashSet<Keycode>,
    /// Keys that went down this frame.
    pub pressed: HashSet<Keycode>,
}

impl KeyboardState {
    /// Clears the per-frame state. Held keys are kept.
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
    }

    pub fn key_down(&mut self, keycode: Keycode) {
        self.down.insert(keycode);
        self.pressed.insert(keycode);
    }

    pub fn key_up(&mut self, keycode: Keycode) {
        self.down.remove(&keycode);
    }

    /// Releases every key, e.g. when the window loses focus and key-up events may be missed.
    pub fn release_all(&mut self) {
        self.down.clear();
    }

    /// The movement directions whose keys are held.
    pub fn movement(&self) -> HashSet<Movement> {
        MOVEMENT_BINDINGS
            .iter()
            .filter(|(keycode, _)| self.down.contains(keycode))
            .map(|(_, movement)| *movement)
            .collect()
    }
}

/// Once the virtual cursor is this far from the origin on either axis it is moved back to zero.
/// `f32` still resolves single pixels well past this point.
pub const CURSOR_REBASE_LIMIT: f32 = 1_048_576.0;

/// Turns captured mouse motion into cursor samples for a [`Camera`].
///
/// With the mouse captured SDL only reports relative motion, so the deltas are summed into a
/// virtual cursor that stands in for an unbounded pointer position.
#[derive(Debug, Default)]
pub struct MouseLook {
    cursor: Vec2,
}

impl MouseLook {
    /// The current virtual cursor position.
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Applies mouse motion and focus loss to `camera`. Other events are ignored.
    pub fn handle_event(&mut self, camera: &mut Camera, event: &Event) {
        match event {
            Event::MouseMotion { xrel, yrel, .. } => self.motion(camera, *xrel, *yrel),
            Event::Window {
                win_event: WindowEvent::FocusLost,
                ..
            } => self.focus_lost(camera),
            _ => {}
        }
    }

    pub fn motion(&mut self, camera: &mut Camera, xrel: i32, yrel: i32) {
        self.cursor += Vec2::new(xrel as f32, yrel as f32);
        camera.on_cursor_moved(self.cursor.x, self.cursor.y);

        if self.cursor.abs().max_element() > CURSOR_REBASE_LIMIT {
            log::debug!("Re-basing virtual cursor from {}", self.cursor);
            self.cursor = Vec2::ZERO;
            camera.release_cursor();
            camera.on_cursor_moved(0.0, 0.0);
        }
    }

    /// The pointer may come back anywhere, so the next motion only re-seeds the camera.
    pub fn focus_lost(&mut self, camera: &mut Camera) {
        camera.release_cursor();
    }
}

/// Context provided to scenes during the update phase.
pub struct UpdateContext<'a> {
    pub keyboard: &'a KeyboardState,
    pub delta_time: f32,
    pub settings: &'a Settings,
    /// Drawable size of the window, for scenes created during the update.
    pub window_size: (u32, u32),
}

impl<'a> UpdateContext<'a> {
    pub fn new(
        keyboard: &'a KeyboardState,
        delta_time: f32,
        settings: &'a Settings,
        window_size: (u32, u32),
    ) -> Self {
        Self {
            keyboard,
            delta_time,
            settings,
            window_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_movement_has_one_key() {
        for movement in Movement::ALL {
            let count = MOVEMENT_BINDINGS
                .iter()
                .filter(|(_, m)| *m == movement)
                .count();
            assert_eq!(count, 1, "{movement:?}");
        }
    }

    #[test]
    fn held_keys_map_to_movement() {
        let mut keyboard = KeyboardState::default();
        keyboard.key_down(Keycode::W);
        keyboard.key_down(Keycode::D);
        keyboard.key_down(Keycode::Q);
        assert_eq!(
            keyboard.movement(),
            HashSet::from([Movement::Forward, Movement::Right])
        );

        keyboard.begin_frame();
        assert!(keyboard.pressed.is_empty());
        assert_eq!(keyboard.movement().len(), 2);

        keyboard.key_up(Keycode::W);
        assert_eq!(keyboard.movement(), HashSet::from([Movement::Right]));

        keyboard.release_all();
        assert!(keyboard.movement().is_empty());
    }

    #[test]
    fn mouse_motion_accumulates_into_cursor() {
        let mut camera = Camera::default().with_sensitivity(0.1);
        let mut look = MouseLook::default();

        look.motion(&mut camera, 40, -10);
        assert_eq!(look.cursor(), Vec2::new(40.0, -10.0));
        assert!(camera.has_cursor_sample());
        assert_eq!(camera.yaw(), -90.0);

        look.motion(&mut camera, 60, 0);
        look.motion(&mut camera, 0, -30);
        assert_eq!(look.cursor(), Vec2::new(100.0, -40.0));
        assert!((camera.yaw() - -84.0).abs() < 1e-4);
        assert!((camera.pitch() - 3.0).abs() < 1e-4);
    }

    #[test]
    fn focus_loss_reseeds_on_next_motion() {
        let mut camera = Camera::default().with_sensitivity(0.1);
        let mut look = MouseLook::default();
        look.motion(&mut camera, 0, 0);
        look.motion(&mut camera, 10, 0);
        let yaw = camera.yaw();

        let focus_lost = Event::Window {
            timestamp: 0,
            window_id: 0,
            win_event: WindowEvent::FocusLost,
        };
        look.handle_event(&mut camera, &focus_lost);
        assert!(!camera.has_cursor_sample());

        look.motion(&mut camera, 500, 500);
        assert_eq!(camera.yaw(), yaw);
        look.motion(&mut camera, 10, 0);
        assert!((camera.yaw() - (yaw + 1.0)).abs() < 1e-4);
    }

    #[test]
    fn small_motion_still_turns_after_long_drift() {
        let mut camera = Camera::default().with_sensitivity(0.1);
        let mut look = MouseLook::default();
        look.motion(&mut camera, 0, 0);
        // Pitch pins at the limit while the cursor keeps travelling upwards.
        for _ in 0..20_000 {
            look.motion(&mut camera, 0, -1000);
            assert!(look.cursor().y >= -CURSOR_REBASE_LIMIT);
        }
        assert_eq!(camera.pitch(), gsgl_core::PITCH_LIMIT);

        look.motion(&mut camera, 0, 1);
        assert!((camera.pitch() - (gsgl_core::PITCH_LIMIT - 0.1)).abs() < 1e-4);
    }
}
