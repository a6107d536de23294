//! The free-look camera.
//!
//! This module provides the [`Camera`] controller, which turns cursor motion and held movement
//! keys into a position and orientation, and the [`Projection`] helper used alongside it.

use std::collections::HashSet;

use glam::{Mat4, Vec2, Vec3};

/// Pitch is kept strictly inside (-90°, 90°) so `forward` never lines up with `up`.
pub const PITCH_LIMIT: f32 = 89.0;

/// A movement direction bound to a held key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

impl Movement {
    pub const ALL: [Movement; 6] = [
        Movement::Forward,
        Movement::Backward,
        Movement::Left,
        Movement::Right,
        Movement::Up,
        Movement::Down,
    ];
}

/// A first-person camera driven by yaw and pitch angles in degrees.
///
/// `forward` is always derived from `(yaw, pitch)` and is never touched by movement. `up` is a
/// fixed world-up reference and is not re-orthogonalized against `forward`.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    forward: Vec3,
    up: Vec3,
    yaw: f32,
    pitch: f32,
    movement_speed: f32,
    sensitivity: f32,
    last_cursor: Vec2,
    has_cursor_sample: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 3.0), -90.0, 0.0)
    }
}

impl Camera {
    /// Creates a camera at `position` looking along the direction given by `yaw` and `pitch`.
    ///
    /// `pitch` is clamped to [`PITCH_LIMIT`]. Movement speed defaults to 2 units per second and
    /// the look sensitivity to 0.1 degrees per pixel.
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        let pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        Self {
            position,
            forward: forward_from_angles(yaw, pitch),
            up: Vec3::Y,
            yaw,
            pitch,
            movement_speed: 2.0,
            sensitivity: 0.1,
            last_cursor: Vec2::ZERO,
            has_cursor_sample: false,
        }
    }

    /// Sets the movement speed in world units per second.
    pub fn with_movement_speed(mut self, movement_speed: f32) -> Self {
        self.movement_speed = movement_speed;
        self
    }

    /// Sets the multiplier applied to raw cursor deltas.
    pub fn with_sensitivity(mut self, sensitivity: f32) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// The strafe axis, `normalize(forward × up)`.
    pub fn right(&self) -> Vec3 {
        self.forward.cross(self.up).normalize()
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Returns `true` once a cursor position has been recorded as the reference point.
    pub fn has_cursor_sample(&self) -> bool {
        self.has_cursor_sample
    }

    /// Feeds an absolute cursor position in window pixels.
    ///
    /// The first sample after construction (or after [`Camera::release_cursor`]) only becomes
    /// the reference point. Later samples turn the camera by the scaled difference to the
    /// previous one. Screen rows grow downwards, so the vertical delta is inverted.
    pub fn on_cursor_moved(&mut self, x: f32, y: f32) {
        let cursor = Vec2::new(x, y);
        if !self.has_cursor_sample {
            log::trace!("Cursor reference seeded at ({x}, {y})");
            self.last_cursor = cursor;
            self.has_cursor_sample = true;
            return;
        }

        let dx = cursor.x - self.last_cursor.x;
        let dy = self.last_cursor.y - cursor.y;
        self.last_cursor = cursor;

        self.yaw += dx * self.sensitivity;
        self.pitch = (self.pitch + dy * self.sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.forward = forward_from_angles(self.yaw, self.pitch);
    }

    /// Forgets the cursor reference point so the next sample re-seeds it instead of turning.
    pub fn release_cursor(&mut self) {
        self.has_cursor_sample = false;
    }

    /// Moves the camera for one frame.
    ///
    /// Every held direction contributes `movement_speed * delta_time` along its axis, so two
    /// perpendicular keys move `sqrt(2)` times faster. Contributions are applied in
    /// [`Movement::ALL`] order, not in the iteration order of `pressed`. `delta_time` is in
    /// seconds and must not be negative.
    pub fn advance(&mut self, pressed: &HashSet<Movement>, delta_time: f32) {
        let step = self.movement_speed * delta_time;
        for movement in Movement::ALL.iter().filter(|m| pressed.contains(m)) {
            self.position += self.axis(*movement) * step;
        }
    }

    fn axis(&self, movement: Movement) -> Vec3 {
        match movement {
            Movement::Forward => self.forward,
            Movement::Backward => -self.forward,
            Movement::Left => -self.right(),
            Movement::Right => self.right(),
            Movement::Up => self.up,
            Movement::Down => -self.up,
        }
    }

    /// The right-handed look-at transform from `position` towards `position + forward`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward, self.up)
    }
}

fn forward_from_angles(yaw: f32, pitch: f32) -> Vec3 {
    let yaw_rad = yaw.to_radians();
    let pitch_rad = pitch.to_radians();
    Vec3::new(
        pitch_rad.cos() * yaw_rad.cos(),
        pitch_rad.sin(),
        pitch_rad.cos() * yaw_rad.sin(),
    )
    .normalize()
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Projection {
    /// Builds an OpenGL perspective matrix for the given `width / height` ratio.
    ///
    /// A degenerate aspect (e.g. a minimized window reporting zero height) is treated as 1.
    pub fn matrix(&self, aspect_ratio: f32) -> Mat4 {
        let aspect_ratio = if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
            aspect_ratio
        } else {
            1.0
        };
        Mat4::perspective_rh_gl(self.fov.to_radians(), aspect_ratio, self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn keys(movements: &[Movement]) -> HashSet<Movement> {
        movements.iter().copied().collect()
    }

    fn assert_vec3_near(actual: Vec3, expected: Vec3) {
        assert!(
            actual.abs_diff_eq(expected, 1e-5),
            "expected {expected:?}, got {actual:?}"
        );
    }

    /// Seeds the reference point at the origin so the next call turns the camera.
    fn seeded(mut camera: Camera) -> Camera {
        camera.on_cursor_moved(0.0, 0.0);
        camera
    }

    #[test]
    fn default_camera_looks_down_negative_z() {
        let camera = Camera::default();
        assert_eq!(camera.position(), Vec3::new(0.0, 0.0, 3.0));
        assert_vec3_near(camera.forward(), Vec3::NEG_Z);
        assert_eq!(camera.up(), Vec3::Y);
        assert_eq!(camera.yaw(), -90.0);
        assert_eq!(camera.pitch(), 0.0);
        assert!(!camera.has_cursor_sample());
    }

    #[test]
    fn new_clamps_pitch() {
        let camera = Camera::new(Vec3::ZERO, 0.0, 120.0);
        assert_eq!(camera.pitch(), PITCH_LIMIT);
        let camera = Camera::new(Vec3::ZERO, 0.0, -120.0);
        assert_eq!(camera.pitch(), -PITCH_LIMIT);
    }

    #[test]
    fn no_keys_means_no_movement() {
        let mut camera = seeded(Camera::default());
        camera.on_cursor_moved(37.0, -12.0);
        let start = camera.position();
        for dt in [0.0, 0.016, 1.0, 10.0] {
            camera.advance(&HashSet::new(), dt);
        }
        assert_eq!(camera.position(), start);
    }

    #[test]
    fn forward_moves_along_forward() {
        let mut camera = Camera::new(Vec3::new(1.0, -2.0, 0.5), 30.0, 20.0).with_movement_speed(3.0);
        let start = camera.position();
        let forward = camera.forward();
        for dt in [0.0, 0.25, 0.5] {
            let before = camera.position();
            camera.advance(&keys(&[Movement::Forward]), dt);
            assert_vec3_near(camera.position(), before + forward * 3.0 * dt);
        }
        assert_vec3_near(camera.position(), start + forward * 3.0 * 0.75);
    }

    #[test]
    fn advance_forward_one_second() {
        let mut camera = Camera::default().with_movement_speed(2.0);
        camera.advance(&keys(&[Movement::Forward]), 1.0);
        assert_vec3_near(camera.position(), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn each_direction_moves_the_right_way() {
        let start = Camera::default().with_movement_speed(1.0);
        let cases = [
            (Movement::Forward, Vec3::NEG_Z),
            (Movement::Backward, Vec3::Z),
            (Movement::Left, Vec3::NEG_X),
            (Movement::Right, Vec3::X),
            (Movement::Up, Vec3::Y),
            (Movement::Down, Vec3::NEG_Y),
        ];
        for (movement, direction) in cases {
            let mut camera = start.clone();
            camera.advance(&keys(&[movement]), 1.0);
            assert_vec3_near(camera.position(), start.position() + direction);
        }
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut camera = Camera::default();
        camera.advance(
            &keys(&[
                Movement::Forward,
                Movement::Backward,
                Movement::Left,
                Movement::Right,
            ]),
            1.0,
        );
        assert_vec3_near(camera.position(), Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn diagonal_movement_is_not_normalized() {
        let mut camera = Camera::default().with_movement_speed(2.0);
        camera.advance(&keys(&[Movement::Forward, Movement::Right]), 0.5);
        let travelled = camera.position().distance(Vec3::new(0.0, 0.0, 3.0));
        assert!((travelled - std::f32::consts::SQRT_2).abs() < 1e-5);
    }

    #[test]
    fn held_keys_apply_in_fixed_order() {
        let orders = [
            [Movement::Forward, Movement::Backward, Movement::Right],
            [Movement::Right, Movement::Backward, Movement::Forward],
            [Movement::Backward, Movement::Right, Movement::Forward],
        ];
        for i in 0..200 {
            let t = i as f32;
            let mut start = Camera::new(
                Vec3::new(t * 0.37 - 20.0, (t * 0.11).sin() * 5.0, t * -0.23),
                t * 7.3,
                (t * 0.9).sin() * 80.0,
            );
            start.on_cursor_moved(0.0, 0.0);
            let dt = 0.0167;
            let step = start.movement_speed() * dt;

            let mut expected = start.position();
            expected += start.forward() * step;
            expected += -start.forward() * step;
            expected += start.right() * step;

            for order in &orders {
                // A fresh set per order also gets a fresh hasher seed.
                let mut camera = start.clone();
                camera.advance(&order.iter().copied().collect::<HashSet<_>>(), dt);
                assert_eq!(camera.position(), expected, "pose {i}, order {order:?}");
            }
        }
    }

    #[test]
    fn first_cursor_event_only_seeds() {
        let mut camera = Camera::default();
        let before = camera.clone();
        camera.on_cursor_moved(400.0, 300.0);
        assert!(camera.has_cursor_sample());
        assert_eq!(camera.yaw(), before.yaw());
        assert_eq!(camera.pitch(), before.pitch());
        assert_eq!(camera.forward(), before.forward());
    }

    #[test]
    fn cursor_right_turns_yaw() {
        let mut camera = Camera::default().with_sensitivity(0.1);
        camera.on_cursor_moved(400.0, 300.0);
        camera.on_cursor_moved(500.0, 300.0);
        assert!((camera.yaw() - -80.0).abs() < 1e-4);
        assert_eq!(camera.pitch(), 0.0);

        let yaw = (-80.0f32).to_radians();
        assert_vec3_near(camera.forward(), Vec3::new(yaw.cos(), 0.0, yaw.sin()));
        assert!((camera.forward().length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn cursor_up_raises_pitch() {
        let mut camera = seeded(Camera::default().with_sensitivity(0.5));
        camera.on_cursor_moved(0.0, -20.0);
        assert!((camera.pitch() - 10.0).abs() < 1e-4);
        assert!(camera.forward().y > 0.0);
    }

    #[test]
    fn pitch_clamps_exactly_at_limit() {
        let mut camera = seeded(Camera::default().with_sensitivity(0.1));
        let mut y = 0.0;
        for _ in 0..50 {
            y -= 100.0;
            camera.on_cursor_moved(0.0, y);
        }
        assert_eq!(camera.pitch(), 89.0);

        for _ in 0..100 {
            y += 100.0;
            camera.on_cursor_moved(0.0, y);
        }
        assert_eq!(camera.pitch(), -89.0);
    }

    #[test]
    fn forward_stays_unit_and_pitch_stays_bounded() {
        let mut camera = seeded(Camera::default().with_sensitivity(0.37));
        let mut cursor = Vec2::ZERO;
        // Deterministic but irregular path.
        for i in 0..500 {
            let t = i as f32;
            cursor += Vec2::new((t * 1.7).sin() * 250.0, (t * 0.3).cos() * 900.0);
            camera.on_cursor_moved(cursor.x, cursor.y);
            assert!((camera.forward().length() - 1.0).abs() < EPSILON);
            assert!((-PITCH_LIMIT..=PITCH_LIMIT).contains(&camera.pitch()));
        }
    }

    #[test]
    fn release_cursor_reseeds() {
        let mut camera = seeded(Camera::default());
        camera.on_cursor_moved(10.0, 0.0);
        let yaw = camera.yaw();

        camera.release_cursor();
        assert!(!camera.has_cursor_sample());
        camera.on_cursor_moved(5000.0, 5000.0);
        assert_eq!(camera.yaw(), yaw);

        camera.on_cursor_moved(5010.0, 5000.0);
        assert!((camera.yaw() - (yaw + 1.0)).abs() < 1e-4);
    }

    #[test]
    fn movement_does_not_change_orientation() {
        let mut camera = seeded(Camera::default());
        camera.on_cursor_moved(123.0, 45.0);
        let forward = camera.forward();
        camera.advance(&Movement::ALL.into_iter().collect::<HashSet<_>>(), 3.0);
        assert_eq!(camera.forward(), forward);
    }

    #[test]
    fn right_is_perpendicular() {
        let mut camera = seeded(Camera::default());
        camera.on_cursor_moved(300.0, -200.0);
        let right = camera.right();
        assert!(right.dot(camera.forward()).abs() < 1e-5);
        assert!(right.dot(camera.up()).abs() < 1e-5);
        assert!((right.length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn view_matrix_puts_target_on_negative_z() {
        let mut camera = seeded(Camera::new(Vec3::new(4.0, 1.0, -2.0), 10.0, 15.0));
        camera.on_cursor_moved(40.0, 25.0);
        let view = camera.view_matrix();

        assert_vec3_near(view.transform_point3(camera.position()), Vec3::ZERO);
        let target = view.transform_point3(camera.position() + camera.forward());
        assert_vec3_near(target, Vec3::NEG_Z);
    }

    #[test]
    fn projection_handles_degenerate_aspect() {
        let projection = Projection::default();
        assert_eq!(projection.matrix(0.0), projection.matrix(1.0));
        assert_eq!(projection.matrix(f32::INFINITY), projection.matrix(1.0));
        assert!(projection.matrix(800.0 / 600.0).is_finite());
    }
}
