use std::f32::consts::FRAC_PI_2;

use glam::{Mat3, Mat4, Vec2, Vec3};

use crate::core::frame::InputSnapshot;
use crate::settings::CameraSettings;
use crate::traits::camera::CameraController;
use crate::types::ViewUniform;
use crate::view;

pub const DEFAULT_EYE: Vec3 = Vec3::new(0.0, 0.0, 8.0);
pub const DEFAULT_LOOK: Vec3 = Vec3::new(0.0, 0.0, -1.0);
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Below this combined key magnitude the eye does not move.
const MOVEMENT_DEAD_ZONE: f32 = 1e-4;

/// First-person fly camera.
///
/// Holds an eye position and a unit look direction and integrates per-step
/// input into them. The world up axis never changes after construction.
///
/// Preconditions (checked only in debug builds):
/// `0 <= maximum_pitch_radians < π/2`, and all inputs finite. Outside of
/// that the math degenerates into NaNs instead of failing loudly.
#[derive(Debug, Clone, PartialEq)]
pub struct FlyCamera {
    eye: Vec3,
    look: Vec3,
    up: Vec3,
    /// World units per second while a movement key is held
    pub eye_speed: f32,
    /// Pointer-delta units to radians
    pub radians_per_cursor_point: f32,
    /// Closest the look direction may pitch towards vertical, measured from the horizon
    pub maximum_pitch_radians: f32,
}

impl FlyCamera {
    pub fn new() -> Self {
        Self::with_settings(CameraSettings::default())
    }

    pub fn with_settings(settings: CameraSettings) -> Self {
        Self {
            eye: DEFAULT_EYE,
            look: DEFAULT_LOOK,
            up: WORLD_UP,
            eye_speed: settings.eye_speed,
            radians_per_cursor_point: settings.radians_per_cursor_point,
            maximum_pitch_radians: settings.maximum_pitch_radians,
        }
    }

    pub fn settings(&self) -> CameraSettings {
        CameraSettings {
            eye_speed: self.eye_speed,
            radians_per_cursor_point: self.radians_per_cursor_point,
            maximum_pitch_radians: self.maximum_pitch_radians,
        }
    }

    pub fn apply_settings(&mut self, settings: &CameraSettings) {
        log::debug!("Applying camera settings: {:?}", settings);
        self.eye_speed = settings.eye_speed;
        self.radians_per_cursor_point = settings.radians_per_cursor_point;
        self.maximum_pitch_radians = settings.maximum_pitch_radians;
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn look(&self) -> Vec3 {
        self.look
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Camera-right axis in the horizontal plane
    pub fn across(&self) -> Vec3 {
        self.look.cross(self.up).normalize()
    }

    pub fn set_eye(&mut self, eye: Vec3) {
        self.eye = eye;
    }

    /// Point the camera along `look`.
    ///
    /// Zero-length directions and directions steeper than the pitch limit
    /// are ignored, since they would leave no usable lateral axis.
    pub fn set_look(&mut self, look: Vec3) {
        let Some(look) = look.try_normalize() else {
            log::debug!("Ignoring zero-length look direction");
            return;
        };

        let angle_to_horizon = look.dot(self.up).clamp(-1.0, 1.0).asin().abs();
        if angle_to_horizon > self.maximum_pitch_radians {
            log::debug!(
                "Ignoring look direction {:?}: {:.3} rad from horizon exceeds limit {:.3}",
                look,
                angle_to_horizon,
                self.maximum_pitch_radians
            );
            return;
        }

        self.look = look;
    }

    /// Return eye and look to their construction values. Tunables are kept.
    pub fn reset(&mut self) {
        self.eye = DEFAULT_EYE;
        self.look = DEFAULT_LOOK;
    }

    /// Advance the camera by one step.
    ///
    /// Translation uses the look direction from before this step's rotation.
    /// Yaw is applied first; pitch is then clamped against the yawed look but
    /// rotates about the lateral axis taken before yaw.
    pub fn update(
        &mut self,
        timestep: f32,
        pointer_delta: Vec2,
        forward_pressed: bool,
        left_pressed: bool,
        backward_pressed: bool,
        right_pressed: bool,
    ) {
        debug_assert!(
            (0.0..FRAC_PI_2).contains(&self.maximum_pitch_radians),
            "maximum_pitch_radians must lie in [0, π/2), got {}",
            self.maximum_pitch_radians
        );

        let across = self.look.cross(self.up).normalize();
        let forward = self.look;

        let x_movement = axis(right_pressed, left_pressed);
        let z_movement = axis(forward_pressed, backward_pressed);

        if x_movement.hypot(z_movement) > MOVEMENT_DEAD_ZONE {
            let xz_movement = across * x_movement + forward * z_movement;
            self.eye += xz_movement.normalize() * self.eye_speed * timestep;
        }

        if pointer_delta.x != 0.0 {
            let yaw = -pointer_delta.x * self.radians_per_cursor_point;
            let yaw_rotation = Mat3::from_axis_angle(self.up, yaw);
            self.look = (yaw_rotation * self.look).normalize();
        }

        if pointer_delta.y != 0.0 {
            let margin = FRAC_PI_2 - self.maximum_pitch_radians;
            let angle_to_up = self.look.dot(self.up).clamp(-1.0, 1.0).acos();
            let angle_to_down = self.look.dot(-self.up).clamp(-1.0, 1.0).acos();
            let max_pitch = (angle_to_up - margin).max(0.0);
            let min_pitch = (angle_to_down - margin).max(0.0);

            let requested = pointer_delta.y * self.radians_per_cursor_point;
            let pitch = requested.min(max_pitch).max(-min_pitch);
            if pitch != requested {
                log::trace!("Pitch clamped from {:.4} to {:.4} rad", requested, pitch);
            }

            let pitch_rotation = Mat3::from_axis_angle(across, pitch);
            self.look = (pitch_rotation * self.look).normalize();
        }
    }

    /// Feed a captured input snapshot through [`FlyCamera::update`]
    pub fn apply(&mut self, input: &InputSnapshot) {
        let movement = input.movement;
        self.update(
            input.timestep,
            input.pointer_delta,
            movement.forward,
            movement.left,
            movement.backward,
            movement.right,
        );
    }

    /// World-to-camera transform for the current eye and look
    pub fn view_matrix(&self) -> Mat4 {
        view::view_matrix(self.eye, self.look, self.up)
    }

    pub fn to_uniform(&self) -> ViewUniform {
        ViewUniform::new(self.view_matrix(), self.eye)
    }
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraController for FlyCamera {
    fn update(&mut self, input: &InputSnapshot) {
        self.apply(input);
    }

    fn view_matrix(&self) -> Mat4 {
        FlyCamera::view_matrix(self)
    }

    fn position(&self) -> Vec3 {
        self.eye
    }

    fn forward(&self) -> Vec3 {
        self.look
    }
}

const fn axis(positive: bool, negative: bool) -> f32 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}
