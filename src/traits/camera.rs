use glam::{Mat4, Vec3};

use crate::core::frame::InputSnapshot;

/// Camera movement and control abstraction
pub trait CameraController {
    /// Advance the camera by one input step
    fn update(&mut self, input: &InputSnapshot);

    /// Get the view matrix for rendering
    fn view_matrix(&self) -> Mat4;

    /// Get the camera position in world space
    fn position(&self) -> Vec3;

    /// Get the camera forward direction
    fn forward(&self) -> Vec3;
}
