use glam::Vec2;

use super::controller::{Controller, MovementState};

/// Input consumed by a single camera step. Never stored by the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputSnapshot {
    /// Seconds covered by this step
    pub timestep: f32,
    /// Pointer movement since the previous step; +y pitches up
    pub pointer_delta: Vec2,
    pub movement: MovementState,
}

impl InputSnapshot {
    pub fn new(timestep: f32, pointer_delta: Vec2, movement: MovementState) -> Self {
        Self {
            timestep,
            pointer_delta,
            movement,
        }
    }

    /// No pointer motion, no keys held
    pub fn idle(timestep: f32) -> Self {
        Self::new(timestep, Vec2::ZERO, MovementState::default())
    }

    pub fn from_controller(controller: &impl Controller, timestep: f32) -> Self {
        Self::new(
            timestep,
            controller.pointer_delta(),
            MovementState::from_controller(controller),
        )
    }
}
