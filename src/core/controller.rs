use glam::Vec2;

/// Logical movement intent, independent of any platform key code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveIntent {
    Forward,
    Backward,
    Left,
    Right,
}

impl MoveIntent {
    pub const ALL: [MoveIntent; 4] = [
        MoveIntent::Forward,
        MoveIntent::Backward,
        MoveIntent::Left,
        MoveIntent::Right,
    ];
}

/// Which movement intents are currently held.
/// Opposite intents may be held together; they cancel in the camera.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MovementState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementState {
    pub fn set(&mut self, intent: MoveIntent, held: bool) {
        match intent {
            MoveIntent::Forward => self.forward = held,
            MoveIntent::Backward => self.backward = held,
            MoveIntent::Left => self.left = held,
            MoveIntent::Right => self.right = held,
        }
    }

    pub const fn is_held(&self, intent: MoveIntent) -> bool {
        match intent {
            MoveIntent::Forward => self.forward,
            MoveIntent::Backward => self.backward,
            MoveIntent::Left => self.left,
            MoveIntent::Right => self.right,
        }
    }

    pub const fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Release everything, e.g. when the window loses focus
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Collect the state of any controller
    pub fn from_controller(controller: &impl Controller) -> Self {
        let mut state = Self::default();
        for intent in MoveIntent::ALL {
            state.set(intent, controller.is_held(intent));
        }
        state
    }
}

/// Controller - source of per-step camera input
pub trait Controller {
    /// Check if a movement intent is currently held
    fn is_held(&self, intent: MoveIntent) -> bool;

    /// Pointer movement accumulated since the last reset
    fn pointer_delta(&self) -> Vec2;
}
