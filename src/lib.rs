pub mod camera;
pub mod cli;
pub mod core;
pub mod settings;
pub mod traits;
pub mod types;
pub mod view;

pub use camera::FlyCamera;
pub use crate::core::{InputSnapshot, MoveIntent, MovementState, WinitController};
pub use settings::CameraSettings;
pub use traits::CameraController;
pub use types::ViewUniform;
