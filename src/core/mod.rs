pub mod clock;
pub mod controller;
pub mod frame;
pub mod input_adapter;

pub use clock::{Clock, FixedStep};
pub use controller::{Controller, MoveIntent, MovementState};
pub use frame::InputSnapshot;
pub use input_adapter::WinitController;
