pub mod constants;
pub mod control;
pub mod errors;
pub mod input_system;
pub mod report_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use control::app::App;
pub use control::location::CelestialBody;
pub use control::session::{AngleMode, SessionSettings, UnitSystem};
pub use errors::InputError;

// Re-export commonly used items from input_system
pub use input_system::console::Console;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::kinematics::{simulate, TrajectoryInput, TrajectoryResult};

// Re-export commonly used utilities
pub use utils::angles::{degrees_to_radians, radians_to_degrees};
