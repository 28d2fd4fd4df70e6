pub mod macros;
pub mod structs;

pub use structs::Direction;
pub use structs::ElevatorState;
pub use structs::Floor;
