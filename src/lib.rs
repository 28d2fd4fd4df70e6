/*
 * Navigation state for a site whose sections are floors served by a simulated elevator.
 *
 * - `floors`:    the ordered catalog of floors
 * - `elevator`:  the state store, its actions and the current floor view
 * - `config`:    TOML configuration for the command line front-end
 */

/* Modules */
pub mod config;
pub mod elevator;
pub mod floors;
pub mod shared;

pub use elevator::{Action, CurrentFloorView, ElevatorStore};
pub use floors::FloorRegistry;
pub use shared::{Direction, ElevatorState, Floor};
