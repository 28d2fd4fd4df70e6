/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/

/// A navigable section of the site. Floors are ordered by `level`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Floor {
    pub id: String,
    pub name: String,
    pub level: i32,
    pub description: String,
}

impl Floor {
    pub fn new(id: &str, name: &str, level: i32, description: &str) -> Floor {
        Floor {
            id: id.to_string(),
            name: name.to_string(),
            level,
            description: description.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Idle,
}

impl Direction {
    /// Direction of travel from `from` to `to`. Anything not strictly above is down.
    pub fn between(from: &Floor, to: &Floor) -> Direction {
        if to.level > from.level {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Idle => write!(f, "idle"),
        }
    }
}

/**
 * Snapshot of the elevator.
 *
 * `is_moving` is true exactly when `target_floor` is set, and `direction` is
 * `Idle` exactly when it is not.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ElevatorState {
    #[serde(rename = "currentFloor")]
    pub current_floor: Floor,
    #[serde(rename = "targetFloor")]
    pub target_floor: Option<Floor>,
    #[serde(rename = "isMoving")]
    pub is_moving: bool,
    #[serde(rename = "doorsOpen")]
    pub doors_open: bool,
    pub direction: Direction,
}

impl ElevatorState {
    pub fn new(entry_floor: Floor) -> ElevatorState {
        ElevatorState {
            current_floor: entry_floor,
            target_floor: None,
            is_moving: false,
            doors_open: false,
            direction: Direction::Idle,
        }
    }
}
