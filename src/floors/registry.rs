/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::collections::HashSet;
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Floor;

/***************************************/
/*               Errors                */
/***************************************/
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("floor registry must contain at least one floor")]
    Empty,
    #[error("duplicate floor id '{0}'")]
    DuplicateId(String),
    #[error("duplicate floor level {0}")]
    DuplicateLevel(i32),
}

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Ordered, read-only catalog of floors.
 *
 * The first entry is the entry floor the elevator starts at and returns to on reset.
 *
 * # Invariants
 * - at least one floor
 * - `id` values are unique
 * - `level` values are unique
 */
#[derive(Debug, Clone, PartialEq)]
pub struct FloorRegistry {
    floors: Vec<Floor>,
}

impl FloorRegistry {
    pub fn new(floors: Vec<Floor>) -> Result<FloorRegistry, RegistryError> {
        if floors.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut ids = HashSet::new();
        let mut levels = HashSet::new();
        for floor in floors.iter() {
            if !ids.insert(floor.id.as_str()) {
                return Err(RegistryError::DuplicateId(floor.id.clone()));
            }
            if !levels.insert(floor.level) {
                return Err(RegistryError::DuplicateLevel(floor.level));
            }
        }

        Ok(FloorRegistry { floors })
    }

    pub fn find(&self, id: &str) -> Option<&Floor> {
        self.floors.iter().find(|floor| floor.id == id)
    }

    pub fn first(&self) -> &Floor {
        // Non-empty, checked in `new`
        &self.floors[0]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Floor> {
        self.floors.iter()
    }

    pub fn len(&self) -> usize {
        self.floors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }
}

impl Default for FloorRegistry {
    fn default() -> FloorRegistry {
        FloorRegistry {
            floors: vec![
                Floor::new("lobby", "Lobby", 0, "Welcome to Muhammad Daru's Portfolio"),
                Floor::new("about", "About", 1, "Personal information and background"),
                Floor::new("experience", "Experience", 2, "Work history and professional experience"),
                Floor::new("skills", "Skills", 3, "Technical skills and competencies"),
                Floor::new("education", "Education", 4, "Academic background and qualifications"),
                Floor::new("projects", "Projects", 5, "Portfolio of projects and work"),
                Floor::new("contact", "Contact", 6, "Get in touch"),
            ],
        }
    }
}

impl<'a> IntoIterator for &'a FloorRegistry {
    type Item = &'a Floor;
    type IntoIter = std::slice::Iter<'a, Floor>;

    fn into_iter(self) -> Self::IntoIter {
        self.floors.iter()
    }
}
