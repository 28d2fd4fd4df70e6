pub mod registry;

pub use registry::FloorRegistry;
pub use registry::RegistryError;
