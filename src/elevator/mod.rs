pub mod action;
pub mod current_floor;
pub mod store;

pub use action::Action;
pub use action::ActionParseError;
pub use current_floor::CurrentFloorView;
pub use store::ElevatorStore;
pub use store::StoreError;
pub use store::SubscriptionId;
