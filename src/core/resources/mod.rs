pub mod gate;
pub mod runway;

// Re-export commonly used types
pub use gate::{BoardingGate, PassengerPool};
pub use runway::{Maneuver, Runway};
