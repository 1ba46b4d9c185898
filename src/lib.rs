pub mod core;

// Re-export commonly used types
pub use crate::core::config::{
    BoardingPolicy, ConcurrencyMode, DelayConfig, DelayMode, SimulationConfig,
};
pub use crate::core::delay::{ConfiguredDelays, DelayKind, DelayProvider, NoDelay};
pub use crate::core::errors::SimulationError;
pub use crate::core::presentation::{LogPresenter, Presenter};
pub use crate::core::simulation::{Simulation, SimulationReport};
pub use crate::core::types::{Phase, PlaneId, FLEET_SIZE, PLANE_CAPACITY};
