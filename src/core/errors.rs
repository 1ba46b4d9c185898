use super::types::PlaneId;

/// Errors that can stop a simulation from starting or finishing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// Configuration rejected before any resource was created
    InvalidConfig(String),
    /// The rayon pool for actor scheduling could not be built
    ThreadPool(String),
    /// The OS refused to start a plane thread
    Spawn { plane: PlaneId, reason: String },
    /// A plane actor panicked instead of reaching DONE
    ActorPanicked(PlaneId),
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulationError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            SimulationError::ThreadPool(msg) => write!(f, "Thread pool error: {}", msg),
            SimulationError::Spawn { plane, reason } => {
                write!(f, "Failed to start plane {}: {}", plane, reason)
            }
            SimulationError::ActorPanicked(plane) => write!(f, "Plane {} panicked", plane),
        }
    }
}

impl std::error::Error for SimulationError {}
