//! Configuration for airport simulation runs
//!
//! This module provides configuration types for controlling how a run is seeded,
//! paced and scheduled onto threads.

use super::errors::SimulationError;
use super::types::PLANE_CAPACITY;
use log::warn;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Enumeration of supported concurrency modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConcurrencyMode {
    /// One dedicated OS thread per plane
    Threads,
    /// Planes are scheduled onto a rayon thread pool
    Rayon,
}

impl Default for ConcurrencyMode {
    fn default() -> Self {
        ConcurrencyMode::Threads
    }
}

/// How a plane fills its seats during the boarding phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardingPolicy {
    /// Board while seats and waiting passengers both remain, then leave
    UntilEmpty,
    /// Make exactly `capacity` boarding attempts, boarding one passenger per
    /// attempt when the pool has one
    FixedAttempts,
}

impl Default for BoardingPolicy {
    fn default() -> Self {
        BoardingPolicy::UntilEmpty
    }
}

/// Delay mode for the injectable delay provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DelayMode {
    /// Delays drawn uniformly between min and max values
    Random,
    /// Delays fixed at the midpoint of each range
    Fixed,
}

impl Default for DelayMode {
    fn default() -> Self {
        DelayMode::Random
    }
}

/// Delay ranges, in time units (inclusive)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelayConfig {
    pub mode: DelayMode,
    /// Wall-clock length of one time unit
    pub time_unit: Duration,
    /// Pause after each boarding attempt
    pub boarding_pause: (u32, u32),
    /// Length of the tour flight
    pub tour: (u32, u32),
    /// Pause after each deplaning transfer
    pub deplaning_pause: (u32, u32),
    /// Base seed; plane `i` uses `seed_base + i`
    pub seed_base: u64,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            mode: DelayMode::default(),
            time_unit: Duration::from_secs(1),
            boarding_pause: (0, 2),
            tour: (5, 45),
            deplaning_pause: (1, 1),
            seed_base: 42,
        }
    }
}

/// Configuration for a simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Passengers waiting in the airport when the run starts
    pub initial_passengers: u64,
    /// Tours each plane must complete before it is done
    pub target_tours: u64,
    /// Seats per plane
    pub plane_capacity: u64,
    pub boarding_policy: BoardingPolicy,
    /// The concurrency mode to use for execution
    pub concurrency_mode: ConcurrencyMode,
    /// The size of the thread pool for parallel execution
    /// Only relevant when concurrency_mode is Rayon
    pub thread_pool_size: Option<usize>,
    pub delays: DelayConfig,
}

impl SimulationConfig {
    /// Create a configuration for the given passenger pool and tour target
    ///
    /// Everything else starts at its default: 8 planes of 10 seats, one thread
    /// per plane, non-blocking boarding.
    pub fn new(initial_passengers: u64, target_tours: u64) -> Self {
        Self {
            initial_passengers,
            target_tours,
            plane_capacity: PLANE_CAPACITY,
            boarding_policy: BoardingPolicy::default(),
            concurrency_mode: ConcurrencyMode::default(),
            thread_pool_size: None,
            delays: DelayConfig::default(),
        }
    }

    /// Create a configuration from signed command-line counts
    ///
    /// Negative counts are clamped to zero.
    pub fn from_signed_counts(passengers: i64, tours: i64) -> Self {
        Self::new(clamp_count("passenger", passengers), clamp_count("tour", tours))
    }

    /// Set the concurrency mode for the simulation
    pub fn with_concurrency(mut self, mode: ConcurrencyMode) -> Self {
        self.concurrency_mode = mode;
        self
    }

    /// Set the thread pool size for parallel execution
    ///
    /// # Note
    /// This setting only affects execution when concurrency_mode is Rayon
    pub fn with_thread_pool_size(mut self, size: usize) -> Self {
        self.thread_pool_size = Some(size);
        self
    }

    pub fn with_boarding_policy(mut self, policy: BoardingPolicy) -> Self {
        self.boarding_policy = policy;
        self
    }

    pub fn with_delays(mut self, delays: DelayConfig) -> Self {
        self.delays = delays;
        self
    }

    pub fn with_plane_capacity(mut self, capacity: u64) -> Self {
        self.plane_capacity = capacity;
        self
    }

    /// Check the settings that would make a run meaningless
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.plane_capacity == 0 {
            return Err(SimulationError::InvalidConfig(
                "plane capacity must be at least 1".to_string(),
            ));
        }
        if self.thread_pool_size == Some(0) {
            return Err(SimulationError::InvalidConfig(
                "thread pool size must be at least 1".to_string(),
            ));
        }
        for (name, (min, max)) in [
            ("boarding pause", self.delays.boarding_pause),
            ("tour", self.delays.tour),
            ("deplaning pause", self.delays.deplaning_pause),
        ] {
            if min > max {
                return Err(SimulationError::InvalidConfig(format!(
                    "{} range {}..={} is empty",
                    name, min, max
                )));
            }
        }
        Ok(())
    }
}

fn clamp_count(name: &str, value: i64) -> u64 {
    u64::try_from(value).unwrap_or_else(|_| {
        warn!("Negative {} count {} treated as 0", name, value);
        0
    })
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
