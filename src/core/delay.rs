use super::config::{DelayConfig, DelayMode};
use super::types::PlaneId;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};
use std::thread;
use std::time::Duration;

/// Points in the tour cycle where a plane waits without holding any resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayKind {
    /// After each boarding attempt, outside the gate
    BoardingPause,
    /// The tour flight itself
    Tour,
    /// After each deplaning transfer, outside the gate
    DeplaningPause,
}

/// Source of simulated-time delays for plane actors
///
/// Tests plug in [`NoDelay`] so a full run takes milliseconds.
pub trait DelayProvider: Send + Sync {
    /// How long `plane` should wait at `kind`
    fn delay(&self, plane: PlaneId, kind: DelayKind) -> Duration;

    /// Block the calling actor for the delay
    fn pause(&self, plane: PlaneId, kind: DelayKind) {
        let duration = self.delay(plane, kind);
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

/// Delays that are always zero
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl DelayProvider for NoDelay {
    fn delay(&self, _plane: PlaneId, _kind: DelayKind) -> Duration {
        Duration::ZERO
    }
}

/// Delays drawn from the ranges of a [`DelayConfig`]
///
/// Each plane has its own seeded RNG (`seed_base + index`) so runs are
/// repeatable per plane regardless of thread interleaving.
#[derive(Debug)]
pub struct ConfiguredDelays {
    config: DelayConfig,
    rngs: Vec<Mutex<StdRng>>,
}

impl ConfiguredDelays {
    pub fn new(config: DelayConfig, fleet_size: usize) -> Self {
        let rngs = (0..fleet_size)
            .map(|i| Mutex::new(StdRng::seed_from_u64(config.seed_base.wrapping_add(i as u64))))
            .collect();
        Self { config, rngs }
    }

    fn range(&self, kind: DelayKind) -> (u32, u32) {
        match kind {
            DelayKind::BoardingPause => self.config.boarding_pause,
            DelayKind::Tour => self.config.tour,
            DelayKind::DeplaningPause => self.config.deplaning_pause,
        }
    }

    /// Number of time units `plane` waits at `kind`
    pub fn units(&self, plane: PlaneId, kind: DelayKind) -> u32 {
        let (min, max) = self.range(kind);
        let midpoint = min + (max.saturating_sub(min)) / 2;
        if min >= max {
            return min;
        }
        match self.config.mode {
            DelayMode::Fixed => midpoint,
            DelayMode::Random => match self.rngs.get(plane.index()) {
                Some(rng) => rng
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .gen_range(min..=max),
                None => midpoint,
            },
        }
    }
}

impl DelayProvider for ConfiguredDelays {
    fn delay(&self, plane: PlaneId, kind: DelayKind) -> Duration {
        self.config.time_unit * self.units(plane, kind)
    }
}
