use super::config::{BoardingPolicy, SimulationConfig};
use super::delay::DelayProvider;
use super::presentation::Presenter;
use super::resources::{BoardingGate, Runway};
use super::types::{PlaneId, FLEET_SIZE};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared state of one airport run
///
/// Owned by the simulation and handed to every plane actor as an
/// `Arc<Airport>`. The passenger pool is only reachable through the boarding
/// gate. Trip counters are written by their own plane and read by everyone.
pub struct Airport {
    gate: BoardingGate,
    runway: Runway,
    trips: Vec<AtomicU64>,
    target_tours: u64,
    plane_capacity: u64,
    boarding_policy: BoardingPolicy,
    presenter: Arc<dyn Presenter>,
    delays: Arc<dyn DelayProvider>,
}

impl Airport {
    /// Create the airport for a full fleet
    pub fn new(
        config: &SimulationConfig,
        presenter: Arc<dyn Presenter>,
        delays: Arc<dyn DelayProvider>,
    ) -> Self {
        Self::with_fleet_size(config, FLEET_SIZE, presenter, delays)
    }

    pub(crate) fn with_fleet_size(
        config: &SimulationConfig,
        fleet_size: usize,
        presenter: Arc<dyn Presenter>,
        delays: Arc<dyn DelayProvider>,
    ) -> Self {
        Self {
            gate: BoardingGate::new(config.initial_passengers),
            runway: Runway::new(),
            trips: (0..fleet_size).map(|_| AtomicU64::new(0)).collect(),
            target_tours: config.target_tours,
            plane_capacity: config.plane_capacity,
            boarding_policy: config.boarding_policy,
            presenter,
            delays,
        }
    }

    pub fn gate(&self) -> &BoardingGate {
        &self.gate
    }

    pub fn runway(&self) -> &Runway {
        &self.runway
    }

    pub fn presenter(&self) -> &dyn Presenter {
        self.presenter.as_ref()
    }

    pub fn delays(&self) -> &dyn DelayProvider {
        self.delays.as_ref()
    }

    pub fn target_tours(&self) -> u64 {
        self.target_tours
    }

    pub fn plane_capacity(&self) -> u64 {
        self.plane_capacity
    }

    pub fn boarding_policy(&self) -> BoardingPolicy {
        self.boarding_policy
    }

    /// Passengers currently waiting (takes the gate briefly)
    pub fn passengers_waiting(&self) -> u64 {
        self.gate.waiting()
    }

    /// Count one more completed tour for `plane`, returns its new total
    ///
    /// Must only be called by the actor that owns `plane`.
    pub fn record_trip(&self, plane: PlaneId) -> u64 {
        match self.trips.get(plane.index()) {
            Some(counter) => counter.fetch_add(1, Ordering::Release) + 1,
            None => 0,
        }
    }

    /// Tours completed by `plane`
    pub fn trips(&self, plane: PlaneId) -> u64 {
        self.trips
            .get(plane.index())
            .map_or(0, |counter| counter.load(Ordering::Acquire))
    }

    /// Tours completed by every plane (the minimum over the fleet)
    ///
    /// Counters are read one at a time without a lock, so the value may lag
    /// behind planes that are finishing concurrently. It never gates termination.
    pub fn progress(&self) -> u64 {
        self.trips
            .iter()
            .map(|counter| counter.load(Ordering::Relaxed))
            .min()
            .unwrap_or(0)
    }
}

impl std::fmt::Debug for Airport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Airport")
            .field("gate", &self.gate)
            .field("runway", &self.runway)
            .field("trips", &self.trips)
            .field("target_tours", &self.target_tours)
            .field("plane_capacity", &self.plane_capacity)
            .field("boarding_policy", &self.boarding_policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::delay::NoDelay;
    use crate::core::presentation::LogPresenter;
    use std::time::Duration;

    fn airport(passengers: u64, tours: u64) -> Airport {
        Airport::new(
            &SimulationConfig::new(passengers, tours),
            Arc::new(LogPresenter::new(Duration::ZERO)),
            Arc::new(NoDelay),
        )
    }

    #[test]
    fn test_new_airport_state() {
        let airport = airport(80, 2);
        assert_eq!(airport.passengers_waiting(), 80);
        assert_eq!(airport.trips(PlaneId::new(7)), 0);
        assert_eq!(airport.target_tours(), 2);
        assert_eq!(airport.plane_capacity(), 10);
        assert_eq!(airport.progress(), 0);
    }

    #[test]
    fn test_progress_is_fleet_minimum() {
        let airport = airport(0, 3);
        for plane in PlaneId::roster(8) {
            airport.record_trip(plane);
        }
        assert_eq!(airport.progress(), 1);

        assert_eq!(airport.record_trip(PlaneId::new(2)), 2);
        assert_eq!(airport.trips(PlaneId::new(2)), 2);
        assert_eq!(airport.progress(), 1);
    }

    #[test]
    fn test_unknown_plane_is_ignored() {
        let airport = airport(0, 1);
        assert_eq!(airport.record_trip(PlaneId::new(99)), 0);
        assert_eq!(airport.trips(PlaneId::new(99)), 0);
    }
}
