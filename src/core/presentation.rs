use super::types::{Phase, PlaneId};
use log::{debug, info};
use std::thread;
use std::time::Duration;

/// Presentation layer driven by the plane actors
///
/// Every call is synchronous: actors wait for it to return before moving on,
/// and passenger counts are reported while the caller still holds the
/// boarding gate. Implementations must not call back into the airport.
pub trait Presenter: Send + Sync {
    /// Called once before any plane starts
    fn initialize(&self);

    /// Called on every phase transition
    fn report_status(&self, plane: PlaneId, phase: Phase);

    /// Called after every single passenger transfer
    fn report_passenger_count(&self, plane: PlaneId, count: u64);

    /// Called after every completed tour with the fleet-wide progress value
    fn report_progress(&self, tours: u64);

    fn taxi_out(&self, plane: PlaneId);

    /// Called while `plane` holds the runway
    fn take_off(&self, plane: PlaneId);

    /// Called while `plane` holds the runway
    fn land(&self, plane: PlaneId);

    fn taxi_in(&self, plane: PlaneId);

    /// Called once after every plane is done
    fn shutdown(&self);
}

/// Presenter that writes the airport's activity to the `log` facade
///
/// Maneuvers are simulated by sleeping for `maneuver_duration`.
#[derive(Debug, Clone)]
pub struct LogPresenter {
    maneuver_duration: Duration,
}

impl LogPresenter {
    pub fn new(maneuver_duration: Duration) -> Self {
        Self { maneuver_duration }
    }

    fn maneuver(&self, plane: PlaneId, what: &str) {
        debug!("[Plane {}] {} started", plane, what);
        if !self.maneuver_duration.is_zero() {
            thread::sleep(self.maneuver_duration);
        }
        debug!("[Plane {}] {} finished", plane, what);
    }
}

impl Default for LogPresenter {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

impl Presenter for LogPresenter {
    fn initialize(&self) {
        info!("[Airport] Display ready");
    }

    fn report_status(&self, plane: PlaneId, phase: Phase) {
        info!("[Plane {}] {:<5}", plane, phase.short_label());
    }

    fn report_passenger_count(&self, plane: PlaneId, count: u64) {
        debug!("[Plane {}] Passengers aboard: {}", plane, count);
    }

    fn report_progress(&self, tours: u64) {
        info!("[Airport] Tours completed by every plane: {}", tours);
    }

    fn taxi_out(&self, plane: PlaneId) {
        self.maneuver(plane, "Taxi out");
    }

    fn take_off(&self, plane: PlaneId) {
        self.maneuver(plane, "Takeoff");
    }

    fn land(&self, plane: PlaneId) {
        self.maneuver(plane, "Landing");
    }

    fn taxi_in(&self, plane: PlaneId) {
        self.maneuver(plane, "Taxi in");
    }

    fn shutdown(&self) {
        info!("[Airport] Display closed");
    }
}
