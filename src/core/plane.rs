use super::airport::Airport;
use super::config::BoardingPolicy;
use super::delay::DelayKind;
use super::resources::Maneuver;
use super::types::{Phase, PlaneId};
use log::{debug, info};
use std::sync::Arc;

/// What a plane did over the whole run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaneSummary {
    pub plane: PlaneId,
    pub trips: u64,
    pub passengers_carried: u64,
}

/// One airplane, run as an independent actor
///
/// Repeats board → taxi out → takeoff → tour → landing → taxi in → deplane
/// until it has flown the airport's target number of tours. The boarded count
/// belongs to this actor alone; everything shared goes through the airport.
#[derive(Debug)]
pub struct PlaneActor {
    id: PlaneId,
    airport: Arc<Airport>,
    boarded: u64,
    passengers_carried: u64,
    trips: u64,
}

impl PlaneActor {
    pub fn new(id: PlaneId, airport: Arc<Airport>) -> Self {
        Self {
            id,
            airport,
            boarded: 0,
            passengers_carried: 0,
            trips: 0,
        }
    }

    pub fn id(&self) -> PlaneId {
        self.id
    }

    /// Fly tours until the target is reached, then report DONE
    pub fn run(mut self) -> PlaneSummary {
        let target = self.airport.target_tours();
        debug!("[Plane {}] Scheduled for {} tours", self.id, target);

        while self.trips < target {
            self.fly_tour();
        }

        self.airport.presenter().report_status(self.id, Phase::Done);
        info!(
            "[Plane {}] Done after {} tours, {} passengers carried",
            self.id, self.trips, self.passengers_carried
        );

        PlaneSummary {
            plane: self.id,
            trips: self.trips,
            passengers_carried: self.passengers_carried,
        }
    }

    fn fly_tour(&mut self) {
        self.board();

        self.set_phase(Phase::Taxi);
        self.airport.presenter().taxi_out(self.id);

        self.use_runway(Maneuver::Takeoff);

        self.set_phase(Phase::Tour);
        self.airport.delays().pause(self.id, DelayKind::Tour);

        self.use_runway(Maneuver::Landing);

        self.set_phase(Phase::Taxi);
        self.airport.presenter().taxi_in(self.id);

        self.deplane();

        self.trips += 1;
        self.airport.record_trip(self.id);
        self.airport.presenter().report_progress(self.airport.progress());
        debug!("[Plane {}] Tour {} complete", self.id, self.trips);
    }

    fn set_phase(&self, phase: Phase) {
        self.airport.presenter().report_status(self.id, phase);
    }

    fn board(&mut self) {
        self.set_phase(Phase::Boarding);
        let capacity = self.airport.plane_capacity();

        match self.airport.boarding_policy() {
            BoardingPolicy::UntilEmpty => {
                while self.boarded < capacity && self.board_one() {
                    self.airport.delays().pause(self.id, DelayKind::BoardingPause);
                }
            }
            BoardingPolicy::FixedAttempts => {
                for _ in 0..capacity {
                    self.board_one();
                    self.airport.delays().pause(self.id, DelayKind::BoardingPause);
                }
            }
        }

        self.passengers_carried += self.boarded;
        debug!("[Plane {}] Boarded {}/{}", self.id, self.boarded, capacity);
    }

    /// Move one waiting passenger aboard, returns false if the pool was empty
    /// or every seat is taken
    fn board_one(&mut self) -> bool {
        if self.boarded >= self.airport.plane_capacity() {
            return false;
        }

        let mut pool = self.airport.gate().enter();
        if !pool.take_one() {
            return false;
        }
        self.boarded += 1;
        self.airport
            .presenter()
            .report_passenger_count(self.id, self.boarded);
        drop(pool);
        true
    }

    fn use_runway(&self, maneuver: Maneuver) {
        let presenter = self.airport.presenter();
        self.airport.runway().clear_for(maneuver, || match maneuver {
            Maneuver::Takeoff => {
                presenter.report_status(self.id, Phase::Takeoff);
                presenter.take_off(self.id);
            }
            Maneuver::Landing => {
                presenter.report_status(self.id, Phase::Landing);
                presenter.land(self.id);
            }
        });
    }

    fn deplane(&mut self) {
        self.set_phase(Phase::Deplaning);

        while self.boarded > 0 {
            {
                let mut pool = self.airport.gate().enter();
                pool.return_one();
                self.boarded -= 1;
                self.airport
                    .presenter()
                    .report_passenger_count(self.id, self.boarded);
            }
            self.airport.delays().pause(self.id, DelayKind::DeplaningPause);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SimulationConfig;
    use crate::core::delay::NoDelay;
    use crate::core::presentation::Presenter;
    use std::sync::Mutex;

    /// Records status transitions and passenger counts for one plane
    #[derive(Default)]
    struct PhaseRecorder {
        phases: Mutex<Vec<Phase>>,
        counts: Mutex<Vec<u64>>,
        progress: Mutex<Vec<u64>>,
    }

    impl Presenter for PhaseRecorder {
        fn initialize(&self) {}
        fn report_status(&self, _plane: PlaneId, phase: Phase) {
            self.phases.lock().unwrap().push(phase);
        }
        fn report_passenger_count(&self, _plane: PlaneId, count: u64) {
            self.counts.lock().unwrap().push(count);
        }
        fn report_progress(&self, tours: u64) {
            self.progress.lock().unwrap().push(tours);
        }
        fn taxi_out(&self, _plane: PlaneId) {}
        fn take_off(&self, _plane: PlaneId) {}
        fn land(&self, _plane: PlaneId) {}
        fn taxi_in(&self, _plane: PlaneId) {}
        fn shutdown(&self) {}
    }

    fn solo_airport(config: SimulationConfig, recorder: Arc<PhaseRecorder>) -> Arc<Airport> {
        Arc::new(Airport::with_fleet_size(&config, 1, recorder, Arc::new(NoDelay)))
    }

    #[test]
    fn test_single_tour_phase_sequence() {
        let recorder = Arc::new(PhaseRecorder::default());
        let airport = solo_airport(SimulationConfig::new(3, 1), Arc::clone(&recorder));

        let summary = PlaneActor::new(PlaneId::new(0), Arc::clone(&airport)).run();

        assert_eq!(
            *recorder.phases.lock().unwrap(),
            vec![
                Phase::Boarding,
                Phase::Taxi,
                Phase::Takeoff,
                Phase::Tour,
                Phase::Landing,
                Phase::Taxi,
                Phase::Deplaning,
                Phase::Done,
            ]
        );
        assert_eq!(*recorder.counts.lock().unwrap(), vec![1, 2, 3, 2, 1, 0]);
        assert_eq!(*recorder.progress.lock().unwrap(), vec![1]);
        assert_eq!(summary.trips, 1);
        assert_eq!(summary.passengers_carried, 3);
        assert_eq!(airport.passengers_waiting(), 3);
        assert_eq!(airport.runway().takeoffs(), 1);
        assert_eq!(airport.runway().landings(), 1);
    }

    #[test]
    fn test_boarding_stops_at_capacity() {
        let recorder = Arc::new(PhaseRecorder::default());
        let airport = solo_airport(SimulationConfig::new(25, 2), Arc::clone(&recorder));

        let summary = PlaneActor::new(PlaneId::new(0), Arc::clone(&airport)).run();

        let counts = recorder.counts.lock().unwrap();
        assert_eq!(counts.iter().copied().max(), Some(10));
        assert_eq!(summary.passengers_carried, 20);
        assert_eq!(airport.passengers_waiting(), 25);
    }

    #[test]
    fn test_zero_tours_is_done_immediately() {
        let recorder = Arc::new(PhaseRecorder::default());
        let airport = solo_airport(SimulationConfig::new(40, 0), Arc::clone(&recorder));

        let summary = PlaneActor::new(PlaneId::new(0), Arc::clone(&airport)).run();

        assert_eq!(*recorder.phases.lock().unwrap(), vec![Phase::Done]);
        assert!(recorder.counts.lock().unwrap().is_empty());
        assert_eq!(summary.trips, 0);
        assert_eq!(airport.passengers_waiting(), 40);
        assert_eq!(airport.runway().takeoffs(), 0);
    }

    #[test]
    fn test_empty_plane_still_counts_trip() {
        let recorder = Arc::new(PhaseRecorder::default());
        let airport = solo_airport(SimulationConfig::new(0, 2), Arc::clone(&recorder));

        let summary = PlaneActor::new(PlaneId::new(0), Arc::clone(&airport)).run();

        assert!(recorder.counts.lock().unwrap().is_empty());
        assert_eq!(summary.trips, 2);
        assert_eq!(summary.passengers_carried, 0);
        assert_eq!(airport.runway().landings(), 2);
    }

    #[test]
    fn test_fixed_attempts_boards_what_is_available() {
        let recorder = Arc::new(PhaseRecorder::default());
        let config =
            SimulationConfig::new(4, 1).with_boarding_policy(BoardingPolicy::FixedAttempts);
        let airport = solo_airport(config, Arc::clone(&recorder));

        let summary = PlaneActor::new(PlaneId::new(0), Arc::clone(&airport)).run();

        assert_eq!(summary.passengers_carried, 4);
        assert_eq!(airport.passengers_waiting(), 4);
    }
}
