use std::sync::{Mutex, PoisonError};

/// Runway operations that require exclusive use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Maneuver {
    Takeoff,
    Landing,
}

#[derive(Debug, Default)]
struct RunwayLog {
    takeoffs: u64,
    landings: u64,
}

/// The single runway shared by takeoffs and landings
#[derive(Debug, Default)]
pub struct Runway {
    log: Mutex<RunwayLog>,
}

impl Runway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `operation` while holding the runway
    ///
    /// Blocks until no other plane is on the runway. The runway is released as
    /// soon as `operation` returns.
    pub fn clear_for<R>(&self, maneuver: Maneuver, operation: impl FnOnce() -> R) -> R {
        let mut log = self.log.lock().unwrap_or_else(PoisonError::into_inner);
        let result = operation();
        match maneuver {
            Maneuver::Takeoff => log.takeoffs += 1,
            Maneuver::Landing => log.landings += 1,
        }
        result
    }

    /// Completed takeoffs
    pub fn takeoffs(&self) -> u64 {
        self.log.lock().unwrap_or_else(PoisonError::into_inner).takeoffs
    }

    /// Completed landings
    pub fn landings(&self) -> u64 {
        self.log.lock().unwrap_or_else(PoisonError::into_inner).landings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_clear_for_counts_maneuvers() {
        let runway = Runway::new();
        let value = runway.clear_for(Maneuver::Takeoff, || 7);
        runway.clear_for(Maneuver::Landing, || ());
        runway.clear_for(Maneuver::Landing, || ());

        assert_eq!(value, 7);
        assert_eq!(runway.takeoffs(), 1);
        assert_eq!(runway.landings(), 2);
    }

    #[test]
    fn test_single_plane_on_runway() {
        let runway = Arc::new(Runway::new());
        let occupancy = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));
        let mut handles = Vec::new();

        for i in 0..8 {
            let runway = Arc::clone(&runway);
            let occupancy = Arc::clone(&occupancy);
            let peak = Arc::clone(&peak);
            handles.push(thread::spawn(move || {
                let maneuver = if i % 2 == 0 { Maneuver::Takeoff } else { Maneuver::Landing };
                for _ in 0..5 {
                    runway.clear_for(maneuver, || {
                        let now = occupancy.fetch_add(1, Ordering::SeqCst) + 1;
                        peak.fetch_max(now, Ordering::SeqCst);
                        thread::sleep(Duration::from_micros(200));
                        occupancy.fetch_sub(1, Ordering::SeqCst);
                    });
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(peak.load(Ordering::SeqCst), 1);
        assert_eq!(runway.takeoffs() + runway.landings(), 40);
    }
}
