use std::sync::{Mutex, MutexGuard, PoisonError};

/// Passengers waiting in the airport
///
/// Only reachable through a [`BoardingGate`] guard, so every check-then-act on
/// the count happens inside one critical section.
#[derive(Debug)]
pub struct PassengerPool {
    waiting: u64,
}

impl PassengerPool {
    pub fn waiting(&self) -> u64 {
        self.waiting
    }

    /// Move one passenger out of the pool, returns false if nobody is waiting
    pub fn take_one(&mut self) -> bool {
        match self.waiting.checked_sub(1) {
            Some(remaining) => {
                self.waiting = remaining;
                true
            }
            None => false,
        }
    }

    /// Move one passenger back into the pool
    pub fn return_one(&mut self) {
        self.waiting = self.waiting.saturating_add(1);
    }
}

/// Mutual exclusion over the passenger pool
///
/// Planes hold the gate for a single passenger transfer at a time, which lets
/// other planes interleave between individual transfers.
#[derive(Debug)]
pub struct BoardingGate {
    pool: Mutex<PassengerPool>,
}

impl BoardingGate {
    /// Create an open gate with `initial` passengers waiting
    pub fn new(initial: u64) -> Self {
        Self {
            pool: Mutex::new(PassengerPool { waiting: initial }),
        }
    }

    /// Block until the gate is free and hold it until the guard is dropped
    pub fn enter(&self) -> MutexGuard<'_, PassengerPool> {
        // A pool update is a single assignment, so a poisoned guard still holds a
        // consistent count.
        self.pool.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the waiting count (takes the gate briefly)
    pub fn waiting(&self) -> u64 {
        self.enter().waiting()
    }
}
