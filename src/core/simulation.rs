use super::airport::Airport;
use super::config::{ConcurrencyMode, SimulationConfig};
use super::delay::{ConfiguredDelays, DelayProvider};
use super::errors::SimulationError;
use super::plane::{PlaneActor, PlaneSummary};
use super::presentation::{LogPresenter, Presenter};
use super::types::{PlaneId, FLEET_SIZE};
use log::{debug, info, warn};
use rayon::prelude::*;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Outcome of a finished run
#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub run_id: Uuid,
    pub initial_passengers: u64,
    pub target_tours: u64,
    /// Passengers waiting in the airport after every plane finished
    pub passengers_waiting: u64,
    /// Tours completed by every plane
    pub progress: u64,
    pub planes: Vec<PlaneSummary>,
    pub takeoffs: u64,
    pub landings: u64,
    pub elapsed: Duration,
}

impl SimulationReport {
    /// Total boardings over the whole run
    pub fn passengers_carried(&self) -> u64 {
        self.planes.iter().map(|p| p.passengers_carried).sum()
    }

    /// True when every passenger is back in the airport
    pub fn is_conserved(&self) -> bool {
        self.passengers_waiting == self.initial_passengers
    }
}

/// Simulation controller
///
/// Builds the shared airport, starts one actor per plane, waits for all of
/// them and closes the presentation layer.
pub struct Simulation {
    config: SimulationConfig,
    presenter: Arc<dyn Presenter>,
    delays: Option<Arc<dyn DelayProvider>>,
}

impl Simulation {
    /// Create a simulation that logs through [`LogPresenter`] and draws delays
    /// from the configuration
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            presenter: Arc::new(LogPresenter::default()),
            delays: None,
        }
    }

    pub fn with_presenter(mut self, presenter: Arc<dyn Presenter>) -> Self {
        self.presenter = presenter;
        self
    }

    /// Replace the configured delays, e.g. with `NoDelay` in tests
    pub fn with_delay_provider(mut self, delays: Arc<dyn DelayProvider>) -> Self {
        self.delays = Some(delays);
        self
    }

    /// Run every plane to completion
    pub fn run(self) -> Result<SimulationReport, SimulationError> {
        self.config.validate()?;

        let run_id = Uuid::new_v4();
        let started = Instant::now();
        let delays = self.delays.unwrap_or_else(|| {
            Arc::new(ConfiguredDelays::new(self.config.delays.clone(), FLEET_SIZE))
        });
        let airport = Arc::new(Airport::new(
            &self.config,
            Arc::clone(&self.presenter),
            delays,
        ));

        info!(
            "[Simulation {}] {} passengers, {} tours per plane, {} planes ({:?})",
            run_id,
            self.config.initial_passengers,
            self.config.target_tours,
            FLEET_SIZE,
            self.config.concurrency_mode
        );

        self.presenter.initialize();

        let actors: Vec<PlaneActor> = PlaneId::roster(FLEET_SIZE)
            .into_iter()
            .map(|id| PlaneActor::new(id, Arc::clone(&airport)))
            .collect();

        let outcome = match self.config.concurrency_mode {
            ConcurrencyMode::Threads => run_on_threads(actors),
            ConcurrencyMode::Rayon => {
                run_on_pool(actors, self.config.thread_pool_size.unwrap_or(FLEET_SIZE))
            }
        };

        self.presenter.shutdown();
        let planes = outcome?;

        let report = SimulationReport {
            run_id,
            initial_passengers: self.config.initial_passengers,
            target_tours: self.config.target_tours,
            passengers_waiting: airport.passengers_waiting(),
            progress: airport.progress(),
            planes,
            takeoffs: airport.runway().takeoffs(),
            landings: airport.runway().landings(),
            elapsed: started.elapsed(),
        };

        if !report.is_conserved() {
            warn!(
                "[Simulation {}] {} passengers waiting, expected {}",
                run_id, report.passengers_waiting, report.initial_passengers
            );
        }
        info!(
            "[Simulation {}] Finished in {:.2?}: {} tours, {} boardings",
            run_id,
            report.elapsed,
            report.progress,
            report.passengers_carried()
        );

        Ok(report)
    }
}

/// One named OS thread per plane
fn run_on_threads(actors: Vec<PlaneActor>) -> Result<Vec<PlaneSummary>, SimulationError> {
    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(actors.len());
        for actor in actors {
            let plane = actor.id();
            let handle = thread::Builder::new()
                .name(format!("plane-{}", plane))
                .spawn_scoped(scope, move || actor.run())
                .map_err(|e| SimulationError::Spawn {
                    plane,
                    reason: e.to_string(),
                })?;
            handles.push((plane, handle));
        }
        debug!("Started {} plane threads", handles.len());

        // Join everything before reporting the first failure.
        let joined: Vec<_> = handles
            .into_iter()
            .map(|(plane, handle)| (plane, handle.join()))
            .collect();
        collect_summaries(joined)
    })
}

/// Planes scheduled onto a dedicated rayon pool
fn run_on_pool(
    actors: Vec<PlaneActor>,
    pool_size: usize,
) -> Result<Vec<PlaneSummary>, SimulationError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(pool_size)
        .thread_name(|i| format!("airport-worker-{}", i))
        .build()
        .map_err(|e| SimulationError::ThreadPool(e.to_string()))?;
    debug!("Scheduling {} planes on {} workers", actors.len(), pool_size);

    let joined: Vec<_> = pool.install(|| {
        actors
            .into_par_iter()
            .map(|actor| {
                let plane = actor.id();
                (plane, panic::catch_unwind(AssertUnwindSafe(|| actor.run())))
            })
            .collect()
    });
    collect_summaries(joined)
}

fn collect_summaries(
    joined: Vec<(PlaneId, thread::Result<PlaneSummary>)>,
) -> Result<Vec<PlaneSummary>, SimulationError> {
    joined
        .into_iter()
        .map(|(plane, result)| result.map_err(|_| SimulationError::ActorPanicked(plane)))
        .collect()
}
