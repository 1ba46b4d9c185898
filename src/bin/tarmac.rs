//! tarmac - airport tour simulation
//!
//! Eight planes board passengers, take off, tour, land and deplane, sharing one
//! boarding gate and one runway.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use std::fmt;
use std::process;
use std::sync::Arc;
use std::time::Duration;
use tarmac::{
    BoardingPolicy, ConcurrencyMode, DelayConfig, DelayMode, LogPresenter, Simulation,
    SimulationConfig, SimulationError,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DelayArg {
    /// Uniformly random delays
    Random,
    /// Midpoint of every delay range
    Fixed,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BoardingArg {
    /// Board until the plane is full or nobody is waiting
    UntilEmpty,
    /// Make one boarding attempt per seat
    FixedAttempts,
}

#[derive(Parser)]
#[command(name = "tarmac")]
#[command(
    about = "Simulate eight planes sharing one boarding gate and one runway",
    long_about = None
)]
struct Args {
    /// Passengers waiting in the airport at the start
    #[arg(allow_negative_numbers = true)]
    passengers: i64,

    /// Tours every plane must complete
    #[arg(allow_negative_numbers = true)]
    tours: i64,

    /// Base RNG seed (plane i uses seed + i)
    #[arg(long, default_value = "42")]
    seed: u64,

    /// How delays are chosen
    #[arg(long, value_enum, default_value = "random")]
    delay_mode: DelayArg,

    /// Length of one delay unit in milliseconds
    #[arg(long, default_value = "1000")]
    time_unit_ms: u64,

    /// Duration of each taxi, takeoff and landing in milliseconds
    #[arg(long, default_value = "500")]
    maneuver_ms: u64,

    /// Boarding policy
    #[arg(long, value_enum, default_value = "until-empty")]
    boarding: BoardingArg,

    /// Schedule planes on a rayon thread pool instead of one thread each
    #[arg(long)]
    rayon: bool,

    /// Rayon pool size (defaults to the fleet size)
    #[arg(long, requires = "rayon")]
    pool_size: Option<usize>,
}

/// CLI errors with user-facing messages
#[derive(Debug)]
enum CliError {
    /// Malformed command line
    Usage(String),
    /// The simulation could not run to completion
    Simulation(SimulationError),
}

impl CliError {
    /// Exit the process with an appropriate message and code.
    fn exit(&self) -> ! {
        match self {
            CliError::Usage(usage) => eprint!("{}", usage),
            CliError::Simulation(_) => eprintln!("Error: {}", self),
        }
        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage(usage) => write!(f, "{}", usage),
            CliError::Simulation(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {}

impl From<SimulationError> for CliError {
    fn from(e: SimulationError) -> Self {
        CliError::Simulation(e)
    }
}

fn build_config(args: &Args) -> SimulationConfig {
    let delays = DelayConfig {
        mode: match args.delay_mode {
            DelayArg::Random => DelayMode::Random,
            DelayArg::Fixed => DelayMode::Fixed,
        },
        time_unit: Duration::from_millis(args.time_unit_ms),
        seed_base: args.seed,
        ..DelayConfig::default()
    };
    let boarding = match args.boarding {
        BoardingArg::UntilEmpty => BoardingPolicy::UntilEmpty,
        BoardingArg::FixedAttempts => BoardingPolicy::FixedAttempts,
    };

    let mut config = SimulationConfig::from_signed_counts(args.passengers, args.tours)
        .with_delays(delays)
        .with_boarding_policy(boarding);
    if args.rayon {
        config = config.with_concurrency(ConcurrencyMode::Rayon);
        if let Some(size) = args.pool_size {
            config = config.with_thread_pool_size(size);
        }
    }
    config
}

fn run(args: Args) -> Result<(), CliError> {
    let config = build_config(&args);
    let presenter = LogPresenter::new(Duration::from_millis(args.maneuver_ms));

    let report = Simulation::new(config)
        .with_presenter(Arc::new(presenter))
        .run()?;

    println!(
        "{} tours completed by all {} planes, {} passengers boarded, {} waiting",
        report.progress,
        report.planes.len(),
        report.passengers_carried(),
        report.passengers_waiting
    );
    Ok(())
}

/// clap's error text followed by the usage line
///
/// Value errors (e.g. a non-numeric count) do not carry a usage line of their own.
fn usage_message(e: &clap::Error) -> String {
    let rendered = e.render().to_string();
    if rendered.contains("Usage:") {
        return rendered;
    }
    format!("{}\n{}\n", rendered.trim_end(), Args::command().render_usage())
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => CliError::Usage(usage_message(&e)).exit(),
        },
    };

    // Logging starts only after the arguments are accepted.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    if let Err(e) = run(args) {
        e.exit();
    }
}
