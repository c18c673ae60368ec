use std::io;
use std::process::ExitCode;

use clap::Parser;
use magic_search::{MagicRunner, SearchConfig, TraceWriter};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "magic-square",
    version,
    about = "Search for magic squares by randomized hill climbing"
)]
struct Cli {
    /// Grid dimension
    #[arg(long, default_value_t = 10)]
    size: usize,
    /// 1 = magic, 2 = bimagic, 3 = trimagic, ...
    #[arg(long, default_value_t = 1)]
    power: u32,
    #[arg(long, default_value_t = 1)]
    lower_bound: i64,
    /// Exclusive; defaults to 4 * size * size
    #[arg(long)]
    upper_bound: Option<i64>,
    #[arg(long)]
    allow_duplicates: bool,
    #[arg(long, default_value_t = 3493)]
    seed: u64,
    #[arg(long, default_value_t = 10)]
    improve_iterations: usize,
    #[arg(long, default_value_t = 1000)]
    improve_rounds: usize,
    #[arg(long, default_value_t = 1)]
    min_updates: usize,
    #[arg(long, default_value_t = 1000)]
    max_restarts: usize,
}

impl Cli {
    fn config(&self) -> SearchConfig {
        let upper = self
            .upper_bound
            .unwrap_or((self.size * self.size * 4) as i64);
        SearchConfig::default()
            .with_size(self.size)
            .with_power(self.power)
            .with_bounds(self.lower_bound, upper)
            .with_allow_duplicates(self.allow_duplicates)
            .with_seed(self.seed)
            .with_improve_iterations(self.improve_iterations)
            .with_improve_rounds(self.improve_rounds)
            .with_min_updates(self.min_updates)
            .with_max_restarts(self.max_restarts)
    }
}

/// Routes `log` records to stderr, filtered by `RUST_LOG` (default `warn`),
/// so they never mix with the trace on stdout.
fn init_logging() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init()
        .is_ok()
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    let config = cli.config();

    let mut trace = TraceWriter::new(io::stdout().lock());
    let result = match MagicRunner::run_with_observer(&config, &mut trace) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            return ExitCode::from(2);
        }
    };
    if let Err(err) = trace.finish() {
        eprintln!("failed to write trace: {err}");
        return ExitCode::FAILURE;
    }

    if result.found {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
