//! `dist-prompt`: builds distributions from the terminal and prints a sample of each.
//!
//! Logs go to stderr and are controlled with `RUST_LOG` (default `warn`).

use std::io;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use DistributionFactory::configuration::{DEFAULT_SEED, QUIT_COMMAND};
use DistributionFactory::prompt::{PromptSummary, run_prompt};

#[derive(Parser)]
#[command(name = "dist-prompt", about = "Create and sample normal, poisson and uniform distributions")]
struct Cli {
    /// Seed of the random generator. The same seed and input print the same samples.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// The line that ends the session.
    #[arg(long, default_value = QUIT_COMMAND)]
    quit_command: String,

    /// Also print the JSON record of every distribution.
    #[arg(long)]
    show_record: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli: Cli = Cli::parse();
    tracing::info!(seed = cli.seed, "dist-prompt starting");

    let mut rng: StdRng = StdRng::seed_from_u64(cli.seed);
    let stdin: io::Stdin = io::stdin();
    let mut stdout: io::StdoutLock<'static> = io::stdout().lock();

    let summary: PromptSummary = run_prompt()
        .input(stdin.lock())
        .output(&mut stdout)
        .rng(&mut rng)
        .quit_command(&cli.quit_command)
        .show_record(cli.show_record)
        .call()?;

    tracing::info!(
        created = summary.created,
        rejected = summary.rejected,
        "dist-prompt finished"
    );
    return Ok(());
}
