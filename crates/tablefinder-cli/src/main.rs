mod bench;
mod import;
mod rank;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tablefinder")]
#[command(about = "Rank restaurants by price, rating, distance, or nearest-k")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rank a candidate file and print the result as JSON
    Rank {
        /// One of: distance, rating, price, weighted, knn
        #[arg(long)]
        method: String,
        /// Candidate file (YAML or JSON); defaults to `TABLEFINDER_CANDIDATES_PATH`
        #[arg(long)]
        input: Option<PathBuf>,
        /// Reference latitude
        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,
        /// Reference longitude
        #[arg(long, allow_negative_numbers = true)]
        lng: Option<f64>,
        /// Number of nearest candidates for `knn`; defaults to `TABLEFINDER_DEFAULT_K`
        #[arg(long, allow_negative_numbers = true)]
        k: Option<i64>,
        /// Only rank candidates whose region contains this text (e.g., 2200)
        #[arg(long)]
        region: Option<String>,
    },
    /// Convert a saved nearby-search response into candidates
    Import {
        /// Saved nearby-search JSON response
        #[arg(long)]
        places: PathBuf,
        /// Region the search was run for (e.g., 2200)
        #[arg(long)]
        region: String,
        /// Existing candidate file whose place ids are skipped
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Time every ranking method on synthetic data
    Bench {
        /// Comma-separated candidate counts
        #[arg(
            long,
            value_delimiter = ',',
            default_values_t = [10, 50, 100, 500, 1000, 5000]
        )]
        sizes: Vec<usize>,
        /// RNG seed; defaults to `TABLEFINDER_BENCH_SEED`
        #[arg(long)]
        seed: Option<u64>,
        /// Timed runs per measurement
        #[arg(long, default_value = "10")]
        iterations: u32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = tablefinder_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, "configuration loaded");

    match cli.command {
        Commands::Rank {
            method,
            input,
            lat,
            lng,
            k,
            region,
        } => rank::run_rank(
            &config,
            &rank::RankArgs {
                method,
                input,
                lat,
                lng,
                k,
                region,
            },
        ),
        Commands::Import {
            places,
            region,
            input,
        } => import::run_import(&config, &places, &region, input.as_deref()),
        Commands::Bench {
            sizes,
            seed,
            iterations,
        } => bench::run_bench(&sizes, seed.unwrap_or(config.bench_seed), iterations),
    }
}
