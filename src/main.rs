//! Command-line interface for customer-seed
//!
//! # Usage
//!
//! ```bash
//! customer-seed \
//!   --host localhost --port 5432 \
//!   --user postgres --password postgres --dbname demo
//! ```
//!
//! Connection values may also come from the environment or from a `.env`
//! file in the working directory, using the keys `hostname`, `database`,
//! `username`, `password`, and `port`.
//!
//! A database failure is logged and absorbed: the process still performs its
//! cleanup and exits with status 0.

use clap::Parser;
use customer_seed::{logging, run_seed, CustomerGenerator, DatabaseArgs, GenerateArgs, SeedOutcome};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "customer-seed",
    about = "Generate deterministic customer records and insert them into PostgreSQL",
    version
)]
struct Cli {
    #[command(flatten)]
    database: DatabaseArgs,

    #[command(flatten)]
    generate: GenerateArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A `.env` file in the working directory wins over exported vars, as the
    // original deployment expected.
    dotenvy::dotenv_override().ok();

    let cli = Cli::parse();

    // Guard held until exit so the app.log sink flushes.
    let _guard = logging::init("info");

    let mut generator = CustomerGenerator::new(cli.generate.seed);
    let customers = generator.generate_batch(cli.generate.count);
    info!(
        "Generated {} of {} requested records",
        customers.len(),
        cli.generate.count
    );

    match run_seed(&cli.database, &cli.generate.table, &customers).await {
        SeedOutcome::Completed(report) => {
            info!("Inserted {} rows", report.rows_inserted);
        }
        // Already logged inside run_seed; exiting normally is the contract.
        SeedOutcome::Failed(_) => {}
    }

    Ok(())
}
