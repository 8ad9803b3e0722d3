//! CLI argument definitions for the customer seeder.

use clap::Args;

/// PostgreSQL connection values, read from flags or the environment.
///
/// The environment names match the original deployment's `.env` keys, which
/// is why they are lowercase.
#[derive(Args, Clone, Debug)]
pub struct DatabaseArgs {
    /// Database server host
    #[arg(long, env = "hostname")]
    pub host: String,

    /// Database name
    #[arg(long, env = "database")]
    pub dbname: String,

    /// Database user
    #[arg(long, env = "username")]
    pub user: String,

    /// Database password
    #[arg(long, env = "password")]
    pub password: String,

    /// Database port
    #[arg(long, env = "port")]
    pub port: u16,
}

/// Generation controls.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Number of customer records to generate
    #[arg(long, default_value = "3")]
    pub count: u64,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, default_value = "0")]
    pub seed: u64,

    /// Destination table
    #[arg(long, default_value = "ingredients")]
    pub table: String,
}
