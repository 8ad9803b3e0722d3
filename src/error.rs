//! Error types for the customer seeder.

use thiserror::Error;

/// Errors that can occur while seeding PostgreSQL.
///
/// Connection, statement execution, and commit failures all surface here.
/// The caller decides whether to absorb them; see [`crate::seeder::run_seed`].
#[derive(Error, Debug)]
pub enum SeedError {
    /// PostgreSQL connection or query error.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] tokio_postgres::Error),
}
