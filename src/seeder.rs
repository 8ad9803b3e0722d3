//! PostgreSQL connection lifecycle and the seed workflow.

use crate::args::DatabaseArgs;
use crate::error::SeedError;
use crate::insert::insert_customers;
use crate::record::Customer;
use std::time::{Duration, Instant};
use tokio_postgres::NoTls;
use tracing::{debug, error, info};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Report from a completed seed run.
#[derive(Debug, Clone, Default)]
pub struct SeedReport {
    /// Number of rows inserted before the single commit.
    pub rows_inserted: u64,
    /// Wall time for the insert loop plus commit.
    pub elapsed: Duration,
}

/// Outcome of the absorbing workflow.
///
/// A database failure never propagates past [`run_seed`]; it is logged and
/// carried here so the process can still exit normally.
#[derive(Debug)]
pub enum SeedOutcome {
    /// All inserts committed.
    Completed(SeedReport),
    /// Connection, insert, or commit failed; nothing was committed.
    Failed(SeedError),
}

/// Owns the PostgreSQL client for one seed run.
///
/// Dropping the seeder drops the client, which ends the spawned connection
/// task and releases the socket on every exit path.
pub struct Seeder {
    client: tokio_postgres::Client,
}

impl Seeder {
    /// Connect using the five connection values.
    ///
    /// Fails loudly on bad credentials or an unreachable host; the caller
    /// decides whether to absorb the error.
    pub async fn connect(args: &DatabaseArgs) -> Result<Self, SeedError> {
        let mut config = tokio_postgres::Config::new();
        config
            .host(&args.host)
            .port(args.port)
            .user(&args.user)
            .password(&args.password)
            .dbname(&args.dbname)
            .connect_timeout(CONNECT_TIMEOUT);

        let (client, connection) = config.connect(NoTls).await?;

        // Spawn the connection task
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!("PostgreSQL connection error: {e}");
            }
        });

        // Test connection
        client.simple_query("SELECT 1").await?;

        Ok(Self { client })
    }

    /// Insert the batch inside one transaction and commit once.
    pub async fn seed(
        &mut self,
        table: &str,
        customers: &[Customer],
    ) -> Result<SeedReport, SeedError> {
        let start = Instant::now();
        info!(
            "Inserting {} customer records into '{}'",
            customers.len(),
            table
        );

        let tx = self.client.transaction().await?;
        let rows_inserted = insert_customers(&tx, table, customers).await?;
        tx.commit().await?;

        let report = SeedReport {
            rows_inserted,
            elapsed: start.elapsed(),
        };
        debug!(
            "Committed {} rows in {:?}",
            report.rows_inserted, report.elapsed
        );
        Ok(report)
    }
}

/// Run connect → insert loop → commit, absorbing database failures.
pub async fn run_seed(args: &DatabaseArgs, table: &str, customers: &[Customer]) -> SeedOutcome {
    match seed_once(args, table, customers).await {
        Ok(report) => {
            info!(
                "Seed complete: {} rows in {:?}",
                report.rows_inserted, report.elapsed
            );
            SeedOutcome::Completed(report)
        }
        Err(e) => {
            error!("Seed failed: {e}");
            SeedOutcome::Failed(e)
        }
    }
}

async fn seed_once(
    args: &DatabaseArgs,
    table: &str,
    customers: &[Customer],
) -> Result<SeedReport, SeedError> {
    let mut seeder = Seeder::connect(args).await?;
    seeder.seed(table, customers).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::CustomerGenerator;

    fn unreachable_args() -> DatabaseArgs {
        // Port 1 on loopback is refused immediately; no listener runs there.
        DatabaseArgs {
            host: "127.0.0.1".to_string(),
            dbname: "demo".to_string(),
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            port: 1,
        }
    }

    #[tokio::test]
    async fn test_connect_fails_loudly_when_unreachable() {
        let result = Seeder::connect(&unreachable_args()).await;

        assert!(matches!(result, Err(SeedError::Postgres(_))));
    }

    #[tokio::test]
    async fn test_run_seed_absorbs_connection_failure() {
        let customers = CustomerGenerator::new(0).generate_batch(3);

        let outcome = run_seed(&unreachable_args(), "ingredients", &customers).await;

        assert!(matches!(outcome, SeedOutcome::Failed(_)));
    }
}
