//! customer-seed library
//!
//! Generates a small batch of deterministic synthetic customer records and
//! inserts them into a PostgreSQL table: one parameterized statement per
//! record, one commit for the whole batch.
//!
//! # Example
//!
//! ```ignore
//! use customer_seed::{run_seed, CustomerGenerator, DatabaseArgs, SeedOutcome};
//!
//! let customers = CustomerGenerator::new(0).generate_batch(3);
//! match run_seed(&args, "ingredients", &customers).await {
//!     SeedOutcome::Completed(report) => println!("{} rows", report.rows_inserted),
//!     SeedOutcome::Failed(_) => {} // already logged, process exits normally
//! }
//! ```

pub mod args;
pub mod error;
pub mod generator;
pub mod insert;
pub mod logging;
pub mod record;
pub mod seeder;

pub use args::{DatabaseArgs, GenerateArgs};
pub use error::SeedError;
pub use generator::{CustomerGenerator, GeneratorError};
pub use record::Customer;
pub use seeder::{run_seed, SeedOutcome, SeedReport, Seeder};
