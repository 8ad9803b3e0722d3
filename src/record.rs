//! The customer entity produced by the generator.

use chrono::{DateTime, Utc};

/// A synthetic customer record.
///
/// Produced in-memory as an ordered batch and consumed immediately by the
/// insert loop; the batch itself is never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    /// Sequential identifier, 1-based within a run.
    pub customer_id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Unique within the batch that generated it.
    pub email: String,
    /// Unique within the batch that generated it.
    pub phone_number: String,
    /// Timestamp within the current calendar year.
    pub created_at: DateTime<Utc>,
}
