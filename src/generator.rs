//! Deterministic customer record generation.
//!
//! The generator uses a seeded RNG so that the same seed produces the same
//! batch. Email and phone number are required to be unique within a batch;
//! a record whose unique fields cannot be satisfied is skipped rather than
//! failing the run.

use crate::record::Customer;
use chrono::{DateTime, Datelike, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use tracing::warn;

/// How many candidate values to try before declaring a unique field exhausted.
const MAX_UNIQUE_ATTEMPTS: usize = 1000;

const FIRST_NAMES: &[&str] = &[
    "Oliver", "Amelia", "George", "Isla", "Harry", "Olivia", "Jack", "Emily", "Charlie", "Poppy",
    "Thomas", "Sophie", "Oscar", "Grace", "James", "Ruby",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Jones", "Taylor", "Brown", "Williams", "Wilson", "Johnson", "Davies", "Robinson",
    "Wright", "Thompson", "Evans", "Walker", "White", "Roberts", "Green",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The RNG could not produce a fresh unique value for a field.
    #[error("could not generate a unique {field} after {attempts} attempts")]
    UniqueExhausted {
        field: &'static str,
        attempts: usize,
    },
}

/// Generates customer records deterministically from a seed.
///
/// Uniqueness of email and phone number is tracked per generator instance,
/// so a batch produced by one generator never repeats either field.
pub struct CustomerGenerator {
    rng: StdRng,
    next_id: i64,
    /// Inclusive `(start, end)` unix-second bounds for `created_at`.
    created_range: (i64, i64),
    seen_emails: HashSet<String>,
    seen_phones: HashSet<String>,
}

impl CustomerGenerator {
    /// Create a generator with the given seed.
    ///
    /// `created_at` values are drawn between Jan 1 of the current year (UTC)
    /// and the moment of construction.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            next_id: 1,
            created_range: created_range_ending_at(Utc::now()),
            seen_emails: HashSet::new(),
            seen_phones: HashSet::new(),
        }
    }

    /// Override the upper bound of the `created_at` range.
    ///
    /// The lower bound becomes Jan 1 of the bound's year. Fixing the bound
    /// makes whole batches reproducible across process runs, not just within
    /// one run.
    pub fn with_created_before(mut self, upper: DateTime<Utc>) -> Self {
        self.created_range = created_range_ending_at(upper);
        self
    }

    /// Generate the next customer record.
    ///
    /// The sequential id advances even when generation fails, so a skipped
    /// record leaves a gap rather than renumbering the rest of the batch.
    pub fn next_customer(&mut self) -> Result<Customer, GeneratorError> {
        let customer_id = self.next_id;
        self.next_id += 1;

        let first_name = FIRST_NAMES[self.rng.random_range(0..FIRST_NAMES.len())].to_string();
        let last_name = LAST_NAMES[self.rng.random_range(0..LAST_NAMES.len())].to_string();
        let email = self.unique_email(&first_name, &last_name)?;
        let phone_number = self.unique_phone()?;
        let created_at = self.created_at();

        Ok(Customer {
            customer_id,
            first_name,
            last_name,
            email,
            phone_number,
            created_at,
        })
    }

    /// Generate up to `count` records, numbered from 1.
    ///
    /// A record whose unique fields are exhausted is skipped with a warning;
    /// the returned batch may therefore be shorter than `count`.
    pub fn generate_batch(&mut self, count: u64) -> Vec<Customer> {
        let mut batch = Vec::with_capacity(count as usize);
        for _ in 0..count {
            match self.next_customer() {
                Ok(customer) => batch.push(customer),
                Err(e) => warn!("Skipping record: {e}"),
            }
        }
        batch
    }

    fn unique_email(&mut self, first: &str, last: &str) -> Result<String, GeneratorError> {
        let rng = &mut self.rng;
        unique_value(&mut self.seen_emails, "email", || {
            format!(
                "{}.{}{}@{}",
                first.to_lowercase(),
                last.to_lowercase(),
                rng.random_range(1..10_000u32),
                EMAIL_DOMAINS[rng.random_range(0..EMAIL_DOMAINS.len())]
            )
        })
    }

    fn unique_phone(&mut self) -> Result<String, GeneratorError> {
        let rng = &mut self.rng;
        unique_value(&mut self.seen_phones, "phone_number", || {
            let digits = random_digits(rng, 9);
            // UK mobile shape: 07xxx xxxxxx
            format!("07{} {}", &digits[..3], &digits[3..])
        })
    }

    fn created_at(&mut self) -> DateTime<Utc> {
        let (start_ts, end_ts) = self.created_range;
        let ts = if start_ts >= end_ts {
            start_ts
        } else {
            self.rng.random_range(start_ts..=end_ts)
        };
        DateTime::from_timestamp(ts, 0).unwrap_or_else(Utc::now)
    }
}

/// Draw candidates until one is new to `seen`, up to [`MAX_UNIQUE_ATTEMPTS`].
fn unique_value(
    seen: &mut HashSet<String>,
    field: &'static str,
    mut candidate: impl FnMut() -> String,
) -> Result<String, GeneratorError> {
    for _ in 0..MAX_UNIQUE_ATTEMPTS {
        let value = candidate();
        if seen.insert(value.clone()) {
            return Ok(value);
        }
    }
    Err(GeneratorError::UniqueExhausted {
        field,
        attempts: MAX_UNIQUE_ATTEMPTS,
    })
}

/// Generate a string of exactly `count` random decimal digits.
fn random_digits(rng: &mut StdRng, count: usize) -> String {
    let mut result = String::with_capacity(count);
    for _ in 0..count {
        result.push(char::from_digit(rng.random_range(0..10), 10).unwrap());
    }
    result
}

fn created_range_ending_at(upper: DateTime<Utc>) -> (i64, i64) {
    let start = Utc
        .with_ymd_and_hms(upper.year(), 1, 1, 0, 0, 0)
        .single()
        .unwrap_or(upper);
    (start.timestamp(), upper.timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_upper() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).single().unwrap()
    }

    #[test]
    fn test_same_seed_same_batch() {
        let mut a = CustomerGenerator::new(42).with_created_before(fixed_upper());
        let mut b = CustomerGenerator::new(42).with_created_before(fixed_upper());

        assert_eq!(a.generate_batch(3), b.generate_batch(3));
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = CustomerGenerator::new(0).with_created_before(fixed_upper());
        let mut b = CustomerGenerator::new(1).with_created_before(fixed_upper());

        assert_ne!(a.generate_batch(3), b.generate_batch(3));
    }

    #[test]
    fn test_sequential_ids_from_one() {
        let mut generator = CustomerGenerator::new(0);
        let batch = generator.generate_batch(3);

        let ids: Vec<i64> = batch.iter().map(|c| c.customer_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_batch_no_larger_than_requested() {
        let mut generator = CustomerGenerator::new(7);
        assert!(generator.generate_batch(3).len() <= 3);
        assert!(CustomerGenerator::new(7).generate_batch(0).is_empty());
    }

    #[test]
    fn test_unique_fields_within_batch() {
        let mut generator = CustomerGenerator::new(42);
        let batch = generator.generate_batch(50);

        let emails: HashSet<&str> = batch.iter().map(|c| c.email.as_str()).collect();
        let phones: HashSet<&str> = batch.iter().map(|c| c.phone_number.as_str()).collect();
        assert_eq!(emails.len(), batch.len());
        assert_eq!(phones.len(), batch.len());
    }

    #[test]
    fn test_created_at_within_current_year() {
        let mut generator = CustomerGenerator::new(42);
        let batch = generator.generate_batch(20);

        let now = Utc::now();
        for customer in &batch {
            assert_eq!(customer.created_at.year(), now.year());
            assert!(customer.created_at <= now);
        }
    }

    #[test]
    fn test_phone_shape() {
        let mut generator = CustomerGenerator::new(3);
        let customer = generator.next_customer().unwrap();

        assert!(customer.phone_number.starts_with("07"));
        assert_eq!(customer.phone_number.len(), 12); // "07xxx xxxxxx"
    }

    #[test]
    fn test_unique_value_exhaustion() {
        let mut seen = HashSet::from(["taken".to_string()]);

        let err = unique_value(&mut seen, "email", || "taken".to_string()).unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::UniqueExhausted {
                field: "email",
                attempts: MAX_UNIQUE_ATTEMPTS,
            }
        ));
    }

    #[test]
    fn test_id_advances_past_skipped_record() {
        let mut generator = CustomerGenerator::new(0);

        // Simulate a skipped record: the id it consumed stays consumed.
        let _ = generator.next_customer().unwrap();
        generator.next_id += 1;

        let customer = generator.next_customer().unwrap();
        assert_eq!(customer.customer_id, 3);
    }
}
