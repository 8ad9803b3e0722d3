//! Parameterized INSERT execution for customer records.

use crate::error::SeedError;
use crate::record::Customer;
use tokio_postgres::Transaction;

/// Build the single-row INSERT statement for the destination table.
///
/// The destination schema names these columns `name` and `unit` even though
/// the bound values are the customer's first and last name. The mismatch is
/// inherited from the system being reproduced and is deliberately preserved;
/// see DESIGN.md.
pub fn insert_statement(table: &str) -> String {
    format!("INSERT INTO \"{table}\" (\"name\", \"unit\") VALUES ($1, $2)")
}

/// Insert each customer with one parameterized statement execution.
///
/// Values are always bound as parameters, never interpolated into the SQL
/// text. The caller owns the transaction and the single commit.
pub async fn insert_customers(
    tx: &Transaction<'_>,
    table: &str,
    customers: &[Customer],
) -> Result<u64, SeedError> {
    if customers.is_empty() {
        return Ok(0);
    }

    let stmt = tx.prepare(&insert_statement(table)).await?;

    let mut inserted = 0u64;
    for customer in customers {
        inserted += tx
            .execute(&stmt, &[&customer.first_name, &customer.last_name])
            .await?;
    }

    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_statement() {
        let sql = insert_statement("ingredients");

        assert_eq!(
            sql,
            "INSERT INTO \"ingredients\" (\"name\", \"unit\") VALUES ($1, $2)"
        );
    }

    #[test]
    fn test_insert_statement_binds_two_parameters() {
        let sql = insert_statement("customers");

        assert_eq!(sql.matches('$').count(), 2);
        assert!(!sql.contains('\''));
    }
}
