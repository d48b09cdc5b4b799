//! PostgreSQL-backed `OwnershipLedger` implementation using Diesel ORM.
//!
//! Grants rely on the unique `(username, item_key)` constraint: a repeated
//! grant surfaces as a duplicate rather than silently inserting a second row.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{OwnershipLedger, OwnershipLedgerError};
use crate::domain::Username;

use super::diesel_error_mapping::{
    is_unique_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::NewOwnedItemRow;
use super::pool::{DbPool, PoolError};
use super::schema::owned_items;

/// Diesel-backed implementation of the `OwnershipLedger` port.
#[derive(Clone)]
pub struct DieselOwnershipLedger {
    pool: DbPool,
}

impl DieselOwnershipLedger {
    /// Create a new ledger with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain ownership ledger errors.
fn map_pool_error(error: PoolError) -> OwnershipLedgerError {
    map_basic_pool_error(error, OwnershipLedgerError::connection)
}

/// Map Diesel errors to domain ownership ledger errors.
fn map_diesel_error(error: diesel::result::Error) -> OwnershipLedgerError {
    map_basic_diesel_error(
        error,
        OwnershipLedgerError::query,
        OwnershipLedgerError::connection,
    )
}

#[async_trait]
impl OwnershipLedger for DieselOwnershipLedger {
    async fn is_owned(
        &self,
        username: &Username,
        item_key: &str,
    ) -> Result<bool, OwnershipLedgerError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let count: i64 = owned_items::table
            .filter(
                owned_items::username
                    .eq(username.as_str())
                    .and(owned_items::item_key.eq(item_key)),
            )
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(count > 0)
    }

    async fn grant(
        &self,
        username: &Username,
        item_key: &str,
    ) -> Result<(), OwnershipLedgerError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewOwnedItemRow {
            username: username.as_str(),
            item_key,
        };

        diesel::insert_into(owned_items::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map_err(|error| {
                if is_unique_violation(&error) {
                    OwnershipLedgerError::duplicate_grant(username.as_str(), item_key)
                } else {
                    map_diesel_error(error)
                }
            })?;

        Ok(())
    }
}
