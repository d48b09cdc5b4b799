//! PostgreSQL-backed `ProfileQuery` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncConnection as _, RunQueryDsl};

use crate::domain::ports::{ProfileQuery, ProfileQueryError};
use crate::domain::{ProfileSnapshot, Username};

use super::diesel_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::AccountRow;
use super::pool::{DbPool, PoolError};
use super::schema::{accounts, owned_items};

/// Diesel-backed implementation of the `ProfileQuery` port.
///
/// Reads the account row and its owned item keys inside one transaction so a
/// concurrent purchase cannot produce a snapshot whose balance and ownership
/// list disagree.
#[derive(Clone)]
pub struct DieselProfileQuery {
    pool: DbPool,
}

impl DieselProfileQuery {
    /// Create a new query adapter with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain profile query errors.
fn map_pool_error(error: PoolError) -> ProfileQueryError {
    map_basic_pool_error(error, ProfileQueryError::connection)
}

/// Map Diesel errors to domain profile query errors.
fn map_diesel_error(error: diesel::result::Error) -> ProfileQueryError {
    map_basic_diesel_error(
        error,
        ProfileQueryError::query,
        ProfileQueryError::connection,
    )
}

#[async_trait]
impl ProfileQuery for DieselProfileQuery {
    async fn fetch(
        &self,
        username: &Username,
    ) -> Result<Option<ProfileSnapshot>, ProfileQueryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let result: Option<(AccountRow, Vec<String>)> = conn
            .transaction(|conn| {
                async move {
                    let account: Option<AccountRow> = accounts::table
                        .filter(accounts::username.eq(username.as_str()))
                        .select(AccountRow::as_select())
                        .first(conn)
                        .await
                        .optional()?;

                    let Some(account) = account else {
                        return Ok(None);
                    };

                    let owned: Vec<String> = owned_items::table
                        .filter(owned_items::username.eq(username.as_str()))
                        .select(owned_items::item_key)
                        .order_by(owned_items::id.asc())
                        .load(conn)
                        .await?;

                    Ok(Some((account, owned)))
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(result.map(|(account, owned_items)| {
            ProfileSnapshot::from_account(account.into(), owned_items)
        }))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let query_err = map_pool_error(PoolError::checkout("refused"));

        assert!(matches!(query_err, ProfileQueryError::Connection { .. }));
    }

    #[rstest]
    fn diesel_error_maps_to_query_error() {
        let query_err = map_diesel_error(diesel::result::Error::NotFound);

        assert!(matches!(query_err, ProfileQueryError::Query { .. }));
    }
}
