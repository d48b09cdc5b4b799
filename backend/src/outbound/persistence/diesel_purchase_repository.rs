//! PostgreSQL-backed `PurchaseRepository` implementation using Diesel ORM.
//!
//! A purchase is one transaction: grant the item, then debit the buyer with a
//! balance guard. Either statement failing rolls the whole purchase back, so
//! no state exists where coins were spent without the item (or vice versa).

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncConnection as _, RunQueryDsl};

use crate::domain::ports::{PurchaseRepository, PurchaseRepositoryError};
use crate::domain::Username;

use super::diesel_error_mapping::map_basic_pool_error;
use super::models::NewOwnedItemRow;
use super::pool::{DbPool, PoolError};
use super::schema::{accounts, owned_items};

/// Diesel-backed implementation of the `PurchaseRepository` port.
#[derive(Clone)]
pub struct DieselPurchaseRepository {
    pool: DbPool,
}

impl DieselPurchaseRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain purchase repository errors.
fn map_pool_error(error: PoolError) -> PurchaseRepositoryError {
    map_basic_pool_error(error, PurchaseRepositoryError::connection)
}

/// Outcome carrier for the purchase transaction closure.
///
/// `conn.transaction` requires its error type to absorb raw Diesel errors so
/// a statement failure aborts the transaction; the domain outcomes ride along
/// in their own variants and trigger the same rollback.
#[derive(Debug)]
enum PurchaseTxError {
    AlreadyOwned,
    InsufficientFunds { balance: i64 },
    Diesel(diesel::result::Error),
}

impl From<diesel::result::Error> for PurchaseTxError {
    fn from(error: diesel::result::Error) -> Self {
        Self::Diesel(error)
    }
}

fn map_tx_error(error: PurchaseTxError, item_key: &str, price: i64) -> PurchaseRepositoryError {
    match error {
        PurchaseTxError::AlreadyOwned => PurchaseRepositoryError::already_owned(item_key),
        PurchaseTxError::InsufficientFunds { balance } => {
            PurchaseRepositoryError::insufficient_funds(balance, price)
        }
        PurchaseTxError::Diesel(error) => {
            tracing::debug!(%error, "purchase transaction failed");
            PurchaseRepositoryError::failed(error.to_string())
        }
    }
}

#[async_trait]
impl PurchaseRepository for DieselPurchaseRepository {
    async fn debit_and_grant(
        &self,
        username: &Username,
        item_key: &str,
        price: i64,
    ) -> Result<i64, PurchaseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let balance = conn
            .transaction(|conn| {
                async move {
                    // The unique pair constraint arbitrates duplicate buys:
                    // zero affected rows means another request (or an earlier
                    // one) already granted this item.
                    let granted = diesel::insert_into(owned_items::table)
                        .values(&NewOwnedItemRow {
                            username: username.as_str(),
                            item_key,
                        })
                        .on_conflict((owned_items::username, owned_items::item_key))
                        .do_nothing()
                        .execute(conn)
                        .await?;
                    if granted == 0 {
                        return Err(PurchaseTxError::AlreadyOwned);
                    }

                    // Guarded debit: the balance predicate makes concurrent
                    // purchases serialise on the account row, so the losing
                    // request sees the post-debit balance and fails here.
                    let debited: Option<i64> = diesel::update(
                        accounts::table.filter(
                            accounts::username
                                .eq(username.as_str())
                                .and(accounts::coins.ge(price)),
                        ),
                    )
                    .set(accounts::coins.eq(accounts::coins - price))
                    .returning(accounts::coins)
                    .get_result(conn)
                    .await
                    .optional()?;

                    match debited {
                        Some(balance) => Ok(balance),
                        None => {
                            let balance: i64 = accounts::table
                                .filter(accounts::username.eq(username.as_str()))
                                .select(accounts::coins)
                                .first(conn)
                                .await?;
                            Err(PurchaseTxError::InsufficientFunds { balance })
                        }
                    }
                }
                .scope_boxed()
            })
            .await
            .map_err(|error| map_tx_error(error, item_key, price))?;

        Ok(balance)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let repo_err = map_pool_error(PoolError::checkout("pool exhausted"));

        assert!(matches!(
            repo_err,
            PurchaseRepositoryError::Connection { .. }
        ));
    }

    #[rstest]
    fn already_owned_outcome_carries_item_key() {
        let repo_err = map_tx_error(PurchaseTxError::AlreadyOwned, "skin_blue", 50);

        assert!(matches!(
            repo_err,
            PurchaseRepositoryError::AlreadyOwned { .. }
        ));
        assert!(repo_err.to_string().contains("skin_blue"));
    }

    #[rstest]
    fn insufficient_funds_outcome_carries_balance_and_price() {
        let repo_err = map_tx_error(
            PurchaseTxError::InsufficientFunds { balance: 10 },
            "skin_blue",
            50,
        );

        assert!(matches!(
            repo_err,
            PurchaseRepositoryError::InsufficientFunds {
                balance: 10,
                price: 50,
            }
        ));
    }

    #[rstest]
    fn diesel_outcome_maps_to_failed() {
        let repo_err = map_tx_error(
            PurchaseTxError::Diesel(diesel::result::Error::RollbackTransaction),
            "skin_blue",
            50,
        );

        assert!(matches!(repo_err, PurchaseRepositoryError::Failed { .. }));
    }
}
