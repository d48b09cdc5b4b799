//! PostgreSQL-backed `AccountRepository` implementation using Diesel ORM.
//!
//! This adapter implements the domain's `AccountRepository` port. Accounts are
//! created implicitly on first reference; the primary-key constraint on
//! `accounts.username` makes concurrent first references converge on a single
//! row. Coin adjustments clamp at zero inside one UPDATE statement.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{AccountRepository, AccountRepositoryError};
use crate::domain::{Account, ItemCategory, ProfileUpdate, Username, DEFAULT_SKIN};

use super::diesel_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{AccountChangeset, AccountRow, NewAccountRow};
use super::pool::{DbPool, PoolError};
use super::schema::accounts;
use super::sql_functions::greatest;

/// Diesel-backed implementation of the `AccountRepository` port.
#[derive(Clone)]
pub struct DieselAccountRepository {
    pool: DbPool,
}

impl DieselAccountRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain account repository errors.
fn map_pool_error(error: PoolError) -> AccountRepositoryError {
    map_basic_pool_error(error, AccountRepositoryError::connection)
}

/// Map Diesel errors to domain account repository errors.
fn map_diesel_error(error: diesel::result::Error) -> AccountRepositoryError {
    map_basic_diesel_error(
        error,
        AccountRepositoryError::query,
        AccountRepositoryError::connection,
    )
}

#[async_trait]
impl AccountRepository for DieselAccountRepository {
    async fn get_or_create(&self, username: &Username) -> Result<Account, AccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewAccountRow {
            username: username.as_str(),
            coins: 0,
            player_skin: DEFAULT_SKIN,
            enemy_skin: DEFAULT_SKIN,
        };

        // A concurrent insert for the same username loses to the primary-key
        // constraint; `do_nothing` turns that loss into zero affected rows and
        // the read below returns the winner's row.
        diesel::insert_into(accounts::table)
            .values(&new_row)
            .on_conflict(accounts::username)
            .do_nothing()
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let row: AccountRow = accounts::table
            .filter(accounts::username.eq(username.as_str()))
            .select(AccountRow::as_select())
            .first(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn adjust_coins(
        &self,
        username: &Username,
        delta: i64,
    ) -> Result<i64, AccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let balance: i64 = diesel::update(
            accounts::table.filter(accounts::username.eq(username.as_str())),
        )
        .set(accounts::coins.eq(greatest(accounts::coins + delta, 0)))
        .returning(accounts::coins)
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(balance)
    }

    async fn set_equipped(
        &self,
        username: &Username,
        category: ItemCategory,
        item_key: &str,
    ) -> Result<(), AccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let target = accounts::table.filter(accounts::username.eq(username.as_str()));
        let updated = match category {
            ItemCategory::Player => {
                diesel::update(target)
                    .set(accounts::player_skin.eq(item_key))
                    .execute(&mut conn)
                    .await
            }
            ItemCategory::Enemy => {
                diesel::update(target)
                    .set(accounts::enemy_skin.eq(item_key))
                    .execute(&mut conn)
                    .await
            }
        }
        .map_err(map_diesel_error)?;

        if updated == 0 {
            return Err(AccountRepositoryError::query("account not found"));
        }
        Ok(())
    }

    async fn set_profile(
        &self,
        username: &Username,
        update: &ProfileUpdate,
    ) -> Result<Account, AccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let target = accounts::table.filter(accounts::username.eq(username.as_str()));

        // Diesel rejects a changeset with no columns, so an empty update
        // degrades to a read.
        if update.is_empty() {
            let row: AccountRow = target
                .select(AccountRow::as_select())
                .first(&mut conn)
                .await
                .map_err(map_diesel_error)?;
            return Ok(row.into());
        }

        // One UPDATE ... RETURNING applies every supplied column atomically;
        // `None` fields stay out of the statement.
        let row: AccountRow = diesel::update(target)
            .set(AccountChangeset::from(update))
            .returning(AccountRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }
}
