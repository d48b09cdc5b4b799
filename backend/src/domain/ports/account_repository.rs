//! Port for durable account storage.

use async_trait::async_trait;

use crate::domain::{Account, ItemCategory, ProfileUpdate, Username};

use super::macros::define_port_error;

define_port_error! {
    /// Errors raised by account repository adapters.
    pub enum AccountRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "account repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "account repository query failed: {message}",
    }
}

/// Port for account persistence.
///
/// Accounts are created implicitly the first time a username is referenced.
/// Implementations must guarantee at most one row per username even under
/// concurrent first reference: a unique constraint decides the winner and the
/// loser re-reads the committed row instead of erroring.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Return the existing account, or persist and return a fresh
    /// zero-balance one.
    async fn get_or_create(&self, username: &Username) -> Result<Account, AccountRepositoryError>;

    /// Apply `delta` to the balance atomically and return the committed
    /// value.
    ///
    /// A result that would cross below zero is clamped to zero in storage;
    /// the game never shows negative currency, so the crossing delta is
    /// absorbed rather than rejected. The new value must never be computed
    /// from a stale read.
    async fn adjust_coins(
        &self,
        username: &Username,
        delta: i64,
    ) -> Result<i64, AccountRepositoryError>;

    /// Write the equipped-slot for `category`. Callers verify ownership
    /// first.
    async fn set_equipped(
        &self,
        username: &Username,
        category: ItemCategory,
        item_key: &str,
    ) -> Result<(), AccountRepositoryError>;

    /// Apply a partial profile update in one transaction and return the
    /// committed account.
    async fn set_profile(
        &self,
        username: &Username,
        update: &ProfileUpdate,
    ) -> Result<Account, AccountRepositoryError>;
}

/// Fixture implementation backed by nothing: every lookup yields a fresh
/// zero-balance account. Useful in tests that do not exercise persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAccountRepository;

#[async_trait]
impl AccountRepository for FixtureAccountRepository {
    async fn get_or_create(&self, username: &Username) -> Result<Account, AccountRepositoryError> {
        Ok(Account::new(username.clone()))
    }

    async fn adjust_coins(
        &self,
        _username: &Username,
        delta: i64,
    ) -> Result<i64, AccountRepositoryError> {
        Ok(delta.max(0))
    }

    async fn set_equipped(
        &self,
        _username: &Username,
        _category: ItemCategory,
        _item_key: &str,
    ) -> Result<(), AccountRepositoryError> {
        Ok(())
    }

    async fn set_profile(
        &self,
        username: &Username,
        update: &ProfileUpdate,
    ) -> Result<Account, AccountRepositoryError> {
        let mut account = Account::new(username.clone());
        if let Some(skin) = &update.player_skin {
            account.player_skin = skin.clone();
        }
        if let Some(skin) = &update.enemy_skin {
            account.enemy_skin = skin.clone();
        }
        if let Some(coins) = update.coins {
            account.coins = coins.max(0);
        }
        Ok(account)
    }
}
