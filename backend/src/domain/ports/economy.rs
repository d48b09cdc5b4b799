//! Driving ports for the account economy.
//!
//! HTTP handlers depend on these traits only; `EconomyService` implements
//! both against the storage ports.

use async_trait::async_trait;

use crate::domain::{CatalogItem, Error, ProfileSnapshot, ProfileUpdate, Username};

/// Mutating economy operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EconomyCommand: Send + Sync {
    /// Pure accrual from in-game pickups. Rejects `amount <= 0`. Returns the
    /// new balance.
    async fn add_coins(&self, username: &Username, amount: i64) -> Result<i64, Error>;

    /// Generic balance update from the legacy coins endpoint. A negative
    /// delta is rejected rather than clamped; an absent delta degrades to a
    /// read. Returns the committed balance.
    async fn update_coins(&self, username: &Username, delta: Option<i64>) -> Result<i64, Error>;

    /// Spend-and-own. Returns the post-debit balance.
    async fn purchase(&self, username: &Username, item_key: &str) -> Result<i64, Error>;

    /// Select an owned item as the active cosmetic for its category.
    async fn equip(&self, username: &Username, item_key: &str) -> Result<(), Error>;

    /// Legacy client sync path: partial profile write, committed as one
    /// transaction. Returns the resulting snapshot.
    async fn update_profile(
        &self,
        username: &Username,
        update: ProfileUpdate,
    ) -> Result<ProfileSnapshot, Error>;
}

/// Read-only economy projections.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EconomyQuery: Send + Sync {
    /// Full client-visible state in one consistent snapshot, creating the
    /// account on first reference.
    async fn profile(&self, username: &Username) -> Result<ProfileSnapshot, Error>;

    /// The shop catalog in display order.
    async fn list_items(&self) -> Result<Vec<CatalogItem>, Error>;
}

/// Fixture command implementation: every mutation succeeds with zeroed
/// results.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEconomyCommand;

#[async_trait]
impl EconomyCommand for FixtureEconomyCommand {
    async fn add_coins(&self, _username: &Username, amount: i64) -> Result<i64, Error> {
        Ok(amount.max(0))
    }

    async fn update_coins(&self, _username: &Username, delta: Option<i64>) -> Result<i64, Error> {
        Ok(delta.unwrap_or(0).max(0))
    }

    async fn purchase(&self, _username: &Username, _item_key: &str) -> Result<i64, Error> {
        Ok(0)
    }

    async fn equip(&self, _username: &Username, _item_key: &str) -> Result<(), Error> {
        Ok(())
    }

    async fn update_profile(
        &self,
        username: &Username,
        _update: ProfileUpdate,
    ) -> Result<ProfileSnapshot, Error> {
        Ok(ProfileSnapshot::from_account(
            crate::domain::Account::new(username.clone()),
            Vec::new(),
        ))
    }
}

/// Fixture query implementation: fresh accounts, empty catalog.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEconomyQuery;

#[async_trait]
impl EconomyQuery for FixtureEconomyQuery {
    async fn profile(&self, username: &Username) -> Result<ProfileSnapshot, Error> {
        Ok(ProfileSnapshot::from_account(
            crate::domain::Account::new(username.clone()),
            Vec::new(),
        ))
    }

    async fn list_items(&self) -> Result<Vec<CatalogItem>, Error> {
        Ok(Vec::new())
    }
}
