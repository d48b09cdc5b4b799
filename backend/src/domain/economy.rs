//! Economy service: the orchestration layer for coins, purchases, and
//! equipping.
//!
//! Every multi-store operation goes through this service so the invariants
//! (non-negative balances, at-most-once ownership, atomic spend-and-own) hold
//! even under concurrent callers. The service performs fail-fast checks
//! before mutating anything; the storage-level guards inside the purchase
//! unit remain authoritative when two requests race past the same pre-check.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{
    AccountRepository, AccountRepositoryError, CatalogRepository, CatalogRepositoryError,
    EconomyCommand, EconomyQuery, OwnershipLedger, OwnershipLedgerError, ProfileQuery,
    ProfileQueryError, PurchaseRepository, PurchaseRepositoryError,
};
use crate::domain::{
    CatalogItem, Error, ProfileSnapshot, ProfileUpdate, Username,
};

/// Domain service implementing [`EconomyCommand`] and [`EconomyQuery`].
#[derive(Clone)]
pub struct EconomyService<A, C, O, P, Q> {
    accounts: Arc<A>,
    catalog: Arc<C>,
    ledger: Arc<O>,
    purchases: Arc<P>,
    profiles: Arc<Q>,
}

impl<A, C, O, P, Q> EconomyService<A, C, O, P, Q> {
    /// Create a service over the given storage ports.
    pub fn new(
        accounts: Arc<A>,
        catalog: Arc<C>,
        ledger: Arc<O>,
        purchases: Arc<P>,
        profiles: Arc<Q>,
    ) -> Self {
        Self {
            accounts,
            catalog,
            ledger,
            purchases,
            profiles,
        }
    }
}

fn map_account_error(error: AccountRepositoryError) -> Error {
    Error::internal(format!("account store failure: {error}"))
}

fn map_catalog_error(error: CatalogRepositoryError) -> Error {
    Error::internal(format!("catalog failure: {error}"))
}

fn map_ledger_error(error: OwnershipLedgerError) -> Error {
    match error {
        OwnershipLedgerError::DuplicateGrant { .. } => Error::already_owned("Item already owned"),
        other => Error::internal(format!("ownership ledger failure: {other}")),
    }
}

fn map_profile_error(error: ProfileQueryError) -> Error {
    Error::internal(format!("profile read failure: {error}"))
}

fn negative_coins_error(field: &str) -> Error {
    Error::invalid_request("Coin values must not be negative").with_details(json!({
        "field": field,
        "code": "negative_coins",
    }))
}

impl<A, C, O, P, Q> EconomyService<A, C, O, P, Q>
where
    A: AccountRepository,
    C: CatalogRepository,
    O: OwnershipLedger,
    P: PurchaseRepository,
    Q: ProfileQuery,
{
    async fn resolve_item(&self, item_key: &str) -> Result<CatalogItem, Error> {
        self.catalog
            .find_by_key(item_key)
            .await
            .map_err(map_catalog_error)?
            .ok_or_else(|| Error::not_found("Item not found"))
    }

    async fn snapshot(&self, username: &Username) -> Result<ProfileSnapshot, Error> {
        if let Some(snapshot) = self
            .profiles
            .fetch(username)
            .await
            .map_err(map_profile_error)?
        {
            return Ok(snapshot);
        }
        // First reference: persist the account, which starts with no items.
        let account = self
            .accounts
            .get_or_create(username)
            .await
            .map_err(map_account_error)?;
        Ok(ProfileSnapshot::from_account(account, Vec::new()))
    }
}

#[async_trait]
impl<A, C, O, P, Q> EconomyCommand for EconomyService<A, C, O, P, Q>
where
    A: AccountRepository,
    C: CatalogRepository,
    O: OwnershipLedger,
    P: PurchaseRepository,
    Q: ProfileQuery,
{
    async fn add_coins(&self, username: &Username, amount: i64) -> Result<i64, Error> {
        if amount <= 0 {
            return Err(
                Error::invalid_request("Coin amount must be positive").with_details(json!({
                    "field": "coins",
                    "code": "non_positive_amount",
                })),
            );
        }
        self.accounts
            .get_or_create(username)
            .await
            .map_err(map_account_error)?;
        let balance = self
            .accounts
            .adjust_coins(username, amount)
            .await
            .map_err(map_account_error)?;
        debug!(username = %username, amount, balance, "coins accrued");
        Ok(balance)
    }

    async fn update_coins(&self, username: &Username, delta: Option<i64>) -> Result<i64, Error> {
        let account = self
            .accounts
            .get_or_create(username)
            .await
            .map_err(map_account_error)?;
        match delta {
            None | Some(0) => Ok(account.coins),
            Some(d) if d < 0 => Err(negative_coins_error("coins")),
            Some(d) => self
                .accounts
                .adjust_coins(username, d)
                .await
                .map_err(map_account_error),
        }
    }

    async fn purchase(&self, username: &Username, item_key: &str) -> Result<i64, Error> {
        let item = self.resolve_item(item_key).await?;
        let account = self
            .accounts
            .get_or_create(username)
            .await
            .map_err(map_account_error)?;

        if self
            .ledger
            .is_owned(username, &item.key)
            .await
            .map_err(map_ledger_error)?
        {
            return Err(Error::already_owned("Item already owned"));
        }
        if account.coins < item.price {
            return Err(Error::insufficient_funds("Not enough coins"));
        }

        // The debit and the grant commit together or not at all; the unit's
        // own guards decide any race that slipped past the checks above.
        match self
            .purchases
            .debit_and_grant(username, &item.key, item.price)
            .await
        {
            Ok(balance) => {
                info!(
                    username = %username,
                    item_key = %item.key,
                    price = item.price,
                    balance,
                    "purchase committed"
                );
                Ok(balance)
            }
            Err(PurchaseRepositoryError::AlreadyOwned { .. }) => {
                Err(Error::already_owned("Item already owned"))
            }
            Err(PurchaseRepositoryError::InsufficientFunds { .. }) => {
                Err(Error::insufficient_funds("Not enough coins"))
            }
            Err(other) => Err(Error::internal(format!("purchase failed: {other}"))),
        }
    }

    async fn equip(&self, username: &Username, item_key: &str) -> Result<(), Error> {
        // The catalog stays authoritative for category routing: an item
        // removed from the catalog cannot be equipped even when still owned.
        let item = self.resolve_item(item_key).await?;
        if !self
            .ledger
            .is_owned(username, &item.key)
            .await
            .map_err(map_ledger_error)?
        {
            return Err(Error::not_owned("Item not owned"));
        }
        self.accounts
            .set_equipped(username, item.category, &item.key)
            .await
            .map_err(map_account_error)?;
        debug!(username = %username, item_key = %item.key, category = %item.category, "item equipped");
        Ok(())
    }

    async fn update_profile(
        &self,
        username: &Username,
        update: ProfileUpdate,
    ) -> Result<ProfileSnapshot, Error> {
        if update.coins.is_some_and(|coins| coins < 0) {
            return Err(negative_coins_error("coins"));
        }
        // The partial write only touches existing rows, so a first-reference
        // username must be materialised before it.
        self.accounts
            .get_or_create(username)
            .await
            .map_err(map_account_error)?;
        self.accounts
            .set_profile(username, &update)
            .await
            .map_err(map_account_error)?;
        self.snapshot(username).await
    }
}

#[async_trait]
impl<A, C, O, P, Q> EconomyQuery for EconomyService<A, C, O, P, Q>
where
    A: AccountRepository,
    C: CatalogRepository,
    O: OwnershipLedger,
    P: PurchaseRepository,
    Q: ProfileQuery,
{
    async fn profile(&self, username: &Username) -> Result<ProfileSnapshot, Error> {
        self.snapshot(username).await
    }

    async fn list_items(&self) -> Result<Vec<CatalogItem>, Error> {
        self.catalog.list().await.map_err(map_catalog_error)
    }
}

#[cfg(test)]
#[path = "economy_tests.rs"]
mod tests;
