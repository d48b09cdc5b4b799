//! Port for the ownership ledger: durable `(username, item_key)` grants.

use async_trait::async_trait;

use crate::domain::Username;

use super::macros::define_port_error;

define_port_error! {
    /// Errors raised by ownership ledger adapters.
    pub enum OwnershipLedgerError {
        /// Ledger connection could not be established.
        Connection { message: String } =>
            "ownership ledger connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "ownership ledger query failed: {message}",
        /// The pair is already recorded. A double-grant must surface rather
        /// than silently succeed, since it corresponds to double-charging
        /// semantics elsewhere.
        DuplicateGrant { username: String, item_key: String } =>
            "{username} already owns {item_key}",
    }
}

/// Durable record of which items each account has purchased.
///
/// Records are created only as the side effect of a successful purchase and
/// are never mutated or deleted by the economy. The pair is unique in
/// storage; adapters surface a violated constraint as
/// [`OwnershipLedgerError::DuplicateGrant`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OwnershipLedger: Send + Sync {
    /// Whether the account owns the item.
    async fn is_owned(
        &self,
        username: &Username,
        item_key: &str,
    ) -> Result<bool, OwnershipLedgerError>;

    /// Record a grant. Fails with [`OwnershipLedgerError::DuplicateGrant`]
    /// when the pair already exists.
    async fn grant(&self, username: &Username, item_key: &str) -> Result<(), OwnershipLedgerError>;
}

/// Fixture implementation that owns nothing and accepts every grant.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureOwnershipLedger;

#[async_trait]
impl OwnershipLedger for FixtureOwnershipLedger {
    async fn is_owned(
        &self,
        _username: &Username,
        _item_key: &str,
    ) -> Result<bool, OwnershipLedgerError> {
        Ok(false)
    }

    async fn grant(
        &self,
        _username: &Username,
        _item_key: &str,
    ) -> Result<(), OwnershipLedgerError> {
        Ok(())
    }
}
