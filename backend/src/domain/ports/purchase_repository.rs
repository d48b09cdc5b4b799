//! Port for the atomic spend-and-own unit of a purchase.

use async_trait::async_trait;

use crate::domain::Username;

use super::macros::define_port_error;

define_port_error! {
    /// Errors raised by purchase adapters.
    pub enum PurchaseRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "purchase repository connection failed: {message}",
        /// The transaction failed and was rolled back.
        Failed { message: String } =>
            "purchase transaction failed: {message}",
        /// The ownership pair already exists; nothing was debited.
        AlreadyOwned { item_key: String } =>
            "item already owned: {item_key}",
        /// The balance does not cover the price; nothing was granted.
        InsufficientFunds { balance: i64, price: i64 } =>
            "balance {balance} does not cover price {price}",
    }
}

/// The one transactional boundary of the economy: debit the account by the
/// item price and record the ownership grant, committing both or neither.
///
/// The sufficiency guard and the debit must evaluate against a single
/// consistent balance so two racing purchases cannot both pass the check
/// against the same pre-debit value. Adapters achieve this with a guarded
/// `UPDATE` inside the same transaction as the grant insert; the losing racer
/// observes the committed balance and fails, and its insert rolls back.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PurchaseRepository: Send + Sync {
    /// Atomically grant `(username, item_key)` and debit `price` coins.
    /// Returns the post-debit balance.
    async fn debit_and_grant(
        &self,
        username: &Username,
        item_key: &str,
        price: i64,
    ) -> Result<i64, PurchaseRepositoryError>;
}
