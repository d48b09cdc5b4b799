//! Port for consistent profile snapshot reads.

use async_trait::async_trait;

use crate::domain::{ProfileSnapshot, Username};

use super::macros::define_port_error;

define_port_error! {
    /// Errors raised by profile query adapters.
    pub enum ProfileQueryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "profile query connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "profile query failed: {message}",
    }
}

/// Read the account row and its owned item keys as one consistent snapshot.
///
/// The two reads run in a single transaction so a concurrent purchase is
/// observed either fully (debit and grant) or not at all.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileQuery: Send + Sync {
    /// Fetch the snapshot; `None` when no account row exists yet.
    async fn fetch(&self, username: &Username)
    -> Result<Option<ProfileSnapshot>, ProfileQueryError>;
}

/// Fixture implementation that knows no accounts.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureProfileQuery;

#[async_trait]
impl ProfileQuery for FixtureProfileQuery {
    async fn fetch(
        &self,
        _username: &Username,
    ) -> Result<Option<ProfileSnapshot>, ProfileQueryError> {
        Ok(None)
    }
}
