//! Port for leaderboard score persistence.

use async_trait::async_trait;

use crate::domain::{ScoreEntry, Username};

use super::macros::define_port_error;

define_port_error! {
    /// Errors raised by score repository adapters.
    pub enum ScoreRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "score repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "score repository query failed: {message}",
    }
}

/// Append/list storage for survival-time records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    /// Best `limit` scores, longest survival first.
    async fn top(&self, limit: i64) -> Result<Vec<ScoreEntry>, ScoreRepositoryError>;

    /// Append a record and return it with its assigned id and timestamp.
    async fn submit(
        &self,
        username: &Username,
        survival_time: f64,
    ) -> Result<ScoreEntry, ScoreRepositoryError>;
}
