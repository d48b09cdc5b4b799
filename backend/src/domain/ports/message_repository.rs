//! Port for message board persistence.

use async_trait::async_trait;

use crate::domain::{Message, Username};

use super::macros::define_port_error;

define_port_error! {
    /// Errors raised by message repository adapters.
    pub enum MessageRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "message repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "message repository query failed: {message}",
    }
}

/// Append/list/delete storage for public board messages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Oldest messages first, capped at `limit`.
    async fn list(&self, limit: i64) -> Result<Vec<Message>, MessageRepositoryError>;

    /// Append a message and return it with its assigned id and timestamp.
    async fn post(
        &self,
        username: &Username,
        content: &str,
    ) -> Result<Message, MessageRepositoryError>;

    /// Delete by id. Returns `false` when no such message exists.
    async fn delete(&self, id: i32) -> Result<bool, MessageRepositoryError>;
}
