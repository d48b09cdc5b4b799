//! Public message board: append, list, and admin-gated deletion.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use tracing::info;

use crate::domain::ports::{
    AdminAuthorization, MessageBoard, MessageRepository, MessageRepositoryError,
};
use crate::domain::{Error, Username};

/// One board message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: i32,
    pub content: String,
    pub username: Username,
    pub created_at: DateTime<Utc>,
}

/// Domain service implementing [`MessageBoard`].
#[derive(Clone)]
pub struct MessageBoardService<R, A> {
    messages: Arc<R>,
    admin: Arc<A>,
}

impl<R, A> MessageBoardService<R, A> {
    /// Create a service over the given message store and admin check.
    pub fn new(messages: Arc<R>, admin: Arc<A>) -> Self {
        Self { messages, admin }
    }
}

fn map_message_error(error: MessageRepositoryError) -> Error {
    Error::internal(format!("message store failure: {error}"))
}

#[async_trait]
impl<R, A> MessageBoard for MessageBoardService<R, A>
where
    R: MessageRepository,
    A: AdminAuthorization,
{
    async fn list(&self, limit: i64) -> Result<Vec<Message>, Error> {
        self.messages.list(limit).await.map_err(map_message_error)
    }

    async fn post(&self, username: &Username, content: &str) -> Result<Message, Error> {
        let content = content.trim();
        if content.is_empty() {
            return Err(Error::invalid_request("Empty content").with_details(json!({
                "field": "content",
                "code": "empty_content",
            })));
        }
        self.messages
            .post(username, content)
            .await
            .map_err(map_message_error)
    }

    async fn delete(&self, id: i32, token: &str) -> Result<(), Error> {
        if !self.admin.authorize(token) {
            return Err(Error::forbidden("forbidden"));
        }
        let deleted = self
            .messages
            .delete(id)
            .await
            .map_err(map_message_error)?;
        if !deleted {
            return Err(Error::not_found("Not found"));
        }
        info!(message_id = id, "message deleted by admin");
        Ok(())
    }
}
