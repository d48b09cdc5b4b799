//! PostgreSQL-backed `MessageRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{MessageRepository, MessageRepositoryError};
use crate::domain::{Message, Username};

use super::diesel_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{MessageRow, NewMessageRow};
use super::pool::{DbPool, PoolError};
use super::schema::messages;

/// Diesel-backed implementation of the `MessageRepository` port.
#[derive(Clone)]
pub struct DieselMessageRepository {
    pool: DbPool,
}

impl DieselMessageRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain message repository errors.
fn map_pool_error(error: PoolError) -> MessageRepositoryError {
    map_basic_pool_error(error, MessageRepositoryError::connection)
}

/// Map Diesel errors to domain message repository errors.
fn map_diesel_error(error: diesel::result::Error) -> MessageRepositoryError {
    map_basic_diesel_error(
        error,
        MessageRepositoryError::query,
        MessageRepositoryError::connection,
    )
}

#[async_trait]
impl MessageRepository for DieselMessageRepository {
    async fn list(&self, limit: i64) -> Result<Vec<Message>, MessageRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Oldest first so clients append new posts at the bottom.
        let rows: Vec<MessageRow> = messages::table
            .select(MessageRow::as_select())
            .order_by(messages::created_at.asc())
            .limit(limit)
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn post(
        &self,
        username: &Username,
        content: &str,
    ) -> Result<Message, MessageRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: MessageRow = diesel::insert_into(messages::table)
            .values(&NewMessageRow {
                content,
                username: username.as_str(),
            })
            .returning(MessageRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn delete(&self, id: i32) -> Result<bool, MessageRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(messages::table.filter(messages::id.eq(id)))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let repo_err = map_pool_error(PoolError::checkout("refused"));

        assert!(matches!(repo_err, MessageRepositoryError::Connection { .. }));
    }

    #[rstest]
    fn diesel_error_maps_to_query_error() {
        let repo_err = map_diesel_error(diesel::result::Error::NotFound);

        assert!(matches!(repo_err, MessageRepositoryError::Query { .. }));
    }
}
