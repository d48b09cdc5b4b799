//! PostgreSQL-backed `ScoreRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ScoreRepository, ScoreRepositoryError};
use crate::domain::{ScoreEntry, Username};

use super::diesel_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewScoreRow, ScoreRow};
use super::pool::{DbPool, PoolError};
use super::schema::scores;

/// Diesel-backed implementation of the `ScoreRepository` port.
#[derive(Clone)]
pub struct DieselScoreRepository {
    pool: DbPool,
}

impl DieselScoreRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain score repository errors.
fn map_pool_error(error: PoolError) -> ScoreRepositoryError {
    map_basic_pool_error(error, ScoreRepositoryError::connection)
}

/// Map Diesel errors to domain score repository errors.
fn map_diesel_error(error: diesel::result::Error) -> ScoreRepositoryError {
    map_basic_diesel_error(
        error,
        ScoreRepositoryError::query,
        ScoreRepositoryError::connection,
    )
}

#[async_trait]
impl ScoreRepository for DieselScoreRepository {
    async fn top(&self, limit: i64) -> Result<Vec<ScoreEntry>, ScoreRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ScoreRow> = scores::table
            .select(ScoreRow::as_select())
            .order_by(scores::survival_time.desc())
            .limit(limit)
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn submit(
        &self,
        username: &Username,
        survival_time: f64,
    ) -> Result<ScoreEntry, ScoreRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: ScoreRow = diesel::insert_into(scores::table)
            .values(&NewScoreRow {
                username: username.as_str(),
                survival_time,
            })
            .returning(ScoreRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
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

        assert!(matches!(repo_err, ScoreRepositoryError::Connection { .. }));
    }

    #[rstest]
    fn diesel_error_maps_to_query_error() {
        let repo_err = map_diesel_error(diesel::result::Error::NotFound);

        assert!(matches!(repo_err, ScoreRepositoryError::Query { .. }));
    }
}
