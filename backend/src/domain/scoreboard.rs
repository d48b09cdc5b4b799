//! Leaderboard: append/list survival-time records.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::ports::{Scoreboard, ScoreRepository, ScoreRepositoryError};
use crate::domain::{Error, Username};

/// One recorded run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreEntry {
    pub id: i32,
    pub username: Username,
    pub survival_time: f64,
    pub created_at: DateTime<Utc>,
}

/// Domain service implementing [`Scoreboard`].
#[derive(Clone)]
pub struct ScoreboardService<R> {
    scores: Arc<R>,
}

impl<R> ScoreboardService<R> {
    /// Create a service over the given score store.
    pub fn new(scores: Arc<R>) -> Self {
        Self { scores }
    }
}

fn map_score_error(error: ScoreRepositoryError) -> Error {
    Error::internal(format!("score store failure: {error}"))
}

#[async_trait]
impl<R> Scoreboard for ScoreboardService<R>
where
    R: ScoreRepository,
{
    async fn top(&self, limit: i64) -> Result<Vec<ScoreEntry>, Error> {
        self.scores.top(limit).await.map_err(map_score_error)
    }

    async fn submit(&self, username: &Username, survival_time: f64) -> Result<ScoreEntry, Error> {
        if !survival_time.is_finite() || survival_time <= 0.0 {
            return Err(
                Error::invalid_request("Invalid survival time").with_details(json!({
                    "field": "survival_time",
                    "code": "non_positive_time",
                })),
            );
        }
        self.scores
            .submit(username, survival_time)
            .await
            .map_err(map_score_error)
    }
}
