//! Driving ports for the leaderboard and the public message board.

use async_trait::async_trait;

use crate::domain::{Error, Message, ScoreEntry, Username};

/// Leaderboard operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Scoreboard: Send + Sync {
    /// Best `limit` scores, longest survival first.
    async fn top(&self, limit: i64) -> Result<Vec<ScoreEntry>, Error>;

    /// Record a run. Rejects `survival_time <= 0`.
    async fn submit(&self, username: &Username, survival_time: f64) -> Result<ScoreEntry, Error>;
}

/// Public message board operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageBoard: Send + Sync {
    /// Oldest messages first, capped at `limit`.
    async fn list(&self, limit: i64) -> Result<Vec<Message>, Error>;

    /// Append a message. Rejects empty content.
    async fn post(&self, username: &Username, content: &str) -> Result<Message, Error>;

    /// Admin-only deletion, gated on the presented token.
    async fn delete(&self, id: i32, token: &str) -> Result<(), Error>;
}

/// Fixture scoreboard: remembers nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureScoreboard;

#[async_trait]
impl Scoreboard for FixtureScoreboard {
    async fn top(&self, _limit: i64) -> Result<Vec<ScoreEntry>, Error> {
        Ok(Vec::new())
    }

    async fn submit(&self, username: &Username, survival_time: f64) -> Result<ScoreEntry, Error> {
        Ok(ScoreEntry {
            id: 1,
            username: username.clone(),
            survival_time,
            created_at: chrono::Utc::now(),
        })
    }
}

/// Fixture message board: accepts everything, lists nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureMessageBoard;

#[async_trait]
impl MessageBoard for FixtureMessageBoard {
    async fn list(&self, _limit: i64) -> Result<Vec<Message>, Error> {
        Ok(Vec::new())
    }

    async fn post(&self, username: &Username, content: &str) -> Result<Message, Error> {
        Ok(Message {
            id: 1,
            content: content.to_owned(),
            username: username.clone(),
            created_at: chrono::Utc::now(),
        })
    }

    async fn delete(&self, _id: i32, _token: &str) -> Result<(), Error> {
        Ok(())
    }
}
