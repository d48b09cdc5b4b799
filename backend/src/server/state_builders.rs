//! Builders for HTTP state ports backed by the configured persistence layer.

use std::sync::Arc;

use crate::domain::ports::{
    FixtureEconomyCommand, FixtureEconomyQuery, FixtureMessageBoard, FixtureScoreboard,
    StaticTokenAuthorization,
};
use crate::domain::{EconomyService, MessageBoardService, ScoreboardService};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::persistence::{
    DieselAccountRepository, DieselCatalogRepository, DieselMessageRepository,
    DieselOwnershipLedger, DieselProfileQuery, DieselPurchaseRepository, DieselScoreRepository,
};

use super::ServerConfig;

/// Build the HTTP port bundle from the server configuration.
///
/// With a database pool, every port is Diesel-backed; without one, fixtures
/// stand in so the server can still boot for smoke tests.
pub(crate) fn build_http_state(config: &ServerConfig) -> HttpState {
    let admin = Arc::new(StaticTokenAuthorization::new(config.admin_token.clone()));

    let ports = match &config.db_pool {
        Some(pool) => {
            let economy = Arc::new(EconomyService::new(
                Arc::new(DieselAccountRepository::new(pool.clone())),
                Arc::new(DieselCatalogRepository::new(pool.clone())),
                Arc::new(DieselOwnershipLedger::new(pool.clone())),
                Arc::new(DieselPurchaseRepository::new(pool.clone())),
                Arc::new(DieselProfileQuery::new(pool.clone())),
            ));
            let scoreboard = Arc::new(ScoreboardService::new(Arc::new(
                DieselScoreRepository::new(pool.clone()),
            )));
            let message_board = Arc::new(MessageBoardService::new(
                Arc::new(DieselMessageRepository::new(pool.clone())),
                admin,
            ));
            HttpStatePorts {
                economy: economy.clone(),
                economy_query: economy,
                scoreboard,
                message_board,
            }
        }
        None => HttpStatePorts {
            economy: Arc::new(FixtureEconomyCommand),
            economy_query: Arc::new(FixtureEconomyQuery),
            scoreboard: Arc::new(FixtureScoreboard),
            message_board: Arc::new(FixtureMessageBoard),
        },
    };

    HttpState::new(ports)
}
