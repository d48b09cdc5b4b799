//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{EconomyCommand, EconomyQuery, MessageBoard, Scoreboard};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub economy: Arc<dyn EconomyCommand>,
    pub economy_query: Arc<dyn EconomyQuery>,
    pub scoreboard: Arc<dyn Scoreboard>,
    pub message_board: Arc<dyn MessageBoard>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub economy: Arc<dyn EconomyCommand>,
    pub economy_query: Arc<dyn EconomyQuery>,
    pub scoreboard: Arc<dyn Scoreboard>,
    pub message_board: Arc<dyn MessageBoard>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use backend::domain::ports::{
    ///     FixtureEconomyCommand, FixtureEconomyQuery, FixtureMessageBoard, FixtureScoreboard,
    /// };
    /// use backend::inbound::http::state::{HttpState, HttpStatePorts};
    ///
    /// let ports = HttpStatePorts {
    ///     economy: Arc::new(FixtureEconomyCommand),
    ///     economy_query: Arc::new(FixtureEconomyQuery),
    ///     scoreboard: Arc::new(FixtureScoreboard),
    ///     message_board: Arc::new(FixtureMessageBoard),
    /// };
    /// let state = HttpState::new(ports);
    /// let _economy = state.economy.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            economy,
            economy_query,
            scoreboard,
            message_board,
        } = ports;
        Self {
            economy,
            economy_query,
            scoreboard,
            message_board,
        }
    }
}
