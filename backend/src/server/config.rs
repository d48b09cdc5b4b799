//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use crate::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) admin_token: String,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration.
    ///
    /// `admin_token` is the shared secret compared against the
    /// `X-Admin-Token` header on message deletion; an empty token authorizes
    /// nobody.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, admin_token: impl Into<String>) -> Self {
        Self {
            bind_addr,
            admin_token: admin_token.into(),
            db_pool: None,
        }
    }

    /// Attach a database connection pool for persistence adapters.
    ///
    /// When absent, the server falls back to fixture port implementations so
    /// it can still boot for smoke tests.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
