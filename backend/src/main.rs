//! Backend entry-point: wires REST endpoints and OpenAPI docs.

use std::env;
use std::net::SocketAddr;

use actix_web::web;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, PoolConfig};
use backend::server::{ServerConfig, create_server};

/// Fallback admin token for local development, matching the seeded client.
const DEV_ADMIN_TOKEN: &str = "666";

fn resolve_admin_token() -> std::io::Result<String> {
    match env::var("ADMIN_TOKEN") {
        Ok(token) if !token.is_empty() => Ok(token),
        _ if cfg!(debug_assertions) => {
            warn!("using development admin token (dev only)");
            Ok(DEV_ADMIN_TOKEN.to_owned())
        }
        _ => Err(std::io::Error::other(
            "ADMIN_TOKEN must be set in release builds",
        )),
    }
}

fn resolve_bind_addr() -> std::io::Result<SocketAddr> {
    let raw = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_owned());
    raw.parse()
        .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR {raw}: {e}")))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let admin_token = resolve_admin_token()?;
    let bind_addr = resolve_bind_addr()?;

    let mut config = ServerConfig::new(bind_addr, admin_token);
    match env::var("DATABASE_URL") {
        Ok(database_url) => {
            let pool = DbPool::new(PoolConfig::new(database_url))
                .await
                .map_err(|e| std::io::Error::other(format!("database pool build failed: {e}")))?;
            config = config.with_db_pool(pool);
        }
        Err(_) => {
            warn!("DATABASE_URL not set; serving with fixture ports (dev only)");
        }
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await
}
