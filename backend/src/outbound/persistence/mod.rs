//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! This module provides concrete implementations of domain repository ports
//! backed by PostgreSQL via the Diesel ORM with async support through
//! `diesel-async` and `bb8` connection pooling.
//!
//! # Architecture
//!
//! The persistence layer follows these principles:
//!
//! - **Thin adapters**: Repository implementations only translate between
//!   Diesel models and domain types. No business logic resides here.
//! - **Internal models**: Diesel row structs (`models.rs`) and schema
//!   definitions (`schema.rs`) are internal implementation details, never
//!   exposed to the domain layer.
//! - **Async-safe pooling**: Connections are managed via `bb8` pools with
//!   proper async integration through `diesel-async`.
//! - **Strongly typed errors**: All database errors are mapped to domain
//!   persistence error types.
//!
//! # Example
//!
//! ```ignore
//! use backend::outbound::persistence::{DbPool, PoolConfig, DieselAccountRepository};
//!
//! let config = PoolConfig::new("postgres://localhost/mydb");
//! let pool = DbPool::new(config).await?;
//! let repo = DieselAccountRepository::new(pool);
//! ```

mod diesel_account_repository;
mod diesel_catalog_repository;
mod diesel_error_mapping;
mod diesel_message_repository;
mod diesel_ownership_ledger;
mod diesel_profile_query;
mod diesel_purchase_repository;
mod diesel_score_repository;
mod models;
mod pool;
mod schema;
mod sql_functions;

pub use diesel_account_repository::DieselAccountRepository;
pub use diesel_catalog_repository::DieselCatalogRepository;
pub use diesel_message_repository::DieselMessageRepository;
pub use diesel_ownership_ledger::DieselOwnershipLedger;
pub use diesel_profile_query::DieselProfileQuery;
pub use diesel_purchase_repository::DieselPurchaseRepository;
pub use diesel_score_repository::DieselScoreRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
