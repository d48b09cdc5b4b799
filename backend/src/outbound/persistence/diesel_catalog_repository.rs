//! PostgreSQL-backed `CatalogRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CatalogRepository, CatalogRepositoryError};
use crate::domain::CatalogItem;

use super::diesel_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::ShopItemRow;
use super::pool::{DbPool, PoolError};
use super::schema::shop_items;

/// Diesel-backed implementation of the `CatalogRepository` port.
///
/// Listing preserves seed order via the serial `id` column so clients render
/// the shop in a stable order.
#[derive(Clone)]
pub struct DieselCatalogRepository {
    pool: DbPool,
}

impl DieselCatalogRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain catalog repository errors.
fn map_pool_error(error: PoolError) -> CatalogRepositoryError {
    map_basic_pool_error(error, CatalogRepositoryError::connection)
}

/// Map Diesel errors to domain catalog repository errors.
fn map_diesel_error(error: diesel::result::Error) -> CatalogRepositoryError {
    map_basic_diesel_error(
        error,
        CatalogRepositoryError::query,
        CatalogRepositoryError::connection,
    )
}

#[async_trait]
impl CatalogRepository for DieselCatalogRepository {
    async fn list(&self) -> Result<Vec<CatalogItem>, CatalogRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ShopItemRow> = shop_items::table
            .select(ShopItemRow::as_select())
            .order_by(shop_items::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_key(
        &self,
        key: &str,
    ) -> Result<Option<CatalogItem>, CatalogRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ShopItemRow> = shop_items::table
            .filter(shop_items::key.eq(key))
            .select(ShopItemRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Into::into))
    }
}
