//! Port for read-only catalog access.

use async_trait::async_trait;

use crate::domain::CatalogItem;

use super::macros::define_port_error;

define_port_error! {
    /// Errors raised by catalog repository adapters.
    pub enum CatalogRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "catalog repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "catalog repository query failed: {message}",
    }
}

/// Read-only access to the seeded item catalog.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// All items in stable insertion order, for shop display.
    async fn list(&self) -> Result<Vec<CatalogItem>, CatalogRepositoryError>;

    /// Look an item up by key; `None` when the key is unknown.
    async fn find_by_key(&self, key: &str)
    -> Result<Option<CatalogItem>, CatalogRepositoryError>;
}

/// Fixture implementation exposing an empty catalog.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCatalogRepository;

#[async_trait]
impl CatalogRepository for FixtureCatalogRepository {
    async fn list(&self) -> Result<Vec<CatalogItem>, CatalogRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_key(
        &self,
        _key: &str,
    ) -> Result<Option<CatalogItem>, CatalogRepositoryError> {
        Ok(None)
    }
}
