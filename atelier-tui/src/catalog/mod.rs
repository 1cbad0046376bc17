//! Course and product catalog storage.

mod models;
mod query;
mod seed;
mod sqlite;

pub use models::{CatalogRecord, Course, Product, format_price};
pub use query::{ListQuery, QueryBuilder, Statement, insert_sql, update_sql};
pub use seed::{sample_courses, sample_products, seed_if_empty};
pub use sqlite::SqliteCatalog;

use async_trait::async_trait;
use atelier_grid::{GridError, PaginationInfo};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("database error: {0}")]
    Database(#[from] async_sqlite::Error),
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },
    #[error("cannot sort by '{0}'")]
    InvalidSort(String),
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// One page of records together with its pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub records: Vec<T>,
    pub pagination: PaginationInfo,
}

/// CRUD access to one record type.
#[async_trait]
pub trait CatalogRepository<T: CatalogRecord>: Send + Sync {
    /// Records matching `query`, limited to its page.
    async fn find(&self, query: &ListQuery) -> Result<Vec<T>, CatalogError>;

    /// Number of records matching `query`, ignoring its page.
    async fn count(&self, query: &ListQuery) -> Result<u64, CatalogError>;

    async fn get(&self, id: i64) -> Result<Option<T>, CatalogError>;

    /// Insert `record` (its id is ignored) and return it as stored.
    async fn create(&self, record: &T) -> Result<T, CatalogError>;

    async fn update(&self, record: &T) -> Result<(), CatalogError>;

    async fn destroy(&self, id: i64) -> Result<(), CatalogError>;

    /// A page of records plus the pagination derived from the total count.
    async fn list_page(&self, query: &ListQuery) -> Result<ListPage<T>, CatalogError> {
        let records = self.find(query).await?;
        let total = self.count(query).await?;
        let pagination = PaginationInfo::new(query.page, query.limit, total)?;
        log::debug!(
            "{}: page {}/{} ({} of {total})",
            T::TABLE,
            pagination.page,
            pagination.total_pages,
            records.len()
        );
        Ok(ListPage {
            records,
            pagination,
        })
    }
}
