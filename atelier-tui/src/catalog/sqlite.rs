//! SQLite catalog backend.

use std::path::Path;

use async_sqlite::Client;
use async_trait::async_trait;
use rusqlite::params_from_iter;
use rusqlite::types::Value;

use super::models::CatalogRecord;
use super::query::{QueryBuilder, insert_sql, update_sql};
use super::{CatalogError, CatalogRepository, ListQuery};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS courses (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        category TEXT NOT NULL,
        level TEXT NOT NULL,
        price_cents INTEGER NOT NULL,
        seats INTEGER NOT NULL,
        starts_on TEXT NOT NULL,
        published INTEGER NOT NULL DEFAULT 0
    );

    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        collection TEXT NOT NULL,
        price_cents INTEGER NOT NULL,
        stock INTEGER NOT NULL,
        active INTEGER NOT NULL DEFAULT 1
    );
";

/// Courses and products in one SQLite database.
#[derive(Clone)]
pub struct SqliteCatalog {
    client: Client,
}

impl SqliteCatalog {
    /// Open (or create) the catalog database at `path`.
    pub async fn new(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let client = async_sqlite::ClientBuilder::new()
            .path(path)
            .open()
            .await?;
        client.conn(|conn| conn.execute_batch(SCHEMA)).await?;
        Ok(Self { client })
    }

    pub async fn in_memory() -> Result<Self, CatalogError> {
        Self::new(":memory:").await
    }

    /// Insert many records in one transaction.
    pub async fn insert_all<T: CatalogRecord>(&self, records: Vec<T>) -> Result<usize, CatalogError> {
        let count = records.len();
        self.client
            .conn_mut(move |conn| {
                let tx = conn.transaction()?;
                {
                    let mut stmt = tx.prepare(&insert_sql::<T>())?;
                    for record in &records {
                        stmt.execute(params_from_iter(record.values()?))?;
                    }
                }
                tx.commit()
            })
            .await?;
        log::info!("inserted {count} rows into {}", T::TABLE);
        Ok(count)
    }
}

#[async_trait]
impl<T: CatalogRecord> CatalogRepository<T> for SqliteCatalog {
    async fn find(&self, query: &ListQuery) -> Result<Vec<T>, CatalogError> {
        let stmt = QueryBuilder::<T>::new(query).select()?;
        log::debug!("{} {:?}", stmt.sql, stmt.params);
        self.client
            .conn(move |conn| {
                let mut prepared = conn.prepare(&stmt.sql)?;
                let rows = prepared.query_map(params_from_iter(stmt.params), T::from_row)?;
                rows.collect::<Result<Vec<_>, _>>()
            })
            .await
            .map_err(CatalogError::from)
    }

    async fn count(&self, query: &ListQuery) -> Result<u64, CatalogError> {
        let stmt = QueryBuilder::<T>::new(query).count();
        let total: i64 = self
            .client
            .conn(move |conn| {
                conn.query_row(&stmt.sql, params_from_iter(stmt.params), |row| row.get(0))
            })
            .await?;
        Ok(u64::try_from(total).unwrap_or(0))
    }

    async fn get(&self, id: i64) -> Result<Option<T>, CatalogError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ?",
            T::COLUMNS.join(", "),
            T::TABLE
        );
        self.client
            .conn(move |conn| {
                let mut stmt = conn.prepare(&sql)?;
                let mut rows = stmt.query([id])?;
                match rows.next()? {
                    Some(row) => Ok(Some(T::from_row(row)?)),
                    None => Ok(None),
                }
            })
            .await
            .map_err(CatalogError::from)
    }

    async fn create(&self, record: &T) -> Result<T, CatalogError> {
        let record = record.clone();
        let id = self
            .client
            .conn(move |conn| {
                conn.execute(&insert_sql::<T>(), params_from_iter(record.values()?))?;
                Ok(conn.last_insert_rowid())
            })
            .await?;

        log::info!("created {} {id}", T::ENTITY);
        CatalogRepository::<T>::get(self, id)
            .await?
            .ok_or(CatalogError::NotFound {
                entity: T::ENTITY,
                id,
            })
    }

    async fn update(&self, record: &T) -> Result<(), CatalogError> {
        let id = record.id();
        let record = record.clone();

        let changed = self
            .client
            .conn(move |conn| {
                let mut values = record.values()?;
                values.push(Value::Integer(id));
                conn.execute(&update_sql::<T>(), params_from_iter(values))
            })
            .await?;
        if changed == 0 {
            return Err(CatalogError::NotFound {
                entity: T::ENTITY,
                id,
            });
        }
        log::info!("updated {} {id}", T::ENTITY);
        Ok(())
    }

    async fn destroy(&self, id: i64) -> Result<(), CatalogError> {
        let sql = format!("DELETE FROM {} WHERE id = ?", T::TABLE);
        let changed = self
            .client
            .conn(move |conn| conn.execute(&sql, [id]))
            .await?;
        if changed == 0 {
            return Err(CatalogError::NotFound {
                entity: T::ENTITY,
                id,
            });
        }
        log::info!("deleted {} {id}", T::ENTITY);
        Ok(())
    }
}
