//! SQLite settings backend.
//!
//! Every row is loaded into memory when the database is opened; writes go to
//! SQLite first and then to the in-memory copy, so reads never touch disk.

use std::path::Path;

use async_sqlite::Client;
use async_trait::async_trait;
use dashmap::DashMap;

use super::{SettingsBackend, SettingsError};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS settings (
        key TEXT PRIMARY KEY,
        value BLOB NOT NULL,
        updated_at TEXT NOT NULL
    )
";

const UPSERT: &str = "
    INSERT INTO settings (key, value, updated_at) VALUES (?1, ?2, ?3)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
";

pub struct SqliteBackend {
    client: Client,
    values: DashMap<String, Vec<u8>>,
}

impl SqliteBackend {
    /// Open (or create) the settings database at `path` and load its rows.
    pub async fn new(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let client = async_sqlite::ClientBuilder::new()
            .path(path)
            .open()
            .await?;

        let rows = client
            .conn(|conn| {
                conn.execute_batch(SCHEMA)?;
                let mut stmt = conn.prepare("SELECT key, value FROM settings")?;
                let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
                rows.collect::<Result<Vec<(String, Vec<u8>)>, _>>()
            })
            .await?;
        log::debug!("loaded {} stored settings", rows.len());

        Ok(Self {
            client,
            values: rows.into_iter().collect(),
        })
    }

    /// A private database that lives as long as the backend.
    pub async fn in_memory() -> Result<Self, SettingsError> {
        Self::new(":memory:").await
    }
}

#[async_trait]
impl SettingsBackend for SqliteBackend {
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, SettingsError> {
        Ok(self.values.get(key).map(|entry| entry.value().clone()))
    }

    async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), SettingsError> {
        let owned_key = key.to_string();
        let stored = value.clone();
        let updated_at = chrono::Utc::now().to_rfc3339();
        self.client
            .conn(move |conn| {
                conn.execute(UPSERT, rusqlite::params![owned_key, stored, updated_at])
            })
            .await?;

        self.values.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), SettingsError> {
        let owned_key = key.to_string();
        self.client
            .conn(move |conn| conn.execute("DELETE FROM settings WHERE key = ?1", [owned_key]))
            .await?;

        self.values.remove(key);
        Ok(())
    }
}
