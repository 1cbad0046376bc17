//! Typed, persisted user settings.

mod backend;
mod sqlite;

pub use backend::SettingsBackend;
pub use sqlite::SqliteBackend;

use std::sync::Arc;

use atelier_grid::PaginationMode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("database error: {0}")]
    Database(#[from] async_sqlite::Error),
    #[error("serialization error: {0}")]
    Serialization(bincode::Error),
    #[error("deserialization error: {0}")]
    Deserialization(bincode::Error),
}

/// Per-screen grid preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPreferences {
    pub page_size: u32,
    pub pagination_mode: PaginationMode,
    /// Terminal width, in columns, below which cards are shown.
    pub breakpoint: u16,
}

impl Default for GridPreferences {
    fn default() -> Self {
        Self {
            page_size: 10,
            pagination_mode: PaginationMode::Paged,
            breakpoint: 100,
        }
    }
}

fn preferences_key(screen: &str) -> String {
    format!("grid.{screen}")
}

/// Settings values encoded with bincode over a [`SettingsBackend`].
#[derive(Clone)]
pub struct SettingsProvider {
    backend: Arc<dyn SettingsBackend>,
}

impl SettingsProvider {
    pub fn new(backend: impl SettingsBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SettingsError> {
        match self.backend.get_bytes(key).await? {
            Some(bytes) => bincode::deserialize(&bytes)
                .map(Some)
                .map_err(SettingsError::Deserialization),
            None => Ok(None),
        }
    }

    pub async fn get_or<T: DeserializeOwned>(
        &self,
        key: &str,
        default: T,
    ) -> Result<T, SettingsError> {
        Ok(self.get(key).await?.unwrap_or(default))
    }

    pub async fn set<T: Serialize + Sync>(&self, key: &str, value: &T) -> Result<(), SettingsError> {
        let bytes = bincode::serialize(value).map_err(SettingsError::Serialization)?;
        self.backend.set_bytes(key, bytes).await
    }

    pub async fn delete(&self, key: &str) -> Result<(), SettingsError> {
        self.backend.delete(key).await
    }

    /// Stored preferences for `screen`, or the defaults.
    pub async fn preferences(&self, screen: &str) -> Result<GridPreferences, SettingsError> {
        self.get_or(&preferences_key(screen), GridPreferences::default())
            .await
    }

    pub async fn save_preferences(
        &self,
        screen: &str,
        preferences: &GridPreferences,
    ) -> Result<(), SettingsError> {
        log::debug!("saving preferences for '{screen}': {preferences:?}");
        self.set(&preferences_key(screen), preferences).await
    }
}
