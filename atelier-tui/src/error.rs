//! Application-level errors.

use std::io;

use atelier_grid::GridError;
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::settings::SettingsError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("grid setup error: {0}")]
    Grid(#[from] GridError),
    #[error("could not determine a home directory for data files")]
    NoDirectories,
    #[error("logger already initialised: {0}")]
    Logger(#[from] log::SetLoggerError),
}
