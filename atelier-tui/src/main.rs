use std::fs::{self, File};

use atelier_tui::catalog::{seed_if_empty, SqliteCatalog};
use atelier_tui::settings::{SettingsProvider, SqliteBackend};
use atelier_tui::{paths, App, AppError};
use simplelog::{Config, LevelFilter, WriteLogger};

fn init_logging() -> Result<(), AppError> {
    paths::rotate_logs();

    let log_path = paths::log_file().ok_or(AppError::NoDirectories)?;
    if let Some(dir) = log_path.parent() {
        fs::create_dir_all(dir)?;
    }
    WriteLogger::init(LevelFilter::Debug, Config::default(), File::create(&log_path)?)?;
    log::info!("logging to {}", log_path.display());
    Ok(())
}

async fn run() -> Result<(), AppError> {
    init_logging()?;

    let data_dir = paths::data_dir().ok_or(AppError::NoDirectories)?;
    fs::create_dir_all(&data_dir)?;

    let catalog_path = paths::catalog_db().ok_or(AppError::NoDirectories)?;
    let catalog = SqliteCatalog::new(&catalog_path).await?;
    seed_if_empty(&catalog).await?;

    let settings_path = paths::settings_db().ok_or(AppError::NoDirectories)?;
    let settings = SettingsProvider::new(SqliteBackend::new(&settings_path).await?);

    App::new(catalog, settings).await?.run().await
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        log::error!("fatal: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
