//! Platform-specific directory paths.
//!
//! XDG on Linux, the usual per-user locations on macOS and Windows.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "studio";
const ORGANIZATION: &str = "atelier";
const APPLICATION: &str = "atelier";

/// Old log files kept next to `latest.log`.
const MAX_OLD_LOGS: usize = 25;

const LATEST_LOG: &str = "latest.log";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Persistent data: the catalog and settings databases.
///
/// - Linux: `$XDG_DATA_HOME/atelier` or `~/.local/share/atelier`
/// - macOS: `~/Library/Application Support/studio.atelier.atelier`
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// Regenerable data: logs.
///
/// - Linux: `$XDG_CACHE_HOME/atelier` or `~/.cache/atelier`
/// - macOS: `~/Library/Caches/studio.atelier.atelier`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

pub fn settings_db() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("settings.db"))
}

pub fn catalog_db() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("catalog.db"))
}

pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archive the previous `latest.log` under a timestamped name and prune
/// old archives. Runs before the logger is set up, so failures are ignored.
pub fn rotate_logs() {
    let Some(cache) = cache_dir() else { return };
    let latest = cache.join(LATEST_LOG);

    if latest.exists() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let _ = fs::rename(&latest, cache.join(format!("{stamp}.log")));
    }

    prune_logs(&cache, MAX_OLD_LOGS);
}

/// Delete all but the `keep` most recently modified archived logs in `dir`.
pub fn prune_logs(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut logs: Vec<_> = entries
        .filter_map(Result::ok)
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    if logs.len() <= keep {
        return;
    }

    // Oldest first.
    logs.sort_by_key(|entry| entry.metadata().and_then(|m| m.modified()).ok());
    for entry in &logs[..logs.len() - keep] {
        let _ = fs::remove_file(entry.path());
    }
}
