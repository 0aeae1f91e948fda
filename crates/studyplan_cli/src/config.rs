//! Runtime configuration for the `studyplan` binary.
//!
//! Resolution chain: CLI flag > environment variable > default under the
//! platform data directory.

use std::path::{Path, PathBuf};

use studyplan_core::LogLevel;

pub const DB_ENV: &str = "STUDYPLAN_DB";
pub const LOG_DIR_ENV: &str = "STUDYPLAN_LOG_DIR";
pub const LOG_LEVEL_ENV: &str = "STUDYPLAN_LOG_LEVEL";

const APP_DIR_NAME: &str = "studyplan";
const DB_FILE_NAME: &str = "studyplan.sqlite3";
const LOG_DIR_NAME: &str = "logs";

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: LogLevel,
}

/// `<data_dir>/studyplan`, or `./studyplan` when the platform has none.
pub fn app_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

impl AppConfig {
    pub fn resolve(cli_db: Option<&Path>) -> Self {
        Self::resolve_with(cli_db, |key| std::env::var(key).ok(), &app_data_dir())
    }

    /// Resolution against an explicit environment lookup and base directory.
    pub fn resolve_with(
        cli_db: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
        base_dir: &Path,
    ) -> Self {
        let non_empty = |key: &str| env(key).filter(|value| !value.trim().is_empty());

        let db_path = cli_db
            .map(Path::to_path_buf)
            .or_else(|| non_empty(DB_ENV).map(PathBuf::from))
            .unwrap_or_else(|| base_dir.join(DB_FILE_NAME));
        let log_dir = non_empty(LOG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| base_dir.join(LOG_DIR_NAME));
        let log_level = non_empty(LOG_LEVEL_ENV)
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or_else(LogLevel::build_default);

        Self {
            db_path,
            log_dir,
            log_level,
        }
    }
}
