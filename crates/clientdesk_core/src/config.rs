//! Environment-driven core configuration.
//!
//! # Responsibility
//! - Read `CLIENTDESK_`-prefixed environment variables into typed settings.
//! - Apply defaults for unset or blank values.
//!
//! # Invariants
//! - Loading configuration never touches the database or log files.
//! - Blank values behave exactly like unset ones.

use crate::logging::default_log_level;
use serde::Deserialize;
use std::error::Error;
use std::ffi::OsString;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

const ENV_PREFIX: &str = "CLIENTDESK_";
const DEFAULT_DB_FILE_NAME: &str = "clientdesk.sqlite3";

/// Raw variables as read from the environment.
#[derive(Debug, Default, Deserialize)]
struct EnvConfig {
    db_path: Option<String>,
    log_level: Option<String>,
    log_dir: Option<String>,
}

/// Resolved core settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// SQLite database file. Defaults to `<temp_dir>/clientdesk.sqlite3`.
    pub db_path: PathBuf,
    /// Log level passed to `init_logging`.
    pub log_level: String,
    /// Rolling log directory. Logging stays off when `None`.
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    Env(envy::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Env(err) => write!(f, "invalid environment configuration: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Env(err) => Some(err),
        }
    }
}

impl From<envy::Error> for ConfigError {
    fn from(value: envy::Error) -> Self {
        Self::Env(value)
    }
}

impl CoreConfig {
    /// Loads settings from the current process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(utf8_vars(std::env::vars_os()))
    }

    /// Loads settings from explicit `(key, value)` pairs.
    pub fn from_vars(
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self, ConfigError> {
        let raw: EnvConfig = envy::prefixed(ENV_PREFIX).from_iter(vars)?;
        Ok(Self::resolve(raw))
    }

    fn resolve(raw: EnvConfig) -> Self {
        let db_path = non_blank(raw.db_path)
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));
        let log_level =
            non_blank(raw.log_level).unwrap_or_else(|| default_log_level().to_string());
        let log_dir = non_blank(raw.log_dir).map(PathBuf::from);

        Self {
            db_path,
            log_level,
            log_dir,
        }
    }
}

fn utf8_vars(
    vars: impl IntoIterator<Item = (OsString, OsString)>,
) -> impl Iterator<Item = (String, String)> {
    vars.into_iter()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}
