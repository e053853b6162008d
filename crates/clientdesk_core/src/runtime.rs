//! Process-wide database runtime.
//!
//! # Responsibility
//! - Record the active database location at process start.
//! - Hand each caller a fresh connection-backed `ClientService`.
//! - Release the recorded location at process shutdown.
//!
//! # Invariants
//! - Only the database path is shared; connections are per call.
//! - The state lock is only held across SQL during `init_runtime`; service
//!   calls run without it.
//! - Re-initialization with a different path is rejected.

use crate::config::CoreConfig;
use crate::db::{open_db, DbError};
use crate::repo::client_repo::{RepoError, RepoResult, SqliteClientRepository};
use crate::service::client_service::ClientService;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

static RUNTIME_DB_PATH: Mutex<Option<PathBuf>> = Mutex::new(None);

pub type RuntimeResult<T> = Result<T, RuntimeError>;

#[derive(Debug)]
pub enum RuntimeError {
    /// `init_runtime` has not been called, or `shutdown_runtime` already ran.
    NotInitialized,
    /// The runtime is active on a different database file.
    AlreadyInitialized { active: PathBuf, requested: PathBuf },
    Db(DbError),
    Repo(RepoError),
}

impl Display for RuntimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "client runtime is not initialized"),
            Self::AlreadyInitialized { active, requested } => write!(
                f,
                "client runtime already initialized at `{}`; refusing to switch to `{}`",
                active.display(),
                requested.display()
            ),
            Self::Db(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RuntimeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RuntimeError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<RepoError> for RuntimeError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Opens the configured database once to create the schema, then records its
/// path for later `with_client_service` calls.
///
/// Calling again with the same path is a no-op. The state lock is held while
/// the schema is created, so a rejected path is never opened.
pub fn init_runtime(config: &CoreConfig) -> RuntimeResult<()> {
    let requested = config.db_path.clone();
    let mut state = lock_state();
    match state.as_ref() {
        Some(active) if active == &requested => return Ok(()),
        Some(active) => {
            return Err(RuntimeError::AlreadyInitialized {
                active: active.clone(),
                requested,
            });
        }
        None => {}
    }

    if let Err(err) = open_db(&requested) {
        error!(
            "event=runtime_init module=runtime status=error db_path={} error={}",
            requested.display(),
            err
        );
        return Err(err.into());
    }

    info!(
        "event=runtime_init module=runtime status=ok db_path={}",
        requested.display()
    );
    *state = Some(requested);
    Ok(())
}

/// Runs `f` against a service backed by a freshly opened connection.
///
/// The connection is dropped when `f` returns, so every call is its own unit
/// of work.
pub fn with_client_service<T>(
    f: impl FnOnce(&ClientService<SqliteClientRepository<'_>>) -> RepoResult<T>,
) -> RuntimeResult<T> {
    let db_path = lock_state().clone().ok_or(RuntimeError::NotInitialized)?;
    let conn = open_db(&db_path)?;
    let repo = SqliteClientRepository::try_new(&conn)?;
    let service = ClientService::new(repo);
    Ok(f(&service)?)
}

/// Returns the active database path, or `None` when the runtime is down.
pub fn runtime_status() -> Option<PathBuf> {
    lock_state().clone()
}

/// Forgets the active database path.
///
/// Returns `true` when a runtime was active. Safe to call repeatedly.
pub fn shutdown_runtime() -> bool {
    let previous = lock_state().take();
    match &previous {
        Some(path) => info!(
            "event=runtime_shutdown module=runtime status=ok db_path={}",
            path.display()
        ),
        None => info!("event=runtime_shutdown module=runtime status=noop"),
    }
    previous.is_some()
}

fn lock_state() -> MutexGuard<'static, Option<PathBuf>> {
    // Poisoning is ignored: the guarded value is a plain path.
    RUNTIME_DB_PATH
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}
