//! Client repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide list/get/create/update/delete over the `client` table.
//! - Map rows to `Client` records by direct column-to-field assignment.
//!
//! # Invariants
//! - The store trusts callers to have validated records; it checks nothing.
//! - Each method is one auto-committing statement; none calls another.
//! - `contacts` is never read or written; loaded records carry it empty.
//! - Only `get_client` reports `NotFound`. Update and delete of a missing id
//!   succeed with zero rows affected.

use crate::db::DbError;
use crate::model::client::{Client, ClientId};
use log::{debug, error, warn};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

const CLIENT_TABLE: &str = "client";

const CLIENT_COLUMNS: &[&str] = &[
    "client_id",
    "company_name",
    "website_url",
    "phone_number",
    "street_address",
    "city",
    "state",
    "zip_code",
];

const CLIENT_SELECT_SQL: &str = "SELECT
    client_id,
    company_name,
    website_url,
    phone_number,
    street_address,
    city,
    state,
    zip_code
FROM client";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for client persistence operations.
#[derive(Debug)]
pub enum RepoError {
    /// No row matches the requested id.
    NotFound(ClientId),
    /// Storage transport or SQL failure, passed through unmodified.
    Db(DbError),
    /// Connection schema lacks the `client` table.
    MissingRequiredTable(&'static str),
    /// Connection schema lacks a column the row mapping needs.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "client not found: {id}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column `{table}.{column}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for client CRUD operations.
pub trait ClientRepository {
    /// Lists all clients ordered by company name, then id.
    fn list_clients(&self) -> RepoResult<Vec<Client>>;
    /// Loads one client or fails with `RepoError::NotFound`.
    fn get_client(&self, id: ClientId) -> RepoResult<Client>;
    /// Inserts every field except `id` and returns the generated id.
    fn create_client(&self, client: &Client) -> RepoResult<ClientId>;
    /// Overwrites all fields of the row matching `client.id`.
    fn update_client(&self, client: &Client) -> RepoResult<()>;
    /// Removes the row matching `id`, if any.
    fn delete_client(&self, id: ClientId) -> RepoResult<()>;
}

/// SQLite-backed client repository.
pub struct SqliteClientRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteClientRepository<'conn> {
    /// Creates a repository from a bootstrapped connection.
    ///
    /// Fails when the connection does not carry the `client` table shape.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_client_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ClientRepository for SqliteClientRepository<'_> {
    fn list_clients(&self) -> RepoResult<Vec<Client>> {
        let started_at = Instant::now();
        let result = (|| -> RepoResult<Vec<Client>> {
            let mut stmt = self.conn.prepare(&format!(
                "{CLIENT_SELECT_SQL} ORDER BY company_name ASC, client_id ASC;"
            ))?;
            let clients = stmt
                .query_map([], parse_client_row)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(clients)
        })();

        match &result {
            Ok(clients) => debug!(
                "event=client_list module=repo status=ok rows={} duration_ms={}",
                clients.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => log_failure("client_list", "none", started_at, err),
        }
        result
    }

    fn get_client(&self, id: ClientId) -> RepoResult<Client> {
        let started_at = Instant::now();
        let result = self
            .conn
            .query_row(
                &format!("{CLIENT_SELECT_SQL} WHERE client_id = ?1;"),
                [id],
                parse_client_row,
            )
            .optional()
            .map_err(RepoError::from)
            .and_then(|found| found.ok_or(RepoError::NotFound(id)));

        match &result {
            Ok(_) => debug!(
                "event=client_get module=repo status=ok client_id={id} duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(RepoError::NotFound(_)) => debug!(
                "event=client_get module=repo status=not_found client_id={id} duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => log_failure("client_get", &id.to_string(), started_at, err),
        }
        result
    }

    fn create_client(&self, client: &Client) -> RepoResult<ClientId> {
        let started_at = Instant::now();
        let result = self
            .conn
            .query_row(
                "INSERT INTO client (
                    company_name,
                    website_url,
                    phone_number,
                    street_address,
                    city,
                    state,
                    zip_code
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                RETURNING client_id;",
                params![
                    client.company_name.as_str(),
                    client.website_url.as_deref(),
                    client.phone_number.as_deref(),
                    client.street_address.as_deref(),
                    client.city.as_deref(),
                    client.state.as_deref(),
                    client.zip_code.as_deref(),
                ],
                |row| row.get::<_, ClientId>(0),
            )
            .map_err(RepoError::from);

        match &result {
            Ok(id) => debug!(
                "event=client_create module=repo status=ok client_id={id} duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => log_failure("client_create", "none", started_at, err),
        }
        result
    }

    fn update_client(&self, client: &Client) -> RepoResult<()> {
        let started_at = Instant::now();
        let client_id = id_label(client.id);
        let result = self
            .conn
            .execute(
                "UPDATE client
                 SET
                    company_name = ?1,
                    website_url = ?2,
                    phone_number = ?3,
                    street_address = ?4,
                    city = ?5,
                    state = ?6,
                    zip_code = ?7
                 WHERE client_id = ?8;",
                params![
                    client.company_name.as_str(),
                    client.website_url.as_deref(),
                    client.phone_number.as_deref(),
                    client.street_address.as_deref(),
                    client.city.as_deref(),
                    client.state.as_deref(),
                    client.zip_code.as_deref(),
                    client.id,
                ],
            )
            .map_err(RepoError::from);

        match &result {
            Ok(0) => warn!(
                "event=client_update module=repo status=ok client_id={client_id} rows_affected=0 duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Ok(changed) => debug!(
                "event=client_update module=repo status=ok client_id={client_id} rows_affected={changed} duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => log_failure("client_update", &client_id, started_at, err),
        }
        result.map(|_| ())
    }

    fn delete_client(&self, id: ClientId) -> RepoResult<()> {
        let started_at = Instant::now();
        let result = self
            .conn
            .execute("DELETE FROM client WHERE client_id = ?1;", [id])
            .map_err(RepoError::from);

        match &result {
            Ok(changed) => debug!(
                "event=client_delete module=repo status=ok client_id={id} rows_affected={changed} duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => log_failure("client_delete", &id.to_string(), started_at, err),
        }
        result.map(|_| ())
    }
}

fn parse_client_row(row: &Row<'_>) -> rusqlite::Result<Client> {
    Ok(Client {
        id: Some(row.get("client_id")?),
        company_name: row.get("company_name")?,
        website_url: row.get("website_url")?,
        phone_number: row.get("phone_number")?,
        street_address: row.get("street_address")?,
        city: row.get("city")?,
        state: row.get("state")?,
        zip_code: row.get("zip_code")?,
        contacts: Vec::new(),
    })
}

fn log_failure(event: &str, client_id: &str, started_at: Instant, err: &RepoError) {
    error!(
        "event={event} module=repo status=error client_id={client_id} duration_ms={} error={}",
        started_at.elapsed().as_millis(),
        err
    );
}

fn id_label(id: Option<ClientId>) -> String {
    id.map_or_else(|| "none".to_string(), |id| id.to_string())
}

fn ensure_client_connection_ready(conn: &Connection) -> RepoResult<()> {
    if !table_exists(conn, CLIENT_TABLE)? {
        return Err(RepoError::MissingRequiredTable(CLIENT_TABLE));
    }

    for &column in CLIENT_COLUMNS {
        if !table_has_column(conn, CLIENT_TABLE, column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: CLIENT_TABLE,
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
