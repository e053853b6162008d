//! Fixed `client` table schema.
//!
//! # Invariants
//! - DDL is idempotent (`IF NOT EXISTS`) and safe to run on every open.
//! - `client_id` uses `AUTOINCREMENT` so deleted ids are never handed out again.

use super::DbResult;
use rusqlite::Connection;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Creates the `client` table and its list-order index when missing.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}
