use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags, Row};

use crate::error::Result;
use crate::models::Job;

/// `price_changes` holds the pending changes per unit; `get_price_changes`
/// stands in for the `reporting.dbo.getPriceChanges` procedure and exposes
/// the columns under the names the procedure returns.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS price_changes (
    id INTEGER PRIMARY KEY,
    unit_id INTEGER NOT NULL,
    plu INTEGER NOT NULL,
    price_old TEXT NOT NULL,
    price_new TEXT NOT NULL,
    created_at TEXT DEFAULT (datetime('now'))
);

CREATE VIEW IF NOT EXISTS get_price_changes AS
    SELECT id, unit_id, plu, price_old AS priceOld, price_new AS priceNew
    FROM price_changes;
";

const PRICE_CHANGES_QUERY: &str =
    "SELECT plu, priceOld, priceNew FROM get_price_changes WHERE unit_id = ?1 ORDER BY id";

pub fn get_connection(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;
    Ok(conn)
}

pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// Anything that can answer the price-change query for a unit.
pub trait PriceChangeSource {
    fn price_changes(&self, unit_id: i64) -> Result<Vec<Job>>;
}

fn job_from_row(row: &Row<'_>) -> rusqlite::Result<Job> {
    Ok(Job {
        plu: row.get("plu")?,
        price_old: row.get("priceOld")?,
        price_new: row.get("priceNew")?,
    })
}

impl PriceChangeSource for Connection {
    fn price_changes(&self, unit_id: i64) -> Result<Vec<Job>> {
        let mut stmt = self.prepare(PRICE_CHANGES_QUERY)?;
        let jobs = stmt
            .query_map([unit_id], job_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(jobs)
    }
}

/// Opens the database only when queried, so a missing or unreadable file
/// surfaces as a query failure rather than a startup failure.
pub struct SqliteSource {
    db_path: PathBuf,
}

impl SqliteSource {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }
}

impl PriceChangeSource for SqliteSource {
    fn price_changes(&self, unit_id: i64) -> Result<Vec<Job>> {
        let conn = Connection::open_with_flags(
            &self.db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        conn.price_changes(unit_id)
    }
}
