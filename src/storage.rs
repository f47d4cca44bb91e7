//! SQLite persistence for fetched quotations.
//!
//! # Responsibilities
//! - Create the database file and schema lazily
//! - Insert one row per fetched quotation
//!
//! # Design Decisions
//! - The store holds only the database path; every insert is a scoped
//!   open → ensure schema → insert → drop, so no connection outlives a
//!   request
//! - Decimal and timestamp columns store the provider's text untouched
//! - `rusqlite` calls block; callers run inserts under `spawn_blocking`

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};

use crate::error::Result;
use crate::quote::QuoteDetail;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS currency_quote (
    id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
    code TEXT,
    codein TEXT,
    name TEXT,
    high DECIMAL,
    low DECIMAL,
    varBid DECIMAL,
    pctChange DECIMAL,
    bid DECIMAL,
    ask DECIMAL,
    timestamp TIMESTAMP,
    create_date TIMESTAMP
)";

const INSERT_QUOTE: &str = "INSERT INTO currency_quote \
    (code, codein, name, high, low, varBid, pctChange, bid, ask, timestamp, create_date) \
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)";

/// Handle to the quote database.
#[derive(Debug, Clone)]
pub struct QuoteStore {
    path: PathBuf,
}

impl QuoteStore {
    /// Create a store for the given database file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Insert one quotation row, creating the file and table when absent.
    pub fn insert(&self, quote: &QuoteDetail) -> Result<()> {
        tracing::info!(path = %self.path.display(), "Storing currency quote in database");

        let conn = Connection::open(&self.path)?;
        conn.execute(CREATE_TABLE, [])?;
        conn.execute(
            INSERT_QUOTE,
            params![
                quote.code,
                quote.codein,
                quote.name,
                quote.high,
                quote.low,
                quote.var_bid,
                quote.pct_change,
                quote.bid,
                quote.ask,
                quote.timestamp,
                quote.create_date,
            ],
        )?;

        Ok(())
    }
}
