//! Database models for the `tickers` table.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use twstock_core::tickers::Ticker;

use crate::schema::tickers;

/// A persisted ticker row.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = tickers, primary_key(symbol))]
pub struct TickerRow {
    pub symbol: String,
    pub created_at: NaiveDateTime,
}

impl From<TickerRow> for Ticker {
    fn from(row: TickerRow) -> Self {
        Ticker { symbol: row.symbol }
    }
}

/// Insert payload; `created_at` comes from the column default.
#[derive(Debug, Insertable)]
#[diesel(table_name = tickers)]
pub struct NewTickerRow<'a> {
    pub symbol: &'a str,
}
