//! Database models for the `price_bars` table.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use twstock_core::quotes::PriceBar;

use crate::schema::price_bars;

/// A persisted OHLCV row.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = price_bars)]
pub struct PriceBarRow {
    pub id: i32,
    pub symbol: String,
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
    pub created_at: NaiveDateTime,
}

impl From<PriceBarRow> for PriceBar {
    fn from(row: PriceBarRow) -> Self {
        PriceBar {
            symbol: row.symbol,
            date: row.date,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            volume: row.volume,
        }
    }
}

/// Insert payload; `id` and `created_at` come from the column defaults.
#[derive(Debug, Insertable)]
#[diesel(table_name = price_bars)]
pub struct NewPriceBarRow<'a> {
    pub symbol: &'a str,
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}

impl<'a> From<&'a PriceBar> for NewPriceBarRow<'a> {
    fn from(bar: &'a PriceBar) -> Self {
        Self {
            symbol: &bar.symbol,
            date: bar.date,
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
        }
    }
}
