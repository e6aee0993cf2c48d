use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use twstock_core::errors::Result;
use twstock_core::tickers::{Ticker, TickerStore};

use super::model::NewTickerRow;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::tickers;

/// Repository for the `tickers` table.
///
/// Reads go straight to the pool; all writes are funneled through the
/// writer actor.
pub struct TickerRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TickerRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl TickerStore for TickerRepository {
    async fn save_all(&self, to_save: &[Ticker]) -> Result<usize> {
        let symbols: Vec<String> = to_save.iter().map(|t| t.symbol.clone()).collect();
        self.writer
            .exec(move |conn| {
                let mut inserted = 0;
                for symbol in &symbols {
                    // Conflict on the symbol key means the ticker is already
                    // known; skip it.
                    inserted += diesel::insert_into(tickers::table)
                        .values(&NewTickerRow {
                            symbol: symbol.as_str(),
                        })
                        .on_conflict(tickers::symbol)
                        .do_nothing()
                        .execute(conn)
                        .into_core()?;
                }
                Ok(inserted)
            })
            .await
    }

    async fn count(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        tickers::table.count().get_result(&mut conn).into_core()
    }

    async fn delete_all(&self) -> Result<usize> {
        self.writer
            .exec(|conn| diesel::delete(tickers::table).execute(conn).into_core())
            .await
    }
}
