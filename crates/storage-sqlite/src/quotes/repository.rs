use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use twstock_core::errors::Result;
use twstock_core::quotes::{PriceBar, QuoteStore};

use super::model::{NewPriceBarRow, PriceBarRow};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::price_bars;

/// Repository for the `price_bars` table.
///
/// Bars are keyed by `(symbol, date)`: saving a bar that already exists
/// refreshes the OHLCV columns in place, so re-running ingestion never
/// duplicates history.
pub struct QuoteRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl QuoteRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl QuoteStore for QuoteRepository {
    async fn save_bars(&self, bars: &[PriceBar]) -> Result<usize> {
        let bars = bars.to_vec();
        self.writer
            .exec(move |conn| {
                let mut written = 0;
                for bar in &bars {
                    written += diesel::insert_into(price_bars::table)
                        .values(NewPriceBarRow::from(bar))
                        .on_conflict((price_bars::symbol, price_bars::date))
                        .do_update()
                        .set((
                            price_bars::open.eq(bar.open),
                            price_bars::high.eq(bar.high),
                            price_bars::low.eq(bar.low),
                            price_bars::close.eq(bar.close),
                            price_bars::volume.eq(bar.volume),
                        ))
                        .execute(conn)
                        .into_core()?;
                }
                Ok(written)
            })
            .await
    }

    async fn latest_bar(&self) -> Result<Option<PriceBar>> {
        let mut conn = get_connection(&self.pool)?;
        let row = price_bars::table
            .select(PriceBarRow::as_select())
            .order(price_bars::id.desc())
            .first::<PriceBarRow>(&mut conn)
            .optional()
            .into_core()?;
        Ok(row.map(PriceBar::from))
    }

    async fn count(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        price_bars::table.count().get_result(&mut conn).into_core()
    }

    async fn delete_all(&self) -> Result<usize> {
        self.writer
            .exec(|conn| diesel::delete(price_bars::table).execute(conn).into_core())
            .await
    }
}
