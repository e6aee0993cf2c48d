//! The batch ingestion controller.
//!
//! Drives the planner over the candidate space, probes candidates through
//! the validator, and persists discoveries plus their trailing price
//! history. One background worker task per run; the HTTP layer observes
//! and cancels it only through the shared [`ProgressChannel`].

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use log::{debug, error, info, warn};
use tokio::time::sleep;
use twstock_market_data::{MarketDataError, MarketDataProvider};

use super::constants::{BATCH_PACING, BATCH_SIZE, HISTORY_PACING, HISTORY_WINDOW_DAYS};
use super::export::write_codes_csv;
use super::planner::BatchPlan;
use super::progress::{ProgressChannel, RunGuard};
use super::range::RunRange;
use super::validator::{format_ticker, TickerValidator};
use super::IngestionError;
use crate::errors::Result;
use crate::quotes::{PriceBar, QuoteStore};
use crate::tickers::{Ticker, TickerStore};

/// Tunables for an ingestion run.
#[derive(Debug, Clone)]
pub struct IngestionConfig {
    pub batch_size: i64,
    pub history_window_days: i64,
    pub batch_pacing: Duration,
    pub history_pacing: Duration,
    /// When set, discovered symbols are exported here before the database
    /// save.
    pub export_path: Option<PathBuf>,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            batch_size: BATCH_SIZE,
            history_window_days: HISTORY_WINDOW_DAYS,
            batch_pacing: BATCH_PACING,
            history_pacing: HISTORY_PACING,
            export_path: None,
        }
    }
}

/// Terminal outcome of a run that did not fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every batch was probed and every discovery persisted.
    Completed,
    /// A stop request ended the run at a poll point.
    Cancelled,
}

/// Orchestrates ticker discovery and price history ingestion.
///
/// Cheap to clone: every collaborator sits behind an `Arc`, and the spawned
/// worker task owns a clone of the whole service.
#[derive(Clone)]
pub struct IngestionService {
    provider: Arc<dyn MarketDataProvider>,
    ticker_store: Arc<dyn TickerStore>,
    quote_store: Arc<dyn QuoteStore>,
    progress: Arc<ProgressChannel>,
    config: IngestionConfig,
}

impl IngestionService {
    pub fn new(
        provider: Arc<dyn MarketDataProvider>,
        ticker_store: Arc<dyn TickerStore>,
        quote_store: Arc<dyn QuoteStore>,
        progress: Arc<ProgressChannel>,
    ) -> Self {
        Self {
            provider,
            ticker_store,
            quote_store,
            progress,
            config: IngestionConfig::default(),
        }
    }

    pub fn with_config(mut self, config: IngestionConfig) -> Self {
        self.config = config;
        self
    }

    /// Starts an ingestion run over `range` on a background task.
    ///
    /// Admission control happens here, synchronously: when a run is already
    /// active the request is rejected with
    /// [`IngestionError::AlreadyRunning`] and no state changes. On success
    /// the run slot is claimed before this returns, so two racing start
    /// requests can never both be admitted.
    pub fn start(&self, range: RunRange) -> Result<()> {
        let plan = BatchPlan::new(range.start_idx, range.total_stocks, self.config.batch_size);
        let guard = RunGuard::try_acquire(&self.progress, range.start_idx, plan.total_batches())
            .ok_or(IngestionError::AlreadyRunning)?;

        info!(
            "starting ingestion run: start_idx={} total_stocks={} batches={}",
            range.start_idx,
            range.total_stocks,
            plan.total_batches()
        );

        let worker = self.clone();
        tokio::spawn(async move {
            worker.run(plan, guard).await;
        });
        Ok(())
    }

    /// Runs one ingestion pass and records its terminal outcome.
    ///
    /// The guard releases the run slot when this returns - on the success,
    /// cancellation and fault paths alike.
    async fn run(&self, plan: BatchPlan, guard: RunGuard) {
        match self.execute(&plan).await {
            Ok(RunOutcome::Completed) => {
                info!("ingestion run completed");
                self.progress.push("database update complete");
            }
            Ok(RunOutcome::Cancelled) => {
                info!("ingestion run cancelled");
                self.progress.push("database update not completed");
            }
            Err(e) => {
                error!("ingestion run failed: {}", e);
                self.progress.push(format!("database update failed: {}", e));
            }
        }
        drop(guard);
    }

    /// The controller main loop: probe every planned batch, then persist.
    async fn execute(&self, plan: &BatchPlan) -> Result<RunOutcome> {
        let validator = TickerValidator::new(Arc::clone(&self.provider));
        let mut discovered: Vec<Ticker> = Vec::new();

        for batch in plan.batches() {
            if self.progress.is_stop_requested() {
                self.progress
                    .push("stop requested: cancelled during batch processing");
                return Ok(RunOutcome::Cancelled);
            }

            self.progress.set_current_batch(batch.number);
            self.progress
                .push(format!("processing batch {}", batch.number));
            sleep(self.config.batch_pacing).await;

            for index in batch.candidates() {
                let symbol = format_ticker(index);
                if validator.is_valid(&symbol).await {
                    discovered.push(Ticker::new(symbol));
                }
            }

            self.progress.push(format!("batch {} complete", batch.number));
        }

        // One more poll before anything is persisted: a cancellation here
        // discards the whole accumulation (all-or-nothing for discovery).
        if self.progress.is_stop_requested() {
            self.progress
                .push("stop requested: cancelled before final save");
            return Ok(RunOutcome::Cancelled);
        }

        if let Some(path) = &self.config.export_path {
            let written = write_codes_csv(path, &discovered)?;
            debug!("exported {} symbols to {}", written, path.display());
        }

        let inserted = self.ticker_store.save_all(&discovered).await?;
        info!(
            "saved {} new tickers ({} discovered)",
            inserted,
            discovered.len()
        );

        for (index, ticker) in discovered.iter().enumerate() {
            let ordinal = index + 1;
            if self.progress.is_stop_requested() {
                self.progress
                    .push("stop requested: cancelled during history fetch");
                self.progress.push(format!(
                    "ticker {} ({}) was not processed",
                    ordinal, ticker.symbol
                ));
                return Ok(RunOutcome::Cancelled);
            }

            match self.fetch_history(&ticker.symbol).await {
                Ok(bars) => {
                    let written = self.quote_store.save_bars(&bars).await?;
                    debug!("stored {} bars for {}", written, ticker.symbol);
                }
                Err(e) => {
                    // A single ticker's history miss never aborts the run.
                    warn!("history fetch for {} failed: {}", ticker.symbol, e);
                    self.progress
                        .push(format!("history fetch for {} failed: {}", ticker.symbol, e));
                }
            }

            sleep(self.config.history_pacing).await;
        }

        Ok(RunOutcome::Completed)
    }

    /// Fetches the trailing daily history window for one symbol.
    async fn fetch_history(
        &self,
        symbol: &str,
    ) -> std::result::Result<Vec<PriceBar>, MarketDataError> {
        let end = Utc::now();
        let start = end - chrono::Duration::days(self.config.history_window_days);
        let quotes = self.provider.get_historical_quotes(symbol, start, end).await?;
        Ok(quotes
            .into_iter()
            .map(|quote| PriceBar::from_quote(symbol, quote))
            .collect())
    }

    /// Summarizes the persisted state for the status endpoint.
    pub async fn database_status(&self) -> Result<Vec<String>> {
        let mut messages = vec!["checking database...".to_string()];

        let ticker_count = self.ticker_store.count().await?;
        if ticker_count == 0 {
            messages.push("database is empty".to_string());
            return Ok(messages);
        }

        match self.quote_store.latest_bar().await? {
            Some(bar) => {
                let days = (Utc::now().date_naive() - bar.date).num_days();
                messages.push(format!("last ingested symbol: {}", bar.symbol));
                messages.push(format!("last bar date: {}", bar.date.format("%Y-%m-%d")));
                messages.push(format!("days since last bar: {}", days));
                messages.push("check complete".to_string());
            }
            None => {
                messages.push(format!(
                    "{} tickers stored, no price history yet",
                    ticker_count
                ));
            }
        }
        Ok(messages)
    }

    /// Deletes everything ingested so far. Bars go first; the schema's
    /// foreign key requires it.
    pub async fn purge(&self) -> Result<Vec<String>> {
        let bars = self.quote_store.delete_all().await?;
        let tickers = self.ticker_store.delete_all().await?;
        info!("purged {} bars and {} tickers", bars, tickers);
        Ok(vec![format!(
            "database deleted ({} price bars, {} tickers)",
            bars, tickers
        )])
    }
}
