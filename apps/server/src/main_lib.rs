//! Application state wiring and tracing setup.

use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use twstock_core::ingestion::{IngestionConfig, IngestionService, ProgressChannel};
use twstock_market_data::YahooProvider;
use twstock_storage_sqlite::db;
use twstock_storage_sqlite::quotes::QuoteRepository;
use twstock_storage_sqlite::tickers::TickerRepository;

use crate::config::Config;

pub struct AppState {
    pub ingestion_service: Arc<IngestionService>,
    pub progress: Arc<ProgressChannel>,
}

pub fn init_tracing() {
    let log_format = std::env::var("TWSTOCK_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer(Arc::clone(&pool));

    let ticker_repository = Arc::new(TickerRepository::new(Arc::clone(&pool), writer.clone()));
    let quote_repository = Arc::new(QuoteRepository::new(Arc::clone(&pool), writer.clone()));
    let provider = Arc::new(YahooProvider::new()?);

    let progress = Arc::new(ProgressChannel::new());
    let ingestion_config = IngestionConfig {
        export_path: config.export_path.as_ref().map(PathBuf::from),
        ..IngestionConfig::default()
    };
    let ingestion_service = Arc::new(
        IngestionService::new(
            provider,
            ticker_repository,
            quote_repository,
            Arc::clone(&progress),
        )
        .with_config(ingestion_config),
    );

    Ok(Arc::new(AppState {
        ingestion_service,
        progress,
    }))
}
