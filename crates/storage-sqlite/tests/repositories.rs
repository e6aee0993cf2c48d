//! End-to-end repository tests against a real temp-file SQLite database.

use std::sync::Arc;

use chrono::NaiveDate;
use tempfile::TempDir;
use twstock_core::errors::{DatabaseError, Error};
use twstock_core::quotes::{PriceBar, QuoteStore};
use twstock_core::tickers::{Ticker, TickerStore};
use twstock_storage_sqlite::quotes::QuoteRepository;
use twstock_storage_sqlite::tickers::TickerRepository;
use twstock_storage_sqlite::{db, DbPool};

struct TestDb {
    // Held for the lifetime of the test so the directory isn't cleaned up.
    _dir: TempDir,
    pool: Arc<DbPool>,
    tickers: TickerRepository,
    quotes: QuoteRepository,
}

fn setup() -> TestDb {
    let dir = tempfile::tempdir().unwrap();
    let db_path = db::init(dir.path().join("twstock-test.db").to_str().unwrap()).unwrap();
    let pool = db::create_pool(&db_path).unwrap();
    db::run_migrations(&pool).unwrap();
    let writer = db::spawn_writer(Arc::clone(&pool));
    TestDb {
        _dir: dir,
        pool: Arc::clone(&pool),
        tickers: TickerRepository::new(Arc::clone(&pool), writer.clone()),
        quotes: QuoteRepository::new(pool, writer),
    }
}

fn bar(symbol: &str, date: (i32, u32, u32), close: f64) -> PriceBar {
    PriceBar {
        symbol: symbol.to_string(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        open: close - 1.0,
        high: close + 1.0,
        low: close - 2.0,
        close,
        volume: 10_000,
    }
}

#[tokio::test]
async fn saving_a_known_ticker_again_is_ignored() {
    let test_db = setup();

    let inserted = test_db
        .tickers
        .save_all(&[Ticker::new("2330.TW"), Ticker::new("2317.TW")])
        .await
        .unwrap();
    assert_eq!(inserted, 2);

    // One duplicate, one new symbol.
    let inserted = test_db
        .tickers
        .save_all(&[Ticker::new("2330.TW"), Ticker::new("1101.TW")])
        .await
        .unwrap();
    assert_eq!(inserted, 1);

    assert_eq!(test_db.tickers.count().await.unwrap(), 3);
}

#[tokio::test]
async fn re_saving_a_bar_refreshes_instead_of_duplicating() {
    let test_db = setup();
    test_db
        .tickers
        .save_all(&[Ticker::new("2330.TW")])
        .await
        .unwrap();

    test_db
        .quotes
        .save_bars(&[bar("2330.TW", (2024, 6, 3), 560.0)])
        .await
        .unwrap();
    test_db
        .quotes
        .save_bars(&[bar("2330.TW", (2024, 6, 3), 566.0)])
        .await
        .unwrap();

    assert_eq!(test_db.quotes.count().await.unwrap(), 1);
    let latest = test_db.quotes.latest_bar().await.unwrap().unwrap();
    assert_eq!(latest.close, 566.0);
    assert_eq!(latest.date, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
}

#[tokio::test]
async fn latest_bar_follows_insertion_order() {
    let test_db = setup();
    test_db
        .tickers
        .save_all(&[Ticker::new("2330.TW"), Ticker::new("2317.TW")])
        .await
        .unwrap();

    test_db
        .quotes
        .save_bars(&[
            bar("2330.TW", (2024, 6, 3), 560.0),
            bar("2330.TW", (2024, 6, 4), 566.0),
        ])
        .await
        .unwrap();
    test_db
        .quotes
        .save_bars(&[bar("2317.TW", (2024, 6, 3), 102.0)])
        .await
        .unwrap();

    let latest = test_db.quotes.latest_bar().await.unwrap().unwrap();
    assert_eq!(latest.symbol, "2317.TW");
}

#[tokio::test]
async fn latest_bar_is_none_on_an_empty_database() {
    let test_db = setup();
    assert!(test_db.quotes.latest_bar().await.unwrap().is_none());
}

#[tokio::test]
async fn bars_require_an_existing_ticker() {
    let test_db = setup();

    let result = test_db
        .quotes
        .save_bars(&[bar("9999.TW", (2024, 6, 3), 10.0)])
        .await;

    assert!(matches!(
        result,
        Err(Error::Database(DatabaseError::ForeignKeyViolation(_)))
    ));
}

#[tokio::test]
async fn delete_all_clears_both_tables_in_fk_order() {
    let test_db = setup();
    test_db
        .tickers
        .save_all(&[Ticker::new("2330.TW")])
        .await
        .unwrap();
    test_db
        .quotes
        .save_bars(&[bar("2330.TW", (2024, 6, 3), 560.0)])
        .await
        .unwrap();

    assert_eq!(test_db.quotes.delete_all().await.unwrap(), 1);
    assert_eq!(test_db.tickers.delete_all().await.unwrap(), 1);
    assert_eq!(test_db.quotes.count().await.unwrap(), 0);
    assert_eq!(test_db.tickers.count().await.unwrap(), 0);
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let test_db = setup();
    // A second run must find nothing pending and change nothing.
    db::run_migrations(&test_db.pool).unwrap();
    assert_eq!(test_db.tickers.count().await.unwrap(), 0);
}
