//! Ticker persistence.

pub mod model;
pub mod repository;

pub use model::{NewTickerRow, TickerRow};
pub use repository::TickerRepository;
