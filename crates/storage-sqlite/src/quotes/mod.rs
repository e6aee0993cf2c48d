//! Price history persistence.

pub mod model;
pub mod repository;

pub use model::{NewPriceBarRow, PriceBarRow};
pub use repository::QuoteRepository;
