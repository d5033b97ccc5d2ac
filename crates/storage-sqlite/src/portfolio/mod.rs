//! SQLite storage implementation for the daily portfolio value history.

mod model;
mod repository;

pub use model::{NewSnapshotDB, SnapshotDB};
pub use repository::PortfolioRepository;
