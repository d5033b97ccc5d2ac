//! SQLite storage implementation for Fintrack.
//!
//! Implements the repository traits of `fintrack-core` with Diesel over
//! SQLite. This is the only crate that depends on Diesel.
//!
//! ```text
//!   core (domain, traits)
//!          │
//!          ▼
//!   storage-sqlite (this crate)
//!          │
//!          ▼
//!       SQLite DB
//! ```
//!
//! Amounts are stored as decimal TEXT and dates as `YYYY-MM-DD` TEXT.
//! Reads go through the r2d2 pool; every write goes through the single
//! writer actor ([`WriteHandle`]).

pub mod db;
pub mod errors;
pub mod schema;
mod utils;

// Repository implementations
pub mod budgets;
pub mod categories;
pub mod expenses;
pub mod goals;
pub mod holdings;
pub mod portfolio;
pub mod settings;

#[cfg(test)]
mod test_utils;

pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

pub use errors::{IntoCore, StorageError};

pub use budgets::BudgetRepository;
pub use categories::CategoryRepository;
pub use expenses::ExpenseRepository;
pub use goals::GoalRepository;
pub use holdings::HoldingRepository;
pub use portfolio::PortfolioRepository;
pub use settings::SettingsRepository;

pub use fintrack_core::errors::{DatabaseError, Error, Result};
