//! Fintrack Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for the Fintrack personal finance
//! tracker. It is database-agnostic and defines repository traits that are
//! implemented by the `storage-sqlite` crate.

pub mod auth;
pub mod budgets;
pub mod categories;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod expenses;
pub mod goals;
pub mod investments;
pub mod portfolio;
pub mod settings;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
