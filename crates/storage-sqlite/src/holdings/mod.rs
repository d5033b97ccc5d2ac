//! SQLite storage implementation for investment holdings.

mod model;
mod repository;

pub use model::{HoldingChangesetDB, HoldingDB, NewHoldingDB};
pub use repository::HoldingRepository;
