//! SQLite storage implementation for expenses (the `transactions` table).

mod model;
mod repository;

pub use model::{ExpenseChangesetDB, ExpenseDB, NewExpenseDB};
pub use repository::ExpenseRepository;
