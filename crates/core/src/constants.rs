/// Pseudo-category used by clients to mean "no category filter"
pub const ALL_CATEGORIES: &str = "All Categories";

/// Decimal precision for prices
pub const PRICE_DECIMAL_PRECISION: u32 = 2;

/// Largest amount, price or quantity accepted on input
pub const MAX_AMOUNT: i64 = 1_000_000_000_000;

/// Number of expenses shown on the dashboard
pub const RECENT_EXPENSES_LIMIT: i64 = 5;

/// Categories seeded for a freshly signed-up user
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Groceries",
    "Transport",
    "Utilities",
    "Entertainment",
    "Rent/Mortgage",
    "Shopping",
    "Healthcare",
    "Education",
    "Travel",
    "Dining Out",
    "Subscriptions",
    "Personal Care",
    "Other",
];

/// Currencies a user can pick as display currency
pub const SUPPORTED_CURRENCIES: &[&str] = &["USD", "EUR", "GBP", "JPY", "CAD"];
