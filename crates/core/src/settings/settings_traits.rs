//! Repository and service traits for user settings.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::settings::{SettingsUpdate, UserSettings};

/// Repository trait for per-user key/value settings.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// All stored pairs of a user.
    fn get_values(&self, user_id: &str) -> Result<Vec<(String, String)>>;

    /// A single value, `None` when the key was never written.
    fn get_value(&self, user_id: &str, setting_key: &str) -> Result<Option<String>>;

    /// Inserts or replaces every pair in one transaction.
    async fn set_values(&self, user_id: &str, values: Vec<(String, String)>) -> Result<()>;
}

#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    fn get_settings(&self, user_id: &str) -> Result<UserSettings>;

    async fn update_settings(&self, user_id: &str, update: SettingsUpdate)
        -> Result<UserSettings>;

    /// Monthly income used by budgets; zero when never set.
    fn get_monthly_income(&self, user_id: &str) -> Result<Decimal>;

    async fn set_monthly_income(&self, user_id: &str, amount: Decimal) -> Result<Decimal>;
}
