use async_trait::async_trait;
use log::{debug, warn};
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;

use super::settings_model::{keys, SettingsUpdate, UserSettings};
use super::settings_traits::{SettingsRepositoryTrait, SettingsServiceTrait};
use crate::errors::Result;
use crate::utils::validation::require_non_negative;

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SettingsService {
            settings_repository,
        }
    }
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    fn get_settings(&self, user_id: &str) -> Result<UserSettings> {
        let pairs = self.settings_repository.get_values(user_id)?;
        Ok(UserSettings::from_pairs(pairs))
    }

    async fn update_settings(
        &self,
        user_id: &str,
        update: SettingsUpdate,
    ) -> Result<UserSettings> {
        let pairs = update.into_pairs()?;
        debug!("Updating {} settings for user {}", pairs.len(), user_id);
        if !pairs.is_empty() {
            self.settings_repository.set_values(user_id, pairs).await?;
        }
        self.get_settings(user_id)
    }

    fn get_monthly_income(&self, user_id: &str) -> Result<Decimal> {
        let stored = self
            .settings_repository
            .get_value(user_id, keys::MONTHLY_INCOME)?;
        Ok(match stored {
            Some(value) => Decimal::from_str(&value).unwrap_or_else(|e| {
                warn!("Ignoring unparsable monthly income '{}': {}", value, e);
                Decimal::ZERO
            }),
            None => Decimal::ZERO,
        })
    }

    async fn set_monthly_income(&self, user_id: &str, amount: Decimal) -> Result<Decimal> {
        let amount = require_non_negative("totalIncome", amount)?;
        self.settings_repository
            .set_values(
                user_id,
                vec![(keys::MONTHLY_INCOME.to_string(), amount.to_string())],
            )
            .await?;
        Ok(amount)
    }
}
