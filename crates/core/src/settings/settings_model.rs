//! User settings models and their key/value mapping.

use serde::{Deserialize, Serialize};

use crate::constants::SUPPORTED_CURRENCIES;
use crate::errors::{Error, Result};
use crate::utils::validation::is_valid_email;

/// Setting keys as stored per user.
pub mod keys {
    pub const FULL_NAME: &str = "full_name";
    pub const EMAIL: &str = "email";
    pub const CURRENCY: &str = "currency";
    pub const NOTIFY_WEEKLY_SUMMARY: &str = "notify_weekly_summary";
    pub const NOTIFY_BUDGET_ALERTS: &str = "notify_budget_alerts";
    pub const NOTIFY_INVESTMENT_ALERTS: &str = "notify_investment_alerts";
    pub const NOTIFY_GOAL_ACHIEVED: &str = "notify_goal_achieved";
    pub const MONTHLY_INCOME: &str = "monthly_income";
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    pub weekly_summary: bool,
    pub budget_alerts: bool,
    pub investment_alerts: bool,
    pub goal_achieved: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        NotificationPreferences {
            weekly_summary: true,
            budget_alerts: false,
            investment_alerts: true,
            goal_achieved: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub full_name: String,
    pub email: String,
    pub currency: String,
    pub notifications: NotificationPreferences,
}

impl Default for UserSettings {
    fn default() -> Self {
        UserSettings {
            full_name: String::new(),
            email: String::new(),
            currency: "USD".to_string(),
            notifications: NotificationPreferences::default(),
        }
    }
}

impl UserSettings {
    /// Builds settings from stored pairs; unknown keys are ignored and
    /// unparsable flags keep their defaults.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut settings = UserSettings::default();
        for (key, value) in pairs {
            let flag = |default: bool| value.parse().unwrap_or(default);
            match key.as_str() {
                keys::FULL_NAME => settings.full_name = value.clone(),
                keys::EMAIL => settings.email = value.clone(),
                keys::CURRENCY => settings.currency = value.clone(),
                keys::NOTIFY_WEEKLY_SUMMARY => {
                    settings.notifications.weekly_summary = flag(true);
                }
                keys::NOTIFY_BUDGET_ALERTS => {
                    settings.notifications.budget_alerts = flag(false);
                }
                keys::NOTIFY_INVESTMENT_ALERTS => {
                    settings.notifications.investment_alerts = flag(true);
                }
                keys::NOTIFY_GOAL_ACHIEVED => {
                    settings.notifications.goal_achieved = flag(true);
                }
                _ => {}
            }
        }
        settings
    }
}

/// Partial settings update; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub currency: Option<String>,
    pub notifications: Option<NotificationPreferences>,
}

impl SettingsUpdate {
    /// Validates the update and flattens it into key/value pairs.
    pub fn into_pairs(self) -> Result<Vec<(String, String)>> {
        let mut pairs = Vec::new();
        if let Some(full_name) = self.full_name {
            pairs.push((keys::FULL_NAME.to_string(), full_name.trim().to_string()));
        }
        if let Some(email) = self.email {
            let email = email.trim().to_string();
            if !is_valid_email(&email) {
                return Err(Error::invalid_input(format!("Invalid email '{}'", email)));
            }
            pairs.push((keys::EMAIL.to_string(), email));
        }
        if let Some(currency) = self.currency {
            let currency = currency.trim().to_uppercase();
            if !SUPPORTED_CURRENCIES.contains(&currency.as_str()) {
                return Err(Error::invalid_input(format!(
                    "Currency '{}' is not supported",
                    currency
                )));
            }
            pairs.push((keys::CURRENCY.to_string(), currency));
        }
        if let Some(n) = self.notifications {
            pairs.push((keys::NOTIFY_WEEKLY_SUMMARY.to_string(), n.weekly_summary.to_string()));
            pairs.push((keys::NOTIFY_BUDGET_ALERTS.to_string(), n.budget_alerts.to_string()));
            pairs.push((
                keys::NOTIFY_INVESTMENT_ALERTS.to_string(),
                n.investment_alerts.to_string(),
            ));
            pairs.push((keys::NOTIFY_GOAL_ACHIEVED.to_string(), n.goal_achieved.to_string()));
        }
        Ok(pairs)
    }
}
