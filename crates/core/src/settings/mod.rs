//! Settings module - per-user profile and preferences stored as key/value pairs.

mod settings_model;
mod settings_service;
mod settings_traits;


pub use settings_model::{keys, NotificationPreferences, SettingsUpdate, UserSettings};
pub use settings_service::SettingsService;
pub use settings_traits::{SettingsRepositoryTrait, SettingsServiceTrait};
