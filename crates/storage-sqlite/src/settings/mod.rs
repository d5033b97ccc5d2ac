//! SQLite storage implementation for per-user settings.

mod model;
mod repository;

pub use model::UserSettingDB;
pub use repository::SettingsRepository;
