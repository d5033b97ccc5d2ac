//! Dashboard module - one read-only overview assembled from the other services.

mod dashboard_model;
mod dashboard_service;


pub use dashboard_model::{DashboardOverview, InvestmentOverview};
pub use dashboard_service::{DashboardService, DashboardServiceTrait};
