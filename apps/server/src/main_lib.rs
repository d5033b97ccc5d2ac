use std::sync::Arc;

use crate::config::Config;
use fintrack_core::{
    auth::{AuthService, AuthServiceTrait},
    budgets::{BudgetService, BudgetServiceTrait},
    categories::{CategoryService, CategoryServiceTrait},
    dashboard::{DashboardService, DashboardServiceTrait},
    expenses::{ExpenseService, ExpenseServiceTrait},
    goals::{GoalService, GoalServiceTrait},
    investments::{HoldingService, HoldingServiceTrait},
    portfolio::{PortfolioService, PortfolioServiceTrait, PriceSource, SimulatedPriceSource},
    settings::{SettingsService, SettingsServiceTrait},
};
use fintrack_storage_sqlite::{
    db, BudgetRepository, CategoryRepository, ExpenseRepository, GoalRepository,
    HoldingRepository, PortfolioRepository, SettingsRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub category_service: Arc<dyn CategoryServiceTrait>,
    pub expense_service: Arc<dyn ExpenseServiceTrait>,
    pub budget_service: Arc<dyn BudgetServiceTrait>,
    pub goal_service: Arc<dyn GoalServiceTrait>,
    pub holding_service: Arc<dyn HoldingServiceTrait>,
    pub portfolio_service: Arc<dyn PortfolioServiceTrait>,
    pub settings_service: Arc<dyn SettingsServiceTrait>,
    pub auth_service: Arc<dyn AuthServiceTrait>,
    pub dashboard_service: Arc<dyn DashboardServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("FT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    let result = if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .try_init()
    };
    if let Err(e) = result {
        eprintln!("Tracing already initialized: {}", e);
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let category_repo = Arc::new(CategoryRepository::new(pool.clone(), writer.clone()));
    let expense_repo = Arc::new(ExpenseRepository::new(pool.clone(), writer.clone()));
    let budget_repo = Arc::new(BudgetRepository::new(pool.clone(), writer.clone()));
    let goal_repo = Arc::new(GoalRepository::new(pool.clone(), writer.clone()));
    let holding_repo = Arc::new(HoldingRepository::new(pool.clone(), writer.clone()));
    let portfolio_repo = Arc::new(PortfolioRepository::new(pool.clone(), writer.clone()));
    let settings_repo = Arc::new(SettingsRepository::new(pool.clone(), writer.clone()));

    let settings_service: Arc<dyn SettingsServiceTrait> =
        Arc::new(SettingsService::new(settings_repo));
    let category_service: Arc<dyn CategoryServiceTrait> =
        Arc::new(CategoryService::new(category_repo));
    let expense_service: Arc<dyn ExpenseServiceTrait> = Arc::new(ExpenseService::new(
        expense_repo,
        category_service.clone(),
    ));
    let budget_service: Arc<dyn BudgetServiceTrait> = Arc::new(BudgetService::new(
        budget_repo,
        category_service.clone(),
        expense_service.clone(),
        settings_service.clone(),
    ));
    let goal_service: Arc<dyn GoalServiceTrait> = Arc::new(GoalService::new(goal_repo));
    let holding_service: Arc<dyn HoldingServiceTrait> =
        Arc::new(HoldingService::new(holding_repo.clone()));

    let price_source: Arc<dyn PriceSource> = Arc::new(SimulatedPriceSource::default());
    let portfolio_service: Arc<dyn PortfolioServiceTrait> = Arc::new(PortfolioService::new(
        holding_repo,
        portfolio_repo,
        price_source,
    ));

    let auth_service: Arc<dyn AuthServiceTrait> = Arc::new(AuthService::new(
        config.demo.clone(),
        settings_service.clone(),
        category_service.clone(),
    ));

    let dashboard_service: Arc<dyn DashboardServiceTrait> = Arc::new(DashboardService::new(
        budget_service.clone(),
        expense_service.clone(),
        holding_service.clone(),
        portfolio_service.clone(),
        goal_service.clone(),
    ));

    Ok(Arc::new(AppState {
        category_service,
        expense_service,
        budget_service,
        goal_service,
        holding_service,
        portfolio_service,
        settings_service,
        auth_service,
        dashboard_service,
    }))
}
