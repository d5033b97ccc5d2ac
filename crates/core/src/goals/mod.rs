//! Goals module - savings targets and contributions.

mod goals_model;
mod goals_service;
mod goals_traits;


pub use goals_model::{Contribution, Goal, GoalProgress, GoalRecord, GoalUpdate, NewGoal};
pub use goals_service::GoalService;
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
