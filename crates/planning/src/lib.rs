pub mod composer;
pub mod error;
pub mod history;
pub mod planner;

pub use composer::{DayMenu, MenuComposer, MenuDish, WeeklyMenu};
pub use error::PlanningError;
pub use history::PlannerHistory;
pub use planner::MealPlanner;

/// Default planning horizon: one week of day menus.
pub const DEFAULT_HORIZON: usize = 7;
