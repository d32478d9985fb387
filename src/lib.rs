pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;

pub use error::{PlannerError, Result};
pub use models::{FoodItem, MealPlan, MealSlot, UserProfile};
