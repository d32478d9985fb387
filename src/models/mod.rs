mod food;
mod plan;
mod profile;

pub use food::{FoodItem, MealSlot};
pub use plan::MealPlan;
pub use profile::{ActivityLevel, Gender, Goal, UserProfile};
