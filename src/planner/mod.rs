pub mod constants;
pub mod energy;
pub mod report;
pub mod selection;

pub use constants::*;
pub use energy::{compute_bmr, compute_target_calories, compute_tdee};
pub use report::{summarize, PlanSummary, SlotTotal};
pub use selection::select_meals;
