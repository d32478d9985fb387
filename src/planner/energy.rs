use crate::models::{Gender, Goal};
use crate::planner::constants::{GAIN_SURPLUS_KCAL, LOSE_DEFICIT_KCAL};

/// Basal Metabolic Rate via Mifflin-St Jeor.
///
/// Male: `10w + 6.25h - 5a + 5`; female: `10w + 6.25h - 5a - 161`.
/// Inputs are not range-checked; out-of-range values propagate
/// arithmetically.
pub fn compute_bmr(gender: Gender, weight_kg: f64, height_cm: f64, age_years: f64) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years;
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Total Daily Energy Expenditure: BMR scaled by activity, rounded to the
/// nearest kcal.
pub fn compute_tdee(bmr: f64, activity_multiplier: f64) -> i32 {
    (bmr * activity_multiplier).round() as i32
}

/// Goal-adjusted daily calorie target.
pub fn compute_target_calories(tdee: i32, goal: Goal) -> i32 {
    match goal {
        Goal::Lose => tdee - LOSE_DEFICIT_KCAL,
        Goal::Gain => tdee + GAIN_SURPLUS_KCAL,
        Goal::Maintain => tdee,
    }
}
