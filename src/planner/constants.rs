use crate::models::MealSlot;

/// Share of the daily target assigned to each slot.
pub const BREAKFAST_SHARE: f64 = 0.30;
pub const LUNCH_SHARE: f64 = 0.35;
pub const DINNER_SHARE: f64 = 0.30;
pub const SNACK_SHARE: f64 = 0.05;

/// Acceptance band around a slot's sub-target.
///
/// Selection keeps picking until 80% of the sub-target is reached and
/// rejects any pick that would push past 120%.
pub const SLOT_LOWER_BAND: f64 = 0.8;
pub const SLOT_UPPER_BAND: f64 = 1.2;

/// Daily deficit applied for a weight-loss goal.
pub const LOSE_DEFICIT_KCAL: i32 = 500;

/// Daily surplus applied for a weight-gain goal.
pub const GAIN_SURPLUS_KCAL: i32 = 300;

/// Calorie share for a slot.
pub fn slot_share(slot: MealSlot) -> f64 {
    match slot {
        MealSlot::Breakfast => BREAKFAST_SHARE,
        MealSlot::Lunch => LUNCH_SHARE,
        MealSlot::Dinner => DINNER_SHARE,
        MealSlot::Snack => SNACK_SHARE,
    }
}
