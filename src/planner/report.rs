use crate::models::{MealPlan, MealSlot};

/// Calorie total for one non-empty slot.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotTotal {
    pub slot: MealSlot,
    pub calories: f64,
}

/// Display-ready aggregate of a meal plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanSummary {
    /// Per-slot totals in display order, empty slots skipped.
    pub slot_totals: Vec<SlotTotal>,
    /// Sum of all slot totals.
    pub grand_total: f64,
}

/// Sum a plan's calories per slot and overall.
pub fn summarize(plan: &MealPlan) -> PlanSummary {
    let mut slot_totals = Vec::new();
    let mut grand_total = 0.0;

    for slot in MealSlot::ALL {
        if plan.items(slot).is_empty() {
            continue;
        }
        let calories = plan.slot_calories(slot);
        grand_total += calories;
        slot_totals.push(SlotTotal { slot, calories });
    }

    PlanSummary {
        slot_totals,
        grand_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodItem;

    fn item(slot: MealSlot, cal: f64) -> FoodItem {
        FoodItem {
            name: "Test".to_string(),
            meal_type: slot,
            calories: cal,
            protein: 5.0,
            carbs: 10.0,
            fat: 3.0,
            serving_size: "1 portion".to_string(),
        }
    }

    #[test]
    fn test_summarize_skips_empty_slots() {
        let mut plan = MealPlan::new();
        plan.set_items(MealSlot::Breakfast, vec![item(MealSlot::Breakfast, 400.0)]);
        plan.set_items(
            MealSlot::Dinner,
            vec![item(MealSlot::Dinner, 500.0), item(MealSlot::Dinner, 150.0)],
        );

        let summary = summarize(&plan);
        assert_eq!(summary.slot_totals.len(), 2);
        assert_eq!(summary.slot_totals[0].slot, MealSlot::Breakfast);
        assert_eq!(summary.slot_totals[0].calories, 400.0);
        assert_eq!(summary.slot_totals[1].slot, MealSlot::Dinner);
        assert_eq!(summary.slot_totals[1].calories, 650.0);
        assert_eq!(summary.grand_total, 1050.0);
    }

    #[test]
    fn test_summarize_empty_plan() {
        let summary = summarize(&MealPlan::new());
        assert!(summary.slot_totals.is_empty());
        assert_eq!(summary.grand_total, 0.0);
    }
}
