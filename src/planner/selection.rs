use crate::models::{FoodItem, MealPlan, MealSlot};
use crate::planner::constants::{slot_share, SLOT_LOWER_BAND, SLOT_UPPER_BAND};

/// Assemble a meal plan approximating `target_calories`.
///
/// The daily target is split across the four slots by fixed shares, then
/// each slot is filled independently by greedy nearest-fit over the
/// catalog items of that slot. Catalog order is preserved and acts as the
/// tie-break order. Deterministic; no state outlives the call.
pub fn select_meals(catalog: &[FoodItem], target_calories: f64) -> MealPlan {
    let mut plan = MealPlan::new();

    for slot in MealSlot::ALL {
        let slot_target = target_calories * slot_share(slot);
        let candidates: Vec<&FoodItem> = catalog
            .iter()
            .filter(|item| item.meal_type == slot)
            .collect();

        let picks = fill_slot(&candidates, slot_target);
        plan.set_items(slot, picks.into_iter().cloned().collect());
    }

    plan
}

/// Greedy nearest-fit for one slot.
///
/// Repeatedly picks the unused candidate whose calories are closest to the
/// remaining sub-target, until 80% of the sub-target is accumulated or the
/// candidates run out. A pick that would push the total past 120% of the
/// sub-target ends the slot on the spot, with no fallback to the
/// next-closest candidate, so a sparse or oversized catalog degrades to a
/// short (possibly empty) selection.
fn fill_slot<'a>(candidates: &[&'a FoodItem], slot_target: f64) -> Vec<&'a FoodItem> {
    let mut selected = Vec::new();
    let mut accumulated = 0.0;
    let mut used = vec![false; candidates.len()];

    while accumulated < slot_target * SLOT_LOWER_BAND && selected.len() < candidates.len() {
        let remaining = slot_target - accumulated;

        // Closest unused candidate; strict `<` keeps the earliest on ties.
        let mut best: Option<(usize, f64)> = None;
        for (index, item) in candidates.iter().enumerate() {
            if used[index] {
                continue;
            }
            let diff = (remaining - item.calories).abs();
            if best.is_none_or(|(_, best_diff)| diff < best_diff) {
                best = Some((index, diff));
            }
        }

        let Some((index, _)) = best else { break };
        let item = candidates[index];

        if accumulated + item.calories <= slot_target * SLOT_UPPER_BAND {
            selected.push(item);
            accumulated += item.calories;
            used[index] = true;
        } else {
            break;
        }
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, slot: MealSlot, cal: f64) -> FoodItem {
        FoodItem {
            name: name.to_string(),
            meal_type: slot,
            calories: cal,
            protein: 10.0,
            carbs: 30.0,
            fat: 8.0,
            serving_size: "1 portion".to_string(),
        }
    }

    #[test]
    fn test_empty_catalog_yields_all_slots_empty() {
        let plan = select_meals(&[], 2000.0);
        for slot in MealSlot::ALL {
            assert!(plan.items(slot).is_empty());
        }
    }

    #[test]
    fn test_zero_target_selects_nothing() {
        let catalog = vec![
            item("Eggs", MealSlot::Breakfast, 150.0),
            item("Rice", MealSlot::Lunch, 200.0),
            item("Soup", MealSlot::Dinner, 180.0),
            item("Nuts", MealSlot::Snack, 90.0),
        ];

        let plan = select_meals(&catalog, 0.0);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_negative_target_selects_nothing() {
        let catalog = vec![item("Eggs", MealSlot::Breakfast, 150.0)];
        let plan = select_meals(&catalog, -500.0);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_single_undersized_item_is_kept() {
        // Target 2000 -> breakfast sub-target 600. A lone 400 kcal item is
        // under the 480 floor, but with nothing else to add the slot ends
        // with it.
        let catalog = vec![item("Porridge", MealSlot::Breakfast, 400.0)];
        let plan = select_meals(&catalog, 2000.0);

        assert_eq!(plan.items(MealSlot::Breakfast).len(), 1);
        assert_eq!(plan.slot_calories(MealSlot::Breakfast), 400.0);
    }

    #[test]
    fn test_oversized_best_candidate_stops_slot() {
        // Breakfast sub-target 600, ceiling 720. The 900 kcal item is the
        // nearest fit (diff 300 vs 400) but breaks the ceiling, and the
        // slot stops rather than falling back to the 200 kcal item.
        let catalog = vec![
            item("Toast", MealSlot::Breakfast, 200.0),
            item("Big Plate", MealSlot::Breakfast, 900.0),
        ];

        let plan = select_meals(&catalog, 2000.0);
        assert!(plan.items(MealSlot::Breakfast).is_empty());
    }

    #[test]
    fn test_tie_breaks_by_catalog_order() {
        // Breakfast sub-target 600; both items have diff 100. The earlier
        // one wins and alone satisfies the 480 floor.
        let catalog = vec![
            item("First", MealSlot::Breakfast, 500.0),
            item("Second", MealSlot::Breakfast, 700.0),
        ];

        let plan = select_meals(&catalog, 2000.0);
        let picks = plan.items(MealSlot::Breakfast);
        assert_eq!(picks.len(), 1);
        assert_eq!(picks[0].name, "First");
    }

    #[test]
    fn test_items_used_at_most_once() {
        // Lunch sub-target 700 at target 2000. Two 300 kcal entries may
        // both be picked, but neither twice.
        let catalog = vec![
            item("Rice Bowl", MealSlot::Lunch, 300.0),
            item("Rice Bowl", MealSlot::Lunch, 300.0),
            item("Side Salad", MealSlot::Lunch, 100.0),
        ];

        let plan = select_meals(&catalog, 2000.0);
        let picks = plan.items(MealSlot::Lunch);

        // Both 300 kcal entries get picked (each index once), reaching the
        // 560 floor without touching the salad.
        assert_eq!(picks.len(), 2);
        assert!(picks.iter().all(|i| i.name == "Rice Bowl"));
        assert_eq!(plan.slot_calories(MealSlot::Lunch), 600.0);
    }

    #[test]
    fn test_slot_totals_stay_within_ceiling() {
        let catalog = vec![
            item("A", MealSlot::Breakfast, 250.0),
            item("B", MealSlot::Breakfast, 180.0),
            item("C", MealSlot::Breakfast, 320.0),
            item("D", MealSlot::Lunch, 400.0),
            item("E", MealSlot::Lunch, 350.0),
            item("F", MealSlot::Dinner, 500.0),
            item("G", MealSlot::Dinner, 220.0),
            item("H", MealSlot::Snack, 120.0),
            item("I", MealSlot::Snack, 80.0),
        ];

        let target = 2200.0;
        let plan = select_meals(&catalog, target);

        for slot in MealSlot::ALL {
            let ceiling = target * slot_share(slot) * SLOT_UPPER_BAND;
            assert!(
                plan.slot_calories(slot) <= ceiling + 1e-9,
                "{slot} exceeded ceiling: {} > {}",
                plan.slot_calories(slot),
                ceiling
            );
        }
    }

    #[test]
    fn test_selection_is_idempotent() {
        let catalog = vec![
            item("A", MealSlot::Breakfast, 250.0),
            item("B", MealSlot::Breakfast, 310.0),
            item("C", MealSlot::Lunch, 450.0),
            item("D", MealSlot::Dinner, 380.0),
            item("E", MealSlot::Snack, 90.0),
        ];

        let first = select_meals(&catalog, 1800.0);
        let second = select_meals(&catalog, 1800.0);
        assert_eq!(first, second);
    }
}
