use std::collections::BTreeMap;

use crate::models::{FoodItem, MealSlot};

/// A day's worth of selected items, keyed by meal slot.
///
/// All four slots are always present, possibly empty; iteration follows
/// display order (breakfast, lunch, dinner, snack).
#[derive(Debug, Clone, PartialEq)]
pub struct MealPlan {
    slots: BTreeMap<MealSlot, Vec<FoodItem>>,
}

impl MealPlan {
    /// Create an empty plan with all four slots present.
    pub fn new() -> Self {
        let mut slots = BTreeMap::new();
        for slot in MealSlot::ALL {
            slots.insert(slot, Vec::new());
        }
        Self { slots }
    }

    /// Selected items for a slot, in selection order.
    pub fn items(&self, slot: MealSlot) -> &[FoodItem] {
        self.slots
            .get(&slot)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Replace a slot's items.
    pub fn set_items(&mut self, slot: MealSlot, items: Vec<FoodItem>) {
        self.slots.insert(slot, items);
    }

    /// Total calories selected for a slot.
    pub fn slot_calories(&self, slot: MealSlot) -> f64 {
        self.items(slot).iter().map(|i| i.calories).sum()
    }

    /// True when no slot has any items.
    pub fn is_empty(&self) -> bool {
        self.slots.values().all(Vec::is_empty)
    }

    /// Slots with their items, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (MealSlot, &[FoodItem])> {
        self.slots.iter().map(|(slot, items)| (*slot, items.as_slice()))
    }
}

impl Default for MealPlan {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item(slot: MealSlot, cal: f64) -> FoodItem {
        FoodItem {
            name: "Test".to_string(),
            meal_type: slot,
            calories: cal,
            protein: 10.0,
            carbs: 20.0,
            fat: 5.0,
            serving_size: "1 portion".to_string(),
        }
    }

    #[test]
    fn test_new_plan_has_all_slots() {
        let plan = MealPlan::new();
        let slots: Vec<MealSlot> = plan.iter().map(|(slot, _)| slot).collect();
        assert_eq!(slots, MealSlot::ALL.to_vec());
        assert!(plan.is_empty());
    }

    #[test]
    fn test_slot_calories_sums_items() {
        let mut plan = MealPlan::new();
        plan.set_items(
            MealSlot::Lunch,
            vec![sample_item(MealSlot::Lunch, 300.0), sample_item(MealSlot::Lunch, 450.0)],
        );

        assert_eq!(plan.slot_calories(MealSlot::Lunch), 750.0);
        assert_eq!(plan.slot_calories(MealSlot::Dinner), 0.0);
        assert!(!plan.is_empty());
    }
}
