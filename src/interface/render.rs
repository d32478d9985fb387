use crate::models::{FoodItem, Goal, MealPlan, MealSlot};
use crate::planner::report::summarize;

/// Display the computed calorie figures.
pub fn display_calorie_info(bmr: f64, tdee: i32, target: i32, goal: Goal) {
    println!();
    println!("=== Daily Calorie Targets ===");
    println!();
    println!("BMR (Basal Metabolic Rate): {:.0} kcal/day", bmr);
    println!("TDEE (Total Daily Energy Expenditure): {} kcal/day", tdee);
    println!("Daily target ({}): {} kcal/day", goal.label(), target);
    println!();
}

/// Display a meal plan grouped by slot, with per-slot and grand totals.
pub fn display_meal_plan(plan: &MealPlan) {
    if plan.is_empty() {
        println!("No meals selected (catalog too sparse for the target).");
        return;
    }

    let summary = summarize(plan);

    println!("=== Meal Plan ===");

    for slot in MealSlot::ALL {
        let items = plan.items(slot);
        if items.is_empty() {
            continue;
        }

        println!();
        println!("{}", slot.label());
        for item in items {
            println!(
                "  {} ({}) - {:.0} kcal",
                item.name, item.serving_size, item.calories
            );
            println!("      {}", item.macro_string());
        }
        println!("  Total: {:.0} kcal", plan.slot_calories(slot));
    }

    println!();
    println!("Daily total: {:.0} kcal", summary.grand_total);
    println!();
}

/// Display a flat list of catalog items.
pub fn display_food_list(items: &[FoodItem], title: &str) {
    if items.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, items.len());
    println!();

    for item in items {
        println!(
            "  [{}] {} ({}) - {:.0} kcal, {}",
            item.meal_type,
            item.name,
            item.serving_size,
            item.calories,
            item.macro_string()
        );
    }

    println!();
}
