use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four fixed meal categories.
///
/// Declaration order is display order; `Ord` derives from it, so ordered
/// maps keyed by slot iterate breakfast, lunch, dinner, snack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    /// All slots in display order.
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];

    /// Human-readable slot name.
    pub fn label(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snack => "Snack",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A food catalog entry.
///
/// Field names match the catalog records verbatim (`meal_type`,
/// `serving_size`, ...). Entries are read-only once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub meal_type: MealSlot,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub serving_size: String,
}

impl FoodItem {
    /// One-line macro breakdown for display.
    pub fn macro_string(&self) -> String {
        format!(
            "P: {}g | C: {}g | F: {}g",
            self.protein, self.carbs, self.fat
        )
    }
}
