use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{FoodItem, MealSlot};

/// Load catalog items from a JSON file, preserving file order.
pub fn load_items<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let content = fs::read_to_string(path)?;
    let items: Vec<FoodItem> = serde_json::from_str(&content)?;
    Ok(items)
}

/// Load catalog items from a CSV file with a header row, preserving file
/// order.
pub fn load_items_csv<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut items = Vec::new();
    for record in reader.deserialize() {
        let item: FoodItem = record?;
        items.push(item);
    }
    Ok(items)
}

/// Save catalog items to a JSON file.
pub fn save_items<P: AsRef<Path>>(path: P, items: &[FoodItem]) -> Result<()> {
    let json = serde_json::to_string_pretty(items)?;
    fs::write(path, json)?;
    Ok(())
}

/// A small starter catalog for `init`, covering every slot.
pub fn starter_items() -> Vec<FoodItem> {
    fn entry(name: &str, slot: MealSlot, cal: f64, p: f64, c: f64, f: f64, serving: &str) -> FoodItem {
        FoodItem {
            name: name.to_string(),
            meal_type: slot,
            calories: cal,
            protein: p,
            carbs: c,
            fat: f,
            serving_size: serving.to_string(),
        }
    }

    vec![
        entry("Scrambled Eggs", MealSlot::Breakfast, 210.0, 14.0, 2.0, 16.0, "2 eggs"),
        entry("Oatmeal with Banana", MealSlot::Breakfast, 280.0, 8.0, 55.0, 4.0, "1 bowl"),
        entry("Whole Wheat Toast", MealSlot::Breakfast, 140.0, 5.0, 24.0, 2.0, "2 slices"),
        entry("Grilled Chicken Rice", MealSlot::Lunch, 520.0, 35.0, 60.0, 12.0, "1 plate"),
        entry("Beef Stir Fry", MealSlot::Lunch, 450.0, 28.0, 35.0, 20.0, "1 plate"),
        entry("Vegetable Soup", MealSlot::Lunch, 180.0, 6.0, 25.0, 5.0, "1 bowl"),
        entry("Baked Salmon", MealSlot::Dinner, 380.0, 34.0, 2.0, 22.0, "1 fillet"),
        entry("Chicken Salad", MealSlot::Dinner, 320.0, 26.0, 12.0, 18.0, "1 bowl"),
        entry("Tofu Curry", MealSlot::Dinner, 290.0, 18.0, 20.0, 15.0, "1 bowl"),
        entry("Mixed Nuts", MealSlot::Snack, 170.0, 6.0, 6.0, 15.0, "30 g"),
        entry("Apple", MealSlot::Snack, 95.0, 0.5, 25.0, 0.3, "1 medium"),
        entry("Greek Yogurt", MealSlot::Snack, 100.0, 10.0, 6.0, 4.0, "1 cup"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_json_roundtrip_preserves_order() {
        let items = starter_items();

        let file = NamedTempFile::new().unwrap();
        save_items(file.path(), &items).unwrap();

        let reloaded = load_items(file.path()).unwrap();
        assert_eq!(reloaded, items);
    }

    #[test]
    fn test_load_csv() {
        let csv = "name,meal_type,calories,protein,carbs,fat,serving_size\n\
                   Fried Rice,breakfast,400,10,55,14,1 plate\n\
                   Banana,snack,105,1.3,27,0.4,1 medium\n";

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let items = load_items_csv(file.path()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Fried Rice");
        assert_eq!(items[0].meal_type, MealSlot::Breakfast);
        assert_eq!(items[1].calories, 105.0);
    }

    #[test]
    fn test_starter_items_cover_every_slot() {
        let items = starter_items();
        for slot in MealSlot::ALL {
            assert!(items.iter().any(|i| i.meal_type == slot), "no {slot} entry");
        }
    }
}
