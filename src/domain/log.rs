use serde::{Deserialize, Serialize};

use super::{FoodItem, KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};

/// One logged meal: a portion of a food, with its derived nutrition.
///
/// The derived values are a snapshot taken when the meal is logged. They
/// are stored, not recomputed, so a later edit to the food's profile never
/// retroactively changes historical entries. `name` is a by-name reference
/// to the food, not an ownership relation; the food may be edited or
/// removed without invalidating the entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Name of the food this entry snapshots.
    pub name: String,
    /// Portion consumed, in grams.
    pub portion: f64,
    /// Calories for this portion, rounded to the nearest kcal.
    pub calories: u32,
    /// Protein for this portion, in grams, rounded to one decimal.
    pub protein: f64,
    /// Carbohydrates for this portion, in grams, rounded to one decimal.
    pub carbs: f64,
    /// Fat for this portion, in grams, rounded to one decimal.
    pub fat: f64,
}

impl LogEntry {
    /// Computes the nutrition for a portion of a food.
    ///
    /// The food's per-100g values are scaled by `portion_g / 100`, and
    /// calories are derived from the unrounded macros at 4 kcal/g for
    /// protein and carbs and 9 kcal/g for fat. Macro grams are then rounded
    /// to one decimal and calories to the nearest integer for storage; the
    /// rounded values are authoritative from that point on and are summed
    /// as-is by reports.
    ///
    /// The caller must have validated `portion_g > 0` beforehand.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_portion(food: &FoodItem, portion_g: f64) -> Self {
        let ratio = portion_g / 100.0;
        let protein = food.protein() * ratio;
        let carbs = food.carbs() * ratio;
        let fat = food.fat() * ratio;
        let calories = fat.mul_add(
            KCAL_PER_G_FAT,
            protein.mul_add(KCAL_PER_G_PROTEIN, carbs * KCAL_PER_G_CARBS),
        );

        Self {
            name: food.name().to_string(),
            portion: portion_g,
            calories: calories.round() as u32,
            protein: round_tenth(protein),
            carbs: round_tenth(carbs),
            fat: round_tenth(fat),
        }
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chicken() -> FoodItem {
        FoodItem::new("Chicken Breast".to_string(), 31.0, 0.0, 3.6).unwrap()
    }

    #[test]
    fn from_portion_scales_by_ratio() {
        let entry = LogEntry::from_portion(&chicken(), 150.0);
        assert_eq!(entry.name, "Chicken Breast");
        assert!((entry.protein - 46.5).abs() < 1e-9);
        assert!((entry.carbs - 0.0).abs() < 1e-9);
        assert!((entry.fat - 5.4).abs() < 1e-9);
        // 46.5 * 4 + 0 + 5.4 * 9 = 234.6 -> 235
        assert_eq!(entry.calories, 235);
    }

    #[test]
    fn calories_use_unrounded_macros() {
        let rice = FoodItem::new("Brown Rice".to_string(), 2.6, 23.0, 0.9).unwrap();
        let entry = LogEntry::from_portion(&rice, 123.0);
        // Stored macros are rounded to one decimal...
        assert!((entry.protein - 3.2).abs() < 1e-9);
        assert!((entry.carbs - 28.3).abs() < 1e-9);
        assert!((entry.fat - 1.1).abs() < 1e-9);
        // ...but calories come from the raw values:
        // 3.198 * 4 + 28.29 * 4 + 1.107 * 9 = 135.915 -> 136
        assert_eq!(entry.calories, 136);
    }

    #[test]
    fn hundred_grams_is_the_profile_itself() {
        let entry = LogEntry::from_portion(&chicken(), 100.0);
        assert!((entry.protein - 31.0).abs() < 1e-9);
        assert!((entry.fat - 3.6).abs() < 1e-9);
        // 31 * 4 + 3.6 * 9 = 156.4 -> 156
        assert_eq!(entry.calories, 156);
    }

    #[test]
    fn snapshot_survives_json_round_trip() {
        let entry = LogEntry::from_portion(&chicken(), 150.0);
        let json = serde_json::to_string(&entry).unwrap();
        let restored: LogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, entry);
    }
}
