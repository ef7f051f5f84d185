use serde::{Deserialize, Serialize};

use super::ValidationError;

/// A food and its macronutrient profile per 100g.
///
/// Foods are immutable once created. The name acts as a unique
/// case-insensitive key within a [`Dataset`](super::Dataset); uniqueness is
/// enforced where foods are added, not by this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Display name, also the lookup key.
    name: String,
    /// Protein per 100g, in grams.
    protein: f64,
    /// Carbohydrates per 100g, in grams.
    carbs: f64,
    /// Fat per 100g, in grams.
    fat: f64,
}

impl FoodItem {
    /// Creates a food from its name and per-100g macro values.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] if the name is empty or
    /// whitespace, and [`ValidationError::NegativeMacro`] if any macro value
    /// is negative. Zero values are allowed.
    pub fn new(name: String, protein: f64, carbs: f64, fat: f64) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if protein < 0.0 || carbs < 0.0 || fat < 0.0 {
            return Err(ValidationError::NegativeMacro);
        }
        Ok(Self {
            name,
            protein,
            carbs,
            fat,
        })
    }

    /// Builds a known-good seed food without going through validation.
    pub(crate) fn seed(name: &str, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            name: name.to_string(),
            protein,
            carbs,
            fat,
        }
    }

    /// The food's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Protein per 100g, in grams.
    #[must_use]
    pub const fn protein(&self) -> f64 {
        self.protein
    }

    /// Carbohydrates per 100g, in grams.
    #[must_use]
    pub const fn carbs(&self) -> f64 {
        self.carbs
    }

    /// Fat per 100g, in grams.
    #[must_use]
    pub const fn fat(&self) -> f64 {
        self.fat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_zero_macros() {
        let food = FoodItem::new("Chicken Breast".to_string(), 31.0, 0.0, 3.6).unwrap();
        assert_eq!(food.name(), "Chicken Breast");
        assert!((food.carbs() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn new_rejects_negative_macro() {
        let error = FoodItem::new("Mystery".to_string(), -1.0, 0.0, 0.0).unwrap_err();
        assert_eq!(error, ValidationError::NegativeMacro);
    }

    #[test]
    fn new_rejects_empty_name() {
        assert_eq!(
            FoodItem::new(String::new(), 1.0, 1.0, 1.0).unwrap_err(),
            ValidationError::EmptyName
        );
        assert_eq!(
            FoodItem::new("   ".to_string(), 1.0, 1.0, 1.0).unwrap_err(),
            ValidationError::EmptyName
        );
    }

    #[test]
    fn name_case_is_preserved() {
        let food = FoodItem::new("brown rice".to_string(), 2.6, 23.0, 0.9).unwrap();
        assert_eq!(food.name(), "brown rice");
    }
}
