use serde::{Deserialize, Serialize};

use super::{FoodItem, Goals, LogEntry, ValidationError};

/// The complete tracked state: the food database, the meal log, and the
/// active goals.
///
/// This is the single unit of persistence. Both sequences keep insertion
/// order; for the log, insertion order is chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    foods: Vec<FoodItem>,
    log: Vec<LogEntry>,
    goals: Goals,
}

impl Default for Dataset {
    /// A fresh dataset: five common foods, an empty log, and the seeded
    /// maintain-mode goals.
    fn default() -> Self {
        Self {
            foods: vec![
                FoodItem::seed("Chicken Breast", 31.0, 0.0, 3.6),
                FoodItem::seed("Brown Rice", 2.6, 23.0, 0.9),
                FoodItem::seed("Broccoli", 2.8, 7.0, 0.4),
                FoodItem::seed("Eggs", 13.0, 1.1, 11.0),
                FoodItem::seed("Oatmeal", 13.5, 68.0, 6.5),
            ],
            log: Vec::new(),
            goals: Goals::default(),
        }
    }
}

impl Dataset {
    /// The food database, in insertion order.
    #[must_use]
    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    /// The meal log, in chronological order.
    #[must_use]
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    /// The active goals.
    #[must_use]
    pub const fn goals(&self) -> &Goals {
        &self.goals
    }

    /// Adds a food to the database.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateFood`] if a food with the same
    /// name (compared case-insensitively) already exists.
    pub fn add_food(&mut self, food: FoodItem) -> Result<(), ValidationError> {
        if self.find_food(food.name()).is_some() {
            return Err(ValidationError::DuplicateFood(food.name().to_string()));
        }
        self.foods.push(food);
        Ok(())
    }

    /// Looks up a food by name, case-insensitively.
    #[must_use]
    pub fn find_food(&self, name: &str) -> Option<&FoodItem> {
        self.foods
            .iter()
            .find(|food| food.name().eq_ignore_ascii_case(name))
    }

    /// Looks up a food by its 1-based position in the displayed list.
    #[must_use]
    pub fn food_at(&self, number: usize) -> Option<&FoodItem> {
        number.checked_sub(1).and_then(|index| self.foods.get(index))
    }

    /// Appends a logged meal to the end of the log.
    pub fn push_entry(&mut self, entry: LogEntry) {
        self.log.push(entry);
    }

    /// Replaces the active goals wholesale.
    pub fn set_goals(&mut self, goals: Goals) {
        self.goals = goals;
    }

    /// Clears the meal log. Foods and goals are untouched.
    pub fn clear_log(&mut self) {
        self.log.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Mode;

    #[test]
    fn default_dataset_is_seeded() {
        let dataset = Dataset::default();
        assert_eq!(dataset.foods().len(), 5);
        assert_eq!(dataset.foods()[0].name(), "Chicken Breast");
        assert!(dataset.log().is_empty());
        assert_eq!(dataset.goals().calories(), 2500);
        assert_eq!(dataset.goals().mode(), Mode::Maintain);
    }

    #[test]
    fn find_food_ignores_case() {
        let dataset = Dataset::default();
        assert_eq!(dataset.find_food("oatmeal").unwrap().name(), "Oatmeal");
        assert_eq!(dataset.find_food("BROWN RICE").unwrap().name(), "Brown Rice");
        assert!(dataset.find_food("Pizza").is_none());
    }

    #[test]
    fn food_at_is_one_based() {
        let dataset = Dataset::default();
        assert_eq!(dataset.food_at(1).unwrap().name(), "Chicken Breast");
        assert_eq!(dataset.food_at(5).unwrap().name(), "Oatmeal");
        assert!(dataset.food_at(0).is_none());
        assert!(dataset.food_at(6).is_none());
    }

    #[test]
    fn add_food_rejects_case_insensitive_duplicate() {
        let mut dataset = Dataset::default();
        let duplicate = FoodItem::new("chicken breast".to_string(), 30.0, 0.0, 3.0).unwrap();
        assert_eq!(
            dataset.add_food(duplicate).unwrap_err(),
            ValidationError::DuplicateFood("chicken breast".to_string())
        );
        assert_eq!(dataset.foods().len(), 5);
    }

    #[test]
    fn add_food_appends() {
        let mut dataset = Dataset::default();
        let salmon = FoodItem::new("Salmon".to_string(), 20.0, 0.0, 13.0).unwrap();
        dataset.add_food(salmon).unwrap();
        assert_eq!(dataset.foods().len(), 6);
        assert_eq!(dataset.food_at(6).unwrap().name(), "Salmon");
    }

    #[test]
    fn clear_log_leaves_foods_and_goals() {
        let mut dataset = Dataset::default();
        let food = dataset.find_food("Eggs").unwrap().clone();
        dataset.push_entry(LogEntry::from_portion(&food, 120.0));
        assert_eq!(dataset.log().len(), 1);

        dataset.clear_log();
        assert!(dataset.log().is_empty());
        assert_eq!(dataset.foods().len(), 5);
        assert_eq!(dataset.goals().calories(), 2500);
    }
}
