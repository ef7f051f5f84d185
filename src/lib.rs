//! Command-line nutrition tracking.
//!
//! Foods are defined by their macronutrient profile per 100g. Meals are
//! logged as portion snapshots of a food, daily goals are derived from a
//! calorie target and a fitness mode, and reports aggregate the log against
//! the goals. The whole dataset persists as a single JSON document.

pub mod domain;
pub use domain::{
    CalorieBalance, Dataset, FoodItem, Goals, InvalidModeError, LogEntry, Mode, Totals,
    ValidationError, progress_percent,
};

/// Dataset persistence.
pub mod storage;
pub use storage::{DataStore, StoreError};
