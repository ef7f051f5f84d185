//! Domain models for nutrition tracking.
//!
//! This module contains the core domain types: foods, log entries, goals,
//! report aggregation, and the dataset that ties them together.

/// Food definitions.
pub mod food;
pub use food::FoodItem;

mod goals;
pub use goals::{Goals, InvalidModeError, Mode};

/// Meal log entries and portion arithmetic.
pub mod log;
pub use log::LogEntry;

mod report;
pub use report::{CalorieBalance, Totals, progress_percent};

mod dataset;
pub use dataset::Dataset;

// Atwater factors: kcal per gram of each macronutrient.
pub(crate) const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub(crate) const KCAL_PER_G_CARBS: f64 = 4.0;
pub(crate) const KCAL_PER_G_FAT: f64 = 9.0;

/// Error returned when user-supplied values fail validation.
///
/// Validation happens at the input boundary, before any computation runs.
/// The computational core assumes pre-validated values and has no error
/// paths of its own.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A food name was empty.
    #[error("food name cannot be empty")]
    EmptyName,

    /// A food with the same name (case-insensitive) already exists.
    #[error("'{0}' is already in the food database")]
    DuplicateFood(String),

    /// A per-100g macro value was negative.
    #[error("nutritional values cannot be negative")]
    NegativeMacro,

    /// A portion size was zero or negative.
    #[error("portion must be greater than 0")]
    NonPositivePortion,

    /// A calorie target was zero or negative.
    #[error("calorie target must be greater than 0")]
    NonPositiveCalories,
}
