use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN, ValidationError};

/// A fitness mode, naming a fixed macro energy-share distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Muscle gain: 30% protein, 50% carbs, 20% fat.
    Bulking,
    /// Fat loss: 40% protein, 30% carbs, 30% fat.
    Cutting,
    /// Maintenance: 30% protein, 40% carbs, 30% fat.
    Maintain,
}

impl Mode {
    /// Energy shares as (protein, carbs, fat) fractions. Sums to 1.
    const fn shares(self) -> (f64, f64, f64) {
        match self {
            Self::Bulking => (0.30, 0.50, 0.20),
            Self::Cutting => (0.40, 0.30, 0.30),
            Self::Maintain => (0.30, 0.40, 0.30),
        }
    }

    /// The lowercase name used in serialized data and display output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bulking => "bulking",
            Self::Cutting => "cutting",
            Self::Maintain => "maintain",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = InvalidModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("bulking") {
            Ok(Self::Bulking)
        } else if s.eq_ignore_ascii_case("cutting") {
            Ok(Self::Cutting)
        } else if s.eq_ignore_ascii_case("maintain") {
            Ok(Self::Maintain)
        } else {
            Err(InvalidModeError(s.to_string()))
        }
    }
}

/// Error returned when a string names no known fitness mode.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown mode '{0}' (expected bulking, cutting, or maintain)")]
pub struct InvalidModeError(String);

/// Daily calorie and macro gram targets.
///
/// Exactly one `Goals` value is active at a time; setting goals replaces the
/// previous value wholesale. Gram targets are derived from the calorie
/// target by [`Goals::plan`] and stored as whole grams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goals {
    /// Daily calorie target, in kcal.
    calories: u32,
    /// Protein target, in whole grams.
    protein: u32,
    /// Carbohydrate target, in whole grams.
    carbs: u32,
    /// Fat target, in whole grams.
    fat: u32,
    /// The mode the targets were derived for.
    mode: Mode,
}

impl Goals {
    /// Derives gram targets from a calorie target and a fitness mode.
    ///
    /// Each macro's calorie share is divided by its energy density (4 kcal/g
    /// for protein and carbs, 9 kcal/g for fat) and truncated to whole
    /// grams; fractional grams are discarded, not rounded.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonPositiveCalories`] if the calorie
    /// target is zero or negative.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn plan(mode: Mode, calorie_target: f64) -> Result<Self, ValidationError> {
        if calorie_target <= 0.0 {
            return Err(ValidationError::NonPositiveCalories);
        }
        let (protein_share, carbs_share, fat_share) = mode.shares();
        Ok(Self {
            calories: calorie_target as u32,
            protein: (calorie_target * protein_share / KCAL_PER_G_PROTEIN) as u32,
            carbs: (calorie_target * carbs_share / KCAL_PER_G_CARBS) as u32,
            fat: (calorie_target * fat_share / KCAL_PER_G_FAT) as u32,
            mode,
        })
    }

    /// Daily calorie target, in kcal.
    #[must_use]
    pub const fn calories(&self) -> u32 {
        self.calories
    }

    /// Protein target, in grams.
    #[must_use]
    pub const fn protein(&self) -> u32 {
        self.protein
    }

    /// Carbohydrate target, in grams.
    #[must_use]
    pub const fn carbs(&self) -> u32 {
        self.carbs
    }

    /// Fat target, in grams.
    #[must_use]
    pub const fn fat(&self) -> u32 {
        self.fat
    }

    /// The mode the targets were derived for.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }
}

impl Default for Goals {
    /// The seeded goals shipped with a fresh dataset.
    ///
    /// These are the legacy seed values (2500 kcal maintain), carried
    /// verbatim so a fresh dataset matches what earlier data files contain.
    /// Note the protein figure differs from what `plan(Maintain, 2500)`
    /// would derive.
    fn default() -> Self {
        Self {
            calories: 2500,
            protein: 200,
            carbs: 250,
            fat: 83,
            mode: Mode::Maintain,
        }
    }
}
