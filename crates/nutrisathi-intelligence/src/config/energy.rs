// ABOUTME: Energy-target configuration for BMR, TDEE, goal adjustments, and percent splits
// ABOUTME: Mifflin-St Jeor coefficients, activity factors, macro splits, and meal-slot splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSathi Contributors

//! Energy Target Configuration
//!
//! Tables driving the daily calorie target, its macro split and its
//! distribution across the four meal slots.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use super::error::ConfigError;
use nutrisathi_core::models::{ActivityLevel, Gender, HealthGoal, MealType};
use serde::{Deserialize, Serialize};

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
    /// Constant for other or undisclosed gender: midpoint of male and female (-78)
    pub msj_other_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
            msj_other_constant: -78.0,
        }
    }
}

impl BmrConfig {
    /// Sex-specific constant for a gender
    #[must_use]
    pub const fn constant_for(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.msj_male_constant,
            Gender::Female => self.msj_female_constant,
            Gender::Other => self.msj_other_constant,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extremely active (physical job or training twice a day): 1.9
    pub extremely_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extremely_active: 1.9,
        }
    }
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::ModeratelyActive => self.moderately_active,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::ExtremelyActive => self.extremely_active,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let factors = [
            self.sedentary,
            self.lightly_active,
            self.moderately_active,
            self.very_active,
            self.extremely_active,
        ];
        if factors.iter().any(|f| !(1.0..=2.5).contains(f)) {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be non-decreasing from sedentary to extremely active",
            ));
        }
        Ok(())
    }
}

/// Daily calorie adjustment per health goal (kcal)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Weight loss deficit: -500
    pub weight_loss_kcal: f64,
    /// Weight gain surplus: +500
    pub weight_gain_kcal: f64,
    /// Muscle building surplus: +300
    pub muscle_building_kcal: f64,
    /// Maintenance: 0
    pub maintenance_kcal: f64,
    /// Better nutrition: 0
    pub better_nutrition_kcal: f64,
    /// Disease management: 0
    pub disease_management_kcal: f64,
    /// Minimum safe intake as a multiple of BMR: 1.2
    pub minimum_intake_bmr_factor: f64,
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            weight_loss_kcal: -500.0,
            weight_gain_kcal: 500.0,
            muscle_building_kcal: 300.0,
            maintenance_kcal: 0.0,
            better_nutrition_kcal: 0.0,
            disease_management_kcal: 0.0,
            minimum_intake_bmr_factor: 1.2,
        }
    }
}

impl GoalAdjustmentConfig {
    /// Calorie adjustment for a goal
    #[must_use]
    pub const fn adjustment_for(&self, goal: HealthGoal) -> f64 {
        match goal {
            HealthGoal::WeightLoss => self.weight_loss_kcal,
            HealthGoal::WeightGain => self.weight_gain_kcal,
            HealthGoal::MuscleBuilding => self.muscle_building_kcal,
            HealthGoal::Maintenance => self.maintenance_kcal,
            HealthGoal::BetterNutrition => self.better_nutrition_kcal,
            HealthGoal::DiseaseManagement => self.disease_management_kcal,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let adjustments = [
            self.weight_loss_kcal,
            self.weight_gain_kcal,
            self.muscle_building_kcal,
            self.maintenance_kcal,
            self.better_nutrition_kcal,
            self.disease_management_kcal,
        ];
        if adjustments.iter().any(|a| !a.is_finite()) {
            return Err(ConfigError::NotFinite("goal adjustments"));
        }
        if adjustments.iter().any(|a| a.abs() > 1500.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Goal adjustments must be within +/-1500 kcal",
            ));
        }
        if !(1.0..=2.0).contains(&self.minimum_intake_bmr_factor) {
            return Err(ConfigError::ValueOutOfRange(
                "Minimum intake BMR factor must be between 1.0 and 2.0",
            ));
        }
        Ok(())
    }
}

/// Macro distribution of daily calories (protein%, carbs%, fat%)
///
/// All percentages must sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroDistribution {
    /// Protein percentage (0-100)
    pub protein_pct: u8,
    /// Carbohydrate percentage (0-100)
    pub carbs_pct: u8,
    /// Fat percentage (0-100)
    pub fat_pct: u8,
}

impl MacroDistribution {
    /// Create a new macro distribution
    ///
    /// # Panics
    ///
    /// Panics in debug mode if percentages don't sum to 100
    #[must_use]
    pub const fn new(protein_pct: u8, carbs_pct: u8, fat_pct: u8) -> Self {
        debug_assert!(
            protein_pct
                .saturating_add(carbs_pct)
                .saturating_add(fat_pct)
                == 100,
            "Macro percentages must sum to 100"
        );
        Self {
            protein_pct,
            carbs_pct,
            fat_pct,
        }
    }

    /// Sum of the three percentages
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.protein_pct
            .saturating_add(self.carbs_pct)
            .saturating_add(self.fat_pct)
    }
}

/// Macro split table keyed by health goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Weight loss: 30/40/30
    pub weight_loss: MacroDistribution,
    /// Muscle building and weight gain: 30/45/25
    pub muscle_gain: MacroDistribution,
    /// Every other goal: 25/45/30
    pub balanced: MacroDistribution,
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            weight_loss: MacroDistribution::new(30, 40, 30),
            muscle_gain: MacroDistribution::new(30, 45, 25),
            balanced: MacroDistribution::new(25, 45, 30),
        }
    }
}

impl MacroSplitConfig {
    /// Split for a goal
    #[must_use]
    pub const fn split_for(&self, goal: HealthGoal) -> MacroDistribution {
        match goal {
            HealthGoal::WeightLoss => self.weight_loss,
            HealthGoal::MuscleBuilding | HealthGoal::WeightGain => self.muscle_gain,
            HealthGoal::Maintenance | HealthGoal::BetterNutrition | HealthGoal::DiseaseManagement => {
                self.balanced
            }
        }
    }

    /// Validate that all macro distributions sum to 100%
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::SplitSum` if any split does not sum to exactly 100.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let splits = [
            ("weight_loss", self.weight_loss),
            ("muscle_gain", self.muscle_gain),
            ("balanced", self.balanced),
        ];
        for (name, split) in splits {
            if split.total() != 100 {
                tracing::warn!(split = name, total = split.total(), "macro split does not sum to 100");
                return Err(ConfigError::SplitSum(
                    "Macro split percentages must sum to 100",
                ));
            }
        }
        Ok(())
    }
}

/// Share of the daily target per meal slot (percent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealDistribution {
    /// Breakfast percentage
    pub breakfast_pct: u8,
    /// Lunch percentage
    pub lunch_pct: u8,
    /// Evening snack percentage
    pub evening_snack_pct: u8,
    /// Dinner percentage
    pub dinner_pct: u8,
}

impl MealDistribution {
    /// Create a new meal distribution
    ///
    /// # Panics
    ///
    /// Panics in debug mode if percentages don't sum to 100
    #[must_use]
    pub const fn new(breakfast_pct: u8, lunch_pct: u8, evening_snack_pct: u8, dinner_pct: u8) -> Self {
        debug_assert!(
            breakfast_pct
                .saturating_add(lunch_pct)
                .saturating_add(evening_snack_pct)
                .saturating_add(dinner_pct)
                == 100,
            "Meal percentages must sum to 100"
        );
        Self {
            breakfast_pct,
            lunch_pct,
            evening_snack_pct,
            dinner_pct,
        }
    }

    /// Percentage for a slot; `Other` has no share
    #[must_use]
    pub const fn pct_for(&self, slot: MealType) -> u8 {
        match slot {
            MealType::Breakfast => self.breakfast_pct,
            MealType::Lunch => self.lunch_pct,
            MealType::EveningSnack => self.evening_snack_pct,
            MealType::Dinner => self.dinner_pct,
            MealType::Other => 0,
        }
    }

    /// Slot with the largest share; the earliest slot wins ties
    #[must_use]
    pub fn largest_slot(&self) -> MealType {
        MealType::SLOTS
            .into_iter()
            .rev()
            .max_by_key(|slot| self.pct_for(*slot))
            .unwrap_or(MealType::Lunch)
    }

    /// Sum of the four percentages
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.breakfast_pct
            .saturating_add(self.lunch_pct)
            .saturating_add(self.evening_snack_pct)
            .saturating_add(self.dinner_pct)
    }
}

/// Meal-slot split table keyed by health goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSplitConfig {
    /// Default: 25/35/10/30
    pub balanced: MealDistribution,
    /// Weight loss: 30/35/5/30
    pub weight_loss: MealDistribution,
    /// Muscle building and weight gain: 25/30/15/30
    pub muscle_gain: MealDistribution,
}

impl Default for MealSplitConfig {
    fn default() -> Self {
        Self {
            balanced: MealDistribution::new(25, 35, 10, 30),
            weight_loss: MealDistribution::new(30, 35, 5, 30),
            muscle_gain: MealDistribution::new(25, 30, 15, 30),
        }
    }
}

impl MealSplitConfig {
    /// Split for a goal
    #[must_use]
    pub const fn split_for(&self, goal: HealthGoal) -> MealDistribution {
        match goal {
            HealthGoal::WeightLoss => self.weight_loss,
            HealthGoal::MuscleBuilding | HealthGoal::WeightGain => self.muscle_gain,
            HealthGoal::Maintenance | HealthGoal::BetterNutrition | HealthGoal::DiseaseManagement => {
                self.balanced
            }
        }
    }

    /// Validate that all meal distributions sum to 100%
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::SplitSum` if any split does not sum to exactly 100.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let splits = [
            ("balanced", self.balanced),
            ("weight_loss", self.weight_loss),
            ("muscle_gain", self.muscle_gain),
        ];
        for (name, split) in splits {
            if split.total() != 100 {
                tracing::warn!(split = name, total = split.total(), "meal split does not sum to 100");
                return Err(ConfigError::SplitSum(
                    "Meal split percentages must sum to 100",
                ));
            }
        }
        Ok(())
    }
}

/// Energy-target configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnergyTargetConfig {
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// Activity multipliers for TDEE
    pub activity_factors: ActivityFactorsConfig,
    /// Goal adjustments and the minimum-intake floor
    pub goal_adjustments: GoalAdjustmentConfig,
    /// Macro split per goal
    pub macro_splits: MacroSplitConfig,
    /// Meal-slot split per goal
    pub meal_splits: MealSplitConfig,
}

impl EnergyTargetConfig {
    /// Validate all energy tables
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found across the tables.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.activity_factors.validate()?;
        self.goal_adjustments.validate()?;
        self.macro_splits.validate()?;
        self.meal_splits.validate()
    }
}
