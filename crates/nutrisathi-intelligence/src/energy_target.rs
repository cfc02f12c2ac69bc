// ABOUTME: Energy-target engine computing BMR, TDEE, daily calorie target, macros, and meal-slot targets
// ABOUTME: Mifflin-St Jeor with goal adjustment, a minimum-intake floor, and exact-sum slot splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSathi Contributors

//! Energy Target Engine
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise Physiology*.
//!
//! The daily target never drops below `BMR × minimum_intake_bmr_factor`, and
//! the four meal-slot targets are whole kilocalories that sum exactly to it.

use crate::config::{
    ActivityFactorsConfig, BmrConfig, MacroDistribution, MealDistribution, NutritionConfig,
};
use crate::ratios::{apportion_total, round1, round2};
use crate::totals::NutrientTotals;
use nutrisathi_core::constants::energy::{
    DAYS_PER_WEEK, KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
    KCAL_PER_KG_BODY_WEIGHT, WATER_LITERS_PER_KG,
};
use nutrisathi_core::errors::ProfileError;
use nutrisathi_core::models::{ActivityLevel, Gender, HealthGoal, MealType, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Computation name reported in insufficiency errors
pub const ENERGY_TARGET_COMPUTATION: &str = "energy_target";

/// Whether an input came from the profile or was defaulted
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ValueSource {
    /// Taken from the user's profile
    Profile,
    /// Absent in the profile; a documented default was used
    Defaulted,
}

/// One macronutrient's share of the daily target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroTarget {
    /// Grams per day
    pub grams: f64,
    /// Kilocalories per day
    pub calories: f64,
    /// Percent of the daily target (0-100)
    pub percent: u8,
}

/// Daily macronutrient targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroTargets {
    /// Protein target
    pub protein: MacroTarget,
    /// Carbohydrate target
    pub carbs: MacroTarget,
    /// Fat target
    pub fat: MacroTarget,
}

/// Whole-kcal targets per meal slot
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MealSlotTargets {
    /// Breakfast target (kcal)
    pub breakfast: f64,
    /// Lunch target (kcal)
    pub lunch: f64,
    /// Evening snack target (kcal)
    pub evening_snack: f64,
    /// Dinner target (kcal)
    pub dinner: f64,
}

impl MealSlotTargets {
    /// Target for a slot; `Other` has none
    #[must_use]
    pub const fn get(&self, slot: MealType) -> f64 {
        match slot {
            MealType::Breakfast => self.breakfast,
            MealType::Lunch => self.lunch,
            MealType::EveningSnack => self.evening_snack,
            MealType::Dinner => self.dinner,
            MealType::Other => 0.0,
        }
    }

    /// Sum of the four slot targets
    #[must_use]
    pub fn total(&self) -> f64 {
        self.breakfast + self.lunch + self.evening_snack + self.dinner
    }
}

/// How the target was derived
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnergyTargetMetadata {
    /// BMR formula used
    pub formula: String,
    /// Activity level applied to TDEE
    pub activity_level: ActivityLevel,
    /// Whether the activity level was defaulted
    pub activity_source: ValueSource,
    /// Goal applied to the adjustment and splits
    pub health_goal: HealthGoal,
    /// Whether the goal was defaulted
    pub goal_source: ValueSource,
    /// Whether the minimum-intake floor raised the target
    pub floored_to_minimum: bool,
}

/// Energy target derived from a complete profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnergyTarget {
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    /// Goal-adjusted daily intake target, whole kcal
    pub daily_calorie_target: f64,
    /// Change from TDEE actually applied, after the minimum-intake floor (kcal)
    pub adjustment: f64,
    /// Table delta for the goal before the floor (kcal)
    pub goal_adjustment: f64,
    /// Macronutrient targets
    pub macros: MacroTargets,
    /// Per-slot targets summing to the daily target
    pub meal_targets: MealSlotTargets,
    /// Slot percentages used for `meal_targets`
    pub meal_split: MealDistribution,
    /// Projected weekly body-weight change (kg, negative for loss)
    pub weekly_change_kg: f64,
    /// Daily water recommendation (liters)
    pub water_intake_liters: f64,
    /// Short tips explaining the target
    pub tips: Vec<String>,
    /// Derivation details
    pub metadata: EnergyTargetMetadata,
}

impl EnergyTarget {
    /// Daily calorie target with the macro gram targets
    #[must_use]
    pub const fn nutrient_goals(&self) -> NutrientTotals {
        NutrientTotals {
            calories: self.daily_calorie_target,
            protein: self.macros.protein.grams,
            carbs: self.macros.carbs.grams,
            fat: self.macros.fat.grams,
        }
    }
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 × `weight_kg`) + (6.25 × `height_cm`) - (5 × age) + `gender_constant`
/// - Male: +5
/// - Female: -161
/// - Other: -78 (midpoint)
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    weight_component + height_component + age_component + config.constant_for(gender)
}

/// Calculate Total Daily Energy Expenditure: TDEE = BMR × activity factor
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    bmr * config.factor_for(activity_level)
}

/// Split a daily target into protein, carbs and fat
#[must_use]
pub fn calculate_macro_targets(daily_calories: f64, split: MacroDistribution) -> MacroTargets {
    let target = |pct: u8, kcal_per_gram: f64| {
        let calories = daily_calories * f64::from(pct) / 100.0;
        MacroTarget {
            grams: calories / kcal_per_gram,
            calories,
            percent: pct,
        }
    };
    MacroTargets {
        protein: target(split.protein_pct, KCAL_PER_GRAM_PROTEIN),
        carbs: target(split.carbs_pct, KCAL_PER_GRAM_CARBS),
        fat: target(split.fat_pct, KCAL_PER_GRAM_FAT),
    }
}

/// Split a whole-kcal daily target across the four slots
///
/// The largest slot absorbs the rounding remainder so the targets sum exactly
/// to `daily_calories`.
#[must_use]
pub fn calculate_meal_targets(daily_calories: f64, split: MealDistribution) -> MealSlotTargets {
    let percents = MealType::SLOTS.map(|slot| split.pct_for(slot));
    let remainder_index = MealType::SLOTS
        .iter()
        .position(|slot| *slot == split.largest_slot())
        .unwrap_or(1);
    let [breakfast, lunch, evening_snack, dinner] =
        apportion_total(daily_calories.round(), percents, remainder_index);
    MealSlotTargets {
        breakfast,
        lunch,
        evening_snack,
        dinner,
    }
}

fn energy_tips(
    daily_target: f64,
    tdee: f64,
    activity_level: ActivityLevel,
    goal: HealthGoal,
    water_liters: f64,
) -> Vec<String> {
    let mut tips = Vec::with_capacity(4);

    let balance = daily_target - tdee.round();
    if balance < 0.0 {
        let deficit = -balance;
        tips.push(format!(
            "You're in a {deficit} calorie deficit (~{}kg/week)",
            round2(deficit * DAYS_PER_WEEK / KCAL_PER_KG_BODY_WEIGHT)
        ));
    } else if balance > 0.0 {
        tips.push(format!(
            "You're in a {balance} calorie surplus (~{}kg/week)",
            round2(balance * DAYS_PER_WEEK / KCAL_PER_KG_BODY_WEIGHT)
        ));
    } else {
        tips.push("You're eating at maintenance to keep your current weight".to_owned());
    }

    tips.push(
        match activity_level {
            ActivityLevel::Sedentary => "Consider adding light exercise to boost metabolism",
            ActivityLevel::LightlyActive => "Good start! Try increasing activity to 3-5 days/week",
            ActivityLevel::ModeratelyActive => "Great activity level! Keep it consistent",
            ActivityLevel::VeryActive => "Excellent! Make sure to fuel your workouts properly",
            ActivityLevel::ExtremelyActive => {
                "Amazing dedication! Ensure adequate recovery and nutrition"
            }
        }
        .to_owned(),
    );

    tips.push(format!(
        "Aim for {water_liters}L of water daily (based on your weight)"
    ));

    match goal {
        HealthGoal::WeightLoss => tips.push(
            "Eat a bigger breakfast and lighter dinner for better weight loss results".to_owned(),
        ),
        HealthGoal::MuscleBuilding | HealthGoal::WeightGain => tips.push(
            "Spread protein intake across all meals and snacks for optimal muscle growth"
                .to_owned(),
        ),
        HealthGoal::Maintenance | HealthGoal::BetterNutrition | HealthGoal::DiseaseManagement => {}
    }

    tips
}

/// Compute the full energy target for a profile
///
/// Requires weight, height, age and gender. An absent activity level
/// defaults to sedentary and an absent goal to maintenance; both are labelled
/// in the metadata.
///
/// # Errors
///
/// Returns [`ProfileError::Insufficient`] listing every missing biometric
/// field, or [`ProfileError::OutOfRange`] for implausible values.
pub fn compute_energy_target(
    profile: &UserProfile,
    config: &NutritionConfig,
) -> Result<EnergyTarget, ProfileError> {
    let bio = profile.require_biometrics(ENERGY_TARGET_COMPUTATION)?;
    let energy = &config.energy;

    let (activity_level, activity_source) = profile.activity_level.map_or(
        (ActivityLevel::Sedentary, ValueSource::Defaulted),
        |level| (level, ValueSource::Profile),
    );
    let (health_goal, goal_source) = profile.health_goal.map_or(
        (HealthGoal::Maintenance, ValueSource::Defaulted),
        |goal| (goal, ValueSource::Profile),
    );

    let bmr = calculate_mifflin_st_jeor(
        bio.weight_kg,
        bio.height_cm,
        bio.age,
        bio.gender,
        &energy.bmr,
    );
    let tdee = calculate_tdee(bmr, activity_level, &energy.activity_factors);

    let goal_adjustment = energy.goal_adjustments.adjustment_for(health_goal);
    let adjusted = tdee + goal_adjustment;
    let minimum_intake = bmr * energy.goal_adjustments.minimum_intake_bmr_factor;
    let floored_to_minimum = adjusted < minimum_intake;
    let adjustment = if floored_to_minimum {
        minimum_intake - tdee
    } else {
        goal_adjustment
    };
    let daily_calorie_target = adjusted.max(minimum_intake).round();

    let macros = calculate_macro_targets(
        daily_calorie_target,
        energy.macro_splits.split_for(health_goal),
    );
    let meal_split = energy.meal_splits.split_for(health_goal);
    let meal_targets = calculate_meal_targets(daily_calorie_target, meal_split);

    let weekly_change_kg =
        round2((daily_calorie_target - tdee) * DAYS_PER_WEEK / KCAL_PER_KG_BODY_WEIGHT);
    let water_intake_liters = round1(bio.weight_kg * WATER_LITERS_PER_KG);

    debug!(
        bmr,
        tdee,
        daily_calorie_target,
        adjustment,
        goal_adjustment,
        floored_to_minimum,
        ?activity_source,
        ?goal_source,
        "computed energy target"
    );

    Ok(EnergyTarget {
        bmr,
        tdee,
        daily_calorie_target,
        adjustment,
        goal_adjustment,
        macros,
        meal_targets,
        meal_split,
        weekly_change_kg,
        water_intake_liters,
        tips: energy_tips(
            daily_calorie_target,
            tdee,
            activity_level,
            health_goal,
            water_intake_liters,
        ),
        metadata: EnergyTargetMetadata {
            formula: "mifflin_st_jeor".to_owned(),
            activity_level,
            activity_source,
            health_goal,
            goal_source,
            floored_to_minimum,
        },
    })
}
