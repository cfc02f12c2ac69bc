// ABOUTME: Recommendation and alert configuration for nutrition guidance
// ABOUTME: Thresholds that trigger guidance rules, deficiency flags, insights and per-meal calorie alerts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSathi Contributors

//! Recommendation Configuration
//!
//! Provides the thresholds for the ordered guidance rules, the per-meal
//! analytics flags and the severity cutoff for per-meal calorie alerts.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Thresholds for triggering nutrition recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    /// Average daily kcal above which a weight-loss user is told to cut back
    pub weight_loss_max_daily_calories: f64,
    /// Average daily protein (g) below which a muscle-building user is told to eat more
    pub muscle_building_min_daily_protein_g: f64,
    /// Carbohydrate share of macro calories (percent) considered high
    pub high_carb_percent: u8,
    /// Protein share of macro calories (percent) considered low
    pub low_protein_percent: u8,
    /// Share of meals eaten at night (0-1) considered late-night eating
    pub late_night_meal_share: f64,
    /// Daily average above this multiple of target is over target
    pub above_target_ratio: f64,
    /// Daily average below this multiple of target is under target
    pub below_target_ratio: f64,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            weight_loss_max_daily_calories: 2000.0,
            muscle_building_min_daily_protein_g: 150.0,
            high_carb_percent: 60,
            low_protein_percent: 15,
            late_night_meal_share: 0.3,
            above_target_ratio: 1.1,
            below_target_ratio: 0.8,
        }
    }
}

impl RecommendationThresholds {
    /// Validate threshold ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a percent exceeds 100, a share is outside 0-1,
    /// or the target ratios are out of order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ratios = [
            self.weight_loss_max_daily_calories,
            self.muscle_building_min_daily_protein_g,
            self.late_night_meal_share,
            self.above_target_ratio,
            self.below_target_ratio,
        ];
        if ratios.iter().any(|value| !value.is_finite()) {
            return Err(ConfigError::NotFinite("recommendation thresholds"));
        }
        if self.high_carb_percent > 100 || self.low_protein_percent > 100 {
            return Err(ConfigError::ValueOutOfRange(
                "Macro percent thresholds must be between 0 and 100",
            ));
        }
        if !(0.0..=1.0).contains(&self.late_night_meal_share) {
            return Err(ConfigError::ValueOutOfRange(
                "late_night_meal_share must be between 0.0 and 1.0",
            ));
        }
        if self.below_target_ratio >= self.above_target_ratio {
            return Err(ConfigError::InvalidRange(
                "below_target_ratio must be < above_target_ratio",
            ));
        }
        if self.weight_loss_max_daily_calories <= 0.0
            || self.muscle_building_min_daily_protein_g <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Calorie and protein thresholds must be positive",
            ));
        }
        Ok(())
    }
}

/// Per-meal thresholds for deficiency flags and log insights
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsThresholds {
    /// Average protein per meal (g) below which the deficiency is high severity
    pub protein_high_severity_g: f64,
    /// Average protein per meal (g) below which protein is flagged
    pub protein_low_g: f64,
    /// Average carbohydrate per meal (g) below which carbs are flagged
    pub carbs_low_g: f64,
    /// Average fat per meal (g) below which fat is flagged
    pub fat_low_g: f64,
    /// Average kcal per meal below which intake is called low
    pub low_calorie_average: f64,
    /// Average kcal per meal above which intake is called high
    pub high_calorie_average: f64,
    /// Average protein per meal (g) below which a protein tip is shown
    pub protein_tip_below_g: f64,
    /// Meals needed before the consistency note appears
    pub consistency_min_meals: usize,
}

impl Default for AnalyticsThresholds {
    fn default() -> Self {
        Self {
            protein_high_severity_g: 20.0,
            protein_low_g: 30.0,
            carbs_low_g: 30.0,
            fat_low_g: 10.0,
            low_calorie_average: 1500.0,
            high_calorie_average: 2500.0,
            protein_tip_below_g: 100.0,
            consistency_min_meals: 3,
        }
    }
}

impl AnalyticsThresholds {
    /// Validate threshold ordering
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for non-finite or negative thresholds and for
    /// bounds that are out of order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let grams = [
            self.protein_high_severity_g,
            self.protein_low_g,
            self.carbs_low_g,
            self.fat_low_g,
            self.low_calorie_average,
            self.high_calorie_average,
            self.protein_tip_below_g,
        ];
        if grams.iter().any(|value| !value.is_finite()) {
            return Err(ConfigError::NotFinite("analytics thresholds"));
        }
        if grams.iter().any(|value| *value < 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Analytics thresholds must not be negative",
            ));
        }
        if self.protein_high_severity_g > self.protein_low_g {
            return Err(ConfigError::InvalidRange(
                "protein_high_severity_g must be <= protein_low_g",
            ));
        }
        if self.low_calorie_average >= self.high_calorie_average {
            return Err(ConfigError::InvalidRange(
                "low_calorie_average must be < high_calorie_average",
            ));
        }
        Ok(())
    }
}

/// Per-meal calorie alert configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieAlertConfig {
    /// Excess above this fraction of the slot target is high severity (0.5)
    pub high_severity_excess_ratio: f64,
}

impl Default for CalorieAlertConfig {
    fn default() -> Self {
        Self {
            high_severity_excess_ratio: 0.5,
        }
    }
}

impl CalorieAlertConfig {
    /// Validate the severity cutoff
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFinite` for NaN or infinity and
    /// `ConfigError::ValueOutOfRange` when the ratio is not positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.high_severity_excess_ratio.is_finite() {
            return Err(ConfigError::NotFinite("high_severity_excess_ratio"));
        }
        if self.high_severity_excess_ratio <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "high_severity_excess_ratio must be positive",
            ));
        }
        Ok(())
    }
}
