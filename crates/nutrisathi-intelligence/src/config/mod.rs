// ABOUTME: Nutrition configuration container for energy, body-composition, and guidance tables
// ABOUTME: Orchestrates domain-specific configs and provides unified validation, env overrides, and a global handle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSathi Contributors

//! Nutrition Configuration Module
//!
//! Every compute function takes an explicit `&NutritionConfig`; the global
//! handle exists for callers that want process-wide defaults with
//! environment overrides.
//!
//! # Module Structure
//!
//! - `energy` - BMR coefficients, activity factors, goal adjustments, macro and meal splits
//! - `body_composition` - BMI band tables, Deurenberg coefficients, ideal BMI range
//! - `recommendation` - Guidance rule thresholds, analytics flags and calorie alert severity

pub mod body_composition;
pub mod energy;
pub mod error;
pub mod recommendation;

pub use body_composition::{BmiBands, BodyCompositionConfig, DeurenbergConfig};
pub use energy::{
    ActivityFactorsConfig, BmrConfig, EnergyTargetConfig, GoalAdjustmentConfig,
    MacroDistribution, MacroSplitConfig, MealDistribution, MealSplitConfig,
};
pub use error::ConfigError;
pub use recommendation::{AnalyticsThresholds, CalorieAlertConfig, RecommendationThresholds};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static NUTRITION_CONFIG: OnceLock<NutritionConfig> = OnceLock::new();

/// Main nutrition configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Energy-target tables
    pub energy: EnergyTargetConfig,
    /// Body-composition tables
    pub body_composition: BodyCompositionConfig,
    /// Recommendation rule thresholds
    pub recommendations: RecommendationThresholds,
    /// Deficiency and insight thresholds
    pub analytics: AnalyticsThresholds,
    /// Calorie alert severity
    pub alerts: CalorieAlertConfig,
}

impl NutritionConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        NUTRITION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load nutrition config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found in any table
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.energy.validate()?;
        self.body_composition.validate()?;
        self.recommendations.validate()?;
        self.analytics.validate()?;
        self.alerts.validate()
    }

    /// Parse and apply one environment override; unset or non-UTF-8 variables are ignored
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidOverride {
                    var: env_var_name.to_owned(),
                    value: val.clone(),
                })?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Goal adjustments
        let goals = &mut self.energy.goal_adjustments;
        Self::apply_env_var(
            "NUTRISATHI_WEIGHT_LOSS_ADJUSTMENT_KCAL",
            &mut goals.weight_loss_kcal,
        )?;
        Self::apply_env_var(
            "NUTRISATHI_WEIGHT_GAIN_ADJUSTMENT_KCAL",
            &mut goals.weight_gain_kcal,
        )?;
        Self::apply_env_var(
            "NUTRISATHI_MUSCLE_BUILDING_ADJUSTMENT_KCAL",
            &mut goals.muscle_building_kcal,
        )?;
        Self::apply_env_var(
            "NUTRISATHI_MINIMUM_INTAKE_BMR_FACTOR",
            &mut goals.minimum_intake_bmr_factor,
        )?;

        // Activity factors
        let factors = &mut self.energy.activity_factors;
        Self::apply_env_var("NUTRISATHI_SEDENTARY_FACTOR", &mut factors.sedentary)?;
        Self::apply_env_var(
            "NUTRISATHI_LIGHTLY_ACTIVE_FACTOR",
            &mut factors.lightly_active,
        )?;
        Self::apply_env_var(
            "NUTRISATHI_MODERATELY_ACTIVE_FACTOR",
            &mut factors.moderately_active,
        )?;
        Self::apply_env_var("NUTRISATHI_VERY_ACTIVE_FACTOR", &mut factors.very_active)?;
        Self::apply_env_var(
            "NUTRISATHI_EXTREMELY_ACTIVE_FACTOR",
            &mut factors.extremely_active,
        )?;

        // Recommendation thresholds
        let thresholds = &mut self.recommendations;
        Self::apply_env_var(
            "NUTRISATHI_WEIGHT_LOSS_MAX_DAILY_CALORIES",
            &mut thresholds.weight_loss_max_daily_calories,
        )?;
        Self::apply_env_var(
            "NUTRISATHI_MUSCLE_BUILDING_MIN_PROTEIN_G",
            &mut thresholds.muscle_building_min_daily_protein_g,
        )?;
        Self::apply_env_var(
            "NUTRISATHI_HIGH_CARB_PERCENT",
            &mut thresholds.high_carb_percent,
        )?;
        Self::apply_env_var(
            "NUTRISATHI_LOW_PROTEIN_PERCENT",
            &mut thresholds.low_protein_percent,
        )?;
        Self::apply_env_var(
            "NUTRISATHI_LATE_NIGHT_MEAL_SHARE",
            &mut thresholds.late_night_meal_share,
        )?;

        // Analytics
        Self::apply_env_var(
            "NUTRISATHI_LOW_PROTEIN_PER_MEAL_G",
            &mut self.analytics.protein_low_g,
        )?;
        Self::apply_env_var(
            "NUTRISATHI_CONSISTENCY_MIN_MEALS",
            &mut self.analytics.consistency_min_meals,
        )?;

        // Alerts
        Self::apply_env_var(
            "NUTRISATHI_HIGH_SEVERITY_EXCESS_RATIO",
            &mut self.alerts.high_severity_excess_ratio,
        )?;

        Ok(self)
    }
}
