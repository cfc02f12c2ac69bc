// ABOUTME: Main library entry point for the NutriSathi nutrition core
// ABOUTME: Re-exports the computation stages and provides logging setup and the dashboard facade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSathi Contributors

#![deny(unsafe_code)]

//! # NutriSathi
//!
//! Derived-nutrition computations over a meal log and a user profile: calorie
//! and macro targets, per-slot consumption for a selected date, running
//! totals and time-window aggregates, body-composition classification,
//! rule-based guidance, and logging progress.
//!
//! ## Architecture
//!
//! - **`nutrisathi_core`**: error types, domain models, unit constants
//! - **`nutrisathi_intelligence`**: configuration tables and the computation stages
//! - **this crate**: logging setup and the [`dashboard::DashboardReport`] facade
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::DateTime;
//! use nutrisathi::dashboard::DashboardReport;
//! use nutrisathi::models::{DateSelector, MealRecord, UserProfile};
//! use nutrisathi::NutritionConfig;
//!
//! let now = DateTime::parse_from_rfc3339("2025-03-10T20:00:00+05:30").unwrap();
//! let meals = vec![MealRecord::new("Idli", now).with_meal_type("breakfast").with_calories(240.0)];
//! let report = DashboardReport::build(
//!     &meals,
//!     &UserProfile::default(),
//!     DateSelector::Today,
//!     now,
//!     NutritionConfig::global(),
//! );
//! println!("breakfast kcal: {}", report.slots.breakfast);
//! ```

/// Dashboard facade running every stage against one snapshot
pub mod dashboard;

/// Structured logging configuration
pub mod logging;

pub use nutrisathi_core::{constants, errors, models};
pub use nutrisathi_intelligence::{
    alerts, body_composition, config, energy_target, meal_slots, ratios, recommendations,
    streaks, totals,
};
pub use nutrisathi_intelligence::{
    aggregate_by_slot, aggregate_by_slot_on, check_meal_calories, classify_body,
    compute_energy_target, daily_averages, daily_status, evaluate_rules, general_bmi,
    logging_streak, macro_calorie_ratio, meals_by_time_of_day, meals_on_date,
    nutrient_deficiencies, nutrition_insights, per_meal_averages, progress_summary,
    remaining_for_date, slot_progress, synthesize_recommendations, top_meals_by_calories,
    totals_all_time, totals_by_meal_type, totals_for_date, trend_series, week_over_week,
    ConfigError, NutritionConfig,
};

use crate::errors::{AppError, AppResult};

/// Load and validate configuration, surfacing failures as `AppError`
///
/// Unlike [`NutritionConfig::global`], this does not fall back to defaults.
///
/// # Errors
///
/// Returns `ErrorCode::ConfigInvalid` when an environment override fails to
/// parse or a table fails validation
pub fn load_config() -> AppResult<NutritionConfig> {
    NutritionConfig::load().map_err(|e| AppError::config_invalid(e.to_string()))
}
