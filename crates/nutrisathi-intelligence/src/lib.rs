// ABOUTME: Nutrition intelligence for NutriSathi: targets, aggregates, classification, and guidance
// ABOUTME: Pure computation stages over a meal-log snapshot and a user profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSathi Contributors

#![deny(unsafe_code)]

//! # NutriSathi Intelligence
//!
//! Every stage is a pure, synchronous function of its inputs. Nothing here
//! caches derived values or reads the clock; "now" is always an argument.
//!
//! ## Stages
//!
//! - **`energy_target`**: BMR, TDEE, daily calorie target, macro and meal-slot targets
//! - **`meal_slots`**: per-slot calories for one selected date
//! - **`totals`**: running totals, averages, macro ratio, time-of-day, weekly comparison, trends
//! - **`body_composition`**: BMI, body fat, ideal weight, category and risk
//! - **`recommendations`**: ordered guidance rules, deficiency flags and insights
//! - **`alerts`**: per-meal overrun alerts and daily status
//! - **`streaks`**: consecutive logging days, XP, levels and achievements

/// Nutrition configuration tables and the global handle
pub mod config;

/// Guarded ratio and rounding helpers
pub mod ratios;

/// BMR, TDEE and daily targets
pub mod energy_target;

/// Per-slot aggregation for a selected date
pub mod meal_slots;

/// Totals and time-window aggregates
pub mod totals;

/// BMI, body fat and risk classification
pub mod body_composition;

/// Ordered guidance rules, deficiency flags and insights
pub mod recommendations;

/// Per-meal calorie alerts and daily status
pub mod alerts;

/// Logging streaks and progress
pub mod streaks;

pub use alerts::{
    check_meal_calories, daily_status, AlertSeverity, CalorieAlert, DailyStatus, IntakeStatus,
};
pub use body_composition::{
    classify_body, general_bmi, BmiCategory, BmiReading, BodyComposition, RiskLevel, WeightRange,
};
pub use config::{ConfigError, NutritionConfig};
pub use energy_target::{
    compute_energy_target, EnergyTarget, MacroTarget, MacroTargets, MealSlotTargets, ValueSource,
};
pub use meal_slots::{
    aggregate_by_slot, aggregate_by_slot_on, slot_progress, MealSlotAggregate, SlotProgress,
};
pub use recommendations::{
    evaluate_rules, nutrient_deficiencies, nutrition_insights, synthesize_recommendations,
    Insight, InsightKind, Nutrient, NutrientDeficiency, NutritionAggregates, Recommendation,
    RecommendationRule,
};
pub use streaks::{
    logging_streak, progress_summary, total_xp, Achievement, AchievementCategory,
    AchievementStatus, LevelProgress, LevelTitle, ProgressSummary, StreakSummary,
};
pub use totals::{
    daily_averages, macro_calorie_ratio, meals_by_time_of_day, meals_on_date, per_meal_averages,
    remaining_for_date, top_meals_by_calories, totals_all_time, totals_by_meal_type,
    totals_for_date, trend_series, week_over_week, DailyAverages, MacroCalorieRatio,
    MealTypeBreakdown, MealTypeTotals, NutrientTotals, TimeOfDay, TimeOfDayCounts, TrendGranularity,
    TrendPoint, WeekComparison, WeekStats,
};
