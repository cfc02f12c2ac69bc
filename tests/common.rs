// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet tracing setup, local-offset timestamps, meal and profile builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSathi Contributors
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nutrisathi`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use nutrisathi::models::{ActivityLevel, Gender, HealthGoal, MealRecord, UserProfile};
use nutrisathi::NutritionConfig;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Default tables, independent of the process environment
pub fn test_config() -> NutritionConfig {
    init_test_logging();
    NutritionConfig::default()
}

/// India Standard Time (+05:30)
pub fn ist() -> FixedOffset {
    FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap()
}

/// Local instant in IST
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<FixedOffset> {
    ist()
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap()
}

/// Calendar date helper
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Meal with a label and calories
pub fn meal(name: &str, meal_type: &str, calories: f64, timestamp: DateTime<FixedOffset>) -> MealRecord {
    MealRecord::new(name, timestamp)
        .with_meal_type(meal_type)
        .with_calories(calories)
}

/// Meal with a label, calories and macros
pub fn meal_with_macros(
    name: &str,
    meal_type: &str,
    calories: f64,
    (protein, carbs, fat): (f64, f64, f64),
    timestamp: DateTime<FixedOffset>,
) -> MealRecord {
    meal(name, meal_type, calories, timestamp).with_macros(protein, carbs, fat)
}

/// 30-year-old sedentary male, 175 cm, 70 kg, maintaining weight
pub fn reference_profile() -> UserProfile {
    UserProfile {
        gender: Some(Gender::Male),
        age: Some(30),
        height_cm: Some(175.0),
        weight_kg: Some(70.0),
        activity_level: Some(ActivityLevel::Sedentary),
        health_goal: Some(HealthGoal::Maintenance),
        ..UserProfile::default()
    }
}

/// Reference profile with a different goal
pub fn profile_with_goal(goal: HealthGoal) -> UserProfile {
    UserProfile {
        health_goal: Some(goal),
        ..reference_profile()
    }
}
