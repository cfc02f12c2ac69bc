// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Energy conversions, biometric limits, day-part boundaries, calendar and XP constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSathi Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large file. Values that users may reasonably tune (goal adjustments, macro
//! splits, recommendation thresholds) live in the intelligence configuration
//! instead.

/// Energy conversion factors
pub mod energy {
    /// Energy yield of protein (kcal per gram)
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

    /// Energy yield of carbohydrate (kcal per gram)
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

    /// Energy yield of fat (kcal per gram)
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

    /// Approximate energy content of one kilogram of body weight change
    pub const KCAL_PER_KG_BODY_WEIGHT: f64 = 7700.0;

    /// Days per week used for weekly projections
    pub const DAYS_PER_WEEK: f64 = 7.0;

    /// Daily water recommendation per kilogram of body weight (liters)
    pub const WATER_LITERS_PER_KG: f64 = 0.033;
}

/// Accepted ranges for biometric profile values
///
/// Mifflin-St Jeor is validated for ages 10 and above; weights and heights
/// outside these bounds are treated as data-entry errors.
pub mod profile_limits {
    /// Maximum plausible body weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 300.0;

    /// Maximum plausible height (cm)
    pub const MAX_HEIGHT_CM: f64 = 300.0;

    /// Minimum age (years)
    pub const MIN_AGE_YEARS: u32 = 10;

    /// Maximum age (years)
    pub const MAX_AGE_YEARS: u32 = 120;
}

/// Hour-of-day boundaries for the time-of-day histogram (local hours, start inclusive)
pub mod time_of_day {
    /// Morning starts at 05:00
    pub const MORNING_START_HOUR: u32 = 5;

    /// Afternoon starts at 12:00
    pub const AFTERNOON_START_HOUR: u32 = 12;

    /// Evening starts at 17:00
    pub const EVENING_START_HOUR: u32 = 17;

    /// Night starts at 21:00 and runs until morning
    pub const NIGHT_START_HOUR: u32 = 21;
}

/// Calendar constants
pub mod calendar {
    use chrono::Weekday;

    /// First day of a calendar week for week-over-week comparisons
    pub const WEEK_START: Weekday = Weekday::Sun;

    /// Number of days in a calendar week
    pub const DAYS_IN_WEEK: u64 = 7;
}

/// Experience points and levels for logging progress
pub mod gamification {
    /// XP for each logged meal
    pub const XP_PER_MEAL: u64 = 10;

    /// Streak length that earns one streak bonus
    pub const STREAK_BONUS_EVERY_DAYS: u64 = 3;

    /// XP for each completed streak bonus interval
    pub const STREAK_BONUS_XP: u64 = 50;

    /// XP needed to advance one level
    pub const XP_PER_LEVEL: u64 = 100;
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Service name reported by the logging layer
    pub const NUTRISATHI: &str = "nutrisathi";
}
