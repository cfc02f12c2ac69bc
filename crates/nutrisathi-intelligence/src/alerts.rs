// ABOUTME: Calorie alerts for meals that exceed their slot target and daily intake status
// ABOUTME: Severity grading, next-slot lighter suggestions, and over-target detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSathi Contributors

use crate::config::CalorieAlertConfig;
use crate::energy_target::MealSlotTargets;
use crate::meal_slots::{aggregate_by_slot_on, MealSlotAggregate};
use crate::ratios::{round1, safe_percent};
use crate::totals::totals_for_date;
use chrono::NaiveDate;
use nutrisathi_core::models::{MealRecord, MealType};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How far a meal overshot its slot target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    /// Over target by at most the high-severity ratio
    Medium,
    /// Over target by more than the high-severity ratio
    High,
}

/// Alert raised when a meal exceeds its slot target
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalorieAlert {
    /// Severity of the overshoot
    pub severity: AlertSeverity,
    /// Short summary
    pub message: String,
    /// Slot of the meal
    pub meal_type: MealType,
    /// Calories in the meal
    pub meal_calories: f64,
    /// Slot target
    pub meal_target: f64,
    /// Calories above the slot target
    pub excess_calories: f64,
    /// Daily target (sum of slot targets)
    pub daily_target: f64,
    /// Calories consumed today including this meal
    pub total_consumed: f64,
    /// Calories left for the day (negative when over)
    pub remaining: f64,
    /// Percent of the daily target consumed, one decimal
    pub percent_consumed: f64,
    /// Slot that follows this one in the day
    pub next_slot: MealType,
    /// Target of the next slot
    pub next_slot_target: f64,
    /// Lighter options for the next slot
    pub lighter_options: Vec<String>,
}

/// Slot that follows `slot` in the day; dinner stays dinner
#[must_use]
pub const fn next_slot(slot: MealType) -> MealType {
    match slot {
        MealType::Breakfast => MealType::Lunch,
        MealType::Lunch => MealType::EveningSnack,
        MealType::EveningSnack | MealType::Dinner | MealType::Other => MealType::Dinner,
    }
}

/// Lighter meal ideas for a slot, sized from its target
#[must_use]
pub fn lighter_options(slot: MealType, target: f64) -> Vec<String> {
    let kcal = |share: f64| (target * share).floor();
    match slot {
        MealType::Breakfast => vec![
            format!("Oats with fruits (~{} kcal)", kcal(0.8)),
            format!("2 idlis with sambar (~{} kcal)", kcal(0.7)),
            format!("Vegetable upma with chutney (~{} kcal)", kcal(0.75)),
        ],
        MealType::Lunch => vec![
            format!("Grilled chicken salad (~{} kcal)", kcal(0.8)),
            format!("Dal with 1 roti and vegetables (~{} kcal)", kcal(0.75)),
            format!("Vegetable pulao with raita (~{} kcal)", kcal(0.8)),
        ],
        MealType::EveningSnack => vec![
            format!("Handful of nuts (~{} kcal)", kcal(0.5)),
            format!("Fresh fruit salad (~{} kcal)", kcal(0.4)),
            format!("Greek yogurt with berries (~{} kcal)", kcal(0.6)),
        ],
        MealType::Dinner | MealType::Other => vec![
            format!("Grilled fish with vegetables (~{} kcal)", kcal(0.7)),
            format!("Vegetable soup with 1 roti (~{} kcal)", kcal(0.6)),
            format!("Paneer tikka with salad (~{} kcal)", kcal(0.75)),
        ],
    }
}

/// Check a meal against its slot target
///
/// `consumed_today` excludes the meal being checked. Returns `None` when the
/// meal is within target or its type is not one of the four slots.
#[must_use]
pub fn check_meal_calories(
    meal_calories: f64,
    meal_type: MealType,
    targets: &MealSlotTargets,
    consumed_today: f64,
    config: &CalorieAlertConfig,
) -> Option<CalorieAlert> {
    if !meal_type.is_slot() {
        return None;
    }
    let meal_target = targets.get(meal_type);
    if meal_calories <= meal_target {
        return None;
    }

    let excess_calories = meal_calories - meal_target;
    let severity = if excess_calories > meal_target * config.high_severity_excess_ratio {
        AlertSeverity::High
    } else {
        AlertSeverity::Medium
    };
    let daily_target = targets.total();
    let total_consumed = consumed_today.max(0.0) + meal_calories;
    let next = next_slot(meal_type);
    let next_slot_target = targets.get(next);

    debug!(?meal_type, meal_calories, meal_target, ?severity, "meal exceeded slot target");

    Some(CalorieAlert {
        severity,
        message: format!(
            "Your {} exceeded your target by {excess_calories:.0} kcal.",
            meal_type.label().to_lowercase()
        ),
        meal_type,
        meal_calories,
        meal_target,
        excess_calories,
        daily_target,
        total_consumed,
        remaining: daily_target - total_consumed,
        percent_consumed: round1(safe_percent(total_consumed, daily_target)),
        next_slot: next,
        next_slot_target,
        lighter_options: lighter_options(next, next_slot_target),
    })
}

/// Whether the day's intake is over target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IntakeStatus {
    /// At or below the daily target
    OnTrack,
    /// Above the daily target
    OverTarget,
}

/// Calorie summary for one calendar date
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyStatus {
    /// Daily target (kcal)
    pub daily_target: f64,
    /// Calories consumed on the date
    pub total_consumed: f64,
    /// Calories left (negative when over)
    pub remaining: f64,
    /// Percent of target consumed, one decimal; 0 for a zero target
    pub percent_consumed: f64,
    /// Calories per slot on the date
    pub by_slot: MealSlotAggregate,
    /// Meals logged on the date
    pub meals_logged: usize,
    /// Over or on track
    pub status: IntakeStatus,
}

/// Summarize one date's intake against a daily target
#[must_use]
pub fn daily_status(meals: &[MealRecord], date: NaiveDate, daily_target: f64) -> DailyStatus {
    let total_consumed = totals_for_date(meals, date).calories;
    let meals_logged = meals.iter().filter(|meal| meal.local_date() == date).count();
    DailyStatus {
        daily_target,
        total_consumed,
        remaining: daily_target - total_consumed,
        percent_consumed: round1(safe_percent(total_consumed, daily_target)),
        by_slot: aggregate_by_slot_on(meals, date),
        meals_logged,
        status: if total_consumed > daily_target {
            IntakeStatus::OverTarget
        } else {
            IntakeStatus::OnTrack
        },
    }
}
