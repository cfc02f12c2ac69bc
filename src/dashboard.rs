// ABOUTME: Dashboard facade running every computation stage once against one meal-log snapshot
// ABOUTME: Produces a serializable report with targets, aggregates, trends, body composition, progress and guidance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSathi Contributors

//! Dashboard report
//!
//! Several views re-derive overlapping aggregates from the same meal log.
//! Building them together from one snapshot keeps them consistent: the slot
//! aggregate, the day totals and the daily status all see the same records.

use chrono::{DateTime, FixedOffset, NaiveDate};
use nutrisathi_core::errors::{ProfileError, ProfileField};
use nutrisathi_core::models::{DateSelector, MealRecord, MealType, UserProfile};
use nutrisathi_intelligence::alerts::{daily_status, DailyStatus};
use nutrisathi_intelligence::body_composition::{
    classify_body, general_bmi, BmiReading, BodyComposition,
};
use nutrisathi_intelligence::config::NutritionConfig;
use nutrisathi_intelligence::energy_target::{compute_energy_target, EnergyTarget};
use nutrisathi_intelligence::meal_slots::{
    aggregate_by_slot_on, slot_progress, MealSlotAggregate, SlotProgress,
};
use nutrisathi_intelligence::recommendations::{
    evaluate_rules, nutrient_deficiencies, nutrition_insights, Insight, NutrientDeficiency,
    NutritionAggregates, Recommendation,
};
use nutrisathi_intelligence::streaks::{
    logging_streak, progress_summary, ProgressSummary, StreakSummary,
};
use nutrisathi_intelligence::totals::{
    remaining_for_date, top_meals_by_calories, totals_all_time, totals_by_meal_type,
    totals_for_date, trend_series, week_over_week, MealTypeBreakdown, NutrientTotals,
    TrendGranularity, TrendPoint, WeekComparison,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info_span, warn};

/// Number of meals listed in the top-meals table
pub const TOP_MEALS_LIMIT: usize = 5;

/// A profile-derived value, or why it could not be derived
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum ProfileStatus<T> {
    /// The profile supported the computation
    Complete(T),
    /// Required fields are absent
    Incomplete {
        /// Fields the user should fill in
        missing: Vec<ProfileField>,
    },
    /// A field is present but implausible
    Invalid {
        /// Description of the offending value
        reason: String,
    },
}

impl<T> ProfileStatus<T> {
    /// The derived value, if any
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Complete(value) => Some(value),
            Self::Incomplete { .. } | Self::Invalid { .. } => None,
        }
    }
}

impl<T> From<Result<T, ProfileError>> for ProfileStatus<T> {
    fn from(result: Result<T, ProfileError>) -> Self {
        match result {
            Ok(value) => Self::Complete(value),
            Err(ProfileError::Insufficient { missing, .. }) => Self::Incomplete { missing },
            Err(err @ ProfileError::OutOfRange { .. }) => {
                warn!(error = %err, "profile value out of range");
                Self::Invalid {
                    reason: err.to_string(),
                }
            }
        }
    }
}

/// Summary row of the top-meals table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopMeal {
    /// Record id
    pub id: String,
    /// Food name
    pub name: String,
    /// Calories
    pub calories: f64,
    /// Folded meal type
    pub meal_type: MealType,
}

impl From<&MealRecord> for TopMeal {
    fn from(meal: &MealRecord) -> Self {
        Self {
            id: meal.id.clone(),
            name: meal.name.clone(),
            calories: meal.calories_or_zero(),
            meal_type: meal.meal_type(),
        }
    }
}

/// Nutrient trends at each granularity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendSeries {
    /// One point per logged date, including today
    pub daily: Vec<TrendPoint>,
    /// One point per calendar week
    pub weekly: Vec<TrendPoint>,
    /// One point per calendar month
    pub monthly: Vec<TrendPoint>,
}

impl TrendSeries {
    fn build(meals: &[MealRecord], today: NaiveDate) -> Self {
        Self {
            daily: trend_series(meals, TrendGranularity::Day, today),
            weekly: trend_series(meals, TrendGranularity::Week, today),
            monthly: trend_series(meals, TrendGranularity::Month, today),
        }
    }
}

/// Every derived view for one snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardReport {
    /// Date the selector resolved to
    pub selected_date: NaiveDate,
    /// Energy target or the missing profile fields
    pub energy_target: ProfileStatus<EnergyTarget>,
    /// Calories per slot on the selected date
    pub slots: MealSlotAggregate,
    /// Slot progress toward targets, when a target exists
    pub slot_progress: Option<SlotProgress>,
    /// Intake status on the selected date, when a target exists
    pub daily_status: Option<DailyStatus>,
    /// Calories and macros left on the selected date, when a target exists
    pub remaining: Option<NutrientTotals>,
    /// Totals on the selected date
    pub day_totals: NutrientTotals,
    /// Totals over the whole log
    pub all_time_totals: NutrientTotals,
    /// Averages, macro ratio and time-of-day counts over the whole log
    pub aggregates: NutritionAggregates,
    /// Current against previous calendar week
    pub week_comparison: WeekComparison,
    /// Daily, weekly and monthly nutrient trends
    pub trends: TrendSeries,
    /// Highest-calorie meals
    pub top_meals: Vec<TopMeal>,
    /// Count and calories per meal type
    pub meal_types: MealTypeBreakdown,
    /// Indian-standard body composition or the missing profile fields
    pub body_composition: ProfileStatus<BodyComposition>,
    /// WHO BMI reading
    pub general_bmi: Option<BmiReading>,
    /// Logging streaks
    pub streak: StreakSummary,
    /// XP, level and achievements
    pub progress: ProgressSummary,
    /// Fired guidance rules in order
    pub recommendations: Vec<Recommendation>,
    /// Low per-meal macronutrient averages
    pub deficiencies: Vec<NutrientDeficiency>,
    /// Observations over the whole log
    pub insights: Vec<Insight>,
}

impl DashboardReport {
    /// Run every stage against one snapshot
    #[must_use]
    pub fn build(
        meals: &[MealRecord],
        profile: &UserProfile,
        selector: DateSelector,
        now: DateTime<FixedOffset>,
        config: &NutritionConfig,
    ) -> Self {
        let span = info_span!("dashboard_report", meals = meals.len(), ?selector);
        let _guard = span.enter();

        let selected_date = selector.resolve(now);

        let energy_target: ProfileStatus<EnergyTarget> =
            compute_energy_target(profile, config).into();
        let body_composition: ProfileStatus<BodyComposition> =
            classify_body(profile, &config.body_composition).into();

        let slots = aggregate_by_slot_on(meals, selected_date);
        let target = energy_target.value();
        let progress = target.map(|t| slot_progress(&slots, &t.meal_targets));
        let status =
            target.map(|t| daily_status(meals, selected_date, t.daily_calorie_target));
        let remaining =
            target.map(|t| remaining_for_date(meals, selected_date, &t.nutrient_goals()));
        let today = now.date_naive();
        let streak = logging_streak(meals, today);

        let aggregates = NutritionAggregates::from_meals(meals);
        let recommendations = evaluate_rules(
            target,
            &aggregates,
            body_composition.value(),
            profile,
            config,
        );

        let report = Self {
            selected_date,
            slots,
            slot_progress: progress,
            daily_status: status,
            remaining,
            day_totals: totals_for_date(meals, selected_date),
            all_time_totals: totals_all_time(meals),
            aggregates,
            week_comparison: week_over_week(meals, now),
            trends: TrendSeries::build(meals, today),
            top_meals: top_meals_by_calories(meals, TOP_MEALS_LIMIT)
                .into_iter()
                .map(TopMeal::from)
                .collect(),
            meal_types: totals_by_meal_type(meals),
            general_bmi: general_bmi(profile, &config.body_composition).ok(),
            progress: progress_summary(meals, &streak),
            streak,
            recommendations,
            deficiencies: nutrient_deficiencies(meals, &config.analytics),
            insights: nutrition_insights(meals, &config.analytics),
            energy_target,
            body_composition,
        };

        debug!(
            %selected_date,
            recommendations = report.recommendations.len(),
            "built dashboard report"
        );
        report
    }
}
