// ABOUTME: Totals and time-window aggregation over the meal log
// ABOUTME: Running and per-day totals, averages, macro ratios, day-part counts, weekly comparison, trends, top meals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSathi Contributors

//! Totals & Time-Window Aggregator
//!
//! Every aggregate is computed fresh from the meal-log snapshot. Calendar
//! bucketing uses the local date of each record's timestamp, and no function
//! in this module returns `NaN`: empty inputs give zeros.

use crate::ratios::{apportion_to_hundred, safe_ratio};
use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate};
use nutrisathi_core::constants::calendar::{DAYS_IN_WEEK, WEEK_START};
use nutrisathi_core::constants::energy::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use nutrisathi_core::constants::time_of_day::{
    AFTERNOON_START_HOUR, EVENING_START_HOUR, MORNING_START_HOUR, NIGHT_START_HOUR,
};
use nutrisathi_core::models::{MealRecord, MealType};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Summed nutrients
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct NutrientTotals {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
}

impl NutrientTotals {
    fn add(&mut self, meal: &MealRecord) {
        self.calories += meal.calories_or_zero();
        self.protein += meal.protein_or_zero();
        self.carbs += meal.carbs_or_zero();
        self.fat += meal.fat_or_zero();
    }

    fn sum<'a>(meals: impl IntoIterator<Item = &'a MealRecord>) -> Self {
        let mut totals = Self::default();
        for meal in meals {
            totals.add(meal);
        }
        totals
    }

    /// Goal minus these totals, each floored at 0
    #[must_use]
    pub fn remaining_until(&self, goals: &Self) -> Self {
        Self {
            calories: (goals.calories - self.calories).max(0.0),
            protein: (goals.protein - self.protein).max(0.0),
            carbs: (goals.carbs - self.carbs).max(0.0),
            fat: (goals.fat - self.fat).max(0.0),
        }
    }
}

/// Records whose local calendar date equals `date`, in log order
#[must_use]
pub fn meals_on_date(meals: &[MealRecord], date: NaiveDate) -> Vec<&MealRecord> {
    meals.iter().filter(|meal| meal.local_date() == date).collect()
}

/// Totals over the whole log
#[must_use]
pub fn totals_all_time(meals: &[MealRecord]) -> NutrientTotals {
    NutrientTotals::sum(meals)
}

/// Totals for one calendar date
#[must_use]
pub fn totals_for_date(meals: &[MealRecord], date: NaiveDate) -> NutrientTotals {
    NutrientTotals::sum(meals.iter().filter(|meal| meal.local_date() == date))
}

/// Totals divided by the number of distinct logged days
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyAverages {
    /// Average kcal per logged day
    pub calories_per_day: f64,
    /// Average protein grams per logged day
    pub protein_per_day: f64,
    /// Average carbohydrate grams per logged day
    pub carbs_per_day: f64,
    /// Average fat grams per logged day
    pub fat_per_day: f64,
    /// Distinct local dates in the log, at least 1
    pub num_distinct_days: usize,
}

/// Per-day averages over the distinct local dates present in the log
#[must_use]
pub fn daily_averages(meals: &[MealRecord]) -> DailyAverages {
    let days = meals
        .iter()
        .map(MealRecord::local_date)
        .collect::<BTreeSet<_>>()
        .len()
        .max(1);
    let totals = totals_all_time(meals);
    let divisor = days as f64;
    DailyAverages {
        calories_per_day: safe_ratio(totals.calories, divisor),
        protein_per_day: safe_ratio(totals.protein, divisor),
        carbs_per_day: safe_ratio(totals.carbs, divisor),
        fat_per_day: safe_ratio(totals.fat, divisor),
        num_distinct_days: days,
    }
}

/// Nutrients averaged per logged meal; zeros for an empty log
#[must_use]
pub fn per_meal_averages(meals: &[MealRecord]) -> NutrientTotals {
    let totals = totals_all_time(meals);
    let count = meals.len() as f64;
    NutrientTotals {
        calories: safe_ratio(totals.calories, count),
        protein: safe_ratio(totals.protein, count),
        carbs: safe_ratio(totals.carbs, count),
        fat: safe_ratio(totals.fat, count),
    }
}

/// Calories and macros still available on `date` against daily goals
///
/// Each nutrient is floored at 0 once its goal is met.
#[must_use]
pub fn remaining_for_date(
    meals: &[MealRecord],
    date: NaiveDate,
    goals: &NutrientTotals,
) -> NutrientTotals {
    totals_for_date(meals, date).remaining_until(goals)
}

/// Share of macro calories from each macronutrient, whole percent
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroCalorieRatio {
    /// Protein share (0-100)
    pub protein_percent: u8,
    /// Carbohydrate share (0-100)
    pub carbs_percent: u8,
    /// Fat share (0-100)
    pub fat_percent: u8,
}

impl MacroCalorieRatio {
    /// Whether any macro data contributed to the ratio
    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.protein_percent > 0 || self.carbs_percent > 0 || self.fat_percent > 0
    }
}

/// Macro calorie split from protein × 4, carbs × 4 and fat × 9
///
/// The percentages sum to exactly 100, or are all 0 with no macro data.
#[must_use]
pub fn macro_calorie_ratio(meals: &[MealRecord]) -> MacroCalorieRatio {
    let totals = totals_all_time(meals);
    let [protein_percent, carbs_percent, fat_percent] = apportion_to_hundred([
        totals.protein * KCAL_PER_GRAM_PROTEIN,
        totals.carbs * KCAL_PER_GRAM_CARBS,
        totals.fat * KCAL_PER_GRAM_FAT,
    ]);
    MacroCalorieRatio {
        protein_percent,
        carbs_percent,
        fat_percent,
    }
}

/// Part of the day a meal was logged in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    /// 05:00-11:59
    Morning,
    /// 12:00-16:59
    Afternoon,
    /// 17:00-20:59
    Evening,
    /// 21:00-04:59
    Night,
}

impl TimeOfDay {
    /// Bucket a local hour (0-23)
    #[must_use]
    pub const fn from_hour(hour: u32) -> Self {
        if hour >= MORNING_START_HOUR && hour < AFTERNOON_START_HOUR {
            Self::Morning
        } else if hour >= AFTERNOON_START_HOUR && hour < EVENING_START_HOUR {
            Self::Afternoon
        } else if hour >= EVENING_START_HOUR && hour < NIGHT_START_HOUR {
            Self::Evening
        } else {
            Self::Night
        }
    }
}

/// Meal counts per part of day
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeOfDayCounts {
    /// Morning meals
    pub morning: usize,
    /// Afternoon meals
    pub afternoon: usize,
    /// Evening meals
    pub evening: usize,
    /// Night meals
    pub night: usize,
}

impl TimeOfDayCounts {
    /// Total meals counted
    #[must_use]
    pub const fn total(&self) -> usize {
        self.morning + self.afternoon + self.evening + self.night
    }

    /// Count for one part of day
    #[must_use]
    pub const fn get(&self, part: TimeOfDay) -> usize {
        match part {
            TimeOfDay::Morning => self.morning,
            TimeOfDay::Afternoon => self.afternoon,
            TimeOfDay::Evening => self.evening,
            TimeOfDay::Night => self.night,
        }
    }

    /// Fraction of meals in one part of day; 0 with no meals
    #[must_use]
    pub fn share(&self, part: TimeOfDay) -> f64 {
        safe_ratio(self.get(part) as f64, self.total() as f64)
    }
}

/// Histogram of meals by local hour bucket
#[must_use]
pub fn meals_by_time_of_day(meals: &[MealRecord]) -> TimeOfDayCounts {
    let mut counts = TimeOfDayCounts::default();
    for meal in meals {
        match TimeOfDay::from_hour(meal.local_hour()) {
            TimeOfDay::Morning => counts.morning += 1,
            TimeOfDay::Afternoon => counts.afternoon += 1,
            TimeOfDay::Evening => counts.evening += 1,
            TimeOfDay::Night => counts.night += 1,
        }
    }
    counts
}

/// Per-meal averages over one week
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct WeekStats {
    /// Average kcal per meal
    pub avg_calories: f64,
    /// Average protein grams per meal
    pub avg_protein: f64,
    /// Average carbohydrate grams per meal
    pub avg_carbs: f64,
    /// Meals logged in the week
    pub count: usize,
}

impl WeekStats {
    fn from_meals<'a>(meals: impl IntoIterator<Item = &'a MealRecord>) -> Self {
        let mut count = 0_usize;
        let mut totals = NutrientTotals::default();
        for meal in meals {
            totals.add(meal);
            count += 1;
        }
        let divisor = count.max(1) as f64;
        Self {
            avg_calories: safe_ratio(totals.calories, divisor),
            avg_protein: safe_ratio(totals.protein, divisor),
            avg_carbs: safe_ratio(totals.carbs, divisor),
            count,
        }
    }
}

/// Current calendar week against the one before it
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct WeekComparison {
    /// First day of the current week
    pub current_week_start: Option<NaiveDate>,
    /// Week containing the reference date
    pub current_week: WeekStats,
    /// The seven days before the current week
    pub last_week: WeekStats,
}

/// First day of the calendar week containing `date`
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = (7 + date.weekday().num_days_from_monday() - WEEK_START.num_days_from_monday()) % 7;
    date.checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(NaiveDate::MIN)
}

/// Compare per-meal averages of the current and previous calendar weeks
#[must_use]
pub fn week_over_week(meals: &[MealRecord], now: DateTime<FixedOffset>) -> WeekComparison {
    let current_start = week_start(now.date_naive());
    let week = Days::new(DAYS_IN_WEEK);
    let (Some(current_end), Some(last_start)) = (
        current_start.checked_add_days(week),
        current_start.checked_sub_days(week),
    ) else {
        return WeekComparison::default();
    };

    WeekComparison {
        current_week_start: Some(current_start),
        current_week: WeekStats::from_meals(meals_between(meals, current_start, current_end)),
        last_week: WeekStats::from_meals(meals_between(meals, last_start, current_start)),
    }
}

/// Records dated in `[start, end)`
fn meals_between(
    meals: &[MealRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> impl Iterator<Item = &MealRecord> {
    meals.iter().filter(move |meal| {
        let date = meal.local_date();
        date >= start && date < end
    })
}

/// Bucket size for a trend series
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrendGranularity {
    /// One bucket per local date
    Day,
    /// One bucket per calendar week (Sunday start)
    Week,
    /// One bucket per calendar month
    Month,
}

impl TrendGranularity {
    /// First date of the bucket containing `date`
    #[must_use]
    pub fn bucket_start(self, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Day => date,
            Self::Week => week_start(date),
            Self::Month => date.with_day(1).unwrap_or(date),
        }
    }
}

/// Summed nutrients for one bucket of a trend series
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    /// First date of the bucket
    pub period_start: NaiveDate,
    /// Nutrients logged in the bucket
    pub totals: NutrientTotals,
    /// Meals logged in the bucket
    pub count: usize,
}

/// Nutrient totals bucketed by day, week or month, oldest first
///
/// The daily series always contains `today`, with zeros when nothing was
/// logged.
#[must_use]
pub fn trend_series(
    meals: &[MealRecord],
    granularity: TrendGranularity,
    today: NaiveDate,
) -> Vec<TrendPoint> {
    let mut buckets: BTreeMap<NaiveDate, (NutrientTotals, usize)> = BTreeMap::new();
    if granularity == TrendGranularity::Day {
        buckets.insert(today, (NutrientTotals::default(), 0));
    }
    for meal in meals {
        let (totals, count) = buckets
            .entry(granularity.bucket_start(meal.local_date()))
            .or_default();
        totals.add(meal);
        *count += 1;
    }
    buckets
        .into_iter()
        .map(|(period_start, (totals, count))| TrendPoint {
            period_start,
            totals,
            count,
        })
        .collect()
}

/// Highest-calorie meals, ties kept in log order
///
/// Absent calories rank as 0.
#[must_use]
pub fn top_meals_by_calories(meals: &[MealRecord], n: usize) -> Vec<&MealRecord> {
    let mut ranked: Vec<&MealRecord> = meals.iter().collect();
    ranked.sort_by(|a, b| b.calories_or_zero().total_cmp(&a.calories_or_zero()));
    ranked.truncate(n);
    ranked
}

/// Count and calories for one meal type
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MealTypeTotals {
    /// Meals of this type
    pub count: usize,
    /// Calories from this type
    pub calories: f64,
}

/// Totals per meal type, including unrecognized labels under `other`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MealTypeBreakdown {
    /// Breakfast totals
    pub breakfast: MealTypeTotals,
    /// Lunch totals
    pub lunch: MealTypeTotals,
    /// Evening snack totals
    pub evening_snack: MealTypeTotals,
    /// Dinner totals
    pub dinner: MealTypeTotals,
    /// Unrecognized or absent labels
    pub other: MealTypeTotals,
}

impl MealTypeBreakdown {
    /// Totals for one meal type
    #[must_use]
    pub const fn get(&self, meal_type: MealType) -> MealTypeTotals {
        match meal_type {
            MealType::Breakfast => self.breakfast,
            MealType::Lunch => self.lunch,
            MealType::EveningSnack => self.evening_snack,
            MealType::Dinner => self.dinner,
            MealType::Other => self.other,
        }
    }

    fn entry(&mut self, meal_type: MealType) -> &mut MealTypeTotals {
        match meal_type {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::EveningSnack => &mut self.evening_snack,
            MealType::Dinner => &mut self.dinner,
            MealType::Other => &mut self.other,
        }
    }
}

/// Count and calories grouped by folded meal type
#[must_use]
pub fn totals_by_meal_type(meals: &[MealRecord]) -> MealTypeBreakdown {
    let mut breakdown = MealTypeBreakdown::default();
    for meal in meals {
        let entry = breakdown.entry(meal.meal_type());
        entry.count += 1;
        entry.calories += meal.calories_or_zero();
    }
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn test_hour_buckets() {
        assert_eq!(TimeOfDay::from_hour(4), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(20), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(21), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(0), TimeOfDay::Night);
    }

    #[test]
    fn test_week_starts_on_sunday() {
        // 2025-03-12 is a Wednesday
        let wednesday = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        let start = week_start(wednesday);
        assert_eq!(start.weekday(), Weekday::Sun);
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
        assert_eq!(week_start(start), start);
    }

    #[test]
    fn test_month_bucket_starts_on_first() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();
        assert_eq!(
            TrendGranularity::Month.bucket_start(date),
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
        );
        assert_eq!(TrendGranularity::Day.bucket_start(date), date);
    }

    #[test]
    fn test_remaining_is_floored_per_nutrient() {
        let eaten = NutrientTotals {
            calories: 2500.0,
            protein: 40.0,
            carbs: 300.0,
            fat: 20.0,
        };
        let goals = NutrientTotals {
            calories: 2000.0,
            protein: 100.0,
            carbs: 250.0,
            fat: 60.0,
        };
        let remaining = eaten.remaining_until(&goals);
        assert!(remaining.calories.abs() < f64::EPSILON);
        assert!((remaining.protein - 60.0).abs() < f64::EPSILON);
        assert!(remaining.carbs.abs() < f64::EPSILON);
        assert!((remaining.fat - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_share_is_zero() {
        assert!(TimeOfDayCounts::default().share(TimeOfDay::Night).abs() < f64::EPSILON);
    }
}
