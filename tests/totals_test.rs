// ABOUTME: Integration tests for totals and time-window aggregates over a meal log
// ABOUTME: Covers daily averages, macro calorie ratio, time-of-day buckets, weekly comparison and rankings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSathi Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Datelike, Weekday};
use nutrisathi::models::{MealRecord, MealType};
use nutrisathi::energy_target::compute_energy_target;
use nutrisathi::totals::{
    daily_averages, macro_calorie_ratio, meals_by_time_of_day, meals_on_date, per_meal_averages,
    remaining_for_date, top_meals_by_calories, totals_all_time, totals_by_meal_type,
    totals_for_date, trend_series, week_over_week, week_start, TimeOfDay, TrendGranularity,
};

mod common;

// ============================================================================
// TOTALS AND AVERAGES
// ============================================================================

#[test]
fn test_empty_log_is_guarded() {
    common::init_test_logging();
    let averages = daily_averages(&[]);

    assert_eq!(averages.num_distinct_days, 1);
    assert!(averages.calories_per_day.abs() < f64::EPSILON);
    assert!(averages.protein_per_day.abs() < f64::EPSILON);
    assert!(averages.carbs_per_day.abs() < f64::EPSILON);
    assert!(averages.fat_per_day.abs() < f64::EPSILON);

    let ratio = macro_calorie_ratio(&[]);
    assert_eq!(
        (ratio.protein_percent, ratio.carbs_percent, ratio.fat_percent),
        (0, 0, 0)
    );
    assert!(!ratio.has_data());
}

#[test]
fn test_daily_averages_divide_by_distinct_local_dates() {
    common::init_test_logging();
    let meals = vec![
        common::meal_with_macros("Idli", "breakfast", 300.0, (10.0, 50.0, 5.0), common::at(2025, 3, 10, 8, 0)),
        common::meal_with_macros("Rajma", "lunch", 500.0, (20.0, 70.0, 12.0), common::at(2025, 3, 10, 13, 0)),
        common::meal_with_macros("Khichdi", "dinner", 400.0, (15.0, 60.0, 8.0), common::at(2025, 3, 11, 20, 0)),
    ];

    let averages = daily_averages(&meals);
    assert_eq!(averages.num_distinct_days, 2);
    assert!((averages.calories_per_day - 600.0).abs() < 1e-9);
    assert!((averages.protein_per_day - 22.5).abs() < 1e-9);
    assert!((averages.carbs_per_day - 90.0).abs() < 1e-9);
    assert!((averages.fat_per_day - 12.5).abs() < 1e-9);

    let all_time = totals_all_time(&meals);
    assert!((all_time.calories - 1200.0).abs() < 1e-9);

    let day = totals_for_date(&meals, common::date(2025, 3, 10));
    assert!((day.calories - 800.0).abs() < 1e-9);
    assert_eq!(meals_on_date(&meals, common::date(2025, 3, 11)).len(), 1);
}

#[test]
fn test_missing_macros_count_as_zero() {
    common::init_test_logging();
    let meals = vec![
        MealRecord::new("Chai", common::at(2025, 3, 10, 7, 0)),
        common::meal_with_macros("Egg bhurji", "breakfast", 250.0, (18.0, 4.0, 18.0), common::at(2025, 3, 10, 8, 0)),
    ];

    let totals = totals_all_time(&meals);
    assert!((totals.calories - 250.0).abs() < f64::EPSILON);
    assert!((totals.protein - 18.0).abs() < f64::EPSILON);
}

// ============================================================================
// MACRO CALORIE RATIO
// ============================================================================

#[test]
fn test_macro_ratio_sums_to_hundred() {
    common::init_test_logging();
    let cases = [(30.0, 50.0, 10.0), (1.0, 1.0, 1.0), (12.3, 45.6, 7.8), (0.0, 0.0, 5.0)];
    for macros in cases {
        let meals = vec![common::meal_with_macros(
            "Mixed",
            "lunch",
            500.0,
            macros,
            common::at(2025, 3, 10, 13, 0),
        )];
        let ratio = macro_calorie_ratio(&meals);
        let sum = u32::from(ratio.protein_percent)
            + u32::from(ratio.carbs_percent)
            + u32::from(ratio.fat_percent);
        assert_eq!(sum, 100, "{macros:?}");
        assert!(ratio.has_data());
    }
}

#[test]
fn test_macro_ratio_uses_atwater_factors() {
    common::init_test_logging();
    // 25 g protein = 100 kcal, 50 g carbs = 200 kcal, 0 fat
    let meals = vec![common::meal_with_macros(
        "Paneer tikka",
        "dinner",
        300.0,
        (25.0, 50.0, 0.0),
        common::at(2025, 3, 10, 20, 0),
    )];
    let ratio = macro_calorie_ratio(&meals);

    assert_eq!(ratio.fat_percent, 0);
    assert_eq!(ratio.protein_percent + ratio.carbs_percent, 100);
    assert!(ratio.carbs_percent > ratio.protein_percent);
}

// ============================================================================
// TIME OF DAY
// ============================================================================

#[test]
fn test_meals_bucketed_by_local_hour() {
    common::init_test_logging();
    let meals = vec![
        common::meal("Upma", "breakfast", 250.0, common::at(2025, 3, 10, 5, 0)),
        common::meal("Thali", "lunch", 700.0, common::at(2025, 3, 10, 12, 0)),
        common::meal("Bhel", "snack", 200.0, common::at(2025, 3, 10, 17, 0)),
        common::meal("Biryani", "dinner", 800.0, common::at(2025, 3, 10, 21, 0)),
        common::meal("Maggi", "other", 350.0, common::at(2025, 3, 11, 0, 30)),
    ];

    let counts = meals_by_time_of_day(&meals);
    assert_eq!(counts.morning, 1);
    assert_eq!(counts.afternoon, 1);
    assert_eq!(counts.evening, 1);
    assert_eq!(counts.night, 2);
    assert_eq!(counts.total(), meals.len());
    assert!((counts.share(TimeOfDay::Night) - 0.4).abs() < 1e-9);
}

#[test]
fn test_time_of_day_share_is_zero_without_meals() {
    common::init_test_logging();
    let counts = meals_by_time_of_day(&[]);
    assert!(counts.share(TimeOfDay::Morning).abs() < f64::EPSILON);
}

// ============================================================================
// WEEK OVER WEEK
// ============================================================================

#[test]
fn test_weeks_start_on_sunday() {
    // 2025-03-10 is a Monday
    let start = week_start(common::date(2025, 3, 10));
    assert_eq!(start, common::date(2025, 3, 9));
    assert_eq!(start.weekday(), Weekday::Sun);
    assert_eq!(week_start(common::date(2025, 3, 9)), common::date(2025, 3, 9));
    assert_eq!(week_start(common::date(2025, 3, 15)), common::date(2025, 3, 9));
}

#[test]
fn test_week_over_week_per_meal_averages() {
    common::init_test_logging();
    let meals = vec![
        common::meal("Older", "lunch", 900.0, common::at(2025, 3, 1, 13, 0)),
        common::meal("Last A", "lunch", 300.0, common::at(2025, 3, 3, 13, 0)),
        common::meal("Last B", "dinner", 500.0, common::at(2025, 3, 8, 20, 0)),
        common::meal("This A", "lunch", 400.0, common::at(2025, 3, 9, 13, 0)),
        common::meal("This B", "dinner", 600.0, common::at(2025, 3, 10, 20, 0)),
        common::meal("Next", "dinner", 1000.0, common::at(2025, 3, 16, 20, 0)),
    ];

    let comparison = week_over_week(&meals, common::at(2025, 3, 10, 21, 0));

    assert_eq!(comparison.current_week_start, Some(common::date(2025, 3, 9)));
    assert_eq!(comparison.current_week.count, 2);
    assert!((comparison.current_week.avg_calories - 500.0).abs() < 1e-9);
    assert_eq!(comparison.last_week.count, 2);
    assert!((comparison.last_week.avg_calories - 400.0).abs() < 1e-9);
}

#[test]
fn test_empty_week_averages_zero() {
    common::init_test_logging();
    let comparison = week_over_week(&[], common::at(2025, 3, 10, 21, 0));
    assert_eq!(comparison.current_week.count, 0);
    assert!(comparison.current_week.avg_calories.abs() < f64::EPSILON);
    assert!(comparison.last_week.avg_protein.abs() < f64::EPSILON);
}

// ============================================================================
// RANKINGS AND MEAL TYPES
// ============================================================================

#[test]
fn test_top_meals_ranked_with_stable_ties() {
    common::init_test_logging();
    let meals = vec![
        common::meal("First 500", "lunch", 500.0, common::at(2025, 3, 10, 13, 0)),
        common::meal("Big", "dinner", 900.0, common::at(2025, 3, 10, 20, 0)),
        common::meal("Second 500", "lunch", 500.0, common::at(2025, 3, 11, 13, 0)),
        MealRecord::new("Unknown", common::at(2025, 3, 11, 16, 0)),
        common::meal("Small", "snack", 100.0, common::at(2025, 3, 11, 17, 0)),
    ];

    let names: Vec<&str> = top_meals_by_calories(&meals, 3)
        .into_iter()
        .map(|meal| meal.name.as_str())
        .collect();
    assert_eq!(names, vec!["Big", "First 500", "Second 500"]);

    // Absent calories count as 0 and rank last
    let all = top_meals_by_calories(&meals, 10);
    assert_eq!(all.len(), 5);
    assert_eq!(all[4].name, "Unknown");
    assert!(top_meals_by_calories(&meals, 0).is_empty());
}

#[test]
fn test_top_meals_keep_zero_and_absent_calories_in_log_order() {
    common::init_test_logging();
    let meals = vec![
        common::meal("Thali", "lunch", 500.0, common::at(2025, 3, 10, 13, 0)),
        MealRecord::new("Unweighed", common::at(2025, 3, 10, 16, 0)),
        common::meal("Black coffee", "snack", 0.0, common::at(2025, 3, 10, 17, 0)),
    ];

    let names: Vec<&str> = top_meals_by_calories(&meals, 3)
        .into_iter()
        .map(|meal| meal.name.as_str())
        .collect();
    assert_eq!(names, vec!["Thali", "Unweighed", "Black coffee"]);
}

#[test]
fn test_meal_type_breakdown_routes_unknown_labels_to_other() {
    common::init_test_logging();
    let meals = vec![
        common::meal("Dosa", "Breakfast", 350.0, common::at(2025, 3, 10, 8, 0)),
        common::meal("Vada", "evening snack", 150.0, common::at(2025, 3, 10, 17, 0)),
        common::meal("Chaat", "Evening_Snack", 250.0, common::at(2025, 3, 11, 17, 0)),
        common::meal("Juice", "brunch", 120.0, common::at(2025, 3, 11, 11, 0)),
        MealRecord::new("Mystery", common::at(2025, 3, 11, 15, 0)).with_calories(80.0),
    ];

    let breakdown = totals_by_meal_type(&meals);
    assert_eq!(breakdown.breakfast.count, 1);
    assert_eq!(breakdown.evening_snack.count, 2);
    assert!((breakdown.evening_snack.calories - 400.0).abs() < f64::EPSILON);
    assert_eq!(breakdown.get(MealType::Other).count, 2);
    assert!((breakdown.other.calories - 200.0).abs() < f64::EPSILON);
    assert_eq!(breakdown.lunch.count, 0);
}

#[test]
fn test_aggregates_are_idempotent() {
    common::init_test_logging();
    let meals = vec![
        common::meal_with_macros(
            "Upma",
            "breakfast",
            320.0,
            (9.0, 50.0, 10.0),
            common::at(2025, 3, 3, 8, 0),
        ),
        common::meal_with_macros(
            "Rajma",
            "lunch",
            610.0,
            (21.0, 90.0, 14.0),
            common::at(2025, 3, 9, 13, 0),
        ),
        common::meal("Bhel", "snack", 610.0, common::at(2025, 3, 10, 17, 0)),
        common::meal_with_macros(
            "Khichdi",
            "dinner",
            480.0,
            (16.0, 72.0, 12.0),
            common::at(2025, 3, 10, 22, 0),
        ),
        MealRecord::new("Water", common::at(2025, 3, 11, 7, 0)),
    ];
    let now = common::at(2025, 3, 11, 21, 0);

    assert_eq!(totals_all_time(&meals), totals_all_time(&meals));
    assert_eq!(daily_averages(&meals), daily_averages(&meals));
    assert_eq!(macro_calorie_ratio(&meals), macro_calorie_ratio(&meals));
    assert_eq!(meals_by_time_of_day(&meals), meals_by_time_of_day(&meals));
    assert_eq!(week_over_week(&meals, now), week_over_week(&meals, now));
    assert_eq!(totals_by_meal_type(&meals), totals_by_meal_type(&meals));

    let ranked_ids = |meals: &[MealRecord]| {
        top_meals_by_calories(meals, 4)
            .into_iter()
            .map(|meal| meal.id.clone())
            .collect::<Vec<_>>()
    };
    let first = ranked_ids(&meals);
    assert_eq!(first, ranked_ids(&meals));
    // Equal 610 kcal meals keep log order
    assert_eq!(first[0], meals[1].id);
    assert_eq!(first[1], meals[2].id);
}

// ============================================================================
// TRENDS AND REMAINING INTAKE
// ============================================================================

fn trend_log() -> Vec<MealRecord> {
    vec![
        common::meal_with_macros("Paratha", "breakfast", 400.0, (10.0, 50.0, 18.0), common::at(2025, 2, 27, 8, 0)),
        common::meal_with_macros("Pulao", "lunch", 600.0, (14.0, 95.0, 16.0), common::at(2025, 3, 8, 13, 0)),
        common::meal_with_macros("Dosa", "breakfast", 350.0, (8.0, 55.0, 10.0), common::at(2025, 3, 9, 8, 0)),
        common::meal_with_macros("Paneer tikka", "dinner", 450.0, (28.0, 12.0, 30.0), common::at(2025, 3, 9, 20, 0)),
    ]
}

#[test]
fn test_daily_trend_includes_empty_today() {
    common::init_test_logging();
    let points = trend_series(&trend_log(), TrendGranularity::Day, common::date(2025, 3, 10));

    let dates: Vec<_> = points.iter().map(|point| point.period_start).collect();
    assert_eq!(
        dates,
        vec![
            common::date(2025, 2, 27),
            common::date(2025, 3, 8),
            common::date(2025, 3, 9),
            common::date(2025, 3, 10),
        ]
    );
    assert_eq!(points[2].count, 2);
    assert!((points[2].totals.calories - 800.0).abs() < f64::EPSILON);
    assert_eq!(points[3].count, 0);
    assert!(points[3].totals.calories.abs() < f64::EPSILON);
}

#[test]
fn test_weekly_and_monthly_trends() {
    common::init_test_logging();
    let meals = trend_log();
    let today = common::date(2025, 3, 10);

    // Saturday 8 March closes the week of Sunday 2 March; Sunday 9 March opens the next
    let weekly = trend_series(&meals, TrendGranularity::Week, today);
    let starts: Vec<_> = weekly.iter().map(|point| point.period_start).collect();
    assert_eq!(
        starts,
        vec![
            common::date(2025, 2, 23),
            common::date(2025, 3, 2),
            common::date(2025, 3, 9),
        ]
    );
    assert_eq!(weekly[2].count, 2);
    assert!(weekly.iter().all(|point| point.period_start.weekday() == Weekday::Sun));

    let monthly = trend_series(&meals, TrendGranularity::Month, today);
    assert_eq!(monthly.len(), 2);
    assert_eq!(monthly[0].period_start, common::date(2025, 2, 1));
    assert_eq!(monthly[1].count, 3);
    assert!((monthly[1].totals.protein - 50.0).abs() < 1e-9);

    assert!(trend_series(&[], TrendGranularity::Month, today).is_empty());
}

#[test]
fn test_per_meal_averages() {
    common::init_test_logging();
    let averages = per_meal_averages(&trend_log());
    assert!((averages.calories - 450.0).abs() < 1e-9);
    assert!((averages.protein - 15.0).abs() < 1e-9);

    assert!(per_meal_averages(&[]).calories.abs() < f64::EPSILON);
}

#[test]
fn test_remaining_for_date_against_energy_target() {
    let config = common::test_config();
    let target = compute_energy_target(&common::reference_profile(), &config).unwrap();
    let goals = target.nutrient_goals();
    let meals = vec![
        common::meal_with_macros("Chole bhature", "lunch", 1200.0, (30.0, 150.0, 55.0), common::at(2025, 3, 10, 13, 0)),
        common::meal_with_macros("Gulab jamun", "snack", 900.0, (8.0, 140.0, 30.0), common::at(2025, 3, 10, 17, 0)),
        common::meal("Yesterday", "dinner", 800.0, common::at(2025, 3, 9, 20, 0)),
    ];

    let remaining = remaining_for_date(&meals, common::date(2025, 3, 10), &goals);

    // 2100 kcal eaten against 1979: nothing left, never negative
    assert!(remaining.calories.abs() < f64::EPSILON);
    assert!((remaining.protein - (goals.protein - 38.0)).abs() < 1e-9);
    // 45% of 1979 kcal is 222.6 g of carbs, below the 290 g eaten
    assert!(remaining.carbs.abs() < f64::EPSILON);
    assert!(remaining.fat.abs() < f64::EPSILON);

    let untouched = remaining_for_date(&meals, common::date(2025, 3, 11), &goals);
    assert_eq!(untouched, goals);
}
