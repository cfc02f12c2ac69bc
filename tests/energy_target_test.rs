// ABOUTME: Integration tests for the energy-target engine
// ABOUTME: Covers BMR/TDEE formulas, goal adjustments, the intake floor, macro and meal-slot splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSathi Contributors
//! Energy-target engine tests
//!
//! - Mifflin-St Jeor BMR for male, female and other
//! - TDEE across activity levels and the sedentary default
//! - Goal adjustments, the minimum-intake floor and defaulted goals
//! - Macro split and meal-slot split that sums to the daily target
//! - Insufficient and out-of-range profiles

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrisathi::energy_target::{
    calculate_mifflin_st_jeor, calculate_tdee, compute_energy_target, ValueSource,
};
use nutrisathi::errors::{ProfileError, ProfileField};
use nutrisathi::models::{ActivityLevel, Gender, HealthGoal, UserProfile};

mod common;

// ============================================================================
// BMR AND TDEE
// ============================================================================

#[test]
fn test_reference_profile_bmr_and_tdee() {
    let config = common::test_config();
    let target = compute_energy_target(&common::reference_profile(), &config).unwrap();

    // 10 * 70 + 6.25 * 175 - 5 * 30 + 5 = 1648.75
    assert!((target.bmr - 1648.75).abs() < 1e-9);
    // 1648.75 * 1.2 = 1978.5
    assert!((target.tdee - 1978.5).abs() < 1e-9);
    assert!((target.daily_calorie_target - 1979.0).abs() < f64::EPSILON);
    assert!(target.adjustment.abs() < f64::EPSILON);
    assert_eq!(target.metadata.activity_source, ValueSource::Profile);
    assert_eq!(target.metadata.goal_source, ValueSource::Profile);
}

#[test]
fn test_mifflin_st_jeor_female_typical() {
    let config = common::test_config();
    let bmr = calculate_mifflin_st_jeor(60.0, 165.0, 25, Gender::Female, &config.energy.bmr);

    // 600 + 1031.25 - 125 - 161 = 1345.25
    assert!((bmr - 1345.25).abs() < 1e-9);
}

#[test]
fn test_tdee_all_activity_levels() {
    let config = common::test_config();
    let factors = &config.energy.activity_factors;
    let expected = [
        (ActivityLevel::Sedentary, 1.2),
        (ActivityLevel::LightlyActive, 1.375),
        (ActivityLevel::ModeratelyActive, 1.55),
        (ActivityLevel::VeryActive, 1.725),
        (ActivityLevel::ExtremelyActive, 1.9),
    ];
    for (level, factor) in expected {
        let tdee = calculate_tdee(1500.0, level, factors);
        assert!((tdee - 1500.0 * factor).abs() < 1e-9, "{level:?}");
    }
}

#[test]
fn test_absent_activity_defaults_to_sedentary() {
    let config = common::test_config();
    let profile = UserProfile {
        activity_level: None,
        ..common::reference_profile()
    };
    let target = compute_energy_target(&profile, &config).unwrap();

    assert_eq!(target.metadata.activity_level, ActivityLevel::Sedentary);
    assert_eq!(target.metadata.activity_source, ValueSource::Defaulted);
    assert!((target.tdee - 1978.5).abs() < 1e-9);
}

// ============================================================================
// GOAL ADJUSTMENTS AND FLOOR
// ============================================================================

#[test]
fn test_weight_loss_on_sedentary_profile_hits_floor() {
    let config = common::test_config();
    let target =
        compute_energy_target(&common::profile_with_goal(HealthGoal::WeightLoss), &config)
            .unwrap();

    // 1978.5 - 500 is below BMR * 1.2 = 1978.5, so the floor applies
    assert!(target.metadata.floored_to_minimum);
    assert!((target.daily_calorie_target - 1979.0).abs() < f64::EPSILON);
    assert!((target.goal_adjustment + 500.0).abs() < f64::EPSILON);
    // The floor cancels the deficit
    assert!(target.adjustment.abs() < f64::EPSILON);
    assert!(target.weekly_change_kg.abs() < f64::EPSILON);
    assert_eq!(
        target.tips[0],
        "You're eating at maintenance to keep your current weight"
    );
}

#[test]
fn test_defaulted_activity_weight_loss_reports_floored_adjustment() {
    let config = common::test_config();
    let profile = UserProfile {
        activity_level: None,
        ..common::profile_with_goal(HealthGoal::WeightLoss)
    };
    let target = compute_energy_target(&profile, &config).unwrap();

    assert!(target.metadata.floored_to_minimum);
    assert!(
        (target.daily_calorie_target - (target.tdee + target.adjustment).round()).abs()
            < f64::EPSILON
    );
    assert!(target.adjustment > target.goal_adjustment);
}

#[test]
fn test_weight_loss_on_active_profile() {
    let config = common::test_config();
    let profile = UserProfile {
        activity_level: Some(ActivityLevel::VeryActive),
        ..common::profile_with_goal(HealthGoal::WeightLoss)
    };
    let target = compute_energy_target(&profile, &config).unwrap();

    // TDEE = 1648.75 * 1.725 = 2844.09375; target = round(2344.09375)
    assert!(!target.metadata.floored_to_minimum);
    assert!((target.adjustment + 500.0).abs() < f64::EPSILON);
    assert!(target.tips[0].starts_with("You're in a 500 calorie deficit"));
    assert!((target.daily_calorie_target - 2344.0).abs() < f64::EPSILON);
    assert!((target.weekly_change_kg + 0.45).abs() < 1e-9);

    // 30/40/30 split for weight loss
    assert_eq!(target.macros.protein.percent, 30);
    assert_eq!(target.macros.carbs.percent, 40);
    assert!((target.macros.protein.grams - 2344.0 * 0.30 / 4.0).abs() < 1e-9);
    assert!((target.macros.fat.grams - 2344.0 * 0.30 / 9.0).abs() < 1e-9);

    // 30/35/5/30 slots; lunch absorbs the rounding remainder
    let slots = target.meal_targets;
    assert!((slots.breakfast - 703.0).abs() < f64::EPSILON);
    assert!((slots.lunch - 821.0).abs() < f64::EPSILON);
    assert!((slots.evening_snack - 117.0).abs() < f64::EPSILON);
    assert!((slots.dinner - 703.0).abs() < f64::EPSILON);
    assert!((slots.total() - target.daily_calorie_target).abs() < f64::EPSILON);
}

#[test]
fn test_muscle_building_surplus_and_split() {
    let config = common::test_config();
    let target = compute_energy_target(
        &common::profile_with_goal(HealthGoal::MuscleBuilding),
        &config,
    )
    .unwrap();

    assert!((target.adjustment - 300.0).abs() < f64::EPSILON);
    assert!((target.daily_calorie_target - 2279.0).abs() < f64::EPSILON);
    assert_eq!(
        (
            target.macros.protein.percent,
            target.macros.carbs.percent,
            target.macros.fat.percent
        ),
        (30, 45, 25)
    );
    assert_eq!(target.meal_split.evening_snack_pct, 15);
    assert!(target.weekly_change_kg > 0.0);
}

#[test]
fn test_goal_adjustment_table() {
    let config = common::test_config();
    let profile = UserProfile {
        activity_level: Some(ActivityLevel::ModeratelyActive),
        ..common::reference_profile()
    };
    let expected = [
        (HealthGoal::WeightLoss, -500.0),
        (HealthGoal::WeightGain, 500.0),
        (HealthGoal::MuscleBuilding, 300.0),
        (HealthGoal::Maintenance, 0.0),
        (HealthGoal::BetterNutrition, 0.0),
        (HealthGoal::DiseaseManagement, 0.0),
    ];
    for (goal, adjustment) in expected {
        let profile = UserProfile {
            health_goal: Some(goal),
            ..profile.clone()
        };
        let target = compute_energy_target(&profile, &config).unwrap();
        assert!((target.goal_adjustment - adjustment).abs() < f64::EPSILON, "{goal:?}");
        assert!((target.adjustment - adjustment).abs() < f64::EPSILON, "{goal:?}");
        assert!(
            (target.daily_calorie_target - (target.tdee + adjustment).round()).abs()
                < f64::EPSILON,
            "{goal:?}"
        );
    }
}

#[test]
fn test_absent_goal_is_defaulted_maintenance() {
    let config = common::test_config();
    let profile = UserProfile {
        health_goal: None,
        ..common::reference_profile()
    };
    let target = compute_energy_target(&profile, &config).unwrap();

    assert_eq!(target.metadata.health_goal, HealthGoal::Maintenance);
    assert_eq!(target.metadata.goal_source, ValueSource::Defaulted);
}

// ============================================================================
// MEAL-SLOT SPLIT AND SUPPLEMENTARY OUTPUTS
// ============================================================================

#[test]
fn test_balanced_meal_targets_sum_exactly() {
    let config = common::test_config();
    let target = compute_energy_target(&common::reference_profile(), &config).unwrap();

    // 25/35/10/30 of 1979 rounds to 495/693/198/594 = 1980; lunch gives one back
    let slots = target.meal_targets;
    assert!((slots.breakfast - 495.0).abs() < f64::EPSILON);
    assert!((slots.lunch - 692.0).abs() < f64::EPSILON);
    assert!((slots.evening_snack - 198.0).abs() < f64::EPSILON);
    assert!((slots.dinner - 594.0).abs() < f64::EPSILON);
    assert!((slots.total() - 1979.0).abs() < f64::EPSILON);
}

#[test]
fn test_water_and_tips() {
    let config = common::test_config();
    let target = compute_energy_target(&common::reference_profile(), &config).unwrap();

    assert!((target.water_intake_liters - 2.3).abs() < 1e-9);
    // TDEE 1978.5 rounds to the 1979 target, so this is maintenance
    assert_eq!(
        target.tips[0],
        "You're eating at maintenance to keep your current weight"
    );
    assert!(target
        .tips
        .iter()
        .any(|tip| tip.contains("2.3L of water")));
    assert!(target
        .tips
        .iter()
        .any(|tip| tip.contains("light exercise")));
}

#[test]
fn test_energy_target_is_idempotent() {
    let config = common::test_config();
    let profile = common::profile_with_goal(HealthGoal::WeightGain);
    let first = compute_energy_target(&profile, &config).unwrap();
    let second = compute_energy_target(&profile, &config).unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// INSUFFICIENT AND INVALID PROFILES
// ============================================================================

#[test]
fn test_empty_profile_is_insufficient() {
    let config = common::test_config();
    let err = compute_energy_target(&UserProfile::default(), &config).unwrap_err();

    assert!(err.is_insufficient());
    assert_eq!(
        err.missing_fields(),
        &[
            ProfileField::WeightKg,
            ProfileField::HeightCm,
            ProfileField::Age,
            ProfileField::Gender
        ]
    );
}

#[test]
fn test_partial_profile_lists_only_missing_fields() {
    let config = common::test_config();
    let profile = UserProfile {
        weight_kg: Some(70.0),
        age: Some(30),
        ..UserProfile::default()
    };
    let err = compute_energy_target(&profile, &config).unwrap_err();

    assert_eq!(
        err.missing_fields(),
        &[ProfileField::HeightCm, ProfileField::Gender]
    );
}

#[test]
fn test_implausible_age_is_out_of_range() {
    let config = common::test_config();
    let profile = UserProfile {
        age: Some(5),
        ..common::reference_profile()
    };
    let err = compute_energy_target(&profile, &config).unwrap_err();

    assert!(matches!(
        err,
        ProfileError::OutOfRange {
            field: ProfileField::Age,
            ..
        }
    ));
}
