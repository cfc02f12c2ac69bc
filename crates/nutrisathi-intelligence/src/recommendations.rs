// ABOUTME: Recommendation synthesizer evaluating ordered threshold rules over nutrition aggregates
// ABOUTME: Guidance from intake averages, macro ratios, meal timing, targets and BMI, plus deficiency flags and insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSathi Contributors

//! Recommendation Synthesizer
//!
//! Rules are evaluated in the fixed order of [`RecommendationRule::ORDER`].
//! Each predicate is independent; every rule that fires contributes one
//! message and the messages keep the rule order.

use crate::alerts::AlertSeverity;
use crate::body_composition::{BmiCategory, BodyComposition};
use crate::config::{AnalyticsThresholds, NutritionConfig, RecommendationThresholds};
use crate::energy_target::EnergyTarget;
use crate::totals::{
    daily_averages, macro_calorie_ratio, meals_by_time_of_day, per_meal_averages, DailyAverages,
    MacroCalorieRatio, TimeOfDay, TimeOfDayCounts,
};
use nutrisathi_core::models::{HealthGoal, MealRecord, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Meal-log aggregates the rules read
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NutritionAggregates {
    /// Averages per distinct logged day
    pub daily_averages: DailyAverages,
    /// Macro calorie split
    pub macro_ratio: MacroCalorieRatio,
    /// Meals per part of day
    pub time_of_day: TimeOfDayCounts,
    /// Meals in the log
    pub meal_count: usize,
}

impl NutritionAggregates {
    /// Derive every aggregate from one log snapshot
    #[must_use]
    pub fn from_meals(meals: &[MealRecord]) -> Self {
        Self {
            daily_averages: daily_averages(meals),
            macro_ratio: macro_calorie_ratio(meals),
            time_of_day: meals_by_time_of_day(meals),
            meal_count: meals.len(),
        }
    }
}

/// Guidance rules in evaluation order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationRule {
    /// Weight-loss goal with a high daily average
    WeightLossCalorieExcess,
    /// Muscle-building goal with low daily protein
    MuscleBuildingProteinShortfall,
    /// Carbohydrate share above threshold
    HighCarbRatio,
    /// Protein share below threshold
    LowProteinRatio,
    /// Too many meals at night
    LateNightEating,
    /// Daily average well above the calorie target
    AboveCalorieTarget,
    /// Daily average well below the calorie target
    BelowCalorieTarget,
    /// Underweight BMI
    UnderweightBmi,
    /// Overweight BMI
    OverweightBmi,
    /// Obese BMI
    ObeseBmi,
}

/// One fired rule and its message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    /// Rule that fired
    pub rule: RecommendationRule,
    /// Human-readable guidance
    pub message: String,
}

struct RuleInput<'a> {
    energy_target: Option<&'a EnergyTarget>,
    aggregates: &'a NutritionAggregates,
    body: Option<&'a BodyComposition>,
    profile: &'a UserProfile,
    thresholds: &'a RecommendationThresholds,
}

impl RuleInput<'_> {
    fn has_meals(&self) -> bool {
        self.aggregates.meal_count > 0
    }

    fn avg_calories(&self) -> f64 {
        self.aggregates.daily_averages.calories_per_day
    }

    fn bmi_message(&self, category: BmiCategory) -> Option<String> {
        let body = self.body.filter(|body| body.bmi_category == category)?;
        let first = category.guidance().first()?;
        Some(format!(
            "Your BMI of {:.1} is in the {} range. {first}",
            body.bmi,
            category.label().to_lowercase()
        ))
    }

    fn target_calories(&self) -> Option<f64> {
        self.energy_target
            .map(|target| target.daily_calorie_target)
            .filter(|target| *target > 0.0)
    }
}

impl RecommendationRule {
    /// Fixed evaluation order
    pub const ORDER: [Self; 10] = [
        Self::WeightLossCalorieExcess,
        Self::MuscleBuildingProteinShortfall,
        Self::HighCarbRatio,
        Self::LowProteinRatio,
        Self::LateNightEating,
        Self::AboveCalorieTarget,
        Self::BelowCalorieTarget,
        Self::UnderweightBmi,
        Self::OverweightBmi,
        Self::ObeseBmi,
    ];

    fn evaluate(self, input: &RuleInput<'_>) -> Option<String> {
        let t = input.thresholds;
        let agg = input.aggregates;
        match self {
            Self::WeightLossCalorieExcess => (input.has_meals()
                && input.profile.health_goal == Some(HealthGoal::WeightLoss)
                && input.avg_calories() > t.weight_loss_max_daily_calories)
                .then(|| {
                    "Consider reducing daily calorie intake to 1500-1800 kcal for weight loss"
                        .to_owned()
                }),
            Self::MuscleBuildingProteinShortfall => (input.has_meals()
                && input.profile.health_goal == Some(HealthGoal::MuscleBuilding)
                && agg.daily_averages.protein_per_day < t.muscle_building_min_daily_protein_g)
                .then(|| {
                    "Increase protein intake to 1.6-2.2g per kg body weight for muscle building"
                        .to_owned()
                }),
            Self::HighCarbRatio => (agg.macro_ratio.has_data()
                && agg.macro_ratio.carbs_percent > t.high_carb_percent)
                .then(|| {
                    "Your carb intake is high. Consider balancing with more protein and healthy fats"
                        .to_owned()
                }),
            Self::LowProteinRatio => (agg.macro_ratio.has_data()
                && agg.macro_ratio.protein_percent < t.low_protein_percent)
                .then(|| {
                    let base = "Protein intake is low. Aim for 15-30% of total calories from protein";
                    input.profile.dietary_preference.map_or_else(
                        || base.to_owned(),
                        |pref| format!("{base}. Good sources for you: {}", pref.protein_sources()),
                    )
                }),
            Self::LateNightEating => (input.has_meals()
                && agg.time_of_day.share(TimeOfDay::Night) > t.late_night_meal_share)
                .then(|| "Try to avoid heavy meals late at night for better digestion".to_owned()),
            Self::AboveCalorieTarget => input
                .target_calories()
                .filter(|target| {
                    input.has_meals() && input.avg_calories() > target * t.above_target_ratio
                })
                .map(|target| {
                    format!(
                        "Your average intake of {:.0} kcal/day is above your {target:.0} kcal target. Consider lighter portions",
                        input.avg_calories()
                    )
                }),
            Self::BelowCalorieTarget => input
                .target_calories()
                .filter(|target| {
                    input.has_meals() && input.avg_calories() < target * t.below_target_ratio
                })
                .map(|target| {
                    format!(
                        "Your average intake of {:.0} kcal/day is well below your {target:.0} kcal target. Make sure you are eating enough",
                        input.avg_calories()
                    )
                }),
            Self::UnderweightBmi => input.bmi_message(BmiCategory::Underweight),
            Self::OverweightBmi => input.bmi_message(BmiCategory::Overweight),
            Self::ObeseBmi => input.bmi_message(BmiCategory::Obese),
        }
    }
}

/// Evaluate every rule in order and return the ones that fired
#[must_use]
pub fn evaluate_rules(
    energy_target: Option<&EnergyTarget>,
    aggregates: &NutritionAggregates,
    body: Option<&BodyComposition>,
    profile: &UserProfile,
    config: &NutritionConfig,
) -> Vec<Recommendation> {
    let input = RuleInput {
        energy_target,
        aggregates,
        body,
        profile,
        thresholds: &config.recommendations,
    };
    let fired: Vec<Recommendation> = RecommendationRule::ORDER
        .into_iter()
        .filter_map(|rule| {
            rule.evaluate(&input)
                .map(|message| Recommendation { rule, message })
        })
        .collect();
    debug!(fired = fired.len(), "evaluated recommendation rules");
    fired
}

/// Guidance messages in rule order; empty when nothing fires
#[must_use]
pub fn synthesize_recommendations(
    energy_target: Option<&EnergyTarget>,
    aggregates: &NutritionAggregates,
    body: Option<&BodyComposition>,
    profile: &UserProfile,
    config: &NutritionConfig,
) -> Vec<String> {
    evaluate_rules(energy_target, aggregates, body, profile, config)
        .into_iter()
        .map(|recommendation| recommendation.message)
        .collect()
}

/// Nutrient named in a deficiency flag
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Protein
    Protein,
    /// Carbohydrates
    Carbohydrates,
    /// Dietary fat
    HealthyFats,
}

/// A macronutrient whose per-meal average is below threshold
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NutrientDeficiency {
    /// Nutrient that is low
    pub nutrient: Nutrient,
    /// How low it is
    pub severity: AlertSeverity,
    /// Suggested foods
    pub message: String,
}

/// Flag protein, carbs and fat whose per-meal average is low
///
/// An empty log has no deficiencies. Flags come in protein, carbohydrate,
/// fat order.
#[must_use]
pub fn nutrient_deficiencies(
    meals: &[MealRecord],
    thresholds: &AnalyticsThresholds,
) -> Vec<NutrientDeficiency> {
    if meals.is_empty() {
        return Vec::new();
    }
    let avg = per_meal_averages(meals);
    let flag = |nutrient, severity, message: &str| NutrientDeficiency {
        nutrient,
        severity,
        message: message.to_owned(),
    };

    let mut flags = Vec::with_capacity(3);
    if avg.protein < thresholds.protein_high_severity_g {
        flags.push(flag(
            Nutrient::Protein,
            AlertSeverity::High,
            "Very low protein intake. Add eggs, chicken, fish, or legumes.",
        ));
    } else if avg.protein < thresholds.protein_low_g {
        flags.push(flag(
            Nutrient::Protein,
            AlertSeverity::Medium,
            "Low protein. Consider adding more protein-rich foods.",
        ));
    }
    if avg.carbs < thresholds.carbs_low_g {
        flags.push(flag(
            Nutrient::Carbohydrates,
            AlertSeverity::Medium,
            "Low carb intake. Add whole grains, fruits, or vegetables.",
        ));
    }
    if avg.fat < thresholds.fat_low_g {
        flags.push(flag(
            Nutrient::HealthyFats,
            AlertSeverity::Medium,
            "Low fat intake. Include nuts, avocados, or olive oil.",
        ));
    }
    flags
}

/// Tone of an insight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// Neutral observation
    Info,
    /// Something to watch
    Warning,
    /// Actionable suggestion
    Tip,
    /// Encouragement
    Success,
}

/// Short observation about the whole log
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Insight {
    /// Tone
    pub kind: InsightKind,
    /// Message
    pub message: String,
}

/// Calorie, protein and consistency observations over per-meal averages
#[must_use]
pub fn nutrition_insights(meals: &[MealRecord], thresholds: &AnalyticsThresholds) -> Vec<Insight> {
    if meals.is_empty() {
        return Vec::new();
    }
    let avg = per_meal_averages(meals);
    let mut insights = Vec::with_capacity(3);

    if avg.calories < thresholds.low_calorie_average {
        insights.push(Insight {
            kind: InsightKind::Info,
            message: "Your average calorie intake is on the lower side. Consider adding nutrient-dense foods."
                .to_owned(),
        });
    } else if avg.calories > thresholds.high_calorie_average {
        insights.push(Insight {
            kind: InsightKind::Warning,
            message: "Your average calorie intake is higher than typical recommendations."
                .to_owned(),
        });
    }
    if avg.protein < thresholds.protein_tip_below_g {
        insights.push(Insight {
            kind: InsightKind::Tip,
            message: "Try to include more protein-rich foods like lean meats, eggs, or legumes."
                .to_owned(),
        });
    }
    if meals.len() >= thresholds.consistency_min_meals {
        insights.push(Insight {
            kind: InsightKind::Success,
            message: format!(
                "Great job! You've logged {} meals. Consistency is key to tracking nutrition.",
                meals.len()
            ),
        });
    }
    insights
}
