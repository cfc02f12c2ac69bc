// ABOUTME: Meal-slot aggregator bucketing one day's calories into breakfast, lunch, snack, and dinner
// ABOUTME: Resolves a DateSelector against an explicit instant and reports per-slot progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSathi Contributors

use crate::energy_target::MealSlotTargets;
use crate::ratios::progress_percent;
use chrono::{DateTime, FixedOffset, NaiveDate};
use nutrisathi_core::models::{DateSelector, MealRecord, MealType};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Calories consumed per meal slot on one calendar date
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MealSlotAggregate {
    /// Breakfast calories
    pub breakfast: f64,
    /// Lunch calories
    pub lunch: f64,
    /// Evening snack calories
    pub evening_snack: f64,
    /// Dinner calories
    pub dinner: f64,
}

impl MealSlotAggregate {
    /// Calories for a slot; `Other` is never aggregated
    #[must_use]
    pub const fn get(&self, slot: MealType) -> f64 {
        match slot {
            MealType::Breakfast => self.breakfast,
            MealType::Lunch => self.lunch,
            MealType::EveningSnack => self.evening_snack,
            MealType::Dinner => self.dinner,
            MealType::Other => 0.0,
        }
    }

    /// Sum of the four slots
    #[must_use]
    pub fn total(&self) -> f64 {
        self.breakfast + self.lunch + self.evening_snack + self.dinner
    }

    fn add(&mut self, slot: MealType, calories: f64) {
        match slot {
            MealType::Breakfast => self.breakfast += calories,
            MealType::Lunch => self.lunch += calories,
            MealType::EveningSnack => self.evening_snack += calories,
            MealType::Dinner => self.dinner += calories,
            MealType::Other => {}
        }
    }
}

/// Aggregate the slots for the date a selector resolves to
#[must_use]
pub fn aggregate_by_slot(
    meals: &[MealRecord],
    selector: DateSelector,
    now: DateTime<FixedOffset>,
) -> MealSlotAggregate {
    aggregate_by_slot_on(meals, selector.resolve(now))
}

/// Aggregate the slots for an absolute calendar date
#[must_use]
pub fn aggregate_by_slot_on(meals: &[MealRecord], date: NaiveDate) -> MealSlotAggregate {
    let mut aggregate = MealSlotAggregate::default();
    let mut matched = 0_usize;
    for meal in meals.iter().filter(|meal| meal.local_date() == date) {
        aggregate.add(meal.meal_type(), meal.calories_or_zero());
        matched += 1;
    }
    debug!(%date, matched, total = aggregate.total(), "aggregated meal slots");
    aggregate
}

/// Progress of each slot toward its target, in percent capped at 100
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct SlotProgress {
    /// Breakfast progress
    pub breakfast: f64,
    /// Lunch progress
    pub lunch: f64,
    /// Evening snack progress
    pub evening_snack: f64,
    /// Dinner progress
    pub dinner: f64,
}

/// Per-slot percent of target; 0 for a zero target
#[must_use]
pub fn slot_progress(aggregate: &MealSlotAggregate, targets: &MealSlotTargets) -> SlotProgress {
    SlotProgress {
        breakfast: progress_percent(aggregate.breakfast, targets.breakfast),
        lunch: progress_percent(aggregate.lunch, targets.lunch),
        evening_snack: progress_percent(aggregate.evening_snack, targets.evening_snack),
        dinner: progress_percent(aggregate.dinner, targets.dinner),
    }
}
