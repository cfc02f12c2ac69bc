// ABOUTME: Meal log models for calorie and macro aggregation
// ABOUTME: MealRecord entries and the MealType slot folding rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSathi Contributors

use chrono::{DateTime, FixedOffset, NaiveDate, Timelike};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Meal category used for slot aggregation and totals-by-type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Evening snack (also any "snack" label)
    EveningSnack,
    /// Dinner meal
    Dinner,
    /// Unrecognized or absent label
    Other,
}

impl MealType {
    /// The four daily slots in day order
    pub const SLOTS: [Self; 4] = [
        Self::Breakfast,
        Self::Lunch,
        Self::EveningSnack,
        Self::Dinner,
    ];

    /// Fold a free-text label onto a meal type
    ///
    /// Matching ignores case, whitespace and underscores, so `"snack"`,
    /// `"Evening Snack"`, `"evening_snack"` and `" EVENING SNACK "` all map
    /// to [`MealType::EveningSnack`].
    #[must_use]
    pub fn from_label(label: Option<&str>) -> Self {
        let Some(raw) = label else {
            return Self::Other;
        };
        let folded: String = raw
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        match folded.as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "snack" | "eveningsnack" => Self::EveningSnack,
            "dinner" => Self::Dinner,
            _ => Self::Other,
        }
    }

    /// Whether this type is one of the four fixed daily slots
    #[must_use]
    pub const fn is_slot(self) -> bool {
        !matches!(self, Self::Other)
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::EveningSnack => "Evening Snack",
            Self::Dinner => "Dinner",
            Self::Other => "Other",
        }
    }
}

fn non_negative(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite() && *v > 0.0).unwrap_or(0.0)
}

/// One logged food entry
///
/// Nutrient fields are optional; an absent value means unknown and counts as
/// zero in every sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRecord {
    /// Opaque identity, stable within the log
    pub id: String,
    /// Display name of the food
    pub name: String,
    /// Serving amount
    pub serving_size: f64,
    /// Serving unit (g, ml, piece, ...)
    pub unit: String,
    /// Energy (kcal)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Protein (grams)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    /// Carbohydrates (grams)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    /// Fat (grams)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
    /// When the meal was logged, in the logger's local offset
    pub timestamp: DateTime<FixedOffset>,
    /// Free-text meal label as entered by the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<String>,
}

impl MealRecord {
    /// Create a record with a generated id and a 100 g serving
    #[must_use]
    pub fn new(name: impl Into<String>, timestamp: DateTime<FixedOffset>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            serving_size: 100.0,
            unit: "g".to_owned(),
            calories: None,
            protein: None,
            carbs: None,
            fat: None,
            timestamp,
            meal_type: None,
        }
    }

    /// Set the meal label
    #[must_use]
    pub fn with_meal_type(mut self, meal_type: impl Into<String>) -> Self {
        self.meal_type = Some(meal_type.into());
        self
    }

    /// Set the energy value
    #[must_use]
    pub const fn with_calories(mut self, calories: f64) -> Self {
        self.calories = Some(calories);
        self
    }

    /// Set protein, carbs and fat in grams
    #[must_use]
    pub const fn with_macros(mut self, protein: f64, carbs: f64, fat: f64) -> Self {
        self.protein = Some(protein);
        self.carbs = Some(carbs);
        self.fat = Some(fat);
        self
    }

    /// Set the serving amount and unit
    #[must_use]
    pub fn with_serving(mut self, serving_size: f64, unit: impl Into<String>) -> Self {
        self.serving_size = serving_size;
        self.unit = unit.into();
        self
    }

    /// Energy, with unknown or invalid values counted as zero
    #[must_use]
    pub fn calories_or_zero(&self) -> f64 {
        non_negative(self.calories)
    }

    /// Protein grams, zero when unknown
    #[must_use]
    pub fn protein_or_zero(&self) -> f64 {
        non_negative(self.protein)
    }

    /// Carbohydrate grams, zero when unknown
    #[must_use]
    pub fn carbs_or_zero(&self) -> f64 {
        non_negative(self.carbs)
    }

    /// Fat grams, zero when unknown
    #[must_use]
    pub fn fat_or_zero(&self) -> f64 {
        non_negative(self.fat)
    }

    /// Folded meal type of this record
    #[must_use]
    pub fn meal_type(&self) -> MealType {
        MealType::from_label(self.meal_type.as_deref())
    }

    /// Calendar date in the logger's local offset
    #[must_use]
    pub fn local_date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    /// Hour of day (0-23) in the logger's local offset
    #[must_use]
    pub fn local_hour(&self) -> u32 {
        self.timestamp.hour()
    }
}
