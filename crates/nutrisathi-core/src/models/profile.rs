// ABOUTME: User profile models with biometric and preference fields
// ABOUTME: Lossy label parsing for profile form values and required-field extraction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSathi Contributors

use crate::constants::profile_limits::{
    MAX_AGE_YEARS, MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_AGE_YEARS,
};
use crate::errors::{ProfileError, ProfileField};
use serde::{Deserialize, Serialize};

/// Lowercase a label and collapse `_`, `-` and runs of whitespace into single spaces
fn normalize_label(label: &str) -> String {
    label
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Gender used for sex-specific formula constants
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male constants
    Male,
    /// Female constants
    Female,
    /// Other or undisclosed; formulas use the male/female midpoint
    Other,
}

impl Gender {
    /// Parse a profile form label; empty input is treated as not provided
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match normalize_label(s).as_str() {
            "" => None,
            "male" | "m" | "man" => Some(Self::Male),
            "female" | "f" | "woman" => Some(Self::Female),
            _ => Some(Self::Other),
        }
    }
}

/// Habitual activity level, ordered from least to most active
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise or a physical job
    ExtremelyActive,
}

impl ActivityLevel {
    /// Parse a profile form label such as "Lightly Active" or "lightly_active"
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match normalize_label(s).as_str() {
            "sedentary" => Some(Self::Sedentary),
            "lightly active" | "light" | "lightly" => Some(Self::LightlyActive),
            "moderately active" | "moderate" | "moderately" => Some(Self::ModeratelyActive),
            "very active" | "active" | "very" => Some(Self::VeryActive),
            "extremely active" | "extra active" | "extreme" | "extra" => {
                Some(Self::ExtremelyActive)
            }
            _ => None,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary",
            Self::LightlyActive => "Lightly Active",
            Self::ModeratelyActive => "Moderately Active",
            Self::VeryActive => "Very Active",
            Self::ExtremelyActive => "Extremely Active",
        }
    }
}

/// Health goal selected in the profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HealthGoal {
    /// Calorie deficit
    WeightLoss,
    /// Calorie surplus
    WeightGain,
    /// Moderate surplus with higher protein
    MuscleBuilding,
    /// Maintain current weight
    Maintenance,
    /// Improve diet quality at maintenance calories
    BetterNutrition,
    /// Diet under a medical condition, at maintenance calories
    DiseaseManagement,
}

impl HealthGoal {
    /// Parse a profile form label; common synonyms are folded onto the closed set
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match normalize_label(s).as_str() {
            "weight loss" | "lose weight" | "aggressive weight loss" => Some(Self::WeightLoss),
            "weight gain" | "gain weight" | "bulking" => Some(Self::WeightGain),
            "muscle building" | "muscle gain" | "build muscle" => Some(Self::MuscleBuilding),
            "maintenance" | "maintain" | "maintain weight" => Some(Self::Maintenance),
            "better nutrition" | "general health" => Some(Self::BetterNutrition),
            "disease management" => Some(Self::DiseaseManagement),
            _ => None,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WeightLoss => "Weight Loss",
            Self::WeightGain => "Weight Gain",
            Self::MuscleBuilding => "Muscle Building",
            Self::Maintenance => "Maintenance",
            Self::BetterNutrition => "Better Nutrition",
            Self::DiseaseManagement => "Disease Management",
        }
    }
}

/// Dietary preference selected in the profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DietaryPreference {
    /// Lacto-vegetarian
    Vegetarian,
    /// No animal products
    Vegan,
    /// Eats meat
    NonVegetarian,
    /// Vegetarian plus fish
    Pescatarian,
    /// Very low carbohydrate
    Keto,
    /// Paleolithic diet
    Paleo,
    /// No stated preference
    NoPreference,
}

impl DietaryPreference {
    /// Parse a profile form label
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match normalize_label(s).as_str() {
            "vegetarian" | "veg" => Some(Self::Vegetarian),
            "vegan" => Some(Self::Vegan),
            "non vegetarian" | "nonvegetarian" | "non veg" => Some(Self::NonVegetarian),
            "pescatarian" => Some(Self::Pescatarian),
            "keto" | "ketogenic" => Some(Self::Keto),
            "paleo" => Some(Self::Paleo),
            "no preference" | "none" => Some(Self::NoPreference),
            _ => None,
        }
    }

    /// Typical protein sources compatible with this preference
    #[must_use]
    pub const fn protein_sources(self) -> &'static str {
        match self {
            Self::Vegetarian => "paneer, dal, curd and legumes",
            Self::Vegan => "tofu, lentils, chickpeas and soy",
            Self::Pescatarian => "fish, eggs, dal and curd",
            Self::Keto | Self::Paleo => "eggs, fish, chicken and nuts",
            Self::NonVegetarian | Self::NoPreference => "eggs, chicken, fish, dal and curd",
        }
    }
}

/// Biometric and preference snapshot; every field may be absent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Gender for formula constants
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Age in years
    #[serde(default)]
    pub age: Option<u32>,
    /// Height in centimeters
    #[serde(default)]
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    #[serde(default)]
    pub weight_kg: Option<f64>,
    /// Habitual activity level
    #[serde(default)]
    pub activity_level: Option<ActivityLevel>,
    /// Selected health goal
    #[serde(default)]
    pub health_goal: Option<HealthGoal>,
    /// Dietary preference
    #[serde(default)]
    pub dietary_preference: Option<DietaryPreference>,
    /// Free-text allergies
    #[serde(default)]
    pub allergies: Option<String>,
}

/// Complete, range-checked biometric fields
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Biometrics {
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age: u32,
    /// Gender
    pub gender: Gender,
}

fn check_length(field: ProfileField, value: f64, max: f64) -> Result<f64, ProfileError> {
    if value.is_finite() && value > 0.0 && value <= max {
        Ok(value)
    } else {
        Err(ProfileError::OutOfRange {
            field,
            value,
            min: 0.0,
            max,
        })
    }
}

fn check_age(age: u32) -> Result<u32, ProfileError> {
    if (MIN_AGE_YEARS..=MAX_AGE_YEARS).contains(&age) {
        Ok(age)
    } else {
        Err(ProfileError::OutOfRange {
            field: ProfileField::Age,
            value: f64::from(age),
            min: f64::from(MIN_AGE_YEARS),
            max: f64::from(MAX_AGE_YEARS),
        })
    }
}

impl UserProfile {
    /// Extract weight, height, age and gender for a computation
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Insufficient`] listing every absent field, or
    /// [`ProfileError::OutOfRange`] for the first implausible value.
    pub fn require_biometrics(&self, computation: &'static str) -> Result<Biometrics, ProfileError> {
        let mut missing = Vec::new();
        if self.weight_kg.is_none() {
            missing.push(ProfileField::WeightKg);
        }
        if self.height_cm.is_none() {
            missing.push(ProfileField::HeightCm);
        }
        if self.age.is_none() {
            missing.push(ProfileField::Age);
        }
        if self.gender.is_none() {
            missing.push(ProfileField::Gender);
        }

        match (self.weight_kg, self.height_cm, self.age, self.gender) {
            (Some(weight_kg), Some(height_cm), Some(age), Some(gender)) => Ok(Biometrics {
                weight_kg: check_length(ProfileField::WeightKg, weight_kg, MAX_WEIGHT_KG)?,
                height_cm: check_length(ProfileField::HeightCm, height_cm, MAX_HEIGHT_CM)?,
                age: check_age(age)?,
                gender,
            }),
            _ => Err(ProfileError::insufficient(computation, missing)),
        }
    }

    /// Extract weight and height (kg, cm) for a computation
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Insufficient`] when either is absent, or
    /// [`ProfileError::OutOfRange`] when either is implausible.
    pub fn require_anthropometrics(
        &self,
        computation: &'static str,
    ) -> Result<(f64, f64), ProfileError> {
        match (self.weight_kg, self.height_cm) {
            (Some(weight_kg), Some(height_cm)) => Ok((
                check_length(ProfileField::WeightKg, weight_kg, MAX_WEIGHT_KG)?,
                check_length(ProfileField::HeightCm, height_cm, MAX_HEIGHT_CM)?,
            )),
            (weight, height) => {
                let mut missing = Vec::new();
                if weight.is_none() {
                    missing.push(ProfileField::WeightKg);
                }
                if height.is_none() {
                    missing.push(ProfileField::HeightCm);
                }
                Err(ProfileError::insufficient(computation, missing))
            }
        }
    }

    /// Age and gender when both are present and the age is plausible
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::OutOfRange`] when a present age is implausible.
    pub fn age_and_gender(&self) -> Result<Option<(u32, Gender)>, ProfileError> {
        match (self.age, self.gender) {
            (Some(age), Some(gender)) => Ok(Some((check_age(age)?, gender))),
            _ => Ok(None),
        }
    }
}
