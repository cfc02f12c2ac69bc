// ABOUTME: Body-composition classifier for BMI, body fat, lean mass, and ideal weight range
// ABOUTME: Indian-standard BMI categories with ordered risk levels plus a separate WHO reading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSathi Contributors

//! Body-Composition Classifier
//!
//! BMI is classified against the Indian-standard bands (23/27 cutoffs). The
//! WHO bands (25/30) are exposed separately through [`general_bmi`] and are
//! never mixed with the Indian categories.
//!
//! # Scientific References
//!
//! - WHO Expert Consultation (2004). Appropriate body-mass index for Asian populations.
//!   *Lancet*, 363(9403), 157-163. <https://doi.org/10.1016/S0140-6736(03)15268-3>
//! - Deurenberg, P., Weststrate, J.A., & Seidell, J.C. (1991). Body mass index as a measure
//!   of body fatness. *British Journal of Nutrition*, 65(2), 105-114.

use crate::config::{BmiBands, BodyCompositionConfig, DeurenbergConfig};
use crate::ratios::safe_ratio;
use nutrisathi_core::errors::ProfileError;
use nutrisathi_core::models::{Gender, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Computation name reported in insufficiency errors
pub const BODY_COMPOSITION_COMPUTATION: &str = "body_composition";

/// Computation name for the WHO reading
pub const GENERAL_BMI_COMPUTATION: &str = "general_bmi";

/// BMI category, ordered from lowest to highest BMI
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// Below the underweight cutoff
    Underweight,
    /// Healthy range
    Normal,
    /// Above the healthy range
    Overweight,
    /// At or above the obese cutoff
    Obese,
}

impl BmiCategory {
    /// Classify a BMI against a band table
    #[must_use]
    pub fn classify(bmi: f64, bands: &BmiBands) -> Self {
        if bmi < bands.underweight_below {
            Self::Underweight
        } else if bmi < bands.overweight_from {
            Self::Normal
        } else if bmi < bands.obese_from {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Position in the ordering (0 = underweight)
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Underweight => 0,
            Self::Normal => 1,
            Self::Overweight => 2,
            Self::Obese => 3,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// Health risk associated with the category
    #[must_use]
    pub const fn risk_level(self) -> RiskLevel {
        match self {
            Self::Underweight => RiskLevel::LowToModerate,
            Self::Normal => RiskLevel::Low,
            Self::Overweight => RiskLevel::Moderate,
            Self::Obese => RiskLevel::High,
        }
    }

    /// Lifestyle guidance for the category
    #[must_use]
    pub const fn guidance(self) -> &'static [&'static str] {
        match self {
            Self::Underweight => &[
                "Increase calorie intake with nutrient-dense foods",
                "Include protein-rich foods: eggs, chicken, paneer, dal",
                "Eat frequent small meals (5-6 times a day)",
                "Add healthy fats: nuts, avocado, olive oil",
                "Consider strength training to build muscle mass",
            ],
            Self::Normal => &[
                "Maintain your current healthy weight",
                "Continue balanced diet with variety of nutrients",
                "Exercise regularly: 150 min/week moderate activity",
                "Stay hydrated: 8-10 glasses of water daily",
                "Get adequate sleep: 7-9 hours per night",
            ],
            Self::Overweight => &[
                "Reduce calorie intake by 300-500 kcal/day",
                "Increase physical activity: 30-45 min daily exercise",
                "Focus on whole grains, vegetables, and lean proteins",
                "Limit processed foods and sugary drinks",
                "Practice portion control",
            ],
            Self::Obese => &[
                "Consult a healthcare provider or nutritionist",
                "Create a structured weight loss plan (500-750 kcal deficit)",
                "Increase daily activity: walking, cycling, swimming",
                "Focus on high-fiber, low-calorie foods",
                "Monitor blood pressure and blood sugar regularly",
                "Consider joining a support group or program",
            ],
        }
    }
}

/// Health risk, ordered from lowest to highest
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Low risk
    Low,
    /// Low to moderate risk
    LowToModerate,
    /// Moderate risk
    Moderate,
    /// High risk
    High,
}

impl RiskLevel {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::LowToModerate => "Low to Moderate Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
        }
    }
}

/// Inclusive weight range (kg)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeightRange {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl WeightRange {
    /// Whether a weight lies inside the range
    #[must_use]
    pub fn contains(&self, weight_kg: f64) -> bool {
        (self.min..=self.max).contains(&weight_kg)
    }
}

/// Body-composition estimate from a profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BodyComposition {
    /// Body mass index (kg/m²)
    pub bmi: f64,
    /// Indian-standard category
    pub bmi_category: BmiCategory,
    /// Estimated body fat percent; needs age and gender
    pub body_fat_percent: Option<f64>,
    /// Lean mass (kg); needs age and gender
    pub lean_mass_kg: Option<f64>,
    /// Fat mass (kg); needs age and gender
    pub fat_mass_kg: Option<f64>,
    /// Weight range for BMI 18.5-23 at this height
    pub ideal_weight_range_kg: WeightRange,
    /// Risk for the category
    pub risk_level: RiskLevel,
}

/// BMI reading against the WHO bands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BmiReading {
    /// Body mass index (kg/m²)
    pub bmi: f64,
    /// WHO category
    pub category: BmiCategory,
}

/// BMI = weight / height_m²
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    safe_ratio(weight_kg, height_m * height_m)
}

/// Deurenberg body fat percent, clamped at zero
#[must_use]
pub fn deurenberg_body_fat(bmi: f64, age: u32, gender: Gender, config: &DeurenbergConfig) -> f64 {
    let constant = match gender {
        Gender::Male => config.male_constant,
        Gender::Female => config.female_constant,
        Gender::Other => config.other_constant,
    };
    (config.bmi_coef * bmi + config.age_coef * f64::from(age) + constant).max(0.0)
}

/// Weight range whose BMI falls inside the configured ideal band
#[must_use]
pub fn ideal_weight_range(height_cm: f64, config: &BodyCompositionConfig) -> WeightRange {
    let height_m = height_cm / 100.0;
    let height_sq = height_m * height_m;
    WeightRange {
        min: config.ideal_bmi_min * height_sq,
        max: config.ideal_bmi_max * height_sq,
    }
}

/// Classify a profile's body composition
///
/// BMI and the ideal range need weight and height. Body-fat fields also need
/// a plausible age and a gender and are `None` without them.
///
/// # Errors
///
/// Returns [`ProfileError::Insufficient`] when weight or height is absent,
/// or [`ProfileError::OutOfRange`] for an implausible weight or height.
pub fn classify_body(
    profile: &UserProfile,
    config: &BodyCompositionConfig,
) -> Result<BodyComposition, ProfileError> {
    let (weight_kg, height_cm) = profile.require_anthropometrics(BODY_COMPOSITION_COMPUTATION)?;
    let bmi = calculate_bmi(weight_kg, height_cm);
    let bmi_category = BmiCategory::classify(bmi, &config.indian_bands);

    let age_and_gender = profile.age_and_gender().unwrap_or_else(|err| {
        debug!(%err, "skipping body-fat estimate");
        None
    });
    let body_fat_percent = age_and_gender
        .map(|(age, gender)| deurenberg_body_fat(bmi, age, gender, &config.deurenberg));
    let fat_mass_kg = body_fat_percent.map(|bf| bf / 100.0 * weight_kg);
    let lean_mass_kg = fat_mass_kg.map(|fat| weight_kg - fat);

    debug!(bmi, ?bmi_category, ?body_fat_percent, "classified body composition");

    Ok(BodyComposition {
        bmi,
        bmi_category,
        body_fat_percent,
        lean_mass_kg,
        fat_mass_kg,
        ideal_weight_range_kg: ideal_weight_range(height_cm, config),
        risk_level: bmi_category.risk_level(),
    })
}

/// BMI classified against the WHO general-population bands
///
/// # Errors
///
/// Returns [`ProfileError::Insufficient`] when weight or height is absent,
/// or [`ProfileError::OutOfRange`] for implausible values.
pub fn general_bmi(
    profile: &UserProfile,
    config: &BodyCompositionConfig,
) -> Result<BmiReading, ProfileError> {
    let (weight_kg, height_cm) = profile.require_anthropometrics(GENERAL_BMI_COMPUTATION)?;
    let bmi = calculate_bmi(weight_kg, height_cm);
    Ok(BmiReading {
        bmi,
        category: BmiCategory::classify(bmi, &config.who_bands),
    })
}
