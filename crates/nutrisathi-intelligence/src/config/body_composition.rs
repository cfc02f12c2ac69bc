// ABOUTME: Body-composition configuration for BMI band tables and body-fat estimation
// ABOUTME: Indian-standard and WHO BMI cutoffs plus Deurenberg coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSathi Contributors

//! Body Composition Configuration
//!
//! # Scientific References
//!
//! - Asian/Indian BMI cutoffs: WHO Expert Consultation (2004), Lancet 363:157-163
//! - Body fat: Deurenberg et al. (1991) DOI: 10.1079/bjn19910073

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// BMI cutoffs for one classification table (kg/m²)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiBands {
    /// BMI below this is underweight
    pub underweight_below: f64,
    /// BMI at or above this is overweight
    pub overweight_from: f64,
    /// BMI at or above this is obese
    pub obese_from: f64,
}

impl BmiBands {
    /// Indian-standard cutoffs: 18.5 / 23 / 27
    pub const INDIAN: Self = Self {
        underweight_below: 18.5,
        overweight_from: 23.0,
        obese_from: 27.0,
    };

    /// WHO general-population cutoffs: 18.5 / 25 / 30
    pub const WHO: Self = Self {
        underweight_below: 18.5,
        overweight_from: 25.0,
        obese_from: 30.0,
    };

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if !(self.underweight_below < self.overweight_from && self.overweight_from < self.obese_from)
        {
            tracing::warn!(table = name, "BMI bands are not ascending");
            return Err(ConfigError::InvalidRange(
                "BMI bands must be strictly ascending",
            ));
        }
        Ok(())
    }
}

/// Deurenberg body-fat coefficients
///
/// `bf% = bmi_coef × BMI + age_coef × age + constant(gender)`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeurenbergConfig {
    /// BMI coefficient (1.20)
    pub bmi_coef: f64,
    /// Age coefficient (0.23)
    pub age_coef: f64,
    /// Male constant (-16.2)
    pub male_constant: f64,
    /// Female constant (-5.4)
    pub female_constant: f64,
    /// Other or undisclosed: midpoint (-10.8)
    pub other_constant: f64,
}

impl Default for DeurenbergConfig {
    fn default() -> Self {
        Self {
            bmi_coef: 1.20,
            age_coef: 0.23,
            male_constant: -16.2,
            female_constant: -5.4,
            other_constant: -10.8,
        }
    }
}

/// Body-composition configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyCompositionConfig {
    /// Bands used for category and risk
    pub indian_bands: BmiBands,
    /// Bands for the general-population view
    pub who_bands: BmiBands,
    /// Body-fat estimation coefficients
    pub deurenberg: DeurenbergConfig,
    /// Lower BMI of the ideal weight range (18.5)
    pub ideal_bmi_min: f64,
    /// Upper BMI of the ideal weight range (23)
    pub ideal_bmi_max: f64,
}

impl Default for BodyCompositionConfig {
    fn default() -> Self {
        Self {
            indian_bands: BmiBands::INDIAN,
            who_bands: BmiBands::WHO,
            deurenberg: DeurenbergConfig::default(),
            ideal_bmi_min: 18.5,
            ideal_bmi_max: 23.0,
        }
    }
}

impl BodyCompositionConfig {
    /// Validate band ordering and the ideal range
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` when bands or the ideal range are out of order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.indian_bands.validate("indian")?;
        self.who_bands.validate("who")?;
        if !self.ideal_bmi_min.is_finite() || !self.ideal_bmi_max.is_finite() {
            return Err(ConfigError::NotFinite("ideal BMI range"));
        }
        if self.ideal_bmi_min <= 0.0 || self.ideal_bmi_min >= self.ideal_bmi_max {
            return Err(ConfigError::InvalidRange(
                "ideal_bmi_min must be positive and < ideal_bmi_max",
            ));
        }
        Ok(())
    }
}
