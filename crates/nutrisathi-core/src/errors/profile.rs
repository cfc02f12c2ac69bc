// ABOUTME: Profile error types for computations that need biometric fields
// ABOUTME: Distinguishes missing required fields from present but implausible values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSathi Contributors

//! # Profile Error Types
//!
//! Computations such as BMR or BMI need a subset of the profile. When a required
//! field is absent the computation returns [`ProfileError::Insufficient`] so the
//! caller can prompt for profile completion instead of showing guessed numbers.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Biometric profile fields that computations may require
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    /// Body weight in kilograms
    WeightKg,
    /// Height in centimeters
    HeightCm,
    /// Age in years
    Age,
    /// Gender used for sex-specific formula constants
    Gender,
}

impl ProfileField {
    /// Field name as it appears in the serialized profile
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WeightKg => "weight_kg",
            Self::HeightCm => "height_cm",
            Self::Age => "age",
            Self::Gender => "gender",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn join_fields(fields: &[ProfileField]) -> String {
    fields
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors raised when a profile cannot support a computation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    /// One or more required fields are absent
    #[error("insufficient profile for {computation}: missing {}", join_fields(.missing))]
    Insufficient {
        /// Computation that was requested (e.g. `energy_target`)
        computation: &'static str,
        /// Every required field that was absent, in a stable order
        missing: Vec<ProfileField>,
    },

    /// A field is present but outside the accepted range
    #[error("{field} value {value} is outside the accepted range {min}..={max}")]
    OutOfRange {
        /// Offending field
        field: ProfileField,
        /// Value supplied by the caller
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },
}

impl ProfileError {
    /// Build an insufficiency error for a computation
    #[must_use]
    pub fn insufficient(computation: &'static str, missing: Vec<ProfileField>) -> Self {
        Self::Insufficient {
            computation,
            missing,
        }
    }

    /// Whether this error means the profile needs completing
    #[must_use]
    pub const fn is_insufficient(&self) -> bool {
        matches!(self, Self::Insufficient { .. })
    }

    /// Fields the caller should ask the user to fill in
    #[must_use]
    pub fn missing_fields(&self) -> &[ProfileField] {
        match self {
            Self::Insufficient { missing, .. } => missing,
            Self::OutOfRange { .. } => &[],
        }
    }
}
