// ABOUTME: Errors raised while loading and validating the nutrition tables
// ABOUTME: Reports bad NUTRISATHI_* overrides, non-finite numbers, misordered bands and splits that miss 100
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSathi Contributors

use thiserror::Error;

/// Why a nutrition table was rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment override could not be parsed into the field's type
    #[error("Invalid override {var}={value:?}")]
    InvalidOverride {
        /// Variable name
        var: String,
        /// Raw value as read from the environment
        value: String,
    },

    /// A numeric field is NaN or infinite
    #[error("Not a finite number: {0}")]
    NotFinite(&'static str),

    /// Ordered thresholds are out of order
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// A percent split does not sum to 100
    #[error("Split does not sum to 100: {0}")]
    SplitSum(&'static str),

    /// A value is outside the plausible range for its field
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}
