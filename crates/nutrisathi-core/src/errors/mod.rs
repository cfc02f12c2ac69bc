// ABOUTME: Unified error handling with stable error codes for the nutrition core
// ABOUTME: Wraps profile and configuration failures into a single AppError for callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSathi Contributors

//! # Unified Error Handling System
//!
//! Expected conditions (an incomplete profile, an empty meal log) are return
//! values, not faults. `AppError` exists for callers that want a single error
//! type with a stable code when surfacing those conditions.

/// Profile insufficiency and range errors
pub mod profile;

pub use profile::{ProfileError, ProfileField};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the nutrition core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Profile (3000-3999)
    /// Required biometric fields are missing
    #[serde(rename = "INSUFFICIENT_PROFILE")]
    InsufficientProfile = 3001,
    /// A biometric value is outside its accepted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Configuration (6000-6999)
    /// Configuration tables or overrides are invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InsufficientProfile => "Complete your profile to see this calculation",
            Self::ValueOutOfRange => "A profile value is outside the acceptable range",
            Self::ConfigInvalid => "Configuration is invalid",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Unified error type for the application
#[derive(Debug, Clone, Error)]
#[error("{code:?}: {message}")]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Missing profile fields, when the error is an insufficiency
    pub missing_fields: Vec<ProfileField>,
}

impl AppError {
    /// Create a new error with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            missing_fields: Vec::new(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }
}

impl From<ProfileError> for AppError {
    fn from(error: ProfileError) -> Self {
        let code = if error.is_insufficient() {
            ErrorCode::InsufficientProfile
        } else {
            ErrorCode::ValueOutOfRange
        };
        Self {
            code,
            message: error.to_string(),
            missing_fields: error.missing_fields().to_vec(),
        }
    }
}

/// Result alias used by callers that surface `AppError`
pub type AppResult<T> = Result<T, AppError>;
