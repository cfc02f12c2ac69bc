// ABOUTME: Core data models for the NutriSathi nutrition core
// ABOUTME: Re-exports MealRecord, MealType, UserProfile, and DateSelector
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSathi Contributors

//! # Data Models
//!
//! Inputs consumed by every computation stage. The meal log is an immutable
//! snapshot (`&[MealRecord]`); the profile is a snapshot in which every field
//! may be absent.
//!
//! ## Core Models
//!
//! - `MealRecord`: one logged food entry
//! - `MealType`: the four daily slots plus `Other`
//! - `UserProfile`: biometric and preference snapshot
//! - `DateSelector`: reference-date choice resolved against an explicit instant

// Domain modules
mod date;
mod meal;
mod profile;

// Meal log domain
pub use meal::{MealRecord, MealType};

// Profile domain
pub use profile::{
    ActivityLevel, Biometrics, DietaryPreference, Gender, HealthGoal, UserProfile,
};

// Date selection
pub use date::DateSelector;
