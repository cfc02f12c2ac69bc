// ABOUTME: Core types and constants for the NutriSathi nutrition core
// ABOUTME: Foundation crate with error handling, meal/profile models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSathi Contributors

#![deny(unsafe_code)]

//! # NutriSathi Core
//!
//! Foundation crate providing shared types and constants for the NutriSathi
//! nutrition core. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: `ProfileError` for insufficient or implausible profiles, plus the `AppError` umbrella
//! - **constants**: Energy conversion factors, profile limits, and calendar constants
//! - **models**: `MealRecord`, `MealType`, `UserProfile`, and `DateSelector`

/// Unified error handling with stable error codes and profile errors
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (meal log entries, user profile, date selection)
pub mod models;
