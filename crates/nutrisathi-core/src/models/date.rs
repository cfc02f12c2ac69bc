// ABOUTME: Reference-date selection for per-day meal aggregation
// ABOUTME: DateSelector resolves Today/Yesterday/TwoDaysAgo/Custom against an explicit instant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSathi Contributors

use chrono::{DateTime, Days, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// Which calendar day an aggregate is computed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "kind", content = "date", rename_all = "snake_case")]
pub enum DateSelector {
    /// Local date of the reference instant
    #[default]
    Today,
    /// One day before today
    Yesterday,
    /// Two days before today
    TwoDaysAgo,
    /// An absolute calendar date
    Custom(NaiveDate),
}

impl DateSelector {
    /// Resolve to a calendar date using the local date of `now`
    #[must_use]
    pub fn resolve(self, now: DateTime<FixedOffset>) -> NaiveDate {
        let today = now.date_naive();
        let back = |days: u64| today.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN);
        match self {
            Self::Today => today,
            Self::Yesterday => back(1),
            Self::TwoDaysAgo => back(2),
            Self::Custom(date) => date,
        }
    }
}
