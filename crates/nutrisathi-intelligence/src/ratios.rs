// ABOUTME: Guarded ratio and percent helpers shared by every aggregation stage
// ABOUTME: Zero denominators yield zero and integer percent splits always sum to 100
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSathi Contributors

//! Ratio helpers
//!
//! No aggregate in this crate may produce `NaN` or infinity; every division
//! goes through these functions.

/// `numerator / denominator`, or 0 when the denominator is zero or not finite
#[must_use]
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 || !denominator.is_finite() || !numerator.is_finite() {
        0.0
    } else {
        numerator / denominator
    }
}

/// `part / whole × 100`, or 0 when `whole` is zero
#[must_use]
pub fn safe_percent(part: f64, whole: f64) -> f64 {
    safe_ratio(part, whole) * 100.0
}

/// Percent of a target reached, capped at 100 and 0 for a zero target
#[must_use]
pub fn progress_percent(consumed: f64, target: f64) -> f64 {
    safe_percent(consumed, target).clamp(0.0, 100.0)
}

/// Round a value to one decimal place
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round a value to two decimal places
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert parts into whole percentages that sum to exactly 100
///
/// Each part is rounded to the nearest whole percent and the remainder is
/// absorbed by the largest part (the first one on ties). Returns all zeros
/// when the parts sum to zero.
#[must_use]
pub fn apportion_to_hundred<const N: usize>(parts: [f64; N]) -> [u8; N] {
    let total: f64 = parts.iter().copied().filter(|p| *p > 0.0).sum();
    let mut percents = [0_u8; N];
    if total <= 0.0 || !total.is_finite() || N == 0 {
        return percents;
    }

    let mut largest = 0;
    for (i, part) in parts.iter().enumerate() {
        let share = safe_percent(part.max(0.0), total).round();
        percents[i] = share.clamp(0.0, 100.0) as u8;
        if *part > parts[largest] {
            largest = i;
        }
    }

    let assigned: i32 = percents.iter().map(|p| i32::from(*p)).sum();
    let adjusted = i32::from(percents[largest]) + (100 - assigned);
    percents[largest] = adjusted.clamp(0, 100) as u8;
    percents
}

/// Split a whole-number total by percentages so the parts sum exactly to the total
///
/// `remainder_index` receives the rounding difference.
#[must_use]
pub fn apportion_total<const N: usize>(total: f64, percents: [u8; N], remainder_index: usize) -> [f64; N] {
    let mut parts = [0.0; N];
    for (part, pct) in parts.iter_mut().zip(percents) {
        *part = (total * f64::from(pct) / 100.0).round();
    }
    if let Some(slot) = parts.get(remainder_index).copied() {
        let assigned: f64 = parts.iter().sum();
        parts[remainder_index] = slot + (total - assigned);
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_denominator_yields_zero() {
        assert!(safe_ratio(5.0, 0.0).abs() < f64::EPSILON);
        assert!(safe_percent(5.0, 0.0).abs() < f64::EPSILON);
        assert!(progress_percent(5.0, 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_is_capped() {
        assert!((progress_percent(900.0, 450.0) - 100.0).abs() < f64::EPSILON);
        assert!((progress_percent(225.0, 450.0) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_apportion_thirds_sums_to_hundred() {
        let percents = apportion_to_hundred([1.0, 1.0, 1.0]);
        assert_eq!(percents.iter().map(|p| u32::from(*p)).sum::<u32>(), 100);
        assert_eq!(percents, [34, 33, 33]);
    }

    #[test]
    fn test_apportion_empty_is_all_zero() {
        assert_eq!(apportion_to_hundred([0.0, 0.0, 0.0]), [0, 0, 0]);
    }

    #[test]
    fn test_apportion_total_absorbs_remainder() {
        let parts = apportion_total(1979.0, [25, 35, 10, 30], 1);
        assert!((parts.iter().sum::<f64>() - 1979.0).abs() < f64::EPSILON);
        assert!((parts[0] - 495.0).abs() < f64::EPSILON);
        assert!((parts[2] - 198.0).abs() < f64::EPSILON);
    }
}
