// ABOUTME: Logging streaks, experience points, levels and achievements from the meal log
// ABOUTME: Current and longest runs of consecutive logged days drive XP bonuses and unlocks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSathi Contributors

//! Streaks and progress
//!
//! XP is `meals × 10 + (current streak / 3) × 50`, and every 100 XP is a
//! level. Achievements unlock from the meal count, the current streak and
//! the level; nothing is stored between calls.

use chrono::{Days, NaiveDate};
use nutrisathi_core::constants::gamification::{
    STREAK_BONUS_EVERY_DAYS, STREAK_BONUS_XP, XP_PER_LEVEL, XP_PER_MEAL,
};
use nutrisathi_core::models::MealRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Streak summary for the meal log
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreakSummary {
    /// Consecutive logged days ending today or yesterday
    pub current_days: usize,
    /// Longest run of consecutive logged days
    pub longest_days: usize,
    /// Distinct logged days
    pub active_days: usize,
}

fn follows(previous: NaiveDate, date: NaiveDate) -> bool {
    previous.checked_add_days(Days::new(1)) == Some(date)
}

/// Current and longest streaks relative to `today`
///
/// The current streak only counts when the latest logged date is today or
/// yesterday; logs dated after `today` are ignored.
#[must_use]
pub fn logging_streak(meals: &[MealRecord], today: NaiveDate) -> StreakSummary {
    let dates: BTreeSet<NaiveDate> = meals
        .iter()
        .map(MealRecord::local_date)
        .filter(|date| *date <= today)
        .collect();

    let mut longest = 0_usize;
    let mut run = 0_usize;
    let mut previous: Option<NaiveDate> = None;
    for date in &dates {
        run = match previous {
            Some(prev) if follows(prev, *date) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(*date);
    }

    let current = match previous {
        Some(last) if last == today || follows(last, today) => run,
        _ => 0,
    };

    StreakSummary {
        current_days: current,
        longest_days: longest,
        active_days: dates.len(),
    }
}

fn as_u64(count: usize) -> u64 {
    u64::try_from(count).unwrap_or(u64::MAX)
}

/// Total XP for a meal count and current streak
#[must_use]
pub fn total_xp(meals_logged: usize, current_streak_days: usize) -> u64 {
    let base = as_u64(meals_logged).saturating_mul(XP_PER_MEAL);
    let bonus = (as_u64(current_streak_days) / STREAK_BONUS_EVERY_DAYS) * STREAK_BONUS_XP;
    base.saturating_add(bonus)
}

/// Title shown for a level band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum LevelTitle {
    /// Levels 1-4
    Beginner,
    /// Levels 5-9
    Apprentice,
    /// Levels 10-14
    Intermediate,
    /// Levels 15-19
    Advanced,
    /// Levels 20-24
    Expert,
    /// Level 25 and above
    Master,
}

impl LevelTitle {
    /// Title for a level
    #[must_use]
    pub const fn for_level(level: u64) -> Self {
        match level {
            0..=4 => Self::Beginner,
            5..=9 => Self::Apprentice,
            10..=14 => Self::Intermediate,
            15..=19 => Self::Advanced,
            20..=24 => Self::Expert,
            _ => Self::Master,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Apprentice => "Apprentice",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
            Self::Master => "Master",
        }
    }
}

/// Level reached and progress toward the next one
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LevelProgress {
    /// Level, starting at 1
    pub level: u64,
    /// XP earned inside the current level
    pub current_xp: u64,
    /// XP still needed for the next level
    pub xp_to_next_level: u64,
    /// All XP earned
    pub total_xp: u64,
    /// Title for the level
    pub title: LevelTitle,
}

impl LevelProgress {
    /// Split total XP into a level and the remainder
    #[must_use]
    pub const fn from_total_xp(total_xp: u64) -> Self {
        let level = total_xp / XP_PER_LEVEL + 1;
        let current_xp = total_xp % XP_PER_LEVEL;
        Self {
            level,
            current_xp,
            xp_to_next_level: XP_PER_LEVEL - current_xp,
            total_xp,
            title: LevelTitle::for_level(level),
        }
    }
}

/// Kind of goal an achievement tracks
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCategory {
    /// Consecutive logging days
    Streak,
    /// Meal counts and levels
    Milestone,
}

/// Unlockable achievements
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Achievement {
    /// First meal logged
    FirstMeal,
    /// 3-day current streak
    Streak3,
    /// 7-day current streak
    Streak7,
    /// 30-day current streak
    Streak30,
    /// 10 meals logged
    Meals10,
    /// 50 meals logged
    Meals50,
    /// 100 meals logged
    Meals100,
    /// Level 5 reached
    Level5,
    /// Level 10 reached
    Level10,
    /// Level 20 reached
    Level20,
}

impl Achievement {
    /// Every achievement in display order
    pub const ALL: [Self; 10] = [
        Self::FirstMeal,
        Self::Streak3,
        Self::Streak7,
        Self::Streak30,
        Self::Meals10,
        Self::Meals50,
        Self::Meals100,
        Self::Level5,
        Self::Level10,
        Self::Level20,
    ];

    /// Display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FirstMeal => "First Bite!",
            Self::Streak3 => "On Fire!",
            Self::Streak7 => "Week Warrior!",
            Self::Streak30 => "Monthly Master!",
            Self::Meals10 => "Decade Diner!",
            Self::Meals50 => "Half Century!",
            Self::Meals100 => "Century Club!",
            Self::Level5 => "Rising Star!",
            Self::Level10 => "Elite Athlete!",
            Self::Level20 => "Legend!",
        }
    }

    /// What the user has to do
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::FirstMeal => "Log your first meal",
            Self::Streak3 => "Maintain a 3-day streak",
            Self::Streak7 => "Maintain a 7-day streak",
            Self::Streak30 => "Maintain a 30-day streak",
            Self::Meals10 => "Log 10 meals",
            Self::Meals50 => "Log 50 meals",
            Self::Meals100 => "Log 100 meals",
            Self::Level5 => "Reach level 5",
            Self::Level10 => "Reach level 10",
            Self::Level20 => "Reach level 20",
        }
    }

    /// XP shown as the reward
    #[must_use]
    pub const fn xp_reward(self) -> u64 {
        match self {
            Self::FirstMeal => 50,
            Self::Streak3 => 100,
            Self::Streak7 => 250,
            Self::Meals10 => 150,
            Self::Level5 => 300,
            Self::Meals50 => 500,
            Self::Level10 => 750,
            Self::Streak30 | Self::Meals100 => 1000,
            Self::Level20 => 2000,
        }
    }

    /// Streak or milestone
    #[must_use]
    pub const fn category(self) -> AchievementCategory {
        match self {
            Self::Streak3 | Self::Streak7 | Self::Streak30 => AchievementCategory::Streak,
            _ => AchievementCategory::Milestone,
        }
    }

    /// Whether the counts meet this achievement's threshold
    #[must_use]
    pub const fn is_unlocked(
        self,
        meals_logged: usize,
        current_streak_days: usize,
        level: u64,
    ) -> bool {
        match self {
            Self::FirstMeal => meals_logged >= 1,
            Self::Streak3 => current_streak_days >= 3,
            Self::Streak7 => current_streak_days >= 7,
            Self::Streak30 => current_streak_days >= 30,
            Self::Meals10 => meals_logged >= 10,
            Self::Meals50 => meals_logged >= 50,
            Self::Meals100 => meals_logged >= 100,
            Self::Level5 => level >= 5,
            Self::Level10 => level >= 10,
            Self::Level20 => level >= 20,
        }
    }
}

/// One achievement and whether it is unlocked
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AchievementStatus {
    /// The achievement
    pub achievement: Achievement,
    /// Whether it is unlocked
    pub unlocked: bool,
}

/// Levels and achievements for the meal log
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressSummary {
    /// Records in the log
    pub meals_logged: usize,
    /// Level and XP
    pub level: LevelProgress,
    /// Every achievement in display order
    pub achievements: Vec<AchievementStatus>,
}

impl ProgressSummary {
    /// Achievements that are unlocked, in display order
    pub fn unlocked(&self) -> impl Iterator<Item = Achievement> + '_ {
        self.achievements
            .iter()
            .filter(|status| status.unlocked)
            .map(|status| status.achievement)
    }
}

/// XP, level and achievements from the log size and its streak
#[must_use]
pub fn progress_summary(meals: &[MealRecord], streak: &StreakSummary) -> ProgressSummary {
    let meals_logged = meals.len();
    let level = LevelProgress::from_total_xp(total_xp(meals_logged, streak.current_days));
    let achievements = Achievement::ALL
        .into_iter()
        .map(|achievement| AchievementStatus {
            achievement,
            unlocked: achievement.is_unlocked(meals_logged, streak.current_days, level.level),
        })
        .collect();
    ProgressSummary {
        meals_logged,
        level,
        achievements,
    }
}
