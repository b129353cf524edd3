// ABOUTME: Daily calorie, macronutrient split, and sleep plan calculations
// ABOUTME: Table-driven formulas over gender, age, activity level, and goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WellnessGenie

//! Nutrition and sleep calculations.
//!
//! Base calories by gender, one age-bracket adjustment, and a fixed activity
//! multiplier table. Macro splits are three presets keyed by goal. All
//! functions are total and deterministic.

use genie_core::models::{
    ActivityLevel, Gender, Goal, MacroSplit, Profile, SleepOptimization, SleepPlan,
};

/// Calorie baseline for male profiles (kcal/day)
const BASE_CALORIES_MALE: f64 = 2200.0;

/// Calorie baseline for all other profiles (kcal/day)
const BASE_CALORIES_DEFAULT: f64 = 1800.0;

/// Age above which the baseline drops
const CALORIE_ADJUSTMENT_AGE: u32 = 30;

/// Baseline reduction past the age threshold (kcal/day)
const CALORIE_AGE_REDUCTION: f64 = 100.0;

/// Nightly sleep below which optimization becomes a priority
const SLEEP_PRIORITY_THRESHOLD_HOURS: f64 = 7.0;

/// TDEE-style multiplier for each activity bracket
#[must_use]
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.0,
        ActivityLevel::Light => 1.2,
        ActivityLevel::Moderate => 1.4,
        ActivityLevel::Active => 1.6,
        ActivityLevel::VeryActive => 1.8,
    }
}

/// Daily calorie target: gender baseline, age adjustment, activity scaling
#[must_use]
pub fn calculate_daily_calories(profile: &Profile) -> u32 {
    let base = match profile.gender {
        Gender::Male => BASE_CALORIES_MALE,
        Gender::Female | Gender::NonBinary | Gender::Unspecified => BASE_CALORIES_DEFAULT,
    };
    let adjusted = if profile.age > CALORIE_ADJUSTMENT_AGE {
        base - CALORIE_AGE_REDUCTION
    } else {
        base
    };
    (adjusted * activity_multiplier(profile.activity_level)).round() as u32
}

/// Macronutrient split preset keyed by goal.
///
/// Muscle gain takes precedence over weight loss when both are selected,
/// matching the order the goals are evaluated in the plan UI.
#[must_use]
pub fn calculate_macro_split(goals: &[Goal]) -> MacroSplit {
    if goals.contains(&Goal::MuscleGain) {
        MacroSplit {
            protein: 30,
            carbs: 40,
            fats: 30,
        }
    } else if goals.contains(&Goal::WeightLoss) {
        MacroSplit {
            protein: 35,
            carbs: 30,
            fats: 35,
        }
    } else {
        MacroSplit {
            protein: 25,
            carbs: 45,
            fats: 30,
        }
    }
}

/// Sleep recommendation: fixed schedule, with optimization mode driven by
/// current sleep hours
#[must_use]
pub fn generate_sleep_plan(profile: &Profile) -> SleepPlan {
    let optimization = if profile.sleep_hours < SLEEP_PRIORITY_THRESHOLD_HOURS {
        SleepOptimization::Priority
    } else {
        SleepOptimization::Maintenance
    };
    SleepPlan {
        target_hours: 8.0,
        bedtime: "10:30 PM".to_owned(),
        wake_time: "6:30 AM".to_owned(),
        optimization,
    }
}
