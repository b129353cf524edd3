// ABOUTME: Wellness DNA trait model computed deterministically from a profile
// ABOUTME: DerivedTraits and its five categorical trait enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WellnessGenie

use serde::{Deserialize, Serialize};

/// Metabolic speed bracket derived from age
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MetabolicType {
    /// Under 30
    Fast,
    /// 30 to 49
    Moderate,
    /// 50 and over
    Slow,
}

/// Daily energy pattern derived from sleep hours
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EnergyPattern {
    /// Eight or more hours of sleep
    MorningLark,
    /// Fewer than eight hours
    NightOwl,
}

/// Stress response category derived from the stress bracket
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StressResponse {
    /// Low or moderate stress
    Resilient,
    /// High stress
    Sensitive,
}

/// Nutrition category derived from dietary preferences
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NutritionProfile {
    /// Vegetarian or vegan
    PlantBased,
    /// Everything else
    Omnivore,
}

/// Fitness category derived from activity level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FitnessType {
    /// Sedentary or light activity
    Beginner,
    /// Moderate activity
    Active,
    /// Active or very active
    Athlete,
}

/// The "Wellness DNA": a categorical summary computed from a committed
/// profile.
///
/// A pure, deterministic function of the profile: recomputing from the same
/// profile always yields the same traits. Never partially mutated; replaced
/// wholesale when the profile is replaced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DerivedTraits {
    /// Metabolic speed bracket
    pub metabolic_type: MetabolicType,
    /// Daily energy pattern
    pub energy_pattern: EnergyPattern,
    /// Stress response category
    pub stress_response: StressResponse,
    /// Nutrition category
    pub nutrition_profile: NutritionProfile,
    /// Fitness category
    pub fitness_type: FitnessType,
}
