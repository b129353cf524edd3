// ABOUTME: Wellness DNA trait derivation from raw profile answers
// ABOUTME: Threshold functions for metabolic, energy, stress, nutrition, fitness traits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WellnessGenie

//! Trait derivation functions.
//!
//! Each trait is a deterministic threshold function of one profile field.
//! An earlier revision picked the metabolic type at random; that broke the
//! reproducibility contract and the age-threshold form is the canonical one.

use genie_core::models::{
    ActivityLevel, DerivedTraits, DietTag, EnergyPattern, FitnessType, MetabolicType,
    NutritionProfile, Profile, StressLevel, StressResponse,
};

/// Age below which metabolism is classified as fast
const FAST_METABOLISM_MAX_AGE: u32 = 30;

/// Age from which metabolism is classified as slow
const SLOW_METABOLISM_MIN_AGE: u32 = 50;

/// Nightly hours at or above which the energy pattern is a morning lark
const MORNING_LARK_MIN_SLEEP_HOURS: f64 = 8.0;

/// Metabolic speed bracket from age
#[must_use]
pub fn derive_metabolic_type(age: u32) -> MetabolicType {
    if age < FAST_METABOLISM_MAX_AGE {
        MetabolicType::Fast
    } else if age < SLOW_METABOLISM_MIN_AGE {
        MetabolicType::Moderate
    } else {
        MetabolicType::Slow
    }
}

/// Daily energy pattern from average nightly sleep
#[must_use]
pub fn derive_energy_pattern(sleep_hours: f64) -> EnergyPattern {
    if sleep_hours >= MORNING_LARK_MIN_SLEEP_HOURS {
        EnergyPattern::MorningLark
    } else {
        EnergyPattern::NightOwl
    }
}

/// Stress response category from the self-reported stress bracket
#[must_use]
pub fn derive_stress_response(stress_level: StressLevel) -> StressResponse {
    match stress_level {
        StressLevel::High => StressResponse::Sensitive,
        StressLevel::Low | StressLevel::Moderate => StressResponse::Resilient,
    }
}

/// Nutrition category from dietary preference tags
#[must_use]
pub fn derive_nutrition_profile(dietary_preferences: &[DietTag]) -> NutritionProfile {
    let plant_based = dietary_preferences
        .iter()
        .any(|t| matches!(t, DietTag::Vegetarian | DietTag::Vegan));
    if plant_based {
        NutritionProfile::PlantBased
    } else {
        NutritionProfile::Omnivore
    }
}

/// Fitness category from the activity level bracket
#[must_use]
pub fn derive_fitness_type(activity_level: ActivityLevel) -> FitnessType {
    match activity_level {
        ActivityLevel::Sedentary | ActivityLevel::Light => FitnessType::Beginner,
        ActivityLevel::Moderate => FitnessType::Active,
        ActivityLevel::Active | ActivityLevel::VeryActive => FitnessType::Athlete,
    }
}

/// Bundle all five traits for a profile
#[must_use]
pub fn derive_traits(profile: &Profile) -> DerivedTraits {
    DerivedTraits {
        metabolic_type: derive_metabolic_type(profile.age),
        energy_pattern: derive_energy_pattern(profile.sleep_hours),
        stress_response: derive_stress_response(profile.stress_level),
        nutrition_profile: derive_nutrition_profile(&profile.dietary_preferences),
        fitness_type: derive_fitness_type(profile.activity_level),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metabolic_type_thresholds() {
        assert_eq!(derive_metabolic_type(0), MetabolicType::Fast);
        assert_eq!(derive_metabolic_type(29), MetabolicType::Fast);
        assert_eq!(derive_metabolic_type(30), MetabolicType::Moderate);
        assert_eq!(derive_metabolic_type(49), MetabolicType::Moderate);
        assert_eq!(derive_metabolic_type(50), MetabolicType::Slow);
        assert_eq!(derive_metabolic_type(90), MetabolicType::Slow);
    }

    #[test]
    fn energy_pattern_boundary_at_eight_hours() {
        assert_eq!(derive_energy_pattern(8.0), EnergyPattern::MorningLark);
        assert_eq!(derive_energy_pattern(7.9), EnergyPattern::NightOwl);
    }

    #[test]
    fn only_high_stress_is_sensitive() {
        assert_eq!(
            derive_stress_response(StressLevel::Low),
            StressResponse::Resilient
        );
        assert_eq!(
            derive_stress_response(StressLevel::Moderate),
            StressResponse::Resilient
        );
        assert_eq!(
            derive_stress_response(StressLevel::High),
            StressResponse::Sensitive
        );
    }

    #[test]
    fn vegetarian_and_vegan_are_plant_based() {
        assert_eq!(
            derive_nutrition_profile(&[DietTag::Vegetarian]),
            NutritionProfile::PlantBased
        );
        assert_eq!(
            derive_nutrition_profile(&[DietTag::Keto, DietTag::Vegan]),
            NutritionProfile::PlantBased
        );
        assert_eq!(
            derive_nutrition_profile(&[DietTag::Keto]),
            NutritionProfile::Omnivore
        );
        assert_eq!(derive_nutrition_profile(&[]), NutritionProfile::Omnivore);
    }

    #[test]
    fn fitness_type_brackets() {
        assert_eq!(
            derive_fitness_type(ActivityLevel::Sedentary),
            FitnessType::Beginner
        );
        assert_eq!(
            derive_fitness_type(ActivityLevel::Light),
            FitnessType::Beginner
        );
        assert_eq!(
            derive_fitness_type(ActivityLevel::Moderate),
            FitnessType::Active
        );
        assert_eq!(
            derive_fitness_type(ActivityLevel::Active),
            FitnessType::Athlete
        );
        assert_eq!(
            derive_fitness_type(ActivityLevel::VeryActive),
            FitnessType::Athlete
        );
    }
}
