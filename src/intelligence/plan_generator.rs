// ABOUTME: Weekly plan skeleton generation from profile and derived traits
// ABOUTME: Deterministic catalog rotation, exercise scheduling, and supplement selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WellnessGenie

//! Plan skeleton generation.
//!
//! Builds the seven-day plan by rotating through the catalog deterministically
//! (day index modulo the filtered catalog length), assigning exercise blocks
//! by fitness type and goals, and drawing supplements from the affinity
//! tables. Content selection honors the compatibility contract: a plant-based
//! profile never receives a meal or supplement containing animal products.

use genie_core::models::{
    DayMeals, DayPlan, DerivedTraits, EnergyPattern, ExerciseBlock, ExerciseKind, FitnessType,
    Goal, Intensity, Meal, NutritionProfile, PlanSkeleton, Profile, StressLevel, Supplement,
    Weekday,
};

use super::catalog::{
    CatalogMeal, CatalogSupplement, BREAKFASTS, DINNERS, ENERGY_SUPPLEMENTS, LUNCHES,
    MUSCLE_GAIN_SUPPLEMENTS, PLANT_PROTEIN_SUBSTITUTE, STRESS_SUPPLEMENTS,
};
use super::nutrition_calculator::{
    calculate_daily_calories, calculate_macro_split, generate_sleep_plan,
};

/// Default session length in minutes
const EXERCISE_DURATION_MIN: u32 = 45;

/// Generate the full weekly plan for a committed profile.
///
/// Deterministic: the same profile and traits always produce the same plan.
#[must_use]
pub fn generate_plan_skeleton(profile: &Profile, traits: &DerivedTraits) -> PlanSkeleton {
    let supplements = select_supplements(profile, traits.nutrition_profile);
    let days = Weekday::ALL
        .iter()
        .enumerate()
        .map(|(index, &day)| DayPlan {
            day,
            meals: select_meals(index, traits.nutrition_profile),
            exercise: exercise_for_day(index, profile, traits),
            supplements: supplements.clone(),
            insights: insights_for_day(index, traits),
        })
        .collect();

    PlanSkeleton {
        days,
        daily_calories: calculate_daily_calories(profile),
        macro_split: calculate_macro_split(&profile.goals),
        sleep: generate_sleep_plan(profile),
    }
}

fn to_meal(entry: &CatalogMeal) -> Meal {
    Meal {
        name: entry.name.to_owned(),
        ingredients: entry.ingredients.iter().map(|&i| i.to_owned()).collect(),
        calories: entry.calories,
        plant_based: entry.plant_based,
    }
}

fn pick(slot: &'static [CatalogMeal], index: usize, nutrition: NutritionProfile) -> Meal {
    let filtered: Vec<&CatalogMeal> = slot
        .iter()
        .filter(|m| nutrition == NutritionProfile::Omnivore || m.plant_based)
        .collect();
    // A slot with no compatible entries rotates over the full slot instead
    match filtered.get(index % filtered.len().max(1)) {
        Some(entry) => to_meal(entry),
        None => to_meal(&slot[index % slot.len()]),
    }
}

fn select_meals(index: usize, nutrition: NutritionProfile) -> DayMeals {
    DayMeals {
        breakfast: pick(BREAKFASTS, index, nutrition),
        lunch: pick(LUNCHES, index, nutrition),
        dinner: pick(DINNERS, index, nutrition),
    }
}

fn exercise_for_day(index: usize, profile: &Profile, traits: &DerivedTraits) -> ExerciseBlock {
    let primary = if profile.has_goal(Goal::MuscleGain) {
        ExerciseKind::Strength
    } else {
        ExerciseKind::Mixed
    };
    // Weekly rotation: two recovery days, one dedicated cardio day
    let kind = match index {
        2 | 6 => ExerciseKind::Mobility,
        4 => ExerciseKind::Cardio,
        _ => primary,
    };
    let intensity = match (kind, traits.fitness_type) {
        (ExerciseKind::Mobility, _) | (_, FitnessType::Beginner) => Intensity::Low,
        (_, FitnessType::Active) => Intensity::Moderate,
        (_, FitnessType::Athlete) => Intensity::High,
    };
    ExerciseBlock {
        kind,
        intensity,
        duration_min: EXERCISE_DURATION_MIN,
    }
}

fn insights_for_day(index: usize, traits: &DerivedTraits) -> Vec<String> {
    let mut insights = Vec::with_capacity(2);
    match traits.energy_pattern {
        EnergyPattern::MorningLark => {
            insights.push("Your energy peaks in the morning - schedule demanding work early".to_owned());
        }
        EnergyPattern::NightOwl => {
            insights.push("Your energy builds late - keep mornings light and ease into the day".to_owned());
        }
    }
    if index == 2 || index == 6 {
        insights.push("Recovery day: prioritize stretching and an earlier bedtime".to_owned());
    } else {
        insights.push("Post-workout protein window: eat within 30 minutes of training".to_owned());
    }
    insights
}

fn to_supplement(entry: &CatalogSupplement) -> Supplement {
    Supplement {
        name: entry.name.to_owned(),
        dosage: entry.dosage.to_owned(),
        timing: entry.timing.to_owned(),
    }
}

/// Supplement selection: goal and stress affinity tables, with the whey
/// entry substituted for plant-based profiles
fn select_supplements(profile: &Profile, nutrition: NutritionProfile) -> Vec<Supplement> {
    let mut selected = Vec::new();
    if profile.has_goal(Goal::MuscleGain) {
        for entry in MUSCLE_GAIN_SUPPLEMENTS {
            if !entry.plant_based && nutrition == NutritionProfile::PlantBased {
                selected.push(to_supplement(&PLANT_PROTEIN_SUBSTITUTE));
            } else {
                selected.push(to_supplement(entry));
            }
        }
    }
    if profile.has_goal(Goal::Energy) {
        selected.extend(ENERGY_SUPPLEMENTS.iter().map(to_supplement));
    }
    if profile.stress_level == StressLevel::High {
        selected.extend(STRESS_SUPPLEMENTS.iter().map(to_supplement));
    }
    selected
}
