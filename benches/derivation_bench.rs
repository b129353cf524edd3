// ABOUTME: Criterion benchmarks for trait derivation and plan generation
// ABOUTME: Measures the pure derivation pipeline over varied profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WellnessGenie

//! Criterion benchmarks for the derivation engine.
//!
//! Measures trait derivation, calorie and macro computation, and full plan
//! skeleton generation.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use uuid::Uuid;
use wellness_genie::intelligence::{
    calculate_daily_calories, calculate_macro_split, derive_traits, generate_plan_skeleton,
};
use wellness_genie::models::{
    ActivityLevel, BudgetTier, DietTag, Gender, Goal, Profile, ProfilePreferences, StressLevel,
};

/// Deterministic profile variants spanning the decision thresholds
fn generate_profiles(count: usize) -> Vec<Profile> {
    (0..count)
        .map(|index| {
            let activity_level = match index % 5 {
                0 => ActivityLevel::Sedentary,
                1 => ActivityLevel::Light,
                2 => ActivityLevel::Moderate,
                3 => ActivityLevel::Active,
                _ => ActivityLevel::VeryActive,
            };
            let stress_level = match index % 3 {
                0 => StressLevel::Low,
                1 => StressLevel::Moderate,
                _ => StressLevel::High,
            };
            let goals = match index % 4 {
                0 => vec![Goal::MuscleGain],
                1 => vec![Goal::WeightLoss],
                2 => vec![Goal::Energy, Goal::Sleep],
                _ => vec![Goal::GeneralWellness],
            };
            let dietary_preferences = if index % 2 == 0 {
                vec![DietTag::Vegan]
            } else {
                vec![]
            };
            Profile {
                id: Uuid::new_v4(),
                name: format!("Bench User {index}"),
                age: 18 + (index as u32 * 7) % 60,
                gender: if index % 2 == 0 {
                    Gender::Male
                } else {
                    Gender::Female
                },
                location: None,
                activity_level,
                sleep_hours: 5.0 + (index % 5) as f64,
                stress_level,
                goals,
                dietary_preferences,
                health_conditions: vec![],
                budget: BudgetTier::Medium,
                preferences: ProfilePreferences::default(),
                created_at: Utc::now(),
            }
        })
        .collect()
}

fn bench_trait_derivation(c: &mut Criterion) {
    let profiles = generate_profiles(100);
    c.bench_function("derive_traits_100_profiles", |b| {
        b.iter(|| {
            for profile in &profiles {
                black_box(derive_traits(black_box(profile)));
            }
        });
    });
}

fn bench_nutrition_calculation(c: &mut Criterion) {
    let profiles = generate_profiles(100);
    c.bench_function("daily_calories_and_macros_100_profiles", |b| {
        b.iter(|| {
            for profile in &profiles {
                black_box(calculate_daily_calories(black_box(profile)));
                black_box(calculate_macro_split(black_box(&profile.goals)));
            }
        });
    });
}

fn bench_plan_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_generation");
    for count in [1_usize, 10, 100] {
        let profiles = generate_profiles(count);
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &profiles,
            |b, profiles| {
                b.iter(|| {
                    for profile in profiles {
                        let traits = derive_traits(profile);
                        black_box(generate_plan_skeleton(black_box(profile), &traits));
                    }
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_trait_derivation,
    bench_nutrition_calculation,
    bench_plan_generation,
);
criterion_main!(benches);
