// ABOUTME: Derivation engine for Wellness DNA, nutrition math, and plan generation
// ABOUTME: Pure deterministic functions over a committed profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WellnessGenie

//! # Derivation Engine
//!
//! Pure function set mapping raw profile answers to categorical traits and a
//! generated weekly plan. Every function here is total over valid input and
//! deterministic: no wall-clock time, no randomness, no mutable globals.
//! Recomputing from the same profile always yields bit-identical output —
//! that reproducibility is the defining contract of this module.

pub mod catalog;
mod derivation;
mod nutrition_calculator;
mod plan_generator;

pub use derivation::{
    derive_energy_pattern, derive_fitness_type, derive_metabolic_type, derive_nutrition_profile,
    derive_stress_response, derive_traits,
};
pub use nutrition_calculator::{
    calculate_daily_calories, calculate_macro_split, generate_sleep_plan,
};
pub use plan_generator::generate_plan_skeleton;
