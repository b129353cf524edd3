// ABOUTME: Session data model for the WellnessGenie core
// ABOUTME: Profile, DerivedTraits, PlanSkeleton, and Session aggregate definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WellnessGenie

//! # Session Data Model
//!
//! The types persisted under the `wellnessState` storage key. Every type here
//! round-trips exactly through serde JSON; enum variants serialize in
//! `snake_case` to match the persisted wire format.

mod plan;
mod profile;
mod session;
mod traits;

pub use plan::{
    DayMeals, DayPlan, ExerciseBlock, ExerciseKind, Intensity, MacroSplit, Meal, PlanSkeleton,
    SleepOptimization, SleepPlan, Supplement, Weekday,
};
pub use profile::{
    ActivityLevel, BudgetTier, DietTag, Gender, Goal, HealthCondition, Profile,
    ProfilePreferences, StressLevel, UserSummary,
};
pub use session::{
    CartEntry, CartItem, DailyGoal, Notification, NotificationKind, Progress, Session, Theme,
    UiPreferences,
};
pub use traits::{
    DerivedTraits, EnergyPattern, FitnessType, MetabolicType, NutritionProfile, StressResponse,
};
