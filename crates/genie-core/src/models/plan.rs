// ABOUTME: Generated weekly plan model: meals, exercise blocks, supplements
// ABOUTME: PlanSkeleton, DayPlan, Meal, ExerciseBlock, and nutrition summary types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WellnessGenie

use serde::{Deserialize, Serialize};

/// Day of week keying each plan entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

impl Weekday {
    /// All seven days in plan order, Monday first
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];
}

/// A single meal selected from the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Meal {
    /// Meal name
    pub name: String,
    /// Ingredient list
    pub ingredients: Vec<String>,
    /// Estimated calories
    pub calories: u32,
    /// Whether the meal is free of animal products
    pub plant_based: bool,
}

/// The three meal slots for one day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayMeals {
    /// Breakfast
    pub breakfast: Meal,
    /// Lunch
    pub lunch: Meal,
    /// Dinner
    pub dinner: Meal,
}

/// Category of an exercise block
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    /// Resistance training
    Strength,
    /// Aerobic work
    Cardio,
    /// Mixed strength and cardio
    Mixed,
    /// Stretching and recovery
    Mobility,
}

/// Exercise intensity bracket
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    /// Low intensity
    Low,
    /// Moderate intensity
    Moderate,
    /// High intensity
    High,
}

/// One day's exercise prescription
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseBlock {
    /// Exercise category
    pub kind: ExerciseKind,
    /// Intensity matched to the fitness type
    pub intensity: Intensity,
    /// Session length in minutes
    pub duration_min: u32,
}

/// A scheduled supplement dose
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Supplement {
    /// Supplement name
    pub name: String,
    /// Dose per serving
    pub dosage: String,
    /// When to take it
    pub timing: String,
}

/// One weekday's full plan entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayPlan {
    /// Day of week
    pub day: Weekday,
    /// Meals for the day, filtered by nutrition profile
    pub meals: DayMeals,
    /// Exercise block for the day
    pub exercise: ExerciseBlock,
    /// Supplement schedule for the day
    pub supplements: Vec<Supplement>,
    /// Insight strings for the presentation layer
    pub insights: Vec<String>,
}

/// Macronutrient split as whole percentages summing to 100
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroSplit {
    /// Protein share
    pub protein: u8,
    /// Carbohydrate share
    pub carbs: u8,
    /// Fat share
    pub fats: u8,
}

/// Whether sleep needs active improvement or just maintenance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SleepOptimization {
    /// Under seven hours of current sleep
    Priority,
    /// Seven hours or more
    Maintenance,
}

/// Sleep recommendation attached to the plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SleepPlan {
    /// Target nightly hours
    pub target_hours: f64,
    /// Recommended bedtime
    pub bedtime: String,
    /// Recommended wake time
    pub wake_time: String,
    /// Improvement mode
    pub optimization: SleepOptimization,
}

/// The generated multi-day plan.
///
/// Every day entry references only content compatible with the profile's
/// goals and dietary preferences; a plant-based profile never receives a meal
/// or supplement containing animal products. Regenerable on demand, replaced
/// wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanSkeleton {
    /// Seven entries, Monday through Sunday
    pub days: Vec<DayPlan>,
    /// Daily calorie target
    pub daily_calories: u32,
    /// Macronutrient split preset
    pub macro_split: MacroSplit,
    /// Sleep recommendation
    pub sleep: SleepPlan,
}
