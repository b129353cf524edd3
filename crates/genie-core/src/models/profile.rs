// ABOUTME: Raw onboarding profile model and its enumerated answer types
// ABOUTME: Profile, Gender, ActivityLevel, Goal, DietTag, and related definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WellnessGenie

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::service;

/// Self-reported gender, used for the daily calorie baseline
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (higher calorie baseline)
    Male,
    /// Female
    Female,
    /// Non-binary
    NonBinary,
    /// Not provided
    #[default]
    Unspecified,
}

impl Gender {
    /// Parse from free-text input, falling back to [`Gender::Unspecified`]
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "male" | "m" => Self::Male,
            "female" | "f" => Self::Female,
            "non_binary" | "non-binary" | "nonbinary" => Self::NonBinary,
            _ => Self::Unspecified,
        }
    }
}

/// Weekly exercise volume bracket
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little to no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Heavy exercise 6-7 days/week
    Active,
    /// Very heavy exercise, physical job
    VeryActive,
}

/// Self-reported stress bracket
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StressLevel {
    /// Generally relaxed
    Low,
    /// Some stress, manageable
    Moderate,
    /// Often stressed or anxious
    High,
}

/// Monthly wellness budget bracket
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BudgetTier {
    /// Basic supplements & essentials
    Low,
    /// Quality supplements & some groceries
    Medium,
    /// Premium products & full grocery support
    High,
    /// No budget constraints
    Unlimited,
}

/// Wellness goal tags selectable during onboarding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Weight loss
    WeightLoss,
    /// Muscle gain
    MuscleGain,
    /// More energy
    Energy,
    /// Glowing skin
    SkinHealth,
    /// Mental wellness
    MentalHealth,
    /// Better sleep
    Sleep,
    /// Stress management
    Stress,
    /// General wellness
    GeneralWellness,
}

/// Dietary preference tags
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DietTag {
    /// Vegetarian
    Vegetarian,
    /// Vegan
    Vegan,
    /// Ketogenic
    Keto,
    /// Paleo
    Paleo,
    /// Mediterranean
    Mediterranean,
    /// Gluten-free
    GlutenFree,
    /// Dairy-free
    DairyFree,
    /// Low-carb
    LowCarb,
    /// High-protein
    HighProtein,
}

/// Pre-existing health condition tags
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HealthCondition {
    /// Diabetes
    Diabetes,
    /// High blood pressure
    HighBloodPressure,
    /// Heart disease
    HeartDisease,
    /// Thyroid issues
    ThyroidIssues,
    /// Polycystic ovary syndrome
    Pcos,
    /// Anxiety
    Anxiety,
    /// Depression
    Depression,
    /// Arthritis
    Arthritis,
}

/// Boolean toggles collected at the end of onboarding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfilePreferences {
    /// Wellness reminders enabled
    pub notifications: bool,
    /// Voice assistant enabled
    pub voice_enabled: bool,
    /// Automatic supplement/grocery ordering enabled
    pub auto_shopping: bool,
}

impl Default for ProfilePreferences {
    fn default() -> Self {
        Self {
            notifications: true,
            voice_enabled: false,
            auto_shopping: false,
        }
    }
}

/// Raw answers collected during onboarding.
///
/// Immutable once committed: the session store only replaces it wholesale
/// (re-onboarding) or merges preference toggles through an explicit
/// `update_preferences` operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// Stable identifier assigned at commit time
    pub id: Uuid,
    /// Display name, non-empty for a committed profile
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Self-reported gender
    #[serde(default)]
    pub gender: Gender,
    /// Free-text location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Weekly exercise volume
    pub activity_level: ActivityLevel,
    /// Average nightly sleep, 0.0..=24.0
    pub sleep_hours: f64,
    /// Self-reported stress bracket
    pub stress_level: StressLevel,
    /// Selected wellness goals, non-empty for a committed profile
    pub goals: Vec<Goal>,
    /// Selected dietary preferences
    #[serde(default)]
    pub dietary_preferences: Vec<DietTag>,
    /// Selected health conditions
    #[serde(default)]
    pub health_conditions: Vec<HealthCondition>,
    /// Monthly wellness budget
    pub budget: BudgetTier,
    /// Boolean preference toggles
    #[serde(default)]
    pub preferences: ProfilePreferences,
    /// Commit timestamp
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Whether the profile follows a plant-based diet.
    ///
    /// Vegetarian or vegan tags both qualify; this gates the meal and
    /// supplement catalogs during plan generation.
    #[must_use]
    pub fn is_plant_based(&self) -> bool {
        self.dietary_preferences
            .iter()
            .any(|t| matches!(t, DietTag::Vegetarian | DietTag::Vegan))
    }

    /// Whether a goal tag was selected
    #[must_use]
    pub fn has_goal(&self, goal: Goal) -> bool {
        self.goals.contains(&goal)
    }

    /// Summary record persisted under the `wellnessUser` storage key
    #[must_use]
    pub fn summary(&self) -> UserSummary {
        let local = self.name.to_lowercase().replace(' ', ".");
        UserSummary {
            id: self.id,
            name: self.name.clone(),
            email: format!("{local}@{}", service::EMAIL_DOMAIN),
            created_at: self.created_at,
        }
    }
}

/// Subset of the profile persisted under the `wellnessUser` storage key
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    /// Profile identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Computed email-like identifier
    pub email: String,
    /// Commit timestamp
    pub created_at: DateTime<Utc>,
}
