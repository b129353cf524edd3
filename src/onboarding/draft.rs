// ABOUTME: In-progress draft profile mutated during onboarding
// ABOUTME: Typed field updates, toggle semantics, and the freeze-to-Profile conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WellnessGenie

use chrono::Utc;
use genie_core::errors::ValidationError;
use genie_core::models::{
    ActivityLevel, BudgetTier, DietTag, Gender, Goal, HealthCondition, Profile,
    ProfilePreferences, StressLevel,
};
use uuid::Uuid;

/// A single-value draft field assignment
#[derive(Debug, Clone, PartialEq)]
pub enum DraftUpdate {
    /// Display name
    Name(String),
    /// Age in years
    Age(u32),
    /// Self-reported gender
    Gender(Gender),
    /// Free-text location
    Location(String),
    /// Weekly exercise volume
    ActivityLevel(ActivityLevel),
    /// Average nightly sleep
    SleepHours(f64),
    /// Self-reported stress bracket
    StressLevel(StressLevel),
    /// Monthly wellness budget
    Budget(BudgetTier),
    /// Wellness reminders toggle
    Notifications(bool),
    /// Voice assistant toggle
    VoiceEnabled(bool),
    /// Automatic shopping toggle
    AutoShopping(bool),
}

/// A multi-select draft field toggle: applying the same value twice
/// deselects it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftToggle {
    /// Wellness goal tag
    Goal(Goal),
    /// Dietary preference tag
    DietTag(DietTag),
    /// Health condition tag
    HealthCondition(HealthCondition),
}

/// The in-progress, possibly-incomplete profile being built during
/// onboarding. Mutable and allowed to be invalid until frozen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileDraft {
    /// Display name; empty means not yet provided
    pub name: String,
    /// Age, once provided
    pub age: Option<u32>,
    /// Gender, once provided
    pub gender: Option<Gender>,
    /// Location, once provided
    pub location: Option<String>,
    /// Activity level, once provided
    pub activity_level: Option<ActivityLevel>,
    /// Sleep hours, once provided
    pub sleep_hours: Option<f64>,
    /// Stress level, once provided
    pub stress_level: Option<StressLevel>,
    /// Selected goals, in selection order
    pub goals: Vec<Goal>,
    /// Selected dietary preferences, in selection order
    pub dietary_preferences: Vec<DietTag>,
    /// Selected health conditions, in selection order
    pub health_conditions: Vec<HealthCondition>,
    /// Budget, once provided
    pub budget: Option<BudgetTier>,
    /// Preference toggles (carry their defaults until changed)
    pub preferences: ProfilePreferences,
}

fn toggle<T: PartialEq>(set: &mut Vec<T>, value: T) {
    if let Some(pos) = set.iter().position(|v| *v == value) {
        set.remove(pos);
    } else {
        set.push(value);
    }
}

impl ProfileDraft {
    /// Assign a single-value field
    pub fn apply(&mut self, update: DraftUpdate) {
        match update {
            DraftUpdate::Name(name) => self.name = name,
            DraftUpdate::Age(age) => self.age = Some(age),
            DraftUpdate::Gender(gender) => self.gender = Some(gender),
            DraftUpdate::Location(location) => self.location = Some(location),
            DraftUpdate::ActivityLevel(level) => self.activity_level = Some(level),
            DraftUpdate::SleepHours(hours) => self.sleep_hours = Some(hours),
            DraftUpdate::StressLevel(level) => self.stress_level = Some(level),
            DraftUpdate::Budget(budget) => self.budget = Some(budget),
            DraftUpdate::Notifications(on) => self.preferences.notifications = on,
            DraftUpdate::VoiceEnabled(on) => self.preferences.voice_enabled = on,
            DraftUpdate::AutoShopping(on) => self.preferences.auto_shopping = on,
        }
    }

    /// Toggle a multi-select member: selecting twice deselects
    pub fn toggle(&mut self, toggle_field: DraftToggle) {
        match toggle_field {
            DraftToggle::Goal(goal) => toggle(&mut self.goals, goal),
            DraftToggle::DietTag(tag) => toggle(&mut self.dietary_preferences, tag),
            DraftToggle::HealthCondition(condition) => {
                toggle(&mut self.health_conditions, condition);
            }
        }
    }

    /// Freeze the draft into an immutable profile, assigning its identity.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming every still-missing field.
    pub fn freeze(&self) -> Result<Profile, ValidationError> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.age.is_none() {
            missing.push("age");
        }
        if self.activity_level.is_none() {
            missing.push("activity_level");
        }
        if self.sleep_hours.is_none() {
            missing.push("sleep_hours");
        }
        if self.stress_level.is_none() {
            missing.push("stress_level");
        }
        if self.goals.is_empty() {
            missing.push("goals");
        }
        if self.budget.is_none() {
            missing.push("budget");
        }
        if !missing.is_empty() {
            return Err(ValidationError::new(missing));
        }

        // Safe to unwrap via the checks above, but destructure instead
        let (Some(age), Some(activity_level), Some(sleep_hours), Some(stress_level), Some(budget)) = (
            self.age,
            self.activity_level,
            self.sleep_hours,
            self.stress_level,
            self.budget,
        ) else {
            return Err(ValidationError::new(["draft"]));
        };

        Ok(Profile {
            id: Uuid::new_v4(),
            name: self.name.trim().to_owned(),
            age,
            gender: self.gender.unwrap_or_default(),
            location: self.location.clone(),
            activity_level,
            sleep_hours,
            stress_level,
            goals: self.goals.clone(),
            dietary_preferences: self.dietary_preferences.clone(),
            health_conditions: self.health_conditions.clone(),
            budget,
            preferences: self.preferences,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_deselects() {
        let mut draft = ProfileDraft::default();
        draft.toggle(DraftToggle::Goal(Goal::Energy));
        draft.toggle(DraftToggle::Goal(Goal::Sleep));
        assert_eq!(draft.goals, vec![Goal::Energy, Goal::Sleep]);
        draft.toggle(DraftToggle::Goal(Goal::Energy));
        assert_eq!(draft.goals, vec![Goal::Sleep]);
    }

    #[test]
    fn freeze_names_missing_fields() {
        let err = ProfileDraft::default().freeze().unwrap_err();
        assert!(err.names_field("name"));
        assert!(err.names_field("age"));
        assert!(err.names_field("goals"));
        assert!(err.names_field("budget"));
    }

    #[test]
    fn freeze_succeeds_with_complete_draft() {
        let mut draft = ProfileDraft::default();
        draft.apply(DraftUpdate::Name("Robin".to_owned()));
        draft.apply(DraftUpdate::Age(41));
        draft.apply(DraftUpdate::ActivityLevel(ActivityLevel::Light));
        draft.apply(DraftUpdate::SleepHours(6.0));
        draft.apply(DraftUpdate::StressLevel(StressLevel::High));
        draft.apply(DraftUpdate::Budget(BudgetTier::Low));
        draft.toggle(DraftToggle::Goal(Goal::Stress));

        let profile = draft.freeze().unwrap();
        assert_eq!(profile.name, "Robin");
        assert_eq!(profile.gender, Gender::Unspecified);
        assert_eq!(profile.goals, vec![Goal::Stress]);
    }
}
