// ABOUTME: Shared helpers for integration tests
// ABOUTME: Profile builders and a memory-backed session store constructor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WellnessGenie

use chrono::Utc;
use uuid::Uuid;
use wellness_genie::models::{
    ActivityLevel, BudgetTier, DietTag, Gender, Goal, Profile, ProfilePreferences, StressLevel,
};
use wellness_genie::session::SessionStore;
use wellness_genie::storage::MemoryStorage;

/// Store over a fresh in-memory backend
#[must_use]
pub fn memory_store() -> SessionStore {
    SessionStore::new(Box::new(MemoryStorage::new()))
}

/// A complete, valid profile for commit tests
#[must_use]
pub fn valid_profile() -> Profile {
    Profile {
        id: Uuid::new_v4(),
        name: "Jamie Lee".to_owned(),
        age: 28,
        gender: Gender::Female,
        location: Some("Montreal".to_owned()),
        activity_level: ActivityLevel::Moderate,
        sleep_hours: 7.5,
        stress_level: StressLevel::Moderate,
        goals: vec![Goal::Energy],
        dietary_preferences: vec![DietTag::Mediterranean],
        health_conditions: vec![],
        budget: BudgetTier::Medium,
        preferences: ProfilePreferences::default(),
        created_at: Utc::now(),
    }
}

/// The worked example from the plan documentation: a 22-year-old vegan
/// athlete sleeping 8.5 hours with low stress
#[must_use]
pub fn vegan_athlete() -> Profile {
    Profile {
        id: Uuid::new_v4(),
        name: "Sam Field".to_owned(),
        age: 22,
        gender: Gender::Male,
        location: None,
        activity_level: ActivityLevel::VeryActive,
        sleep_hours: 8.5,
        stress_level: StressLevel::Low,
        goals: vec![Goal::MuscleGain],
        dietary_preferences: vec![DietTag::Vegan],
        health_conditions: vec![],
        budget: BudgetTier::High,
        preferences: ProfilePreferences::default(),
        created_at: Utc::now(),
    }
}
