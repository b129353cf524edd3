// ABOUTME: Session store integration tests: commit, cart, logout, persistence
// ABOUTME: Covers corrupt-state recovery and the read-your-writes guarantee
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WellnessGenie

//! Session store integration tests
//!
//! Covers:
//! - Corrupt persisted state recovery on `load()`
//! - Profile commit validation listing every offending field
//! - Cart quantity-merge and outright-removal semantics
//! - Idempotent logout
//! - Persistence round-trip across a simulated restart

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use wellness_genie::constants::storage_keys;
use wellness_genie::errors::SessionError;
use wellness_genie::models::{CartItem, NotificationKind, Theme};
use wellness_genie::session::{PreferencesUpdate, SessionStore};
use wellness_genie::storage::{MemoryStorage, StorageBackend};

mod common;

fn item(id: u64, name: &str, price: f64) -> CartItem {
    CartItem {
        id,
        name: name.to_owned(),
        price,
    }
}

// ============================================================================
// LOAD / CORRUPTION RECOVERY
// ============================================================================

#[test]
fn load_discards_corrupt_state_and_clears_the_key() {
    let mut backend = MemoryStorage::new();
    backend
        .set(storage_keys::WELLNESS_STATE, "{\"profile\": truncated")
        .unwrap();
    let mut store = SessionStore::new(Box::new(backend.clone()));

    let session = store.load();
    assert!(!session.is_committed());
    assert!(session.shopping_cart.is_empty());
    assert!(backend.get(storage_keys::WELLNESS_STATE).unwrap().is_none());
}

#[test]
fn load_drops_orphan_derived_data() {
    // Foreign state claiming derived traits without a profile violates the
    // session invariant and must be normalized away
    let raw = r#"{
        "profile": null,
        "derived_traits": {
            "metabolic_type": "fast",
            "energy_pattern": "night_owl",
            "stress_response": "resilient",
            "nutrition_profile": "omnivore",
            "fitness_type": "beginner"
        },
        "plan": null,
        "shopping_cart": [],
        "notifications": [],
        "ui_preferences": {"theme": "dark", "notifications": true, "voice_enabled": false},
        "progress": {"daily_goals": [], "weekly_stats": {}, "achievements": []}
    }"#;
    let mut backend = MemoryStorage::new();
    backend.set(storage_keys::WELLNESS_STATE, raw).unwrap();
    let mut store = SessionStore::new(Box::new(backend));

    let session = store.load();
    assert!(session.derived_traits.is_none());
}

// ============================================================================
// COMMIT VALIDATION
// ============================================================================

#[test]
fn commit_rejects_incomplete_profile_listing_all_fields() {
    let mut store = common::memory_store();
    let mut profile = common::valid_profile();
    profile.name = String::new();
    profile.goals.clear();

    let err = store.commit_profile(profile).unwrap_err();
    match err {
        SessionError::Validation(v) => {
            assert!(v.names_field("name"));
            assert!(v.names_field("goals"));
        }
        other => panic!("expected validation error, got {other}"),
    }
    assert!(!store.snapshot().is_committed());
}

#[test]
fn commit_populates_traits_and_plan_together() {
    let mut store = common::memory_store();
    store.commit_profile(common::valid_profile()).unwrap();

    let session = store.snapshot();
    assert!(session.profile.is_some());
    assert!(session.derived_traits.is_some());
    let plan = session.plan.as_ref().unwrap();
    assert_eq!(plan.days.len(), 7);
}

#[test]
fn update_preferences_requires_a_committed_profile() {
    let mut store = common::memory_store();
    let err = store
        .update_preferences(PreferencesUpdate::default())
        .unwrap_err();
    assert!(matches!(err, SessionError::NoActiveSession));

    store.commit_profile(common::valid_profile()).unwrap();
    store
        .update_preferences(PreferencesUpdate {
            theme: Some(Theme::Light),
            voice_enabled: Some(true),
            ..PreferencesUpdate::default()
        })
        .unwrap();
    let session = store.snapshot();
    assert_eq!(session.ui_preferences.theme, Theme::Light);
    assert!(session.ui_preferences.voice_enabled);
    assert!(session.profile.as_ref().unwrap().preferences.voice_enabled);
}

// ============================================================================
// CART SEMANTICS
// ============================================================================

#[test]
fn adding_the_same_item_twice_merges_quantity() {
    let mut store = common::memory_store();
    store.add_to_cart(item(1, "Omega-3", 10.0)).unwrap();
    store.add_to_cart(item(1, "Omega-3", 10.0)).unwrap();

    let cart = &store.snapshot().shopping_cart;
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0].item.id, 1);
    assert_eq!(cart[0].quantity, 2);
}

#[test]
fn remove_from_cart_drops_the_entry_regardless_of_quantity() {
    let mut store = common::memory_store();
    store.add_to_cart(item(1, "Omega-3", 10.0)).unwrap();
    store.add_to_cart(item(1, "Omega-3", 10.0)).unwrap();
    store.add_to_cart(item(2, "Magnesium", 14.5)).unwrap();

    store.remove_from_cart(1).unwrap();
    let cart = &store.snapshot().shopping_cart;
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0].item.id, 2);

    store.clear_cart().unwrap();
    assert!(store.snapshot().shopping_cart.is_empty());
}

// ============================================================================
// NOTIFICATIONS
// ============================================================================

#[test]
fn notifications_prepend_newest_first() {
    let mut store = common::memory_store();
    let first = store
        .add_notification("Time for vitamin D", NotificationKind::Supplement)
        .unwrap();
    let second = store
        .add_notification("Lunch logged", NotificationKind::Meal)
        .unwrap();
    assert!(second > first);

    let notifications = &store.snapshot().notifications;
    assert_eq!(notifications[0].id, second);
    assert_eq!(notifications[1].id, first);

    store.remove_notification(first).unwrap();
    assert_eq!(store.snapshot().notifications.len(), 1);
}

// ============================================================================
// LOGOUT / RESTART
// ============================================================================

#[test]
fn logout_is_idempotent() {
    let mut store = common::memory_store();
    store.commit_profile(common::valid_profile()).unwrap();
    store.add_to_cart(item(1, "Omega-3", 10.0)).unwrap();

    store.logout().unwrap();
    let after_once = store.snapshot().clone();
    store.logout().unwrap();
    assert_eq!(store.snapshot(), &after_once);
    assert!(!after_once.is_committed());
    assert!(after_once.shopping_cart.is_empty());
}

#[test]
fn committed_session_survives_a_simulated_restart() {
    let backend = MemoryStorage::new();
    let committed = {
        let mut store = SessionStore::new(Box::new(backend.clone()));
        store.commit_profile(common::vegan_athlete()).unwrap();
        store.add_to_cart(item(3, "Pea Protein", 29.0)).unwrap();
        store.snapshot().clone()
    };

    // Clones of MemoryStorage share contents, so this sees the persisted state
    let mut restarted = SessionStore::new(Box::new(backend));
    let session = restarted.load();
    assert_eq!(session, &committed);
    assert!(session.derived_traits.is_some());
    assert!(session.plan.is_some());
}

#[test]
fn regenerate_plan_replaces_wholesale_and_needs_a_profile() {
    let mut store = common::memory_store();
    assert!(matches!(
        store.regenerate_plan().unwrap_err(),
        SessionError::NoActiveSession
    ));

    store.commit_profile(common::vegan_athlete()).unwrap();
    let before = store.snapshot().plan.clone().unwrap();
    store.regenerate_plan().unwrap();
    let after = store.snapshot().plan.clone().unwrap();
    // Deterministic generation: regenerating without profile changes is stable
    assert_eq!(before, after);
}
