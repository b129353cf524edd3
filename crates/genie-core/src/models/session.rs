// ABOUTME: Session aggregate model persisted under the wellnessState key
// ABOUTME: Session, cart, notification, progress, and UI preference types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WellnessGenie

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::plan::PlanSkeleton;
use super::profile::Profile;
use super::traits::DerivedTraits;

/// A purchasable item as the presentation layer hands it to the cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Item identifier from the product catalog
    pub id: u64,
    /// Display name
    pub name: String,
    /// Unit price
    pub price: f64,
}

/// One cart line: an item plus its accumulated quantity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartEntry {
    /// The item
    #[serde(flatten)]
    pub item: CartItem,
    /// Accumulated quantity (adding the same item id increments this)
    pub quantity: u32,
}

/// Category of a notification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Supplement reminder
    Supplement,
    /// Meal reminder
    Meal,
    /// Exercise reminder
    Exercise,
    /// Achievement unlocked
    Achievement,
    /// System message
    System,
}

/// A queued user-facing notification, newest first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    /// Monotonically assigned identifier
    pub id: u64,
    /// Message text
    pub message: String,
    /// Category
    pub kind: NotificationKind,
}

/// UI color theme
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Dark theme (default)
    #[default]
    Dark,
    /// Light theme
    Light,
}

/// Presentation-layer preferences, independent of the committed profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiPreferences {
    /// Color theme
    pub theme: Theme,
    /// Notifications enabled
    pub notifications: bool,
    /// Voice assistant enabled
    pub voice_enabled: bool,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            notifications: true,
            voice_enabled: false,
        }
    }
}

/// One daily goal checkbox on the progress screen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyGoal {
    /// Goal label
    pub label: String,
    /// Whether the user has checked it off today
    pub completed: bool,
}

/// Progress tracking block of the session
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Progress {
    /// Today's goal checklist
    pub daily_goals: Vec<DailyGoal>,
    /// Named weekly statistics
    pub weekly_stats: BTreeMap<String, f64>,
    /// Unlocked achievement labels
    pub achievements: Vec<String>,
}

/// The full persisted client-side state aggregate.
///
/// `derived_traits` and `plan` are present if and only if `profile` is
/// present: there is never orphan derived data. Every mutation is
/// re-serialized to storage before the mutating operation returns.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Session {
    /// Committed profile, if onboarding has completed
    pub profile: Option<Profile>,
    /// Wellness DNA derived from the profile
    pub derived_traits: Option<DerivedTraits>,
    /// Generated weekly plan
    pub plan: Option<PlanSkeleton>,
    /// Shopping cart lines, in insertion order
    pub shopping_cart: Vec<CartEntry>,
    /// Notifications, newest first
    pub notifications: Vec<Notification>,
    /// Presentation-layer preferences
    pub ui_preferences: UiPreferences,
    /// Progress tracking block
    pub progress: Progress,
}

impl Session {
    /// Whether a profile has been committed
    #[must_use]
    pub fn is_committed(&self) -> bool {
        self.profile.is_some()
    }
}
