// ABOUTME: Tagged-union session mutation commands and their partial-update payloads
// ABOUTME: SessionCommand, PreferencesUpdate, ProgressUpdate, and Effect definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WellnessGenie

use std::collections::BTreeMap;

use genie_core::models::{CartItem, DailyGoal, NotificationKind, Profile, Theme};

/// Shallow-merge payload for preference updates.
///
/// `None` fields are left untouched. Notification and voice toggles apply to
/// both the UI preferences and the committed profile's preference block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferencesUpdate {
    /// UI color theme
    pub theme: Option<Theme>,
    /// Notifications enabled
    pub notifications: Option<bool>,
    /// Voice assistant enabled
    pub voice_enabled: Option<bool>,
    /// Automatic shopping enabled
    pub auto_shopping: Option<bool>,
}

/// Shallow-merge payload for the progress block
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressUpdate {
    /// Replace the daily goal checklist
    pub daily_goals: Option<Vec<DailyGoal>>,
    /// Replace the weekly statistics map
    pub weekly_stats: Option<BTreeMap<String, f64>>,
    /// Replace the achievements list
    pub achievements: Option<Vec<String>>,
}

/// Every mutation of the session, as a tagged union consumed by one
/// state-transition function
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Validate and commit a profile, deriving traits and generating the plan
    CommitProfile(Profile),
    /// Shallow-merge preference toggles (requires a committed profile)
    UpdatePreferences(PreferencesUpdate),
    /// Append an item or increment its quantity if the id already exists
    AddToCart(CartItem),
    /// Remove a cart entry outright, regardless of quantity
    RemoveFromCart(u64),
    /// Empty the cart
    ClearCart,
    /// Prepend a notification
    AddNotification {
        /// Message text
        message: String,
        /// Notification category
        kind: NotificationKind,
    },
    /// Remove a notification by id
    RemoveNotification(u64),
    /// Shallow-merge the progress block
    UpdateProgress(ProgressUpdate),
    /// Regenerate the plan wholesale from the committed profile
    RegeneratePlan,
    /// Clear the entire session (idempotent)
    Logout,
}

/// Side effect requested by a successful state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Re-serialize the session to the storage backend
    Persist,
}
