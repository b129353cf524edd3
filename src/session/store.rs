// ABOUTME: SessionStore implementation: load, command dispatch, and persistence
// ABOUTME: Absorbs storage corruption on load and persists every mutation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WellnessGenie

use genie_core::constants::storage_keys;
use genie_core::errors::{SessionError, StorageError, ValidationError};
use genie_core::models::{CartEntry, DerivedTraits, Notification, Profile, Session};
use tracing::{debug, info, warn};

use crate::intelligence::{derive_traits, generate_plan_skeleton};
use crate::storage::StorageBackend;

use super::commands::{Effect, PreferencesUpdate, ProgressUpdate, SessionCommand};

/// Single source of truth for the session aggregate.
///
/// Owns its storage backend; all mutating operations take `&mut self`, which
/// serializes them on a single thread by construction. Every successful
/// mutation persists before returning. Persistence failures are logged, never
/// surfaced: the in-memory session remains authoritative for the process
/// lifetime.
pub struct SessionStore {
    backend: Box<dyn StorageBackend>,
    session: Session,
}

impl SessionStore {
    /// Create a store over a backend, starting from an empty session.
    /// Call [`SessionStore::load`] to rehydrate persisted state.
    #[must_use]
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self {
            backend,
            session: Session::default(),
        }
    }

    /// Read-only view of the current session for rendering
    #[must_use]
    pub fn snapshot(&self) -> &Session {
        &self.session
    }

    /// Rehydrate the session from persisted storage.
    ///
    /// Corrupt or foreign data under the session key is discarded: the key is
    /// cleared, the failure is logged, and the store starts from the default
    /// empty session. This never returns an error to the caller.
    pub fn load(&mut self) -> &Session {
        self.session = match self.backend.get(storage_keys::WELLNESS_STATE) {
            Ok(Some(raw)) => match serde_json::from_str::<Session>(&raw) {
                Ok(mut session) => {
                    // No orphan derived data: traits and plan require a profile
                    if session.profile.is_none() {
                        session.derived_traits = None;
                        session.plan = None;
                    }
                    debug!(committed = session.is_committed(), "session rehydrated");
                    session
                }
                Err(source) => {
                    let err = StorageError::Corrupt {
                        key: storage_keys::WELLNESS_STATE.to_owned(),
                        source,
                    };
                    warn!(error = %err, "discarding corrupt session state");
                    if let Err(remove_err) = self.backend.remove(storage_keys::WELLNESS_STATE) {
                        warn!(error = %remove_err, "failed to clear corrupt session key");
                    }
                    Session::default()
                }
            },
            Ok(None) => Session::default(),
            Err(err) => {
                warn!(error = %err, "storage read failed, starting from empty session");
                Session::default()
            }
        };
        &self.session
    }

    /// Run a command through the state-transition function and persist the
    /// result.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Validation`] or
    /// [`SessionError::NoActiveSession`] from the transition; on failure the
    /// session is left unchanged and nothing is persisted.
    pub fn dispatch(&mut self, command: SessionCommand) -> Result<(), SessionError> {
        let effects = apply(&mut self.session, command)?;
        for effect in effects {
            match effect {
                Effect::Persist => self.persist(),
            }
        }
        Ok(())
    }

    /// Validate and commit a profile: derives traits, generates the plan, and
    /// persists the committed session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Validation`] naming every offending field; the
    /// session is left unchanged on failure.
    pub fn commit_profile(&mut self, profile: Profile) -> Result<DerivedTraits, SessionError> {
        self.dispatch(SessionCommand::CommitProfile(profile))?;
        self.session
            .derived_traits
            .ok_or(SessionError::NoActiveSession)
    }

    /// Shallow-merge preference toggles into the UI and profile preference
    /// blocks.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoActiveSession`] if no profile is committed.
    pub fn update_preferences(&mut self, update: PreferencesUpdate) -> Result<(), SessionError> {
        self.dispatch(SessionCommand::UpdatePreferences(update))
    }

    /// Append an item to the cart, or increment its quantity if the item id
    /// is already present.
    ///
    /// # Errors
    ///
    /// Infallible today; returns `Result` for parity with the other intents.
    pub fn add_to_cart(&mut self, item: genie_core::models::CartItem) -> Result<(), SessionError> {
        self.dispatch(SessionCommand::AddToCart(item))
    }

    /// Remove a cart entry outright, regardless of quantity.
    ///
    /// # Errors
    ///
    /// Infallible today; returns `Result` for parity with the other intents.
    pub fn remove_from_cart(&mut self, id: u64) -> Result<(), SessionError> {
        self.dispatch(SessionCommand::RemoveFromCart(id))
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Infallible today; returns `Result` for parity with the other intents.
    pub fn clear_cart(&mut self) -> Result<(), SessionError> {
        self.dispatch(SessionCommand::ClearCart)
    }

    /// Prepend a notification and return its assigned id.
    ///
    /// # Errors
    ///
    /// Infallible today; returns `Result` for parity with the other intents.
    pub fn add_notification(
        &mut self,
        message: impl Into<String>,
        kind: genie_core::models::NotificationKind,
    ) -> Result<u64, SessionError> {
        self.dispatch(SessionCommand::AddNotification {
            message: message.into(),
            kind,
        })?;
        Ok(self.session.notifications.first().map_or(0, |n| n.id))
    }

    /// Remove a notification by id.
    ///
    /// # Errors
    ///
    /// Infallible today; returns `Result` for parity with the other intents.
    pub fn remove_notification(&mut self, id: u64) -> Result<(), SessionError> {
        self.dispatch(SessionCommand::RemoveNotification(id))
    }

    /// Shallow-merge the progress block.
    ///
    /// # Errors
    ///
    /// Infallible today; returns `Result` for parity with the other intents.
    pub fn update_progress(&mut self, update: ProgressUpdate) -> Result<(), SessionError> {
        self.dispatch(SessionCommand::UpdateProgress(update))
    }

    /// Regenerate the plan wholesale from the committed profile.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoActiveSession`] if no profile is committed.
    pub fn regenerate_plan(&mut self) -> Result<(), SessionError> {
        self.dispatch(SessionCommand::RegeneratePlan)
    }

    /// Clear the entire session and persist the cleared state. Idempotent.
    ///
    /// # Errors
    ///
    /// Infallible today; returns `Result` for parity with the other intents.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.dispatch(SessionCommand::Logout)
    }

    /// Re-serialize the session to storage. Failures are logged, not
    /// propagated: a persistence failure must not roll back an applied
    /// mutation.
    fn persist(&mut self) {
        match serde_json::to_string(&self.session) {
            Ok(raw) => {
                if let Err(err) = self.backend.set(storage_keys::WELLNESS_STATE, &raw) {
                    warn!(error = %err, "failed to persist session state");
                }
            }
            Err(source) => {
                let err = StorageError::Serialize {
                    key: storage_keys::WELLNESS_STATE.to_owned(),
                    source,
                };
                warn!(error = %err, "failed to serialize session state");
            }
        }

        if let Some(profile) = &self.session.profile {
            match serde_json::to_string(&profile.summary()) {
                Ok(raw) => {
                    if let Err(err) = self.backend.set(storage_keys::WELLNESS_USER, &raw) {
                        warn!(error = %err, "failed to persist user summary");
                    }
                }
                Err(source) => {
                    let err = StorageError::Serialize {
                        key: storage_keys::WELLNESS_USER.to_owned(),
                        source,
                    };
                    warn!(error = %err, "failed to serialize user summary");
                }
            }
        } else if let Err(err) = self.backend.remove(storage_keys::WELLNESS_USER) {
            warn!(error = %err, "failed to clear user summary key");
        }
    }
}

/// The single state-transition function: every mutation of the session goes
/// through this match, returning the effects to run on success.
fn apply(session: &mut Session, command: SessionCommand) -> Result<Vec<Effect>, SessionError> {
    match command {
        SessionCommand::CommitProfile(profile) => {
            validate_profile(&profile)?;
            let traits = derive_traits(&profile);
            let plan = generate_plan_skeleton(&profile, &traits);
            info!(profile_id = %profile.id, "profile committed");
            session.profile = Some(profile);
            session.derived_traits = Some(traits);
            session.plan = Some(plan);
        }
        SessionCommand::UpdatePreferences(update) => {
            let profile = session
                .profile
                .as_mut()
                .ok_or(SessionError::NoActiveSession)?;
            apply_preferences(profile, &mut session.ui_preferences, &update);
        }
        SessionCommand::AddToCart(item) => {
            if let Some(entry) = session
                .shopping_cart
                .iter_mut()
                .find(|entry| entry.item.id == item.id)
            {
                entry.quantity += 1;
            } else {
                session.shopping_cart.push(CartEntry { item, quantity: 1 });
            }
        }
        SessionCommand::RemoveFromCart(id) => {
            session.shopping_cart.retain(|entry| entry.item.id != id);
        }
        SessionCommand::ClearCart => session.shopping_cart.clear(),
        SessionCommand::AddNotification { message, kind } => {
            let id = session
                .notifications
                .iter()
                .map(|n| n.id)
                .max()
                .map_or(1, |max| max + 1);
            session.notifications.insert(0, Notification { id, message, kind });
        }
        SessionCommand::RemoveNotification(id) => {
            session.notifications.retain(|n| n.id != id);
        }
        SessionCommand::UpdateProgress(update) => {
            if let Some(daily_goals) = update.daily_goals {
                session.progress.daily_goals = daily_goals;
            }
            if let Some(weekly_stats) = update.weekly_stats {
                session.progress.weekly_stats = weekly_stats;
            }
            if let Some(achievements) = update.achievements {
                session.progress.achievements = achievements;
            }
        }
        SessionCommand::RegeneratePlan => {
            let profile = session
                .profile
                .as_ref()
                .ok_or(SessionError::NoActiveSession)?;
            let traits = derive_traits(profile);
            session.plan = Some(generate_plan_skeleton(profile, &traits));
            session.derived_traits = Some(traits);
        }
        SessionCommand::Logout => *session = Session::default(),
    }
    Ok(vec![Effect::Persist])
}

fn apply_preferences(
    profile: &mut Profile,
    ui: &mut genie_core::models::UiPreferences,
    update: &PreferencesUpdate,
) {
    if let Some(theme) = update.theme {
        ui.theme = theme;
    }
    if let Some(notifications) = update.notifications {
        ui.notifications = notifications;
        profile.preferences.notifications = notifications;
    }
    if let Some(voice_enabled) = update.voice_enabled {
        ui.voice_enabled = voice_enabled;
        profile.preferences.voice_enabled = voice_enabled;
    }
    if let Some(auto_shopping) = update.auto_shopping {
        profile.preferences.auto_shopping = auto_shopping;
    }
}

/// Completeness check for a profile about to be committed: non-empty name,
/// at least one goal, sleep hours within a day. Collects every offending
/// field instead of failing on the first.
fn validate_profile(profile: &Profile) -> Result<(), ValidationError> {
    let mut fields = Vec::new();
    if profile.name.trim().is_empty() {
        fields.push("name");
    }
    if profile.goals.is_empty() {
        fields.push("goals");
    }
    if !profile.sleep_hours.is_finite() || !(0.0..=24.0).contains(&profile.sleep_hours) {
        fields.push("sleep_hours");
    }
    if fields.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(fields))
    }
}
