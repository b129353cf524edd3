// ABOUTME: Session store module: single source of truth for committed state
// ABOUTME: Command dispatch, validation, and persistence wiring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WellnessGenie

//! # Session Store
//!
//! The sole owner of the committed profile, derived traits, plan, cart, and
//! notifications. Every mutation is expressed as a [`SessionCommand`] and
//! flows through one state-transition function, which keeps the transition
//! surface auditable; the public methods are thin wrappers over dispatch.
//! Each successful mutation is persisted to the storage backend before the
//! call returns, so the in-memory session and the persisted copy never
//! diverge.

mod commands;
mod store;

pub use commands::{Effect, PreferencesUpdate, ProgressUpdate, SessionCommand};
pub use store::SessionStore;
