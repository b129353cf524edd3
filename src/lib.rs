// ABOUTME: Main library entry point for the WellnessGenie session core
// ABOUTME: Session store, onboarding state machine, derivation engine, and storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WellnessGenie

#![deny(unsafe_code)]

//! # WellnessGenie Session Core
//!
//! The client-side session/profile state container behind the WellnessGenie
//! app: a single source of truth for the committed profile, its derived
//! "Wellness DNA", and the generated weekly plan, persisted to a key-value
//! storage surface and rehydrated at startup.
//!
//! ## Architecture
//!
//! - **session**: the [`session::SessionStore`] and its command dispatch —
//!   every mutation flows through one tagged-union reducer and persists
//!   before returning
//! - **onboarding**: a finite sequence of data-collection steps accumulating
//!   a draft profile, generic over the step configuration
//! - **intelligence**: pure, deterministic derivation of traits, calories,
//!   macros, and the weekly plan skeleton
//! - **storage**: pluggable key-value backends (in-memory, JSON files)
//! - **models/errors**: re-exported from the `genie-core` foundation crate
//!
//! The presentation layer is an external collaborator: it renders session
//! snapshots and issues intents back into the store. Nothing here escapes as
//! a panic or an exception; failures are explicit `Result` values.

/// Environment-based configuration
pub mod config;

/// Derivation engine: traits, nutrition math, and plan generation
pub mod intelligence;

/// Structured logging setup over tracing-subscriber
pub mod logging;

/// Onboarding state machine and draft profile accumulation
pub mod onboarding;

/// Session store, commands, and persistence
pub mod session;

/// Key-value storage backends
pub mod storage;

pub use genie_core::{constants, errors, models};
