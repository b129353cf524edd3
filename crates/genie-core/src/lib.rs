// ABOUTME: Core types and constants for the WellnessGenie session platform
// ABOUTME: Foundation crate with models, error handling, and storage key constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WellnessGenie

#![deny(unsafe_code)]

//! # Genie Core
//!
//! Foundation crate providing shared types for the WellnessGenie session core.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `SessionError`, `ValidationError`,
//!   and `StorageError`
//! - **constants**: Storage keys and application-wide constants
//! - **models**: Session data model (Profile, `DerivedTraits`, `PlanSkeleton`,
//!   Session)

/// Unified error handling for session, validation, and storage failures
pub mod errors;

/// Storage keys and application-wide constants
pub mod constants;

/// Session data model (Profile, `DerivedTraits`, `PlanSkeleton`, Session)
pub mod models;
