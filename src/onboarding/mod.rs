// ABOUTME: Onboarding state machine accumulating a draft profile step by step
// ABOUTME: Flow, step configuration, draft updates, and completion timer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WellnessGenie

//! # Onboarding State Machine
//!
//! A fixed, ordered sequence of data-collection steps that accumulates a
//! draft profile and, on completion, commits it through the session store.
//! The machine is generic over its step list: each step names the draft
//! fields it requires, and `next()` refuses to advance until they validate.
//! Every failure is locally recoverable; there is no fatal path here.

mod draft;
mod machine;
mod steps;
mod timer;

pub use draft::{DraftToggle, DraftUpdate, ProfileDraft};
pub use machine::{Advance, FlowState, OnboardingFlow};
pub use steps::{default_flow, StepConfig, StepField};
pub use timer::CompletionTimer;
