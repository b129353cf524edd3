// ABOUTME: The onboarding flow state machine: next/previous transitions and commit
// ABOUTME: Generic over a configured step list, terminal Processing state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WellnessGenie

use genie_core::errors::{SessionError, ValidationError};
use genie_core::models::DerivedTraits;
use tracing::debug;

use crate::session::SessionStore;

use super::draft::{DraftToggle, DraftUpdate, ProfileDraft};
use super::steps::{default_flow, StepConfig};

/// Where the flow currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    /// On the user-navigable step at this index
    Collecting(usize),
    /// Past the last step; waiting for the (simulated) processing delay
    /// before commit. Not user-navigable backward.
    Processing,
    /// Draft committed into the session store
    Completed,
}

/// Result of a successful `next()` transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the step at this index
    Step(usize),
    /// Entered the terminal Processing state
    Processing,
}

/// The onboarding state machine.
///
/// Holds the ordered step list and the accumulating draft. Transitions are
/// synchronous; validation failures report the offending fields and leave the
/// step index unchanged.
#[derive(Debug, Clone)]
pub struct OnboardingFlow {
    steps: Vec<StepConfig>,
    state: FlowState,
    draft: ProfileDraft,
}

impl Default for OnboardingFlow {
    fn default() -> Self {
        Self::new(default_flow())
    }
}

impl OnboardingFlow {
    /// Start a flow at step 0 with an empty draft.
    ///
    /// An empty step list has no step to collect on and no terminal step to
    /// advance past, so it falls back to [`default_flow`].
    #[must_use]
    pub fn new(steps: Vec<StepConfig>) -> Self {
        let steps = if steps.is_empty() {
            default_flow()
        } else {
            steps
        };
        Self {
            steps,
            state: FlowState::Collecting(0),
            draft: ProfileDraft::default(),
        }
    }

    /// Current machine state
    #[must_use]
    pub fn state(&self) -> FlowState {
        self.state
    }

    /// The accumulating draft, for the presentation layer to render prior
    /// answers
    #[must_use]
    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    /// Configured step list
    #[must_use]
    pub fn steps(&self) -> &[StepConfig] {
        &self.steps
    }

    /// (current 1-based step, total steps, percent complete) for progress
    /// rendering; Processing and Completed count as fully advanced
    #[must_use]
    pub fn progress(&self) -> (usize, usize, u8) {
        let total = self.steps.len();
        let current = match self.state {
            FlowState::Collecting(index) => index + 1,
            FlowState::Processing | FlowState::Completed => total,
        };
        // new() guarantees a non-empty step list
        let percent = ((current * 100) / total.max(1)) as u8;
        (current, total, percent)
    }

    /// Assign a single-value draft field without changing step
    pub fn apply(&mut self, update: DraftUpdate) {
        self.draft.apply(update);
    }

    /// Toggle a multi-select draft member without changing step
    pub fn toggle(&mut self, toggle_field: DraftToggle) {
        self.draft.toggle(toggle_field);
    }

    /// Advance past the current step.
    ///
    /// Valid only while collecting; advancing from the last step enters the
    /// Processing state.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the missing fields of the current
    /// step; the step index does not change on failure.
    pub fn next(&mut self) -> Result<Advance, ValidationError> {
        let FlowState::Collecting(index) = self.state else {
            // next() past the last step has nothing further to validate
            return Ok(Advance::Processing);
        };
        let Some(step) = self.steps.get(index) else {
            self.state = FlowState::Processing;
            return Ok(Advance::Processing);
        };

        let missing: Vec<&'static str> = step
            .required
            .iter()
            .filter(|field| !field.is_satisfied(&self.draft))
            .map(|field| field.name())
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::new(missing));
        }

        if index + 1 < self.steps.len() {
            self.state = FlowState::Collecting(index + 1);
            debug!(step = index + 1, "onboarding advanced");
            Ok(Advance::Step(index + 1))
        } else {
            self.state = FlowState::Processing;
            debug!("onboarding entered processing");
            Ok(Advance::Processing)
        }
    }

    /// Go back one step, retaining all draft data.
    ///
    /// Returns `false` (and does nothing) on the first step and in the
    /// Processing and Completed states, which are not user-navigable
    /// backward.
    pub fn previous(&mut self) -> bool {
        match self.state {
            FlowState::Collecting(index) if index > 0 => {
                self.state = FlowState::Collecting(index - 1);
                true
            }
            _ => false,
        }
    }

    /// Commit the draft into the session store.
    ///
    /// Semantically the tail of the Processing state: freezes the draft,
    /// validates it as a whole, and commits it. Callable before Processing
    /// only if every step's requirement is already satisfied (the freeze
    /// validation subsumes the per-step checks).
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Validation`] naming the incomplete fields, or
    /// any commit error from the store; the flow stays un-completed on
    /// failure.
    pub fn complete(&mut self, store: &mut SessionStore) -> Result<DerivedTraits, SessionError> {
        let profile = self.draft.freeze()?;
        let traits = store.commit_profile(profile)?;
        self.state = FlowState::Completed;
        Ok(traits)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use genie_core::models::{ActivityLevel, BudgetTier, Goal, StressLevel};

    fn filled_flow() -> OnboardingFlow {
        let mut flow = OnboardingFlow::default();
        flow.apply(DraftUpdate::Name("Kai".to_owned()));
        flow.apply(DraftUpdate::Age(27));
        flow.toggle(DraftToggle::Goal(Goal::GeneralWellness));
        flow.apply(DraftUpdate::ActivityLevel(ActivityLevel::Light));
        flow.apply(DraftUpdate::SleepHours(8.0));
        flow.apply(DraftUpdate::StressLevel(StressLevel::Low));
        flow.apply(DraftUpdate::Budget(BudgetTier::Low));
        flow
    }

    #[test]
    fn validation_gate_blocks_basic_info_without_name() {
        let mut flow = OnboardingFlow::default();
        // Welcome step has no requirements
        assert_eq!(flow.next().unwrap(), Advance::Step(1));
        let err = flow.next().unwrap_err();
        assert!(err.names_field("name"));
        assert!(err.names_field("age"));
        assert_eq!(flow.state(), FlowState::Collecting(1));
    }

    #[test]
    fn previous_retains_draft_data() {
        let mut flow = filled_flow();
        assert!(!flow.previous());
        flow.next().unwrap();
        flow.next().unwrap();
        assert!(flow.previous());
        assert_eq!(flow.state(), FlowState::Collecting(1));
        assert_eq!(flow.draft().name, "Kai");
    }

    #[test]
    fn walking_all_steps_reaches_processing() {
        let mut flow = filled_flow();
        let mut last = Advance::Step(0);
        for _ in 0..flow.steps().len() {
            last = flow.next().unwrap();
        }
        assert_eq!(last, Advance::Processing);
        assert_eq!(flow.state(), FlowState::Processing);
        assert!(!flow.previous());
    }

    #[test]
    fn empty_step_list_falls_back_to_the_default_flow() {
        let mut flow = OnboardingFlow::new(Vec::new());
        assert_eq!(flow.steps().len(), default_flow().len());
        // The fallback welcome step is ungated, so next() advances cleanly
        assert_eq!(flow.next().unwrap(), Advance::Step(1));
        assert_eq!(flow.progress(), (2, 6, 33));
    }

    #[test]
    fn progress_reports_percentage() {
        let mut flow = filled_flow();
        assert_eq!(flow.progress(), (1, 6, 16));
        flow.next().unwrap();
        assert_eq!(flow.progress(), (2, 6, 33));
    }
}
