// ABOUTME: Step configuration for the onboarding flow
// ABOUTME: StepField validators and the default WellnessGenie step sequence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WellnessGenie

use super::draft::ProfileDraft;

/// A draft field a step can require before advancing past it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepField {
    /// Non-empty display name
    Name,
    /// Age provided
    Age,
    /// At least one goal selected
    Goals,
    /// Activity level provided
    ActivityLevel,
    /// Sleep hours provided
    SleepHours,
    /// Stress level provided
    StressLevel,
    /// Budget provided
    Budget,
}

impl StepField {
    /// Field name used in validation errors
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Goals => "goals",
            Self::ActivityLevel => "activity_level",
            Self::SleepHours => "sleep_hours",
            Self::StressLevel => "stress_level",
            Self::Budget => "budget",
        }
    }

    /// Whether the draft satisfies this field
    #[must_use]
    pub fn is_satisfied(self, draft: &ProfileDraft) -> bool {
        match self {
            Self::Name => !draft.name.trim().is_empty(),
            Self::Age => draft.age.is_some(),
            Self::Goals => !draft.goals.is_empty(),
            Self::ActivityLevel => draft.activity_level.is_some(),
            Self::SleepHours => draft.sleep_hours.is_some(),
            Self::StressLevel => draft.stress_level.is_some(),
            Self::Budget => draft.budget.is_some(),
        }
    }
}

/// One user-navigable step: a title for the presentation layer plus the
/// draft fields that must be present before `next()` advances past it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepConfig {
    /// Stable step identifier
    pub id: &'static str,
    /// Title shown by the presentation layer
    pub title: &'static str,
    /// Fields required to leave this step
    pub required: &'static [StepField],
}

/// The standard WellnessGenie onboarding sequence. The terminal Processing
/// state is part of the machine itself, not this list.
#[must_use]
pub fn default_flow() -> Vec<StepConfig> {
    vec![
        StepConfig {
            id: "welcome",
            title: "Welcome to WellnessGenie",
            required: &[],
        },
        StepConfig {
            id: "basic_info",
            title: "Tell us about yourself",
            required: &[StepField::Name, StepField::Age],
        },
        StepConfig {
            id: "goals",
            title: "What are your wellness goals?",
            required: &[StepField::Goals],
        },
        StepConfig {
            id: "lifestyle",
            title: "Lifestyle & activity",
            required: &[StepField::ActivityLevel, StepField::SleepHours],
        },
        StepConfig {
            id: "health",
            title: "Health & dietary preferences",
            required: &[StepField::StressLevel],
        },
        StepConfig {
            id: "preferences",
            title: "AI preferences & budget",
            required: &[StepField::Budget],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flow_starts_with_an_ungated_welcome_step() {
        let flow = default_flow();
        assert_eq!(flow[0].id, "welcome");
        assert!(flow[0].required.is_empty());
        assert_eq!(flow.len(), 6);
    }

    #[test]
    fn basic_info_requires_name_and_age() {
        let flow = default_flow();
        let names: Vec<&str> = flow[1].required.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["name", "age"]);
    }
}
