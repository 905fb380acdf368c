//! Step sequencer — single source of truth for step ordering and progress.
//!
//! The onboarding flow is strictly linear: Welcome → MeetQuench →
//! AvatarStates → ReasonSelection → DidYouKnow → CurrentWaterIntake →
//! ImpactVisualization → GoalCalculation. The sequencer answers "what
//! fraction done is this step" and "what would come next/before"; the actual
//! screen transition belongs to the hosting navigation layer, so nothing
//! here mutates state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::OnboardingConfig;
use crate::error::{Result, SequenceError};

/// The canonical onboarding screens, in flow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    Welcome,
    MeetQuench,
    AvatarStates,
    ReasonSelection,
    DidYouKnow,
    CurrentWaterIntake,
    ImpactVisualization,
    GoalCalculation,
}

impl OnboardingStep {
    /// All steps in flow order.
    pub const ALL: [OnboardingStep; 8] = [
        Self::Welcome,
        Self::MeetQuench,
        Self::AvatarStates,
        Self::ReasonSelection,
        Self::DidYouKnow,
        Self::CurrentWaterIntake,
        Self::ImpactVisualization,
        Self::GoalCalculation,
    ];

    /// Catalog name for this step.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::MeetQuench => "meet_quench",
            Self::AvatarStates => "avatar_states",
            Self::ReasonSelection => "reason_selection",
            Self::DidYouKnow => "did_you_know",
            Self::CurrentWaterIntake => "current_water_intake",
            Self::ImpactVisualization => "impact_visualization",
            Self::GoalCalculation => "goal_calculation",
        }
    }

    /// Look up a step by catalog name.
    pub fn from_name(name: &str) -> Option<OnboardingStep> {
        Self::ALL.into_iter().find(|step| step.name() == name)
    }
}

impl std::fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Immutable view of the configured step catalog.
///
/// All operations are keyed by step name and fail fast on a name outside the
/// catalog; an unknown step must never be silently treated as step one.
#[derive(Debug, Clone)]
pub struct StepSequencer {
    /// Step names in position order.
    names: Vec<String>,
    /// Name → 1-based position.
    positions: HashMap<String, usize>,
}

impl StepSequencer {
    /// Build a sequencer from the configured catalog, validating it first.
    pub fn new(config: &OnboardingConfig) -> Result<Self> {
        config.validate()?;
        let names: Vec<String> = config.steps.iter().map(|s| s.name.clone()).collect();
        let positions = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i + 1))
            .collect();
        Ok(Self { names, positions })
    }

    /// Total number of steps in the catalog.
    pub fn total(&self) -> usize {
        self.names.len()
    }

    /// 1-based position of a step.
    pub fn position_of(&self, step: &str) -> Result<usize> {
        self.positions.get(step).copied().ok_or_else(|| {
            tracing::warn!(step, "queried unknown onboarding step");
            SequenceError::UnknownStep(step.to_string()).into()
        })
    }

    /// Progress fraction for a step: position / total, in `(0.0, 1.0]`.
    pub fn progress_of(&self, step: &str) -> Result<f64> {
        let position = self.position_of(step)?;
        Ok(position as f64 / self.total() as f64)
    }

    /// The step that would follow `step`, or `None` if it is the last.
    pub fn next_step(&self, step: &str) -> Result<Option<&str>> {
        let position = self.position_of(step)?;
        Ok(self.names.get(position).map(String::as_str))
    }

    /// The step that would precede `step`, or `None` if it is the first.
    pub fn previous_step(&self, step: &str) -> Result<Option<&str>> {
        let position = self.position_of(step)?;
        if position == 1 {
            return Ok(None);
        }
        Ok(self.names.get(position - 2).map(String::as_str))
    }

    pub fn is_first(&self, step: &str) -> Result<bool> {
        Ok(self.position_of(step)? == 1)
    }

    pub fn is_last(&self, step: &str) -> Result<bool> {
        Ok(self.position_of(step)? == self.total())
    }

    /// Step names in position order.
    pub fn steps(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
