//! Per-screen view models — plain data records for a declarative view layer.
//!
//! All conditional display logic lives here as pure functions; the view
//! layer only looks up assets by key and paints what it is handed. The
//! screen-local selection state (reason picker, goal form) also lives here
//! since it is the only mutable state in the flow, owned by one screen
//! instance at a time.

use serde::Serialize;

use crate::config::{FactCard, OnboardingConfig};
use crate::error::Result;
use crate::hydration::{ColorTag, HydrationClassifier, HydrationState};
use crate::sequencer::{OnboardingStep, StepSequencer};

/// Static copy for one screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScreenCopy {
    pub heading: &'static str,
    pub subtitle: Option<&'static str>,
    pub action_label: &'static str,
}

impl ScreenCopy {
    /// Copy for a canonical step.
    pub fn for_step(step: OnboardingStep) -> ScreenCopy {
        use OnboardingStep::*;
        match step {
            Welcome => ScreenCopy {
                heading: "welcome to quench",
                subtitle: Some("make drinking more water fun!"),
                action_label: "continue",
            },
            MeetQuench => ScreenCopy {
                heading: "meet quench",
                subtitle: Some(
                    "your personal hydration buddy who will help you stay healthy and hydrated throughout the day",
                ),
                action_label: "continue",
            },
            AvatarStates => ScreenCopy {
                heading: "see how your buddy changes",
                subtitle: Some("your avatar reflects your hydration level"),
                action_label: "continue",
            },
            ReasonSelection => ScreenCopy {
                heading: "you're here for a reason",
                subtitle: Some("what is that reason?"),
                action_label: "continue",
            },
            DidYouKnow => ScreenCopy {
                heading: "did you know?",
                subtitle: Some("we're here to help you stay hydrated"),
                action_label: "continue",
            },
            CurrentWaterIntake => ScreenCopy {
                heading: "how much water do you drink daily?",
                subtitle: Some("you can tell the truth"),
                action_label: "continue",
            },
            ImpactVisualization => ScreenCopy {
                heading: "this affects your body...",
                subtitle: None,
                action_label: "continue",
            },
            GoalCalculation => ScreenCopy {
                heading: "let's set your daily goal",
                subtitle: Some("we'll calculate a personalized target"),
                action_label: "get started",
            },
        }
    }
}

/// Everything the chrome around a screen needs: copy, progress, and which
/// navigation controls to show.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenModel {
    pub step: OnboardingStep,
    pub copy: ScreenCopy,
    /// Completion fraction for the progress bar, in `(0.0, 1.0]`.
    pub progress: f64,
    /// The back chevron is hidden on the first screen.
    pub shows_back: bool,
    /// The last screen's action exits onboarding instead of advancing.
    pub is_last: bool,
}

impl ScreenModel {
    pub fn for_step(step: OnboardingStep, sequencer: &StepSequencer) -> Result<ScreenModel> {
        let name = step.name();
        Ok(ScreenModel {
            step,
            copy: ScreenCopy::for_step(step),
            progress: sequencer.progress_of(name)?,
            shows_back: !sequencer.is_first(name)?,
            is_last: sequencer.is_last(name)?,
        })
    }
}

/// What the avatar-states screen renders for one slider value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HydrationRenderModel {
    pub state: HydrationState,
    pub asset: &'static str,
    pub label: &'static str,
    pub color: ColorTag,
}

/// Pure render function for the hydration slider: latest value in, plain
/// record out. Re-renders are idempotent; stale intermediate values can be
/// dropped freely.
pub fn hydration_render_model(
    level: f64,
    classifier: &HydrationClassifier,
) -> HydrationRenderModel {
    let state = classifier.classify(level);
    HydrationRenderModel {
        state,
        asset: state.avatar_asset(),
        label: state.label(),
        color: state.color_tag(),
    }
}

/// Fact cards for the "did you know" screen, in display order.
pub fn fact_cards(config: &OnboardingConfig) -> &[FactCard] {
    &config.facts
}

/// Selection state for the reason-selection screen.
///
/// Single-select: picking a reason replaces any previous pick, and picking
/// the current one clears it. The continue button stays disabled until a
/// reason is selected.
#[derive(Debug, Clone, Default)]
pub struct ReasonPicker {
    selected: Option<usize>,
}

impl ReasonPicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the reason at `index`. Out-of-range indexes are ignored.
    pub fn select(&mut self, index: usize, config: &OnboardingConfig) {
        if index >= config.reasons.len() {
            tracing::warn!(index, "reason index out of range, ignoring");
            return;
        }
        self.selected = if self.selected == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// The selected reason's text, if any.
    pub fn selected_reason<'a>(&self, config: &'a OnboardingConfig) -> Option<&'a str> {
        self.selected.and_then(|i| config.reasons.get(i).copied())
    }

    /// Disabled-button guard: false until something is selected.
    pub fn can_continue(&self) -> bool {
        self.selected.is_some()
    }
}

/// Form state for the goal-calculation screen. Fields are collected as free
/// text; the button is gated only on all fields being non-empty.
#[derive(Debug, Clone, Default)]
pub struct GoalForm {
    pub weight: String,
    pub activity_hours: String,
    pub age: String,
}

impl GoalForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Guard for the "get started" button.
    pub fn is_complete(&self) -> bool {
        !self.weight.trim().is_empty()
            && !self.activity_hours.trim().is_empty()
            && !self.age.trim().is_empty()
    }
}
