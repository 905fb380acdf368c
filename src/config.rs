//! Configuration types.
//!
//! All static tables — the step catalog, the hydration and intake band
//! tables, the reason options, the fact cards — live in one immutable
//! [`OnboardingConfig`] built at process start and passed by reference to the
//! sequencer and classifier constructors. Nothing reads ambient globals.

use crate::classifier::Band;
use crate::error::{ConfigError, Result};
use crate::hydration::HydrationState;
use crate::intake::{HealthImpact, HealthTone, MessageTier};
use crate::sequencer::OnboardingStep;

/// One entry in the step catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepEntry {
    /// Unique step name, stable for the process lifetime.
    pub name: String,
    /// 1-based position; the catalog must cover `1..=total` contiguously.
    pub position: usize,
}

/// An icon-plus-text fact card on the "did you know" screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactCard {
    pub icon: &'static str,
    pub text: &'static str,
}

/// Band tables and constants for the cups-of-water classifier.
#[derive(Debug, Clone)]
pub struct IntakeConfig {
    /// Ceiling of the tracked range; higher counts clamp into the top band.
    pub max_cups: u32,
    /// The recommended daily target shown on the impact screen.
    pub recommended_daily_cups: u32,
    pub encouragement: Vec<Band<&'static str>>,
    pub tiers: Vec<Band<MessageTier>>,
    pub health: Vec<Band<HealthImpact>>,
}

/// Immutable onboarding configuration, fixed at startup.
#[derive(Debug, Clone)]
pub struct OnboardingConfig {
    /// Ordered step catalog.
    pub steps: Vec<StepEntry>,
    /// Hydration slider bands over `[0.0, 1.0]`, inclusive upper bounds.
    pub hydration_bands: Vec<Band<HydrationState>>,
    pub intake: IntakeConfig,
    /// Options on the reason-selection screen.
    pub reasons: Vec<&'static str>,
    /// Cards on the "did you know" screen.
    pub facts: Vec<FactCard>,
}

impl OnboardingConfig {
    /// Check catalog invariants: non-empty, unique names, contiguous
    /// 1-based positions. Band tables are checked by the classifier
    /// constructors.
    pub fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(ConfigError::EmptyCatalog.into());
        }
        let mut seen = std::collections::HashSet::new();
        for (i, step) in self.steps.iter().enumerate() {
            if !seen.insert(step.name.as_str()) {
                return Err(ConfigError::DuplicateStep(step.name.clone()).into());
            }
            let expected = i + 1;
            if step.position != expected {
                return Err(ConfigError::NonContiguousPosition {
                    name: step.name.clone(),
                    position: step.position,
                    expected,
                }
                .into());
            }
        }
        Ok(())
    }
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            steps: OnboardingStep::ALL
                .iter()
                .enumerate()
                .map(|(i, step)| StepEntry {
                    name: step.name().to_string(),
                    position: i + 1,
                })
                .collect(),
            hydration_bands: vec![
                Band { upper: 0.1, output: HydrationState::FullyHydrated },
                Band { upper: 0.3, output: HydrationState::SlightlyThirsty },
                Band { upper: 0.5, output: HydrationState::GettingThirsty },
                Band { upper: 0.7, output: HydrationState::QuiteThirsty },
                Band { upper: 0.9, output: HydrationState::VeryThirsty },
                Band { upper: 1.0, output: HydrationState::SeverelyDehydrated },
            ],
            intake: IntakeConfig {
                max_cups: 12,
                recommended_daily_cups: 8,
                encouragement: vec![
                    Band { upper: 1.0, output: "let's work on building that habit together!" },
                    Band { upper: 3.0, output: "you're getting started - that's great!" },
                    Band { upper: 5.0, output: "not bad! there's room for improvement" },
                    Band { upper: 7.0, output: "you're doing pretty well!" },
                    Band { upper: 9.0, output: "excellent! you're staying well hydrated" },
                    Band { upper: 11.0, output: "amazing! you're a hydration champion" },
                    Band { upper: 12.0, output: "wow! you're absolutely crushing it!" },
                ],
                tiers: vec![
                    Band { upper: 3.0, output: MessageTier::Muted },
                    Band { upper: 7.0, output: MessageTier::Progress },
                    Band { upper: 12.0, output: MessageTier::Excellent },
                ],
                health: vec![
                    Band {
                        upper: 3.0,
                        output: HealthImpact {
                            message: "may cause fatigue, headaches",
                            tone: HealthTone::Critical,
                        },
                    },
                    Band {
                        upper: 7.0,
                        output: HealthImpact {
                            message: "room for improvement",
                            tone: HealthTone::Warning,
                        },
                    },
                    Band {
                        upper: 12.0,
                        output: HealthImpact {
                            message: "great hydration habits!",
                            tone: HealthTone::Positive,
                        },
                    },
                ],
            },
            reasons: vec![
                "improve energy",
                "better skin",
                "reduce headaches",
                "better focus",
                "lose weight",
                "just curious",
            ],
            facts: vec![
                FactCard { icon: "💧", text: "your body is 60% water" },
                FactCard { icon: "🧠", text: "your brain is 75% water" },
                FactCard { icon: "😴", text: "dehydration causes fatigue and headaches" },
                FactCard { icon: "💪", text: "proper hydration boosts energy and focus" },
            ],
        }
    }
}
