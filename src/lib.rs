//! Quench onboarding core — step sequencing and hydration classification.
//!
//! The logic layer behind the app's eight-screen onboarding flow. The flow
//! is strictly linear; the [`sequencer::StepSequencer`] owns step ordering
//! and progress fractions, and two banded classifiers map the slider inputs
//! (hydration level, daily cups) to discrete display states. Rendering,
//! styling, and actual navigation are external collaborators; everything
//! here is synchronous and side-effect-free.

pub mod classifier;
pub mod config;
pub mod error;
pub mod hydration;
pub mod intake;
pub mod screens;
pub mod sequencer;

pub use config::{FactCard, IntakeConfig, OnboardingConfig, StepEntry};
pub use error::{ConfigError, Error, Result, SequenceError};
pub use hydration::{ColorTag, HydrationClassifier, HydrationState};
pub use intake::{ImpactSummary, IntakeAssessment, IntakeClassifier, MessageTier};
pub use screens::{GoalForm, HydrationRenderModel, ReasonPicker, ScreenCopy, ScreenModel};
pub use sequencer::{OnboardingStep, StepSequencer};
